use super::*;
use crate::test_utils::{FakeHost, HostCall};
use shoal_common::Viewport;

fn id(s: &str) -> ServerId {
    ServerId::from(s)
}

fn registry() -> SurfaceRegistry<FakeHost> {
    SurfaceRegistry::new(FakeHost::new(), ChromeLayout::default())
}

fn create(reg: &mut SurfaceRegistry<FakeHost>, s: &str) {
    reg.create(&id(s), &format!("https://{s}.example.com"), &DevicePreferences::default())
        .unwrap();
}

#[test]
fn create_registers_after_confirmation() {
    let mut reg = registry();
    create(&mut reg, "a");

    assert!(reg.contains(&id("a")));
    assert!(reg.is_shown(&id("a")));
    let calls = reg.host().calls();
    assert!(matches!(calls[0], HostCall::Create { .. }));
    assert_eq!(calls[1], HostCall::Confirm(id("a")));
}

#[test]
fn create_passes_content_bounds() {
    let mut reg = registry();
    reg.host_mut().viewport = Viewport::new(2000, 1000, 2.0);
    assert_eq!(
        reg.bounds(),
        Rect {
            x: 72.0,
            y: 36.0,
            width: 928.0,
            height: 464.0
        }
    );
}

#[test]
fn create_failure_leaves_registry_unchanged() {
    let mut reg = registry();
    reg.host_mut().fail_create.insert(id("a"));

    let err = reg
        .create(&id("a"), "https://a.example.com", &DevicePreferences::default())
        .unwrap_err();
    assert!(matches!(err, SurfaceError::Creation { .. }));
    assert!(!reg.contains(&id("a")));
}

#[test]
fn unconfirmed_surface_is_closed_and_not_registered() {
    let mut reg = registry();
    reg.host_mut().fail_confirm.insert(id("a"));

    let err = reg
        .create(&id("a"), "https://a.example.com", &DevicePreferences::default())
        .unwrap_err();
    assert!(matches!(err, SurfaceError::NotConfirmed(_)));
    assert!(reg.is_empty());
    assert_eq!(reg.host().live_count(&id("a")), 0);
    assert!(reg.host().calls().contains(&HostCall::Close(id("a"))));
}

#[test]
fn recreate_never_leaves_two_live_surfaces() {
    let mut reg = registry();
    for _ in 0..4 {
        create(&mut reg, "a");
        assert_eq!(reg.host().live_count(&id("a")), 1);
    }
    create(&mut reg, "b");
    reg.destroy(&id("a"));
    create(&mut reg, "a");
    assert_eq!(reg.host().live_count(&id("a")), 1);
    assert_eq!(reg.host().live_count(&id("b")), 1);
    assert_eq!(reg.len(), 2);
}

#[test]
fn recreate_destroys_old_before_creating_new() {
    let mut reg = registry();
    create(&mut reg, "a");
    reg.host().clear_calls();
    create(&mut reg, "a");

    let calls = reg.host().calls();
    assert_eq!(calls[0], HostCall::Close(id("a")));
    assert!(matches!(calls[1], HostCall::Create { .. }));
}

#[test]
fn show_hides_every_other_surface() {
    let mut reg = registry();
    create(&mut reg, "a");
    create(&mut reg, "b");
    create(&mut reg, "c");

    reg.show(&id("b")).unwrap();
    assert_eq!(reg.shown_ids(), vec![id("b")]);
    assert_eq!(reg.host().visible_ids(), vec![id("b")]);
    assert!(reg.host().calls().contains(&HostCall::Focus(id("b"))));
}

#[test]
fn show_repositions_target() {
    let mut reg = registry();
    create(&mut reg, "a");
    reg.host_mut().viewport = Viewport::new(1000, 600, 1.0);
    reg.host().clear_calls();

    reg.show(&id("a")).unwrap();
    assert!(reg.host().calls().contains(&HostCall::SetBounds(
        id("a"),
        Rect {
            x: 72.0,
            y: 36.0,
            width: 928.0,
            height: 564.0
        }
    )));
}

#[test]
fn show_unknown_id_is_noop() {
    let mut reg = registry();
    create(&mut reg, "a");
    reg.host().clear_calls();

    reg.show(&id("missing")).unwrap();
    assert!(reg.host().calls().is_empty());
    assert!(reg.is_shown(&id("a")));
}

#[test]
fn show_still_shows_target_when_sibling_hide_fails() {
    let mut reg = registry();
    create(&mut reg, "a");
    create(&mut reg, "b");
    reg.host_mut().fail_hide.insert(id("a"));

    reg.show(&id("b")).unwrap();
    assert!(reg.is_shown(&id("b")));
    assert!(reg.host().is_visible(&id("b")));
}

#[test]
fn hide_all_continues_past_failures() {
    let mut reg = registry();
    create(&mut reg, "a");
    create(&mut reg, "b");
    create(&mut reg, "c");
    reg.host_mut().fail_hide.insert(id("b"));

    reg.hide_all();
    assert!(!reg.host().is_visible(&id("a")));
    assert!(!reg.host().is_visible(&id("c")));
    assert!(reg.is_shown(&id("b")));
}

#[test]
fn hide_all_is_idempotent() {
    let mut reg = registry();
    create(&mut reg, "a");
    create(&mut reg, "b");
    reg.show(&id("a")).unwrap();

    reg.hide_all();
    let once = (reg.shown_ids(), reg.host().visible_ids(), reg.ids());
    reg.hide_all();
    let twice = (reg.shown_ids(), reg.host().visible_ids(), reg.ids());
    assert_eq!(once, twice);
    assert!(once.0.is_empty());
}

#[test]
fn destroy_removes_even_when_close_fails() {
    let mut reg = registry();
    create(&mut reg, "a");
    reg.host_mut().fail_close.insert(id("a"));

    assert!(reg.destroy(&id("a")));
    assert!(!reg.contains(&id("a")));
    assert!(!reg.destroy(&id("a")));
}

#[test]
fn resize_applies_one_bounds_to_all() {
    let mut reg = registry();
    create(&mut reg, "a");
    create(&mut reg, "b");
    reg.host_mut().viewport = Viewport::new(900, 700, 1.0);
    reg.host().clear_calls();

    reg.resize_all();
    let expected = Rect {
        x: 72.0,
        y: 36.0,
        width: 828.0,
        height: 664.0,
    };
    let calls = reg.host().calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.contains(&HostCall::SetBounds(id("a"), expected)));
    assert!(calls.contains(&HostCall::SetBounds(id("b"), expected)));
}

#[test]
fn reload_keeps_handle() {
    let mut reg = registry();
    create(&mut reg, "a");
    reg.host().clear_calls();

    reg.reload(&id("a")).unwrap();
    assert_eq!(reg.host().calls(), vec![HostCall::Reload(id("a"))]);
    assert_eq!(reg.host().live_count(&id("a")), 1);
}

#[test]
fn reload_unknown_id_is_noop() {
    let mut reg = registry();
    reg.reload(&id("ghost")).unwrap();
    assert!(reg.host().calls().is_empty());
}

#[test]
fn destroy_all_empties_registry() {
    let mut reg = registry();
    create(&mut reg, "a");
    create(&mut reg, "b");
    reg.destroy_all();
    assert!(reg.is_empty());
    assert_eq!(reg.host().live_total(), 0);
}
