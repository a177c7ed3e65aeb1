use super::*;
use winit::event::{DeviceEvent, ElementState, RawKeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn key(code: KeyCode, state: ElementState) -> DeviceEvent {
    DeviceEvent::Key(RawKeyEvent {
        physical_key: PhysicalKey::Code(code),
        state,
    })
}

fn armed(tokens: &[&str]) -> GlobalKeyPoller {
    let mut poller = GlobalKeyPoller::new();
    poller.set_combination(&strings(tokens), true).unwrap();
    poller
}

#[test]
fn config_new_orders_and_derives_tokens() {
    let config = PttConfig::new(true, &strings(&["v", "Control"]));
    assert_eq!(config.keys, strings(&["Control", "v"]));
    assert_eq!(config.tokens, strings(&["ctrl", "v"]));
    assert!(config.is_armed());
}

#[test]
fn config_resync_repairs_tokens() {
    let drifted = PttConfig {
        enabled: true,
        keys: strings(&["Mouse4"]),
        tokens: strings(&["f9"]),
    };
    assert_eq!(drifted.resynced().tokens, strings(&["mouse4"]));
}

#[test]
fn config_json_defaults_when_fields_missing() {
    let config: PttConfig = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
    assert!(config.enabled);
    assert!(config.keys.is_empty());
    assert!(!config.is_armed());
}

#[test]
fn pressed_only_when_every_input_is_held() {
    let mut poller = armed(&["ctrl", "v"]);
    poller.handle_device_event(&key(KeyCode::ControlLeft, ElementState::Pressed));
    assert!(poller.take_signals().is_empty());

    poller.handle_device_event(&key(KeyCode::KeyV, ElementState::Pressed));
    assert_eq!(poller.take_signals(), vec![PollerSignal::Pressed]);

    poller.handle_device_event(&key(KeyCode::ControlLeft, ElementState::Released));
    assert_eq!(poller.take_signals(), vec![PollerSignal::Released]);
}

#[test]
fn key_repeat_does_not_duplicate_pressed() {
    let mut poller = armed(&["f9"]);
    poller.handle_device_event(&key(KeyCode::F9, ElementState::Pressed));
    poller.handle_device_event(&key(KeyCode::F9, ElementState::Pressed));
    assert_eq!(poller.take_signals(), vec![PollerSignal::Pressed]);
}

#[test]
fn unwatched_inputs_are_ignored() {
    let mut poller = armed(&["f9"]);
    poller.handle_device_event(&key(KeyCode::KeyA, ElementState::Pressed));
    poller.handle_device_event(&DeviceEvent::MouseMotion { delta: (1.0, 2.0) });
    assert!(poller.take_signals().is_empty());
}

#[test]
fn disabling_while_active_emits_final_release() {
    let mut poller = armed(&["f9"]);
    poller.handle_device_event(&key(KeyCode::F9, ElementState::Pressed));
    poller.take_signals();

    poller.set_combination(&strings(&["f9"]), false).unwrap();
    assert_eq!(poller.take_signals(), vec![PollerSignal::Released]);
    assert!(!poller.is_listening());
}

#[test]
fn changing_combination_resets_held_state() {
    let mut poller = armed(&["f9"]);
    poller.handle_device_event(&key(KeyCode::F9, ElementState::Pressed));
    poller.take_signals();

    poller.set_combination(&strings(&["f10"]), true).unwrap();
    assert_eq!(poller.take_signals(), vec![PollerSignal::Released]);
    poller.handle_device_event(&key(KeyCode::F10, ElementState::Pressed));
    assert_eq!(poller.take_signals(), vec![PollerSignal::Pressed]);
}

#[test]
fn stopped_poller_ignores_everything() {
    let mut poller = GlobalKeyPoller::new();
    assert!(!poller.is_listening());
    poller.handle_device_event(&key(KeyCode::F9, ElementState::Pressed));
    assert!(poller.take_signals().is_empty());
}

#[test]
fn enabling_with_empty_tokens_stops_quietly() {
    let mut poller = GlobalKeyPoller::new();
    assert!(poller.set_combination(&[], true).is_ok());
    assert!(!poller.is_listening());
}

#[test]
fn unrecognisable_tokens_are_an_error() {
    let mut poller = GlobalKeyPoller::new();
    let err = poller
        .set_combination(&strings(&["contextmenu", "é"]), true)
        .unwrap_err();
    assert!(err.to_string().contains("no recognisable keys"));
    assert!(!poller.is_listening());
}

#[test]
fn partially_recognised_tokens_watch_the_known_ones() {
    let mut poller = armed(&["contextmenu", "f9"]);
    assert!(poller.is_listening());
    poller.handle_device_event(&key(KeyCode::F9, ElementState::Pressed));
    assert_eq!(poller.take_signals(), vec![PollerSignal::Pressed]);
}

#[test]
fn pointer_buttons_participate() {
    let mut poller = armed(&["mouse4"]);
    #[cfg(any(target_os = "linux", target_os = "freebsd", target_os = "openbsd"))]
    let back = 8;
    #[cfg(not(any(target_os = "linux", target_os = "freebsd", target_os = "openbsd")))]
    let back = 3;

    poller.handle_device_event(&DeviceEvent::Button {
        button: back,
        state: ElementState::Pressed,
    });
    assert_eq!(poller.take_signals(), vec![PollerSignal::Pressed]);
}
