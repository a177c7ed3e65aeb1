use super::*;
use shoal_common::{Appearance, DevicePreferences, Server, ServerId};

fn server(id: &str, name: &str) -> Server {
    Server {
        id: ServerId::from(id),
        name: name.into(),
        url: format!("https://{id}.example.com"),
        icon_letter: shoal_common::types::display_letter(name),
        icon_color: shoal_common::types::palette_color(0).into(),
        icon_url: None,
        keep_loaded: None,
        invite_url: None,
    }
}

#[test]
fn missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(&dir.path().join("store.json")).unwrap();
    let servers: Option<Vec<Server>> = store.get(StoreKey::Servers).unwrap();
    assert!(servers.is_none());
}

#[test]
fn set_writes_through_and_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shoal").join("store.json");

    let mut store = JsonStore::open(&path).unwrap();
    store
        .set(StoreKey::Servers, &vec![server("a", "Alpha"), server("b", "beta")])
        .unwrap();
    store
        .set(
            StoreKey::Devices,
            &DevicePreferences {
                mic_id: Some("USB Mic".into()),
                ..Default::default()
            },
        )
        .unwrap();

    let reopened = JsonStore::open(&path).unwrap();
    let servers: Vec<Server> = reopened.get(StoreKey::Servers).unwrap().unwrap();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[1].icon_letter, "B");
    let devices: DevicePreferences = reopened.get(StoreKey::Devices).unwrap().unwrap();
    assert_eq!(devices.mic_id.as_deref(), Some("USB Mic"));
}

#[test]
fn invite_address_is_never_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut s = server("a", "Alpha");
    s.invite_url = Some("https://a.example.com?invite=abc".into());
    let mut store = JsonStore::open(&path).unwrap();
    store.set(StoreKey::Servers, &vec![s]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("invite"));
}

#[test]
fn corrupt_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(JsonStore::open(&path), Err(StoreError::Read(_))));

    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(JsonStore::open(&path), Err(StoreError::Read(_))));
}

#[test]
fn wrong_shape_is_a_deserialize_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"servers": "nope", "appearance": null}"#).unwrap();

    let store = JsonStore::open(&path).unwrap();
    let servers: Result<Option<Vec<Server>>, _> = store.get(StoreKey::Servers);
    assert!(matches!(
        servers,
        Err(StoreError::Deserialize { ref key, .. }) if key == "servers"
    ));
    let appearance: Option<Appearance> = store.get(StoreKey::Appearance).unwrap();
    assert!(appearance.is_none());
}

#[test]
fn set_preserves_unrelated_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"futureKey": 7}"#).unwrap();

    let mut store = JsonStore::open(&path).unwrap();
    store.set(StoreKey::Appearance, &Appearance::default()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("futureKey"));
    assert!(text.contains("accentColor"));
}

#[test]
fn empty_store_keeps_path() {
    let path = std::path::PathBuf::from("/tmp/shoal-store-test.json");
    assert_eq!(JsonStore::empty(&path).path(), path.as_path());
}
