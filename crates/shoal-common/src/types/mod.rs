mod appearance;
mod color;
mod core;
mod devices;
mod server;

pub use self::core::*;
pub use appearance::*;
pub use color::*;
pub use devices::*;
pub use server::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn server(keep_loaded: Option<bool>) -> Server {
        Server {
            id: ServerId::from("s1"),
            name: "Demo".into(),
            url: "https://demo.example.com".into(),
            icon_letter: "D".into(),
            icon_color: "#5865f2".into(),
            icon_url: None,
            keep_loaded,
            invite_url: None,
        }
    }

    #[test]
    fn rect_default_is_zero() {
        let r = Rect::default();
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }

    #[test]
    fn server_id_display_is_raw_id() {
        assert_eq!(ServerId::from("abc-123").to_string(), "abc-123");
    }

    #[test]
    fn server_id_serializes_transparently() {
        let json = serde_json::to_string(&ServerId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }

    #[test]
    fn active_view_string_forms() {
        assert_eq!(ActiveView::from("home".to_string()), ActiveView::Home);
        assert_eq!(ActiveView::from("settings".to_string()), ActiveView::Settings);
        assert_eq!(
            ActiveView::from("xyz".to_string()),
            ActiveView::Server(ServerId::from("xyz"))
        );
        assert_eq!(String::from(ActiveView::Settings), "settings");
    }

    #[test]
    fn active_view_json_is_plain_string() {
        let view = ActiveView::Server(ServerId::from("srv"));
        assert_eq!(serde_json::to_string(&view).unwrap(), "\"srv\"");
        let back: ActiveView = serde_json::from_str("\"home\"").unwrap();
        assert_eq!(back, ActiveView::Home);
    }

    #[test]
    fn active_view_server_id() {
        assert!(ActiveView::Home.server_id().is_none());
        let view = ActiveView::Server(ServerId::from("a"));
        assert_eq!(view.server_id(), Some(&ServerId::from("a")));
    }

    #[test]
    fn keep_loaded_defaults_to_true() {
        assert!(server(None).keep_loaded());
        assert!(server(Some(true)).keep_loaded());
        assert!(!server(Some(false)).keep_loaded());
    }

    #[test]
    fn first_load_address_prefers_invite() {
        let mut s = server(None);
        assert_eq!(s.first_load_address(), "https://demo.example.com");
        s.invite_url = Some("https://demo.example.com?invite=xyz".into());
        assert_eq!(s.first_load_address(), "https://demo.example.com?invite=xyz");
    }

    #[test]
    fn server_json_uses_camel_case_and_skips_invite() {
        let mut s = server(Some(false));
        s.invite_url = Some("https://demo.example.com?invite=xyz".into());
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"iconLetter\":\"D\""));
        assert!(json.contains("\"keepLoaded\":false"));
        assert!(!json.contains("invite"));
        assert!(!json.contains("iconUrl"));
    }

    #[test]
    fn server_json_without_optional_fields_parses() {
        let json = r##"{"id":"s1","name":"Demo","url":"https://demo.example.com","iconLetter":"D","iconColor":"#5865f2"}"##;
        let s: Server = serde_json::from_str(json).unwrap();
        assert_eq!(s.keep_loaded, None);
        assert!(s.keep_loaded());
        assert!(s.invite_url.is_none());
    }

    #[test]
    fn display_letter_rules() {
        assert_eq!(display_letter("  demo"), "D");
        assert_eq!(display_letter("ärger"), "Ä");
        assert_eq!(display_letter("   "), "?");
        assert_eq!(display_letter(""), "?");
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(0), "#5865f2");
        assert_eq!(palette_color(8), "#5865f2");
        assert_eq!(palette_color(3), "#faa61a");
    }

    #[test]
    fn color_hex_parsing() {
        assert_eq!(Color::from_hex("#ff8800"), Some(Color::from_rgb(255, 136, 0)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::from_rgb(0, 255, 0)));
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_darken_clamps() {
        let c = Color::from_rgb(10, 100, 255).darken(20);
        assert_eq!(c, Color::from_rgb(0, 80, 235));
    }

    #[test]
    fn device_preferences_default_is_unrestricted() {
        let prefs = DevicePreferences::default();
        assert!(prefs.is_unrestricted());
        let prefs = DevicePreferences {
            mic_id: Some("USB Mic".into()),
            ..Default::default()
        };
        assert!(!prefs.is_unrestricted());
    }

    #[test]
    fn device_preferences_json_is_camel_case() {
        let prefs: DevicePreferences =
            serde_json::from_str(r#"{"micId":"Headset","speakerId":null}"#).unwrap();
        assert_eq!(prefs.mic_id.as_deref(), Some("Headset"));
        assert!(prefs.cam_id.is_none());
    }

    #[test]
    fn appearance_css_variables_include_derived_shades() {
        let vars = Appearance::default().css_variables();
        let get = |name: &str| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("--accent"), "#4e0073");
        assert_eq!(get("--accent-hover"), "#3a005f");
        assert_eq!(get("--window-bg-secondary"), "#181818");
    }

    #[test]
    fn appearance_invalid_color_falls_back() {
        let appearance = Appearance {
            accent_color: "not-a-color".into(),
            ..Default::default()
        };
        let vars = appearance.css_variables();
        assert!(vars.contains(&("--accent", "#4e0073".to_string())));
    }
}
