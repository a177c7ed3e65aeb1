//! Push-to-talk key vocabulary.
//!
//! The settings UI records a combination as browser key identifiers
//! (`KeyboardEvent.key` names plus `MouseMiddle`, `MouseRight`, `Mouse4`,
//! `Mouse5`). The global poller consumes lowercase host tokens, which map to
//! physical inputs through [`token_to_input`].

mod key_combo;
mod vocabulary;

pub use key_combo::{token_to_input, ComboInput, PointerButton};
pub use vocabulary::{
    canonical_identifier, identifier_to_token, is_modifier, order_keys, MODIFIER_IDENTIFIERS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn modifiers_map_to_short_tokens() {
        assert_eq!(identifier_to_token("Control"), "ctrl");
        assert_eq!(identifier_to_token("Shift"), "shift");
        assert_eq!(identifier_to_token("Alt"), "alt");
        assert_eq!(identifier_to_token("Meta"), "super");
    }

    #[test]
    fn named_keys_map_to_tokens() {
        assert_eq!(identifier_to_token(" "), "space");
        assert_eq!(identifier_to_token("PrintScreen"), "print");
        assert_eq!(identifier_to_token("F11"), "f11");
        assert_eq!(identifier_to_token("ArrowLeft"), "arrowleft");
    }

    #[test]
    fn mouse_identifiers_map_to_button_tokens() {
        assert_eq!(identifier_to_token("MouseRight"), "mouse2");
        assert_eq!(identifier_to_token("MouseMiddle"), "mouse3");
        assert_eq!(identifier_to_token("Mouse4"), "mouse4");
        assert_eq!(identifier_to_token("Mouse5"), "mouse5");
    }

    #[test]
    fn unknown_identifiers_lowercase() {
        assert_eq!(identifier_to_token("V"), "v");
        assert_eq!(identifier_to_token("ContextMenu"), "contextmenu");
    }

    #[test]
    fn order_puts_modifiers_first() {
        let ordered = order_keys(&strings(&["v", "Shift", "Mouse4", "Control"]));
        assert_eq!(ordered, strings(&["Shift", "Control", "v", "Mouse4"]));
    }

    #[test]
    fn order_drops_duplicates() {
        let ordered = order_keys(&strings(&["Alt", "x", "Alt", "X"]));
        assert_eq!(ordered, strings(&["Alt", "x"]));
    }

    #[test]
    fn canonical_identifier_folds_single_chars() {
        assert_eq!(canonical_identifier("V"), "v");
        assert_eq!(canonical_identifier("Control"), "Control");
        assert_eq!(canonical_identifier(" "), " ");
    }

    #[test]
    fn tokens_resolve_to_physical_inputs() {
        assert_eq!(token_to_input("ctrl"), Some(ComboInput::Key(KeyCode::ControlLeft)));
        assert_eq!(token_to_input("RShift"), Some(ComboInput::Key(KeyCode::ShiftRight)));
        assert_eq!(token_to_input("space"), Some(ComboInput::Key(KeyCode::Space)));
        assert_eq!(token_to_input("f12"), Some(ComboInput::Key(KeyCode::F12)));
        assert_eq!(token_to_input("v"), Some(ComboInput::Key(KeyCode::KeyV)));
        assert_eq!(token_to_input("7"), Some(ComboInput::Key(KeyCode::Digit7)));
        assert_eq!(token_to_input("`"), Some(ComboInput::Key(KeyCode::Backquote)));
        assert_eq!(
            token_to_input("mouse4"),
            Some(ComboInput::Pointer(PointerButton::Back))
        );
    }

    #[test]
    fn unrecognised_tokens_resolve_to_none() {
        assert_eq!(token_to_input("contextmenu"), None);
        assert_eq!(token_to_input("é"), None);
        assert_eq!(token_to_input(""), None);
    }

    #[test]
    fn every_identifier_token_is_pollable() {
        for id in [
            "Control", "Shift", "Alt", "Meta", " ", "Enter", "Escape", "Backspace", "Delete",
            "Tab", "Insert", "Home", "End", "PageUp", "PageDown", "ArrowUp", "ArrowDown",
            "ArrowLeft", "ArrowRight", "F1", "F5", "F12", "CapsLock", "PrintScreen",
            "ScrollLock", "Pause", "NumLock", "MouseMiddle", "MouseRight", "Mouse4", "Mouse5",
        ] {
            let token = identifier_to_token(id);
            assert!(token_to_input(&token).is_some(), "{id} -> {token} not pollable");
        }
    }
}
