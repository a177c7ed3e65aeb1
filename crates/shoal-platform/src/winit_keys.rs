//! Winit input normalization.
//!
//! Converts winit logical keys into the browser key identifiers the
//! push-to-talk combination is recorded in, and raw device button ids into
//! [`PointerButton`]s for the global poller.

use winit::keyboard::{Key, NamedKey};

use crate::input::PointerButton;

/// Browser `KeyboardEvent.key` identifier for a winit logical key.
///
/// Returns `None` for keys a combination can never contain.
pub fn key_identifier(key: &Key) -> Option<String> {
    match key {
        Key::Named(named) => named_identifier(*named).map(str::to_string),
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c.to_string()),
                _ => None,
            }
        }
        _ => None,
    }
}

fn named_identifier(named: NamedKey) -> Option<&'static str> {
    let id = match named {
        NamedKey::Control => "Control",
        NamedKey::Shift => "Shift",
        NamedKey::Alt | NamedKey::AltGraph => "Alt",
        NamedKey::Super | NamedKey::Meta => "Meta",
        NamedKey::Space => " ",
        NamedKey::Enter => "Enter",
        NamedKey::Escape => "Escape",
        NamedKey::Backspace => "Backspace",
        NamedKey::Delete => "Delete",
        NamedKey::Tab => "Tab",
        NamedKey::Insert => "Insert",
        NamedKey::Home => "Home",
        NamedKey::End => "End",
        NamedKey::PageUp => "PageUp",
        NamedKey::PageDown => "PageDown",
        NamedKey::ArrowUp => "ArrowUp",
        NamedKey::ArrowDown => "ArrowDown",
        NamedKey::ArrowLeft => "ArrowLeft",
        NamedKey::ArrowRight => "ArrowRight",
        NamedKey::CapsLock => "CapsLock",
        NamedKey::PrintScreen => "PrintScreen",
        NamedKey::ScrollLock => "ScrollLock",
        NamedKey::Pause => "Pause",
        NamedKey::NumLock => "NumLock",
        NamedKey::F1 => "F1",
        NamedKey::F2 => "F2",
        NamedKey::F3 => "F3",
        NamedKey::F4 => "F4",
        NamedKey::F5 => "F5",
        NamedKey::F6 => "F6",
        NamedKey::F7 => "F7",
        NamedKey::F8 => "F8",
        NamedKey::F9 => "F9",
        NamedKey::F10 => "F10",
        NamedKey::F11 => "F11",
        NamedKey::F12 => "F12",
        _ => return None,
    };
    Some(id)
}

/// Map a raw `DeviceEvent::Button` id to a pointer button.
///
/// Device button numbering differs per backend: X11 and Wayland follow the
/// X button numbers, Windows and macOS count from zero.
pub fn device_button(button: u32) -> Option<PointerButton> {
    #[cfg(any(target_os = "linux", target_os = "freebsd", target_os = "openbsd"))]
    let mapped = match button {
        2 => Some(PointerButton::Middle),
        3 => Some(PointerButton::Right),
        8 => Some(PointerButton::Back),
        9 => Some(PointerButton::Forward),
        _ => None,
    };

    #[cfg(not(any(target_os = "linux", target_os = "freebsd", target_os = "openbsd")))]
    let mapped = match button {
        1 => Some(PointerButton::Right),
        2 => Some(PointerButton::Middle),
        3 => Some(PointerButton::Back),
        4 => Some(PointerButton::Forward),
        _ => None,
    };

    mapped
}

/// Browser identifier recorded for a pointer button in the settings UI.
pub fn pointer_identifier(button: PointerButton) -> &'static str {
    match button {
        PointerButton::Right => "MouseRight",
        PointerButton::Middle => "MouseMiddle",
        PointerButton::Back => "Mouse4",
        PointerButton::Forward => "Mouse5",
    }
}
