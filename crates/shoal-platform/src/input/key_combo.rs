use winit::keyboard::KeyCode;

/// Pointer buttons a combination may include. The primary button is never
/// allowed since it would fire on every click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Right,
    Middle,
    Back,
    Forward,
}

/// One physical input the global poller watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComboInput {
    Key(KeyCode),
    Pointer(PointerButton),
}

/// Resolve a host token to a physical input.
///
/// Case-insensitive. Accepts the short tokens the UI emits plus common
/// aliases (`lctrl`, `controlright`, `esc`, `mouseright`, ...). Single
/// characters resolve by US keyboard position.
pub fn token_to_input(token: &str) -> Option<ComboInput> {
    use ComboInput::{Key, Pointer};

    let t = token.trim().to_ascii_lowercase();
    let input = match t.as_str() {
        "ctrl" | "control" | "lctrl" | "lcontrol" | "controlleft" => Key(KeyCode::ControlLeft),
        "rctrl" | "rcontrol" | "controlright" => Key(KeyCode::ControlRight),
        "shift" | "lshift" | "shiftleft" => Key(KeyCode::ShiftLeft),
        "rshift" | "shiftright" => Key(KeyCode::ShiftRight),
        "alt" | "lalt" | "altleft" | "menu" => Key(KeyCode::AltLeft),
        "ralt" | "altright" | "altgr" => Key(KeyCode::AltRight),
        "super" | "meta" | "win" | "metaleft" | "osleft" => Key(KeyCode::SuperLeft),
        "metaright" | "osright" => Key(KeyCode::SuperRight),

        "space" => Key(KeyCode::Space),
        "enter" | "return" => Key(KeyCode::Enter),
        "numpadenter" => Key(KeyCode::NumpadEnter),
        "escape" | "esc" => Key(KeyCode::Escape),
        "backspace" => Key(KeyCode::Backspace),
        "tab" => Key(KeyCode::Tab),
        "delete" | "del" => Key(KeyCode::Delete),
        "insert" | "ins" => Key(KeyCode::Insert),
        "home" => Key(KeyCode::Home),
        "end" => Key(KeyCode::End),
        "pageup" => Key(KeyCode::PageUp),
        "pagedown" => Key(KeyCode::PageDown),
        "arrowup" | "up" => Key(KeyCode::ArrowUp),
        "arrowdown" | "down" => Key(KeyCode::ArrowDown),
        "arrowleft" | "left" => Key(KeyCode::ArrowLeft),
        "arrowright" | "right" => Key(KeyCode::ArrowRight),
        "capslock" => Key(KeyCode::CapsLock),

        "f1" => Key(KeyCode::F1),
        "f2" => Key(KeyCode::F2),
        "f3" => Key(KeyCode::F3),
        "f4" => Key(KeyCode::F4),
        "f5" => Key(KeyCode::F5),
        "f6" => Key(KeyCode::F6),
        "f7" => Key(KeyCode::F7),
        "f8" => Key(KeyCode::F8),
        "f9" => Key(KeyCode::F9),
        "f10" => Key(KeyCode::F10),
        "f11" => Key(KeyCode::F11),
        "f12" => Key(KeyCode::F12),

        "print" | "printscreen" => Key(KeyCode::PrintScreen),
        "scrolllock" => Key(KeyCode::ScrollLock),
        "pause" => Key(KeyCode::Pause),
        "numlock" => Key(KeyCode::NumLock),

        "mouse2" | "mouseright" | "rightbutton" => Pointer(PointerButton::Right),
        "mouse3" | "mousemiddle" | "middlebutton" => Pointer(PointerButton::Middle),
        "mouse4" | "xbutton1" => Pointer(PointerButton::Back),
        "mouse5" | "xbutton2" => Pointer(PointerButton::Forward),

        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key(char_to_key_code(c)?),
                _ => return None,
            }
        }
    };
    Some(input)
}

fn char_to_key_code(c: char) -> Option<KeyCode> {
    const LETTERS: [KeyCode; 26] = [
        KeyCode::KeyA,
        KeyCode::KeyB,
        KeyCode::KeyC,
        KeyCode::KeyD,
        KeyCode::KeyE,
        KeyCode::KeyF,
        KeyCode::KeyG,
        KeyCode::KeyH,
        KeyCode::KeyI,
        KeyCode::KeyJ,
        KeyCode::KeyK,
        KeyCode::KeyL,
        KeyCode::KeyM,
        KeyCode::KeyN,
        KeyCode::KeyO,
        KeyCode::KeyP,
        KeyCode::KeyQ,
        KeyCode::KeyR,
        KeyCode::KeyS,
        KeyCode::KeyT,
        KeyCode::KeyU,
        KeyCode::KeyV,
        KeyCode::KeyW,
        KeyCode::KeyX,
        KeyCode::KeyY,
        KeyCode::KeyZ,
    ];
    const DIGITS: [KeyCode; 10] = [
        KeyCode::Digit0,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];

    let code = match c {
        'a'..='z' => LETTERS[(c as u8 - b'a') as usize],
        '0'..='9' => DIGITS[(c as u8 - b'0') as usize],
        '.' => KeyCode::Period,
        ',' => KeyCode::Comma,
        '/' => KeyCode::Slash,
        '\\' => KeyCode::Backslash,
        ';' => KeyCode::Semicolon,
        '\'' => KeyCode::Quote,
        '[' => KeyCode::BracketLeft,
        ']' => KeyCode::BracketRight,
        '-' => KeyCode::Minus,
        '=' => KeyCode::Equal,
        '`' => KeyCode::Backquote,
        _ => return None,
    };
    Some(code)
}
