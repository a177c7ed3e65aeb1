/// Identifiers shown first in a combination.
pub const MODIFIER_IDENTIFIERS: [&str; 4] = ["Control", "Shift", "Alt", "Meta"];

const IDENTIFIER_TOKENS: &[(&str, &str)] = &[
    ("Control", "ctrl"),
    ("Shift", "shift"),
    ("Alt", "alt"),
    ("Meta", "super"),
    (" ", "space"),
    ("Enter", "enter"),
    ("Escape", "escape"),
    ("Backspace", "backspace"),
    ("Delete", "delete"),
    ("Tab", "tab"),
    ("Insert", "insert"),
    ("Home", "home"),
    ("End", "end"),
    ("PageUp", "pageup"),
    ("PageDown", "pagedown"),
    ("ArrowUp", "arrowup"),
    ("ArrowDown", "arrowdown"),
    ("ArrowLeft", "arrowleft"),
    ("ArrowRight", "arrowright"),
    ("CapsLock", "capslock"),
    ("PrintScreen", "print"),
    ("ScrollLock", "scrolllock"),
    ("Pause", "pause"),
    ("NumLock", "numlock"),
    ("MouseMiddle", "mouse3"),
    ("MouseRight", "mouse2"),
    ("Mouse4", "mouse4"),
    ("Mouse5", "mouse5"),
];

/// Host token for a UI identifier. Unlisted identifiers (letters, digits,
/// `F1`..`F12`) lowercase.
pub fn identifier_to_token(identifier: &str) -> String {
    IDENTIFIER_TOKENS
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, token)| (*token).to_string())
        .unwrap_or_else(|| identifier.to_lowercase())
}

pub fn is_modifier(identifier: &str) -> bool {
    MODIFIER_IDENTIFIERS.contains(&identifier)
}

/// Single-character identifiers compare case-insensitively: holding Shift
/// turns `v` into `V` in the browser.
pub fn canonical_identifier(identifier: &str) -> String {
    if identifier.chars().count() == 1 {
        identifier.to_lowercase()
    } else {
        identifier.to_string()
    }
}

/// Modifiers first, then everything else, each group in recorded order.
/// Duplicates (after case folding) keep their first occurrence.
pub fn order_keys(keys: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let unique: Vec<&String> = keys
        .iter()
        .filter(|k| seen.insert(canonical_identifier(k)))
        .collect();

    let (mods, main): (Vec<&String>, Vec<&String>) =
        unique.into_iter().partition(|k| is_modifier(k));
    mods.into_iter().chain(main).cloned().collect()
}
