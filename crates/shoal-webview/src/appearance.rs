//! Shell colours: validation and delivery to the shell view.
//!
//! Appearance values come from the shell itself and from the store file, so
//! every value is checked before it reaches a style property.

use serde_json::json;
use shoal_common::Appearance;

/// Accept `#rgb`, `#rrggbb` or `#rrggbbaa` only.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Empty CSS color value".to_string());
    }

    let hex = trimmed
        .strip_prefix('#')
        .ok_or_else(|| format!("Invalid CSS color: only hex (#rrggbb) allowed, got '{trimmed}'"))?;

    if !matches!(hex.len(), 3 | 6 | 8) {
        return Err(format!(
            "Invalid hex color length: expected 3/6/8 digits, got {} in '{trimmed}'",
            hex.len()
        ));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color: non-hex character in '{trimmed}'"));
    }
    Ok(())
}

/// Validated CSS custom properties for `appearance`.
///
/// Rejected values are dropped with a warning.
pub fn css_variables(appearance: &Appearance) -> Vec<(&'static str, String)> {
    appearance
        .css_variables()
        .into_iter()
        .filter(|(name, value)| match validate_css_color(value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(name, value, error = %e, "appearance variable rejected");
                false
            }
        })
        .collect()
}

/// Script that applies `appearance` to the page's root element.
pub fn css_injection_js(appearance: &Appearance) -> String {
    let mut js = String::from("(function() {\n  var s = document.documentElement.style;\n");
    for (name, value) in css_variables(appearance) {
        // Both sides are validated hex/ident strings; no escaping needed.
        js.push_str(&format!("  s.setProperty('{name}', '{value}');\n"));
    }
    js.push_str("})();");
    js
}

/// `appearance` IPC payload: the stored record plus the derived variables.
pub fn appearance_payload(appearance: &Appearance) -> serde_json::Value {
    let variables: serde_json::Map<String, serde_json::Value> = css_variables(appearance)
        .into_iter()
        .map(|(name, value)| (name.to_string(), serde_json::Value::String(value)))
        .collect();
    json!({ "record": appearance, "variables": variables })
}
