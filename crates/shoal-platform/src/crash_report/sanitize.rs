use regex::Regex;

/// Patterns whose first capture group is kept and the rest redacted.
const PREFIXED: &[&str] = &[
    // Invite codes and credentials carried in server addresses
    r"(?i)([?&](?:invite|token|code|key|auth|session|password)=)[^&\s'\x22]+",
    // user:password@ in URLs
    r"(?i)(https?://)[^/\s:@]+:[^/\s@]+@",
    r"(Bearer )[a-zA-Z0-9._\-]+",
];

/// Redacts secrets a server address or auth header may leak into a panic
/// message, replacing each with `[REDACTED]`.
pub fn sanitize_secrets(input: &str) -> String {
    let mut result = input.to_string();
    for pattern in PREFIXED {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        let replacement = if pattern.contains("https?://") {
            "${1}[REDACTED]@"
        } else {
            "${1}[REDACTED]"
        };
        result = re.replace_all(&result, replacement).into_owned();
    }
    result
}
