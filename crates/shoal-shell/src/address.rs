//! Server address normalisation.

use url::Url;

/// Query parameter carrying a one-time invite code.
pub const INVITE_PARAM: &str = "invite";

/// Trim and prefix `https://` unless the address already names http(s).
pub fn normalize_address(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// A user-entered address split into what is persisted and what is loaded
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    /// Address stored on the server, without any invite parameter.
    pub base: String,
    /// The full normalised address, present only when it carried an invite.
    pub invite: Option<String>,
}

impl ServerAddress {
    /// Address for the very first load.
    pub fn first_load(&self) -> &str {
        self.invite.as_deref().unwrap_or(&self.base)
    }
}

/// Normalise `raw` and separate a one-time invite.
///
/// When the address has an `invite` query parameter the whole query is
/// dropped from the base address and a trailing slash removed. Addresses
/// that do not parse are kept as normalised text.
pub fn parse_server_address(raw: &str) -> ServerAddress {
    let normalized = normalize_address(raw);
    let Ok(mut parsed) = Url::parse(&normalized) else {
        return ServerAddress {
            base: normalized,
            invite: None,
        };
    };

    if !parsed.query_pairs().any(|(key, _)| key == INVITE_PARAM) {
        return ServerAddress {
            base: normalized,
            invite: None,
        };
    }

    parsed.set_query(None);
    let base = parsed.as_str().trim_end_matches('/').to_string();
    ServerAddress {
        base,
        invite: Some(normalized),
    }
}
