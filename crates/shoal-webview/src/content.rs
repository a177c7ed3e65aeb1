//! Local content serving for the `shoal://` custom protocol.
//!
//! The shell UI is loaded from `shoal://localhost/index.html`. Files come
//! from an optional assets directory; the bundled shell page answers for
//! `index.html` when no such file exists on disk.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Scheme registered on the shell view.
pub const SHELL_SCHEME: &str = "shoal";

/// Entry URL of the shell view.
pub const SHELL_URL: &str = "shoal://localhost/index.html";

const BUNDLED_SHELL: &str = include_str!("../assets/shell/index.html");

/// Serves shell assets.
///
/// Resolution order: in-memory overrides, then the assets directory, then
/// the bundled shell page.
pub struct ContentProvider {
    base_dir: Option<PathBuf>,
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// Serve files from `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
            overrides: HashMap::new(),
        }
    }

    /// Serve only the bundled shell page.
    pub fn bundled() -> Self {
        Self {
            base_dir: None,
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory asset override.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(['?', '#']).next().unwrap_or("");
        let clean = clean.trim_start_matches('/');
        let clean = if clean.is_empty() { "index.html" } else { clean };

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        if let Some(found) = self.resolve_file(clean) {
            return Some(found);
        }

        if clean == "index.html" {
            return Some((
                Cow::Borrowed("text/html"),
                Cow::Borrowed(BUNDLED_SHELL.as_bytes()),
            ));
        }
        None
    }

    fn resolve_file(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let base_dir = self.base_dir.as_ref()?;
        let file_path = base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }

    /// The assets directory, if any.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

/// Strip the scheme and host from a custom-protocol request URI.
///
/// WebView2 rewrites `shoal://localhost/x` to `http://shoal.localhost/x`.
pub fn request_path(uri: &str) -> &str {
    uri.strip_prefix("shoal://localhost/")
        .or_else(|| uri.strip_prefix("shoal://localhost"))
        .or_else(|| uri.strip_prefix("http://shoal.localhost/"))
        .or_else(|| uri.strip_prefix("https://shoal.localhost/"))
        .or_else(|| uri.strip_prefix("shoal:///"))
        .or_else(|| uri.strip_prefix("shoal://"))
        .unwrap_or("")
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
