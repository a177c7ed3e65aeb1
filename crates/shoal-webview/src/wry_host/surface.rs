use shoal_common::ServerId;
use wry::{WebContext, WebView};

/// A live server webview.
///
/// The web context is held alongside the webview so the profile stays
/// open for as long as the page does.
pub struct ServerSurface {
    pub(super) id: ServerId,
    pub(super) webview: WebView,
    pub(super) _context: WebContext,
}

impl ServerSurface {
    pub fn id(&self) -> &ServerId {
        &self.id
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

impl std::fmt::Debug for ServerSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSurface").field("id", &self.id).finish()
    }
}
