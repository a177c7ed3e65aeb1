use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{EventSink, PageLoadState, ViewSource, WebViewEvent};

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// URL prefixes the shell view may navigate to. Everything else is blocked.
///
/// Server surfaces are not filtered; they belong to the remote application.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "shoal://",
    // WebView2 rewrites shoal://localhost/… to http://shoal.localhost/…
    "http://shoal.localhost",
    "about:blank",
];

/// Check whether a URL is allowed by the shell's navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body().to_string();

        if serde_json::from_str::<serde_json::Value>(&body).is_err() {
            warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
            return;
        }

        debug!(body_len = body.len(), "IPC message from shell");
        events.push(WebViewEvent::ShellIpc { body });
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    source: ViewSource,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(?source, ?state, url = %url, "page load");
        events.push(WebViewEvent::PageLoad {
            source: source.clone(),
            state,
            url,
        });
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    source: ViewSource,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(?source, title = %title, "title changed");
        events.push(WebViewEvent::TitleChanged {
            source: source.clone(),
            title,
        });
    })
}

pub(super) fn attach_shell_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| {
        if !is_navigation_allowed(&url) {
            warn!(url = %url, "shell navigation blocked: URL not in allowlist");
            events.push(WebViewEvent::NavigationBlocked { url });
            return false;
        }
        true
    })
}

// =============================================================================
// TESTS
// =============================================================================
