//! Events raised by wry callbacks, drained by the main loop.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use shoal_common::ServerId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Which webview an event came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSource {
    /// The full-window shell UI.
    Shell,
    /// A server surface.
    Server(ServerId),
}

/// Events emitted by webviews.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        source: ViewSource,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { source: ViewSource, title: String },
    /// A JSON message posted by the shell view.
    ShellIpc { body: String },
    /// The shell view tried to leave the allowlist.
    NavigationBlocked { url: String },
}

/// Shared queue that wry callbacks push into.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    inner: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: WebViewEvent) {
        match self.inner.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }

    /// Drain all pending events.
    pub fn drain(&self) -> Vec<WebViewEvent> {
        match self.inner.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}
