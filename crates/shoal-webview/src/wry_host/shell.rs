use std::borrow::Cow;
use std::sync::Arc;

use shoal_common::Rect;
use tracing::{debug, warn};
use winit::window::Window;
use wry::http::Response;
use wry::{WebView, WebViewBuilder};

use crate::bounds::rect_to_wry;
use crate::content::{request_path, ContentProvider, SHELL_SCHEME, SHELL_URL};
use crate::events::{EventSink, ViewSource};
use crate::ipc::{js_dispatch_message, IPC_INIT_SCRIPT};

use super::handlers;

/// Settings for the shell view.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    pub devtools: bool,
}

/// The full-window webview that renders the sidebar, home and settings.
///
/// Created before any server surface, so server surfaces stack above it.
pub struct ShellView {
    webview: WebView,
}

impl ShellView {
    pub fn create(
        window: &Window,
        content: ContentProvider,
        options: &ShellOptions,
        events: EventSink,
    ) -> Result<Self, wry::Error> {
        let content = Arc::new(content);
        let mut builder = WebViewBuilder::new()
            .with_bounds(rect_to_wry(&full_window(window)))
            .with_devtools(options.devtools)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_custom_protocol(SHELL_SCHEME.to_string(), move |_wv_id, request| {
                serve(&content, &request.uri().to_string())
            })
            .with_url(SHELL_URL);

        builder = handlers::attach_ipc_handler(builder, events.clone());
        builder = handlers::attach_page_load_handler(builder, events.clone(), ViewSource::Shell);
        builder = handlers::attach_shell_navigation_handler(builder, events);

        let webview = builder.build_as_child(window)?;
        debug!(url = SHELL_URL, "shell view created");
        Ok(Self { webview })
    }

    /// Send a typed IPC message to the shell's JavaScript.
    pub fn send(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        self.webview
            .evaluate_script(&js_dispatch_message(kind, payload))
    }

    /// Execute JavaScript in the shell context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Stretch the shell over the whole window.
    pub fn fit_to(&self, window: &Window) -> Result<(), wry::Error> {
        self.webview.set_bounds(rect_to_wry(&full_window(window)))
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}

fn full_window(window: &Window) -> Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Rect {
        x: 0.0,
        y: 0.0,
        width: size.width,
        height: size.height,
    }
}

fn serve(content: &ContentProvider, uri: &str) -> Response<Cow<'static, [u8]>> {
    let path = request_path(uri);
    match content.resolve(path) {
        Some((mime, data)) => respond(200, &mime, data.into_owned()),
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            respond(404, "text/plain", b"Not Found".to_vec())
        }
    }
}

fn respond(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", "shoal://localhost")
        .body(Cow::from(body))
        .unwrap_or_else(|e| {
            warn!(error = %e, "custom protocol: malformed response");
            Response::new(Cow::Borrowed(&[][..]))
        })
}
