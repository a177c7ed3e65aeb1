//! [`SurfaceHost`] backed by wry child webviews inside one winit window.

mod handlers;
mod shell;
mod surface;

use std::path::PathBuf;
use std::sync::Arc;

use shoal_common::{Rect, ServerId, SurfaceError, Viewport};
use tracing::debug;
use winit::window::Window;
use wry::{WebContext, WebViewBuilder};

use crate::bounds::rect_to_wry;
use crate::device_script::device_restriction_script;
use crate::events::{EventSink, ViewSource};
use crate::host::{SurfaceHost, SurfaceParams};

pub use handlers::{is_navigation_allowed, ALLOWED_NAV_PREFIXES};
pub use shell::{ShellOptions, ShellView};
pub use surface::ServerSurface;

/// Settings applied to every server surface.
#[derive(Debug, Clone, Default)]
pub struct WryHostOptions {
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// Root under which each server gets its own engine profile. `None`
    /// shares the default profile.
    pub data_root: Option<PathBuf>,
}

/// Creates server webviews as children of the main window.
pub struct WryHost {
    window: Arc<Window>,
    options: WryHostOptions,
    events: EventSink,
}

impl WryHost {
    pub fn new(window: Arc<Window>, options: WryHostOptions, events: EventSink) -> Self {
        Self {
            window,
            options,
            events,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn data_dir(&self, id: &ServerId) -> Result<Option<PathBuf>, SurfaceError> {
        let Some(root) = &self.options.data_root else {
            return Ok(None);
        };
        shoal_platform::paths::prepare_server_data_dir(root, id)
            .map(Some)
            .map_err(|e| SurfaceError::Creation {
                id: id.clone(),
                reason: e.to_string(),
            })
    }
}

fn host_error(op: &str, id: &ServerId, e: wry::Error) -> SurfaceError {
    SurfaceError::Host(format!("{op} failed for {id}: {e}"))
}

impl SurfaceHost for WryHost {
    type Surface = ServerSurface;

    fn viewport(&self) -> Viewport {
        let size = self.window.inner_size();
        Viewport::new(size.width, size.height, self.window.scale_factor())
    }

    fn create_surface(&mut self, params: SurfaceParams<'_>) -> Result<ServerSurface, SurfaceError> {
        let id = params.id.clone();
        let source = ViewSource::Server(id.clone());
        let mut context = WebContext::new(self.data_dir(&id)?);

        let mut builder = WebViewBuilder::with_web_context(&mut context)
            .with_bounds(rect_to_wry(&params.bounds))
            .with_url(params.address)
            .with_devtools(self.options.devtools)
            .with_clipboard(true)
            .with_autoplay(true)
            .with_focused(false);

        if let Some(script) = device_restriction_script(params.devices) {
            builder = builder.with_initialization_script(&script);
        }
        if let Some(ua) = &self.options.user_agent {
            builder = builder.with_user_agent(ua);
        }
        builder = handlers::attach_page_load_handler(builder, self.events.clone(), source.clone());
        builder = handlers::attach_title_handler(builder, self.events.clone(), source);

        let webview = builder
            .build_as_child(self.window.as_ref())
            .map_err(|e| SurfaceError::Creation {
                id: id.clone(),
                reason: e.to_string(),
            })?;

        debug!(server_id = %id, address = %params.address, "server webview created");
        Ok(ServerSurface {
            id,
            webview,
            _context: context,
        })
    }

    fn confirm_surface(&self, surface: &ServerSurface) -> Result<(), SurfaceError> {
        surface
            .webview
            .bounds()
            .map(|_| ())
            .map_err(|_| SurfaceError::NotConfirmed(surface.id.clone()))
    }

    fn set_bounds(&self, surface: &ServerSurface, bounds: Rect) -> Result<(), SurfaceError> {
        surface
            .webview
            .set_bounds(rect_to_wry(&bounds))
            .map_err(|e| host_error("set_bounds", &surface.id, e))
    }

    fn set_visible(&self, surface: &ServerSurface, visible: bool) -> Result<(), SurfaceError> {
        surface
            .webview
            .set_visible(visible)
            .map_err(|e| host_error("set_visible", &surface.id, e))
    }

    fn focus(&self, surface: &ServerSurface) -> Result<(), SurfaceError> {
        surface
            .webview
            .focus()
            .map_err(|e| host_error("focus", &surface.id, e))
    }

    fn reload(&self, surface: &ServerSurface) -> Result<(), SurfaceError> {
        surface
            .webview
            .evaluate_script("window.location.reload()")
            .map_err(|e| host_error("reload", &surface.id, e))
    }

    fn close(&mut self, surface: ServerSurface) -> Result<(), SurfaceError> {
        debug!(server_id = %surface.id, "server webview closed");
        drop(surface);
        Ok(())
    }
}
