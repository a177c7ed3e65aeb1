//! Window creation, shell view and server surface host setup.

use std::path::PathBuf;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use shoal_config::schema::StartupMode;
use shoal_shell::LifecycleController;
use shoal_webview::{
    ChromeLayout, ContentProvider, ShellOptions, ShellView, SurfaceRegistry, WryHost,
    WryHostOptions,
};

use super::core::ShoalApp;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Relative path to an on-disk copy of the shell assets. When missing, the
/// page compiled into the binary is served.
const SHELL_ASSETS_DIR: &str = "assets/shell";

// =============================================================================
// INITIALIZATION
// =============================================================================

impl ShoalApp {
    /// Create the window, the shell view and the surface host.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let wc = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(wc.width as f64, wc.height as f64))
            .with_decorations(wc.decorations)
            .with_maximized(wc.startup_mode == StartupMode::Maximized);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        // The shell view goes in first so server surfaces stack above it.
        if !self.initialize_shell(&window) {
            return false;
        }
        self.initialize_surfaces(window.clone());

        self.window = Some(window);
        tracing::info!("Window created and webviews initialized");
        true
    }

    fn initialize_shell(&mut self, window: &Window) -> bool {
        let options = ShellOptions {
            devtools: self.config.webview.devtools,
        };
        match ShellView::create(window, shell_content(), &options, self.events.clone()) {
            Ok(shell) => {
                if let Err(e) = shell.focus() {
                    tracing::debug!(error = %e, "Shell view did not take focus");
                }
                self.shell = Some(shell);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create shell view");
                false
            }
        }
    }

    fn initialize_surfaces(&mut self, window: Arc<Window>) {
        let webview = &self.config.webview;
        let data_root = if webview.isolate_server_data {
            self.data_root.clone()
        } else {
            None
        };
        let options = WryHostOptions {
            devtools: webview.devtools,
            user_agent: webview.user_agent.clone(),
            data_root,
        };

        let layout = ChromeLayout {
            titlebar_height: self.config.layout.titlebar_height as f64,
            sidebar_width: self.config.layout.sidebar_width as f64,
        };
        let host = WryHost::new(window, options, self.events.clone());
        self.lifecycle = Some(LifecycleController::new(SurfaceRegistry::new(host, layout)));
        tracing::info!(
            titlebar = layout.titlebar_height,
            sidebar = layout.sidebar_width,
            "Surface registry initialized"
        );
    }
}

fn shell_content() -> ContentProvider {
    let assets = std::env::current_dir()
        .map(|cwd| cwd.join(SHELL_ASSETS_DIR))
        .unwrap_or_else(|_| PathBuf::from(SHELL_ASSETS_DIR));

    if assets.is_dir() {
        tracing::info!(path = %assets.display(), "Serving shell assets from disk");
        ContentProvider::new(assets)
    } else {
        tracing::debug!("Serving bundled shell page");
        ContentProvider::bundled()
    }
}
