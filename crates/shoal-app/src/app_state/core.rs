//! ShoalApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use shoal_config::{JsonStore, ShoalConfig};
use shoal_platform::GlobalKeyPoller;
use shoal_shell::{LifecycleController, PttController, ShellState};
use shoal_webview::{EventSink, ShellView, WryHost};

/// Top-level application state.
pub struct ShoalApp {
    pub(super) config: ShoalConfig,
    pub(super) store: JsonStore,
    pub(super) data_root: Option<PathBuf>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) shell: Option<ShellView>,

    // Server surfaces, created once the window exists
    pub(super) lifecycle: Option<LifecycleController<WryHost>>,

    // Shared by the shell view and every server surface
    pub(super) events: EventSink,

    pub(super) state: ShellState,
    pub(super) ptt: PttController<GlobalKeyPoller>,

    // Whether device events are currently delivered to the poller
    pub(super) listening_devices: bool,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ShoalApp {
    /// Build the app and load persisted state from `store`.
    pub fn new(config: ShoalConfig, store: JsonStore, data_root: Option<PathBuf>) -> Self {
        let listen_globally = config.ptt.listen_globally;
        let mut app = Self {
            config,
            store,
            data_root,
            window: None,
            shell: None,
            lifecycle: None,
            events: EventSink::new(),
            state: ShellState::new(),
            ptt: PttController::new(Default::default(), GlobalKeyPoller::new(), listen_globally),
            listening_devices: false,
            should_exit: false,
            last_poll: Instant::now(),
        };
        app.load_persisted();
        app
    }
}
