//! Server surfaces and the shell view, embedded with wry.
//!
//! - [`SurfaceRegistry`]: the id -> surface ownership table
//! - [`bounds`]: where a surface sits inside the window
//! - [`SurfaceHost`]: the seam between the registry and the compositor,
//!   implemented by [`WryHost`]
//! - [`ShellView`]: the full-window shell UI served over `shoal://`
//! - IPC, device restriction and appearance scripts

pub mod appearance;
pub mod bounds;
pub mod content;
pub mod device_script;
pub mod events;
pub mod host;
pub mod ipc;
pub mod registry;
pub mod wry_host;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use bounds::{content_bounds, ChromeLayout};
pub use content::ContentProvider;
pub use events::{EventSink, PageLoadState, ViewSource, WebViewEvent};
pub use host::{SurfaceHost, SurfaceParams};
pub use ipc::{IpcMessage, IpcPayload};
pub use registry::SurfaceRegistry;
pub use wry_host::{ShellOptions, ShellView, WryHost, WryHostOptions};
