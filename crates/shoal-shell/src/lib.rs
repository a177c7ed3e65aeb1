//! Shell logic independent of any window: navigation state, overlays,
//! server entities, surface visibility and lifecycle, push-to-talk.

pub mod address;
pub mod lifecycle;
pub mod overlay;
pub mod ptt;
mod servers;
pub mod state;
pub mod visibility;

pub use address::{normalize_address, parse_server_address, ServerAddress};
pub use lifecycle::LifecycleController;
pub use overlay::OverlaySet;
pub use ptt::{PttController, PttEvent, PttIndicator, PttMachine};
pub use state::{ShellSnapshot, ShellState};
pub use visibility::{apply_visibility, desired_visibility, Visibility};
