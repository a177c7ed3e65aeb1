pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, PlatformError, ShoalError, StoreError, SurfaceError};
pub use id::{new_id, new_server_id};
pub use types::{
    ActiveView, Appearance, Color, DevicePreferences, Rect, Server, ServerId, Viewport,
};

pub type Result<T> = std::result::Result<T, ShoalError>;
