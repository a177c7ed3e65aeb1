pub mod crash_report;
pub mod input;
pub mod paths;
pub mod ptt;
pub mod winit_keys;

pub use input::{identifier_to_token, order_keys, token_to_input, ComboInput, PointerButton};
pub use paths::{config_dir, data_dir, ensure_dirs, server_data_dir};
pub use ptt::{ComboPoller, GlobalKeyPoller, PollerSignal, PttConfig};
pub use winit_keys::key_identifier;
