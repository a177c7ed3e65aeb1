mod ensure;
mod resolve;
mod server_data;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, crash_report_dir, data_dir, server_data_dir, servers_dir};
pub use server_data::{
    prepare_server_data_dir, remove_dir_with_retry, spawn_remove_server_data, REMOVE_ATTEMPTS,
    REMOVE_RETRY_DELAY,
};
