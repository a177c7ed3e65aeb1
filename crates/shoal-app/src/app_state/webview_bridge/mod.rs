//! Bridge between the shell view and the rest of the app.
//!
//! Validates and dispatches IPC from the shell's JavaScript, and pushes
//! state back to it.

mod ipc_dispatch;
mod push;
mod ptt_handlers;
mod server_handlers;
mod settings_handlers;
