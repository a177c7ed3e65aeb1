//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the shell view, server surfaces, the
//! persistent store and push-to-talk.

mod core;
mod event_handler;
mod init;
mod persistence;
mod polling;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::ShoalApp;
