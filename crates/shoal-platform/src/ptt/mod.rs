//! Push-to-talk configuration record and the global key poller.

mod config;
mod poller;

#[cfg(test)]
mod tests;

pub use config::PttConfig;
pub use poller::{ComboPoller, GlobalKeyPoller, PollerSignal};
