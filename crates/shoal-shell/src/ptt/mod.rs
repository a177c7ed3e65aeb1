//! Push-to-talk indicator.
//!
//! Two producers report the combination: the shell's own key listener
//! (key down/up per identifier) and the global key poller (pressed/released
//! for the whole combination). [`PttMachine`] is a reducer over the locally
//! held keys plus the enabled flag; [`PttController`] keeps the machine and
//! the poller configured from the same [`PttConfig`] in one step.
//!
//! [`PttConfig`]: shoal_platform::PttConfig

mod controller;
mod machine;


pub use controller::PttController;
pub use machine::{PttEvent, PttIndicator, PttMachine};
