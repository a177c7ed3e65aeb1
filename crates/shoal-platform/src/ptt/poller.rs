use std::collections::HashSet;

use shoal_common::PlatformError;
use tracing::{debug, info};
use winit::event::{DeviceEvent, ElementState, RawKeyEvent};
use winit::keyboard::PhysicalKey;

use crate::input::{token_to_input, ComboInput};
use crate::winit_keys::device_button;

/// Transition of "every combination input is held".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerSignal {
    Pressed,
    Released,
}

/// Host-side watcher for the push-to-talk combination.
///
/// Works while another surface holds input focus. Signals are buffered and
/// drained by the owner on its poll tick.
pub trait ComboPoller {
    /// Replace the watched combination.
    ///
    /// Watching stops when `enabled` is false or `tokens` is empty. Enabling
    /// with tokens of which none resolve to a physical input is an error and
    /// leaves the poller stopped.
    fn set_combination(&mut self, tokens: &[String], enabled: bool) -> Result<(), PlatformError>;

    /// Take all signals emitted since the last call, oldest first.
    fn take_signals(&mut self) -> Vec<PollerSignal>;

    /// Whether any input is being watched.
    fn is_listening(&self) -> bool;
}

/// [`ComboPoller`] fed by winit raw device events.
///
/// Only the inputs in the current combination are tracked; every other
/// device event is dropped without being inspected further.
#[derive(Debug, Default)]
pub struct GlobalKeyPoller {
    watched: Vec<ComboInput>,
    held: HashSet<ComboInput>,
    active: bool,
    pending: Vec<PollerSignal>,
}

impl GlobalKeyPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw device event from the event loop.
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if self.watched.is_empty() {
            return;
        }
        match event {
            DeviceEvent::Key(RawKeyEvent {
                physical_key: PhysicalKey::Code(code),
                state,
            }) => self.observe(ComboInput::Key(*code), *state),
            DeviceEvent::Button { button, state } => {
                if let Some(pointer) = device_button(*button) {
                    self.observe(ComboInput::Pointer(pointer), *state);
                }
            }
            _ => {}
        }
    }

    fn observe(&mut self, input: ComboInput, state: ElementState) {
        if !self.watched.contains(&input) {
            return;
        }
        match state {
            ElementState::Pressed => self.held.insert(input),
            ElementState::Released => self.held.remove(&input),
        };

        let all_down = self.watched.iter().all(|w| self.held.contains(w));
        if all_down && !self.active {
            self.active = true;
            self.pending.push(PollerSignal::Pressed);
        } else if !all_down && self.active {
            self.active = false;
            self.pending.push(PollerSignal::Released);
        }
    }

    fn stop(&mut self) {
        if self.active {
            self.pending.push(PollerSignal::Released);
        }
        self.active = false;
        self.watched.clear();
        self.held.clear();
    }
}

impl ComboPoller for GlobalKeyPoller {
    fn set_combination(&mut self, tokens: &[String], enabled: bool) -> Result<(), PlatformError> {
        self.stop();

        if !enabled || tokens.is_empty() {
            debug!("global key poller stopped");
            return Ok(());
        }

        let mut watched: Vec<ComboInput> = Vec::new();
        for input in tokens.iter().filter_map(|t| token_to_input(t)) {
            if !watched.contains(&input) {
                watched.push(input);
            }
        }
        if watched.is_empty() {
            return Err(PlatformError::KeyError(format!(
                "no recognisable keys in {tokens:?}"
            )));
        }

        info!(inputs = watched.len(), "global key poller watching combination");
        self.watched = watched;
        Ok(())
    }

    fn take_signals(&mut self) -> Vec<PollerSignal> {
        std::mem::take(&mut self.pending)
    }

    fn is_listening(&self) -> bool {
        !self.watched.is_empty()
    }
}
