use shoal_platform::{ComboPoller, PollerSignal, PttConfig};
use tracing::{info, warn};

use super::machine::{PttEvent, PttIndicator, PttMachine};

/// Owns the push-to-talk configuration, the indicator reducer and the
/// global poller.
pub struct PttController<P: ComboPoller> {
    config: PttConfig,
    machine: PttMachine,
    poller: P,
    listen_globally: bool,
}

impl<P: ComboPoller> PttController<P> {
    /// Build from a persisted record. The poller is configured immediately.
    pub fn new(config: PttConfig, poller: P, listen_globally: bool) -> Self {
        let mut controller = Self {
            config: PttConfig::default(),
            machine: PttMachine::default(),
            poller,
            listen_globally,
        };
        controller.configure(config);
        controller
    }

    pub fn config(&self) -> &PttConfig {
        &self.config
    }

    pub fn indicator(&self) -> PttIndicator {
        self.machine.indicator()
    }

    pub fn poller(&self) -> &P {
        &self.poller
    }

    pub fn poller_mut(&mut self) -> &mut P {
        &mut self.poller
    }

    /// Replace the configuration: the identifier list, the token list, the
    /// reducer and the poller all change in this one call.
    ///
    /// A poller failure is logged; the indicator still follows the new
    /// configuration through the shell's own key events.
    pub fn configure(&mut self, config: PttConfig) -> PttIndicator {
        let config = config.resynced();

        let indicator = self.machine.reduce(PttEvent::Configure {
            enabled: config.enabled,
            keys: config.keys.clone(),
        });

        let watch = self.listen_globally && config.enabled;
        if let Err(e) = self.poller.set_combination(&config.tokens, watch) {
            warn!(error = %e, "global key poller rejected combination");
        }
        info!(enabled = config.enabled, keys = ?config.keys, "push-to-talk configured");

        self.config = config;
        indicator
    }

    pub fn key_down(&mut self, identifier: &str) -> PttIndicator {
        self.machine.reduce(PttEvent::KeyDown(identifier.to_string()))
    }

    pub fn key_up(&mut self, identifier: &str) -> PttIndicator {
        self.machine.reduce(PttEvent::KeyUp(identifier.to_string()))
    }

    pub fn clear_held(&mut self) -> PttIndicator {
        self.machine.reduce(PttEvent::ClearHeld)
    }

    /// Drain the poller and fold its signals into the indicator.
    ///
    /// Returns the new indicator if it changed.
    pub fn poll(&mut self) -> Option<PttIndicator> {
        let before = self.machine.indicator();
        for signal in self.poller.take_signals() {
            let event = match signal {
                PollerSignal::Pressed => PttEvent::BackendPressed,
                PollerSignal::Released => PttEvent::BackendReleased,
            };
            self.machine.reduce(event);
        }
        let after = self.machine.indicator();
        (after != before).then_some(after)
    }

    /// Stop the global poller.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.poller.set_combination(&[], false) {
            warn!(error = %e, "failed to stop global key poller");
        }
    }
}
