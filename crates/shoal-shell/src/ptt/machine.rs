use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shoal_platform::input::canonical_identifier;

/// What the push-to-talk badge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PttIndicator {
    /// Push-to-talk disabled.
    #[default]
    Off,
    /// Enabled, combination not held.
    Muted,
    /// Enabled, combination held.
    Active,
}

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PttEvent {
    /// Replace the enabled flag and combination (UI identifiers).
    Configure { enabled: bool, keys: Vec<String> },
    /// The shell saw a key or button go down.
    KeyDown(String),
    /// The shell saw a key or button go up.
    KeyUp(String),
    /// The shell lost focus; nothing is known to be held any more.
    ClearHeld,
    /// The global poller saw the whole combination go down.
    BackendPressed,
    /// The global poller saw the combination break.
    BackendReleased,
}

/// Reducer over the held-key set and the enabled flag.
#[derive(Debug, Clone, Default)]
pub struct PttMachine {
    enabled: bool,
    combination: Vec<String>,
    held: HashSet<String>,
    indicator: PttIndicator,
}

impl PttMachine {
    pub fn new(enabled: bool, keys: &[String]) -> Self {
        let mut machine = Self::default();
        machine.reduce(PttEvent::Configure {
            enabled,
            keys: keys.to_vec(),
        });
        machine
    }

    pub fn indicator(&self) -> PttIndicator {
        self.indicator
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Apply one event and return the resulting indicator.
    pub fn reduce(&mut self, event: PttEvent) -> PttIndicator {
        match event {
            PttEvent::Configure { enabled, keys } => {
                self.enabled = enabled;
                self.combination = keys.iter().map(|k| canonical_identifier(k)).collect();
                self.recompute();
            }
            PttEvent::KeyDown(key) => {
                if self.held.insert(canonical_identifier(&key)) {
                    self.recompute();
                }
            }
            PttEvent::KeyUp(key) => {
                if self.held.remove(&canonical_identifier(&key)) {
                    self.recompute();
                }
            }
            PttEvent::ClearHeld => {
                self.held.clear();
                self.recompute();
            }
            PttEvent::BackendPressed => {
                if self.enabled && !self.combination.is_empty() {
                    self.indicator = PttIndicator::Active;
                }
            }
            PttEvent::BackendReleased => {
                if self.indicator == PttIndicator::Active {
                    self.indicator = PttIndicator::Muted;
                }
            }
        }
        self.indicator
    }

    fn recompute(&mut self) {
        self.indicator = if !self.enabled {
            PttIndicator::Off
        } else if !self.combination.is_empty()
            && self.combination.iter().all(|k| self.held.contains(k))
        {
            PttIndicator::Active
        } else {
            PttIndicator::Muted
        };
    }
}
