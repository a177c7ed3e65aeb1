//! Open dialogs and menus.

use std::collections::BTreeSet;

/// Names of the overlays currently open in the shell view.
///
/// Server surfaces are composited above the shell, so while this set is
/// non-empty every surface must stay hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlaySet {
    open: BTreeSet<String>,
}

impl OverlaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the overlay was not already open.
    pub fn open(&mut self, name: impl Into<String>) -> bool {
        self.open.insert(name.into())
    }

    /// Returns `true` if the overlay was open.
    pub fn close(&mut self, name: &str) -> bool {
        self.open.remove(name)
    }

    pub fn any_open(&self) -> bool {
        !self.open.is_empty()
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }
}
