//! Which server surface, if any, is on screen.
//!
//! Visibility is derived from [`ShellState`] alone and applied after every
//! state change, never as a side step inside individual handlers. The order
//! in which overlays open and tabs change therefore cannot matter.

use shoal_common::ServerId;
use shoal_webview::{SurfaceHost, SurfaceRegistry};
use tracing::warn;

use crate::state::ShellState;

/// Desired surface visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    HideAll,
    Show(ServerId),
}

/// The visibility rule:
/// an open overlay hides everything; otherwise the active server, if it is
/// a known server, is shown; otherwise everything is hidden.
pub fn desired_visibility(state: &ShellState) -> Visibility {
    if state.overlays().any_open() {
        return Visibility::HideAll;
    }
    match state.active_server() {
        Some(server) => Visibility::Show(server.id.clone()),
        None => Visibility::HideAll,
    }
}

/// Drive the registry to `target`. Failures are logged.
///
/// Showing a server without a registered surface hides every other one, so
/// a failed creation never leaves a stale surface on top.
pub fn apply_visibility<H: SurfaceHost>(registry: &mut SurfaceRegistry<H>, target: &Visibility) {
    match target {
        Visibility::Show(id) if registry.contains(id) => {
            if let Err(e) = registry.show(id) {
                warn!(server_id = %id, error = %e, "failed to show server surface");
            }
        }
        _ => registry.hide_all(),
    }
}
