//! Adaptive polling of webview events, push-to-talk and surface visibility.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use shoal_webview::appearance::css_injection_js;
use shoal_webview::{PageLoadState, ViewSource, WebViewEvent};

use super::core::ShoalApp;
use super::types::POLL_INTERVAL;

impl ShoalApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_ptt();
            self.reconcile_surfaces();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        for event in self.events.drain() {
            self.handle_webview_event(event);
        }
    }

    pub(super) fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::ShellIpc { body } => self.handle_ipc_message(&body),

            WebViewEvent::PageLoad {
                source: ViewSource::Shell,
                state: PageLoadState::Finished,
                ..
            } => {
                // A reloaded shell has no dialogs open.
                self.state.clear_overlays();
                // Colours apply before the page asks for anything.
                if let Some(ref shell) = self.shell {
                    let js = css_injection_js(self.state.appearance());
                    if let Err(e) = shell.evaluate_script(&js) {
                        tracing::warn!(error = %e, "Failed to inject appearance");
                    }
                }
            }

            WebViewEvent::PageLoad {
                source: ViewSource::Server(id),
                state,
                url,
            } => {
                tracing::debug!(server_id = %id, ?state, url = %url, "server page load");
            }

            WebViewEvent::PageLoad { .. } => {}

            WebViewEvent::TitleChanged { source, title } => {
                tracing::trace!(?source, title = %title, "title changed");
            }

            WebViewEvent::NavigationBlocked { url } => {
                tracing::warn!(url = %url, "shell view navigation blocked");
            }
        }
    }

    /// Fold global poller signals into the indicator.
    fn poll_ptt(&mut self) {
        if let Some(indicator) = self.ptt.poll() {
            tracing::debug!(?indicator, "push-to-talk indicator changed by poller");
            self.push_ptt_state();
        }
    }

    /// Re-apply the visibility rule if shell state changed since last time.
    fn reconcile_surfaces(&mut self) {
        if let Some(ref mut lifecycle) = self.lifecycle {
            lifecycle.reconcile(&self.state);
        }
    }
}
