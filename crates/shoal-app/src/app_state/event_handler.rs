//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, DeviceEvents};
use winit::window::WindowId;

use shoal_platform::{key_identifier, ComboPoller};

use super::core::ShoalApp;

impl ApplicationHandler for ShoalApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.sync_device_listening(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_bounds();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::Focused(false) => {
                // Key-ups are never delivered once focus is gone.
                let indicator = self.ptt.clear_held();
                tracing::debug!(?indicator, "window lost focus, held keys cleared");
                self.push_ptt_state();
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.ptt.poller_mut().handle_device_event(&event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
        self.sync_device_listening(event_loop);
    }
}

impl ShoalApp {
    /// Feed keys typed while the window itself holds focus into the
    /// push-to-talk reducer.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            repeat,
            ..
        } = event;
        if repeat {
            return;
        }
        let Some(identifier) = key_identifier(&logical_key) else {
            return;
        };

        let before = self.ptt.indicator();
        let after = match state {
            ElementState::Pressed => self.ptt.key_down(&identifier),
            ElementState::Released => self.ptt.key_up(&identifier),
        };
        if after != before {
            self.push_ptt_state();
        }
    }

    /// Re-fit the shell view and every server surface to the window.
    fn sync_bounds(&mut self) {
        if let (Some(shell), Some(window)) = (&self.shell, &self.window) {
            if let Err(e) = shell.fit_to(window) {
                tracing::warn!(error = %e, "Failed to resize shell view");
            }
        }
        if let Some(ref mut lifecycle) = self.lifecycle {
            lifecycle.resize();
        }
    }

    /// Raw device events are only requested while the global poller
    /// watches a combination.
    fn sync_device_listening(&mut self, event_loop: &ActiveEventLoop) {
        let wanted = self.ptt.poller().is_listening();
        if wanted == self.listening_devices {
            return;
        }
        event_loop.listen_device_events(if wanted {
            DeviceEvents::Always
        } else {
            DeviceEvents::Never
        });
        self.listening_devices = wanted;
        tracing::debug!(listening = wanted, "device event delivery changed");
    }
}
