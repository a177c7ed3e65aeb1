//! The seam between the surface registry and whatever composites surfaces.

use shoal_common::{DevicePreferences, Rect, ServerId, SurfaceError, Viewport};

/// Parameters for materializing one server surface.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceParams<'a> {
    pub id: &'a ServerId,
    /// Address to load. May carry a one-time invite parameter.
    pub address: &'a str,
    /// Initial placement in logical pixels.
    pub bounds: Rect,
    /// Baked into the surface at creation; cannot change afterwards.
    pub devices: &'a DevicePreferences,
}

/// Host window and compositor for server surfaces.
///
/// Creation is two-phase: [`create_surface`](SurfaceHost::create_surface)
/// issues the request and returns a handle, and
/// [`confirm_surface`](SurfaceHost::confirm_surface) checks that the handle
/// is addressable. A handle that has not been confirmed must not be used.
pub trait SurfaceHost {
    type Surface;

    /// Current window content size and scale factor.
    fn viewport(&self) -> Viewport;

    fn create_surface(&mut self, params: SurfaceParams<'_>) -> Result<Self::Surface, SurfaceError>;

    fn confirm_surface(&self, surface: &Self::Surface) -> Result<(), SurfaceError>;

    fn set_bounds(&self, surface: &Self::Surface, bounds: Rect) -> Result<(), SurfaceError>;

    fn set_visible(&self, surface: &Self::Surface, visible: bool) -> Result<(), SurfaceError>;

    /// Raise the surface and give it input focus.
    fn focus(&self, surface: &Self::Surface) -> Result<(), SurfaceError>;

    /// Reload the surface's content in place, keeping the handle.
    fn reload(&self, surface: &Self::Surface) -> Result<(), SurfaceError>;

    fn close(&mut self, surface: Self::Surface) -> Result<(), SurfaceError>;
}
