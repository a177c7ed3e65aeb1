//! Placement of server surfaces inside the main window.

use shoal_common::{Rect, Viewport};

/// Fixed chrome around the content region, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeLayout {
    pub titlebar_height: f64,
    pub sidebar_width: f64,
}

impl Default for ChromeLayout {
    fn default() -> Self {
        Self {
            titlebar_height: 36.0,
            sidebar_width: 72.0,
        }
    }
}

/// Rectangle a server surface occupies: right of the sidebar, below the
/// title bar, filling the rest of the window.
///
/// The physical window size is converted to logical pixels with the
/// viewport's scale factor and rounded. A non-positive or non-finite scale
/// factor is treated as 1. Dimensions never go negative.
pub fn content_bounds(viewport: Viewport, layout: &ChromeLayout) -> Rect {
    let scale = if viewport.scale_factor.is_finite() && viewport.scale_factor > 0.0 {
        viewport.scale_factor
    } else {
        1.0
    };
    let logical_width = (f64::from(viewport.physical_width) / scale).round();
    let logical_height = (f64::from(viewport.physical_height) / scale).round();

    Rect {
        x: layout.sidebar_width,
        y: layout.titlebar_height,
        width: (logical_width - layout.sidebar_width).max(0.0),
        height: (logical_height - layout.titlebar_height).max(0.0),
    }
}

/// Convert a logical `Rect` to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}
