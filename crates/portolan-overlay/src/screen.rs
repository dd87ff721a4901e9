//! Read-only viewport snapshot threaded through update and render calls.

use crate::geom::{Rect, Vec2};

/// Per-frame view of the map viewport.
///
/// The overlay performs no geographic math; the projection-derived scalars
/// (`zoom`, `metres_per_pixel`) arrive precomputed from the engine and are
/// only compared or scaled here.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    /// Viewport in physical pixels, origin top-left.
    pub pixel_rect: Rect,
    /// Map rotation in radians; 0 is north-up, positive is clockwise.
    pub rotation: f32,
    /// DPI factor applied to dp offsets and widget metrics.
    pub visual_scale: f32,
    /// Continuous zoom level.
    pub zoom: f64,
    /// Ground resolution at the viewport center.
    pub metres_per_pixel: f64,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            pixel_rect: Rect::default(),
            rotation: 0.0,
            // A zero scale would zero every dp conversion.
            visual_scale: 1.0,
            zoom: 0.0,
            metres_per_pixel: 0.0,
        }
    }
}

impl ScreenState {
    pub fn new(pixel_rect: Rect, visual_scale: f32) -> Self {
        Self {
            pixel_rect,
            visual_scale,
            ..Self::default()
        }
    }

    /// Viewport size in pixels.
    #[inline]
    pub fn surface(&self) -> Vec2 {
        self.pixel_rect.size
    }

    /// Zoom discretized to the tile level actually drawn. Widgets that
    /// debounce on zoom compare this, not the continuous value.
    #[inline]
    pub fn draw_tile_scale(&self) -> i32 {
        self.zoom.round() as i32
    }
}
