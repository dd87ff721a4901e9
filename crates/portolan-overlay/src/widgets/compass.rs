//! North-pointing compass widget.
//!
//! Visible only while the map is rotated away from north; tapping it
//! fires a caller-supplied callback (typically an animated return to
//! north).

use std::sync::Arc;

use crate::cacher::CacheContext;
use crate::geom::{Rect, Vec2};
use crate::gfx::QuadDesc;
use crate::handle::{Handle, OverlayHandle, TapTarget};
use crate::layer::LayerRenderer;
use crate::screen::ScreenState;
use crate::shape::ShapeBundle;
use crate::widget::{ElementKey, Position, WidgetKind};

/// Fired on a completed compass tap.
pub type CompassTap = Arc<dyn Fn() + Send + Sync>;

/// Rotations closer to north than this keep the compass hidden.
const NORTH_EPSILON_RAD: f32 = 0.002;

pub struct CompassHandle {
    target: TapTarget,
    tap_handler: Option<CompassTap>,
}

impl CompassHandle {
    pub fn new(position: &Position, size: Vec2, tap_handler: Option<CompassTap>) -> Self {
        Self {
            target: TapTarget::new(ElementKey::COMPASS, position.anchor, position.pivot, size),
            tap_handler,
        }
    }
}

impl OverlayHandle for CompassHandle {
    fn on_tap_begin(&mut self) {
        self.target.set_pressed(true);
    }

    fn on_tap(&mut self) {
        if let Some(handler) = &self.tap_handler {
            handler();
        }
    }

    fn on_tap_end(&mut self) {
        self.target.set_pressed(false);
    }

    fn is_tapped(&self, area: &Rect) -> bool {
        self.target.hit(area)
    }

    fn element_key(&self) -> ElementKey {
        self.target.key()
    }
}

impl Handle for CompassHandle {
    fn update(&mut self, screen: &ScreenState) -> bool {
        let angle = normalize_angle(screen.rotation);
        // A pressed compass stays visible until the press ends, even if
        // the rotation reaches north under the finger.
        self.target
            .set_visible(angle.abs() > NORTH_EPSILON_RAD || self.target.pressed());
        self.target.visible()
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.target.set_pivot(pivot);
    }

    fn pivot(&self) -> Vec2 {
        self.target.pivot()
    }
}

/// Wraps an angle into `[-pi, pi]` so closeness to north is one
/// comparison on either side.
fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::PI;
    let wrapped = angle.rem_euclid(2.0 * PI);
    if wrapped > PI { wrapped - 2.0 * PI } else { wrapped }
}

/// Builds the compass and registers it on `layer`. Returns its pixel
/// footprint.
pub fn cache(position: &Position, layer: &mut LayerRenderer, ctx: &mut CacheContext<'_>) -> Vec2 {
    let icon = ctx.textures.icon("compass");
    let part = ctx.parts.textured_quad(QuadDesc {
        icon,
        anchor: position.anchor,
        pivot: position.pivot,
    });
    let handle = CompassHandle::new(position, icon.size, ctx.compass_tap.clone());

    let mut bundle = ShapeBundle::new();
    bundle.push(part, Some(Box::new(handle)));
    layer.add_shape_renderer(WidgetKind::Compass, Some(Box::new(bundle)));
    icon.size
}
