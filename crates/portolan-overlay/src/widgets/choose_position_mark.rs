//! Crosshair marker shown while the user picks a point on the map.
//!
//! Modal: cached alone, centered on the surface, never tappable. A
//! surface resize recaches it rather than relayouting it.

use crate::cacher::CacheContext;
use crate::geom::Vec2;
use crate::gfx::QuadDesc;
use crate::layer::LayerRenderer;
use crate::shape::ShapeBundle;
use crate::widget::{Position, WidgetKind};

/// Builds the marker and registers it on `layer`. Returns its pixel
/// footprint.
pub fn cache(position: &Position, layer: &mut LayerRenderer, ctx: &mut CacheContext<'_>) -> Vec2 {
    let icon = ctx.textures.icon("choose_position_mark");
    let part = ctx.parts.textured_quad(QuadDesc {
        icon,
        anchor: position.anchor,
        pivot: position.pivot,
    });

    let mut bundle = ShapeBundle::new();
    bundle.push(part, None);
    layer.add_shape_renderer(WidgetKind::ChoosePositionMark, Some(Box::new(bundle)));
    icon.size
}
