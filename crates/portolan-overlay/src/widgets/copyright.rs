//! Map data attribution label.

use crate::cacher::CacheContext;
use crate::geom::Vec2;
use crate::gfx::LabelDesc;
use crate::handle::PlacementHandle;
use crate::layer::LayerRenderer;
use crate::shape::ShapeBundle;
use crate::widget::{ElementKey, Position, WidgetKind};
use crate::widgets::GUI_FONT_DP;

const COPYRIGHT_TEXT: &str = "© OpenStreetMap contributors";

/// Builds the copyright label and registers it on `layer`. Returns its
/// pixel footprint.
pub fn cache(position: &Position, layer: &mut LayerRenderer, ctx: &mut CacheContext<'_>) -> Vec2 {
    let label = ctx.parts.static_label(LabelDesc {
        text: COPYRIGHT_TEXT.to_string(),
        anchor: position.anchor,
        pivot: position.pivot,
        font_px: GUI_FONT_DP * ctx.visual_scale,
    });
    let handle = PlacementHandle::new(
        ElementKey::COPYRIGHT,
        position.anchor,
        position.pivot,
        label.size,
    );

    let mut bundle = ShapeBundle::new();
    bundle.push(label.part, Some(Box::new(handle)));
    layer.add_shape_renderer(WidgetKind::Copyright, Some(Box::new(bundle)));
    label.size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;
    use crate::stubs::{StubFactory, StubTextures, events, shared_log};
    use crate::widget::Anchor;

    #[test]
    fn cache_builds_a_static_label() {
        let log = shared_log();
        let mut textures = StubTextures::new(&log);
        let mut parts = StubFactory::new(&log);
        let mut layer = LayerRenderer::new();
        let mut ctx = CacheContext {
            textures: &mut textures,
            parts: &mut parts,
            visual_scale: 1.0,
            compass_tap: None,
        };

        let position = Position::new(Anchor::RightBottom, Vec2::new(790.0, 590.0));
        let size = cache(&position, &mut layer, &mut ctx);

        assert!(layer.has_widget(WidgetKind::Copyright));
        assert!(size.x > 0.0 && size.y > 0.0);
        assert!(
            events(&log)
                .iter()
                .any(|e| e == "static_label © OpenStreetMap contributors")
        );
    }

    #[test]
    fn copyright_ignores_taps() {
        let log = shared_log();
        let mut textures = StubTextures::new(&log);
        let mut parts = StubFactory::new(&log);
        let mut layer = LayerRenderer::new();
        let mut ctx = CacheContext {
            textures: &mut textures,
            parts: &mut parts,
            visual_scale: 1.0,
            compass_tap: None,
        };
        cache(
            &Position::new(Anchor::RightBottom, Vec2::new(790.0, 590.0)),
            &mut layer,
            &mut ctx,
        );

        assert!(!layer.on_touch_down(&Rect::new(0.0, 0.0, 800.0, 600.0)));
    }
}
