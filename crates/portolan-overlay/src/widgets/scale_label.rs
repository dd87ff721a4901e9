//! Zoom readout widget: "Scale : {level}" pinned near the viewport's
//! bottom-left corner.
//!
//! Content tracks the discretized tile level, not the continuous zoom, so
//! the label rewrites only when the drawn level actually changes.

use crate::cacher::CacheContext;
use crate::geom::{Rect, Vec2};
use crate::gfx::{LabelDesc, MutableLabel, SharedText};
use crate::handle::{Handle, OverlayHandle, TapTarget};
use crate::layer::LayerRenderer;
use crate::screen::ScreenState;
use crate::shape::ShapeBundle;
use crate::widget::{Anchor, ElementKey, Position, WidgetKind};
use crate::widgets::GUI_FONT_DP;

/// Offset from the viewport's bottom-left corner, in dp.
const OFFSET_DP: Vec2 = Vec2::new(10.0, 30.0);
/// Widest content the label reserves glyphs for.
const WIDEST_TEXT: &str = "Scale : 88";

/// What the label currently shows.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Content {
    /// Nothing written yet.
    Stale,
    /// Text matches this tile level.
    Fresh { scale: i32 },
}

pub struct ScaleLabelHandle {
    target: TapTarget,
    text: SharedText,
    content: Content,
}

impl ScaleLabelHandle {
    /// The box is pinned bottom-left regardless of the skin anchor; the
    /// update pass recomputes the pivot from the viewport every frame.
    pub fn new(text: SharedText, position: &Position, size: Vec2) -> Self {
        Self {
            target: TapTarget::new(ElementKey::SCALE_LABEL, Anchor::LeftBottom, position.pivot, size),
            text,
            content: Content::Stale,
        }
    }
}

impl OverlayHandle for ScaleLabelHandle {
    fn on_tap_begin(&mut self) {}

    fn on_tap(&mut self) {}

    fn on_tap_end(&mut self) {}

    fn is_tapped(&self, _area: &Rect) -> bool {
        false
    }

    fn element_key(&self) -> ElementKey {
        self.target.key()
    }
}

impl Handle for ScaleLabelHandle {
    fn update(&mut self, screen: &ScreenState) -> bool {
        let scale = screen.draw_tile_scale();
        let fresh = matches!(self.content, Content::Fresh { scale: shown } if shown == scale);
        if !fresh {
            self.text.set(format!("Scale : {}", scale));
            self.content = Content::Fresh { scale };
        }

        let vs = screen.visual_scale;
        let corner = screen.pixel_rect.left_bottom();
        self.target.set_pivot(corner + Vec2::new(OFFSET_DP.x * vs, -OFFSET_DP.y * vs));
        self.target.visible()
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.target.set_pivot(pivot);
    }

    fn pivot(&self) -> Vec2 {
        self.target.pivot()
    }
}

/// Builds the scale label and registers it on `layer`. Returns its pixel
/// footprint.
pub fn cache(position: &Position, layer: &mut LayerRenderer, ctx: &mut CacheContext<'_>) -> Vec2 {
    let MutableLabel { part, text, size } = ctx.parts.mutable_label(LabelDesc {
        text: WIDEST_TEXT.to_string(),
        anchor: position.anchor,
        pivot: position.pivot,
        font_px: GUI_FONT_DP * ctx.visual_scale,
    });
    let handle = ScaleLabelHandle::new(text, position, size);

    let mut bundle = ShapeBundle::new();
    bundle.push(part, Some(Box::new(handle)));
    layer.add_shape_renderer(WidgetKind::ScaleLabel, Some(Box::new(bundle)));
    size
}
