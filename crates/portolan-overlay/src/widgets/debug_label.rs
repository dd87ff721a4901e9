//! Frame diagnostics readout, compiled in with the `debug-labels`
//! feature.
//!
//! A stack of mutable labels whose content functions run against the
//! screen every frame; each label rewrites its text cell only when the
//! produced string differs from what it already shows.

use crate::cacher::CacheContext;
use crate::geom::{Rect, Vec2};
use crate::gfx::{LabelDesc, MutableLabel, SharedText};
use crate::handle::{Handle, OverlayHandle, TapTarget};
use crate::layer::LayerRenderer;
use crate::screen::ScreenState;
use crate::shape::ShapeBundle;
use crate::widget::{ElementKey, Position, WidgetKind};

const DEBUG_FONT_DP: f32 = 12.0;
const LINE_GAP_DP: f32 = 4.0;
/// Key range reserved for the diagnostics labels.
const KEY_BASE: u32 = 100;

/// Produces one label's content from the current screen.
pub type ContentFn = fn(&ScreenState) -> String;

pub struct DebugLabelHandle {
    target: TapTarget,
    text: SharedText,
    content: ContentFn,
    shown: String,
}

impl DebugLabelHandle {
    pub fn new(
        key: ElementKey,
        position: Position,
        size: Vec2,
        text: SharedText,
        content: ContentFn,
    ) -> Self {
        Self {
            target: TapTarget::new(key, position.anchor, position.pivot, size),
            text,
            content,
            shown: String::new(),
        }
    }
}

impl OverlayHandle for DebugLabelHandle {
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

impl Handle for DebugLabelHandle {
    fn update(&mut self, screen: &ScreenState) -> bool {
        let next = (self.content)(screen);
        if next != self.shown {
            self.text.set(next.as_str());
            self.shown = next;
        }
        self.target.visible()
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.target.set_pivot(pivot);
    }

    fn pivot(&self) -> Vec2 {
        self.target.pivot()
    }
}

/// Label templates (widest expected content) and their content functions.
fn labels() -> [(&'static str, ContentFn); 3] {
    [
        ("rotation: -888.8 deg", |s: &ScreenState| {
            format!("rotation: {:.1} deg", s.rotation.to_degrees())
        }),
        ("viewport: 8888 x 8888 px", |s: &ScreenState| {
            format!("viewport: {:.0} x {:.0} px", s.surface().x, s.surface().y)
        }),
        ("ground: 888888.88 m/px", |s: &ScreenState| {
            format!("ground: {:.2} m/px", s.metres_per_pixel)
        }),
    ]
}

/// Builds the diagnostics stack and registers it on `layer`. Returns the
/// stack's pixel footprint.
pub fn cache(position: &Position, layer: &mut LayerRenderer, ctx: &mut CacheContext<'_>) -> Vec2 {
    let line_gap = LINE_GAP_DP * ctx.visual_scale;
    let mut bundle = ShapeBundle::new();
    let mut footprint = Vec2::zero();
    let mut pivot = position.pivot;

    for (i, (template, content)) in labels().into_iter().enumerate() {
        let MutableLabel { part, text, size } = ctx.parts.mutable_label(LabelDesc {
            text: template.to_string(),
            anchor: position.anchor,
            pivot,
            font_px: DEBUG_FONT_DP * ctx.visual_scale,
        });
        let key = ElementKey::gui(KEY_BASE + i as u32);
        let handle =
            DebugLabelHandle::new(key, Position::new(position.anchor, pivot), size, text, content);
        bundle.push(part, Some(Box::new(handle)));

        if i > 0 {
            footprint.y += line_gap;
        }
        footprint.x = footprint.x.max(size.x);
        footprint.y += size.y;
        pivot = pivot + Vec2::new(0.0, size.y + line_gap);
    }

    layer.add_shape_renderer(WidgetKind::DebugInfo, Some(Box::new(bundle)));
    footprint
}
