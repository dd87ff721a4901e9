//! Widget cache factory.
//!
//! Runs off the frame path: builds a fresh [`LayerRenderer`] from a
//! placement map, hands it over for merging, and reports each widget's
//! pixel footprint so the embedding UI can reserve space around it.
//!
//! Dispatch is a flat table of plain function pointers. Everything a
//! builder touches arrives through its parameters, so a table entry can
//! be read in isolation.

use log::debug;

use crate::geom::Vec2;
use crate::gfx::{PartFactory, TextureManager};
use crate::layer::LayerRenderer;
use crate::widget::{Anchor, Position, WidgetInitMap, WidgetKind, WidgetSizeMap};
use crate::widgets;
use crate::widgets::compass::CompassTap;

#[cfg(feature = "debug-labels")]
const DEBUG_LABELS_OFFSET_DP: Vec2 = Vec2::new(10.0, 50.0);

/// Collaborators and cache-pass parameters threaded into every builder.
pub struct CacheContext<'a> {
    pub textures: &'a mut dyn TextureManager,
    pub parts: &'a mut dyn PartFactory,
    pub visual_scale: f32,
    pub compass_tap: Option<CompassTap>,
}

/// One widget builder: placement in, footprint out, shape registered on
/// the layer.
pub type CacheFn = fn(&Position, &mut LayerRenderer, &mut CacheContext<'_>) -> Vec2;

/// The standard widgets a placement map may request. Modal widgets (the
/// position-pick marker, the diagnostics stack) have their own entry
/// points and stay out of the table.
const CACHE_FUNCTIONS: &[(WidgetKind, CacheFn)] = &[
    (WidgetKind::Compass, widgets::compass::cache),
    (WidgetKind::Ruler, widgets::ruler::cache),
    (WidgetKind::Copyright, widgets::copyright::cache),
    (WidgetKind::ScaleLabel, widgets::scale_label::cache),
];

/// Builds cached widget sets against the GPU-side collaborators.
pub struct LayerCacher {
    visual_scale: f32,
    compass_tap: Option<CompassTap>,
}

impl LayerCacher {
    pub fn new(visual_scale: f32) -> Self {
        Self {
            visual_scale,
            compass_tap: None,
        }
    }

    /// Fired on a completed compass tap, from whichever actor drives the
    /// touch calls.
    pub fn set_compass_tap(&mut self, tap: CompassTap) {
        self.compass_tap = Some(tap);
    }

    fn context<'a>(
        &self,
        textures: &'a mut dyn TextureManager,
        parts: &'a mut dyn PartFactory,
    ) -> CacheContext<'a> {
        CacheContext {
            textures,
            parts,
            visual_scale: self.visual_scale,
            compass_tap: self.compass_tap.clone(),
        }
    }

    /// Builds one fresh widget set for `init`.
    ///
    /// Kinds without a registered builder are skipped. After every
    /// builder has run, the texture queue is flushed once so the new
    /// geometry's uploads are visible to the render queue before the
    /// returned set is merged.
    pub fn recache_widgets(
        &self,
        init: &WidgetInitMap,
        textures: &mut dyn TextureManager,
        parts: &mut dyn PartFactory,
    ) -> (LayerRenderer, WidgetSizeMap) {
        let mut renderer = LayerRenderer::new();
        let mut sizes = WidgetSizeMap::new();
        let mut ctx = self.context(textures, parts);
        for (kind, position) in init {
            let Some((_, cache)) = CACHE_FUNCTIONS.iter().find(|(k, _)| k == kind) else {
                debug!("recache: no builder for {:?}, skipped", kind);
                continue;
            };
            let size = cache(position, &mut renderer, &mut ctx);
            sizes.insert(*kind, size);
        }
        ctx.textures.flush();
        (renderer, sizes)
    }

    /// Modal single-widget set: the position-pick marker centered on a
    /// surface of `surface` pixels.
    pub fn recache_choose_position_mark(
        &self,
        surface: Vec2,
        textures: &mut dyn TextureManager,
        parts: &mut dyn PartFactory,
    ) -> LayerRenderer {
        let mut renderer = LayerRenderer::new();
        let mut ctx = self.context(textures, parts);
        let position = Position::new(Anchor::Center, surface * 0.5);
        widgets::choose_position_mark::cache(&position, &mut renderer, &mut ctx);
        ctx.textures.flush();
        renderer
    }

    /// Modal diagnostics set, pinned under the viewport's top-left corner.
    #[cfg(feature = "debug-labels")]
    pub fn recache_debug_labels(
        &self,
        textures: &mut dyn TextureManager,
        parts: &mut dyn PartFactory,
    ) -> LayerRenderer {
        let mut renderer = LayerRenderer::new();
        let mut ctx = self.context(textures, parts);
        let position = Position::new(Anchor::LeftTop, DEBUG_LABELS_OFFSET_DP * self.visual_scale);
        widgets::debug_label::cache(&position, &mut renderer, &mut ctx);
        ctx.textures.flush();
        renderer
    }
}
