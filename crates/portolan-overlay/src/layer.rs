//! Overlay compositing core.
//!
//! [`LayerRenderer`] owns the live widget-kind → shape-renderer mapping,
//! tracks the element currently under a press, absorbs freshly cached
//! widget sets without losing that press, and resolves touch input
//! against overlay geometry.
//!
//! Two actors touch an instance: the cache producer builds a new
//! `LayerRenderer` off the frame path, and the render actor absorbs it
//! through [`LayerRenderer::merge`]. The merge call is the single
//! hand-off point; callers serialize it against rendering and input.

use std::collections::BTreeMap;

use log::debug;

use crate::geom::Rect;
use crate::gfx::GpuPrograms;
use crate::screen::ScreenState;
use crate::shape::ShapeRenderer;
use crate::widget::{ElementKey, WidgetKind, WidgetLayoutMap, WidgetSet};

/// The element currently under a press: a lookup, never a reference into
/// owned geometry, so a merge can swap the geometry out from under it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct ActiveOverlay {
    kind: WidgetKind,
    key: ElementKey,
}

/// Owns the cached overlay widgets of one map view.
pub struct LayerRenderer {
    renderers: BTreeMap<WidgetKind, Box<dyn ShapeRenderer>>,
    active: Option<ActiveOverlay>,
}

impl LayerRenderer {
    pub fn new() -> Self {
        Self {
            renderers: BTreeMap::new(),
            active: None,
        }
    }

    /// Realizes every owned widget against the GPU programs. Called once
    /// per context acquisition, before the first render.
    pub fn build(&mut self, programs: &mut dyn GpuPrograms) {
        for renderer in self.renderers.values_mut() {
            renderer.build(programs);
        }
    }

    /// Draws the overlay for one frame.
    ///
    /// The ruler's frame prep runs first, even on frames where routing
    /// suppresses its draw, so its cached text is current the moment
    /// routing ends. With `routing_active`, compass and ruler are skipped;
    /// routing UI replaces their purpose.
    pub fn render(
        &mut self,
        screen: &ScreenState,
        programs: &mut dyn GpuPrograms,
        routing_active: bool,
    ) {
        if let Some(ruler) = self.renderers.get_mut(&WidgetKind::Ruler) {
            ruler.prepare_frame(screen);
        }
        for (kind, renderer) in &mut self.renderers {
            if routing_active && WidgetSet::ROUTING_SUPPRESSED.contains(WidgetSet::from(*kind)) {
                continue;
            }
            renderer.render(screen, programs);
        }
    }

    /// Absorbs every widget of `other`, replacing same-kind widgets in
    /// place and leaving `other` empty.
    ///
    /// If a press is in progress and an incoming replacement carries the
    /// pressed element's key, the press transfers to the new element and
    /// its tap-begin re-fires (the object identity changed even though
    /// the logical element did not). At most one transfer happens per
    /// merge; the first resolving kind in iteration order wins. A pressed
    /// element that no longer resolves after the merge is dropped.
    pub fn merge(&mut self, other: &mut LayerRenderer) {
        let mut reattached = false;
        for (kind, mut renderer) in std::mem::take(&mut other.renderers) {
            let mut transfer = None;
            if !reattached && self.renderers.contains_key(&kind) {
                if let Some(active) = self.active {
                    if renderer.find_handle(active.key).is_some() {
                        transfer = Some(active.key);
                        reattached = true;
                    }
                }
            }
            self.renderers.insert(kind, renderer);
            if let Some(key) = transfer {
                if let Some(handle) = self
                    .renderers
                    .get_mut(&kind)
                    .and_then(|r| r.find_handle(key))
                {
                    handle.on_tap_begin();
                }
                self.active = Some(ActiveOverlay { kind, key });
                debug!("merge: press transferred to incoming {:?}", kind);
            }
        }

        // A press whose element vanished with the merge must not linger.
        if let Some(active) = self.active {
            let resolves = self
                .renderers
                .get_mut(&active.kind)
                .and_then(|r| r.find_handle(active.key))
                .is_some();
            if !resolves {
                self.active = None;
                debug!("merge: pressed element gone, press dropped");
            }
        }
    }

    /// Applies new pivots after a viewport change. Kinds without a cached
    /// widget are skipped.
    pub fn set_layout(&mut self, layout: &WidgetLayoutMap) {
        for (kind, position) in layout {
            match self.renderers.get_mut(kind) {
                Some(renderer) => renderer.set_pivot(position.pivot),
                None => debug!("set_layout: no cached widget for {:?}", kind),
            }
        }
    }

    /// Registers a freshly cached widget. `None` (the builder produced
    /// nothing) is dropped. Registering a kind twice is a setup bug and
    /// aborts; only [`merge`](Self::merge) may replace an entry.
    pub fn add_shape_renderer(
        &mut self,
        kind: WidgetKind,
        renderer: Option<Box<dyn ShapeRenderer>>,
    ) {
        let Some(renderer) = renderer else { return };
        let prev = self.renderers.insert(kind, renderer);
        assert!(prev.is_none(), "widget {:?} cached twice in one pass", kind);
    }

    /// Hit-tests `area` in widget-kind order; the first hit element
    /// becomes the pressed element and its tap-begin fires. Returns
    /// whether anything was hit.
    ///
    /// A second touch-down before a touch-up replaces the pressed element
    /// without firing its tap-end; callers do not overlap gestures.
    pub fn on_touch_down(&mut self, area: &Rect) -> bool {
        self.active = None;
        for (kind, renderer) in &mut self.renderers {
            if let Some(handle) = renderer.hit_test(area) {
                handle.on_tap_begin();
                self.active = Some(ActiveOverlay {
                    kind: *kind,
                    key: handle.element_key(),
                });
                break;
            }
        }
        self.active.is_some()
    }

    /// Completes a press: fires tap if `area` still hits the pressed
    /// element, always fires tap-end, clears the press. No-op when
    /// nothing is pressed.
    pub fn on_touch_up(&mut self, area: &Rect) {
        self.finish_touch(area, true);
    }

    /// Aborts a press (gesture became a pan): tap-end only, never tap.
    pub fn on_touch_cancel(&mut self, area: &Rect) {
        self.finish_touch(area, false);
    }

    fn finish_touch(&mut self, area: &Rect, may_tap: bool) {
        let Some(active) = self.active.take() else { return };
        let Some(handle) = self
            .renderers
            .get_mut(&active.kind)
            .and_then(|r| r.find_handle(active.key))
        else {
            return;
        };
        if may_tap && handle.is_tapped(area) {
            handle.on_tap();
        }
        handle.on_tap_end();
    }

    #[inline]
    pub fn has_widget(&self, kind: WidgetKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Set summary of the owned widget kinds.
    pub fn widgets(&self) -> WidgetSet {
        self.renderers
            .keys()
            .fold(WidgetSet::empty(), |set, kind| set | WidgetSet::from(*kind))
    }

    /// Releases every owned widget and any in-progress press. Teardown.
    pub fn clear(&mut self) {
        self.renderers.clear();
        self.active = None;
    }
}

impl Default for LayerRenderer {
    fn default() -> Self {
        Self::new()
    }
}
