//! Tap-handle capability and the standard tappable-element state.

use crate::geom::{Rect, Vec2};
use crate::screen::ScreenState;
use crate::widget::{Anchor, ElementKey};

/// Capability the compositing layer needs from any tappable element.
///
/// The layer only ever drives these five calls; everything else a handle
/// does is between it and its shape renderer.
pub trait OverlayHandle: Send {
    /// A press began on this element.
    fn on_tap_begin(&mut self);

    /// Completed tap: press and release both landed on this element.
    fn on_tap(&mut self);

    /// The press sequence ended, by release or cancellation.
    fn on_tap_end(&mut self);

    /// Whether `area` hits this element right now.
    fn is_tapped(&self, area: &Rect) -> bool;

    /// Stable identity used to re-find this element across rebuilds.
    fn element_key(&self) -> ElementKey;
}

/// Full handle surface used by the standard shape bundle.
pub trait Handle: OverlayHandle {
    /// Refreshes per-frame state against the screen. Returns whether the
    /// element is visible this frame.
    fn update(&mut self, screen: &ScreenState) -> bool;

    /// Moves the element's pivot (relayout after a viewport change).
    fn set_pivot(&mut self, pivot: Vec2);

    /// Current pivot. The bundle feeds it to the element's draw part
    /// before each draw, so the handle owns live placement.
    fn pivot(&self) -> Vec2;
}

// ── TapTarget ─────────────────────────────────────────────────────────────

/// Placement and press state shared by the standard handles.
///
/// Owns the anchor-aware bounds math and the default containment hit
/// test; handle implementations embed one and delegate to it.
#[derive(Debug, Clone)]
pub struct TapTarget {
    key: ElementKey,
    anchor: Anchor,
    pivot: Vec2,
    size: Vec2,
    visible: bool,
    pressed: bool,
}

impl TapTarget {
    pub fn new(key: ElementKey, anchor: Anchor, pivot: Vec2, size: Vec2) -> Self {
        Self {
            key,
            anchor,
            pivot,
            size,
            visible: true,
            pressed: false,
        }
    }

    #[inline]
    pub fn key(&self) -> ElementKey {
        self.key
    }

    #[inline]
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    #[inline]
    pub fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    #[inline]
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Pixel bounds of the element's box anchored at the pivot.
    pub fn bounds(&self) -> Rect {
        let origin = self.anchor.aligned_origin(self.pivot, self.size);
        Rect::from_origin_size(origin, self.size)
    }

    /// Default hit test: visible and overlapping `area`.
    pub fn hit(&self, area: &Rect) -> bool {
        self.visible && self.bounds().intersects(*area)
    }
}

// ── PlacementHandle ───────────────────────────────────────────────────────

/// Placement-only handle for widgets that draw but never react to taps.
///
/// Keeps the element relayoutable and findable by key while reporting
/// every hit test as a miss.
pub struct PlacementHandle {
    target: TapTarget,
}

impl PlacementHandle {
    pub fn new(key: ElementKey, anchor: Anchor, pivot: Vec2, size: Vec2) -> Self {
        Self {
            target: TapTarget::new(key, anchor, pivot, size),
        }
    }
}

impl OverlayHandle for PlacementHandle {
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

impl Handle for PlacementHandle {
    fn update(&mut self, _screen: &ScreenState) -> bool {
        self.target.visible()
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.target.set_pivot(pivot);
    }

    fn pivot(&self) -> Vec2 {
        self.target.pivot()
    }
}
