//! Shape renderer contract and the standard control bundle.

use crate::geom::{Rect, Vec2};
use crate::gfx::{DrawPart, GpuPrograms};
use crate::handle::Handle;
use crate::screen::ScreenState;
use crate::widget::ElementKey;

/// A cached widget: GPU-bound geometry plus its tappable handles.
///
/// Built by the cacher, owned by the compositing layer, one per widget
/// kind. Handle lookups return the full [`Handle`] surface; the layer
/// itself only drives the tap capability half of it.
pub trait ShapeRenderer: Send {
    /// Realizes every part against the GPU programs. Called once per
    /// context acquisition, before the first render.
    fn build(&mut self, programs: &mut dyn GpuPrograms);

    /// Per-frame refresh that must run before any widget draws,
    /// including frames on which this widget itself is not drawn.
    fn prepare_frame(&mut self, screen: &ScreenState) {
        let _ = screen;
    }

    /// Updates handles against `screen` and draws the visible parts.
    fn render(&mut self, screen: &ScreenState, programs: &mut dyn GpuPrograms);

    /// First handle hit by `area`, in insertion order.
    fn hit_test(&mut self, area: &Rect) -> Option<&mut dyn Handle>;

    /// Handle carrying `key`, if this widget owns one.
    fn find_handle(&mut self, key: ElementKey) -> Option<&mut dyn Handle>;

    /// Moves every handle's pivot (relayout).
    fn set_pivot(&mut self, pivot: Vec2);
}

// ── ShapeBundle ───────────────────────────────────────────────────────────

/// One drawable part plus the handle owning its placement, if any.
pub struct ShapeControl {
    pub part: Box<dyn DrawPart>,
    pub handle: Option<Box<dyn Handle>>,
}

/// Standard [`ShapeRenderer`]: an ordered list of controls.
///
/// Render updates each control's handle first and skips parts whose
/// handle reports them invisible. A visible part is re-placed at its
/// handle's pivot before it draws; handle-less parts always draw, fixed
/// where they were built.
#[derive(Default)]
pub struct ShapeBundle {
    controls: Vec<ShapeControl>,
}

impl ShapeBundle {
    pub fn new() -> Self {
        Self { controls: Vec::new() }
    }

    pub fn push(&mut self, part: Box<dyn DrawPart>, handle: Option<Box<dyn Handle>>) {
        self.controls.push(ShapeControl { part, handle });
    }
}

impl ShapeRenderer for ShapeBundle {
    fn build(&mut self, programs: &mut dyn GpuPrograms) {
        for control in &mut self.controls {
            control.part.build(programs);
        }
    }

    fn render(&mut self, screen: &ScreenState, programs: &mut dyn GpuPrograms) {
        for control in &mut self.controls {
            match control.handle.as_deref_mut() {
                Some(handle) => {
                    if handle.update(screen) {
                        control.part.set_pivot(handle.pivot());
                        control.part.draw(screen, programs);
                    }
                }
                None => control.part.draw(screen, programs),
            }
        }
    }

    fn hit_test(&mut self, area: &Rect) -> Option<&mut dyn Handle> {
        self.controls
            .iter_mut()
            .filter_map(|c| c.handle.as_deref_mut().map(|h| h as &mut dyn Handle))
            .find(|h| h.is_tapped(area))
    }

    fn find_handle(&mut self, key: ElementKey) -> Option<&mut dyn Handle> {
        self.controls
            .iter_mut()
            .filter_map(|c| c.handle.as_deref_mut().map(|h| h as &mut dyn Handle))
            .find(|h| h.element_key() == key)
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        for control in &mut self.controls {
            if let Some(handle) = control.handle.as_deref_mut() {
                handle.set_pivot(pivot);
            }
        }
    }
}
