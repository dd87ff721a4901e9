//! Recording fakes for the gfx and shape contracts, shared by unit tests.
//!
//! Every fake appends one line per call to a shared log so tests can
//! assert on call order and counts.

use std::sync::{Arc, Mutex};

use crate::geom::{Rect, Vec2};
use crate::gfx::{
    DrawPart, GpuPrograms, Icon, LabelDesc, MutableLabel, PartFactory, ProgramRole, QuadDesc,
    SharedText, StaticLabel, TextureManager,
};
use crate::handle::{Handle, OverlayHandle};
use crate::screen::ScreenState;
use crate::shape::ShapeRenderer;
use crate::widget::ElementKey;

pub(crate) type CallLog = Arc<Mutex<Vec<String>>>;

pub(crate) fn shared_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn events(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

fn push(log: &CallLog, event: String) {
    log.lock().unwrap().push(event);
}

// ── StubPrograms ──────────────────────────────────────────────────────────

pub(crate) struct StubPrograms {
    log: CallLog,
}

impl StubPrograms {
    pub(crate) fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl GpuPrograms for StubPrograms {
    fn prepare(&mut self, role: ProgramRole) {
        push(&self.log, format!("prepare {:?}", role));
    }
}

// ── StubTextures ──────────────────────────────────────────────────────────

pub(crate) struct StubTextures {
    log: CallLog,
    sizes: Vec<(&'static str, Vec2)>,
    next_slot: u32,
}

impl StubTextures {
    pub(crate) fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            sizes: Vec::new(),
            next_slot: 1,
        }
    }

    pub(crate) fn with_icon(mut self, name: &'static str, size: Vec2) -> Self {
        self.sizes.push((name, size));
        self
    }
}

impl TextureManager for StubTextures {
    fn icon(&mut self, name: &str) -> Icon {
        push(&self.log, format!("icon {}", name));
        let size = self
            .sizes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, s)| *s)
            .unwrap_or(Vec2::new(32.0, 32.0));
        let slot = self.next_slot;
        self.next_slot += 1;
        Icon { slot, size }
    }

    fn flush(&mut self) {
        push(&self.log, "flush".to_string());
    }
}

// ── StubPart / StubFactory ────────────────────────────────────────────────

pub(crate) struct StubPart {
    name: String,
    log: CallLog,
}

impl StubPart {
    pub(crate) fn new(name: impl Into<String>, log: &CallLog) -> Self {
        Self {
            name: name.into(),
            log: log.clone(),
        }
    }
}

impl DrawPart for StubPart {
    fn build(&mut self, _programs: &mut dyn GpuPrograms) {
        push(&self.log, format!("build {}", self.name));
    }

    fn draw(&mut self, _screen: &ScreenState, _programs: &mut dyn GpuPrograms) {
        push(&self.log, format!("draw {}", self.name));
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        push(&self.log, format!("place {} at {},{}", self.name, pivot.x, pivot.y));
    }
}

/// Produces [`StubPart`]s and remembers every [`SharedText`] it hands out
/// so tests can watch label content from the outside.
pub(crate) struct StubFactory {
    log: CallLog,
    pub(crate) texts: Vec<SharedText>,
}

impl StubFactory {
    pub(crate) fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            texts: Vec::new(),
        }
    }

    fn measure(desc: &LabelDesc) -> Vec2 {
        Vec2::new(desc.text.chars().count() as f32 * desc.font_px * 0.5, desc.font_px)
    }
}

impl PartFactory for StubFactory {
    fn textured_quad(&mut self, desc: QuadDesc) -> Box<dyn DrawPart> {
        push(
            &self.log,
            format!("quad slot {} at {},{}", desc.icon.slot, desc.pivot.x, desc.pivot.y),
        );
        Box::new(StubPart::new(format!("quad{}", desc.icon.slot), &self.log))
    }

    fn static_label(&mut self, desc: LabelDesc) -> StaticLabel {
        push(&self.log, format!("static_label {}", desc.text));
        StaticLabel {
            size: Self::measure(&desc),
            part: Box::new(StubPart::new(format!("label:{}", desc.text), &self.log)),
        }
    }

    fn mutable_label(&mut self, desc: LabelDesc) -> MutableLabel {
        push(&self.log, format!("mutable_label {}", desc.text));
        let text = SharedText::new(desc.text.clone());
        self.texts.push(text.clone());
        MutableLabel {
            size: Self::measure(&desc),
            part: Box::new(StubPart::new("mlabel", &self.log)),
            text,
        }
    }
}

// ── StubHandle ────────────────────────────────────────────────────────────

pub(crate) struct StubHandle {
    key: ElementKey,
    visible: bool,
    hit: bool,
    /// When set, hits are decided by area overlap instead of `hit`.
    bounds: Option<Rect>,
    pivot: Vec2,
    log: CallLog,
}

impl StubHandle {
    pub(crate) fn new(key: ElementKey, log: &CallLog) -> Self {
        Self {
            key,
            visible: true,
            hit: true,
            bounds: None,
            pivot: Vec2::zero(),
            log: log.clone(),
        }
    }

    /// Invisible this frame; never hit.
    pub(crate) fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Visible but outside any touch area.
    pub(crate) fn missing(mut self) -> Self {
        self.hit = false;
        self
    }

    /// Hit exactly when the touch area overlaps `bounds`.
    pub(crate) fn within(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

impl OverlayHandle for StubHandle {
    fn on_tap_begin(&mut self) {
        push(&self.log, format!("tap_begin {}", self.key.index));
    }

    fn on_tap(&mut self) {
        push(&self.log, format!("tap {}", self.key.index));
    }

    fn on_tap_end(&mut self) {
        push(&self.log, format!("tap_end {}", self.key.index));
    }

    fn is_tapped(&self, area: &Rect) -> bool {
        self.visible
            && match self.bounds {
                Some(bounds) => bounds.intersects(*area),
                None => self.hit,
            }
    }

    fn element_key(&self) -> ElementKey {
        self.key
    }
}

impl Handle for StubHandle {
    fn update(&mut self, _screen: &ScreenState) -> bool {
        self.visible
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
        push(
            &self.log,
            format!("set_pivot {} at {},{}", self.key.index, pivot.x, pivot.y),
        );
    }

    fn pivot(&self) -> Vec2 {
        self.pivot
    }
}

// ── StubShape ─────────────────────────────────────────────────────────────

/// Minimal [`ShapeRenderer`] for compositing tests: records lifecycle
/// calls and exposes scripted handles.
pub(crate) struct StubShape {
    name: &'static str,
    handles: Vec<StubHandle>,
    log: CallLog,
}

impl StubShape {
    pub(crate) fn new(name: &'static str, log: &CallLog) -> Self {
        Self {
            name,
            handles: Vec::new(),
            log: log.clone(),
        }
    }

    pub(crate) fn with_handle(mut self, handle: StubHandle) -> Self {
        self.handles.push(handle);
        self
    }

    pub(crate) fn boxed(self) -> Box<dyn ShapeRenderer> {
        Box::new(self)
    }
}

impl ShapeRenderer for StubShape {
    fn build(&mut self, _programs: &mut dyn GpuPrograms) {
        push(&self.log, format!("build {}", self.name));
    }

    fn prepare_frame(&mut self, _screen: &ScreenState) {
        push(&self.log, format!("prepare {}", self.name));
    }

    fn render(&mut self, _screen: &ScreenState, _programs: &mut dyn GpuPrograms) {
        push(&self.log, format!("render {}", self.name));
    }

    fn hit_test(&mut self, area: &Rect) -> Option<&mut dyn Handle> {
        self.handles
            .iter_mut()
            .find(|h| h.is_tapped(area))
            .map(|h| h as &mut dyn Handle)
    }

    fn find_handle(&mut self, key: ElementKey) -> Option<&mut dyn Handle> {
        self.handles
            .iter_mut()
            .find(|h| h.element_key() == key)
            .map(|h| h as &mut dyn Handle)
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        for handle in &mut self.handles {
            handle.set_pivot(pivot);
        }
    }
}
