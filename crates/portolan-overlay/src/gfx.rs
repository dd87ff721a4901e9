//! Contracts to the GPU-side collaborators.
//!
//! The overlay consumes these narrow surfaces and never reaches past them:
//! buffer allocation, tessellation, and glyph layout all happen on the
//! other side. Every trait here is `Send` because a cached widget set is
//! built on one actor and handed to the render actor by ownership
//! transfer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::geom::Vec2;
use crate::screen::ScreenState;
use crate::widget::Anchor;

// ── Programs ──────────────────────────────────────────────────────────────

/// Shader program roles the overlay draws with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProgramRole {
    /// Textured quads: icons and marks.
    TexturedGui,
    /// Glyph geometry: labels.
    TextGui,
}

/// Shader program registry owned by the render backend.
pub trait GpuPrograms: Send {
    /// Makes the program for `role` compiled and bind-ready.
    fn prepare(&mut self, role: ProgramRole);
}

// ── Textures ──────────────────────────────────────────────────────────────

/// A resolved icon: opaque atlas slot plus pixel size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Icon {
    pub slot: u32,
    pub size: Vec2,
}

/// Texture atlas owned by the render backend.
pub trait TextureManager: Send {
    /// Looks up a named icon region, uploading it on first use.
    fn icon(&mut self, name: &str) -> Icon;

    /// Blocks until pending uploads are visible to the render queue.
    /// Issued once per cache pass, after every widget has built.
    fn flush(&mut self);
}

// ── Draw parts ────────────────────────────────────────────────────────────

/// One GPU-bound piece of widget geometry. Opaque to the overlay: built
/// once per GPU context, drawn every frame.
pub trait DrawPart: Send {
    fn build(&mut self, programs: &mut dyn GpuPrograms);
    fn draw(&mut self, screen: &ScreenState, programs: &mut dyn GpuPrograms);

    /// Moves the part. Called with the owning handle's pivot right before
    /// each draw, so drawn placement follows the handle.
    fn set_pivot(&mut self, pivot: Vec2);
}

// ── Part factory ──────────────────────────────────────────────────────────

/// Descriptor for a textured icon quad part.
///
/// `anchor`/`pivot` are the initial placement the backend realizes; live
/// placement afterwards belongs to the widget's handle.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadDesc {
    pub icon: Icon,
    pub anchor: Anchor,
    pub pivot: Vec2,
}

/// Descriptor for a label part.
///
/// For a mutable label, `text` is the widest content the label is expected
/// to show; the backend reserves glyph capacity for it.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDesc {
    pub text: String,
    pub anchor: Anchor,
    pub pivot: Vec2,
    /// Glyph height in pixels, visual scale already applied.
    pub font_px: f32,
}

/// A built static label: the drawable part plus its measured pixel size.
pub struct StaticLabel {
    pub part: Box<dyn DrawPart>,
    pub size: Vec2,
}

/// A built mutable label: the drawable part, the text cell its owner may
/// rewrite, and the pixel size reserved for the widest content.
pub struct MutableLabel {
    pub part: Box<dyn DrawPart>,
    pub text: SharedText,
    pub size: Vec2,
}

/// The widget-drawing boundary: turns descriptors into GPU-bound parts.
pub trait PartFactory: Send {
    fn textured_quad(&mut self, desc: QuadDesc) -> Box<dyn DrawPart>;
    fn static_label(&mut self, desc: LabelDesc) -> StaticLabel;
    fn mutable_label(&mut self, desc: LabelDesc) -> MutableLabel;
}

// ── Shared text ───────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct TextCell {
    text: String,
    generation: u64,
}

/// Clonable text slot shared between a widget handle (writer) and the
/// label part rendering it (reader).
#[derive(Debug, Clone, Default)]
pub struct SharedText {
    cell: Arc<Mutex<TextCell>>,
}

impl SharedText {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            cell: Arc::new(Mutex::new(TextCell {
                text: initial.into(),
                generation: 0,
            })),
        }
    }

    /// Replaces the text. Every call bumps the generation, equal content
    /// included; debouncing is the writer's job.
    pub fn set(&self, text: impl Into<String>) {
        let mut cell = self.lock();
        cell.text = text.into();
        cell.generation += 1;
    }

    pub fn get(&self) -> String {
        self.lock().text.clone()
    }

    /// Number of `set` calls since creation.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    fn lock(&self) -> MutexGuard<'_, TextCell> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
