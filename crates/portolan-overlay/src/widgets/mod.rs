//! The overlay widgets themselves.
//!
//! Each module owns one widget kind end to end: the cache function that
//! builds its parts through the gfx contracts and registers the shape on
//! a layer, plus whatever handle keeps the widget alive per frame. Cache
//! functions share one signature so the cacher can dispatch over a flat
//! table.

pub mod choose_position_mark;
pub mod compass;
pub mod copyright;
#[cfg(feature = "debug-labels")]
pub mod debug_label;
pub mod ruler;
pub mod scale_label;

/// Glyph height shared by the standard text widgets, in dp.
pub(crate) const GUI_FONT_DP: f32 = 14.0;
