//! Pixel-space geometry shared by the overlay widgets.
//!
//! Canonical space:
//! - Physical pixels (visual scale already applied)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Geographic math never happens here; projection-derived scalars reach
//! the overlay precomputed through `ScreenState`.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
