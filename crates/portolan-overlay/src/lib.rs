//! Portolan overlay crate.
//!
//! Owns the always-on-screen widgets of the map view (compass, ruler,
//! copyright, scale label, position-pick marker, debug readout): caches
//! them into GPU-ready shape renderers, composites them over the map each
//! frame, migrates freshly cached geometry into the live frame without
//! losing an in-progress tap, and resolves touch input against overlay
//! geometry.
//!
//! GPU programs, texture atlases, tessellation, and glyph layout stay
//! behind the [`gfx`] contracts; this crate never allocates GPU memory.

pub mod cacher;
pub mod geom;
pub mod gfx;
pub mod handle;
pub mod layer;
pub mod logging;
pub mod screen;
pub mod shape;
pub mod skin;
pub mod widget;
pub mod widgets;

#[cfg(test)]
pub(crate) mod stubs;
