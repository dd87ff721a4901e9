//! Widget placement resolution from `.skin` documents.
//!
//! A skin names widgets, their anchors, and dp offsets per orientation;
//! this module turns that into pixel placement maps for a concrete
//! viewport. Parsing itself lives in the `portolan-skin` crate.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use portolan_skin::{Placement, SkinDocument};

use crate::geom::Vec2;
use crate::widget::{Anchor, Position, WidgetInitMap, WidgetKind, WidgetLayoutMap};

/// A parsed skin, ready to resolve against viewports.
#[derive(Debug)]
pub struct Skin {
    doc: SkinDocument,
}

impl Skin {
    pub fn from_str(src: &str) -> Result<Skin> {
        let doc = portolan_skin::parse_str(src).context("parse skin document")?;
        Ok(Skin { doc })
    }

    pub fn load(path: &Path) -> Result<Skin> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("read skin file {}", path.display()))?;
        Self::from_str(&src).with_context(|| format!("in skin file {}", path.display()))
    }

    /// Pixel placements for `viewport`, dp offsets scaled by
    /// `visual_scale`.
    ///
    /// Wide viewports use the landscape section; either orientation falls
    /// back to the other when its section is empty. Placements naming an
    /// unknown widget or lacking a usable anchor are skipped.
    pub fn resolve(&self, viewport: Vec2, visual_scale: f32) -> WidgetInitMap {
        let mut map = WidgetInitMap::new();
        for placement in self.section_for(viewport) {
            let Some(kind) = WidgetKind::from_skin_name(&placement.widget) else {
                debug!("skin: unknown widget {:?}, skipped", placement.widget);
                continue;
            };
            let Some(position) = resolve_position(placement, viewport, visual_scale) else {
                debug!("skin: widget {:?} has no usable anchor, skipped", placement.widget);
                continue;
            };
            map.insert(kind, position);
        }
        map
    }

    /// Same placements viewed as a relayout map for already-cached
    /// widgets.
    pub fn resolve_layout(&self, viewport: Vec2, visual_scale: f32) -> WidgetLayoutMap {
        self.resolve(viewport, visual_scale)
    }

    fn section_for(&self, viewport: Vec2) -> &[Placement] {
        let landscape = viewport.x > viewport.y;
        let (primary, fallback) = if landscape {
            (&self.doc.landscape, &self.doc.portrait)
        } else {
            (&self.doc.portrait, &self.doc.landscape)
        };
        if primary.is_empty() { fallback } else { primary }
    }
}

/// Anchor plus scaled offset from the matching viewport corner or edge.
fn resolve_position(placement: &Placement, viewport: Vec2, visual_scale: f32) -> Option<Position> {
    let anchor = Anchor::from_skin_name(placement.ident("anchor")?)?;
    let (dx, dy) = placement.pair("offset").unwrap_or((0.0, 0.0));
    let pivot = anchor_corner(anchor, viewport) + Vec2::new(dx, dy) * visual_scale;
    Some(Position::new(anchor, pivot))
}

/// The viewport point an anchor's offset is measured from.
fn anchor_corner(anchor: Anchor, viewport: Vec2) -> Vec2 {
    use Anchor::*;
    let x = match anchor {
        Left | LeftTop | LeftBottom => 0.0,
        Right | RightTop | RightBottom => viewport.x,
        Center | Top | Bottom => viewport.x * 0.5,
    };
    let y = match anchor {
        Top | LeftTop | RightTop => 0.0,
        Bottom | LeftBottom | RightBottom => viewport.y,
        Center | Left | Right => viewport.y * 0.5,
    };
    Vec2::new(x, y)
}
