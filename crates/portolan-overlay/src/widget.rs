//! Widget identity, placement descriptors, and kind sets.

use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::geom::Vec2;

// ── WidgetKind ────────────────────────────────────────────────────────────

/// The closed set of overlay widgets.
///
/// `Ord` matters: every widget-indexed mapping in this crate is a
/// `BTreeMap`, and hit-testing is defined over mapping iteration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum WidgetKind {
    Compass,
    Ruler,
    Copyright,
    ScaleLabel,
    ChoosePositionMark,
    DebugInfo,
}

impl WidgetKind {
    /// Name as written in `.skin` documents.
    pub fn skin_name(self) -> &'static str {
        match self {
            WidgetKind::Compass => "compass",
            WidgetKind::Ruler => "ruler",
            WidgetKind::Copyright => "copyright",
            WidgetKind::ScaleLabel => "scale_label",
            WidgetKind::ChoosePositionMark => "choose_position_mark",
            WidgetKind::DebugInfo => "debug_info",
        }
    }

    pub fn from_skin_name(name: &str) -> Option<Self> {
        Some(match name {
            "compass" => WidgetKind::Compass,
            "ruler" => WidgetKind::Ruler,
            "copyright" => WidgetKind::Copyright,
            "scale_label" => WidgetKind::ScaleLabel,
            "choose_position_mark" => WidgetKind::ChoosePositionMark,
            "debug_info" => WidgetKind::DebugInfo,
            _ => return None,
        })
    }
}

// ── WidgetSet ─────────────────────────────────────────────────────────────

bitflags! {
    /// Set of widget kinds.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct WidgetSet: u8 {
        const RULER                = 0b00_0001;
        const COMPASS              = 0b00_0010;
        const COPYRIGHT            = 0b00_0100;
        const SCALE_LABEL          = 0b00_1000;
        const CHOOSE_POSITION_MARK = 0b01_0000;
        const DEBUG_INFO           = 0b10_0000;
    }
}

impl WidgetSet {
    /// Widgets hidden while turn-by-turn routing owns the screen edges.
    pub const ROUTING_SUPPRESSED: WidgetSet =
        WidgetSet::COMPASS.union(WidgetSet::RULER);
}

impl From<WidgetKind> for WidgetSet {
    fn from(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Ruler => WidgetSet::RULER,
            WidgetKind::Compass => WidgetSet::COMPASS,
            WidgetKind::Copyright => WidgetSet::COPYRIGHT,
            WidgetKind::ScaleLabel => WidgetSet::SCALE_LABEL,
            WidgetKind::ChoosePositionMark => WidgetSet::CHOOSE_POSITION_MARK,
            WidgetKind::DebugInfo => WidgetSet::DEBUG_INFO,
        }
    }
}

// ── Anchor / Position ─────────────────────────────────────────────────────

/// Which point of a widget's box coincides with its pivot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Anchor {
    Center,
    Left,
    Right,
    Top,
    Bottom,
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

impl Anchor {
    pub fn from_skin_name(name: &str) -> Option<Self> {
        Some(match name {
            "center" => Anchor::Center,
            "left" => Anchor::Left,
            "right" => Anchor::Right,
            "top" => Anchor::Top,
            "bottom" => Anchor::Bottom,
            "left_top" => Anchor::LeftTop,
            "right_top" => Anchor::RightTop,
            "left_bottom" => Anchor::LeftBottom,
            "right_bottom" => Anchor::RightBottom,
            _ => return None,
        })
    }

    /// Top-left origin of a box of `size` whose anchor point sits at `pivot`.
    pub fn aligned_origin(self, pivot: Vec2, size: Vec2) -> Vec2 {
        use Anchor::*;
        let x = match self {
            Left | LeftTop | LeftBottom => pivot.x,
            Right | RightTop | RightBottom => pivot.x - size.x,
            Center | Top | Bottom => pivot.x - size.x * 0.5,
        };
        let y = match self {
            Top | LeftTop | RightTop => pivot.y,
            Bottom | LeftBottom | RightBottom => pivot.y - size.y,
            Center | Left | Right => pivot.y - size.y * 0.5,
        };
        Vec2::new(x, y)
    }
}

/// Placement of a widget: a pixel pivot plus the anchor pinning the
/// widget's box to it. Immutable once the widget is cached; relayout
/// supplies a whole new descriptor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Position {
    pub anchor: Anchor,
    pub pivot: Vec2,
}

impl Position {
    #[inline]
    pub const fn new(anchor: Anchor, pivot: Vec2) -> Self {
        Self { anchor, pivot }
    }
}

// ── ElementKey ────────────────────────────────────────────────────────────

/// Identity of the data source an element key is scoped to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SourceId(pub u16);

impl SourceId {
    /// Reserved source for the built-in overlay widgets.
    pub const GUI: SourceId = SourceId(0);
}

/// Stable logical identity of a tappable overlay element.
///
/// Survives recaches: a rebuilt widget produces new geometry under the
/// same key, which is how tap state transfers across a merge.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElementKey {
    pub source: SourceId,
    pub index: u32,
}

impl ElementKey {
    #[inline]
    pub const fn new(source: SourceId, index: u32) -> Self {
        Self { source, index }
    }

    #[inline]
    pub const fn gui(index: u32) -> Self {
        Self::new(SourceId::GUI, index)
    }

    pub const COMPASS: ElementKey = ElementKey::gui(1);
    pub const RULER: ElementKey = ElementKey::gui(2);
    pub const COPYRIGHT: ElementKey = ElementKey::gui(3);
    pub const SCALE_LABEL: ElementKey = ElementKey::gui(4);
}

// ── Widget-indexed maps ───────────────────────────────────────────────────

/// Desired positions for the widgets a recache should build.
pub type WidgetInitMap = BTreeMap<WidgetKind, Position>;

/// New positions to apply to already-cached widgets after a viewport change.
pub type WidgetLayoutMap = BTreeMap<WidgetKind, Position>;

/// Pixel footprint reported for each widget a recache built.
pub type WidgetSizeMap = BTreeMap<WidgetKind, Vec2>;
