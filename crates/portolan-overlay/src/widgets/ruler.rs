//! Scale ruler widget: a bar whose pixel length matches a round
//! real-world distance, labelled with that distance.
//!
//! The distance snaps to the 1/2/5 ladder, so the bar length always
//! lands between the minimum width and 2.5 times it. Outside the ladder's
//! sensible range (continent zooms, degenerate projections) the ruler
//! hides instead of printing nonsense.

use crate::cacher::CacheContext;
use crate::geom::{Rect, Vec2};
use crate::gfx::{DrawPart, GpuPrograms, LabelDesc, QuadDesc, SharedText};
use crate::handle::Handle;
use crate::layer::LayerRenderer;
use crate::screen::ScreenState;
use crate::shape::ShapeRenderer;
use crate::widget::{ElementKey, Position, WidgetKind};
use crate::widgets::GUI_FONT_DP;

/// Minimum bar width in dp; the rounded distance never shrinks the bar
/// below this.
const MIN_BAR_DP: f32 = 60.0;
/// Distances outside this range hide the ruler.
const MIN_METRES: u64 = 10;
const MAX_METRES: u64 = 1_000_000;
/// Widest distance text the label must be able to hold.
const WIDEST_TEXT: &str = "8888 km";

// ── RulerHelper ───────────────────────────────────────────────────────────

/// Per-frame ruler state: the rounded distance text, the bar length it
/// implies, and a dirty flag marking frames on which the text changed.
#[derive(Debug, Default)]
pub struct RulerHelper {
    text: String,
    text_dirty: bool,
    bar_px: f32,
    visible: bool,
}

impl RulerHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes distance and bar length from `screen`. Returns whether
    /// the text changed; the dirty flag is raised alongside and stays up
    /// until [`clear_text_dirty`](Self::clear_text_dirty).
    pub fn update(&mut self, screen: &ScreenState) -> bool {
        let mpp = screen.metres_per_pixel;
        if mpp <= 0.0 {
            self.visible = false;
            return false;
        }
        let min_px = f64::from(MIN_BAR_DP * screen.visual_scale);
        let metres = nice_distance(mpp * min_px);
        self.visible = (MIN_METRES..=MAX_METRES).contains(&metres);
        if !self.visible {
            return false;
        }
        self.bar_px = (metres as f64 / mpp) as f32;
        let text = format_distance(metres);
        if text == self.text {
            return false;
        }
        self.text = text;
        self.text_dirty = true;
        true
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_text_dirty(&self) -> bool {
        self.text_dirty
    }

    #[inline]
    pub fn clear_text_dirty(&mut self) {
        self.text_dirty = false;
    }

    /// Bar length in pixels for the current distance.
    #[inline]
    pub fn bar_px(&self) -> f32 {
        self.bar_px
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Smallest 1/2/5-ladder distance not below `raw` metres.
fn nice_distance(raw: f64) -> u64 {
    let mut step = 1u64;
    while step <= MAX_METRES {
        for mult in [1, 2, 5] {
            let value = step * mult;
            if value as f64 >= raw {
                return value;
            }
        }
        step *= 10;
    }
    // Past the ladder; the range check hides the ruler for this value.
    step
}

/// Ladder distances are round, so kilometres divide exactly.
fn format_distance(metres: u64) -> String {
    if metres >= 1000 {
        format!("{} km", metres / 1000)
    } else {
        format!("{} m", metres)
    }
}

// ── RulerShape ────────────────────────────────────────────────────────────

/// The cached ruler: bar and label parts plus the helper deciding what
/// they show.
///
/// Owns no tappable elements; the frame prep contract is the interesting
/// part. [`prepare_frame`](ShapeRenderer::prepare_frame) runs before any
/// widget draws, drops the previous frame's dirty flag, and pushes new
/// text into the label's shared cell only when the distance actually
/// changed.
pub struct RulerShape {
    parts: Vec<Box<dyn DrawPart>>,
    text: SharedText,
    helper: RulerHelper,
}

impl RulerShape {
    pub fn new(parts: Vec<Box<dyn DrawPart>>, text: SharedText) -> Self {
        Self {
            parts,
            text,
            helper: RulerHelper::new(),
        }
    }
}

impl ShapeRenderer for RulerShape {
    fn build(&mut self, programs: &mut dyn GpuPrograms) {
        for part in &mut self.parts {
            part.build(programs);
        }
    }

    fn prepare_frame(&mut self, screen: &ScreenState) {
        self.helper.clear_text_dirty();
        if self.helper.update(screen) {
            self.text.set(self.helper.text());
        }
    }

    fn render(&mut self, screen: &ScreenState, programs: &mut dyn GpuPrograms) {
        if !self.helper.visible() {
            return;
        }
        for part in &mut self.parts {
            part.draw(screen, programs);
        }
    }

    fn hit_test(&mut self, _area: &Rect) -> Option<&mut dyn Handle> {
        None
    }

    fn find_handle(&mut self, _key: ElementKey) -> Option<&mut dyn Handle> {
        None
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        for part in &mut self.parts {
            part.set_pivot(pivot);
        }
    }
}

/// Builds the ruler and registers it on `layer`. Returns its pixel
/// footprint.
pub fn cache(position: &Position, layer: &mut LayerRenderer, ctx: &mut CacheContext<'_>) -> Vec2 {
    let icon = ctx.textures.icon("ruler_bar");
    let bar = ctx.parts.textured_quad(QuadDesc {
        icon,
        anchor: position.anchor,
        pivot: position.pivot,
    });
    let label = ctx.parts.mutable_label(LabelDesc {
        text: WIDEST_TEXT.to_string(),
        anchor: position.anchor,
        pivot: position.pivot,
        font_px: GUI_FONT_DP * ctx.visual_scale,
    });
    let size = Vec2::new(
        (MIN_BAR_DP * ctx.visual_scale).max(label.size.x),
        icon.size.y + label.size.y,
    );

    let shape = RulerShape::new(vec![bar, label.part], label.text);
    layer.add_shape_renderer(WidgetKind::Ruler, Some(Box::new(shape)));
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stubs::{StubFactory, StubPrograms, StubTextures, events, shared_log};
    use crate::widget::Anchor;

    fn screen_with_mpp(mpp: f64) -> ScreenState {
        let mut screen = ScreenState::new(Rect::new(0.0, 0.0, 800.0, 600.0), 1.0);
        screen.metres_per_pixel = mpp;
        screen
    }

    // ── rounding ──────────────────────────────────────────────────────────

    #[test]
    fn nice_distance_climbs_the_ladder() {
        assert_eq!(nice_distance(1.0), 1);
        assert_eq!(nice_distance(19.0), 20);
        assert_eq!(nice_distance(60.0), 100);
        assert_eq!(nice_distance(130.0), 200);
        assert_eq!(nice_distance(500.0), 500);
        assert_eq!(nice_distance(501.0), 1000);
        assert_eq!(nice_distance(900_001.0), 1_000_000);
    }

    #[test]
    fn format_switches_to_kilometres() {
        assert_eq!(format_distance(500), "500 m");
        assert_eq!(format_distance(1000), "1 km");
        assert_eq!(format_distance(20_000), "20 km");
        assert_eq!(format_distance(1_000_000), "1000 km");
    }

    // ── helper ────────────────────────────────────────────────────────────

    #[test]
    fn update_rounds_up_and_sizes_the_bar() {
        let mut helper = RulerHelper::new();
        // 60 px minimum at 5 m/px wants 300 m; the ladder gives 500 m.
        assert!(helper.update(&screen_with_mpp(5.0)));
        assert_eq!(helper.text(), "500 m");
        assert_eq!(helper.bar_px(), 100.0);
        assert!(helper.visible());
        assert!(helper.is_text_dirty());
    }

    #[test]
    fn update_is_quiet_while_the_distance_holds() {
        let mut helper = RulerHelper::new();
        assert!(helper.update(&screen_with_mpp(5.0)));
        helper.clear_text_dirty();
        assert!(!helper.update(&screen_with_mpp(5.1)));
        assert!(!helper.is_text_dirty());
        assert_eq!(helper.text(), "500 m");
    }

    #[test]
    fn bar_length_stays_within_ladder_bounds() {
        let mut helper = RulerHelper::new();
        for mpp in [0.1, 0.37, 2.0, 5.0, 41.0, 333.0] {
            assert!(helper.update(&screen_with_mpp(mpp)) || helper.visible());
            assert!(helper.bar_px() >= MIN_BAR_DP);
            assert!(helper.bar_px() < MIN_BAR_DP * 2.5);
        }
    }

    #[test]
    fn hides_outside_the_distance_range() {
        let mut helper = RulerHelper::new();
        assert!(!helper.update(&screen_with_mpp(0.0)));
        assert!(!helper.visible());
        // 60 px at 100 km/px is far past the 1000 km cap.
        assert!(!helper.update(&screen_with_mpp(100_000.0)));
        assert!(!helper.visible());
        // Street zoom: under 10 m.
        assert!(!helper.update(&screen_with_mpp(0.01)));
        assert!(!helper.visible());
    }

    #[test]
    fn visual_scale_widens_the_minimum_bar() {
        let mut helper = RulerHelper::new();
        let mut screen = screen_with_mpp(5.0);
        screen.visual_scale = 2.0;
        // 120 px at 5 m/px wants 600 m; the ladder gives 1 km.
        helper.update(&screen);
        assert_eq!(helper.text(), "1 km");
    }

    // ── shape ─────────────────────────────────────────────────────────────

    fn cached_ruler(log: &crate::stubs::CallLog) -> (LayerRenderer, StubFactory) {
        let mut textures = StubTextures::new(log).with_icon("ruler_bar", Vec2::new(60.0, 4.0));
        let mut parts = StubFactory::new(log);
        let mut layer = LayerRenderer::new();
        let mut ctx = CacheContext {
            textures: &mut textures,
            parts: &mut parts,
            visual_scale: 1.0,
            compass_tap: None,
        };
        let position = Position::new(Anchor::LeftBottom, Vec2::new(10.0, 580.0));
        cache(&position, &mut layer, &mut ctx);
        (layer, parts)
    }

    #[test]
    fn frame_prep_pushes_text_only_on_change() {
        let log = shared_log();
        let (mut layer, parts) = cached_ruler(&log);
        let text = parts.texts[0].clone();
        let mut programs = StubPrograms::new(&log);

        layer.render(&screen_with_mpp(5.0), &mut programs, false);
        assert_eq!(text.get(), "500 m");
        assert_eq!(text.generation(), 1);

        // Same distance next frame: no rewrite.
        layer.render(&screen_with_mpp(5.2), &mut programs, false);
        assert_eq!(text.generation(), 1);

        layer.render(&screen_with_mpp(21.0), &mut programs, false);
        assert_eq!(text.get(), "2 km");
        assert_eq!(text.generation(), 2);
    }

    #[test]
    fn invisible_ruler_draws_nothing() {
        let log = shared_log();
        let (mut layer, _parts) = cached_ruler(&log);

        layer.render(&screen_with_mpp(0.0), &mut StubPrograms::new(&log), false);
        assert!(events(&log).iter().all(|e| !e.starts_with("draw")));

        layer.render(&screen_with_mpp(5.0), &mut StubPrograms::new(&log), false);
        assert_eq!(events(&log).iter().filter(|e| e.starts_with("draw")).count(), 2);
    }

    #[test]
    fn ruler_owns_no_tappable_elements() {
        let log = shared_log();
        let (mut layer, _parts) = cached_ruler(&log);
        assert!(!layer.on_touch_down(&Rect::new(10.0, 570.0, 4.0, 4.0)));
    }
}
