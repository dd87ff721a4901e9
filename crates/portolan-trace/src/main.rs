//! Headless overlay walkthrough.
//!
//! Caches the standard widgets from a built-in skin against a console
//! backend, renders a few frames, swaps in a freshly cached set in the
//! middle of a compass press, and finishes with a routing frame and the
//! position-pick marker. Run with `RUST_LOG=debug` to see every draw
//! call.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info};
use portolan_overlay::cacher::LayerCacher;
use portolan_overlay::geom::{Rect, Vec2};
use portolan_overlay::gfx::{
    DrawPart, GpuPrograms, Icon, LabelDesc, MutableLabel, PartFactory, ProgramRole, QuadDesc,
    SharedText, StaticLabel, TextureManager,
};
use portolan_overlay::logging::{LoggingConfig, init_logging};
use portolan_overlay::screen::ScreenState;
use portolan_overlay::skin::Skin;
use portolan_overlay::widget::WidgetKind;

const BUILTIN_SKIN: &str = r#"
portrait {
    compass {
        anchor: right_top
        offset: -28 92
    }
    ruler {
        anchor: left_bottom
        offset: 10 -20
    }
    copyright {
        anchor: right_bottom
        offset: -10 -10
    }
    scale_label {
        anchor: left_bottom
        offset: 10 -44
    }
}
landscape {
    compass {
        anchor: right_top
        offset: -44 48
    }
    ruler {
        anchor: left_bottom
        offset: 16 -16
    }
    copyright {
        anchor: right_bottom
        offset: -16 -10
    }
    scale_label {
        anchor: left_bottom
        offset: 16 -40
    }
}
"#;

// ── Console backend ───────────────────────────────────────────────────────

struct ConsolePrograms;

impl GpuPrograms for ConsolePrograms {
    fn prepare(&mut self, role: ProgramRole) {
        debug!("programs: prepare {:?}", role);
    }
}

struct ConsoleTextures {
    lookups: u32,
}

impl TextureManager for ConsoleTextures {
    fn icon(&mut self, name: &str) -> Icon {
        self.lookups += 1;
        debug!("textures: icon {:?} -> slot {}", name, self.lookups);
        Icon {
            slot: self.lookups,
            size: Vec2::new(40.0, 40.0),
        }
    }

    fn flush(&mut self) {
        info!("textures: flush, {} lookups so far", self.lookups);
    }
}

struct ConsoleQuad {
    name: String,
    pivot: Vec2,
}

impl DrawPart for ConsoleQuad {
    fn build(&mut self, programs: &mut dyn GpuPrograms) {
        programs.prepare(ProgramRole::TexturedGui);
        debug!("quad {}: built", self.name);
    }

    fn draw(&mut self, _screen: &ScreenState, _programs: &mut dyn GpuPrograms) {
        debug!("quad {}: draw at {},{}", self.name, self.pivot.x, self.pivot.y);
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }
}

struct ConsoleLabel {
    text: SharedText,
    pivot: Vec2,
}

impl DrawPart for ConsoleLabel {
    fn build(&mut self, programs: &mut dyn GpuPrograms) {
        programs.prepare(ProgramRole::TextGui);
        debug!("label {:?}: built", self.text.get());
    }

    fn draw(&mut self, _screen: &ScreenState, _programs: &mut dyn GpuPrograms) {
        debug!(
            "label: draw {:?} at {},{}",
            self.text.get(),
            self.pivot.x,
            self.pivot.y
        );
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }
}

struct ConsoleParts;

impl ConsoleParts {
    fn measure(desc: &LabelDesc) -> Vec2 {
        Vec2::new(
            desc.text.chars().count() as f32 * desc.font_px * 0.5,
            desc.font_px,
        )
    }
}

impl PartFactory for ConsoleParts {
    fn textured_quad(&mut self, desc: QuadDesc) -> Box<dyn DrawPart> {
        Box::new(ConsoleQuad {
            name: format!("slot{}", desc.icon.slot),
            pivot: desc.pivot,
        })
    }

    fn static_label(&mut self, desc: LabelDesc) -> StaticLabel {
        let size = Self::measure(&desc);
        StaticLabel {
            part: Box::new(ConsoleLabel {
                text: SharedText::new(desc.text),
                pivot: desc.pivot,
            }),
            size,
        }
    }

    fn mutable_label(&mut self, desc: LabelDesc) -> MutableLabel {
        let size = Self::measure(&desc);
        let text = SharedText::new(desc.text);
        MutableLabel {
            part: Box::new(ConsoleLabel {
                text: text.clone(),
                pivot: desc.pivot,
            }),
            text,
            size,
        }
    }
}

// ── Walkthrough ───────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let visual_scale = 1.5;
    let viewport = Vec2::new(900.0, 1600.0);
    let skin = Skin::from_str(BUILTIN_SKIN)?;
    let init = skin.resolve(viewport, visual_scale);
    info!("skin resolved: {} widgets for a {}x{} viewport", init.len(), viewport.x, viewport.y);

    let mut cacher = LayerCacher::new(visual_scale);
    cacher.set_compass_tap(Arc::new(|| {
        info!("compass tapped: animating back to north");
    }));

    let mut textures = ConsoleTextures { lookups: 0 };
    let mut parts = ConsoleParts;
    let (mut layer, sizes) = cacher.recache_widgets(&init, &mut textures, &mut parts);
    for (kind, size) in &sizes {
        info!("cached {:?}: {} x {} px", kind, size.x, size.y);
    }

    let mut programs = ConsolePrograms;
    layer.build(&mut programs);

    // A rotated, mid-zoom view; then a zoom-out that moves the ruler and
    // scale label.
    let mut screen = ScreenState::new(Rect::from_origin_size(Vec2::zero(), viewport), visual_scale);
    screen.rotation = 0.6;
    screen.zoom = 14.2;
    screen.metres_per_pixel = 2.4;
    info!("frame 1: rotated, zoom {}", screen.zoom);
    layer.render(&screen, &mut programs, false);

    screen.zoom = 13.1;
    screen.metres_per_pixel = 4.8;
    info!("frame 2: zoomed out to {}", screen.zoom);
    layer.render(&screen, &mut programs, false);

    // Press the compass, then absorb a fresh cache mid-press. The press
    // survives the swap because the compass keeps its element key.
    let compass = init
        .get(&WidgetKind::Compass)
        .context("compass missing from the built-in skin")?;
    let touch = Rect::from_center_half_size(compass.pivot, Vec2::new(8.0, 8.0));
    if layer.on_touch_down(&touch) {
        info!("press started on the compass");
    }

    let (mut fresh, _) = cacher.recache_widgets(&init, &mut textures, &mut parts);
    fresh.build(&mut programs);
    layer.merge(&mut fresh);
    info!("fresh widget set merged mid-press");

    layer.on_touch_up(&touch);

    // Routing owns the screen edges: compass and ruler sit this frame out.
    info!("frame 3: routing active");
    layer.render(&screen, &mut programs, true);

    // The device flips to landscape: same skin, new pivots, same widgets.
    let landscape = Vec2::new(1600.0, 900.0);
    layer.set_layout(&skin.resolve_layout(landscape, visual_scale));
    screen.pixel_rect = Rect::from_origin_size(Vec2::zero(), landscape);
    info!("frame 4: landscape relayout");
    layer.render(&screen, &mut programs, false);

    // Position-pick mode runs its own single-widget set.
    let mut picking = cacher.recache_choose_position_mark(landscape, &mut textures, &mut parts);
    picking.build(&mut programs);
    info!("frame 5: position-pick marker");
    picking.render(&screen, &mut programs, false);

    info!("trace complete");
    Ok(())
}
