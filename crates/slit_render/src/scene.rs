//! Frame composition
//!
//! Layers, back to front: background, interference lines, slit markers,
//! heatmap cells, status label.

use crate::canvas::{rgb, Canvas, Rgba};
use slit_core::field::InterferenceField;
use slit_core::heatmap::{heat_color, Heatmap};
use slit_core::{DetectorMode, SlitSet};

/// Size of the marker drawn at each slit point.
pub const SLIT_MARKER: (u32, u32) = (5, 2);
pub const LABEL_POSITION: (i32, i32) = (20, 20);
pub const LABEL_SCALE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba,
    pub slit: Rgba,
    pub text: Rgba,
}

/// Everything one frame needs to be drawn.
pub struct Scene<'a> {
    pub field: &'a InterferenceField,
    pub slits: &'a SlitSet,
    pub heatmap: &'a Heatmap,
    pub detector: DetectorMode,
}

pub fn status_label(detector: DetectorMode) -> String {
    format!("Detector: {}", detector.label())
}

pub fn paint(canvas: &mut Canvas, scene: &Scene<'_>, palette: &Palette) {
    canvas.fill(palette.background);
    paint_field(canvas, scene.field);
    paint_slits(canvas, scene.slits, palette.slit);
    paint_heatmap(canvas, scene.heatmap);

    let (x, y) = LABEL_POSITION;
    canvas.draw_text(x, y, &status_label(scene.detector), LABEL_SCALE, palette.text);
}

pub fn paint_field(canvas: &mut Canvas, field: &InterferenceField) {
    for &(x, grey) in field.columns() {
        canvas.vline(x, rgb([grey, grey, grey]));
    }
}

pub fn paint_slits(canvas: &mut Canvas, slits: &SlitSet, color: Rgba) {
    let (w, h) = SLIT_MARKER;
    for point in slits.iter() {
        canvas.fill_rect(point.x as i32, point.y as i32, w, h, color);
    }
}

/// Cells with no impacts are left transparent so the field shows through.
pub fn paint_heatmap(canvas: &mut Canvas, heatmap: &Heatmap) {
    let res = heatmap.resolution();
    for (cx, cy, intensity) in heatmap.intensities() {
        if intensity <= 0.0 {
            continue;
        }
        canvas.fill_rect(
            (cx as u32 * res) as i32,
            (cy as u32 * res) as i32,
            res,
            res,
            rgb(heat_color(intensity)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slit_core::glam::DVec2;
    use slit_core::SimulationConfig;

    struct Fixture {
        config: SimulationConfig,
        slits: SlitSet,
        field: InterferenceField,
        heatmap: Heatmap,
    }

    fn fixture() -> Fixture {
        let config = SimulationConfig::default();
        let slits = SlitSet::generate(&config);
        let field = InterferenceField::new(&slits, &config);
        let heatmap = Heatmap::from_config(&config);
        Fixture {
            config,
            slits,
            field,
            heatmap,
        }
    }

    const PALETTE: Palette = Palette {
        background: [10, 10, 30, 255],
        slit: [200, 200, 200, 255],
        text: [255, 255, 255, 255],
    };

    fn draw(fx: &Fixture, detector: DetectorMode) -> Canvas {
        let mut canvas = Canvas::new(fx.config.screen_width, fx.config.screen_height);
        let scene = Scene {
            field: &fx.field,
            slits: &fx.slits,
            heatmap: &fx.heatmap,
            detector,
        };
        paint(&mut canvas, &scene, &PALETTE);
        canvas
    }

    #[test]
    fn label_text() {
        assert_eq!(status_label(DetectorMode::Off), "Detector: OFF");
        assert_eq!(status_label(DetectorMode::On), "Detector: ON");
    }

    #[test]
    fn odd_columns_keep_background() {
        let fx = fixture();
        let canvas = draw(&fx, DetectorMode::Off);
        assert_eq!(canvas.pixel(101, 650), Some(PALETTE.background));
    }

    #[test]
    fn slit_markers_drawn_over_field() {
        let fx = fixture();
        let canvas = draw(&fx, DetectorMode::Off);
        assert_eq!(canvas.pixel(402, 340), Some(PALETTE.slit));
        assert_eq!(canvas.pixel(602, 340), Some(PALETTE.slit));
    }

    #[test]
    fn heatmap_cells_overlay() {
        let mut fx = fixture();
        fx.heatmap.record(DVec2::new(702.0, 603.0));
        let canvas = draw(&fx, DetectorMode::Off);

        for (x, y) in [(700, 600), (704, 604)] {
            assert_eq!(canvas.pixel(x, y), Some([255, 50, 50, 255]));
        }
        assert_ne!(canvas.pixel(705, 600), Some([255, 50, 50, 255]));
    }

    #[test]
    fn label_changes_with_mode() {
        let fx = fixture();
        let off = draw(&fx, DetectorMode::Off);
        let on = draw(&fx, DetectorMode::On);
        assert_ne!(off.as_bytes(), on.as_bytes());

        // Top-left stroke of "D"
        assert_eq!(on.pixel(20, 20), Some(PALETTE.text));
    }
}
