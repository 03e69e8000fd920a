//! Impact heatmap
//!
//! Row-major grid of hit counters covering the screen at a fixed cell
//! resolution. Counts only ever grow; normalization against the running peak
//! happens when the grid is read for display and is never stored.

use crate::config::SimulationConfig;
use crate::sampler::Impact;

#[derive(Debug, Clone)]
pub struct Heatmap {
    cells: Vec<u32>,
    width: usize,
    height: usize,
    resolution: u32,
    peak: u32,
    total: u64,
}

impl Heatmap {
    /// Grid of `screen / resolution` cells per axis, all zero.
    pub fn new(screen_width: u32, screen_height: u32, resolution: u32) -> Self {
        assert!(resolution > 0, "heatmap resolution must be non-zero");

        let width = (screen_width / resolution) as usize;
        let height = (screen_height / resolution) as usize;

        Self {
            cells: vec![0; width * height],
            width,
            height,
            resolution,
            peak: 0,
            total: 0,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.screen_width,
            config.screen_height,
            config.heatmap_resolution,
        )
    }

    /// `(columns, rows)`
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Highest count in any cell.
    pub fn peak(&self) -> u32 {
        self.peak
    }

    /// Impacts recorded since creation.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Cell containing `impact`, or `None` if it falls off the grid.
    pub fn cell_of(&self, impact: Impact) -> Option<(usize, usize)> {
        if !impact.is_finite() {
            return None;
        }

        let res = self.resolution as f64;
        let cx = (impact.x / res).floor();
        let cy = (impact.y / res).floor();

        if cx < 0.0 || cy < 0.0 || cx >= self.width as f64 || cy >= self.height as f64 {
            return None;
        }

        Some((cx as usize, cy as usize))
    }

    /// Count one impact. Returns `false` and leaves the grid untouched when
    /// the impact lands outside it.
    pub fn record(&mut self, impact: Impact) -> bool {
        let Some((cx, cy)) = self.cell_of(impact) else {
            return false;
        };

        let cell = &mut self.cells[cy * self.width + cx];
        *cell = cell.saturating_add(1);
        self.peak = self.peak.max(*cell);
        self.total += 1;
        true
    }

    pub fn count(&self, cx: usize, cy: usize) -> u32 {
        if cx < self.width && cy < self.height {
            self.cells[cy * self.width + cx]
        } else {
            0
        }
    }

    /// Count scaled by the running peak, in `[0, 1]`. An empty grid reads as
    /// zero everywhere.
    pub fn intensity(&self, cx: usize, cy: usize) -> f32 {
        self.count(cx, cy) as f32 / self.peak.max(1) as f32
    }

    /// Every cell as `(cx, cy, intensity)` in row-major order.
    pub fn intensities(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let max = self.peak.max(1) as f32;
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &count)| (i % width, i / width, count as f32 / max))
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }
}

/// Red-tinted display color for a normalized intensity.
pub fn heat_color(intensity: f32) -> [u8; 3] {
    let i = intensity.clamp(0.0, 1.0);
    [(255.0 * i) as u8, (50.0 * i) as u8, (50.0 * i) as u8]
}
