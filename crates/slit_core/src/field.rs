//! Background interference field
//!
//! Sum of one Gaussian per slit point, evaluated per screen column. Purely
//! decorative: the sampler never reads it.

use crate::config::SimulationConfig;
use crate::geometry::SlitSet;
use crate::math::gaussian;

/// Columns between drawn field lines.
pub const COLUMN_STEP: usize = 2;

/// Raw field intensity at horizontal position `x`.
pub fn field_intensity(x: f64, slits: &SlitSet, sigma: f64) -> f64 {
    slits.iter().map(|slit| gaussian(x, slit.x, sigma)).sum()
}

/// Grey level for a raw intensity, saturating at 255.
pub fn shade(intensity: f64) -> u8 {
    (255.0 * intensity).clamp(0.0, 255.0) as u8
}

/// Grey level of every drawn column, computed once since the slits never
/// move.
#[derive(Debug, Clone)]
pub struct InterferenceField {
    columns: Vec<(u32, u8)>,
}

impl InterferenceField {
    pub fn new(slits: &SlitSet, config: &SimulationConfig) -> Self {
        let sigma = config.field_sigma() as f64;
        let columns = (0..config.screen_width)
            .step_by(COLUMN_STEP)
            .map(|x| (x, shade(field_intensity(x as f64, slits, sigma))))
            .collect();

        tracing::debug!(slits = slits.len(), sigma, "interference field computed");
        Self { columns }
    }

    /// `(x, grey)` for each drawn column, left to right.
    pub fn columns(&self) -> &[(u32, u8)] {
        &self.columns
    }
}
