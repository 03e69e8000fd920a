//! Slit geometry
//!
//! Two vertical apertures centered on the screen, each sampled at every
//! integer row of its span.

use crate::config::SimulationConfig;
use glam::DVec2;

/// Ordered sample points of both slits, left slit first.
#[derive(Debug, Clone, PartialEq)]
pub struct SlitSet {
    points: Vec<DVec2>,
}

impl SlitSet {
    /// Build the slit points for `config`.
    ///
    /// Each slit covers rows `[height/2 - width/2, height/2 + width/2)` at
    /// `center_x ± separation/2`.
    pub fn generate(config: &SimulationConfig) -> Self {
        let center_x = config.center_x() as i64;
        let half_sep = config.half_separation() as i64;
        let mid_y = (config.screen_height / 2) as i64;
        let half_width = config.half_slit_width() as i64;

        let points = [-half_sep, half_sep]
            .into_iter()
            .flat_map(|offset| {
                let x = (center_x + offset) as f64;
                (mid_y - half_width..mid_y + half_width).map(move |y| DVec2::new(x, y as f64))
            })
            .collect();

        Self { points }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVec2> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_slits() {
        let slits = SlitSet::generate(&SimulationConfig::default());
        assert_eq!(slits.len(), 100);

        let (left, right) = slits.points().split_at(50);
        assert!(left.iter().all(|p| p.x == 400.0));
        assert!(right.iter().all(|p| p.x == 600.0));

        assert_eq!(left[0].y, 325.0);
        assert_eq!(left[49].y, 374.0);
        assert_eq!(right[0].y, 325.0);
    }

    #[test]
    fn generation_is_deterministic() {
        let config = SimulationConfig::default();
        assert_eq!(SlitSet::generate(&config), SlitSet::generate(&config));
    }

    #[test]
    fn zero_width_slits_are_empty() {
        let config = SimulationConfig {
            slit_width: 1,
            ..Default::default()
        };
        assert!(SlitSet::generate(&config).is_empty());
    }
}
