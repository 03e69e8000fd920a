//! Simulation constants
//!
//! Fixed at startup. Nothing in the simulation mutates these once a
//! [`Simulation`](crate::Simulation) has been built.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Detection plane width in pixels.
    pub screen_width: u32,
    /// Detection plane height in pixels.
    pub screen_height: u32,
    /// Particles sampled and recorded per frame.
    pub particles_per_frame: u32,
    /// Vertical extent of each slit, also the horizontal jitter range.
    pub slit_width: u32,
    /// Distance between the two slit centers.
    pub slit_separation: u32,
    pub wavelength: u32,
    /// Heatmap cell edge length in pixels.
    pub heatmap_resolution: u32,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn center_x(&self) -> u32 {
        self.screen_width / 2
    }

    pub fn half_slit_width(&self) -> u32 {
        self.slit_width / 2
    }

    pub fn half_separation(&self) -> u32 {
        self.slit_separation / 2
    }

    /// Spread of each slit point's Gaussian in the background field.
    pub fn field_sigma(&self) -> u32 {
        self.wavelength / 2
    }

    /// Heatmap dimensions in cells, `(columns, rows)`.
    pub fn grid_dims(&self) -> (usize, usize) {
        (
            (self.screen_width / self.heatmap_resolution) as usize,
            (self.screen_height / self.heatmap_resolution) as usize,
        )
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            screen_width: 1000,
            screen_height: 700,
            particles_per_frame: 10,
            slit_width: 50,
            slit_separation: 200,
            wavelength: 100,
            heatmap_resolution: 5,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_200_by_140() {
        let config = SimulationConfig::default();
        assert_eq!(config.grid_dims(), (200, 140));
    }

    #[test]
    fn halves_use_integer_division() {
        let config = SimulationConfig {
            slit_width: 51,
            slit_separation: 201,
            wavelength: 101,
            ..Default::default()
        };
        assert_eq!(config.half_slit_width(), 25);
        assert_eq!(config.half_separation(), 100);
        assert_eq!(config.field_sigma(), 50);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{ "wavelength": 80 }"#).unwrap();
        assert_eq!(config.wavelength, 80);
        assert_eq!(config.screen_width, 1000);
        assert_eq!(config.seed, None);
    }
}
