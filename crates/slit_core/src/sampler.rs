//! Particle sampler
//!
//! Produces one impact per call from a closed-form heuristic. With the
//! detector off each particle is weighted by `0.5 + 0.5 cos(phase)` into a
//! narrow or a wide horizontal spread; with the detector on it passes
//! straight through one slit.
//!
//! Vertical position is uniform over the screen and unrelated to the
//! interference term.

use crate::config::SimulationConfig;
use crate::math::phase_difference;
use glam::DVec2;
use rand::Rng;

/// Landing position on the detection plane, in screen pixels.
pub type Impact = DVec2;

/// Whether the which-slit detector is observing particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorMode {
    #[default]
    Off,
    On,
}

impl DetectorMode {
    pub fn toggled(self) -> Self {
        match self {
            DetectorMode::Off => DetectorMode::On,
            DetectorMode::On => DetectorMode::Off,
        }
    }

    pub fn is_active(self) -> bool {
        self == DetectorMode::On
    }

    pub fn label(self) -> &'static str {
        match self {
            DetectorMode::Off => "OFF",
            DetectorMode::On => "ON",
        }
    }
}

impl From<bool> for DetectorMode {
    fn from(active: bool) -> Self {
        if active {
            DetectorMode::On
        } else {
            DetectorMode::Off
        }
    }
}

/// Horizontal perturbation band chosen for an interfering particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    /// `[-λ, λ]`, taken with the interference probability.
    Narrow,
    /// `[-2λ, 2λ]`, taken otherwise.
    Wide,
}

impl Spread {
    /// `roll` is a uniform draw in `[0, 1)`.
    pub fn select(probability: f64, roll: f64) -> Self {
        if roll < probability {
            Spread::Narrow
        } else {
            Spread::Wide
        }
    }

    pub fn half_range(self, wavelength: f64) -> f64 {
        match self {
            Spread::Narrow => wavelength,
            Spread::Wide => 2.0 * wavelength,
        }
    }
}

/// Interference weight for a particle at horizontal offset `x` that went
/// through the slit at `slit_offset`. Always within `[0, 1]`.
pub fn interference_probability(x: f64, slit_offset: f64, wavelength: f64) -> f64 {
    0.5 + 0.5 * phase_difference(x - slit_offset, wavelength).cos()
}

/// Sampler constants resolved from a [`SimulationConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSampler {
    half_slit_width: f64,
    half_separation: f64,
    wavelength: f64,
    center_x: f64,
    screen_height: f64,
}

impl ParticleSampler {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            half_slit_width: config.half_slit_width() as f64,
            half_separation: config.half_separation() as f64,
            wavelength: config.wavelength as f64,
            center_x: config.center_x() as f64,
            screen_height: config.screen_height as f64,
        }
    }

    /// Draw one impact. Every random value comes from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, mode: DetectorMode, rng: &mut R) -> Impact {
        let mut x = rng.gen_range(-self.half_slit_width..=self.half_slit_width);
        let slit_offset = if rng.gen::<bool>() {
            self.half_separation
        } else {
            -self.half_separation
        };

        match mode {
            DetectorMode::On => x += slit_offset,
            DetectorMode::Off => x += self.interfere(x, slit_offset, rng),
        }

        let y = rng.gen_range(0.0..=self.screen_height);
        DVec2::new(self.center_x + x, y)
    }

    fn interfere<R: Rng + ?Sized>(&self, x: f64, slit_offset: f64, rng: &mut R) -> f64 {
        let probability = interference_probability(x, slit_offset, self.wavelength);
        let half = Spread::select(probability, rng.gen::<f64>()).half_range(self.wavelength);
        rng.gen_range(-half..=half)
    }
}

/// One-shot form of [`ParticleSampler::sample`].
pub fn sample_particle<R: Rng + ?Sized>(
    mode: DetectorMode,
    config: &SimulationConfig,
    rng: &mut R,
) -> Impact {
    ParticleSampler::new(config).sample(mode, rng)
}
