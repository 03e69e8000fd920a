//! Simulation context
//!
//! Owns every piece of mutable state the frame loop touches: the detector
//! flag, the heatmap and the random source. Geometry and the background
//! field are computed once here and never change.

use crate::config::SimulationConfig;
use crate::field::InterferenceField;
use crate::geometry::SlitSet;
use crate::heatmap::Heatmap;
use crate::sampler::{DetectorMode, ParticleSampler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome of one [`Simulation::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub recorded: u32,
    pub discarded: u32,
}

pub struct Simulation<R = StdRng> {
    config: SimulationConfig,
    slits: SlitSet,
    field: InterferenceField,
    sampler: ParticleSampler,
    heatmap: Heatmap,
    detector: DetectorMode,
    rng: R,
}

impl Simulation<StdRng> {
    /// Seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(config: SimulationConfig, rng: R) -> Self {
        let slits = SlitSet::generate(&config);
        let field = InterferenceField::new(&slits, &config);
        let sampler = ParticleSampler::new(&config);
        let heatmap = Heatmap::from_config(&config);

        tracing::info!(
            slit_points = slits.len(),
            grid = ?heatmap.dims(),
            seed = ?config.seed,
            "simulation ready"
        );

        Self {
            config,
            slits,
            field,
            sampler,
            heatmap,
            detector: DetectorMode::Off,
            rng,
        }
    }

    /// Sample `particles_per_frame` impacts under the current detector mode
    /// and accumulate them.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();
        for _ in 0..self.config.particles_per_frame {
            let impact = self.sampler.sample(self.detector, &mut self.rng);
            if self.heatmap.record(impact) {
                report.recorded += 1;
            } else {
                report.discarded += 1;
            }
        }
        report
    }

    /// Flip the detector and return the new mode.
    pub fn toggle_detector(&mut self) -> DetectorMode {
        self.detector = self.detector.toggled();
        tracing::info!(detector = self.detector.label(), "detector toggled");
        self.detector
    }

    pub fn detector(&self) -> DetectorMode {
        self.detector
    }

    pub fn slits(&self) -> &SlitSet {
        &self.slits
    }

    pub fn field(&self) -> &InterferenceField {
        &self.field
    }

    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }
}
