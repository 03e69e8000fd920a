//! Slit Core
//!
//! Contains the double-slit simulation:
//! - Slit geometry
//! - Particle sampling (interference and detector modes)
//! - Heatmap accumulation
//! - Background interference field
//! - Frame pacing

pub mod config;
pub mod field;
pub mod geometry;
pub mod heatmap;
pub mod math;
pub mod sampler;
pub mod simulation;
pub mod time;

pub use config::SimulationConfig;
pub use field::InterferenceField;
pub use geometry::SlitSet;
pub use heatmap::Heatmap;
pub use sampler::{DetectorMode, Impact};
pub use simulation::Simulation;

pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
