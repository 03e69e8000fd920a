//! Settings management
//!
//! Built-in defaults, optionally overridden at startup by a JSON file. Every
//! section is `#[serde(default)]` so a file only needs the fields it changes.

use crate::input::KeyBindings;
use serde::{Deserialize, Serialize};
use slit_core::time::TARGET_FPS;
use slit_core::SimulationConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub simulation: SimulationConfig,
    pub palette: PaletteSettings,
    pub input: KeyBindings,
    pub metrics: MetricsSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub target_fps: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub background: [u8; 3],
    pub slit: [u8; 3],
    pub text: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    /// Seconds between frame statistics log lines.
    pub report_interval_secs: u64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Interactive Quantum Double-Slit Experiment with Broad Wave Interference"
                .to_string(),
            target_fps: TARGET_FPS,
        }
    }
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            background: [10, 10, 30],
            slit: [200, 200, 200],
            text: [255, 255, 255],
        }
    }
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            report_interval_secs: 2,
        }
    }
}

impl Settings {
    /// Read and validate a JSON settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        settings.validate()?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Settings from `path` when given, built-in defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("using built-in settings");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let sim = &self.simulation;

        non_zero("simulation.screen_width", sim.screen_width)?;
        non_zero("simulation.screen_height", sim.screen_height)?;
        non_zero("simulation.wavelength", sim.wavelength)?;
        non_zero("simulation.heatmap_resolution", sim.heatmap_resolution)?;
        non_zero("window.target_fps", self.window.target_fps)?;

        if sim.heatmap_resolution > sim.screen_width.min(sim.screen_height) {
            return Err(SettingsError::Invalid {
                field: "simulation.heatmap_resolution",
                reason: format!(
                    "{} exceeds the smaller screen dimension",
                    sim.heatmap_resolution
                ),
            });
        }

        if self.metrics.report_interval_secs == 0 {
            return Err(SettingsError::Invalid {
                field: "metrics.report_interval_secs",
                reason: "must be at least one second".to_string(),
            });
        }

        Ok(())
    }
}

fn non_zero(field: &'static str, value: u32) -> Result<(), SettingsError> {
    if value == 0 {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("slit_settings_{}_{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.window.target_fps, 60);
        assert_eq!(settings.palette.background, [10, 10, 30]);
        assert_eq!(settings.input.toggle_detector, 'd');
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let path = temp_file(
            "partial.json",
            r#"{ "simulation": { "seed": 7, "particles_per_frame": 25 }, "window": { "target_fps": 30 } }"#,
        );
        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.simulation.seed, Some(7));
        assert_eq!(settings.simulation.particles_per_frame, 25);
        assert_eq!(settings.simulation.wavelength, 100);
        assert_eq!(settings.window.target_fps, 30);
        assert_eq!(settings.palette, PaletteSettings::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = temp_file("bad.json", "{ not json");
        let err = Settings::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn zero_resolution_rejected() {
        let mut settings = Settings::default();
        settings.simulation.heatmap_resolution = 0;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid { field: "simulation.heatmap_resolution", .. }
        ));
    }

    #[test]
    fn oversized_resolution_rejected() {
        let mut settings = Settings::default();
        settings.simulation.heatmap_resolution = 701;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_wavelength_and_rate_rejected() {
        let mut settings = Settings::default();
        settings.simulation.wavelength = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.window.target_fps = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }

    #[test]
    fn round_trips_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
