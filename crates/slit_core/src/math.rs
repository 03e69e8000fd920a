//! Math utilities
//!
//! Re-exports glam with the scalar helpers the field and sampler share

pub use glam::*;

use std::f64::consts::{PI, TAU};

/// Normal probability density with mean `mu` and standard deviation `sigma`.
pub fn gaussian(x: f64, mu: f64, sigma: f64) -> f64 {
    let z = (x - mu) / sigma;
    (1.0 / (sigma * (2.0 * PI).sqrt())) * (-0.5 * z * z).exp()
}

/// Phase difference accumulated over `path` for a wave of `wavelength`.
pub fn phase_difference(path: f64, wavelength: f64) -> f64 {
    (TAU / wavelength) * path
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn gaussian_peaks_at_mean() {
        let sigma = 50.0;
        let peak = gaussian(10.0, 10.0, sigma);
        assert_abs_diff_eq!(peak, 1.0 / (sigma * (2.0 * PI).sqrt()));
        assert!(gaussian(60.0, 10.0, sigma) < peak);
        assert_abs_diff_eq!(gaussian(60.0, 10.0, sigma), gaussian(-40.0, 10.0, sigma));
    }

    #[test]
    fn gaussian_integrates_to_one() {
        let area: f64 = (-500..=500).map(|x| gaussian(x as f64, 0.0, 50.0)).sum();
        assert_abs_diff_eq!(area, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn full_wavelength_is_one_turn() {
        assert_abs_diff_eq!(phase_difference(100.0, 100.0), TAU, epsilon = 1e-12);
        assert_abs_diff_eq!(phase_difference(-50.0, 100.0), -PI, epsilon = 1e-12);
    }
}
