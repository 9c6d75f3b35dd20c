// FeatureExtractor - spectral and statistical feature extraction
//
// This module turns one EEG sample window into the feature vector consumed
// by the classifiers. Band powers come from a pluggable estimation strategy
// (FFT-based by default), time-domain statistics come straight off the
// buffer.
//
// Module organization:
// - types: Data structures (Features struct)
// - band_power: Band-power estimation strategies (spectral / time-domain)
// - stats: Time-domain statistics (mean, variance, skewness, peak)
// - mod.rs: Coordinator (FeatureExtractor)

pub mod band_power;
pub mod stats;
mod types;

pub use band_power::{BandPowerEstimator, SpectralBandPower, TimeDomainBandPower};
pub use types::Features;

use crate::config::{BandConfig, FrequencyBand};
use crate::error::SignalError;

/// Combined alpha+beta power below which the window is treated as carrying
/// no band information and the ratios fall back to the neutral 0.5/0.5
const POWER_EPSILON: f32 = 0.01;

/// FeatureExtractor computes the per-window feature vector
///
/// Stateless between calls: extraction is a pure function of the input
/// buffer, safe to invoke repeatedly and from independent call sites.
pub struct FeatureExtractor {
    bands: BandConfig,
    estimator: Box<dyn BandPowerEstimator + Send + Sync>,
}

impl FeatureExtractor {
    /// Create an extractor using the FFT-based band-power strategy
    pub fn new(sampling_rate: f32, bands: BandConfig) -> Self {
        Self::with_estimator(bands, Box::new(SpectralBandPower::new(sampling_rate)))
    }

    /// Create an extractor with an explicit band-power strategy
    pub fn with_estimator(
        bands: BandConfig,
        estimator: Box<dyn BandPowerEstimator + Send + Sync>,
    ) -> Self {
        Self { bands, estimator }
    }

    /// Extract the feature vector from one sample window
    ///
    /// An empty buffer is a caller contract violation (mean and variance
    /// are undefined); every other input produces a full vector, with
    /// degenerate power handled by the neutral-ratio fallback.
    pub fn extract(&self, signal: &[f32]) -> Result<Features, SignalError> {
        if signal.is_empty() {
            return Err(SignalError::EmptyBuffer);
        }

        let theta = self.band_power(signal, self.bands.theta);
        let alpha = self.band_power(signal, self.bands.alpha);
        let beta = self.band_power(signal, self.bands.beta);
        let gamma = self.band_power(signal, self.bands.gamma);

        let (alpha_ratio, beta_ratio) = normalize_competing(alpha, beta);

        Ok(Features {
            theta_power: theta,
            alpha_power: alpha_ratio,
            beta_power: beta_ratio,
            beta_band_power: beta,
            gamma_power: gamma,
            peak_amplitude: stats::peak_amplitude(signal),
            variance: stats::variance(signal),
        })
    }

    fn band_power(&self, signal: &[f32], band: FrequencyBand) -> f32 {
        self.estimator.band_power(signal, band)
    }
}

/// Normalize the two competing band powers into ratios summing to 1.0
///
/// When the combined raw power is below `POWER_EPSILON` the window carries
/// no usable information; both ratios become 0.5 by policy so downstream
/// thresholds see a neutral, command-free state.
fn normalize_competing(alpha: f32, beta: f32) -> (f32, f32) {
    let total = alpha + beta;
    if total > POWER_EPSILON {
        (alpha / total, beta / total)
    } else {
        (0.5, 0.5)
    }
}
