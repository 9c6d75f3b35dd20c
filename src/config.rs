//! Configuration management for dynamic parameter tuning
//!
//! This module provides runtime configuration loading from JSON files,
//! enabling fast iteration without recompilation. Band edges, decision
//! thresholds, and preprocessing parameters can be adjusted via the config
//! file for rapid experimentation.
//!
//! There is no process-wide configuration state: every component takes its
//! config section at construction, so multiple independently tuned sessions
//! can coexist.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub signal: SignalConfig,
    pub bands: BandConfig,
    pub decision: DecisionConfig,
    pub health: HealthConfig,
    pub preprocessing: PreprocessingConfig,
}

/// Acquisition parameters of the incoming sample buffers
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Sampling rate in Hz
    pub sampling_rate: f32,
    /// Window length in samples (one classification window)
    pub window_size: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            // 256 Hz / 1 second windows, typical for consumer EEG headsets
            sampling_rate: 256.0,
            window_size: 256,
        }
    }
}

/// A single frequency band in Hz, inclusive on both edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    pub low: f32,
    pub high: f32,
}

impl FrequencyBand {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Center frequency of the band
    pub fn center(&self) -> f32 {
        (self.low + self.high) / 2.0
    }
}

/// EEG frequency band edges
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandConfig {
    /// Theta band (drowsiness, inattention)
    pub theta: FrequencyBand,
    /// Alpha band (relaxed wakefulness)
    pub alpha: FrequencyBand,
    /// Beta band (active concentration)
    pub beta: FrequencyBand,
    /// Gamma band (cross-modal processing)
    pub gamma: FrequencyBand,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            theta: FrequencyBand::new(4.0, 8.0),
            alpha: FrequencyBand::new(8.0, 13.0),
            beta: FrequencyBand::new(13.0, 30.0),
            gamma: FrequencyBand::new(30.0, 50.0),
        }
    }
}

/// Decision engine thresholds and debounce parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Beta power ratio above which FOCUS is a candidate
    pub focus_threshold: f32,
    /// Alpha power ratio above which RELAX is a candidate
    pub relax_threshold: f32,
    /// Peak-amplitude multiplier over baseline above which BLINK is a candidate
    pub blink_multiplier: f32,
    /// Consecutive identical detections required before a command is emitted
    pub debounce_count: u32,
    /// Smoothing factor for the exponential-moving-average baseline
    pub baseline_smoothing: f32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            focus_threshold: 0.6,
            relax_threshold: 0.6,
            blink_multiplier: 3.0,
            debounce_count: 3,
            baseline_smoothing: 0.1,
        }
    }
}

/// Health tier thresholds
///
/// Visual and motor tiers map directly from alpha and beta power; the
/// attention tier maps from the theta/beta ratio. Each domain has a
/// normal floor and a borderline floor, with anything below impaired.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Alpha power at or above this is visually normal
    pub visual_normal: f32,
    /// Alpha power at or above this (but below normal) is borderline
    pub visual_borderline: f32,
    /// Beta power at or above this is motor normal
    pub motor_normal: f32,
    /// Beta power at or above this (but below normal) is borderline
    pub motor_borderline: f32,
    /// Theta/beta ratio at or below this is attentionally normal
    pub attention_normal: f32,
    /// Theta/beta ratio at or below this (but above normal) is borderline
    pub attention_borderline: f32,
    /// Beta power at or below this is treated as zero for the ratio
    pub beta_floor: f32,
    /// Ratio substituted when beta power is near zero
    pub ratio_sentinel: f32,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            visual_normal: 0.35,
            visual_borderline: 0.25,
            motor_normal: 0.30,
            motor_borderline: 0.20,
            attention_normal: 1.5,
            attention_borderline: 2.0,
            beta_floor: 0.01,
            ratio_sentinel: 10.0,
        }
    }
}

/// Preprocessing parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PreprocessingConfig {
    /// Moving-average smoothing window in samples
    pub smoothing_window: usize,
    /// Number of leading samples used for the DC-offset estimate
    pub baseline_samples: usize,
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            smoothing_window: 5,
            baseline_samples: 50,
        }
    }
}

impl Default for PipelineConfig {
    /// Default configuration values (fallback if config file not found)
    fn default() -> Self {
        Self {
            signal: SignalConfig::default(),
            bands: BandConfig::default(),
            decision: DecisionConfig::default(),
            health: HealthConfig::default(),
            preprocessing: PreprocessingConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from JSON file
    ///
    /// Falls back to defaults if the file doesn't exist or the JSON is
    /// invalid, logging a warning either way.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.signal.sampling_rate, 256.0);
        assert_eq!(config.signal.window_size, 256);
        assert_eq!(config.bands.alpha, FrequencyBand::new(8.0, 13.0));
        assert_eq!(config.bands.beta, FrequencyBand::new(13.0, 30.0));
        assert_eq!(config.decision.debounce_count, 3);
        assert_eq!(config.decision.blink_multiplier, 3.0);
        assert_eq!(config.preprocessing.smoothing_window, 5);
    }

    #[test]
    fn test_band_center() {
        let alpha = FrequencyBand::new(8.0, 13.0);
        assert_eq!(alpha.center(), 10.5);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PipelineConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: PipelineConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.signal.sampling_rate, config.signal.sampling_rate);
        assert_eq!(parsed.bands.theta, config.bands.theta);
        assert_eq!(
            parsed.decision.focus_threshold,
            config.decision.focus_threshold
        );
        assert_eq!(parsed.health.attention_normal, config.health.attention_normal);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = PipelineConfig::load_from_file("/nonexistent/mindlink.json");
        assert_eq!(config.decision.debounce_count, 3);
    }
}
