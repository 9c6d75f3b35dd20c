// Preprocessing module - signal conditioning ahead of feature extraction
//
// Conditions a raw acquisition window before the spectral pipeline sees it:
// DC-offset removal, moving-average smoothing, and zero-mean/unit-variance
// normalization. All functions return new buffers; the input window is
// never mutated.

use crate::analysis::features::stats;
use crate::config::PreprocessingConfig;

/// Standard deviations below this skip the unit-variance scaling step
const STD_DEV_EPSILON: f32 = 1e-3;

/// Causal moving-average filter
///
/// Each output sample averages the current sample and up to `window - 1`
/// preceding ones; the leading edge averages over what exists so far. A
/// window larger than the signal is clamped to the signal length.
pub fn moving_average(signal: &[f32], window: usize) -> Vec<f32> {
    let window = window.max(1).min(signal.len().max(1));

    signal
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = i.saturating_sub(window - 1);
            let slice = &signal[start..=i];
            slice.iter().sum::<f32>() / slice.len() as f32
        })
        .collect()
}

/// DC-offset estimate: mean of the first `samples` entries
///
/// Truncates to the signal length when the signal is shorter; 0.0 for an
/// empty signal.
pub fn estimate_baseline(signal: &[f32], samples: usize) -> f32 {
    let take = samples.min(signal.len());
    stats::mean(&signal[..take])
}

/// Subtract a constant baseline from every sample
pub fn remove_baseline(signal: &[f32], baseline: f32) -> Vec<f32> {
    signal.iter().map(|&x| x - baseline).collect()
}

/// Zero-mean, unit-variance normalization
///
/// The scaling step is skipped when the standard deviation is below
/// `STD_DEV_EPSILON`; a flat signal stays flat instead of exploding.
pub fn normalize(signal: &[f32]) -> Vec<f32> {
    let centered = remove_baseline(signal, stats::mean(signal));

    let std_dev = stats::variance(&centered).sqrt();
    if std_dev < STD_DEV_EPSILON {
        return centered;
    }
    centered.iter().map(|&x| x / std_dev).collect()
}

/// Crude band-limiting: moving-average low-pass subtracted from the input
///
/// Leaves the content faster than the smoothing window; a simplified
/// high-pass rather than a true band-pass.
pub fn bandpass_filter(signal: &[f32], window: usize) -> Vec<f32> {
    let lowpass = moving_average(signal, window);
    signal
        .iter()
        .zip(&lowpass)
        .map(|(original, smoothed)| original - smoothed)
        .collect()
}

/// Complete conditioning pipeline
///
/// Baseline removal over the leading samples, moving-average smoothing,
/// then normalization.
pub fn preprocess(signal: &[f32], config: &PreprocessingConfig) -> Vec<f32> {
    let baseline = estimate_baseline(signal, config.baseline_samples);
    let detrended = remove_baseline(signal, baseline);
    let smoothed = moving_average(&detrended, config.smoothing_window);
    normalize(&smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average_smooths() {
        let signal = [0.0, 4.0, 0.0, 4.0, 0.0, 4.0];
        let smoothed = moving_average(&signal, 2);

        assert_eq!(smoothed[0], 0.0);
        for &value in &smoothed[1..] {
            assert_eq!(value, 2.0);
        }
    }

    #[test]
    fn test_moving_average_window_clamped() {
        let signal = [1.0, 2.0, 3.0];
        let smoothed = moving_average(&signal, 100);
        assert_eq!(smoothed[2], 2.0);
    }

    #[test]
    fn test_baseline_estimate_and_removal() {
        let signal: Vec<f32> = (0..100).map(|i| 5.0 + (i as f32 * 0.7).sin()).collect();
        let baseline = estimate_baseline(&signal, 50);
        assert!((baseline - 5.0).abs() < 0.3);

        let cleaned = remove_baseline(&signal, baseline);
        let residual = stats::mean(&cleaned[..50]);
        assert!(residual.abs() < 1e-4);
    }

    #[test]
    fn test_normalize_zero_mean_unit_variance() {
        let signal: Vec<f32> = (0..256).map(|i| 10.0 + 3.0 * (i as f32 * 0.2).sin()).collect();
        let normalized = normalize(&signal);

        assert!(stats::mean(&normalized).abs() < 1e-4);
        assert!((stats::variance(&normalized) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_normalize_flat_signal_skips_scaling() {
        let normalized = normalize(&[7.0; 32]);
        // Centered to zero, not divided by the ~zero deviation
        assert!(normalized.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_bandpass_removes_slow_drift() {
        // Slow ramp plus fast alternation: filtering keeps the alternation
        let signal: Vec<f32> = (0..64)
            .map(|i| i as f32 * 0.1 + if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let filtered = bandpass_filter(&signal, 5);

        // The ramp contributes ~0.1/sample; alternation dominates after
        let fast_energy: f32 = filtered[8..].iter().map(|x| x * x).sum();
        assert!(fast_energy > 30.0);
    }

    #[test]
    fn test_preprocess_pipeline_output_is_conditioned() {
        let config = PreprocessingConfig::default();
        let signal: Vec<f32> = (0..256)
            .map(|i| 42.0 + (2.0 * std::f32::consts::PI * 10.0 * i as f32 / 256.0).sin())
            .collect();
        let conditioned = preprocess(&signal, &config);

        assert_eq!(conditioned.len(), signal.len());
        assert!(stats::mean(&conditioned).abs() < 1e-3);
        assert!((stats::variance(&conditioned) - 1.0).abs() < 1e-2);
    }
}
