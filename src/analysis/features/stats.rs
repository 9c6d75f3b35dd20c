// Stats module - time-domain signal statistics
//
// Small statistical helpers over raw sample buffers. All variances here are
// population variances (divisor N, not N-1): a window is treated as the
// whole signal, not a sample from one.

/// Arithmetic mean; 0.0 for an empty buffer (callers guard emptiness)
pub fn mean(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().sum::<f32>() / signal.len() as f32
}

/// Population variance (mean squared deviation from the mean)
pub fn variance(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }
    let mu = mean(signal);
    signal.iter().map(|&x| (x - mu) * (x - mu)).sum::<f32>() / signal.len() as f32
}

/// Skewness (third standardized moment)
///
/// Returns 0.0 when the standard deviation is below 1e-3; a flat signal
/// has no meaningful asymmetry and dividing by its deviation would blow up.
pub fn skewness(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }

    let mu = mean(signal);
    let std_dev = variance(signal).sqrt();
    if std_dev < 1e-3 {
        return 0.0;
    }

    signal
        .iter()
        .map(|&x| {
            let normalized = (x - mu) / std_dev;
            normalized * normalized * normalized
        })
        .sum::<f32>()
        / signal.len() as f32
}

/// Maximum absolute amplitude in the buffer
pub fn peak_amplitude(signal: &[f32]) -> f32 {
    signal.iter().map(|x| x.abs()).fold(0.0f32, f32::max)
}
