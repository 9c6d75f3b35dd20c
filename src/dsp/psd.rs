// PSD module - one-sided power spectral density and band power
//
// Converts a full complex spectrum into the one-sided power view used for
// band-power estimation. Power folds negative-frequency energy back into
// bins 1..N/2, so DC and Nyquist are scaled 1x and everything else 2x.

use crate::dsp::fft::{self, hanning_window, next_power_of_two, transform};
use crate::error::log_signal_error;
use rustfft::num_complex::Complex;

/// One-sided power spectrum over bins 0..=N/2
#[derive(Debug, Clone)]
pub struct PowerSpectrum {
    /// Bin center frequencies in Hz
    pub frequencies: Vec<f32>,
    /// Power per bin, |X[i]|^2 / N^2, doubled except at DC and Nyquist
    pub power: Vec<f32>,
    /// Frequency spacing between bins (sampling_rate / N)
    pub resolution: f32,
}

impl PowerSpectrum {
    /// Build the one-sided power spectrum from a full complex spectrum
    pub fn from_spectrum(spectrum: &[Complex<f32>], sampling_rate: f32) -> Self {
        let n = spectrum.len();
        let num_bins = n / 2 + 1;
        let resolution = fft::frequency_resolution(n, sampling_rate);
        let norm = (n * n) as f32;

        let mut frequencies = Vec::with_capacity(num_bins);
        let mut power = Vec::with_capacity(num_bins);

        for (i, bin) in spectrum.iter().take(num_bins).enumerate() {
            frequencies.push(i as f32 * resolution);

            let mut bin_power = bin.norm_sqr() / norm;
            if i != 0 && i != n / 2 {
                bin_power *= 2.0;
            }
            power.push(bin_power);
        }

        Self {
            frequencies,
            power,
            resolution,
        }
    }

    /// Number of one-sided frequency bins
    pub fn num_bins(&self) -> usize {
        self.power.len()
    }

    /// Total power in [low, high] Hz, inclusive on both edges
    ///
    /// Sums in-band bin powers and multiplies by the frequency resolution
    /// (Riemann-sum integration over the band).
    pub fn band_power(&self, low: f32, high: f32) -> f32 {
        let sum: f32 = self
            .frequencies
            .iter()
            .zip(&self.power)
            .filter(|(freq, _)| **freq >= low && **freq <= high)
            .map(|(_, power)| *power)
            .sum();

        sum * self.resolution
    }

    /// Frequency of the maximum-power bin
    pub fn peak_frequency(&self) -> f32 {
        self.frequencies
            .iter()
            .zip(&self.power)
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(freq, _)| *freq)
            .unwrap_or(0.0)
    }
}

/// Band power of a raw buffer: pad, window, transform, integrate
///
/// Convenience path composing the whole spectral chain. The buffer length
/// need not be a power of two; it is Hanning-windowed and zero-padded to
/// the next power of two internally. All intermediate buffers are owned
/// and released here; only the scalar comes out.
pub fn band_power_direct(signal: &[f32], sampling_rate: f32, low: f32, high: f32) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }

    let fft_size = next_power_of_two(signal.len());
    let mut padded = vec![0.0f32; fft_size];
    let windowed = hanning_window(signal);
    padded[..windowed.len()].copy_from_slice(&windowed);

    match transform(&padded) {
        Ok(spectrum) => {
            PowerSpectrum::from_spectrum(&spectrum, sampling_rate).band_power(low, high)
        }
        Err(err) => {
            // Unreachable after padding, but never return garbage silently
            log_signal_error(&err, "band_power_direct");
            0.0
        }
    }
}
