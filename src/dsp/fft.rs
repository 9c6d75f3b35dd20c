// FFT module - radix-2 Fast Fourier Transform engine
//
// Iterative decimation-in-time Cooley-Tukey transform over real input
// buffers. The transform size must be a power of two; callers pad with
// zeros (see `next_power_of_two`) before transforming. The inverse is
// implemented with the conjugate trick over the same forward kernel.
//
// References:
// - Cooley, J. W. & Tukey, J. W. (1965). An algorithm for the machine
//   calculation of complex Fourier series

use crate::error::SignalError;
use rustfft::num_complex::Complex;

/// Check whether `n` is a power of two (zero is not)
pub fn is_power_of_two(n: usize) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// Smallest power of two greater than or equal to `n`
///
/// Returns 1 for an input of 0, so a padded transform always has a
/// valid (if trivial) size.
pub fn next_power_of_two(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        n.next_power_of_two()
    }
}

/// Frequency spacing between adjacent bins of an `fft_size`-point transform
pub fn frequency_resolution(fft_size: usize, sampling_rate: f32) -> f32 {
    sampling_rate / fft_size as f32
}

/// Index of the bin nearest to `frequency`
pub fn frequency_bin(frequency: f32, sampling_rate: f32, fft_size: usize) -> usize {
    (frequency / frequency_resolution(fft_size, sampling_rate) + 0.5) as usize
}

/// Reverse the lowest `bits` bits of `n`
fn bit_reverse(n: usize, bits: u32) -> usize {
    let mut reversed = 0;
    for i in 0..bits {
        if n & (1 << i) != 0 {
            reversed |= 1 << (bits - 1 - i);
        }
    }
    reversed
}

/// Apply a Hanning window, returning a windowed copy
///
/// Coefficient: 0.5 * (1 - cos(2*pi*i / (L-1))). Reduces spectral leakage
/// when the buffer does not contain a whole number of signal periods.
/// The input buffer is never mutated.
pub fn hanning_window(signal: &[f32]) -> Vec<f32> {
    let len = signal.len();
    if len < 2 {
        return signal.to_vec();
    }

    signal
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let coeff = 0.5
                * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / (len as f32 - 1.0)).cos());
            sample * coeff
        })
        .collect()
}

/// In-place butterfly passes shared by the forward and inverse transforms
///
/// Expects the buffer to already be in bit-reversed order. Stage `s`
/// combines blocks of size 2^s with twiddle factor exp(-2*pi*i / 2^s).
fn butterfly_passes(buffer: &mut [Complex<f32>], bits: u32) {
    let n = buffer.len();

    for stage in 1..=bits {
        let block = 1usize << stage;
        let half = block >> 1;

        let angle = -2.0 * std::f32::consts::PI / block as f32;
        let twiddle_step = Complex::new(angle.cos(), angle.sin());

        for start in (0..n).step_by(block) {
            let mut twiddle = Complex::new(1.0f32, 0.0);
            for offset in 0..half {
                let t = twiddle * buffer[start + offset + half];
                let u = buffer[start + offset];
                buffer[start + offset] = u + t;
                buffer[start + offset + half] = u - t;
                twiddle *= twiddle_step;
            }
        }
    }
}

/// Forward transform of a real buffer into its full N-point complex spectrum
///
/// The buffer length must be a power of two; a non-power-of-two length is a
/// caller contract violation and no computation is performed. The result is
/// two-sided; see `psd::PowerSpectrum` for the one-sided view.
pub fn transform(signal: &[f32]) -> Result<Vec<Complex<f32>>, SignalError> {
    let n = signal.len();
    if !is_power_of_two(n) {
        return Err(SignalError::NotPowerOfTwo { size: n });
    }
    let bits = n.trailing_zeros();

    // Bit-reversal permutation, imaginary parts zero
    let mut output = vec![Complex::new(0.0f32, 0.0); n];
    for (i, &sample) in signal.iter().enumerate() {
        output[bit_reverse(i, bits)] = Complex::new(sample, 0.0);
    }

    butterfly_passes(&mut output, bits);
    Ok(output)
}

/// Inverse transform via the conjugate trick
///
/// Conjugates the input, runs the forward kernel, then conjugates and
/// scales by 1/N. Round-tripping a real signal through `transform` and
/// back reconstructs it within numerical tolerance.
pub fn inverse_transform(spectrum: &[Complex<f32>]) -> Result<Vec<Complex<f32>>, SignalError> {
    let n = spectrum.len();
    if !is_power_of_two(n) {
        return Err(SignalError::NotPowerOfTwo { size: n });
    }
    let bits = n.trailing_zeros();

    // Bit-reversal permutation with conjugated input
    let mut output = vec![Complex::new(0.0f32, 0.0); n];
    for (i, &bin) in spectrum.iter().enumerate() {
        output[bit_reverse(i, bits)] = bin.conj();
    }

    butterfly_passes(&mut output, bits);

    let scale = 1.0 / n as f32;
    for value in output.iter_mut() {
        *value = value.conj() * scale;
    }
    Ok(output)
}
