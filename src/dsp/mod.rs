// DSP module - spectral transforms and power estimation
//
// Pure, stateless numeric transforms from real sample buffers to per-band
// power. Nothing here holds state between calls; concurrent use is safe as
// long as each call owns its buffers.

pub mod fft;
pub mod psd;

pub use fft::{hanning_window, inverse_transform, transform};
pub use psd::{band_power_direct, PowerSpectrum};
