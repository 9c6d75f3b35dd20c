// Types module - feature vector for mental-state classification
//
// The feature vector produced by one extraction pass over a sample window.
// Consumed by both the rule-based decision engine and the LDA classifier.

/// Features extracted from one EEG sample window
///
/// Alpha and beta are stored as normalized ratios over their combined raw
/// power (they sum to 1.0 unless the window carried no meaningful power, in
/// which case both are the neutral 0.5). Theta and gamma are raw band
/// powers from the extended band set, and the raw beta power is carried
/// alongside its ratio so the theta/beta ratio divides same-unit values.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Features {
    /// Raw theta-band power (4-8 Hz default)
    pub theta_power: f32,

    /// Alpha ratio: alpha / (alpha + beta), or 0.5 when degenerate
    pub alpha_power: f32,

    /// Beta ratio: beta / (alpha + beta), or 0.5 when degenerate
    pub beta_power: f32,

    /// Raw beta-band power before ratio normalization (attention screening)
    pub beta_band_power: f32,

    /// Raw gamma-band power (30-50 Hz default)
    pub gamma_power: f32,

    /// Maximum absolute amplitude in the window (blink detection)
    pub peak_amplitude: f32,

    /// Population variance of the window
    pub variance: f32,
}

impl Features {
    /// Number of scalar components in the vector form
    pub const NUM_FEATURES: usize = 6;

    /// Flatten into the fixed component order used for LDA training
    ///
    /// The raw beta power is excluded: it is redundant with the beta ratio
    /// for discrimination and exists for the health screening ratio.
    pub fn as_vector(&self) -> [f32; Self::NUM_FEATURES] {
        [
            self.theta_power,
            self.alpha_power,
            self.beta_power,
            self.gamma_power,
            self.peak_amplitude,
            self.variance,
        ]
    }
}
