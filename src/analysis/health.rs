// Health tiers - stateless three-tier screening from band powers
//
// Three independent threshold mappings: visual processing from alpha power,
// motor control from beta power, attention from the theta/beta ratio. No
// debounce and no state; every call is independent. This is a screening
// heuristic over band powers, not a diagnosis.
//
// The attention ratio divides raw theta power by raw beta power. The
// normalized beta ratio is never used for it: that ratio bottoms out at
// the neutral 0.5, which would mask a window with no beta rhythm at all.
// The visual and motor thresholds were fitted on band powers normalized
// over all four bands and are applied to the two-band alpha/beta ratios;
// both lie in [0, 1] and the tier boundaries were kept as fitted.

use crate::analysis::features::Features;
use crate::config::HealthConfig;
use std::fmt;

/// Screening tier for one health domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Tier {
    Normal,
    Borderline,
    Impaired,
}

impl Tier {
    /// Stable display name for host applications
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Normal => "NORMAL",
            Tier::Borderline => "BORDERLINE",
            Tier::Impaired => "IMPAIRED",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-domain tiers from one feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthPrediction {
    pub visual: Tier,
    pub motor: Tier,
    pub attention: Tier,
}

/// HealthClassifier maps band powers to screening tiers
pub struct HealthClassifier {
    config: HealthConfig,
}

impl HealthClassifier {
    pub fn new(config: HealthConfig) -> Self {
        Self { config }
    }

    /// Predict all three domains from one feature vector
    ///
    /// The attention ratio uses the raw beta band power, not the
    /// normalized beta ratio: the ratio bottoms out at the neutral 0.5
    /// and would hide a window with no beta energy at all.
    pub fn predict(&self, features: &Features) -> HealthPrediction {
        HealthPrediction {
            visual: self.visual_tier(features.alpha_power),
            motor: self.motor_tier(features.beta_power),
            attention: self.attention_tier(features.theta_power, features.beta_band_power),
        }
    }

    /// Visual processing tier from alpha power
    pub fn visual_tier(&self, alpha_power: f32) -> Tier {
        if alpha_power >= self.config.visual_normal {
            Tier::Normal
        } else if alpha_power >= self.config.visual_borderline {
            Tier::Borderline
        } else {
            Tier::Impaired
        }
    }

    /// Motor control tier from beta power
    pub fn motor_tier(&self, beta_power: f32) -> Tier {
        if beta_power >= self.config.motor_normal {
            Tier::Normal
        } else if beta_power >= self.config.motor_borderline {
            Tier::Borderline
        } else {
            Tier::Impaired
        }
    }

    /// Attention tier from the theta/beta ratio
    ///
    /// Near-zero beta substitutes the configured sentinel ratio instead of
    /// dividing by zero; an absent beta rhythm reads as maximal theta
    /// dominance.
    pub fn attention_tier(&self, theta_power: f32, beta_power: f32) -> Tier {
        let ratio = if beta_power > self.config.beta_floor {
            theta_power / beta_power
        } else {
            self.config.ratio_sentinel
        };

        if ratio <= self.config.attention_normal {
            Tier::Normal
        } else if ratio <= self.config.attention_borderline {
            Tier::Borderline
        } else {
            Tier::Impaired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> HealthClassifier {
        HealthClassifier::new(HealthConfig::default())
    }

    fn features(theta: f32, alpha: f32, beta: f32) -> Features {
        Features {
            theta_power: theta,
            alpha_power: alpha,
            beta_power: beta,
            beta_band_power: beta,
            gamma_power: 0.1,
            peak_amplitude: 1.0,
            variance: 0.5,
        }
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(Tier::Normal.name(), "NORMAL");
        assert_eq!(Tier::Borderline.name(), "BORDERLINE");
        assert_eq!(Tier::Impaired.name(), "IMPAIRED");
        assert_eq!(format!("{}", Tier::Impaired), "IMPAIRED");
    }

    #[test]
    fn test_visual_tier_boundaries() {
        let c = classifier();
        assert_eq!(c.visual_tier(0.50), Tier::Normal);
        assert_eq!(c.visual_tier(0.35), Tier::Normal);
        assert_eq!(c.visual_tier(0.30), Tier::Borderline);
        assert_eq!(c.visual_tier(0.25), Tier::Borderline);
        assert_eq!(c.visual_tier(0.10), Tier::Impaired);
    }

    #[test]
    fn test_motor_tier_boundaries() {
        let c = classifier();
        assert_eq!(c.motor_tier(0.40), Tier::Normal);
        assert_eq!(c.motor_tier(0.30), Tier::Normal);
        assert_eq!(c.motor_tier(0.25), Tier::Borderline);
        assert_eq!(c.motor_tier(0.20), Tier::Borderline);
        assert_eq!(c.motor_tier(0.10), Tier::Impaired);
    }

    #[test]
    fn test_attention_tier_boundaries() {
        let c = classifier();
        assert_eq!(c.attention_tier(0.30, 0.30), Tier::Normal); // ratio 1.0
        assert_eq!(c.attention_tier(0.45, 0.30), Tier::Normal); // ratio 1.5
        assert_eq!(c.attention_tier(0.52, 0.30), Tier::Borderline); // ~1.73
        assert_eq!(c.attention_tier(0.75, 0.30), Tier::Impaired); // 2.5
    }

    #[test]
    fn test_attention_zero_beta_sentinel() {
        let c = classifier();
        // Beta at/below the floor: sentinel ratio 10.0, always impaired
        assert_eq!(c.attention_tier(0.0, 0.0), Tier::Impaired);
        assert_eq!(c.attention_tier(0.5, 0.01), Tier::Impaired);
    }

    #[test]
    fn test_neutral_ratio_does_not_mask_absent_beta() {
        let c = classifier();
        // A theta-only window: the competing alpha/beta ratios fall back
        // to 0.5/0.5 but the raw beta power is zero, so the sentinel must
        // fire and the attention domain must flag.
        let input = Features {
            theta_power: 0.37,
            alpha_power: 0.5,
            beta_power: 0.5,
            beta_band_power: 0.0,
            gamma_power: 0.0,
            peak_amplitude: 1.4,
            variance: 1.0,
        };
        assert_eq!(c.predict(&input).attention, Tier::Impaired);
    }

    #[test]
    fn test_domains_are_independent() {
        let c = classifier();
        // Strong alpha, weak beta, high theta: each domain judged alone
        let prediction = c.predict(&features(0.8, 0.5, 0.1));
        assert_eq!(prediction.visual, Tier::Normal);
        assert_eq!(prediction.motor, Tier::Impaired);
        assert_eq!(prediction.attention, Tier::Impaired);
    }

    #[test]
    fn test_healthy_profile() {
        let c = classifier();
        let prediction = c.predict(&features(0.2, 0.4, 0.35));
        assert_eq!(
            prediction,
            HealthPrediction {
                visual: Tier::Normal,
                motor: Tier::Normal,
                attention: Tier::Normal,
            }
        );
    }

    #[test]
    fn test_stateless_repeatability() {
        let c = classifier();
        let input = features(0.3, 0.3, 0.25);
        assert_eq!(c.predict(&input), c.predict(&input));
    }
}
