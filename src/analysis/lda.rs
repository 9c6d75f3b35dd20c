// LDA - two-class linear discriminant training and inference
//
// Simplified Fisher discriminant: the projection is the normalized
// between-class mean difference, and the threshold is the midpoint of the
// projected class means. Within-class scatter is deliberately ignored, so
// the projection is not optimal under unequal class covariances; callers
// who need that should not assume it here.

use crate::error::{log_training_error, TrainingError};
use serde::{Deserialize, Serialize};

/// Projection norms below this skip normalization entirely, so degenerate
/// (near-identical) class means cannot blow the weights up
const NORM_EPSILON: f32 = 1e-4;

/// One labeled training/evaluation sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledSample {
    pub features: Vec<f32>,
    /// Binary class label, 0 or 1
    pub label: u8,
}

impl LabeledSample {
    pub fn new(features: Vec<f32>, label: u8) -> Self {
        Self { features, label }
    }
}

/// Trained (or explicitly untrained) two-class linear model
///
/// Mutable only through `train`; inference borrows the model read-only.
/// Serializable so a calibrated model can be persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LdaModel {
    projection: Vec<f32>,
    threshold: f32,
    trained: bool,
}

impl LdaModel {
    /// An untrained placeholder model
    ///
    /// `project` returns the 0.0 sentinel on such a model instead of
    /// erroring; check `is_trained` before trusting predictions.
    pub fn untrained(num_features: usize) -> Self {
        Self {
            projection: vec![0.0; num_features],
            threshold: 0.0,
            trained: false,
        }
    }

    /// Train a model from labeled feature vectors
    ///
    /// Computes the mean vector per class, sets the projection to the
    /// unit-normalized mean difference (class 1 minus class 0), and the
    /// threshold to the midpoint of the projected means. Refuses to train
    /// (no partial model) on an empty sample set, a missing class, or
    /// inconsistent feature-vector lengths.
    pub fn train(samples: &[LabeledSample]) -> Result<Self, TrainingError> {
        let first = samples.first().ok_or(TrainingError::NoSamples)?;
        let num_features = first.features.len();

        for sample in samples {
            if sample.features.len() != num_features {
                return Err(TrainingError::DimensionMismatch {
                    expected: num_features,
                    got: sample.features.len(),
                });
            }
        }

        let mean0 =
            class_mean(samples, 0, num_features).ok_or(TrainingError::MissingClass { label: 0 })?;
        let mean1 =
            class_mean(samples, 1, num_features).ok_or(TrainingError::MissingClass { label: 1 })?;

        let mut projection: Vec<f32> = mean1
            .iter()
            .zip(&mean0)
            .map(|(m1, m0)| m1 - m0)
            .collect();

        let norm = projection.iter().map(|w| w * w).sum::<f32>().sqrt();
        if norm > NORM_EPSILON {
            for weight in projection.iter_mut() {
                *weight /= norm;
            }
        }

        let projected_mean0 = dot(&projection, &mean0);
        let projected_mean1 = dot(&projection, &mean1);
        let threshold = (projected_mean0 + projected_mean1) / 2.0;

        Ok(Self {
            projection,
            threshold,
            trained: true,
        })
    }

    /// Train, falling back to an untrained model when training is refused
    ///
    /// For callers that cannot surface the error (calibration loops that
    /// must always hold a well-formed model): the refusal is logged and an
    /// `untrained(num_features)` placeholder comes back. Check `is_trained`
    /// before trusting predictions.
    pub fn train_or_untrained(samples: &[LabeledSample], num_features: usize) -> Self {
        match Self::train(samples) {
            Ok(model) => model,
            Err(err) => {
                log_training_error(&err, "LdaModel::train");
                Self::untrained(num_features)
            }
        }
    }

    /// Whether this model went through training
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// The learned projection weights
    pub fn projection(&self) -> &[f32] {
        &self.projection
    }

    /// The learned decision threshold
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Project a feature vector onto the discriminant axis
    ///
    /// Returns the fixed sentinel 0.0 on an untrained model.
    pub fn project(&self, features: &[f32]) -> f32 {
        if !self.trained {
            return 0.0;
        }
        dot(&self.projection, features)
    }

    /// Predict the binary class: 1 if the projection reaches the threshold
    pub fn predict(&self, features: &[f32]) -> u8 {
        if self.project(features) >= self.threshold {
            1
        } else {
            0
        }
    }

    /// Fraction of samples whose prediction matches the label
    ///
    /// 0.0 for an empty evaluation set by convention.
    pub fn accuracy(&self, samples: &[LabeledSample]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }

        let correct = samples
            .iter()
            .filter(|sample| self.predict(&sample.features) == sample.label)
            .count();
        correct as f32 / samples.len() as f32
    }
}

/// Mean feature vector over samples with the target label; None if absent
fn class_mean(samples: &[LabeledSample], label: u8, num_features: usize) -> Option<Vec<f32>> {
    let mut mean = vec![0.0f32; num_features];
    let mut count = 0usize;

    for sample in samples.iter().filter(|s| s.label == label) {
        for (accum, &value) in mean.iter_mut().zip(&sample.features) {
            *accum += value;
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }
    for value in mean.iter_mut() {
        *value /= count as f32;
    }
    Some(mean)
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
