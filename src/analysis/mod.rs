// Analysis module - feature extraction and classification
//
// Consumes conditioned sample windows and produces either a debounced
// mental command (rule-based DecisionEngine) or a learned binary label
// (LdaModel). The two classifiers are alternative consumers of the same
// feature vector, not pipeline stages of each other.

pub mod classifier;
pub mod features;
pub mod health;
pub mod lda;

pub use classifier::{Command, DecisionEngine, DecisionRule};
pub use features::{FeatureExtractor, Features};
pub use health::{HealthClassifier, HealthPrediction, Tier};
pub use lda::{LabeledSample, LdaModel};
