// Mindlink Core - EEG signal analysis engine
// Windowed sample buffers -> spectral features -> debounced mental commands

// Module declarations
pub mod analysis;
pub mod config;
pub mod dsp;
pub mod error;
pub mod preprocessing;

// Re-exports for convenience
pub use analysis::classifier::{Command, DecisionEngine, DecisionRule};
pub use analysis::features::{
    BandPowerEstimator, FeatureExtractor, Features, SpectralBandPower, TimeDomainBandPower,
};
pub use analysis::health::{HealthClassifier, HealthPrediction, Tier};
pub use analysis::lda::{LabeledSample, LdaModel};
pub use config::PipelineConfig;
pub use error::{ErrorCode, SignalError, TrainingError};
