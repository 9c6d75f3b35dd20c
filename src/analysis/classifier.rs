// DecisionEngine - rule-based mental command classification
//
// This module implements the debounced command classifier. Each call
// evaluates an ordered rule list against the feature vector, debounces the
// winning candidate across calls, and adapts an amplitude baseline for
// blink detection.
//
// The rule list is an explicit, ordered sequence of (predicate, command)
// pairs evaluated top-down with short-circuit: exactly one candidate per
// call, and the order itself is auditable and testable per rule.

use crate::analysis::features::Features;
use crate::config::DecisionConfig;
use std::fmt;

/// Command represents the discrete outputs of the decision engine
///
/// NONE doubles as the idle state and the "detected but not yet debounced"
/// answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    /// No command (idle, or candidate not yet stable)
    None,
    /// Sustained high beta ratio (active concentration)
    Focus,
    /// Sustained high alpha ratio (relaxed wakefulness)
    Relax,
    /// Sharp amplitude spike well above baseline (eye blink artifact)
    Blink,
}

impl Command {
    /// Stable display name for host applications
    pub fn name(&self) -> &'static str {
        match self {
            Command::None => "NONE",
            Command::Focus => "FOCUS",
            Command::Relax => "RELAX",
            Command::Blink => "BLINK",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the ordered rule list
///
/// The predicate sees the feature vector, the engine config, and the
/// current baseline amplitude.
pub struct DecisionRule {
    command: Command,
    predicate: fn(&Features, &DecisionConfig, f32) -> bool,
}

impl DecisionRule {
    pub fn new(command: Command, predicate: fn(&Features, &DecisionConfig, f32) -> bool) -> Self {
        Self { command, predicate }
    }

    /// Command this rule produces when it matches
    pub fn command(&self) -> Command {
        self.command
    }

    /// Evaluate the rule's predicate
    pub fn matches(&self, features: &Features, config: &DecisionConfig, baseline: f32) -> bool {
        (self.predicate)(features, config, baseline)
    }

    /// The standard priority-ordered rule set: BLINK, then FOCUS, then RELAX
    ///
    /// A blink spike outranks everything because it contaminates the band
    /// ratios in the same window.
    pub fn standard_rules() -> Vec<DecisionRule> {
        vec![
            DecisionRule::new(Command::Blink, |features, config, baseline| {
                features.peak_amplitude > config.blink_multiplier * baseline
            }),
            DecisionRule::new(Command::Focus, |features, config, _| {
                features.beta_power > config.focus_threshold
            }),
            DecisionRule::new(Command::Relax, |features, config, _| {
                features.alpha_power > config.relax_threshold
            }),
        ]
    }
}

/// DecisionEngine debounces rule detections into confirmed commands
///
/// One instance per signal source/session. State is mutated on every call;
/// exclusive ownership (`&mut self`) serializes access.
pub struct DecisionEngine {
    config: DecisionConfig,
    rules: Vec<DecisionRule>,
    last_candidate: Command,
    debounce_counter: u32,
    baseline_amplitude: f32,
}

impl DecisionEngine {
    /// Create an engine with the standard rule order
    pub fn new(config: DecisionConfig) -> Self {
        Self::with_rules(config, DecisionRule::standard_rules())
    }

    /// Create an engine with a custom ordered rule list
    pub fn with_rules(config: DecisionConfig, rules: Vec<DecisionRule>) -> Self {
        Self {
            config,
            rules,
            last_candidate: Command::None,
            debounce_counter: 0,
            // Neutral non-zero seed so the very first blink check has a
            // usable multiplier reference
            baseline_amplitude: 1.0,
        }
    }

    /// Current adaptive baseline amplitude
    pub fn baseline_amplitude(&self) -> f32 {
        self.baseline_amplitude
    }

    /// Classify one feature vector, returning a confirmed command or NONE
    ///
    /// Candidates must repeat for `debounce_count` consecutive calls before
    /// they are emitted; anything less returns NONE. Confirmed non-BLINK,
    /// non-NONE emissions fold the window's peak amplitude into the
    /// baseline; BLINK emissions never touch it, so the spike that fired
    /// the rule cannot corrupt future blink sensitivity.
    pub fn classify(&mut self, features: &Features) -> Command {
        let candidate = self.evaluate_rules(features);

        if candidate == self.last_candidate {
            self.debounce_counter += 1;
        } else {
            self.debounce_counter = 1;
            self.last_candidate = candidate;
        }

        if self.debounce_counter >= self.config.debounce_count {
            if candidate != Command::None && candidate != Command::Blink {
                self.update_baseline(features.peak_amplitude);
            }
            return candidate;
        }

        Command::None
    }

    /// Return the engine to its initial state (new session, same config)
    pub fn reset(&mut self) {
        self.last_candidate = Command::None;
        self.debounce_counter = 0;
        self.baseline_amplitude = 1.0;
    }

    fn evaluate_rules(&self, features: &Features) -> Command {
        self.rules
            .iter()
            .find(|rule| rule.matches(features, &self.config, self.baseline_amplitude))
            .map(|rule| rule.command())
            .unwrap_or(Command::None)
    }

    fn update_baseline(&mut self, amplitude: f32) {
        let alpha = self.config.baseline_smoothing;
        self.baseline_amplitude = alpha * amplitude + (1.0 - alpha) * self.baseline_amplitude;
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
