// Estimator configuration.
//
// All knobs the caller can turn on an LDA run live here, validated up front
// so the sampler never has to second-guess its inputs mid-sweep.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Configuration for one LDA run.
///
/// Invalid values are rejected by [`LdaConfig::validate`]: a topic count
/// below 2 or a non-positive hyperparameter is an error, never clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdaConfig {
    /// Number of latent topics (k), at least 2.
    pub topics: usize,
    /// Dirichlet smoothing on document-topic counts.
    pub alpha: f64,
    /// Dirichlet smoothing on topic-term counts.
    pub beta: f64,
    /// Number of full Gibbs sweeps over every token occurrence.
    pub sweeps: usize,
    /// PRNG seed; the same seed on the same corpus reproduces the run exactly.
    pub seed: u64,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            topics: 10,
            alpha: 0.1,
            beta: 0.1,
            sweeps: 1000,
            seed: 42,
        }
    }
}

impl LdaConfig {
    /// Check every field before a run.
    ///
    /// NaN and infinite hyperparameters are caught here too, since a NaN alpha
    /// would otherwise poison every sampling weight downstream.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.topics < 2 {
            return Err(AnalysisError::InvalidTopicCount(self.topics));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(AnalysisError::InvalidHyperparameter {
                name: "alpha",
                value: self.alpha,
            });
        }
        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(AnalysisError::InvalidHyperparameter {
                name: "beta",
                value: self.beta,
            });
        }
        if self.sweeps == 0 {
            return Err(AnalysisError::InvalidHyperparameter {
                name: "sweeps",
                value: 0.0,
            });
        }
        Ok(())
    }
}
