use serde::{Deserialize, Serialize};

use crate::errors::{InvalidInputError, Result};

/// Recall floor applied when the caller does not supply one.
pub const DEFAULT_MIN_RECALL: f64 = 0.9;

/// Constraint applied when choosing a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Minimum recall a threshold must reach to be considered (0.0-1.0)
    #[serde(default = "default_min_recall")]
    pub min_recall: f64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            min_recall: default_min_recall(),
        }
    }
}

impl SelectionPolicy {
    /// Build a policy, rejecting a recall floor outside [0, 1] (NaN included).
    pub fn new(min_recall: f64) -> Result<Self> {
        let policy = Self { min_recall };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.min_recall) {
            Ok(())
        } else {
            Err(InvalidInputError::min_recall_out_of_range(self.min_recall))
        }
    }
}

fn default_min_recall() -> f64 {
    DEFAULT_MIN_RECALL
}
