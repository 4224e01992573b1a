//! Confusion-matrix counts and the rates derived from them.

use serde::{Deserialize, Serialize};

use crate::errors::{InvalidInputError, Result};

/// True/false positive/negative tallies for a binary classifier at one
/// decision threshold.
///
/// Counts are non-negative by construction. Use [`ConfusionCounts::new`] to
/// build one from signed values received at a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positives: u64,
    pub true_negatives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
}

impl ConfusionCounts {
    /// Validate signed counts in (TP, TN, FP, FN) order.
    ///
    /// Fails with [`InvalidInputError::NegativeCount`] naming the first
    /// negative field.
    pub fn new(
        true_positives: i64,
        true_negatives: i64,
        false_positives: i64,
        false_negatives: i64,
    ) -> Result<Self> {
        Ok(Self {
            true_positives: non_negative("true_positives", true_positives)?,
            true_negatives: non_negative("true_negatives", true_negatives)?,
            false_positives: non_negative("false_positives", false_positives)?,
            false_negatives: non_negative("false_negatives", false_negatives)?,
        })
    }

    /// TP / (TP + FN), or 0.0 when there are no actual positives.
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.false_negatives)
    }

    /// TP / (TP + FP), or 0.0 when nothing was predicted positive.
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.false_positives)
    }

    /// Harmonic mean of precision and recall, or 0.0 when both are zero.
    pub fn f1_score(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        let sum = precision + recall;
        if sum == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / sum
        }
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| InvalidInputError::negative_count(field, value))
}

/// `hits / (hits + misses)` in floating point, so counts near `u64::MAX`
/// cannot overflow the denominator.
fn ratio(hits: u64, misses: u64) -> f64 {
    if hits == 0 && misses == 0 {
        0.0
    } else {
        hits as f64 / (hits as f64 + misses as f64)
    }
}
