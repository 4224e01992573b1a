//! Precision-maximizing threshold selection under a recall floor.
//!
//! Given confusion-matrix counts measured at a set of candidate thresholds,
//! [`ThresholdSelector`] keeps the thresholds whose recall reaches the
//! requested floor and returns the one with the highest precision. Ties in
//! precision go to the lowest threshold, so the result never depends on the
//! input order.
//!
//! # Example
//!
//! ```rust
//! use modthree_threshold::metrics::ConfusionCounts;
//! use modthree_threshold::threshold::{select_best, ThresholdEntry};
//!
//! let entries = vec![
//!     ThresholdEntry::new(0.1, ConfusionCounts::new(90, 5, 10, 5)?),
//!     ThresholdEntry::new(0.2, ConfusionCounts::new(80, 10, 8, 12)?),
//!     ThresholdEntry::new(0.3, ConfusionCounts::new(70, 15, 5, 10)?),
//! ];
//!
//! assert_eq!(select_best(&entries, 0.9)?, Some(0.1));
//! # Ok::<(), modthree_threshold::errors::InvalidInputError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::policy::SelectionPolicy;
use crate::errors::{InvalidInputError, Result};
use crate::metrics::ConfusionCounts;

/// Confusion-matrix counts measured at one decision threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdEntry {
    pub threshold: f64,
    #[serde(flatten)]
    pub counts: ConfusionCounts,
}

impl ThresholdEntry {
    pub fn new(threshold: f64, counts: ConfusionCounts) -> Self {
        Self { threshold, counts }
    }

    /// Score this entry's counts.
    pub fn score(&self) -> ThresholdScore {
        ThresholdScore {
            threshold: self.threshold,
            recall: self.counts.recall(),
            precision: self.counts.precision(),
            f1_score: self.counts.f1_score(),
        }
    }
}

/// Derived rates for one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdScore {
    pub threshold: f64,
    pub recall: f64,
    pub precision: f64,
    pub f1_score: f64,
}

/// A validated collection of threshold entries.
///
/// Construction checks that every threshold is finite and that no two are
/// equal; selection then only has to validate the recall floor.
#[derive(Debug, Clone)]
pub struct ThresholdSelector {
    // Sorted ascending by threshold
    entries: Vec<ThresholdEntry>,
}

impl ThresholdSelector {
    pub fn new(entries: impl IntoIterator<Item = ThresholdEntry>) -> Result<Self> {
        let mut entries: Vec<ThresholdEntry> = entries.into_iter().collect();
        info!(entries = entries.len(), "Validating threshold entries");

        if let Some(entry) = entries.iter().find(|e| !e.threshold.is_finite()) {
            return Err(InvalidInputError::non_finite_threshold(entry.threshold));
        }

        entries.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        // -0.0 and 0.0 end up adjacent and compare equal
        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].threshold == pair[1].threshold)
        {
            return Err(InvalidInputError::duplicate_threshold(pair[1].threshold));
        }

        debug!(entries = entries.len(), "Threshold entries validated");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ThresholdEntry] {
        &self.entries
    }

    /// Scores of every entry whose recall reaches `min_recall`, in ascending
    /// threshold order.
    pub fn candidates(&self, min_recall: f64) -> Result<Vec<ThresholdScore>> {
        let policy = SelectionPolicy::new(min_recall)?;
        Ok(self.qualifying(&policy))
    }

    /// Threshold with the highest precision among those meeting `min_recall`.
    ///
    /// Returns `Ok(None)` when no threshold reaches the recall floor.
    pub fn select_best(&self, min_recall: f64) -> Result<Option<f64>> {
        self.select_with(&SelectionPolicy::new(min_recall)?)
    }

    /// [`select_best`](Self::select_best) with the default recall floor of 0.9.
    pub fn select_best_default(&self) -> Result<Option<f64>> {
        self.select_with(&SelectionPolicy::default())
    }

    pub fn select_with(&self, policy: &SelectionPolicy) -> Result<Option<f64>> {
        policy.validate()?;
        info!(
            min_recall = policy.min_recall,
            "Finding best threshold by precision"
        );

        let candidates = self.qualifying(policy);
        let best = candidates.iter().min_by(|a, b| {
            b.precision
                .total_cmp(&a.precision)
                .then(a.threshold.total_cmp(&b.threshold))
        });

        match best {
            Some(best) => {
                info!(
                    threshold = best.threshold,
                    recall = best.recall,
                    precision = best.precision,
                    candidates = candidates.len(),
                    "Selected threshold"
                );
                Ok(Some(best.threshold))
            }
            None => {
                warn!(
                    min_recall = policy.min_recall,
                    total = self.entries.len(),
                    "No threshold meets the recall floor"
                );
                Ok(None)
            }
        }
    }

    fn qualifying(&self, policy: &SelectionPolicy) -> Vec<ThresholdScore> {
        self.entries
            .iter()
            .map(ThresholdEntry::score)
            .inspect(|score| {
                debug!(
                    threshold = score.threshold,
                    recall = score.recall,
                    precision = score.precision,
                    "Scored threshold"
                );
            })
            .filter(|score| score.recall >= policy.min_recall)
            .collect()
    }
}

/// Validate `entries` and select the best threshold for `min_recall`.
pub fn select_best(entries: &[ThresholdEntry], min_recall: f64) -> Result<Option<f64>> {
    SelectionPolicy::new(min_recall)?;
    ThresholdSelector::new(entries.iter().copied())?.select_best(min_recall)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(threshold: f64, tp: i64, tn: i64, fp: i64, fn_: i64) -> ThresholdEntry {
        ThresholdEntry::new(threshold, ConfusionCounts::new(tp, tn, fp, fn_).unwrap())
    }

    #[test]
    fn test_highest_precision_among_qualifiers() {
        let entries = vec![
            entry(0.1, 90, 50, 50, 10),
            entry(0.2, 85, 60, 40, 15),
            entry(0.3, 80, 70, 30, 20),
        ];
        assert_eq!(select_best(&entries, 0.8).unwrap(), Some(0.3));
    }

    #[test]
    fn test_recall_floor_excludes_higher_precision() {
        let entries = vec![
            entry(0.1, 90, 5, 10, 5),
            entry(0.2, 80, 10, 8, 12),
            entry(0.3, 70, 15, 5, 10),
        ];
        assert_eq!(select_best(&entries, 0.9).unwrap(), Some(0.1));
    }

    #[test]
    fn test_no_qualifier_returns_none() {
        let entries = vec![entry(0.5, 10, 0, 0, 90)];
        assert_eq!(select_best(&entries, 0.5).unwrap(), None);
    }

    #[test]
    fn test_empty_entries_return_none() {
        assert_eq!(select_best(&[], 0.0).unwrap(), None);
    }

    #[test]
    fn test_precision_tie_goes_to_lowest_threshold() {
        let entries = vec![
            entry(0.7, 10, 0, 10, 0),
            entry(0.2, 10, 0, 10, 0),
            entry(0.4, 10, 0, 10, 0),
        ];
        assert_eq!(select_best(&entries, 1.0).unwrap(), Some(0.2));
    }

    #[test]
    fn test_duplicate_threshold_rejected() {
        let entries = vec![entry(0.3, 1, 1, 1, 1), entry(0.3, 2, 2, 2, 2)];
        assert_eq!(
            select_best(&entries, 0.5).unwrap_err(),
            InvalidInputError::duplicate_threshold(0.3)
        );
    }

    #[test]
    fn test_signed_zero_thresholds_are_duplicates() {
        let result = ThresholdSelector::new(vec![entry(-0.0, 1, 1, 1, 1), entry(0.0, 1, 1, 1, 1)]);
        assert!(matches!(
            result,
            Err(InvalidInputError::DuplicateThreshold { .. })
        ));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let result = ThresholdSelector::new(vec![entry(f64::NAN, 1, 1, 1, 1)]);
        assert!(matches!(
            result,
            Err(InvalidInputError::NonFiniteThreshold { .. })
        ));
    }

    #[test]
    fn test_infinite_thresholds_rejected() {
        for threshold in [f64::INFINITY, f64::NEG_INFINITY] {
            let result = ThresholdSelector::new(vec![
                entry(0.5, 1, 1, 1, 1),
                entry(threshold, 1, 1, 1, 1),
            ]);
            assert!(
                matches!(result, Err(InvalidInputError::NonFiniteThreshold { .. })),
                "{threshold} should be rejected"
            );
        }
    }

    #[test]
    fn test_counts_at_u64_limit_still_qualify() {
        let saturated = ThresholdEntry::new(
            0.5,
            ConfusionCounts {
                true_positives: u64::MAX,
                true_negatives: 0,
                false_positives: 0,
                false_negatives: 1,
            },
        );
        assert_eq!(select_best(&[saturated], 0.9).unwrap(), Some(0.5));
    }

    #[test]
    fn test_min_recall_out_of_range_rejected() {
        let selector = ThresholdSelector::new(vec![entry(0.5, 1, 1, 1, 1)]).unwrap();
        assert!(selector.select_best(-0.1).is_err());
        assert!(selector.select_best(1.1).is_err());
        assert!(selector.candidates(2.0).is_err());
    }

    #[test]
    fn test_min_recall_checked_even_without_entries() {
        assert_eq!(
            select_best(&[], 1.5).unwrap_err(),
            InvalidInputError::min_recall_out_of_range(1.5)
        );
    }

    #[test]
    fn test_candidates_sorted_by_threshold() {
        let selector = ThresholdSelector::new(vec![
            entry(0.9, 50, 0, 0, 50),
            entry(0.1, 100, 0, 50, 0),
            entry(0.5, 95, 0, 20, 5),
        ])
        .unwrap();

        let thresholds: Vec<f64> = selector
            .candidates(0.9)
            .unwrap()
            .iter()
            .map(|score| score.threshold)
            .collect();
        assert_eq!(thresholds, vec![0.1, 0.5]);
    }

    #[test]
    fn test_default_floor_is_point_nine() {
        let selector = ThresholdSelector::new(vec![
            entry(0.1, 89, 0, 0, 11),
            entry(0.2, 90, 0, 30, 10),
        ])
        .unwrap();
        assert_eq!(selector.select_best_default().unwrap(), Some(0.2));
    }
}
