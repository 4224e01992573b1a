//! Threshold selection for binary classifiers.

pub mod policy;
pub mod selector;

pub use policy::{SelectionPolicy, DEFAULT_MIN_RECALL};
pub use selector::{select_best, ThresholdEntry, ThresholdScore, ThresholdSelector};
