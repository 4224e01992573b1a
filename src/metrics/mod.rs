//! Metrics calculation module
//!
//! Confusion-matrix counts and the classification rates derived from them.

pub mod confusion;

pub use confusion::ConfusionCounts;
