// Test utility module for integration tests
#![allow(dead_code)]

use modthree_threshold::{ConfusionCounts, ThresholdEntry};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build an entry from (TP, TN, FP, FN) counts.
pub fn entry(threshold: f64, tp: i64, tn: i64, fp: i64, fn_: i64) -> ThresholdEntry {
    ThresholdEntry::new(
        threshold,
        ConfusionCounts::new(tp, tn, fp, fn_).expect("test counts are non-negative"),
    )
}
