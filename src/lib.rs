//! Precision-maximizing threshold selection and a mod-three finite-state
//! machine.
//!
//! - [`threshold`]: pick the decision threshold with the best precision among
//!   those whose recall reaches a floor
//! - [`fsm`]: compute a binary number modulo three with a three-state
//!   automaton, plus the generic automaton types it is built on

// Export modules for library usage
pub mod errors;
pub mod fsm;
pub mod metrics;
pub mod threshold;

// Re-export commonly used types
pub use crate::errors::{InvalidInputError, Result};

pub use crate::metrics::ConfusionCounts;

pub use crate::threshold::{
    select_best, SelectionPolicy, ThresholdEntry, ThresholdScore, ThresholdSelector,
    DEFAULT_MIN_RECALL,
};

pub use crate::fsm::{
    calculate_remainder, Bit, ModThreeFsm, ModThreeState, Run, StateMachine, TableAutomaton,
};
