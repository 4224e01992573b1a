//! Finite-state machines.
//!
//! - [`machine`]: the [`StateMachine`] trait and [`Run`] cursor
//! - [`table`]: automata defined at runtime by a transition table
//! - [`mod_three`]: remainder of a binary number modulo three

pub mod machine;
pub mod mod_three;
pub mod table;

pub use machine::{Run, StateMachine};
pub use mod_three::{calculate_remainder, Bit, ModThreeFsm, ModThreeState};
pub use table::TableAutomaton;
