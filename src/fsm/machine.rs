//! Deterministic finite automata and runs over them.
//!
//! A [`StateMachine`] describes the fixed part of an automaton: where it
//! starts, how it moves, and which states accept. A [`Run`] is the mutable
//! part, a cursor holding the current state of one pass over an input.
//! Keeping the two apart lets one machine serve any number of independent
//! runs without resetting shared state between them.

use std::fmt::Debug;

use tracing::debug;

use crate::errors::{InvalidInputError, Result};

/// The fixed definition of a deterministic finite automaton.
pub trait StateMachine {
    type State: Copy + Eq + Debug;
    type Symbol: Copy + Debug;

    fn initial_state(&self) -> Self::State;

    /// Next state after reading `symbol` in `state`.
    fn transition(&self, state: Self::State, symbol: Self::Symbol) -> Result<Self::State>;

    fn is_accepting(&self, state: Self::State) -> bool;

    /// Begin a new run in the initial state.
    fn start(&self) -> Run<'_, Self>
    where
        Self: Sized,
    {
        Run::new(self)
    }
}

/// One pass of a [`StateMachine`] over its input.
#[derive(Debug)]
pub struct Run<'m, M: StateMachine> {
    machine: &'m M,
    state: M::State,
}

impl<'m, M: StateMachine> Run<'m, M> {
    pub fn new(machine: &'m M) -> Self {
        Self {
            machine,
            state: machine.initial_state(),
        }
    }

    pub fn state(&self) -> M::State {
        self.state
    }

    pub fn is_accepting(&self) -> bool {
        self.machine.is_accepting(self.state)
    }

    /// Return to the machine's initial state.
    pub fn reset(&mut self) {
        debug!(from = ?self.state, "Resetting run");
        self.state = self.machine.initial_state();
    }

    /// Consume a single symbol. On error the state is left unchanged.
    pub fn step(&mut self, symbol: M::Symbol) -> Result<M::State> {
        let next = self.machine.transition(self.state, symbol)?;
        debug!(from = ?self.state, to = ?next, ?symbol, "Transition");
        self.state = next;
        Ok(next)
    }

    /// Consume every symbol of `input` and return the final state.
    ///
    /// An empty input is rejected with [`InvalidInputError::EmptyInput`].
    pub fn feed<I>(&mut self, input: I) -> Result<M::State>
    where
        I: IntoIterator<Item = M::Symbol>,
    {
        let mut consumed = 0usize;
        for symbol in input {
            self.step(symbol)?;
            consumed += 1;
        }
        if consumed == 0 {
            return Err(InvalidInputError::EmptyInput);
        }
        Ok(self.state)
    }
}
