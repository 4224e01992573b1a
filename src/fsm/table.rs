//! Automata defined at runtime by an explicit transition table.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::machine::StateMachine;
use crate::errors::{InvalidInputError, Result};

/// A deterministic automaton given as a five-tuple: states, alphabet,
/// initial state, accepting states and a transition table.
///
/// The table may be partial. Reading a declared symbol from a state with no
/// entry for it is an error at run time, not at construction.
#[derive(Debug, Clone)]
pub struct TableAutomaton<S, A> {
    states: HashSet<S>,
    alphabet: HashSet<A>,
    initial: S,
    accepting: HashSet<S>,
    transitions: HashMap<(S, A), S>,
}

impl<S, A> TableAutomaton<S, A>
where
    S: Copy + Eq + Hash + Debug,
    A: Copy + Eq + Hash + Debug,
{
    pub fn new(
        states: impl IntoIterator<Item = S>,
        alphabet: impl IntoIterator<Item = A>,
        initial: S,
        accepting: impl IntoIterator<Item = S>,
        transitions: impl IntoIterator<Item = ((S, A), S)>,
    ) -> Result<Self> {
        let automaton = Self {
            states: states.into_iter().collect(),
            alphabet: alphabet.into_iter().collect(),
            initial,
            accepting: accepting.into_iter().collect(),
            transitions: transitions.into_iter().collect(),
        };
        automaton.validate()?;
        debug!(
            states = automaton.states.len(),
            symbols = automaton.alphabet.len(),
            transitions = automaton.transitions.len(),
            "Automaton defined"
        );
        Ok(automaton)
    }

    fn validate(&self) -> Result<()> {
        if !self.states.contains(&self.initial) {
            return Err(InvalidInputError::invalid_automaton(format!(
                "initial state {:?} is not a declared state",
                self.initial
            )));
        }

        if let Some(state) = self.accepting.iter().find(|&s| !self.states.contains(s)) {
            return Err(InvalidInputError::invalid_automaton(format!(
                "accepting state {state:?} is not a declared state"
            )));
        }

        for (&(from, symbol), to) in &self.transitions {
            if !self.states.contains(&from) {
                return Err(InvalidInputError::invalid_automaton(format!(
                    "transition source {from:?} is not a declared state"
                )));
            }
            if !self.alphabet.contains(&symbol) {
                return Err(InvalidInputError::invalid_automaton(format!(
                    "transition symbol {symbol:?} is not in the alphabet"
                )));
            }
            if !self.states.contains(to) {
                return Err(InvalidInputError::invalid_automaton(format!(
                    "transition target {to:?} is not a declared state"
                )));
            }
        }

        Ok(())
    }

    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    pub fn alphabet(&self) -> &HashSet<A> {
        &self.alphabet
    }

    /// Whether every (state, symbol) pair has a transition.
    pub fn is_total(&self) -> bool {
        self.transitions.len() == self.states.len() * self.alphabet.len()
    }
}

impl<S, A> StateMachine for TableAutomaton<S, A>
where
    S: Copy + Eq + Hash + Debug,
    A: Copy + Eq + Hash + Debug,
{
    type State = S;
    type Symbol = A;

    fn initial_state(&self) -> S {
        self.initial
    }

    fn transition(&self, state: S, symbol: A) -> Result<S> {
        if !self.alphabet.contains(&symbol) {
            return Err(InvalidInputError::unknown_symbol(&symbol));
        }
        self.transitions
            .get(&(state, symbol))
            .copied()
            .ok_or_else(|| {
                InvalidInputError::invalid_automaton(format!(
                    "no transition from {state:?} on {symbol:?}"
                ))
            })
    }

    fn is_accepting(&self, state: S) -> bool {
        self.accepting.contains(&state)
    }
}
