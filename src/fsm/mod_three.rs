//! Remainder of a binary number modulo three, computed one bit at a time.
//!
//! The automaton's state is the remainder of the prefix read so far. Reading
//! bit `b` in state `r` moves to `(2r + b) mod 3`, which is exactly the
//! remainder of the prefix shifted left by one with `b` appended. After the
//! last bit the state is the remainder of the whole number, so strings of
//! any length are handled without big-integer arithmetic.
//!
//! # Example
//!
//! ```rust
//! use modthree_threshold::fsm::calculate_remainder;
//!
//! assert_eq!(calculate_remainder("1101")?, 1); // 13 % 3
//! assert_eq!(calculate_remainder("1110")?, 2); // 14 % 3
//! assert_eq!(calculate_remainder("1111")?, 0); // 15 % 3
//! # Ok::<(), modthree_threshold::errors::InvalidInputError>(())
//! ```

use tracing::info;

use super::machine::StateMachine;
use crate::errors::{InvalidInputError, Result};

/// One binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Parse `character`, reporting `position` if it is not '0' or '1'.
    pub fn parse(character: char, position: usize) -> Result<Self> {
        match character {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            other => Err(InvalidInputError::invalid_bit(other, position)),
        }
    }
}

/// Remainder of the bits read so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModThreeState {
    S0,
    S1,
    S2,
}

impl ModThreeState {
    pub const ALL: [Self; 3] = [Self::S0, Self::S1, Self::S2];

    pub fn transition(self, bit: Bit) -> Self {
        use Bit::{One, Zero};
        use ModThreeState::{S0, S1, S2};

        match (self, bit) {
            (S0, Zero) => S0,
            (S0, One) => S1,
            (S1, Zero) => S2,
            (S1, One) => S0,
            (S2, Zero) => S1,
            (S2, One) => S2,
        }
    }

    pub fn remainder(self) -> u8 {
        match self {
            Self::S0 => 0,
            Self::S1 => 1,
            Self::S2 => 2,
        }
    }
}

/// Three-state machine over [`Bit`]s whose final state is the remainder.
///
/// Every state is accepting, since every binary number has a remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModThreeFsm;

impl ModThreeFsm {
    pub fn new() -> Self {
        Self
    }

    /// Remainder of the binary number `bits` divided by three.
    ///
    /// The whole string is checked before any transition runs: it must be
    /// non-empty and contain only '0' and '1'. Leading zeros are allowed.
    pub fn calculate_remainder(&self, bits: &str) -> Result<u8> {
        info!(len = bits.len(), "Calculating remainder modulo three");

        let parsed = bits
            .chars()
            .enumerate()
            .map(|(position, character)| Bit::parse(character, position))
            .collect::<Result<Vec<_>>>()?;

        let final_state = self.start().feed(parsed)?;
        let remainder = final_state.remainder();
        info!(?final_state, remainder, "Calculation complete");
        Ok(remainder)
    }
}

impl StateMachine for ModThreeFsm {
    type State = ModThreeState;
    type Symbol = Bit;

    fn initial_state(&self) -> ModThreeState {
        ModThreeState::S0
    }

    fn transition(&self, state: ModThreeState, bit: Bit) -> Result<ModThreeState> {
        Ok(state.transition(bit))
    }

    fn is_accepting(&self, _state: ModThreeState) -> bool {
        true
    }
}

/// Remainder of the binary number `bits` divided by three.
pub fn calculate_remainder(bits: &str) -> Result<u8> {
    ModThreeFsm::new().calculate_remainder(bits)
}
