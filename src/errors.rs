//! Error types shared by the threshold selector and the finite-state machines.
//!
//! Every failure in this crate is an input problem: there is no I/O and no
//! external resource, so there is no transient class of error. All variants
//! belong to a single [`InvalidInputError`] enum and are returned to the
//! caller as soon as they are detected.
//!
//! # Example
//!
//! ```rust
//! use modthree_threshold::errors::InvalidInputError;
//!
//! let err = InvalidInputError::invalid_bit('2', 2);
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid input: character '2' at position 2 is not a binary digit"
//! );
//! ```

use thiserror::Error;

/// Malformed input passed to one of the crate's calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// A confusion-matrix count was negative
    #[error("Invalid input: {field} must be non-negative, got {value}")]
    NegativeCount { field: &'static str, value: i64 },

    /// Two entries share the same threshold
    #[error("Invalid input: duplicate threshold {threshold}")]
    DuplicateThreshold { threshold: f64 },

    /// A threshold was NaN or infinite
    #[error("Invalid input: threshold must be finite, got {threshold}")]
    NonFiniteThreshold { threshold: f64 },

    /// Minimum recall outside the unit interval
    #[error("Invalid input: min_recall must be between 0 and 1, got {value}")]
    MinRecallOutOfRange { value: f64 },

    /// An input string with no symbols
    #[error("Invalid input: input string cannot be empty")]
    EmptyInput,

    /// A character other than '0' or '1'
    #[error("Invalid input: character {character:?} at position {position} is not a binary digit")]
    InvalidBit { character: char, position: usize },

    /// An automaton whose five-tuple is inconsistent
    #[error("Invalid input: automaton definition: {0}")]
    InvalidAutomaton(String),

    /// A symbol outside the automaton's alphabet
    #[error("Invalid input: symbol {symbol} is not in the alphabet")]
    UnknownSymbol { symbol: String },
}

impl InvalidInputError {
    /// Create a negative-count error for the named confusion-matrix field.
    pub fn negative_count(field: &'static str, value: i64) -> Self {
        Self::NegativeCount { field, value }
    }

    pub fn duplicate_threshold(threshold: f64) -> Self {
        Self::DuplicateThreshold { threshold }
    }

    pub fn non_finite_threshold(threshold: f64) -> Self {
        Self::NonFiniteThreshold { threshold }
    }

    pub fn min_recall_out_of_range(value: f64) -> Self {
        Self::MinRecallOutOfRange { value }
    }

    /// Create an error for a non-binary character at a zero-based position.
    pub fn invalid_bit(character: char, position: usize) -> Self {
        Self::InvalidBit {
            character,
            position,
        }
    }

    pub fn invalid_automaton(message: impl Into<String>) -> Self {
        Self::InvalidAutomaton(message.into())
    }

    /// Create an unknown-symbol error from any debuggable symbol.
    pub fn unknown_symbol(symbol: &impl std::fmt::Debug) -> Self {
        Self::UnknownSymbol {
            symbol: format!("{symbol:?}"),
        }
    }
}

/// Result type alias using the crate's error type
pub type Result<T> = std::result::Result<T, InvalidInputError>;
