//! Error type shared by every table problem and the tree routine.

use thiserror::Error;

/// Which input sequence a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A symbol lies outside the configured alphabet `0..=max`.
    #[error("sequence {sequence}: symbol {symbol} at position {position} is outside the alphabet 0..={max}")]
    InvalidSymbol {
        sequence: Side,
        position: usize,
        symbol: u8,
        max: u8,
    },

    /// The cell evaluator was asked for a boundary cell, a cell past the end,
    /// or was handed a table of the wrong shape.
    #[error("cell ({row}, {col}) is not an interior cell of a {rows}x{cols} table")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// `(len_a + len_b) * step` does not fit the `u32` cost type.
    #[error("step cost {step} overflows the cost table for sequences of length {len_a} and {len_b}")]
    CostOverflow { step: u32, len_a: usize, len_b: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl AlignError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn parse<I: Into<String>, R: Into<String>>(input: I, reason: R) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AlignError>;
