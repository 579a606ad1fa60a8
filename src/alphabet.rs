//! Symbol alphabet for the skip-aware alignment.
//!
//! Symbols are small unsigned integers `0..=max`. One of them, the *skip*
//! symbol (0 by default), stands for an empty slot that may be consumed
//! without cost under the positional rules of
//! [`SkipAlignProblem`](crate::problems::skip_align::SkipAlignProblem).

use serde::{Deserialize, Serialize};

use crate::error::{AlignError, Result, Side};

pub type Symbol = u8;

/// The skip marker of the default alphabet.
pub const SKIP: Symbol = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alphabet {
    pub skip: Symbol,
    pub max: Symbol,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::binary()
    }
}

impl Alphabet {
    /// `{0, 1}` with 0 as the skip symbol.
    pub const fn binary() -> Self {
        Self { skip: SKIP, max: 1 }
    }

    #[inline]
    pub fn is_skip(&self, symbol: Symbol) -> bool {
        symbol == self.skip
    }

    #[inline]
    pub fn contains(&self, symbol: Symbol) -> bool {
        symbol <= self.max
    }

    /// Reject the first symbol outside `0..=max`.
    pub fn validate(&self, seq: &[Symbol], side: Side) -> Result<()> {
        match seq.iter().position(|&s| !self.contains(s)) {
            None => Ok(()),
            Some(position) => Err(AlignError::InvalidSymbol {
                sequence: side,
                position,
                symbol: seq[position],
                max: self.max,
            }),
        }
    }
}

/// Parse a command-line symbol sequence.
///
/// Accepts either a run of decimal digits (`"1110"`, one symbol per digit) or a
/// comma separated list (`"1,1,1,0"`). Whitespace around items is ignored and
/// the empty string is the empty sequence.
pub fn parse_symbols(input: &str) -> Result<Vec<Symbol>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.contains(',') {
        trimmed
            .split(',')
            .map(|item| {
                item.trim()
                    .parse::<Symbol>()
                    .map_err(|e| AlignError::parse(input, format!("item {:?}: {e}", item.trim())))
            })
            .collect()
    } else {
        trimmed
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as Symbol)
                    .ok_or_else(|| AlignError::parse(input, format!("{c:?} is not a digit")))
            })
            .collect()
    }
}
