//! Configuration for the skip-aware alignment.
//!
//! Everything has a default, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "rules": "current", "step": 3 }
//! ```

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::{AlignError, Result};

/// Substitution/insertion cost of the worked examples.
pub const DEFAULT_STEP: u32 = 2;

/// Which zero-cost match rule the cell evaluator applies.
///
/// The two rule sets differ only when the current symbols are equal but the
/// cell is off the main diagonal (`i != j`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleSet {
    /// Off-diagonal matches are free when the longer prefix's *preceding*
    /// symbol is a skip.
    #[default]
    Lookbehind,
    /// Off-diagonal matches are free when the longer prefix's *current*
    /// symbol is a skip.
    Current,
}

impl std::str::FromStr for RuleSet {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lookbehind" => Ok(Self::Lookbehind),
            "current" => Ok(Self::Current),
            other => Err(AlignError::parse(other, "expected `lookbehind` or `current`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipAlignConfig {
    pub rules: RuleSet,
    /// Cost added for a substitution, insertion or deletion.
    pub step: u32,
    pub alphabet: Alphabet,
}

impl Default for SkipAlignConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            step: DEFAULT_STEP,
            alphabet: Alphabet::default(),
        }
    }
}

impl SkipAlignConfig {
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(AlignError::config("step cost must be positive"));
        }
        if !self.alphabet.contains(self.alphabet.skip) {
            return Err(AlignError::config(format!(
                "skip symbol {} is outside the alphabet 0..={}",
                self.alphabet.skip, self.alphabet.max
            )));
        }
        Ok(())
    }

    /// Largest cost a table for sequences of these lengths can hold,
    /// `(len_a + len_b) * step`, or `None` when it does not fit a `u32`.
    pub fn cost_bound(&self, len_a: usize, len_b: usize) -> Option<u32> {
        let edges = len_a.checked_add(len_b)?;
        u32::try_from(edges).ok()?.checked_mul(self.step)
    }
}
