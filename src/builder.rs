//! Fluent construction of skip-alignment problems and engines.

use crate::alphabet::{Alphabet, Symbol};
use crate::config::{RuleSet, SkipAlignConfig};
use crate::error::Result;
use crate::problems::skip_align::SkipAlignProblem;
use crate::TableEngine;

/// Fluent construction of a skip-alignment engine.
///
/// ```
/// use seqdp::{config::RuleSet, SkipAlignBuilder};
///
/// let engine = SkipAlignBuilder::new()
///     .with_rules(RuleSet::Current)
///     .build(&[0, 1, 1, 0], &[1, 0, 1])
///     .unwrap();
/// assert_eq!(engine.run(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SkipAlignBuilder {
    config: SkipAlignConfig,
}

impl SkipAlignBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_config(config: SkipAlignConfig) -> Self {
        Self { config }
    }
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.config.rules = rules;
        self
    }
    pub fn with_step(mut self, step: u32) -> Self {
        self.config.step = step;
        self
    }
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.alphabet = alphabet;
        self
    }
    pub fn config(&self) -> &SkipAlignConfig {
        &self.config
    }
    pub fn build_problem<'a>(&self, a: &'a [Symbol], b: &'a [Symbol]) -> Result<SkipAlignProblem<'a>> {
        SkipAlignProblem::with_config(a, b, self.config)
    }
    pub fn build<'a>(&self, a: &'a [Symbol], b: &'a [Symbol]) -> Result<TableEngine<SkipAlignProblem<'a>>> {
        self.build_problem(a, b).map(TableEngine::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlignError;

    #[test]
    fn builder_overrides_defaults() {
        let b = SkipAlignBuilder::new()
            .with_rules(RuleSet::Current)
            .with_step(3)
            .with_alphabet(Alphabet { skip: 0, max: 2 });
        assert_eq!(b.config().rules, RuleSet::Current);
        assert_eq!(b.config().step, 3);
        assert_eq!(b.config().alphabet.max, 2);
        let problem = b.build_problem(&[2, 1], &[2]).unwrap();
        assert_eq!(problem.config(), b.config());
    }

    #[test]
    fn build_validates() {
        let zero = SkipAlignBuilder::new().with_step(0);
        assert!(matches!(
            zero.build(&[1], &[1]),
            Err(AlignError::InvalidConfig(_))
        ));
        assert!(matches!(
            SkipAlignBuilder::new().build(&[1], &[2]),
            Err(AlignError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn default_builder_matches_worked_example() {
        let engine = SkipAlignBuilder::new().build(&[1, 1, 1, 0], &[1, 0, 1]).unwrap();
        assert_eq!(engine.run(), 2);
    }
}
