//! Skip-aware alignment distance as a row-major table DP.
//!
//! Two sequences over a small alphabet are compared; the skip symbol (0 by
//! default) marks an empty slot. K[i][j] is the minimal cost of aligning the
//! first `i` symbols of `a` with the first `j` symbols of `b`:
//!
//! - Boundary: K[0][0] = 0, and walking down column 0 (or along row 0) adds
//!   nothing for a skip symbol and `step` for anything else.
//! - Interior: with `minimum = min(K[i-1][j-1], K[i-1][j], K[i][j-1])`, the
//!   first rule that applies wins:
//!   1. `K[i-1][j-1]` when the current symbols match under the rule set
//!      (see [`RuleSet`]), capped at `min(K[i-1][j], K[i][j-1]) + step`,
//!   2. `minimum` when the longer prefix is consuming a skip symbol,
//!   3. `minimum + step`.
//!
//! The cap only bites where the uncapped diagonal would exceed a neighbour
//! by more than one step, so every cell stays within `step` of the cell
//! above and the cell to its left.
//!
//! Layers are positions in `a`; the row for layer `i` covers all prefixes of
//! `b`, so a row only ever reads the row above it and cells to its left.

use crate::alphabet::Symbol;
use crate::config::{RuleSet, SkipAlignConfig};
use crate::engine::TableEngine;
use crate::error::{AlignError, Result, Side};
use crate::table::CostTable;
use crate::traits::TableProblem;

#[derive(Clone, Debug)]
pub struct SkipAlignProblem<'a> {
    pub a: &'a [Symbol],
    pub b: &'a [Symbol],
    config: SkipAlignConfig,
}

impl<'a> SkipAlignProblem<'a> {
    /// Problem with the default configuration: binary alphabet, skip symbol
    /// 0, step cost 2, [`RuleSet::Lookbehind`].
    pub fn new(a: &'a [Symbol], b: &'a [Symbol]) -> Result<Self> {
        Self::with_config(a, b, SkipAlignConfig::default())
    }

    /// Validate the configuration and both sequences before any cell is
    /// computed.
    ///
    /// No cell exceeds `(|a| + |b|) * step`; inputs for which that bound does
    /// not fit a `u32` are rejected with [`AlignError::CostOverflow`].
    pub fn with_config(a: &'a [Symbol], b: &'a [Symbol], config: SkipAlignConfig) -> Result<Self> {
        config.validate()?;
        config.alphabet.validate(a, Side::A)?;
        config.alphabet.validate(b, Side::B)?;
        if config.cost_bound(a.len(), b.len()).is_none() {
            return Err(AlignError::CostOverflow {
                step: config.step,
                len_a: a.len(),
                len_b: b.len(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            len_a = a.len(),
            len_b = b.len(),
            rules = ?config.rules,
            step = config.step,
            "skip alignment problem"
        );
        Ok(Self { a, b, config })
    }

    pub fn config(&self) -> &SkipAlignConfig {
        &self.config
    }

    fn n(&self) -> usize {
        self.a.len()
    }

    fn m(&self) -> usize {
        self.b.len()
    }

    /// Cost of consuming `symbol` against nothing.
    #[inline]
    fn boundary_step(&self, symbol: Symbol) -> u32 {
        if self.config.alphabet.is_skip(symbol) {
            0
        } else {
            self.config.step
        }
    }

    /// Column 0 of the table, K[0..=n][0].
    pub fn boundary_column(&self) -> Vec<u32> {
        let mut col = Vec::with_capacity(self.n() + 1);
        col.push(0);
        for (i, &sym) in self.a.iter().enumerate() {
            col.push(col[i] + self.boundary_step(sym));
        }
        col
    }

    /// Zero-cost match rule for cell (i, j), both 1-based.
    fn free_match(&self, i: usize, j: usize) -> bool {
        let x = self.a[i - 1];
        let y = self.b[j - 1];
        if x != y {
            return false;
        }
        let alpha = &self.config.alphabet;
        match (i.cmp(&j), self.config.rules) {
            (std::cmp::Ordering::Equal, _) => true,
            // j > i >= 1, so b[j - 2] exists.
            (std::cmp::Ordering::Less, RuleSet::Lookbehind) => alpha.is_skip(self.b[j - 2]),
            (std::cmp::Ordering::Less, RuleSet::Current) => alpha.is_skip(y),
            (std::cmp::Ordering::Greater, RuleSet::Lookbehind) => alpha.is_skip(self.a[i - 2]),
            (std::cmp::Ordering::Greater, RuleSet::Current) => alpha.is_skip(x),
        }
    }

    /// The longer prefix is consuming a skip symbol.
    fn free_skip(&self, i: usize, j: usize) -> bool {
        let alpha = &self.config.alphabet;
        (i > j && alpha.is_skip(self.a[i - 1])) || (j > i && alpha.is_skip(self.b[j - 1]))
    }

    #[inline]
    fn cell(&self, i: usize, j: usize, diag: u32, up: u32, left: u32) -> u32 {
        let step = self.config.step;
        if self.free_match(i, j) {
            diag.min(up.min(left) + step)
        } else if self.free_skip(i, j) {
            diag.min(up).min(left)
        } else {
            diag.min(up).min(left) + step
        }
    }

    /// Evaluate interior cell (i, j) from its three neighbours in `table`.
    ///
    /// `table` must have this problem's shape, and `i` in `1..=n`, `j` in
    /// `1..=m`; anything else is [`AlignError::CellOutOfRange`].
    pub fn evaluate_cell(&self, table: &CostTable<u32>, i: usize, j: usize) -> Result<u32> {
        let (rows, cols) = table.shape();
        let out_of_range = || AlignError::CellOutOfRange {
            row: i,
            col: j,
            rows,
            cols,
        };
        if rows != self.n() + 1 || cols != self.m() + 1 {
            return Err(out_of_range());
        }
        if i == 0 || j == 0 || i > self.n() || j > self.m() {
            return Err(out_of_range());
        }
        Ok(self.cell(
            i,
            j,
            table[(i - 1, j - 1)],
            table[(i - 1, j)],
            table[(i, j - 1)],
        ))
    }
}

impl<'a> TableProblem for SkipAlignProblem<'a> {
    type Cost = u32;

    fn num_layers(&self) -> usize {
        self.n()
    }

    fn width(&self) -> usize {
        self.m() + 1
    }

    fn init_row(&self) -> Vec<u32> {
        let mut row = Vec::with_capacity(self.m() + 1);
        row.push(0);
        for (j, &sym) in self.b.iter().enumerate() {
            row.push(row[j] + self.boundary_step(sym));
        }
        row
    }

    fn forward_step(&self, layer: usize, row_i: &[u32]) -> Vec<u32> {
        let i = layer + 1;
        let m = self.m();
        let mut next = Vec::with_capacity(m + 1);
        next.push(row_i[0] + self.boundary_step(self.a[layer]));
        for j in 1..=m {
            let value = self.cell(i, j, row_i[j - 1], row_i[j], next[j - 1]);
            next.push(value);
        }
        next
    }
}

/// Full cost table for `a` against `b` under the default configuration.
pub fn skip_table(a: &[Symbol], b: &[Symbol]) -> Result<CostTable<u32>> {
    Ok(TableEngine::new(SkipAlignProblem::new(a, b)?).fill())
}

/// Terminal cost K[n][m] under the default configuration.
pub fn skip_distance(a: &[Symbol], b: &[Symbol]) -> Result<u32> {
    Ok(TableEngine::new(SkipAlignProblem::new(a, b)?).run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    fn table_with(a: &[u8], b: &[u8], rules: RuleSet) -> Vec<Vec<u32>> {
        let config = SkipAlignConfig {
            rules,
            ..Default::default()
        };
        let problem = SkipAlignProblem::with_config(a, b, config).unwrap();
        TableEngine::new(problem).fill().to_rows()
    }

    #[test]
    fn worked_example_lookbehind() {
        let rows = table_with(&[1, 1, 1, 0], &[1, 0, 1], RuleSet::Lookbehind);
        assert_eq!(
            rows,
            vec![
                vec![0, 2, 2, 4],
                vec![2, 0, 0, 2],
                vec![4, 2, 2, 0],
                vec![6, 4, 4, 2],
                vec![6, 4, 4, 2],
            ]
        );
    }

    #[test]
    fn leading_skip_lookbehind() {
        let rows = table_with(&[0, 1, 1, 0], &[1, 0, 1], RuleSet::Lookbehind);
        assert_eq!(
            rows,
            vec![
                vec![0, 2, 2, 4],
                vec![0, 2, 2, 4],
                vec![2, 0, 2, 2],
                vec![4, 2, 2, 2],
                vec![4, 2, 2, 2],
            ]
        );
    }

    #[test]
    fn leading_skip_current() {
        let rows = table_with(&[0, 1, 1, 0], &[1, 0, 1], RuleSet::Current);
        assert_eq!(
            rows,
            vec![
                vec![0, 2, 2, 4],
                vec![0, 2, 2, 4],
                vec![2, 2, 4, 4],
                vec![4, 4, 4, 4],
                vec![4, 4, 4, 4],
            ]
        );
    }

    #[test]
    fn rule_sets_diverge_off_diagonal() {
        // At (2, 3) a[1] == b[2] == 1 with j > i. Lookbehind sees b[1] == 0
        // and takes the diagonal; Current sees b[2] == 1 and does not.
        let look = table_with(&[1, 1, 1, 0], &[1, 0, 1], RuleSet::Lookbehind);
        let cur = table_with(&[1, 1, 1, 0], &[1, 0, 1], RuleSet::Current);
        assert_eq!(look[2][3], 0);
        assert_eq!(cur[2][3], 2);
        assert_eq!(look[1], cur[1]);
    }

    #[test]
    fn match_rule_wins_over_skip_rule() {
        // At (2, 4) both rules apply: a[1] == b[3] == 0 behind a skip, and
        // b[3] is a skip with j > i. The diagonal K[1][3] = 4 wins over the
        // minimum 2.
        let rows = table_with(&[0, 0], &[1, 1, 0, 0], RuleSet::Lookbehind);
        assert_eq!(
            rows,
            vec![vec![0, 2, 4, 4, 4], vec![0, 2, 4, 4, 4], vec![0, 0, 2, 2, 4]]
        );
        let rows = table_with(&[0, 0], &[1, 1, 0, 0], RuleSet::Current);
        assert_eq!(rows[2], vec![0, 0, 2, 4, 4]);
    }

    #[test]
    fn diagonal_match_is_capped_one_step_above_neighbours() {
        // Uncapped, (4, 4) would copy K[3][3] = 4 next to K[4][3] = 0.
        let rows = table_with(&[0, 0, 1, 0], &[1, 0, 0, 0], RuleSet::Lookbehind);
        assert_eq!(
            rows,
            vec![
                vec![0, 2, 2, 2, 2],
                vec![0, 2, 2, 2, 2],
                vec![0, 0, 2, 2, 2],
                vec![2, 0, 2, 4, 2],
                vec![2, 0, 0, 0, 2],
            ]
        );
    }

    #[test]
    fn rejects_steps_that_overflow_costs() {
        let config = SkipAlignConfig {
            step: u32::MAX,
            ..Default::default()
        };
        let err = SkipAlignProblem::with_config(&[1, 1], &[1], config).unwrap_err();
        assert_eq!(
            err,
            AlignError::CostOverflow {
                step: u32::MAX,
                len_a: 2,
                len_b: 1
            }
        );

        // The largest admissible step fills without overflowing.
        let step = u32::MAX / 3;
        let config = SkipAlignConfig {
            step,
            ..Default::default()
        };
        let problem = SkipAlignProblem::with_config(&[1, 1], &[1], config).unwrap();
        let table = TableEngine::new(problem).fill();
        assert_eq!(table[(2, 0)], 2 * step);
        assert_eq!(table.terminal(), step);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(table_with(&[], &[], RuleSet::Lookbehind), vec![vec![0]]);
        assert_eq!(skip_distance(&[], &[]).unwrap(), 0);
        assert_eq!(table_with(&[], &[1, 0, 1], RuleSet::Lookbehind), vec![vec![0, 2, 2, 4]]);
        assert_eq!(
            table_with(&[0, 0], &[], RuleSet::Current),
            vec![vec![0], vec![0], vec![0]]
        );
    }

    #[test]
    fn boundary_column_matches_table() {
        let a = [1, 0, 1, 1, 0];
        let problem = SkipAlignProblem::new(&a, &[1]).unwrap();
        let col = problem.boundary_column();
        let table = TableEngine::new(problem).fill();
        assert_eq!(col, vec![0, 2, 2, 4, 6, 6]);
        for (i, v) in col.iter().enumerate() {
            assert_eq!(table[(i, 0)], *v);
        }
    }

    #[test]
    fn custom_step_scales_boundary() {
        let config = SkipAlignConfig {
            step: 5,
            ..Default::default()
        };
        let problem = SkipAlignProblem::with_config(&[1, 1], &[0, 1], config).unwrap();
        assert_eq!(problem.init_row(), vec![0, 0, 5]);
        assert_eq!(problem.boundary_column(), vec![0, 5, 10]);
    }

    #[test]
    fn wider_alphabet_is_accepted_when_configured() {
        let config = SkipAlignConfig {
            alphabet: Alphabet { skip: 0, max: 3 },
            ..Default::default()
        };
        let problem = SkipAlignProblem::with_config(&[3, 2], &[3, 2], config).unwrap();
        assert_eq!(TableEngine::new(problem).run(), 0);
    }

    #[test]
    fn rejects_symbols_outside_alphabet() {
        let err = SkipAlignProblem::new(&[1, 2], &[1]).unwrap_err();
        assert_eq!(
            err,
            AlignError::InvalidSymbol {
                sequence: Side::A,
                position: 1,
                symbol: 2,
                max: 1
            }
        );
        assert!(skip_table(&[1], &[9]).is_err());
    }

    #[test]
    fn evaluate_cell_reproduces_fill() {
        let a = [1, 1, 1, 0];
        let b = [1, 0, 1];
        let problem = SkipAlignProblem::new(&a, &b).unwrap();
        let table = TableEngine::new(problem.clone()).fill();
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                assert_eq!(problem.evaluate_cell(&table, i, j).unwrap(), table[(i, j)]);
            }
        }
    }

    #[test]
    fn evaluate_cell_fails_fast() {
        let problem = SkipAlignProblem::new(&[1, 0], &[1]).unwrap();
        let table = TableEngine::new(problem.clone()).fill();
        for (i, j) in [(0, 1), (1, 0), (3, 1), (1, 2)] {
            assert!(matches!(
                problem.evaluate_cell(&table, i, j),
                Err(AlignError::CellOutOfRange { .. })
            ));
        }
        let wrong_shape = CostTable::from_rows(vec![vec![0u32, 2], vec![2, 0]]);
        assert!(problem.evaluate_cell(&wrong_shape, 1, 1).is_err());
    }
}
