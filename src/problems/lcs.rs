//! Longest Common Subsequence (LCS) as a row-major table DP.
//!
//! We treat layers as positions in `s` (0..=n), and the row at layer `i` is
//! LCS(s[0..i], t[0..j]) for every `j`. Row 0 and column 0 are zero.
//!
//! [`lcs_string`] walks a filled table back from (n, m) to recover one
//! subsequence of optimal length.

use crate::engine::TableEngine;
use crate::table::CostTable;
use crate::traits::TableProblem;

#[derive(Clone, Debug)]
pub struct LcsProblem<'a> {
    pub s: &'a [u8],
    pub t: &'a [u8],
}

impl<'a> LcsProblem<'a> {
    pub fn new(s: &'a [u8], t: &'a [u8]) -> Self {
        Self { s, t }
    }

    fn m(&self) -> usize {
        self.t.len()
    }
}

impl<'a> TableProblem for LcsProblem<'a> {
    type Cost = u32;

    fn num_layers(&self) -> usize {
        // T = number of "steps": each consumes one char from s
        self.s.len()
    }

    fn width(&self) -> usize {
        self.m() + 1
    }

    fn init_row(&self) -> Vec<u32> {
        // i = 0: LCS(ε, t[0..j]) = 0
        vec![0; self.m() + 1]
    }

    fn forward_step(&self, layer: usize, row_i: &[u32]) -> Vec<u32> {
        // layer corresponds to i in [0..n-1], building row i+1 from row i
        let ch = self.s[layer];
        let m = self.m();
        let mut next = vec![0u32; m + 1];

        for j in 1..=m {
            next[j] = if self.t[j - 1] == ch {
                row_i[j - 1] + 1
            } else {
                row_i[j].max(next[j - 1])
            };
        }

        next
    }
}

pub fn lcs_length(s: &[u8], t: &[u8]) -> u32 {
    TableEngine::new(LcsProblem::new(s, t)).run()
}

/// Recover one longest common subsequence from a filled LCS table.
///
/// `table` must be the table of `s` against `t`.
pub fn lcs_string(table: &CostTable<u32>, s: &[u8], t: &[u8]) -> Vec<u8> {
    debug_assert_eq!(table.shape(), (s.len() + 1, t.len() + 1));
    let mut i = s.len();
    let mut j = t.len();
    let mut rev = Vec::with_capacity(table.terminal() as usize);

    while i > 0 && j > 0 {
        if s[i - 1] == t[j - 1] {
            rev.push(s[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[(i - 1, j)] >= table[(i, j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    rev.reverse();
    rev
}
