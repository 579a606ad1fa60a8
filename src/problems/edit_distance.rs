//! Unit-cost edit distance (Levenshtein) as a row-major table DP.
//!
//! K[i][0] = i, K[0][j] = j, and each interior cell is the cheapest of a
//! diagonal step (free on a match, 1 otherwise), a deletion or an insertion.

use crate::engine::TableEngine;
use crate::traits::TableProblem;

#[derive(Clone, Debug)]
pub struct EditDistanceProblem<'a> {
    pub s: &'a [u8],
    pub t: &'a [u8],
}

impl<'a> EditDistanceProblem<'a> {
    pub fn new(s: &'a [u8], t: &'a [u8]) -> Self {
        Self { s, t }
    }
}

impl<'a> TableProblem for EditDistanceProblem<'a> {
    type Cost = u32;

    fn num_layers(&self) -> usize {
        self.s.len()
    }

    fn width(&self) -> usize {
        self.t.len() + 1
    }

    fn init_row(&self) -> Vec<u32> {
        (0..=self.t.len() as u32).collect()
    }

    fn forward_step(&self, layer: usize, row_i: &[u32]) -> Vec<u32> {
        let ch = self.s[layer];
        let m = self.t.len();
        let mut next = Vec::with_capacity(m + 1);
        next.push(row_i[0] + 1);
        for j in 1..=m {
            let diag = row_i[j - 1] + u32::from(self.t[j - 1] != ch);
            let up = row_i[j] + 1;
            let left = next[j - 1] + 1;
            next.push(diag.min(up).min(left));
        }
        next
    }
}

/// Levenshtein distance between two byte strings.
pub fn edit_distance(s: &[u8], t: &[u8]) -> u32 {
    TableEngine::new(EditDistanceProblem::new(s, t)).run()
}
