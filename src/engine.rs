//! Generic row-major table engine.
//!
//! The engine drives any [`TableProblem`] in one of two modes:
//! 1. [`TableEngine::run`] keeps only two rows live and returns the objective.
//! 2. [`TableEngine::fill`] keeps every row and returns the whole
//!    [`CostTable`].
//!
//! Both modes apply `forward_step` to layers `0..n` in order, so they always
//! agree on the terminal cell.

use crate::table::CostTable;
use crate::traits::TableProblem;

/// Table engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use seqdp::{TableEngine, problems::skip_align::SkipAlignProblem};
///
/// let problem = SkipAlignProblem::new(&[1, 1, 1, 0], &[1, 0, 1]).unwrap();
/// let engine = TableEngine::new(problem);
/// let table = engine.fill();
/// assert_eq!(table.shape(), (5, 4));
/// assert_eq!(engine.run(), table.terminal());
/// ```
pub struct TableEngine<P: TableProblem> {
    problem: P,
}

impl<P: TableProblem> TableEngine<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Compute the objective in O(width) memory.
    pub fn run(&self) -> P::Cost {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "run",
            layers = self.problem.num_layers(),
            width = self.problem.width()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut row = self.problem.init_row();
        debug_assert_eq!(row.len(), self.problem.width());
        for layer in 0..self.problem.num_layers() {
            row = self.problem.forward_step(layer, &row);
            debug_assert_eq!(row.len(), self.problem.width());
        }
        self.problem.extract_cost(&row)
    }

    /// Materialise every row of the table.
    pub fn fill(&self) -> CostTable<P::Cost> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "fill_table",
            layers = self.problem.num_layers(),
            width = self.problem.width()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let t = self.problem.num_layers();
        let mut rows = Vec::with_capacity(t + 1);
        rows.push(self.problem.init_row());
        for layer in 0..t {
            let next = self.problem.forward_step(layer, &rows[layer]);
            debug_assert_eq!(next.len(), self.problem.width());
            #[cfg(feature = "tracing")]
            tracing::trace!(row = layer + 1, "row filled");
            rows.push(next);
        }
        CostTable::from_rows(rows)
    }
}
