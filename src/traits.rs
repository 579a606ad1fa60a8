//! Core trait for row-major table dynamic programs.
//!
//! To run a DP through [`TableEngine`](crate::engine::TableEngine), implement
//! [`TableProblem`] for a struct that captures one instance (the two input
//! sequences plus any cost parameters).
//!
//! The model is a layered DP over the rows of an (n+1)×(m+1) table:
//! - layer 0 is the boundary row built by [`TableProblem::init_row`],
//! - [`TableProblem::forward_step`] builds row `i+1` from row `i`,
//! - after `n = num_layers()` steps the last row holds the terminal cell.
//!
//! Every cell of row `i+1` may read row `i` and the cells of row `i+1` to its
//! left, which is exactly the row-major, inner-loop-over-`j` fill order.

/// A fixed instance of a row-major table DP.
pub trait TableProblem {
    /// Cell value. Must be ordered so optimal values can be compared.
    type Cost: Copy + Ord;

    /// Number of steps `n`; the table has `n + 1` rows.
    fn num_layers(&self) -> usize;

    /// Number of columns, `m + 1`. Every row has this length.
    fn width(&self) -> usize;

    /// Row 0 of the table.
    fn init_row(&self) -> Vec<Self::Cost>;

    /// Build row `layer + 1` from row `layer`.
    ///
    /// Must only depend on `row_i` and fixed problem data.
    fn forward_step(&self, layer: usize, row_i: &[Self::Cost]) -> Vec<Self::Cost>;

    /// Extract the objective from the last row. Defaults to its last cell.
    fn extract_cost(&self, last_row: &[Self::Cost]) -> Self::Cost {
        *last_row
            .last()
            .expect("table rows always contain column 0")
    }
}
