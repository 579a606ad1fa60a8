//! The materialised cost table K.
//!
//! `CostTable` stores rows back to back in one buffer. It is produced by
//! [`TableEngine::fill`](crate::engine::TableEngine::fill) and is read-only
//! afterwards: there are no mutable accessors.

use std::fmt;
use std::ops::Index;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable<C> {
    rows: usize,
    cols: usize,
    data: Vec<C>,
}

/// Serialised as `{"rows": r, "cols": c, "cells": [[..], ..]}` so the shape
/// survives even for the single-cell table.
impl<C: Copy + Serialize> Serialize for CostTable<C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let cells: Vec<&[C]> = self.iter_rows().collect();
        let mut state = serializer.serialize_struct("CostTable", 3)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cols", &self.cols)?;
        state.serialize_field("cells", &cells)?;
        state.end()
    }
}

impl<C: Copy> CostTable<C> {
    /// Assemble a table from complete rows.
    ///
    /// # Panics
    /// Panics if there are no rows, row 0 is empty, or the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Self {
        assert!(!rows.is_empty(), "a cost table has at least row 0");
        let cols = rows[0].len();
        assert!(cols > 0, "a cost table has at least column 0");
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "row {i} has {} cells, expected {cols}", row.len());
            data.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`, i.e. `(|A| + 1, |B| + 1)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<C> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> Option<&[C]> {
        if i < self.rows {
            Some(&self.data[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[C]> + '_ {
        self.data.chunks(self.cols)
    }

    /// Bottom-right cell K[n][m].
    pub fn terminal(&self) -> C {
        self.data[self.data.len() - 1]
    }

    pub fn to_rows(&self) -> Vec<Vec<C>> {
        self.iter_rows().map(<[C]>::to_vec).collect()
    }
}

impl<C: Copy> Index<(usize, usize)> for CostTable<C> {
    type Output = C;

    fn index(&self, (i, j): (usize, usize)) -> &C {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} table",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

/// Plain grid rendering, one row per line, tab separated.
impl<C: Copy + fmt::Display> fmt::Display for CostTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

impl<C: Copy + fmt::Display> CostTable<C> {
    /// Render the table with sequence `b` as the header row and sequence `a`
    /// down the first column, the layout used for hand-checking a fill.
    ///
    /// `a` and `b` must have `rows - 1` and `cols - 1` entries.
    pub fn render_with_headers<A, B>(&self, a: &[A], b: &[B]) -> String
    where
        A: fmt::Display,
        B: fmt::Display,
    {
        debug_assert_eq!(a.len() + 1, self.rows);
        debug_assert_eq!(b.len() + 1, self.cols);
        let mut out = String::from("\t");
        for sym in b {
            out.push('\t');
            out.push_str(&sym.to_string());
        }
        for (i, row) in self.iter_rows().enumerate() {
            out.push('\n');
            if i > 0 {
                out.push_str(&a[i - 1].to_string());
            }
            for cell in row {
                out.push('\t');
                out.push_str(&cell.to_string());
            }
        }
        out
    }
}
