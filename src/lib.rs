//! Row-major table dynamic programs
//!
//! This crate computes full cost tables (or just their terminal cell) for
//! small sequence DPs, plus a recursive path routine over binary trees.
//!
//! ## Core idea
//! 1. Model your recurrence as rows 0..=n of an (n+1)×(m+1) table where row
//!    `i+1` depends only on row `i` and on cells to its left.
//! 2. Implement the [`TableProblem`] trait for that recurrence.
//! 3. Let [`TableEngine`] either materialise the whole [`CostTable`] or keep
//!    two rows live and return the objective.
//!
//! ## Quick start
//! ```
//! use seqdp::problems::skip_align::{skip_distance, skip_table};
//!
//! let table = skip_table(&[1, 1, 1, 0], &[1, 0, 1]).unwrap();
//! assert_eq!(table.shape(), (5, 4));
//! assert_eq!(table[(0, 0)], 0);
//! assert_eq!(skip_distance(&[1, 1, 1, 0], &[1, 0, 1]).unwrap(), 2);
//! ```
//!
//! ## Built-in problems
//! - Skip-aware alignment distance: symbols 0/1 where 0 is a skip marker,
//!   substitution costs 2 (see [`problems::skip_align`])
//! - Unit-cost edit distance
//! - Longest common subsequence
//!
//! The [`tree`] module holds the longest strictly monotone path routine.

pub mod alphabet;
pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod problems;
pub mod table;
pub mod traits;
pub mod tree;

pub use crate::builder::SkipAlignBuilder;
pub use crate::engine::TableEngine;
pub use crate::error::AlignError;
pub use crate::table::CostTable;
pub use crate::traits::TableProblem;
