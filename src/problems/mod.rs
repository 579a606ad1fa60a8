//! Table problems for the [`TableEngine`](crate::engine::TableEngine).
//!
//! - [`skip_align`]     : skip-aware alignment distance over a small alphabet.
//! - [`edit_distance`]  : unit-cost Levenshtein distance.
//! - [`lcs`]            : longest common subsequence.

pub mod edit_distance;
pub mod lcs;
pub mod skip_align;
