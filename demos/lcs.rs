//! Example: Longest Common Subsequence via the table engine.
//!
//! Run with:
//! `cargo run --example lcs`

use seqdp::{
    problems::lcs::{lcs_string, LcsProblem},
    TableEngine,
};

fn main() {
    let s = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
    let t = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";

    let engine = TableEngine::new(LcsProblem::new(s, t));

    // Two live rows are enough for the length alone.
    println!("LCS length: {}", engine.run());

    // Recovering the subsequence itself needs the whole table.
    let table = engine.fill();
    let lcs = lcs_string(&table, s, t);
    println!("LCS: {}", String::from_utf8_lossy(&lcs));
}
