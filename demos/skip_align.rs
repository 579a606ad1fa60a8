//! Example: skip-aware alignment tables under both rule sets.
//!
//! Run with:
//! `cargo run --example skip_align`

use seqdp::{config::RuleSet, SkipAlignBuilder};

fn main() -> Result<(), seqdp::AlignError> {
    let inputs: [(&[u8], &[u8]); 2] = [(&[1, 1, 1, 0], &[1, 0, 1]), (&[0, 1, 1, 0], &[1, 0, 1])];

    for (a, b) in inputs {
        for rules in [RuleSet::Lookbehind, RuleSet::Current] {
            let engine = SkipAlignBuilder::new().with_rules(rules).build(a, b)?;
            let table = engine.fill();
            println!("A = {a:?}, B = {b:?}, rules = {rules:?}");
            println!("{}", table.render_with_headers(a, b));
            println!("distance: {}\n", table.terminal());
        }
    }

    Ok(())
}
