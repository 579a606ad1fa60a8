use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use seqdp::alphabet::parse_symbols;
use seqdp::config::{RuleSet, SkipAlignConfig};
use seqdp::problems::edit_distance::EditDistanceProblem;
use seqdp::problems::lcs::{lcs_string, LcsProblem};
use seqdp::tree::{Node, TreeOrdering};
use seqdp::{SkipAlignBuilder, TableEngine};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: CliSubcommand,
}

#[derive(Subcommand, Debug)]
enum CliSubcommand {
    /// Skip-aware alignment table of two symbol sequences, e.g. `1110` `1,0,1`
    Skip(SkipArgs),
    /// Unit-cost edit distance of two strings
    Edit(PairArgs),
    /// Longest common subsequence of two strings
    Lcs(PairArgs),
    /// Longest strictly monotone path in the BST built from comma separated keys
    Tree(TreeArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Tab separated grid with the sequences as headers
    Text,
    /// `{"rows", "cols", "cells"}` object
    Json,
}

#[derive(Args, Debug)]
struct SkipArgs {
    /// Sequence A (rows)
    a: String,

    /// Sequence B (columns)
    b: String,

    /// JSON configuration file. Flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Zero-cost match rule set: `lookbehind` or `current`
    #[arg(short, long)]
    rules: Option<RuleSet>,

    /// Substitution/insertion cost
    #[arg(short, long)]
    step: Option<u32>,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only print the terminal cell
    #[arg(short, long)]
    distance_only: bool,
}

#[derive(Args, Debug)]
struct PairArgs {
    s: String,
    t: String,
}

#[derive(Args, Debug)]
struct TreeArgs {
    /// Keys inserted in order, e.g. `5,3,8,1,4`
    keys: String,

    /// Which parent/child steps count: `any` or `search-tree` (`bst`)
    #[arg(short, long, default_value = "any")]
    ordering: TreeOrdering,
}

impl SkipArgs {
    /// Flags given on the command line win over `base`.
    fn resolve_config(&self, mut base: SkipAlignConfig) -> SkipAlignConfig {
        if let Some(rules) = self.rules {
            base.rules = rules;
        }
        if let Some(step) = self.step {
            base.step = step;
        }
        base
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<SkipAlignConfig> {
    let Some(path) = path else {
        return Ok(SkipAlignConfig::default());
    };
    tracing::info!("Loading configuration from: {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Could not parse config file {}", path.display()))
}

fn render_skip(args: &SkipArgs, config: SkipAlignConfig) -> Result<String> {
    let a = parse_symbols(&args.a).context("Invalid sequence A")?;
    let b = parse_symbols(&args.b).context("Invalid sequence B")?;
    let engine = SkipAlignBuilder::from_config(config).build(&a, &b)?;

    if args.distance_only {
        let distance = engine.run();
        return Ok(match args.format {
            OutputFormat::Text => distance.to_string(),
            OutputFormat::Json => serde_json::json!({ "distance": distance }).to_string(),
        });
    }

    let table = engine.fill();
    Ok(match args.format {
        OutputFormat::Text => format!(
            "{}\ndistance: {}",
            table.render_with_headers(&a, &b),
            table.terminal()
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&table)?,
    })
}

fn skip_subcommand(args: &SkipArgs) -> Result<()> {
    let config = args.resolve_config(load_config(args.config.as_ref())?);
    println!("{}", render_skip(args, config)?);
    Ok(())
}

fn edit_subcommand(args: &PairArgs) -> Result<()> {
    let (s, t) = (args.s.as_bytes(), args.t.as_bytes());
    let distance = TableEngine::new(EditDistanceProblem::new(s, t)).run();
    println!("Input:\t{}, {}\nOperations:\t{distance}", args.s, args.t);
    Ok(())
}

fn lcs_subcommand(args: &PairArgs) -> Result<()> {
    let (s, t) = (args.s.as_bytes(), args.t.as_bytes());
    let table = TableEngine::new(LcsProblem::new(s, t)).fill();
    let lcs = lcs_string(&table, s, t);
    println!("Length:\t{}", table.terminal());
    println!("LCS:\t{}", String::from_utf8_lossy(&lcs));
    Ok(())
}

fn tree_subcommand(args: &TreeArgs) -> Result<()> {
    let keys = args
        .keys
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| k.parse::<i64>().with_context(|| format!("Invalid key {k:?}")))
        .collect::<Result<Vec<_>>>()?;
    let tree = Node::from_keys(keys);
    if let Some(root) = &tree {
        tracing::debug!(in_order = ?root.in_order(), "built search tree");
    }
    let len = seqdp::tree::longest_monotone_path(tree.as_ref(), args.ordering);
    println!("{len}");
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match &args.command {
        CliSubcommand::Skip(skip_args) => skip_subcommand(skip_args)?,
        CliSubcommand::Edit(pair) => edit_subcommand(pair)?,
        CliSubcommand::Lcs(pair) => lcs_subcommand(pair)?,
        CliSubcommand::Tree(tree_args) => tree_subcommand(tree_args)?,
    }

    Ok(())
}
