//! `rbt` — watch a red-black tree rebalance itself.
//!
//! Usage:
//!   rbt [--format text|json] [--no-banner] [interactive]
//!   rbt insert <KEY>...
//!   rbt random --count <N> [--seed <S>] [--min <A>] [--max <B>]
//!
//! In interactive mode integers are read from stdin; `q` quits. The tree is
//! printed after every insertion. Set `RUST_LOG=rb_forest=trace` to see each
//! recolor and rotation on stderr.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_forest::{Grid, Key, RbTree};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

const BANNER: &str = "\
=============================================================================
Red-black tree visualizer.
- Enter integers one at a time. After each insertion the tree is printed
  level by level, every node shown as key(R) or key(B).
- Wide trees get hard to read: each extra level doubles the printed width.
- Enter 'q' or press Ctrl-C to exit.
=============================================================================";

const RULE: &str = "==================================================";

#[derive(Parser, Debug)]
#[command(name = "rbt", about = "Insert keys into a red-black tree and print it after each step")]
struct Cli {
    /// Output format for the printed tree.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    /// Do not print the banner in interactive mode.
    #[arg(long)]
    no_banner: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read keys from stdin until `q` or end of input (the default).
    Interactive,
    /// Insert the given keys in order.
    Insert {
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<Key>,
    },
    /// Insert pseudo-random keys.
    Random {
        /// Number of keys to insert.
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Seed for a reproducible sequence.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min: Key,
        #[arg(long, default_value_t = 99, allow_negative_numbers = true)]
        max: Key,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Step<'a> {
    key: Key,
    size: usize,
    grid: &'a Grid,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut tree = RbTree::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            if !cli.no_banner {
                writeln!(out, "{BANNER}")?;
            }
            let stdin = io::stdin();
            run_interactive(&mut tree, stdin.lock(), &mut out, cli.format)?;
        }
        Commands::Insert { keys } => {
            for key in keys {
                insert_and_print(&mut tree, key, &mut out, cli.format)?;
            }
        }
        Commands::Random {
            count,
            seed,
            min,
            max,
        } => {
            if min > max {
                bail!("--min ({min}) must not exceed --max ({max})");
            }
            let seed = seed.unwrap_or_else(|| OsRng.next_u64());
            info!(seed, count, "random insertion");
            let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
            for _ in 0..count {
                let key = rng.gen_range(min..=max);
                insert_and_print(&mut tree, key, &mut out, cli.format)?;
            }
        }
    }

    let released = tree.destroy();
    info!(released, "done");
    Ok(())
}

/// Prompt loop. Tokens are whitespace separated; `q` stops.
fn run_interactive<R: BufRead, W: Write>(
    tree: &mut RbTree,
    input: R,
    out: &mut W,
    format: Format,
) -> Result<()> {
    write!(out, "Enter integer input: ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line.context("failed to read from stdin")?;
        for token in line.split_whitespace() {
            if token == "q" {
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }
            match parse_key(token) {
                Some(key) => insert_and_print(tree, key, out, format)?,
                None => writeln!(out, "Please enter an integer")?,
            }
            write!(out, "Enter integer input: ")?;
            out.flush()?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Goodbye.")?;
    Ok(())
}

fn insert_and_print<W: Write>(tree: &mut RbTree, key: Key, out: &mut W, format: Format) -> Result<()> {
    tree.insert(key)
        .with_context(|| format!("cannot insert {key}"))?;
    let grid = tree.render();
    match format {
        Format::Text => {
            writeln!(out, "The tree after inputting {key}:")?;
            writeln!(out, "{RULE}")?;
            write!(out, "{grid}")?;
            writeln!(out, "{RULE}")?;
        }
        Format::Json => {
            let step = Step {
                key,
                size: tree.size(),
                grid: &grid,
            };
            serde_json::to_writer(&mut *out, &step)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Accepts an optional `-` followed by ASCII digits that fit in a [`Key`].
fn parse_key(token: &str) -> Option<Key> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
