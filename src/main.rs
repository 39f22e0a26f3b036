// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The `duct` binary: read a grid description, count the complete paths.

use anyhow::{Context, Result};
use clap::Parser;
use duct_search::{render, Counter, Grid, Search};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "duct")]
#[command(about = "Counts the duct paths that cover every owned room exactly once")]
struct Cmd {
    /// Grid description file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Print the parsed board before searching
    #[arg(long)]
    layout: bool,

    /// Log search statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();

    let text = match &cmd.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            text
        }
    };
    let grid: Grid = text.parse().context("parsing the grid description")?;

    if cmd.layout {
        print!("{}", render::layout(&grid));
    }

    let started = Instant::now();
    let outcome = Search::new(&grid).run();
    let elapsed = started.elapsed();

    println!("{}", outcome.solutions);
    tracing::info!(
        solutions = outcome.solutions,
        elapsed_ms = elapsed.as_millis() as u64,
        "search complete"
    );
    tracing::debug!(
        nodes = outcome.statistics.get(Counter::NodesExpanded),
        dead_end_prunes = outcome.statistics.get(Counter::DeadEndPrunes),
        end_blocked_prunes = outcome.statistics.get(Counter::EndBlockedPrunes),
        edge_split_prunes = outcome.statistics.get(Counter::EdgeSplitPrunes),
        "search statistics"
    );
    Ok(())
}
