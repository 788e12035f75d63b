//! `planner`: look up courses and their prerequisites from a plain-text
//! catalog.

use clap::Parser;

mod cli;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
