//! stockbook — terminal front end for the inventory book.
//!
//! This binary is the presentation adapter: it shuttles raw user input
//! into the stores, and renders their snapshots back out. All validation
//! and persistence live in the library crates.

mod cli;
mod commands;
mod render;
mod telemetry;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let cli = cli::Cli::parse();
    commands::run(cli.command)
}
