//! promptcat CLI — prompt catalog builder for the Glow.GE beauty channel.
//!
//! Turns a Telegram chat export and a comments spreadsheet into the static
//! JSON catalogs the front-end ships with.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
