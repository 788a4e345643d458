//! Hand Notation Binary
//!
//! Parses and labels hand notation from the command line, or runs an
//! interactive prompt when no query is given.

use clap::Parser;
use handnote::*;

fn main() -> anyhow::Result<()> {
    log()?;
    cli::CLI::run(cli::Args::parse())
}
