//! CLI entry point for template rendering and herringbone map generation

use clap::Parser;
use herringbone::io::cli::{Cli, run};

fn main() -> herringbone::Result<()> {
    run(Cli::parse())
}
