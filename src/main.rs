//! CLI entry point for the tiling pattern generator

use clap::Parser;
use tilegen::io::cli::{Cli, TilingRunner};
use tilegen::io::logging::init_logging;

fn main() -> tilegen::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter())?;
    let mut runner = TilingRunner::new(cli);
    runner.run().map(|_| ())
}
