//! CLI entry point for rendering tower-defense boards

use clap::Parser;
use towerfield::io::cli::{BoardProcessor, Cli};

fn main() -> towerfield::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let processor = BoardProcessor::new(cli);
    processor.process()
}
