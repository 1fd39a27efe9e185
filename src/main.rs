//! CLI entry point for the word-search board generator

use clap::Parser;
use lexigrid::io::cli::{BoardProcessor, Cli};

fn main() -> lexigrid::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = BoardProcessor::new(cli);
    processor.process()
}
