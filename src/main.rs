//! Sapling CLI binary.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use sapling::cli::args::*;
use sapling::cli::commands::*;
use sapling::config::SaplingConfig;

fn run(args: SaplingArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => SaplingConfig::from_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => SaplingConfig::default(),
    };
    execute_command(args, config)?;
    Ok(())
}

fn main() {
    // Parse command line arguments using clap
    let args = SaplingArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
