//! markdown-render CLI.
//!
//! Reads one Markdown file, converts it with the engine and prints the result
//! or writes it to `--out`.

mod cli;
mod io;

use anyhow::Result;
use clap::Parser;
use markdown_render_config::Config;
use std::process;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise WARN; RUST_LOG overrides both
    let level = if cli.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(err) = run(&cli) {
        log::error!("conversion of {} failed", cli.input_file.display());
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if config.is_none() {
        log::info!("No config file found, using built-in defaults");
    }

    let (format, source) = cli.resolve_format(config.as_ref());
    log::info!("Output format: {format} (from {source})");

    log::info!("Reading {}", cli.input_file.display());
    let content = io::read_input(&cli.input_file)?;
    let output = format.render(&content);

    match &cli.output_file {
        Some(path) => {
            io::write_output(path, &output)?;
            log::info!("Wrote {} bytes to {}", output.len(), path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}
