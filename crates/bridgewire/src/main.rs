mod cli;
mod commands;

use std::io::{Read, Write};
use std::path::Path;

use clap::Parser;
use eyre::WrapErr;

use cli::{Cli, Command};

fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr; stdout carries records.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let output = match args.command {
        Command::Decode { record, input } => {
            let raw = read_input(input.as_deref())?;
            let bytes = commands::read_wire(&raw, args.format)?;
            commands::decode(record, &bytes, args.allow_trailing)?
        }
        Command::Encode { record, input } => {
            let json = read_text(input.as_deref())?;
            let bytes = commands::encode(record, &json)?;
            commands::write_wire(&bytes, args.format)
        }
        Command::Rank { input } => {
            let json = read_text(input.as_deref())?;
            commands::rank(&json)?
        }
    };

    std::io::stdout()
        .lock()
        .write_all(&output)
        .context("write output")?;
    Ok(())
}

/// Read the whole input file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> eyre::Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("read input file {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

fn read_text(path: Option<&Path>) -> eyre::Result<String> {
    let raw = read_input(path)?;
    String::from_utf8(raw).context("input is not UTF-8")
}
