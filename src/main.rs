// ABOUTME: Main entry point for the mdslides program.
// ABOUTME: Provides the CLI interface and wires files or stdio into the renderer.

use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

/// Convert a markdown presentation into HTML slide fragments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file, or '-' for standard input
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Output file, or '-' for standard output
    #[arg(short, long, default_value = "-")]
    output: String,
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut document = String::new();
        io::stdin().read_to_string(&mut document)?;
        Ok(document)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not open file {}: {}", path, e))
    }
}

fn open_output(path: &str) -> anyhow::Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(io::stdout()))
    } else {
        let file = File::create(path)
            .map_err(|e| anyhow::anyhow!("Could not open file {}: {}", path, e))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let document = read_input(&cli.input)?;
    info!("Read {} bytes from {}", document.len(), cli.input);

    let mut output = open_output(&cli.output)?;
    mdslides::render_presentation(&document, &mut output)?;
    output.flush()?;

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
