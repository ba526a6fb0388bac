//! `gramps-dump`: parse a Gramps XML file and print it as a summary, as JSON,
//! or as re-serialized XML.

mod config;
mod index;
mod summary;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use grampsxml::Document;
use tracing::{debug, info};

use config::{DumpConfig, OutputFormat};
use index::HandleIndex;

/// Installs the stderr subscriber; `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("grampsxml={level},gramps_dump={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn read_document(config: &DumpConfig) -> anyhow::Result<Document> {
    let options = config.parse_options();
    if config.reads_stdin() {
        debug!("reading document from standard input");
        let stdin = io::stdin();
        return grampsxml::from_xml_reader_with(stdin.lock(), &options)
            .context("failed to parse standard input");
    }

    let file = File::open(&config.input)
        .with_context(|| format!("failed to open {}", config.input.display()))?;
    grampsxml::from_xml_reader_with(BufReader::new(file), &options)
        .with_context(|| format!("failed to parse {}", config.input.display()))
}

fn main() -> anyhow::Result<()> {
    let config = DumpConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(2);
    }

    let document = read_document(&config)?;
    let index = HandleIndex::build(&document);
    info!(
        records = document.record_count(),
        handles = index.len(),
        format = ?config.format,
        "Parsed Gramps document"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match config.format {
        OutputFormat::Summary => summary::write_summary(&document, &index, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &document)?;
            writeln!(out)?;
        }
        OutputFormat::Xml => {
            grampsxml::to_xml_writer_with(&document, &mut out, &config.write_options())?
        }
    }

    for handle in &config.resolve {
        summary::write_resolved(&document, &index, handle, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
