//! CLI tool for extracting a plain-text report from PowerPoint files.

mod config;
mod document;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use config::{Args, OutputTarget, RunConfig};
use slidetext_core::{Presentation, ReportFormatter, ReportWriter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use thiserror::Error;

const EXIT_USAGE: u8 = 1;
const EXIT_DOCUMENT: u8 = 2;
const EXIT_OUTPUT: u8 = 3;

/// Failures after the command line has been validated.
#[derive(Error, Debug)]
enum RunError {
    #[error("cannot open presentation: {0}")]
    Document(#[from] slidetext_core::Error),

    #[error("{0:#}")]
    Output(anyhow::Error),
}

impl RunError {
    fn exit_code(&self) -> u8 {
        match self {
            RunError::Document(_) => EXIT_DOCUMENT,
            RunError::Output(_) => EXIT_OUTPUT,
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprint!("{}", e);
                return usage_failure();
            }
        },
    };

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = match RunConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return usage_failure();
        }
    };

    match run(&config) {
        Ok(records) => {
            log::debug!("Wrote {} slide records", records);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Print the full usage text and report a usage failure.
fn usage_failure() -> ExitCode {
    eprintln!();
    eprintln!("{}", Args::command().render_help());
    ExitCode::from(EXIT_USAGE)
}

/// Decode the presentation, then write its report.
///
/// The output sink is only created once the document has been decoded.
fn run(config: &RunConfig) -> Result<usize, RunError> {
    log::debug!("Processing: {}", config.input.display());

    let presentation = document::open(&config.input)?;
    let formatter = ReportFormatter::new().with_title_prefix(config.title_prefix);

    let records = match &config.output {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            write_report(stdout.lock(), &formatter, &presentation, config.json)
                .context("Failed to write to stdout")
        }
        OutputTarget::File(path) => File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))
            .and_then(|file| {
                write_report(BufWriter::new(file), &formatter, &presentation, config.json)
                    .with_context(|| format!("Failed to write to {}", path.display()))
            })
            .inspect(|_| log::debug!("Written to: {}", path.display())),
    }
    .map_err(RunError::Output)?;

    Ok(records)
}

/// Write every slide with text as a text block or a JSON line.
fn write_report<W: Write>(
    sink: W,
    formatter: &ReportFormatter,
    presentation: &Presentation,
    json: bool,
) -> io::Result<usize> {
    if json {
        let mut sink = sink;
        let mut records = 0;
        for record in formatter.presentation_records(presentation) {
            serde_json::to_writer(&mut sink, &record)?;
            sink.write_all(b"\n")?;
            records += 1;
        }
        sink.flush()?;
        return Ok(records);
    }

    let mut writer = ReportWriter::new(sink, formatter.line_ending());
    let records = writer.write_presentation(formatter, presentation)?;
    writer.finish()?;
    Ok(records)
}
