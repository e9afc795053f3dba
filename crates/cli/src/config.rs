//! Command-line arguments and their validation into a [`RunConfig`].

use clap::{ArgAction, Parser};
use slidetext_core::PresentationFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension given to text reports.
const REPORT_EXTENSION: &str = "txt";

/// Formats whose extension is appended, in order, when the input path does
/// not exist as typed.
const PROBE_FORMATS: [PresentationFormat; 2] =
    [PresentationFormat::Ppt, PresentationFormat::Pptx];

/// Output name meaning standard output.
const STDOUT_NAME: &str = "-";

/// Extract a plain-text report from a PowerPoint file.
#[derive(Parser, Debug)]
#[command(name = "slidetext")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input presentation (.ppt or .pptx; the extension may be omitted)
    pub input: String,

    /// Toggle the "Title: " prefix on slide titles (on by default)
    #[arg(short = 't', action = ArgAction::Count)]
    pub toggle_title: u8,

    /// Output name: NAME.txt next to the input, or "-" for stdout
    #[arg(short = 'f', value_name = "NAME", allow_hyphen_values = true)]
    pub output: Option<String>,

    /// Write one JSON object per slide instead of text blocks
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// A validated run: every path resolved, every option decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub title_prefix: bool,
    pub json: bool,
}

/// Problems with the command line itself.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("empty output name")]
    EmptyOutputName,
}

impl RunConfig {
    /// Validate parsed arguments against the filesystem.
    pub fn from_args(args: Args) -> Result<Self, UsageError> {
        let input = resolve_input(&args.input)?;
        let output = resolve_output(&input, args.output.as_deref())?;

        Ok(Self {
            input,
            output,
            title_prefix: args.toggle_title % 2 == 0,
            json: args.json,
        })
    }
}

/// The literal path if it exists, else the first probed extension that does.
fn resolve_input(name: &str) -> Result<PathBuf, UsageError> {
    let literal = PathBuf::from(name);
    if literal.is_file() {
        return Ok(literal);
    }

    PROBE_FORMATS
        .iter()
        .map(|format| PathBuf::from(format!("{}.{}", name, format.extension())))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| UsageError::InputNotFound(name.to_string()))
}

fn resolve_output(input: &Path, name: Option<&str>) -> Result<OutputTarget, UsageError> {
    let Some(name) = name else {
        return Ok(OutputTarget::File(input.with_extension(REPORT_EXTENSION)));
    };

    match name {
        STDOUT_NAME => Ok(OutputTarget::Stdout),
        "" => Err(UsageError::EmptyOutputName),
        name => {
            let file_name = format!("{}.{}", name, REPORT_EXTENSION);
            let dir = input.parent().unwrap_or_else(|| Path::new(""));
            Ok(OutputTarget::File(dir.join(file_name)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("slidetext").chain(argv.iter().copied())).unwrap()
    }

    fn deck(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, b"placeholder").unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults() {
        let dir = TempDir::new().unwrap();
        let input = deck(&dir, "talk.pptx");

        let config = RunConfig::from_args(args(&[&input])).unwrap();
        assert_eq!(config.input, PathBuf::from(&input));
        assert_eq!(
            config.output,
            OutputTarget::File(dir.path().join("talk.txt"))
        );
        assert!(config.title_prefix);
        assert!(!config.json);
    }

    #[test]
    fn test_title_toggle_parity() {
        let dir = TempDir::new().unwrap();
        let input = deck(&dir, "talk.ppt");

        assert!(!RunConfig::from_args(args(&["-t", &input])).unwrap().title_prefix);
        assert!(RunConfig::from_args(args(&["-t", "-t", &input])).unwrap().title_prefix);
        assert!(!RunConfig::from_args(args(&["-ttt", &input])).unwrap().title_prefix);
    }

    #[test]
    fn test_probes_ppt_before_pptx() {
        let dir = TempDir::new().unwrap();
        deck(&dir, "talk.pptx");
        let stem = dir.path().join("talk").to_string_lossy().into_owned();

        let config = RunConfig::from_args(args(&[&stem])).unwrap();
        assert_eq!(config.input, dir.path().join("talk.pptx"));

        deck(&dir, "talk.ppt");
        let config = RunConfig::from_args(args(&[&stem])).unwrap();
        assert_eq!(config.input, dir.path().join("talk.ppt"));
        assert_eq!(
            config.output,
            OutputTarget::File(dir.path().join("talk.txt"))
        );
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nothing").to_string_lossy().into_owned();

        assert_eq!(
            RunConfig::from_args(args(&[&missing])),
            Err(UsageError::InputNotFound(missing))
        );
    }

    #[test]
    fn test_output_name_forms() {
        let dir = TempDir::new().unwrap();
        let input = deck(&dir, "talk.pptx");

        let separate = RunConfig::from_args(args(&["-f", "notes", &input])).unwrap();
        assert_eq!(
            separate.output,
            OutputTarget::File(dir.path().join("notes.txt"))
        );

        let attached = RunConfig::from_args(args(&["-fnotes", &input])).unwrap();
        assert_eq!(attached.output, separate.output);

        let stdout = RunConfig::from_args(args(&["-f", "-", &input])).unwrap();
        assert_eq!(stdout.output, OutputTarget::Stdout);
    }

    #[test]
    fn test_absolute_output_name_stays_absolute() {
        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let input = deck(&dir, "talk.pptx");
        let name = elsewhere.path().join("report").to_string_lossy().into_owned();

        let config = RunConfig::from_args(args(&["-f", &name, &input])).unwrap();
        assert_eq!(
            config.output,
            OutputTarget::File(elsewhere.path().join("report.txt"))
        );
    }

    #[test]
    fn test_empty_output_name() {
        let dir = TempDir::new().unwrap();
        let input = deck(&dir, "talk.pptx");

        assert_eq!(
            RunConfig::from_args(args(&["-f", "", &input])),
            Err(UsageError::EmptyOutputName)
        );
    }

    #[test]
    fn test_bad_flags_rejected_by_parser() {
        assert!(Args::try_parse_from(["slidetext", "-x", "deck"]).is_err());
        assert!(Args::try_parse_from(["slidetext", "deck", "-f"]).is_err());
        assert!(Args::try_parse_from(["slidetext"]).is_err());
    }
}
