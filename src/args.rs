//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::styles::ColorChoice;

/// Returns the parsed command line: the two reports to compare and how to
/// print their difference.
#[must_use]
pub fn parsed() -> Args {
    let parsed = CliArgs::parse();
    Args {
        base: parsed.base,
        patch: parsed.patch,
        mode: parsed.mode,
        summary: parsed.summary,
        color: parsed.color,
    }
}

/// What the two operands are
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two Checkstyle XML reports
    Xml,
    /// Two directories of plain-text files, compared line by line
    Text,
}

/// The parsed command line
pub struct Args {
    /// Report (or, in text mode, directory) from the run before the patch
    pub base: PathBuf,
    /// Report (or, in text mode, directory) from the run after the patch
    pub patch: PathBuf,
    /// Whether `base` and `patch` are XML reports or text directories
    pub mode: Mode,
    /// Print a summary of the statistics after the records
    pub summary: bool,
    /// When to color the output
    pub color: ColorChoice,
}

#[derive(Debug, Parser)]
#[command(name = "csdiff", version)]
/// Print the Checkstyle violations reported by exactly one of two runs
struct CliArgs {
    /// Report (or, in text mode, directory) from the run before the patch
    base: PathBuf,
    /// Report (or, in text mode, directory) from the run after the patch
    patch: PathBuf,
    #[arg(long, value_enum, default_value_t = Mode::Xml)]
    /// Compare Checkstyle XML reports, or directories of plain text
    mode: Mode,
    #[arg(long)]
    /// Print a summary of the statistics after the records
    summary: bool,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    /// When to color the output
    color: ColorChoice,
}
