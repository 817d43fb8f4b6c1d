//! Writes a `DiffReport` as text: the differing records grouped by file, and
//! optionally a summary of the statistics.
use anyhow::Result;
use std::io;

use crate::record::{check_name, Origin, Record};
use crate::report::DiffReport;
use crate::statistics::{Statistics, Tally};
use crate::styles::{as_added, as_item, as_removed, as_title};

/// Writes `report` to `out`, followed by a summary if `summary` is set, and
/// flushes `out`.
///
/// Each record line starts with `-` if only the base run reported it (the
/// patch fixed it) or `+` if only the patch run did (the patch introduced it).
pub fn write_report(report: &DiffReport, summary: bool, mut out: impl io::Write) -> Result<()> {
    for (filename, records) in report.files() {
        writeln!(out, "{}", as_title(filename))?;
        for record in records {
            write_record(&mut out, record)?;
        }
    }
    if summary {
        if !report.is_empty() {
            writeln!(out)?;
        }
        write_summary(&mut out, report.statistics())?;
    }
    out.flush()?;
    Ok(())
}

fn write_record(out: &mut impl io::Write, record: &Record) -> io::Result<()> {
    let marker = match record.origin {
        Origin::Base => as_removed("-"),
        Origin::Patch => as_added("+"),
    };
    let position = match (record.line, record.column) {
        (Some(line), Some(column)) => format!("{line}:{column}"),
        (Some(line), None) => line.to_string(),
        (None, _) => "-".to_string(),
    };
    writeln!(
        out,
        "  {marker} {position} {} [{}] {}",
        as_item(record.severity.as_str()),
        record.check_name(),
        record.message
    )
}

fn write_summary(out: &mut impl io::Write, stats: &Statistics) -> io::Result<()> {
    let (base, patch, diff) = (stats.run(Origin::Base), stats.run(Origin::Patch), stats.diff());
    writeln!(out, "{}", as_title("Summary"))?;
    writeln!(out, "{:<12}{:>8}{:>8}{:>8}", "", "base", "patch", "diff")?;
    counts_line(out, "files", [base, patch, diff].map(Tally::files))?;
    counts_line(out, "violations", [base, patch, diff].map(Tally::total))?;
    for severity in stats.severity_names() {
        let counts = [base, patch, diff].map(|tally| tally.severity(severity));
        counts_line(out, severity.as_str(), counts)?;
    }
    writeln!(
        out,
        "{} removed, {} added",
        stats.unique(Origin::Base),
        stats.unique(Origin::Patch)
    )?;

    let sources = stats.check_names();
    if sources.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n{}", as_title("Checks"))?;
    writeln!(out, "{:>8}{:>8}{:>8}", "base", "patch", "diff")?;
    for source in sources {
        let [in_base, in_patch, in_diff] = [base, patch, diff].map(|tally| tally.check(source));
        writeln!(out, "{in_base:>8}{in_patch:>8}{in_diff:>8}  {}", check_name(source))?;
    }
    Ok(())
}

fn counts_line(out: &mut impl io::Write, label: &str, counts: [usize; 3]) -> io::Result<()> {
    let [base, patch, diff] = counts;
    writeln!(out, "{label:<12}{base:>8}{patch:>8}{diff:>8}")
}
