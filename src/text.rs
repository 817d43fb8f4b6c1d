//! Compares two directory trees of plain-text reports line by line, for
//! tools that don't write Checkstyle XML.
//!
//! Files are matched up by their path relative to each directory. A line that
//! only one side's copy of a file has becomes a record on that side, and a
//! file only one directory has becomes a single `File not found.` record on
//! the side that lacks it.
use anyhow::{Context, Result};
use itertools::{EitherOrBoth, Itertools};
use similar::{Algorithm, ChangeTag, TextDiff};
use std::fs;
use std::path::Path;

use crate::io::read_report;
use crate::record::{Origin, Record, Severity};
use crate::report::DiffReport;

/// Severity of every record found by comparing text
pub const DIFFERENCE_SEVERITY: &str = "difference";
/// Source of every record found by comparing text
pub const DIFFERENCE_SOURCE: &str = "patch-diff-report-tool";
const FILE_NOT_FOUND: &str = "File not found.";

/// Compares every file under the `base` directory with the file at the same
/// relative path under `patch`, and returns their difference with statistics.
pub fn compare_directories(base: &Path, patch: &Path) -> Result<DiffReport> {
    let mut report = DiffReport::default();
    let base_files = relative_files(base)?;
    let patch_files = relative_files(patch)?;
    for pair in base_files.into_iter().merge_join_by(patch_files, Ord::cmp) {
        match pair {
            EitherOrBoth::Both(name, _) => compare_file(&mut report, base, patch, &name)?,
            EitherOrBoth::Left(name) => only_on(&mut report, &name, Origin::Base),
            EitherOrBoth::Right(name) => only_on(&mut report, &name, Origin::Patch),
        }
    }
    report.finish();
    Ok(report)
}

/// The records for the lines that differ between `before` and `after`. Lines
/// are numbered from 1 on their own side.
#[must_use]
pub fn line_differences(before: &str, after: &str) -> Vec<Record> {
    let diff = TextDiff::configure().algorithm(Algorithm::Patience).diff_lines(before, after);
    diff.iter_all_changes()
        .filter_map(|change| {
            let (origin, index) = match change.tag() {
                ChangeTag::Equal => return None,
                ChangeTag::Delete => (Origin::Base, change.old_index()?),
                ChangeTag::Insert => (Origin::Patch, change.new_index()?),
            };
            let line = change.value().trim_end_matches(['\n', '\r']);
            Some(difference(origin, index + 1, line))
        })
        .collect()
}

fn compare_file(report: &mut DiffReport, base: &Path, patch: &Path, name: &str) -> Result<()> {
    let before = read_text(&base.join(name))?;
    let after = read_text(&patch.join(name))?;
    let records = line_differences(&before, &after);
    let stats = report.statistics_mut();
    for record in &records {
        stats.count_record(record);
    }
    stats.count_file(Origin::Base);
    stats.count_file(Origin::Patch);
    report.add_records(name, records);
    Ok(())
}

/// Records that the file `name` exists only in the `found` run.
fn only_on(report: &mut DiffReport, name: &str, found: Origin) {
    let record = difference(found.other(), 1, FILE_NOT_FOUND);
    let stats = report.statistics_mut();
    stats.count_record(&record);
    stats.count_file(found);
    report.add_records(name, vec![record]);
}

fn difference(origin: Origin, line: usize, message: &str) -> Record {
    Record {
        origin,
        line: Some(u32::try_from(line).unwrap_or(u32::MAX)),
        column: Some(1),
        severity: Severity::from(DIFFERENCE_SEVERITY),
        message: message.to_owned(),
        source: DIFFERENCE_SOURCE.to_owned(),
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = read_report(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Paths of all the files under `root`, relative to it, with `/` between
/// components, sorted.
fn relative_files(root: &Path) -> Result<Vec<String>> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) -> Result<()> {
        let entries = fs::read_dir(dir).with_context(|| format!("Can't read directory: {}", dir.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("Can't read directory: {}", dir.display()))?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                walk(root, &path, out)?;
            } else {
                let relative = path.strip_prefix(root).unwrap_or(&path);
                out.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    let mut out = Vec::new();
    walk(root, root, &mut out)?;
    out.sort();
    Ok(out)
}
