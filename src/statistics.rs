//! Counters kept while the reports are read, and after they've been diffed.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::record::{Origin, Record, Severity};

type Counter<K> = IndexMap<K, usize, FxBuildHasher>;

/// The counts for one side of the comparison: the base run, the patch run, or
/// the diff between them. Severities and checks are kept in the order they
/// were first seen.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    files: usize,
    severities: Counter<Severity>,
    checks: Counter<String>,
}

impl Tally {
    /// Number of `<file>` entries (or, for the diff, files with differences)
    #[must_use]
    pub fn files(&self) -> usize {
        self.files
    }

    /// Total number of violations, over all severities
    #[must_use]
    pub fn total(&self) -> usize {
        self.severities.values().sum()
    }

    /// Number of violations with the given severity
    #[must_use]
    pub fn severity(&self, severity: &Severity) -> usize {
        self.severities.get(severity).copied().unwrap_or(0)
    }

    /// Number of violations reported by the check with the given source
    #[must_use]
    pub fn check(&self, source: &str) -> usize {
        self.checks.get(source).copied().unwrap_or(0)
    }

    /// Each check's source with its count
    pub fn checks(&self) -> impl Iterator<Item = (&str, usize)> {
        self.checks.iter().map(|(source, n)| (source.as_str(), *n))
    }

    /// Counts the record's severity and check. A record that had no severity or
    /// no source attribute is not counted under it.
    fn add(&mut self, record: &Record) {
        if !record.severity.as_str().is_empty() {
            *self.severities.entry(record.severity.clone()).or_insert(0) += 1;
        }
        if !record.source.is_empty() {
            *self.checks.entry(record.source.clone()).or_insert(0) += 1;
        }
    }
}

/// Statistics for a whole comparison
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    base: Tally,
    patch: Tally,
    diff: Tally,
    removed: usize,
    added: usize,
}

impl Statistics {
    /// The counts for the base or patch run
    #[must_use]
    pub fn run(&self, origin: Origin) -> &Tally {
        match origin {
            Origin::Base => &self.base,
            Origin::Patch => &self.patch,
        }
    }

    /// The counts for the records left after diffing
    #[must_use]
    pub fn diff(&self) -> &Tally {
        &self.diff
    }

    /// Number of differing records that came from the given run: for
    /// `Origin::Base` the violations the patch removed, for `Origin::Patch`
    /// the ones it added.
    #[must_use]
    pub fn unique(&self, origin: Origin) -> usize {
        match origin {
            Origin::Base => self.removed,
            Origin::Patch => self.added,
        }
    }

    /// Every severity seen on any side, in priority order
    #[must_use]
    pub fn severity_names(&self) -> BTreeSet<&Severity> {
        [&self.base, &self.patch, &self.diff]
            .into_iter()
            .flat_map(|tally| tally.severities.keys())
            .collect()
    }

    /// Every check source seen on any side, sorted
    #[must_use]
    pub fn check_names(&self) -> BTreeSet<&str> {
        [&self.base, &self.patch, &self.diff]
            .into_iter()
            .flat_map(|tally| tally.checks().map(|(source, _)| source))
            .collect()
    }

    pub(crate) fn count_file(&mut self, origin: Origin) {
        self.run_mut(origin).files += 1;
    }

    pub(crate) fn count_record(&mut self, record: &Record) {
        self.run_mut(record.origin).add(record);
    }

    /// Recomputes the diff counts from the records that survived diffing.
    pub(crate) fn count_diff<'a>(&mut self, files: impl Iterator<Item = &'a [Record]>) {
        let mut diff = Tally::default();
        let (mut removed, mut added) = (0, 0);
        for records in files {
            diff.files += 1;
            for record in records {
                diff.add(record);
                match record.origin {
                    Origin::Base => removed += 1,
                    Origin::Patch => added += 1,
                }
            }
        }
        self.diff = diff;
        self.removed = removed;
        self.added = added;
    }

    fn run_mut(&mut self, origin: Origin) -> &mut Tally {
        match origin {
            Origin::Base => &mut self.base,
            Origin::Patch => &mut self.patch,
        }
    }
}
