//! Provides `DiffReport`, which holds, for each file named in either report,
//! the violations that the two runs don't agree on.
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::diff::merge_diff;
use crate::record::Record;
use crate::statistics::Statistics;

/// The records that differ between the base and patch runs, keyed by file
/// name. Files whose records cancel out completely have no entry.
///
/// Records are added one file at a time. The first list added for a file is
/// stored as is; when a second list arrives for the same file the two are
/// diffed and only the difference is kept. That way a file's records are only
/// held in memory until the other run's list for that file shows up.
#[derive(Debug, Default)]
pub struct DiffReport {
    records: BTreeMap<String, Vec<Record>>,
    statistics: Statistics,
}

impl DiffReport {
    /// Adds the records one run reported for `filename`. An empty list is
    /// ignored.
    pub fn add_records(&mut self, filename: &str, mut records: Vec<Record>) {
        if records.is_empty() {
            return;
        }
        records.sort();
        match self.records.entry(filename.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(records);
            }
            Entry::Occupied(mut slot) => {
                let previous = std::mem::take(slot.get_mut());
                let diff = merge_diff(previous, records);
                if diff.is_empty() {
                    slot.remove();
                } else {
                    *slot.get_mut() = diff;
                }
            }
        }
    }

    /// Computes the diff statistics. Call this once both reports are read.
    pub fn finish(&mut self) {
        let files = self.records.values().map(Vec::as_slice);
        self.statistics.count_diff(files);
    }

    /// Each file with differences, in file name order, with its records in
    /// sorted order
    pub fn files(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.records.iter().map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// The differing records for one file, if it has any
    #[must_use]
    pub fn records(&self, filename: &str) -> Option<&[Record]> {
        self.records.get(filename).map(Vec::as_slice)
    }

    /// `true` if the two runs agree completely
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counts gathered while reading and diffing
    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub(crate) fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }
}
