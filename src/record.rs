//! The `Record` type: one Checkstyle violation, as read from an `<error>` tag.
use std::cmp::Ordering;
use std::fmt;

/// Which report run a record was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The run before the patch was applied
    Base,
    /// The run after the patch was applied
    Patch,
}

impl Origin {
    /// The opposite run
    #[must_use]
    pub fn other(self) -> Origin {
        match self {
            Origin::Base => Origin::Patch,
            Origin::Patch => Origin::Base,
        }
    }
}

/// A record's severity. The derived order is the priority order used when
/// sorting records: errors first, then warnings, info, ignored, and finally
/// any severity Checkstyle doesn't define, by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// `error`
    Error,
    /// `warning`
    Warning,
    /// `info`
    Info,
    /// `ignore`
    Ignore,
    /// Anything else, kept verbatim
    Other(String),
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        match name {
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            "ignore" => Severity::Ignore,
            other => Severity::Other(other.to_owned()),
        }
    }
}

impl Severity {
    /// The name as it appears in a report
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Ignore => "ignore",
            Severity::Other(name) => name,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violation. Two records are equal when everything but their `origin`
/// matches, so a violation reported by both runs cancels out when the runs
/// are diffed.
///
/// Records sort by line, column, severity, message and then source. A
/// missing line or column sorts before every present one.
#[derive(Debug, Clone)]
pub struct Record {
    /// The run this record came from
    pub origin: Origin,
    /// 1-based line number, if the report gave one
    pub line: Option<u32>,
    /// 1-based column number, if the report gave one
    pub column: Option<u32>,
    /// Severity of the violation
    pub severity: Severity,
    /// The violation message
    pub message: String,
    /// Fully qualified name of the check that reported it
    pub source: String,
}

/// The simple name of the check with the given fully qualified `source`
#[must_use]
pub fn check_name(source: &str) -> &str {
    source.rsplit('.').next().unwrap_or(source)
}

impl Record {
    /// The check's simple name: the part of `source` after the last `.`
    #[must_use]
    pub fn check_name(&self) -> &str {
        check_name(&self.source)
    }

    fn key(&self) -> (Option<u32>, Option<u32>, &Severity, &str, &str) {
        (self.line, self.column, &self.severity, &self.message, &self.source)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
