//! Reads Checkstyle XML reports into a `DiffReport`.
//!
//! A report looks like
//!
//! ```xml
//! <checkstyle version="10.12.0">
//! <file name="src/main/java/Foo.java">
//! <error line="3" column="5" severity="warning" message="..." source="com.puppycrawl...Check"/>
//! </file>
//! </checkstyle>
//! ```
//!
//! Only `<file>` and `<error>` tags matter; everything else is skipped.
use anyhow::{bail, Context, Result};
use bstr::ByteSlice;
use std::borrow::Cow;
use std::path::Path;

use crate::io::read_report;
use crate::record::{Origin, Record, Severity};
use crate::report::DiffReport;
use crate::xml::{unescape, Element, Tag, Tags};

const FILE_TAG: &[u8] = b"file";
const ERROR_TAG: &[u8] = b"error";
const FILENAME_ATTR: &[u8] = b"name";
const LINE_ATTR: &[u8] = b"line";
const COLUMN_ATTR: &[u8] = b"column";
const SEVERITY_ATTR: &[u8] = b"severity";
const MESSAGE_ATTR: &[u8] = b"message";
const SOURCE_ATTR: &[u8] = b"source";

/// Reads the `base` and `patch` reports and returns their difference, with
/// statistics for both runs and for the difference.
pub fn parse_reports(base: &Path, patch: &Path) -> Result<DiffReport> {
    let mut report = DiffReport::default();
    for (path, origin) in [(base, Origin::Base), (patch, Origin::Patch)] {
        let xml = read_report(path)?;
        read_into(&mut report, &xml, origin)
            .with_context(|| format!("Can't parse report: {}", path.display()))?;
    }
    report.finish();
    Ok(report)
}

/// Adds the records of one report, read from `xml`, to `report`. Each
/// `<file>`'s records are added when its end tag is reached.
pub fn read_into(report: &mut DiffReport, xml: &[u8], origin: Origin) -> Result<()> {
    let mut current: Option<(Cow<str>, Vec<Record>)> = None;
    for tag in Tags::new(xml) {
        match tag? {
            Tag::Start(element) if element.name == FILE_TAG => {
                still_open(current.as_ref())?;
                report.statistics_mut().count_file(origin);
                current = Some((file_name(&element)?, Vec::new()));
            }
            Tag::Empty(element) if element.name == FILE_TAG => {
                still_open(current.as_ref())?;
                report.statistics_mut().count_file(origin);
            }
            Tag::End(name) if name == FILE_TAG => {
                if let Some((filename, records)) = current.take() {
                    report.add_records(&filename, records);
                }
            }
            Tag::Start(element) | Tag::Empty(element) if element.name == ERROR_TAG => {
                let Some((filename, records)) = current.as_mut() else {
                    bail!("<error> tag outside of a <file> tag");
                };
                let record = error_record(&element, origin)
                    .with_context(|| format!("Bad <error> tag for file {filename}"))?;
                report.statistics_mut().count_record(&record);
                records.push(record);
            }
            _ => {}
        }
    }
    still_open(current.as_ref())
}

/// Fails if a `<file>` tag is open: a new one can't start, and the report
/// can't end, until it is closed.
fn still_open(current: Option<&(Cow<'_, str>, Vec<Record>)>) -> Result<()> {
    if let Some((filename, _)) = current {
        bail!("<file> tag for {filename} is never closed");
    }
    Ok(())
}

fn file_name<'a>(element: &Element<'a>) -> Result<Cow<'a, str>> {
    match element.attribute(FILENAME_ATTR)? {
        Some(name) => Ok(name),
        None => bail!("<file> tag without a name"),
    }
}

fn error_record(element: &Element<'_>, origin: Origin) -> Result<Record> {
    let mut record = Record {
        origin,
        line: None,
        column: None,
        severity: Severity::Other(String::new()),
        message: String::new(),
        source: String::new(),
    };
    for attribute in element.attributes() {
        let (key, raw) = attribute?;
        match key {
            LINE_ATTR => record.line = Some(number(key, &unescape(raw)?)?),
            COLUMN_ATTR => record.column = Some(number(key, &unescape(raw)?)?),
            SEVERITY_ATTR => record.severity = Severity::from(&*unescape(raw)?),
            MESSAGE_ATTR => record.message = unescape(raw)?.into_owned(),
            SOURCE_ATTR => record.source = unescape(raw)?.into_owned(),
            _ => {}
        }
    }
    Ok(record)
}

fn number(key: &[u8], value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{} is not a number: {value:?}", key.as_bstr()))
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::record::Origin::{Base, Patch};

    const BASE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<checkstyle version="10.12.0">
<file name="src/A.java">
<error line="10" column="5" severity="warning" message="&apos;{&apos; is not preceded with whitespace." source="com.puppycrawl.tools.checkstyle.checks.whitespace.WhitespaceAroundCheck"/>
<error line="3" severity="error" message="Line is longer than 100 characters (found 120)." source="com.puppycrawl.tools.checkstyle.checks.sizes.LineLengthCheck"/>
</file>
<file name="src/B.java">
<error line="1" severity="info" message="Missing a Javadoc comment." source="com.puppycrawl.tools.checkstyle.checks.javadoc.MissingJavadocTypeCheck"/>
</file>
<file name="src/Clean.java"/>
</checkstyle>
"#;

    const PATCH: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<checkstyle version="10.12.0">
<file name="src/A.java">
<error line="3" severity="error" message="Line is longer than 100 characters (found 120)." source="com.puppycrawl.tools.checkstyle.checks.sizes.LineLengthCheck"/>
<error line="12" column="1" severity="error" message="Missing a Javadoc comment." source="com.puppycrawl.tools.checkstyle.checks.javadoc.MissingJavadocMethodCheck"/>
</file>
<file name="src/B.java">
<error line="1" severity="info" message="Missing a Javadoc comment." source="com.puppycrawl.tools.checkstyle.checks.javadoc.MissingJavadocTypeCheck"/>
</file>
<file name="src/Clean.java">
</file>
</checkstyle>
"#;

    fn both() -> DiffReport {
        let mut report = DiffReport::default();
        read_into(&mut report, BASE.as_bytes(), Base).unwrap();
        read_into(&mut report, PATCH.as_bytes(), Patch).unwrap();
        report.finish();
        report
    }

    #[test]
    fn records_present_in_both_runs_cancel() {
        let report = both();
        let files: Vec<&str> = report.files().map(|(name, _)| name).collect();
        assert_eq!(files, ["src/A.java"]);

        let records = report.records("src/A.java").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].line, records[0].column, records[0].origin), (Some(10), Some(5), Base));
        assert_eq!(records[0].message, "'{' is not preceded with whitespace.");
        assert_eq!(records[0].severity, Severity::Warning);
        assert_eq!((records[1].line, records[1].column, records[1].origin), (Some(12), Some(1), Patch));
        assert_eq!(records[1].check_name(), "MissingJavadocMethodCheck");
    }

    #[test]
    fn statistics_cover_both_runs_and_the_diff() {
        let report = both();
        let stats = report.statistics();
        assert_eq!(stats.run(Base).files(), 3);
        assert_eq!(stats.run(Patch).files(), 3);
        assert_eq!(stats.run(Base).total(), 3);
        assert_eq!(stats.run(Base).severity(&Severity::Info), 1);
        assert_eq!(stats.run(Patch).severity(&Severity::Error), 2);
        assert_eq!(stats.diff().files(), 1);
        assert_eq!(stats.diff().total(), 2);
        assert_eq!(stats.unique(Base), 1);
        assert_eq!(stats.unique(Patch), 1);
    }

    #[test]
    fn errors_outside_a_file_are_rejected() {
        let mut report = DiffReport::default();
        let xml = br#"<checkstyle><error line="1" severity="error"/></checkstyle>"#;
        assert!(read_into(&mut report, xml, Base).is_err());
    }

    #[test]
    fn bad_numbers_and_nameless_files_are_rejected() {
        let mut report = DiffReport::default();
        let xml = br#"<checkstyle><file name="A.java"><error line="x1"/></file></checkstyle>"#;
        let err = read_into(&mut report, xml, Base).unwrap_err();
        assert!(format!("{err:#}").contains("line is not a number"), "{err:#}");

        let xml = br#"<checkstyle><file><error line="1"/></file></checkstyle>"#;
        assert!(read_into(&mut report, xml, Base).is_err());
    }

    #[test]
    fn unclosed_files_are_rejected() {
        let mut report = DiffReport::default();
        let xml = br#"<checkstyle><file name="A.java"><error line="1"/>"#;
        assert!(read_into(&mut report, xml, Base).is_err());
    }

    #[test]
    fn a_file_opened_inside_another_is_rejected() {
        let mut report = DiffReport::default();
        let xml = br#"<checkstyle><file name="A.java"><error line="1"/><file name="B.java"></file></checkstyle>"#;
        let err = read_into(&mut report, xml, Base).unwrap_err();
        assert_eq!(err.to_string(), "<file> tag for A.java is never closed");

        let mut report = DiffReport::default();
        let xml = br#"<checkstyle><file name="A.java"><file name="B.java"/></file></checkstyle>"#;
        assert!(read_into(&mut report, xml, Base).is_err());
    }

    #[test]
    fn missing_attributes_get_defaults() {
        let mut report = DiffReport::default();
        let xml = br#"<file name="A.java"><error message="m"></error></file>"#;
        read_into(&mut report, xml, Patch).unwrap();
        let record = &report.records("A.java").unwrap()[0];
        assert_eq!((record.line, record.column), (None, None));
        assert_eq!(record.severity, Severity::Other(String::new()));
        assert_eq!(record.message, "m");
    }

    #[test]
    fn missing_severities_and_sources_are_not_counted() {
        let mut report = DiffReport::default();
        let xml = br#"<file name="A.java"><error line="1" message="m"/><error line="2" severity="info"/></file>"#;
        read_into(&mut report, xml, Base).unwrap();
        report.finish();
        let stats = report.statistics();
        assert_eq!(stats.run(Base).total(), 1);
        assert_eq!(stats.run(Base).checks().count(), 0);
        let names: Vec<&str> = stats.severity_names().into_iter().map(Severity::as_str).collect();
        assert_eq!(names, ["info"]);
        assert_eq!(report.records("A.java").unwrap().len(), 2);
    }
}
