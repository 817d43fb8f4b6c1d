//! `csdiff` compares two Checkstyle report runs, one made before a patch and
//! one after, and reports the violations that only one of them contains.
//!
//! The `diff` module is the kernel of the application: an ordered symmetric
//! difference over two sorted sequences. The `parser` module reads reports
//! into a `report::DiffReport`, feeding each file's records through that
//! kernel, and the `render` module prints the result. The `text` module is the
//! alternative to `parser` for tools without XML output: it compares two
//! directories of plain-text files line by line. The `args` module parses the
//! command line, and the `io` module hides file reading details.
//!
//! Current Limitations:
//! * Both reports are read into memory in full before they are compared.
//! * Text mode uses a patience line diff, so its line pairing can differ a
//!   little from other diff tools.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![warn(missing_docs)]

pub mod args;
pub mod diff;
pub mod io;
pub mod parser;
pub mod record;
pub mod render;
pub mod report;
pub mod statistics;
pub mod styles;
pub mod text;
mod xml;

pub use diff::{merge_diff, symmetric_diff};
pub use parser::parse_reports;
pub use record::{Origin, Record, Severity};
pub use report::DiffReport;
pub use text::compare_directories;
