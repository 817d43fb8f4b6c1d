use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;

use csdiff::args::Mode;
use csdiff::render::write_report;
use csdiff::{compare_directories, parse_reports};

fn main() -> Result<()> {
    let args = csdiff::args::parsed();

    let report = match args.mode {
        Mode::Xml => parse_reports(&args.base, &args.patch)?,
        Mode::Text => compare_directories(&args.base, &args.patch)?,
    };

    let stdout = anstream::AutoStream::new(io::stdout().lock(), args.color.into());
    if io::stdout().is_terminal() {
        write_report(&report, args.summary, stdout)?;
    } else {
        write_report(&report, args.summary, io::BufWriter::new(stdout))?;
    };
    Ok(())
}
