//! Provides the `read_report` function, which returns the contents of a report
//! file as UTF-8 bytes.
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Return the contents of the report at `path`. A report with a UTF-16 Byte
/// Order Mark is translated to UTF-8.
pub fn read_report(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .with_context(|| format!("Can't read file: {}", path.display()))
        .map(decode_if_utf16)
}

/// Reports written on Windows may be UTF-16 with a leading Byte Order Mark.
/// Those are re-encoded as UTF-8 with the mark dropped; anything else is
/// returned as it was read. Malformed UTF-16 becomes U+FFFD.
fn decode_if_utf16(bytes: Vec<u8>) -> Vec<u8> {
    match encoding_rs::Encoding::for_bom(&bytes) {
        Some((encoding, _)) if encoding == encoding_rs::UTF_16LE || encoding == encoding_rs::UTF_16BE => {
            let (text, _) = encoding.decode_with_bom_removal(&bytes);
            text.into_owned().into_bytes()
        }
        _ => bytes,
    }
}
