//! Front matter output.

use crate::document::Document;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Line opening and closing the front matter block.
pub const DELIMITER: &str = "---";

/// Write `header` (trimmed) between delimiter lines, then `body` directly after.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_front_matter<W: Write>(out: &mut W, header: &str, body: &str) -> io::Result<()> {
    writeln!(out, "{DELIMITER}")?;
    writeln!(out, "{}", header.trim())?;
    writeln!(out, "{DELIMITER}")?;
    out.write_all(body.as_bytes())
}

/// Create (or truncate) `path` and write the front matter followed by the edited document.
///
/// # Errors
///
/// Returns [`Error::Write`] if the file cannot be created or written. Content already written
/// is left in place.
pub fn write_post(path: &Path, header: &str, doc: &Document) -> Result<()> {
    let write_error = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(write_error)?);
    write_front_matter(&mut out, header, &doc.serialize()).map_err(write_error)?;
    out.flush().map_err(write_error)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/front_matter.rs"]
mod tests;
