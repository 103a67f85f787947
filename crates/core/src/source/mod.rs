//! Line source for bindings files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Read every line of a bindings file, in order, without line terminators.
///
/// A final line with no trailing newline is still returned. Bytes that are
/// not valid UTF-8 are replaced rather than failing the read.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open bindings file: {}", path.display()))?;
    let lines = read_lines_from(BufReader::new(file))
        .with_context(|| format!("Failed to read bindings file: {}", path.display()))?;
    info!(path = %path.display(), lines = lines.len(), "read bindings file");
    Ok(lines)
}

/// Split a buffered reader into lines, stripping `\n` and `\r\n`.
pub fn read_lines_from<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}
