//! Counting the lines of a file that carry content.
//!
//! A line is meaningful if, once surrounding whitespace is trimmed, it's
//! non-empty and doesn't start with `#`. Lines end at `\n`, `\r\n` or a
//! lone `\r`, and bytes that aren't valid UTF-8 are replaced rather than
//! rejected.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Counts the meaningful lines of the file at `path`.
///
/// # Errors
///
/// [`Error::FileNotFound`] if there is no such file and [`Error::Io`] for
/// any other failure to open or read it.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn meaningful_line_count(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let io_error = |source: io::Error| match source.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    };

    let file = File::open(path).map_err(io_error)?;
    let count = count_meaningful_lines(BufReader::new(file)).map_err(io_error)?;
    debug!(count, "counted meaningful lines");

    Ok(count)
}

/// Counts the meaningful lines of any buffered reader.
///
/// # Examples
///
/// ```
/// use exercises::lines::count_meaningful_lines;
///
/// let text = "# header\nfirst\n\n   \n  # indented comment\n  second  \n";
/// assert_eq!(count_meaningful_lines(text.as_bytes()).unwrap(), 2);
/// ```
pub fn count_meaningful_lines(mut reader: impl BufRead) -> io::Result<usize> {
    let mut count = 0;
    let mut chunk = Vec::new();
    while reader.read_until(b'\n', &mut chunk)? > 0 {
        // The empty pieces left around `\r\n` are never meaningful.
        count += chunk
            .split(|&b| b == b'\n' || b == b'\r')
            .filter(|line| is_meaningful(&String::from_utf8_lossy(line)))
            .count();
        chunk.clear();
    }

    Ok(count)
}

fn is_meaningful(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}
