//! Loading and saving byte grids.
//!
//! The on-disk form is a sequence of lines, each followed by a `\n`. Bytes
//! are taken verbatim; nothing is decoded.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::buffer::{ByteGrid, Line, NEWLINE};

/// Failure to move a grid to or from disk.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot read from file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write to file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Split raw file content into lines.
///
/// A trailing terminator closes the last line rather than opening a new one.
pub fn parse_lines(bytes: &[u8]) -> Vec<Line> {
    let mut lines: Vec<Line> = bytes.split(|&b| b == NEWLINE).map(<[u8]>::to_vec).collect();
    if bytes.is_empty() || bytes.last() == Some(&NEWLINE) {
        lines.pop();
    }
    lines
}

/// Serialize lines, writing a terminator after each one.
pub fn serialize(lines: &[Line]) -> Vec<u8> {
    let mut out = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.extend_from_slice(line);
        out.push(NEWLINE);
    }
    out
}

/// Load a grid from `path`.
///
/// A missing file is not an error: the grid starts as one empty line.
///
/// # Errors
///
/// Returns [`PersistError::Read`] if the file exists but can't be read.
pub fn load(path: &Path) -> Result<ByteGrid, PersistError> {
    match fs::read(path) {
        Ok(bytes) => {
            let lines = parse_lines(&bytes);
            debug!(path = %path.display(), lines = lines.len(), "loaded file");
            Ok(ByteGrid::from_lines(lines))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "file missing, starting empty");
            Ok(ByteGrid::empty())
        }
        Err(source) => Err(PersistError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write every line of `grid` to `path`, truncating it.
///
/// # Errors
///
/// Returns [`PersistError::Write`] if the file can't be created or written.
pub fn save(grid: &ByteGrid, path: &Path) -> Result<(), PersistError> {
    fs::write(path, serialize(grid.lines())).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), lines = grid.line_count(), "wrote file");
    Ok(())
}
