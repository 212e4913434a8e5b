use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by board operations and board persistence.
#[derive(Debug)]
pub enum BoardError {
    /// The board file could not be read or written. The in-memory board is untouched.
    Io { path: PathBuf, source: io::Error },
    /// A row or column index outside the board. Callers validate indices up
    /// front, so this signals a caller bug rather than bad user input.
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl BoardError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BoardError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Io { path, source } => {
                write!(f, "board I/O error on {}: {source}", path.display())
            }
            BoardError::OutOfRange { what, index, len } => {
                write!(f, "{what} index {index} out of range (len {len})")
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Io { source, .. } => Some(source),
            BoardError::OutOfRange { .. } => None,
        }
    }
}

/// A cell token that did not split into exactly `key GROUP value`.
/// Collected while decoding; the token is dropped and decoding carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based line number.
    pub line: usize,
    /// 1-based token position within the line.
    pub token: usize,
    pub raw: String,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid cell data at line {}, token {}: {:?}",
            self.line, self.token, self.raw
        )
    }
}
