//! # Board Persistence
//!
//! Whole-file reads and writes. Saves go through a `<name>.tmp` sibling and
//! a `rename()`, so an interrupted save leaves the previous file in place.
//! File handles never outlive a single call.
//!
//! Bytes that aren't valid UTF-8 are replaced with U+FFFD on load; the rest
//! of the file still loads.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::core::board::Board;
use crate::core::codec::BoardCodec;
use crate::core::error::BoardError;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> BoardError + '_ {
    move |source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Load a board from `path`.
///
/// Returns `Ok(None)` when the file exists but has no lines. Malformed cell
/// tokens are logged and dropped; they never fail the load.
pub fn load_board(codec: &impl BoardCodec, path: &Path) -> Result<Option<Board>, BoardError> {
    let bytes = fs::read(path).map_err(io_error(path))?;
    let text = String::from_utf8_lossy(&bytes);
    if matches!(text, Cow::Owned(_)) {
        warn!("Board file {} is not valid UTF-8; replaced invalid bytes", path.display());
    }
    let Some(decoded) = codec.decode(&text) else {
        info!("Board file {} is empty", path.display());
        return Ok(None);
    };

    if !decoded.malformed.is_empty() {
        warn!(
            "Dropped {} malformed cell(s) while loading {}",
            decoded.malformed.len(),
            path.display()
        );
    }
    if !decoded.board.is_rectangular() {
        warn!("Board loaded from {} has rows of differing length", path.display());
    }
    debug!(
        "Loaded {} row(s) from {}",
        decoded.board.row_count(),
        path.display()
    );
    Ok(Some(decoded.board))
}

/// `board.txt` -> `board.txt.tmp`, next to the target.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Atomically write `board` to `path` (via `<name>.tmp` + rename).
pub fn save_board(codec: &impl BoardCodec, board: &Board, path: &Path) -> Result<(), BoardError> {
    let tmp_path = tmp_path_for(path);
    let text = codec.encode(board);
    fs::write(&tmp_path, text).map_err(io_error(&tmp_path))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error(path)(e));
    }
    debug!("Saved {} row(s) to {}", board.row_count(), path.display());
    Ok(())
}
