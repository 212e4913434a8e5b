//! # Board Text Codec
//!
//! One line per row. Cells are separated by the UNIT control byte and a
//! cell's key and value by the GROUP control byte:
//!
//! ```text
//! key GS value US key GS value US ⏎
//! ```
//!
//! Every cell, including the last one on a line, is followed by US. Decoding
//! ignores trailing empty tokens, so both `…US⏎` and `…⏎` read the same.
//!
//! Decoding is forgiving: a token that isn't exactly `key GS value` is
//! dropped and reported as a [`MalformedRecord`], and the rest of the line
//! still loads. That can leave a row shorter than its neighbours.

use log::warn;

use crate::core::board::{Board, Cell, Row};
use crate::core::error::MalformedRecord;

/// Separates cells on a line (ASCII unit separator).
pub const UNIT: char = '\u{1F}';
/// Separates a cell's key from its value (ASCII group separator).
pub const GROUP: char = '\u{1D}';

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Result of decoding a non-empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub board: Board,
    /// Tokens that were skipped, in file order.
    pub malformed: Vec<MalformedRecord>,
}

pub trait BoardCodec {
    fn encode(&self, board: &Board) -> String;

    /// `None` when the text holds no lines at all.
    fn decode(&self, text: &str) -> Option<Decoded>;
}

/// The unit/group separated text format.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedCodec;

impl BoardCodec for DelimitedCodec {
    fn encode(&self, board: &Board) -> String {
        serialize(board)
    }

    fn decode(&self, text: &str) -> Option<Decoded> {
        deserialize(text)
    }
}

pub fn serialize(board: &Board) -> String {
    let mut out = String::new();
    for row in board.rows() {
        for cell in &row.cells {
            out.push_str(&cell.key);
            out.push(GROUP);
            out.push_str(&cell.value);
            out.push(UNIT);
        }
        out.push_str(LINE_ENDING);
    }
    out
}

pub fn deserialize(text: &str) -> Option<Decoded> {
    let mut lines = text.lines().peekable();
    // Width of the first line sizes each row up front; rows still hold only
    // what actually parsed.
    let width_hint = cell_tokens(lines.peek()?).len();

    let mut rows = Vec::new();
    let mut malformed = Vec::new();
    for (line_idx, line) in lines.enumerate() {
        let mut row = Row::with_capacity(width_hint);
        for (token_idx, token) in cell_tokens(line).into_iter().enumerate() {
            match parse_cell(token) {
                Some(cell) => row.add_cell(cell),
                None => {
                    let record = MalformedRecord {
                        line: line_idx + 1,
                        token: token_idx + 1,
                        raw: token.to_string(),
                    };
                    warn!("Skipping {record}");
                    malformed.push(record);
                }
            }
        }
        rows.push(row);
    }

    Some(Decoded {
        board: Board::new(rows),
        malformed,
    })
}

/// Splits a line on UNIT, dropping trailing empty tokens.
fn cell_tokens(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = line.split(UNIT).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

fn parse_cell(token: &str) -> Option<Cell> {
    let (key, value) = token.split_once(GROUP)?;
    if value.contains(GROUP) {
        return None;
    }
    Some(Cell::new(key, value))
}
