//! # Board Engine
//!
//! Every operation on a live board: create, search, edit, insert a row, sort,
//! render, plus load/save through the injected codec.
//!
//! ```text
//! BoardEngine<V, C>
//! ├── values: V   // ValueSource: fills new cells, replaces edited values
//! └── codec: C    // BoardCodec: text form used by load/save
//! ```
//!
//! The engine never holds on to a board. Callers own the one live `Board`
//! and pass it in for each call. Indices are 0-based here and are expected
//! to be validated by the caller; out-of-range indices come back as
//! [`BoardError::OutOfRange`] and leave the board untouched.

use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

use log::{debug, info, warn};

use crate::core::board::{Board, Cell, Row};
use crate::core::codec::{BoardCodec, DelimitedCodec};
use crate::core::error::BoardError;
use crate::core::store;
use crate::core::values::{RandomValues, ValueSource};

// ============================================================================
// Search
// ============================================================================

/// One occurrence of the query inside a cell's concat. All positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub row: usize,
    pub column: usize,
    /// First character of the occurrence.
    pub start: usize,
    /// Last character of the occurrence (inclusive). Equals `start` for a
    /// single-character query.
    pub end: usize,
    /// The concat the occurrence was found in.
    pub within: String,
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found at cell position [{}][{}] within value {} at position [{}]",
            self.row, self.column, self.within, self.start
        )?;
        if self.end > self.start {
            write!(f, " to [{}]", self.end)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub query: String,
    /// In discovery order: rows top to bottom, columns left to right,
    /// positions left to right.
    pub matches: Vec<SearchMatch>,
}

impl SearchReport {
    pub fn occurrences(&self) -> usize {
        self.matches.len()
    }
}

/// Character offsets (0-based) of every occurrence of `needle`, overlapping
/// ones included: after a hit at `i` the scan resumes at `i + 1`.
fn overlapping_offsets(haystack: &str, needle: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    if needle.is_empty() {
        return offsets;
    }
    let mut from = 0;
    while let Some(rel) = haystack[from..].find(needle) {
        let at = from + rel;
        offsets.push(haystack[..at].chars().count());
        from = at + haystack[at..].chars().next().map_or(1, char::len_utf8);
    }
    offsets
}

pub fn search(board: &Board, query: &str) -> SearchReport {
    let query_len = query.chars().count();
    let mut matches = Vec::new();

    for (row_idx, row) in board.rows().iter().enumerate() {
        for (col_idx, cell) in row.cells.iter().enumerate() {
            let concat = cell.concat();
            for offset in overlapping_offsets(&concat, query) {
                matches.push(SearchMatch {
                    row: row_idx + 1,
                    column: col_idx + 1,
                    start: offset + 1,
                    end: offset + query_len,
                    within: concat.clone(),
                });
            }
        }
    }

    debug!("Search for {:?}: {} occurrence(s)", query, matches.len());
    SearchReport {
        query: query.to_string(),
        matches,
    }
}

// ============================================================================
// Sort
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

/// Ordinal comparison of `key + value` without building the concat.
fn cmp_concat(a: &Cell, b: &Cell) -> Ordering {
    let left = a.key.bytes().chain(a.value.bytes());
    let right = b.key.bytes().chain(b.value.bytes());
    left.cmp(right)
}

/// Rows with no cells have no first concat and rank below every other row.
fn cmp_first_cell(a: &Row, b: &Row) -> Ordering {
    match (a.cells.first(), b.cells.first()) {
        (Some(x), Some(y)) => cmp_concat(x, y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts the cells inside every row, then the rows by their first cell.
/// Both passes are stable and use the same direction.
pub fn sort(board: &mut Board, order: SortOrder) {
    let mut rows = board.take_rows();
    for row in &mut rows {
        row.cells.sort_by(|a, b| order.apply(cmp_concat(a, b)));
    }
    rows.sort_by(|a, b| order.apply(cmp_first_cell(a, b)));
    board.set_rows(rows);
    info!("Board sorted {order}");
}

// ============================================================================
// Rendering
// ============================================================================

/// `[key, value] ` per cell, one line per row. An empty board renders as "".
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in board.rows() {
        for cell in &row.cells {
            out.push_str(&format!("[{}, {}] ", cell.key, cell.value));
        }
        out.push('\n');
    }
    out
}

// ============================================================================
// Engine
// ============================================================================

/// Reported back from [`BoardEngine::edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub key: String,
    pub previous: String,
    pub current: String,
}

pub struct BoardEngine<V = RandomValues, C = DelimitedCodec> {
    values: V,
    codec: C,
}

impl BoardEngine {
    /// Entropy-seeded values with the delimited text format.
    pub fn with_defaults() -> Self {
        Self::new(RandomValues::from_entropy(), DelimitedCodec)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomValues::seeded(seed), DelimitedCodec)
    }
}

impl<V: ValueSource, C: BoardCodec> BoardEngine<V, C> {
    pub fn new(values: V, codec: C) -> Self {
        Self { values, codec }
    }

    pub fn load_board(&self, path: &Path) -> Result<Option<Board>, BoardError> {
        store::load_board(&self.codec, path)
    }

    pub fn save_board(&self, board: &Board, path: &Path) -> Result<(), BoardError> {
        store::save_board(&self.codec, board, path)
    }

    /// A fresh `rows` x `columns` board of generated cells. Either dimension
    /// may be 0.
    pub fn create_board(&mut self, rows: usize, columns: usize) -> Board {
        let board = Board::new((0..rows).map(|_| self.create_row(columns)).collect());
        info!("Created {rows}x{columns} board");
        board
    }

    pub fn create_row(&mut self, cells: usize) -> Row {
        Row::new((0..cells).map(|_| self.values.random_cell()).collect())
    }

    pub fn search(&self, board: &Board, query: &str) -> SearchReport {
        search(board, query)
    }

    /// Replaces the value of one cell with a generated one. The key stays.
    pub fn edit(
        &mut self,
        board: &mut Board,
        row: usize,
        column: usize,
    ) -> Result<EditOutcome, BoardError> {
        let cell = board.cell_mut(row, column)?;
        let current = self.values.generate();
        let previous = std::mem::replace(&mut cell.value, current.clone());
        debug!("Edited [{row}][{column}]: {previous:?} -> {current:?}");
        Ok(EditOutcome {
            key: cell.key.clone(),
            previous,
            current,
        })
    }

    /// Inserts a row of `cells` generated cells before the row at `index`,
    /// or appends it when `index == row_count`.
    ///
    /// The new row's width is not checked against the others.
    pub fn insert_row(
        &mut self,
        board: &mut Board,
        cells: usize,
        index: usize,
    ) -> Result<(), BoardError> {
        if index > board.row_count() {
            return Err(BoardError::OutOfRange {
                what: "row",
                index,
                len: board.row_count(),
            });
        }
        let new_row = self.create_row(cells);
        let mut rows = board.take_rows();
        rows.insert(index, new_row);
        board.set_rows(rows);

        if !board.is_rectangular() {
            warn!("Inserted row of {cells} cell(s) at {index}; board is no longer rectangular");
        }
        Ok(())
    }

    pub fn sort(&self, board: &mut Board, order: SortOrder) {
        sort(board, order)
    }

    pub fn render(&self, board: &Board) -> String {
        render(board)
    }
}
