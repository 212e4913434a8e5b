//! # Board Model
//!
//! Plain value containers for the grid:
//!
//! ```text
//! Board
//! └── rows: Vec<Row>
//!     └── cells: Vec<Cell>
//!         ├── key: String
//!         └── value: String
//! ```
//!
//! Nothing here enforces a rectangular shape. A board loaded from a damaged
//! file, or one that had a shorter/longer row inserted, is allowed to be jagged.

use crate::core::error::BoardError;

/// A key/value pair of short text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub key: String,
    pub value: String,
}

impl Cell {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `key + value`, the unit compared by search and sort.
    pub fn concat(&self) -> String {
        let mut out = String::with_capacity(self.key.len() + self.value.len());
        out.push_str(&self.key);
        out.push_str(&self.value);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn with_capacity(columns: usize) -> Self {
        Self {
            cells: Vec::with_capacity(columns),
        }
    }

    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Removes and returns the cell at `index`.
    pub fn remove_cell(&mut self, index: usize) -> Result<Cell, BoardError> {
        if index >= self.cells.len() {
            return Err(BoardError::OutOfRange {
                what: "column",
                index,
                len: self.cells.len(),
            });
        }
        Ok(self.cells.remove(index))
    }

    /// Concat of the first cell, `None` for a row with no cells.
    pub fn first_concat(&self) -> Option<String> {
        self.cells.first().map(Cell::concat)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Replaces the whole row sequence.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Hands the row sequence to the caller, leaving the board empty until
    /// [`Board::set_rows`] writes it back.
    pub fn take_rows(&mut self) -> Vec<Row> {
        std::mem::take(&mut self.rows)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count of the first row, or 0 for an empty board.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Row::column_count)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_rectangular(&self) -> bool {
        let columns = self.column_count();
        self.rows.iter().all(|row| row.column_count() == columns)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    pub(crate) fn cell_mut(&mut self, row: usize, column: usize) -> Result<&mut Cell, BoardError> {
        let row_count = self.rows.len();
        let target = self.rows.get_mut(row).ok_or(BoardError::OutOfRange {
            what: "row",
            index: row,
            len: row_count,
        })?;
        let column_count = target.cells.len();
        target.cells.get_mut(column).ok_or(BoardError::OutOfRange {
            what: "column",
            index: column,
            len: column_count,
        })
    }
}
