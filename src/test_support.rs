//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::board::{Board, Cell, Row};
use crate::core::values::ValueSource;

/// Deterministic values: "000", "001", "002", ... wrapping at 999.
#[derive(Debug, Default)]
pub struct SequenceValues {
    next: u32,
}

impl ValueSource for SequenceValues {
    fn generate(&mut self) -> String {
        let value = format!("{:03}", self.next % 1000);
        self.next += 1;
        value
    }
}

/// Builds a board from literal `(key, value)` rows.
pub fn board_of(rows: &[&[(&str, &str)]]) -> Board {
    Board::new(
        rows.iter()
            .map(|r| Row::new(r.iter().map(|(k, v)| Cell::new(*k, *v)).collect()))
            .collect(),
    )
}
