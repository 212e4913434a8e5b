//! # Console Adapter
//!
//! The menu loop around [`BoardEngine`]. Reads choices through an
//! [`InputSource`], prints results to any `Write`, and saves the board after
//! every change.
//!
//! This is the only module that talks to the user. The core never prompts.

pub mod input;

use std::io::{self, Write};
use std::path::PathBuf;

use log::{info, warn};

use crate::core::codec::BoardCodec;
use crate::core::engine::{BoardEngine, SortOrder};
use crate::core::values::{VALUE_LEN, ValueSource};
use crate::core::{Board, BoardError};
use input::InputSource;

const MIN_QUERY_LEN: usize = 1;
const MAX_QUERY_LEN: usize = VALUE_LEN;
const BANNER: &str = "****************************************";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    Edit,
    AddRow,
    Sort,
    Print,
    Reset,
    Exit,
}

impl MenuChoice {
    pub const COUNT: usize = 7;

    pub fn from_number(n: usize) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Search),
            2 => Some(MenuChoice::Edit),
            3 => Some(MenuChoice::AddRow),
            4 => Some(MenuChoice::Sort),
            5 => Some(MenuChoice::Print),
            6 => Some(MenuChoice::Reset),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// The live board, where it is saved, and the engine that works on it.
pub struct Session<V, C> {
    engine: BoardEngine<V, C>,
    board: Board,
    path: PathBuf,
}

impl<V: ValueSource, C: BoardCodec> Session<V, C> {
    /// Loads the board at `path`, or asks for dimensions and creates one when
    /// the file is missing or empty. Any other load failure is returned and
    /// the file is left as it was.
    pub fn open(
        mut engine: BoardEngine<V, C>,
        path: PathBuf,
        input: &mut impl InputSource,
        out: &mut impl Write,
    ) -> io::Result<Self> {
        let loaded = match engine.load_board(&path) {
            Ok(board) => board,
            Err(e) if e.is_not_found() => {
                info!("No board at {}", path.display());
                None
            }
            Err(e) => {
                // The file exists but couldn't be read: leave it for the user.
                warn!("Failed to load board: {e}");
                writeln!(out, "Error: could not load the board ({e}).")?;
                return Err(io::Error::other(e));
            }
        };

        let session = match loaded {
            Some(board) => Self { engine, board, path },
            None => {
                writeln!(out, "Creating a new board.")?;
                let rows = input.positive_int("Rows: ")?;
                let columns = input.positive_int("Columns: ")?;
                let board = engine.create_board(rows, columns);
                let session = Self { engine, board, path };
                session.persist(out)?;
                session
            }
        };
        session.print(out)?;
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the menu until Exit or end of input.
    pub fn run(&mut self, input: &mut impl InputSource, out: &mut impl Write) -> io::Result<()> {
        loop {
            match self.step(input, out) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("Input closed, leaving menu");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// One menu round. Returns false when the user chose Exit.
    fn step(&mut self, input: &mut impl InputSource, out: &mut impl Write) -> io::Result<bool> {
        write_menu(out)?;
        let prompt = format!("Please enter your choice (1-{}): ", MenuChoice::COUNT);
        let Some(choice) = MenuChoice::from_number(input.positive_int(&prompt)?) else {
            writeln!(out, "Invalid choice. Please try again.")?;
            return Ok(true);
        };
        info!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Search => self.search(input, out)?,
            MenuChoice::Edit => self.edit(input, out)?,
            MenuChoice::AddRow => self.add_row(input, out)?,
            MenuChoice::Sort => self.sort(input, out)?,
            MenuChoice::Print => self.print(out)?,
            MenuChoice::Reset => self.reset(input, out)?,
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn search(&mut self, input: &mut impl InputSource, out: &mut impl Write) -> io::Result<()> {
        let query = input.bounded_string("String to find: ", MIN_QUERY_LEN, MAX_QUERY_LEN)?;
        let report = self.engine.search(&self.board, &query);

        if report.occurrences() == 0 {
            writeln!(out, "String '{query}' was not found in the board.")?;
            return Ok(());
        }
        writeln!(out, "Total occurrences: {}", report.occurrences())?;
        writeln!(out, "String matches for '{query}': ")?;
        for found in &report.matches {
            writeln!(out, "{found}")?;
        }
        Ok(())
    }

    fn edit(&mut self, input: &mut impl InputSource, out: &mut impl Write) -> io::Result<()> {
        if self.board.is_empty() {
            writeln!(out, "The board has no rows to edit.")?;
            return Ok(());
        }
        let row = input.bounded_int("Enter row to edit: ", self.board.row_count())? - 1;
        let columns = self.board.rows()[row].column_count();
        if columns == 0 {
            writeln!(out, "Row {} has no cells to edit.", row + 1)?;
            return Ok(());
        }
        let column = input.bounded_int("Enter column to edit: ", columns)? - 1;

        let outcome = match self.engine.edit(&mut self.board, row, column) {
            Ok(outcome) => outcome,
            Err(e) => return report_board_error(out, &e),
        };
        self.persist(out)?;
        writeln!(
            out,
            "Successfully updated cell [{}][{}] at key [{}] from {} to {}",
            row + 1,
            column + 1,
            outcome.key,
            outcome.previous,
            outcome.current
        )
    }

    fn add_row(&mut self, input: &mut impl InputSource, out: &mut impl Write) -> io::Result<()> {
        let cells = input.positive_int("Number of cells to add in the new row: ")?;
        let last = self.board.row_count() + 1;
        let prompt = format!("Insert before row (1-{last}, {last} appends): ");
        let index = input.bounded_int(&prompt, last)? - 1;

        if let Err(e) = self.engine.insert_row(&mut self.board, cells, index) {
            return report_board_error(out, &e);
        }
        self.persist(out)?;
        self.print(out)?;
        writeln!(
            out,
            "Successfully added a new row with {cells} cells before row {}.",
            index + 1
        )
    }

    fn sort(&mut self, input: &mut impl InputSource, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n{BANNER}")?;
        writeln!(out, "               Sorting order")?;
        writeln!(out, "{BANNER}")?;
        writeln!(out, "1. Ascending")?;
        writeln!(out, "2. Descending")?;
        let order = match input.bounded_int("Sorting choice: ", 2)? {
            1 => SortOrder::Ascending,
            _ => SortOrder::Descending,
        };

        self.engine.sort(&mut self.board, order);
        self.print(out)?;
        self.persist(out)?;
        writeln!(out, "Board has been sorted.")
    }

    fn print(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.engine.render(&self.board))
    }

    fn reset(&mut self, input: &mut impl InputSource, out: &mut impl Write) -> io::Result<()> {
        let rows = input.positive_int("Enter new number of rows: ")?;
        let columns = input.positive_int("Enter new number of columns: ")?;
        self.board = self.engine.create_board(rows, columns);
        self.persist(out)?;
        self.print(out)?;
        writeln!(out, "Board has been reset to {rows}x{columns}.")
    }

    /// Saves the board. A failed save is reported, not fatal.
    fn persist(&self, out: &mut impl Write) -> io::Result<()> {
        if let Err(e) = self.engine.save_board(&self.board, &self.path) {
            warn!("Failed to save board: {e}");
            writeln!(out, "Error: could not save the board ({e}).")?;
        }
        Ok(())
    }
}

fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{BANNER}")?;
    writeln!(out, "               Main Menu")?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "1. Search    - Search for an item")?;
    writeln!(out, "2. Edit      - Edit an existing item")?;
    writeln!(out, "3. Add row   - Inserts a row in the board")?;
    writeln!(out, "4. Sort      - Sorts the board")?;
    writeln!(out, "5. Print     - Print item details")?;
    writeln!(out, "6. Reset     - Reset the system")?;
    writeln!(out, "7. Exit      - Exit the application")?;
    writeln!(out, "{BANNER}")
}

fn report_board_error(out: &mut impl Write, e: &BoardError) -> io::Result<()> {
    warn!("Board operation failed: {e}");
    writeln!(out, "Error: {e}")
}
