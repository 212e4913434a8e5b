//! # Core Board Logic
//!
//! The grid model and everything that operates on it.
//! It knows nothing about menus, prompts or the terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board / Row / Cell   │
//!                    │  • ValueSource          │
//!                    │  • BoardCodec           │
//!                    │  • BoardEngine          │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    CLI     │
//!                         │  (menu +   │
//!                         │   input)   │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: the data model
//! - [`values`]: random cell content
//! - [`codec`]: the delimited text format
//! - [`engine`]: search, edit, insert, sort, render
//! - [`store`]: whole-file load/save
//! - [`config`]: settings file and override resolution

pub mod board;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;
pub mod values;

pub use board::{Board, Cell, Row};
pub use codec::{BoardCodec, DelimitedCodec};
pub use engine::{BoardEngine, EditOutcome, SearchMatch, SearchReport, SortOrder};
pub use error::{BoardError, MalformedRecord};
pub use values::{RandomValues, ValueSource};
