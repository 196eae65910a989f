#![doc = include_str!("../README.md")]

mod error;
mod generator;
mod grid;
mod worksheet;

pub use error::{Error, Result};
pub use generator::{generate, generate_with};
pub use grid::{SchulteGrid, MAX_ORDER};
pub use worksheet::{append_worksheet, new_document, WorksheetStyle};
