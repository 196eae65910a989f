use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while generating a worksheet.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested grid order is outside the accepted `1..=255` range.
    #[error("grid size {0} is out of range (accepted: 1..=255)")]
    SizeOutOfRange(usize),
    /// The output directory does not exist (or is not a directory).
    #[error("output directory `{}` does not exist or is not a directory", .0.display())]
    MissingOutputDir(PathBuf),
    /// The resolved output path is occupied by a directory.
    #[error("output path `{}` is a directory", .0.display())]
    OutputIsDirectory(PathBuf),
    /// An existing document at the output path could not be parsed.
    #[error("failed to parse existing document `{}`: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    /// The document archive could not be packed.
    #[error("failed to write document archive: {0}")]
    Pack(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type for worksheet generation.
pub type Result<T> = std::result::Result<T, Error>;
