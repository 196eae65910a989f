//! End-to-end worksheet generation: validate, resolve the output path,
//! open or start a document, append, save.

use std::fs;
use std::path::{Path, PathBuf};

use docx_rs::{read_docx, Docx};
use log::debug;
use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::{SchulteGrid, MAX_ORDER};
use crate::worksheet::{append_worksheet, new_document, WorksheetStyle};

/// Generates a worksheet with the default [`WorksheetStyle`].
///
/// Convenience wrapper around [`generate_with`].
pub fn generate<R: Rng + ?Sized>(
    size: usize,
    out_name: &str,
    dir: impl AsRef<Path>,
    rng: &mut R,
) -> Result<PathBuf> {
    generate_with(size, out_name, dir, &WorksheetStyle::default(), rng)
}

/// Generates a shuffled `size` x `size` worksheet and saves it as
/// `{dir}/{out_name}.docx`, overwriting any previous file of that name.
///
/// If a document already exists at the resolved path it is opened and the
/// new heading and table are appended after its existing content; the
/// existence check and the save use the same fully-qualified path.
///
/// Returns the path of the saved file.
pub fn generate_with<R: Rng + ?Sized>(
    size: usize,
    out_name: &str,
    dir: impl AsRef<Path>,
    style: &WorksheetStyle,
    rng: &mut R,
) -> Result<PathBuf> {
    if size == 0 || size > MAX_ORDER {
        return Err(Error::SizeOutOfRange(size));
    }
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::MissingOutputDir(dir.to_path_buf()));
    }
    let out_path = dir.join(format!("{}.docx", out_name));
    if out_path.is_dir() {
        return Err(Error::OutputIsDirectory(out_path));
    }

    let document = open_or_new(&out_path)?;

    let grid = SchulteGrid::shuffled(size, rng);
    let document = append_worksheet(document, &grid, style);

    let file = fs::File::create(&out_path)?;
    document
        .build()
        .pack(file)
        .map_err(|e| Error::Pack(e.to_string()))?;
    debug!(
        "saved {} by {} worksheet to {}",
        size,
        size,
        out_path.display()
    );

    Ok(out_path)
}

/// Opens the document at `path` for appending, or starts a fresh one if
/// no file exists there yet.
fn open_or_new(path: &Path) -> Result<Docx> {
    if path.is_file() {
        debug!("appending to existing document {}", path.display());
        let buf = fs::read(path)?;
        read_docx(&buf).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    } else {
        debug!("starting a new document for {}", path.display());
        Ok(new_document())
    }
}
