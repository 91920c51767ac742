//! Writing rendered pages to disk.
//!
//! The output directory is created on every call (`create_dir_all` is a
//! no-op when it already exists) and files are overwritten. Failures are
//! returned per page; it's up to the caller to keep going.

use crate::types::{PageRecord, RenderedPage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `contents` to `dir/filename` as UTF-8, replacing any existing file.
pub fn write_file(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, WriteError> {
    ensure_dir(dir)?;
    let path = dir.join(filename);
    fs::write(&path, contents).map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Persist a rendered page and keep only its summary.
pub fn write_page(dir: &Path, page: RenderedPage) -> Result<PageRecord, WriteError> {
    let path = write_file(dir, &page.filename, &page.content)?;
    let mut record = page.into_record();
    record.path = path;
    Ok(record)
}
