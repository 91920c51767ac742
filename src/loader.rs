//! Page data loading.
//!
//! Reads the JSON document that drives a generation run:
//!
//! ```json
//! {
//!   "template": "<title>{{TITLE}}</title> ...",
//!   "pages": [
//!     { "title": "Observer Theory", "elementId": "text-observer", "filename": "observer.html" }
//!   ]
//! }
//! ```
//!
//! `template` is optional; the built-in template is used when it is absent.
//!
//! Two levels of failure:
//! - the document itself (missing file, malformed JSON, no `pages` array) is a
//!   [`LoadError`] and aborts the run;
//! - a single entry (missing key, unsafe filename) is a [`PageError`], raised
//!   by [`RawPage::validate`] while rendering, and only that page is skipped.

use crate::naming::{self, FilenameProblem};
use crate::types::PageSpec;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("invalid JSON in {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("unsafe filename {name:?}: {problem}")]
    UnsafeFilename {
        name: String,
        problem: FilenameProblem,
    },
}

/// The input document as parsed, before per-page validation.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDocument {
    pub pages: Vec<RawPage>,
    #[serde(default)]
    pub template: Option<String>,
}

/// One entry of the `pages` array. Every key is optional here so a single
/// bad entry doesn't reject the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPage {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub element_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl RawPage {
    /// Turn the raw entry into a [`PageSpec`].
    ///
    /// Fields are checked in `title`, `elementId`, `filename` order and the
    /// first missing (or blank) one is reported.
    pub fn validate(&self) -> Result<PageSpec, PageError> {
        let title = required(&self.title, "title")?;
        let element_id = required(&self.element_id, "elementId")?;
        let filename = required(&self.filename, "filename")?;
        naming::check_filename(filename).map_err(|problem| PageError::UnsafeFilename {
            name: filename.to_string(),
            problem,
        })?;
        Ok(PageSpec {
            title: title.to_string(),
            element_id: element_id.to_string(),
            filename: filename.to_string(),
        })
    }

    /// Best-effort label for reporting a page that failed validation.
    pub fn label(&self) -> Option<&str> {
        self.filename
            .as_deref()
            .or(self.title.as_deref())
            .or(self.element_id.as_deref())
            .filter(|s| !s.is_empty())
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, PageError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PageError::MissingField(field)),
    }
}

/// Read and parse a page document from `path`.
pub fn load_document(path: &Path) -> Result<PageDocument, LoadError> {
    read_json(path)
}

/// Read a JSON file into `T`, mapping failures onto [`LoadError`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::InvalidFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a page document from a JSON string.
pub fn parse_document(json: &str) -> Result<PageDocument, serde_json::Error> {
    serde_json::from_str(json)
}
