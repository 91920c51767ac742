//! Shared types passed between the loader, renderer, writer and index builder.
//!
//! A generation run moves each page through three shapes:
//!
//! ```text
//! PageSpec  →  RenderedPage  →  PageRecord
//! (validated)  (full HTML)      (summary kept for the index)
//! ```

use serde::Serialize;
use std::path::PathBuf;

/// A validated description of one page to generate.
///
/// Built by [`crate::loader::RawPage::validate`]; every field is non-empty and
/// `filename` is a single plain path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    pub title: String,
    pub element_id: String,
    pub filename: String,
}

/// A page with its template fully substituted, ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub title: String,
    pub element_id: String,
    pub filename: String,
    /// `output_dir/filename`
    pub path: PathBuf,
    pub content: String,
}

/// Summary of a page that was written to disk.
///
/// Kept after the write so the index page can link to it; the page content
/// itself is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub title: String,
    pub filename: String,
    pub path: PathBuf,
    pub element_id: String,
}

impl RenderedPage {
    /// Drop the content, keeping the summary.
    pub fn into_record(self) -> PageRecord {
        PageRecord {
            title: self.title,
            filename: self.filename,
            path: self.path,
            element_id: self.element_id,
        }
    }
}
