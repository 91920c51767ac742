//! Shared test utilities for the diagram-pages test suite.
//!
//! Builds input documents the way users write them (JSON text, camelCase
//! keys) so tests go through the same parsing path as real runs.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let doc = document(None, &[page_json("Observer Theory", "text-observer", "observer.html")]);
//! let report = generate_pages(&doc, tmp.path(), &fixed_context(), true);
//! assert_eq!(written_filenames(&report), vec!["observer.html"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::generate::GenerateReport;
use crate::loader::{self, PageDocument};
use crate::render::RenderContext;

/// What `{{TIMESTAMP}}` renders as under [`fixed_context`].
pub const FIXED_TIMESTAMP: &str = "2025-01-15 14:30:00";

// =========================================================================
// Input builders
// =========================================================================

/// A render context pinned to [`FIXED_TIMESTAMP`].
pub fn fixed_context() -> RenderContext {
    RenderContext::at(
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap(),
    )
}

/// JSON for one complete `pages` entry.
pub fn page_json(title: &str, element_id: &str, filename: &str) -> String {
    serde_json::json!({
        "title": title,
        "elementId": element_id,
        "filename": filename,
    })
    .to_string()
}

/// JSON text of a whole document. `pages` entries are spliced in verbatim so
/// tests can hand-write broken ones.
pub fn document_json(template: Option<&str>, pages: &[String]) -> String {
    let pages = pages.join(",");
    match template {
        Some(t) => format!(
            r#"{{"template": {}, "pages": [{pages}]}}"#,
            serde_json::Value::String(t.to_string())
        ),
        None => format!(r#"{{"pages": [{pages}]}}"#),
    }
}

/// Parse a document built from `pages`. Panics on malformed JSON.
pub fn document(template: Option<&str>, pages: &[String]) -> PageDocument {
    let json = document_json(template, pages);
    loader::parse_document(&json).unwrap_or_else(|e| panic!("bad test document: {e}\n{json}"))
}

/// Write a document to `dir/pages.json` and return its path.
pub fn write_document(dir: &Path, template: Option<&str>, pages: &[String]) -> PathBuf {
    let path = dir.join("pages.json");
    fs::write(&path, document_json(template, pages)).unwrap();
    path
}

// =========================================================================
// Report extractors
// =========================================================================

/// Filenames of written pages, in write order.
pub fn written_filenames(report: &GenerateReport) -> Vec<&str> {
    report.written.iter().map(|r| r.filename.as_str()).collect()
}
