//! Page generation: JSON document → HTML pages → index.
//!
//! ```text
//! pages.json ──load──▶ RawPage* ──validate──▶ PageSpec ──render──▶ RenderedPage
//!                                                                     │
//!                             index.html ◀──index── PageRecord* ◀──write
//! ```
//!
//! Only loading the document can abort a run. After that every page is on
//! its own: an entry with a missing field is skipped, a page that can't be
//! written is recorded as failed, and the rest of the batch carries on. The
//! index is written when at least one page made it to disk.

use crate::index;
use crate::loader::{self, LoadError, PageDocument, PageError};
use crate::render::{self, RenderContext};
use crate::template::Template;
use crate::types::PageRecord;
use crate::writer::{self, WriteError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Everything a generation run needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub write_index: bool,
}

/// An entry that never got rendered.
#[derive(Debug)]
pub struct SkippedPage {
    /// 1-based position in the `pages` array.
    pub position: usize,
    pub label: Option<String>,
    pub error: PageError,
}

/// A page (or the index) that was rendered but could not be written.
#[derive(Debug)]
pub struct FailedPage {
    pub filename: String,
    pub error: WriteError,
}

#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// Number of entries in the input document.
    pub total: usize,
    pub written: Vec<PageRecord>,
    pub skipped: Vec<SkippedPage>,
    pub failed: Vec<FailedPage>,
    pub index: Option<PathBuf>,
}

impl GenerateReport {
    fn new(output_dir: &Path, total: usize) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            total,
            written: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            index: None,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Load `options.input` and generate every page it describes.
pub fn run(
    options: &GenerateOptions,
    ctx: &RenderContext,
) -> Result<GenerateReport, GenerateError> {
    debug!(input = %options.input.display(), "loading page document");
    let document = loader::load_document(&options.input)?;
    Ok(generate_pages(
        &document,
        &options.output_dir,
        ctx,
        options.write_index,
    ))
}

/// Generate pages from an already-loaded document.
pub fn generate_pages(
    document: &PageDocument,
    output_dir: &Path,
    ctx: &RenderContext,
    write_index: bool,
) -> GenerateReport {
    let template = Template::from_document(document.template.as_deref());
    let mut report = GenerateReport::new(output_dir, document.pages.len());

    for (i, raw) in document.pages.iter().enumerate() {
        let spec = match raw.validate() {
            Ok(spec) => spec,
            Err(error) => {
                warn!(position = i + 1, page = ?raw.label(), %error, "skipping page");
                report.skipped.push(SkippedPage {
                    position: i + 1,
                    label: raw.label().map(String::from),
                    error,
                });
                continue;
            }
        };

        let page = render::render_page(&template, &spec, ctx, output_dir);
        match writer::write_page(output_dir, page) {
            Ok(record) => {
                info!(file = %record.filename, title = %record.title, "created page");
                report.written.push(record);
            }
            Err(error) => {
                warn!(file = %spec.filename, %error, "failed to write page");
                report.failed.push(FailedPage {
                    filename: spec.filename,
                    error,
                });
            }
        }
    }

    if write_index && !report.written.is_empty() {
        match index::write_index(output_dir, &report.written) {
            Ok(path) => {
                info!(path = %path.display(), "created index page");
                report.index = Some(path);
            }
            Err(error) => {
                warn!(%error, "failed to write index page");
                report.failed.push(FailedPage {
                    filename: index::INDEX_FILENAME.to_string(),
                    error,
                });
            }
        }
    }

    report
}
