//! The `index.html` page listing every generated page.
//!
//! Built with maud, so titles and element ids are escaped here even though
//! the page bodies themselves are literal substitutions.

use crate::types::PageRecord;
use crate::writer::{self, WriteError};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::{Path, PathBuf};

pub const INDEX_FILENAME: &str = "index.html";

const INDEX_CSS: &str = include_str!("../static/index.css");

/// Render the index for `records`, in the order given.
pub fn render_index(records: &[PageRecord]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Diagram Pages Index" }
                style { (PreEscaped(INDEX_CSS)) }
            }
            body {
                div.container {
                    h1 { "Diagram Pages Index" }
                    a.back-link href="../index.html" { "← Back to Diagram" }
                    p.stats { (page_count(records.len())) " generated from diagram elements" }
                    ul.page-list {
                        @for record in records {
                            li.page-item {
                                a href=(record.filename) { (record.title) }
                                div.page-id { (record.element_id) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn page_count(n: usize) -> String {
    match n {
        1 => "1 page".to_string(),
        n => format!("{n} pages"),
    }
}

/// Render and write `dir/index.html`, replacing any previous index.
pub fn write_index(dir: &Path, records: &[PageRecord]) -> Result<PathBuf, WriteError> {
    let markup = render_index(records);
    writer::write_file(dir, INDEX_FILENAME, &markup.into_string())
}
