//! CLI output formatting for every tool.
//!
//! Output is information-first: each page or element leads with its
//! positional index and title, with filenames and ids as indented context
//! lines, and every run ends with a one-line summary of successes, skips and
//! failures.
//!
//! ## Generate
//!
//! ```text
//! Pages → pages/
//! 001 Observer Theory → observer.html
//!     Element: text-observer
//!
//! Skipped
//!     #2 (b.html): missing required field `filename`
//!
//! Index → pages/index.html
//!
//! Generated 1 of 2 pages (1 skipped, 0 failed)
//! ```
//!
//! ## Rewrite links
//!
//! ```text
//! Rewriting href="../index.html" → href="../diagram/index.html" in pages/
//! 001 observer.html: 2 links updated
//! 002 ontology.html: unchanged
//!
//! Updated 1 of 2 files (1 unchanged, 0 failed)
//! ```
//!
//! Each report has a `format_*` function (returns `Vec<String>`, no I/O) and a
//! `print_*` wrapper that writes to stdout.

use crate::generate::GenerateReport;
use crate::links::{FileOutcome, RewriteReport};
use crate::mapper::{MapReport, TEXT_ELEMENTS};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn display_dir(dir: &Path) -> String {
    let shown = dir.display().to_string();
    if shown.ends_with('/') {
        shown
    } else {
        format!("{shown}/")
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_report(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    if report.total == 0 {
        lines.push("No pages found in the input document".to_string());
        return lines;
    }

    lines.push(format!("Pages \u{2192} {}", display_dir(&report.output_dir)));
    for (i, record) in report.written.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            record.title,
            record.filename
        ));
        lines.push(format!("{}Element: {}", indent(1), record.element_id));
    }

    if !report.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skip in &report.skipped {
            let label = match &skip.label {
                Some(l) => format!(" ({l})"),
                None => String::new(),
            };
            lines.push(format!(
                "{}#{}{}: {}",
                indent(1),
                skip.position,
                label,
                skip.error
            ));
        }
    }

    if !report.failed.is_empty() {
        lines.push(String::new());
        lines.push("Failed".to_string());
        for failure in &report.failed {
            lines.push(format!("{}{}: {}", indent(1), failure.filename, failure.error));
        }
    }

    if let Some(index) = &report.index {
        lines.push(String::new());
        lines.push(format!("Index \u{2192} {}", index.display()));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} of {} pages ({} skipped, {} failed)",
        report.written.len(),
        report.total,
        report.skipped.len(),
        report.failed.len()
    ));
    lines
}

pub fn print_generate_report(report: &GenerateReport) {
    for line in format_generate_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Rewrite links
// ============================================================================

pub fn format_rewrite_report(report: &RewriteReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Rewriting {} \u{2192} {} in {}",
        report.rewrite.from,
        report.rewrite.to,
        display_dir(&report.dir)
    )];

    if report.files.is_empty() {
        lines.push(format!("{}(no .html files)", indent(1)));
    }

    for (i, (path, outcome)) in report.files.iter().enumerate() {
        let status = match outcome {
            FileOutcome::Updated { occurrences: 1 } => "1 link updated".to_string(),
            FileOutcome::Updated { occurrences } => format!("{occurrences} links updated"),
            FileOutcome::Unchanged => "unchanged".to_string(),
            FileOutcome::Failed(e) => format!("failed ({e})"),
        };
        lines.push(format!("{} {}: {}", format_index(i + 1), file_name(path), status));
    }

    lines.push(String::new());
    lines.push(format!(
        "Updated {} of {} files ({} unchanged, {} failed)",
        report.updated(),
        report.files.len(),
        report.unchanged(),
        report.failed()
    ));
    lines
}

pub fn print_rewrite_report(report: &RewriteReport) {
    for line in format_rewrite_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Element mapping
// ============================================================================

pub fn format_map_report(report: &MapReport) -> Vec<String> {
    let mut lines = vec!["Mappings".to_string()];

    for (i, (element_id, entry)) in report.navigation.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            entry.name,
            entry.url
        ));
        lines.push(format!(
            "{}Element: {} ({})",
            indent(1),
            element_id,
            entry.original
        ));
    }
    if report.navigation.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }

    for id in &report.issues.unknown_elements {
        lines.push(format!("Ignored unknown element: {id}"));
    }
    for id in &report.issues.missing_url {
        lines.push(format!("Skipped {id}: no url"));
    }
    for path in &report.outputs {
        lines.push(format!("Saved: {}", path.display()));
    }

    lines.push(String::new());
    lines.push(format!(
        "Mapped {} of {} elements",
        report.navigation.len(),
        TEXT_ELEMENTS.len()
    ));
    lines
}

pub fn print_map_report(report: &MapReport) {
    for line in format_map_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{FailedPage, SkippedPage};
    use crate::links::LinkRewrite;
    use crate::loader::PageError;
    use crate::mapper::{MappingIssues, NavigationMap};
    use crate::types::PageRecord;
    use crate::writer::WriteError;
    use std::io;
    use std::path::PathBuf;

    fn record(title: &str, element_id: &str, filename: &str) -> PageRecord {
        PageRecord {
            title: title.into(),
            filename: filename.into(),
            path: PathBuf::from("pages").join(filename),
            element_id: element_id.into(),
        }
    }

    fn report(total: usize) -> GenerateReport {
        GenerateReport {
            output_dir: PathBuf::from("pages"),
            total,
            written: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            index: None,
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(999), "999");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn display_dir_adds_single_slash() {
        assert_eq!(display_dir(Path::new("pages")), "pages/");
        assert_eq!(display_dir(Path::new("pages/")), "pages/");
    }

    #[test]
    fn generate_lists_pages_and_summary() {
        let mut r = report(1);
        r.written.push(record("Observer Theory", "text-observer", "observer.html"));
        r.index = Some(PathBuf::from("pages/index.html"));

        let lines = format_generate_report(&r);

        assert_eq!(lines[0], "Pages \u{2192} pages/");
        assert_eq!(lines[1], "001 Observer Theory \u{2192} observer.html");
        assert_eq!(lines[2], "    Element: text-observer");
        assert!(lines.contains(&"Index \u{2192} pages/index.html".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Generated 1 of 1 pages (0 skipped, 0 failed)"
        );
    }

    #[test]
    fn generate_lists_skips_and_failures() {
        let mut r = report(3);
        r.written.push(record("A", "a", "a.html"));
        r.skipped.push(SkippedPage {
            position: 2,
            label: Some("B".into()),
            error: PageError::MissingField("filename"),
        });
        r.failed.push(FailedPage {
            filename: "c.html".into(),
            error: WriteError::Write {
                path: PathBuf::from("pages/c.html"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        });

        let lines = format_generate_report(&r);

        assert!(lines.contains(&"Skipped".to_string()));
        assert!(lines.contains(&"    #2 (B): missing required field `filename`".to_string()));
        assert!(lines.contains(&"Failed".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("    c.html: could not write")));
        assert_eq!(
            lines.last().unwrap(),
            "Generated 1 of 3 pages (1 skipped, 1 failed)"
        );
    }

    #[test]
    fn generate_empty_document() {
        let lines = format_generate_report(&report(0));
        assert_eq!(lines, vec!["No pages found in the input document"]);
    }

    #[test]
    fn rewrite_lines_per_file() {
        let report = RewriteReport {
            dir: PathBuf::from("pages"),
            rewrite: LinkRewrite::new("old", "new").unwrap(),
            files: vec![
                (PathBuf::from("pages/a.html"), FileOutcome::Updated { occurrences: 2 }),
                (PathBuf::from("pages/b.html"), FileOutcome::Updated { occurrences: 1 }),
                (PathBuf::from("pages/c.html"), FileOutcome::Unchanged),
            ],
        };

        let lines = format_rewrite_report(&report);

        assert_eq!(lines[0], "Rewriting old \u{2192} new in pages/");
        assert_eq!(lines[1], "001 a.html: 2 links updated");
        assert_eq!(lines[2], "002 b.html: 1 link updated");
        assert_eq!(lines[3], "003 c.html: unchanged");
        assert_eq!(
            lines.last().unwrap(),
            "Updated 2 of 3 files (1 unchanged, 0 failed)"
        );
    }

    #[test]
    fn rewrite_empty_directory() {
        let report = RewriteReport {
            dir: PathBuf::from("pages"),
            rewrite: LinkRewrite::new("old", "new").unwrap(),
            files: Vec::new(),
        };
        let lines = format_rewrite_report(&report);
        assert_eq!(lines[1], "    (no .html files)");
    }

    #[test]
    fn map_lists_entries_and_issues() {
        let mut navigation = NavigationMap::new();
        navigation.insert("text-observer", Some("Observer Theory"), "pages/observer.html");
        let report = MapReport {
            navigation,
            issues: MappingIssues {
                unknown_elements: vec!["text-bogus".into()],
                missing_url: vec!["text-ontology".into()],
            },
            outputs: vec![PathBuf::from("./navigation_dictionary.json")],
        };

        let lines = format_map_report(&report);

        assert_eq!(lines[1], "001 Observer Theory \u{2192} pages/observer.html");
        assert_eq!(lines[2], "    Element: text-observer (OBSERVER)");
        assert!(lines.contains(&"Ignored unknown element: text-bogus".to_string()));
        assert!(lines.contains(&"Skipped text-ontology: no url".to_string()));
        assert!(lines.contains(&"Saved: ./navigation_dictionary.json".to_string()));
        assert_eq!(lines.last().unwrap(), "Mapped 1 of 19 elements");
    }
}
