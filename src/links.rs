//! In-place link rewriting across generated pages.
//!
//! Pages are written once and then hand-edited, so moving the diagram means
//! patching hard-coded `href`s in every file rather than regenerating. This
//! module does a literal (non-regex) find/replace over each `*.html` file
//! directly inside a directory.
//!
//! There is no transaction: a crash midway leaves some files patched. Files
//! without the source string are left alone, so running the same rewrite
//! again after it has been applied changes nothing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("directory not found: {0}")]
    DirNotFound(PathBuf),
    #[error("the text to replace must not be empty")]
    EmptySource,
    #[error("unknown preset {0:?} (expected one of: {1})")]
    UnknownPreset(String, String),
    #[error("IO error listing {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// A literal `from` → `to` replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewrite {
    pub from: String,
    pub to: String,
}

/// Named rewrites for the moves the site has already been through.
pub const PRESETS: &[(&str, &str, &str)] = &[
    (
        "fix-back-links",
        r#"href="../index.html""#,
        r#"href="../diagram/index.html""#,
    ),
    (
        "point-to-diagram",
        r#"href="../diagram/index.html""#,
        r#"href="../diagram/diagram.html""#,
    ),
];

impl LinkRewrite {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Result<Self, RewriteError> {
        let from = from.into();
        if from.is_empty() {
            return Err(RewriteError::EmptySource);
        }
        Ok(Self { from, to: to.into() })
    }

    pub fn preset(name: &str) -> Result<Self, RewriteError> {
        PRESETS
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, from, to)| Self {
                from: from.to_string(),
                to: to.to_string(),
            })
            .ok_or_else(|| {
                let names: Vec<&str> = PRESETS.iter().map(|(n, _, _)| *n).collect();
                RewriteError::UnknownPreset(name.to_string(), names.join(", "))
            })
    }

    /// Apply to a string, returning the new text and how many occurrences
    /// were replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = text.matches(self.from.as_str()).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        (text.replace(self.from.as_str(), &self.to), count)
    }
}

/// What happened to one file.
#[derive(Debug)]
pub enum FileOutcome {
    Updated { occurrences: usize },
    Unchanged,
    Failed(io::Error),
}

#[derive(Debug)]
pub struct RewriteReport {
    pub dir: PathBuf,
    pub rewrite: LinkRewrite,
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl RewriteReport {
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Updated { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Unchanged))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// `*.html` files directly inside `dir`, sorted by name.
pub fn html_files(dir: &Path) -> Result<Vec<PathBuf>, RewriteError> {
    if !dir.is_dir() {
        return Err(RewriteError::DirNotFound(dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| RewriteError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let is_html = entry
            .path()
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("html"));
        if entry.file_type().is_file() && is_html {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Apply `rewrite` to one file in place.
pub fn rewrite_file(path: &Path, rewrite: &LinkRewrite) -> io::Result<usize> {
    let content = fs::read_to_string(path)?;
    let (updated, count) = rewrite.apply(&content);
    if count > 0 {
        fs::write(path, updated)?;
    }
    Ok(count)
}

/// Apply `rewrite` to every page in `dir`, continuing past per-file errors.
pub fn rewrite_dir(dir: &Path, rewrite: &LinkRewrite) -> Result<RewriteReport, RewriteError> {
    let files = html_files(dir)?;
    debug!(dir = %dir.display(), files = files.len(), "rewriting links");

    let mut report = RewriteReport {
        dir: dir.to_path_buf(),
        rewrite: rewrite.clone(),
        files: Vec::new(),
    };
    for path in files {
        let outcome = match rewrite_file(&path, rewrite) {
            Ok(0) => FileOutcome::Unchanged,
            Ok(occurrences) => {
                info!(file = %path.display(), occurrences, "updated links");
                FileOutcome::Updated { occurrences }
            }
            Err(error) => {
                warn!(file = %path.display(), %error, "failed to rewrite file");
                FileOutcome::Failed(error)
            }
        };
        report.files.push((path, outcome));
    }
    Ok(report)
}
