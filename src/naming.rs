//! Filename rules for generated pages.
//!
//! Page filenames come straight from the input document and are joined onto
//! the output directory, so they must name a file *inside* that directory:
//!
//! - `"observer.html"` → accepted
//! - `"../viewer.html"` → rejected (parent segment)
//! - `"sub/page.html"` → rejected (more than one component)
//! - `"/etc/passwd"` → rejected (absolute)
//! - `"."`, `".."`, `""` → rejected

use std::path::{Component, Path};

/// Why a filename was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameProblem {
    Empty,
    Separator,
    Traversal,
    Nul,
}

impl std::fmt::Display for FilenameProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            FilenameProblem::Empty => "filename is empty",
            FilenameProblem::Separator => "filename contains a path separator",
            FilenameProblem::Traversal => "filename is a relative path segment",
            FilenameProblem::Nul => "filename contains a NUL byte",
        };
        f.write_str(msg)
    }
}

/// Check that `name` is a single normal path component.
pub fn check_filename(name: &str) -> Result<(), FilenameProblem> {
    if name.trim().is_empty() {
        return Err(FilenameProblem::Empty);
    }
    if name.contains('\0') {
        return Err(FilenameProblem::Nul);
    }
    // Backslash is a separator on Windows only, but a page written from the
    // same input must land in the same place on every platform.
    if name.contains('/') || name.contains('\\') {
        return Err(FilenameProblem::Separator);
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        (Some(Component::CurDir | Component::ParentDir), None) => Err(FilenameProblem::Traversal),
        _ => Err(FilenameProblem::Separator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_html_filename() {
        assert_eq!(check_filename("observer.html"), Ok(()));
    }

    #[test]
    fn dashes_and_dots_inside_name() {
        assert_eq!(check_filename("atavic-theory.v2.html"), Ok(()));
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(check_filename(""), Err(FilenameProblem::Empty));
        assert_eq!(check_filename("   "), Err(FilenameProblem::Empty));
    }

    #[test]
    fn parent_segment_is_rejected() {
        assert_eq!(check_filename(".."), Err(FilenameProblem::Traversal));
        assert_eq!(
            check_filename("../viewer.html"),
            Err(FilenameProblem::Separator)
        );
    }

    #[test]
    fn current_dir_is_rejected() {
        assert_eq!(check_filename("."), Err(FilenameProblem::Traversal));
    }

    #[test]
    fn nested_path_is_rejected() {
        assert_eq!(
            check_filename("sub/page.html"),
            Err(FilenameProblem::Separator)
        );
        assert_eq!(
            check_filename("sub\\page.html"),
            Err(FilenameProblem::Separator)
        );
    }

    #[test]
    fn absolute_path_is_rejected() {
        assert_eq!(
            check_filename("/etc/passwd"),
            Err(FilenameProblem::Separator)
        );
    }

    #[test]
    fn nul_byte_is_rejected() {
        assert_eq!(check_filename("a\0.html"), Err(FilenameProblem::Nul));
    }
}
