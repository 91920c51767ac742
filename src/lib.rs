//! # Diagram Pages
//!
//! Tooling for the static site behind an interactive diagram. Each clickable
//! text element of the diagram opens a page of its own; this crate creates
//! those pages, keeps their links pointing at the right place as the site
//! moves around, and builds the navigation table the diagram viewer loads.
//!
//! # Tools
//!
//! ```text
//! generate       pages.json     →  pages/*.html + pages/index.html
//! rewrite-links  pages/*.html   →  pages/*.html      (literal find/replace, in place)
//! map            mappings.json  →  navigation_dictionary.json + navigation_code.js
//! ```
//!
//! Each tool is a plain function from resolved options to a report. The CLI
//! only parses flags, layers them over `diagram-pages.toml`, and prints the
//! report; see [`run::execute`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`loader`] | Reads and validates the JSON page document |
//! | [`template`] | The page template and its `{{PLACEHOLDER}}` tokens |
//! | [`render`] | Single-pass placeholder substitution for one page |
//! | [`writer`] | Creates the output directory and writes files |
//! | [`index`] | Renders `index.html` listing every written page (Maud) |
//! | [`generate`] | The generate run: load, render, write, index, report |
//! | [`links`] | In-place link rewriting across a directory of pages |
//! | [`mapper`] | Element → page navigation table for the diagram viewer |
//! | [`naming`] | Output filename safety checks |
//! | [`types`] | Page specs and written-page records |
//! | [`config`] | `diagram-pages.toml` loading, merging and validation |
//! | [`logging`] | `tracing` subscriber setup for `-v` and `DIAGRAM_PAGES_LOG` |
//! | [`output`] | CLI output formatting for every report |
//! | [`run`] | Dispatches a resolved [`run::Mode`] to its tool |
//!
//! # Design Decisions
//!
//! ## Pages Are Written Once
//!
//! Generated pages are a starting point that gets edited by hand. Nothing
//! here regenerates a page to change it; link moves go through [`links`],
//! which touches only the exact string it was asked to replace.
//!
//! ## Substitution Is Single-Pass
//!
//! Titles are free text and may themselves contain `{{TITLE}}`. The renderer
//! scans the template once and never re-reads substituted text, so a value
//! can't expand into another placeholder.
//!
//! ## Bad Entries Don't Stop the Run
//!
//! A page entry with a missing field, or a file that can't be written, is
//! reported and skipped. Only an unreadable or malformed document aborts.

pub mod config;
pub mod generate;
pub mod index;
pub mod links;
pub mod loader;
pub mod logging;
pub mod mapper;
pub mod naming;
pub mod output;
pub mod render;
pub mod run;
pub mod template;
pub mod types;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_helpers;
