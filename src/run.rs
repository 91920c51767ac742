//! Single entry point for all three tools.
//!
//! The CLI resolves flags and config into a [`Mode`] and hands it to
//! [`execute`]; nothing below this point reads from the terminal.

use crate::generate::{self, GenerateError, GenerateOptions, GenerateReport};
use crate::links::{self, LinkRewrite, RewriteError, RewriteReport};
use crate::mapper::{self, MapError, MapOptions, MapReport};
use crate::render::RenderContext;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
    #[error(transparent)]
    Map(#[from] MapError),
}

/// What to do, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Generate(GenerateOptions),
    RewriteLinks { dir: PathBuf, rewrite: LinkRewrite },
    Map(MapOptions),
}

#[derive(Debug)]
pub enum Outcome {
    Generated(GenerateReport),
    Rewrote(RewriteReport),
    Mapped(MapReport),
}

pub fn execute(mode: &Mode, ctx: &RenderContext) -> Result<Outcome, RunError> {
    let outcome = match mode {
        Mode::Generate(options) => Outcome::Generated(generate::run(options, ctx)?),
        Mode::RewriteLinks { dir, rewrite } => Outcome::Rewrote(links::rewrite_dir(dir, rewrite)?),
        Mode::Map(options) => Outcome::Mapped(mapper::run(options)?),
    };
    Ok(outcome)
}
