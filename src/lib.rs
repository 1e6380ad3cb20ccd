//! gitlanes: lay out commit histories as branch/merge graphs
//!
//! The heart of the crate is the commit graph layout engine
//! ([`artifacts::graph::layout`]): it turns a most-recent-first commit list
//! into per-commit lanes and routes, the data behind `git log --graph`.
//! Around it sit a history reader, SVG and terminal renderers, and the
//! commands of the `gitlanes` binary.

pub mod areas;
pub mod artifacts;
pub mod commands;

use crate::artifacts::core::stdout_is_terminal;

/// When to colour terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorMode::Auto => stdout_is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
