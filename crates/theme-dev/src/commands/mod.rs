//! Command implementations for the theme CLI
//!
//! Each command module handles the CLI interface and delegates to the
//! theme_dev library for the actual work.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use theme_dev::ThemeOptions;

pub mod build;
pub mod dev;

/// Arguments shared by every command.
pub struct ThemeArgs {
    pub root: PathBuf,
    pub config: Option<PathBuf>,
    pub overrides: ThemeOptions,
}

impl ThemeArgs {
    /// Config file options with command line overrides applied.
    ///
    /// An explicit config path is taken as given, relative to the current
    /// directory. Without one, `theme.toml` is looked up in `root`.
    pub fn options(&self, root: &Path) -> Result<ThemeOptions> {
        let file_options = match &self.config {
            Some(path) => ThemeOptions::load(path)?,
            None => ThemeOptions::discover(root)?,
        };
        Ok(file_options.merge(self.overrides.clone()))
    }

    /// Project root, canonicalized so paths line up with watcher events.
    pub fn canonical_root(&self) -> Result<PathBuf> {
        self.root
            .canonicalize()
            .with_context(|| format!("Project root not found: {}", self.root.display()))
    }
}
