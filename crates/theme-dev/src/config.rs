//! Theme configuration.
//!
//! Options come from `theme.toml` in the project root (or an explicit
//! `--config` file) and may be overridden from the command line:
//!
//! ```toml
//! tokens_glob = "resources/design-tokens/**/*.json"
//! output_path = "resources/css/theme.css"
//! tokens_dir = "resources/design-tokens"
//! ```
//!
//! All three are required. They are resolved against the project root before
//! use.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "theme.toml";

/// Default debounce duration for filesystem events (in milliseconds).
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Unresolved theme options as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeOptions {
    /// Glob matching the token files to watch
    pub tokens_glob: Option<String>,

    /// Where the generated stylesheet is written
    pub output_path: Option<String>,

    /// Directory the token files are read from
    pub tokens_dir: Option<String>,

    /// Debounce window for filesystem events in dev mode
    pub debounce_ms: Option<u64>,
}

impl ThemeOptions {
    /// Parse options from TOML text. `path` is only used for error messages.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load options from an explicit config file, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    /// Load `theme.toml` from the project root, or defaults if it is absent.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            debug!(path = %path.display(), "Loading theme config");
            Self::load(&path)
        } else {
            debug!(root = %root.display(), "No theme config found, using command line options");
            Ok(Self::default())
        }
    }

    /// Overlay `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: ThemeOptions) -> Self {
        Self {
            tokens_glob: overrides.tokens_glob.or(self.tokens_glob),
            output_path: overrides.output_path.or(self.output_path),
            tokens_dir: overrides.tokens_dir.or(self.tokens_dir),
            debounce_ms: overrides.debounce_ms.or(self.debounce_ms),
        }
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS)
    }

    /// Resolve every path option against `root`.
    ///
    /// Fails with [`Error::MissingOption`] if any required option is absent.
    pub fn resolve(&self, root: &Path) -> Result<ThemePaths> {
        let tokens_glob = required(&self.tokens_glob, "tokens_glob")?;
        let output_path = required(&self.output_path, "output_path")?;
        let tokens_dir = required(&self.tokens_dir, "tokens_dir")?;

        Ok(ThemePaths {
            tokens_glob: resolve_path(root, tokens_glob)
                .to_string_lossy()
                .into_owned(),
            tokens_dir: resolve_path(root, tokens_dir),
            output_path: resolve_path(root, output_path),
        })
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingOption(name)),
    }
}

/// Absolute locations used by the build hook and the watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePaths {
    /// Absolute glob pattern for the token files
    pub tokens_glob: String,

    /// Absolute tokens directory
    pub tokens_dir: PathBuf,

    /// Absolute path of the generated stylesheet
    pub output_path: PathBuf,
}

impl ThemePaths {
    /// Whether a filesystem change at `path` should trigger a regeneration.
    ///
    /// The path must be a `.json` file strictly inside the tokens directory
    /// and must not be the generated stylesheet itself.
    pub fn is_relevant(&self, path: &Path) -> bool {
        path != self.output_path
            && path != self.tokens_dir
            && path.starts_with(&self.tokens_dir)
            && path.extension().is_some_and(|ext| ext == "json")
    }
}

/// Join `path` onto `root` (unless already absolute) and fold `.` and `..`
/// components without touching the filesystem.
pub fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let joined = root.join(path);
    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}
