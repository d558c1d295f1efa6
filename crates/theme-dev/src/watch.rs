//! Filesystem watching for token files.
//!
//! Wraps notify-debouncer-mini so that the rapid create/write/rename bursts an
//! editor produces on save reach the session as a handful of path events.
//! No filtering happens here; relevance is decided by the session.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::{DebouncedEvent, Debouncer, new_debouncer};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::error::{Error, Result};

/// Events emitted by the filesystem watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A path was created, modified or removed
    Changed(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::Changed(path) => path,
        }
    }
}

/// Configuration for the filesystem watcher.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Debounce duration in milliseconds
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Filesystem watcher fed by glob patterns.
pub struct FileWatcher {
    /// The debouncer wrapping the underlying watcher
    debouncer: Debouncer<notify::RecommendedWatcher>,

    /// Receiver for watch events
    event_rx: mpsc::UnboundedReceiver<WatchEvent>,

    /// Directories registered so far
    roots: Vec<PathBuf>,
}

impl FileWatcher {
    /// Create a watcher with nothing registered yet.
    pub fn new(config: WatchConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let debouncer = new_debouncer(
            Duration::from_millis(config.debounce_ms),
            move |res: std::result::Result<Vec<DebouncedEvent>, notify::Error>| match res {
                Ok(events) => {
                    for event in events {
                        debug!(path = %event.path.display(), "File change detected");
                        if event_tx.send(WatchEvent::Changed(event.path)).is_err() {
                            // Receiver dropped, watcher should stop
                            debug!("Event receiver dropped, stopping watcher");
                            break;
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Filesystem watch error");
                }
            },
        )
        .map_err(|e| Error::Watch(format!("failed to create filesystem watcher: {}", e)))?;

        Ok(Self {
            debouncer,
            event_rx,
            roots: Vec::new(),
        })
    }

    /// Watch everything a glob pattern could match.
    ///
    /// The literal directory prefix of the pattern (everything before the
    /// first wildcard component) is watched recursively. Registering a root
    /// that is already covered is a no-op.
    pub fn add(&mut self, pattern: &str) -> Result<()> {
        glob::Pattern::new(pattern).map_err(|e| Error::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let root = glob_root(pattern);
        if self.roots.iter().any(|existing| root.starts_with(existing)) {
            debug!(path = %root.display(), "Already watching");
            return Ok(());
        }

        self.debouncer
            .watcher()
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|e| Error::Watch(format!("failed to watch {}: {}", root.display(), e)))?;

        info!(path = %root.display(), pattern, "Watching token files");
        self.roots.push(root);
        Ok(())
    }

    /// Directories currently being watched.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Receive the next watch event.
    ///
    /// Returns `None` if the watcher has been stopped.
    pub async fn recv(&mut self) -> Option<WatchEvent> {
        self.event_rx.recv().await
    }
}

/// Longest leading run of path components that contain no glob metacharacters.
///
/// A pattern without wildcards names a file, so its parent directory is used.
pub fn glob_root(pattern: &str) -> PathBuf {
    let path = Path::new(pattern);
    let mut root = PathBuf::new();
    let mut saw_wildcard = false;

    for component in path.components() {
        let text = component.as_os_str().to_string_lossy();
        if text.contains(['*', '?', '[', '{']) {
            saw_wildcard = true;
            break;
        }
        root.push(component.as_os_str());
    }

    if !saw_wildcard {
        root = path.parent().map(Path::to_path_buf).unwrap_or_default();
    }

    if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root
    }
}
