//! Watch session state machine.
//!
//! A session serializes regeneration passes for one dev server:
//!
//! ```text
//!            request                      request
//!   Idle ─────────────▶ Running ─────────────────▶ RunningWithPending
//!    ▲                    │  ▲                            │
//!    └── pass completes ──┘  └────── pass completes ──────┘
//! ```
//!
//! A request that arrives while a pass is in flight is only recorded. When the
//! pass completes, one more pass runs and absorbs every request recorded in the
//! meantime. Passes always regenerate from the whole tokens directory, so
//! folding requests together loses nothing.
//!
//! The session is single-threaded. Its state lives in a `Cell` and is only
//! touched between awaits, so no two transitions can interleave.

use std::cell::Cell;
use std::path::Path;

use tracing::debug;

use crate::config::ThemePaths;
use crate::reporter::Reporter;
use crate::transform::{TransformRequest, Transformer};

/// Scheduling state of a [`WatchSession`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No pass in flight
    #[default]
    Idle,
    /// A pass is in flight
    Running,
    /// A pass is in flight and another was requested meanwhile
    RunningWithPending,
}

impl SessionState {
    /// Transition for a new regeneration request.
    ///
    /// Returns the next state and whether the caller must start a pass now.
    pub fn request(self) -> (SessionState, bool) {
        match self {
            SessionState::Idle => (SessionState::Running, true),
            SessionState::Running | SessionState::RunningWithPending => {
                (SessionState::RunningWithPending, false)
            }
        }
    }

    /// Transition for a finished pass.
    ///
    /// Returns the next state and whether another pass must run immediately.
    pub fn complete(self) -> (SessionState, bool) {
        match self {
            SessionState::RunningWithPending => (SessionState::Running, true),
            SessionState::Running | SessionState::Idle => (SessionState::Idle, false),
        }
    }

    pub fn is_running(self) -> bool {
        self != SessionState::Idle
    }
}

/// Regeneration scheduler for one dev server.
pub struct WatchSession<T, R> {
    paths: ThemePaths,
    request: TransformRequest,
    transformer: T,
    reporter: R,
    state: Cell<SessionState>,
    passes: Cell<u64>,
}

impl<T: Transformer, R: Reporter> WatchSession<T, R> {
    pub fn new(paths: ThemePaths, transformer: T, reporter: R) -> Self {
        let request = TransformRequest::from(&paths);
        Self {
            paths,
            request,
            transformer,
            reporter,
            state: Cell::new(SessionState::Idle),
            passes: Cell::new(0),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Number of passes that have finished, successfully or not.
    pub fn passes(&self) -> u64 {
        self.passes.get()
    }

    /// React to a created, modified or removed file.
    ///
    /// Irrelevant paths (outside the tokens directory, not `.json`, or the
    /// generated stylesheet itself) are ignored.
    pub async fn handle_event(&self, path: &Path) {
        if !self.paths.is_relevant(path) {
            debug!(path = %path.display(), "Ignoring filesystem event");
            return;
        }
        debug!(path = %path.display(), "Token file changed");
        self.trigger().await;
    }

    /// Request a regeneration pass without a triggering file.
    ///
    /// If a pass is already in flight the request is folded into a single
    /// follow-up pass and this returns immediately. Otherwise this drives
    /// passes until no request is pending.
    pub async fn trigger(&self) {
        let (next, start) = self.state.get().request();
        self.state.set(next);
        if !start {
            debug!("Regeneration already running, queued follow-up pass");
            return;
        }

        loop {
            self.run_pass().await;

            let (next, again) = self.state.get().complete();
            self.state.set(next);
            if !again {
                break;
            }
            debug!("Running queued regeneration pass");
        }
    }

    async fn run_pass(&self) {
        let result = self.transformer.transform(&self.request).await;
        self.passes.set(self.passes.get() + 1);

        match result {
            Ok(outcome) if outcome.written => {
                self.reporter
                    .info(&format!("{} regenerated from tokens", self.output_name()));
            }
            Ok(_) => {
                debug!(path = %self.paths.output_path.display(), "Theme already up to date");
            }
            Err(e) => {
                self.reporter.error(&format!("Theme generation failed: {}", e));
            }
        }
    }

    fn output_name(&self) -> String {
        self.paths
            .output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.paths.output_path.display().to_string())
    }
}
