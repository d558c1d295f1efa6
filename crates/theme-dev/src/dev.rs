//! Dev server loop: watcher events in, serialized regeneration passes out.

use std::future::Future;
use std::path::Path;
use std::rc::Rc;

use tokio::task::{LocalSet, spawn_local};
use tracing::info;

use crate::config::{ThemeOptions, ThemePaths};
use crate::error::Result;
use crate::reporter::{Reporter, TracingReporter};
use crate::session::WatchSession;
use crate::transform::{ThemeWriter, Transformer};
use crate::watch::{FileWatcher, WatchConfig};

/// Resolve `options` against `root` and keep the stylesheet in sync until Ctrl-C.
pub async fn run_dev(options: &ThemeOptions, root: &Path) -> Result<()> {
    let paths = options.resolve(root)?;
    let config = WatchConfig {
        debounce_ms: options.debounce_ms(),
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    LocalSet::new()
        .run_until(watch_tokens(
            paths,
            config,
            ThemeWriter,
            TracingReporter,
            shutdown,
        ))
        .await
}

/// Watch the token glob and regenerate on every relevant change.
///
/// One pass runs immediately so the stylesheet exists before the first page
/// load. Each watcher event is dispatched on its own local task, and the
/// session folds overlapping requests together. Returns when `shutdown`
/// resolves or the watcher stops.
///
/// Must be called from within a [`LocalSet`].
pub async fn watch_tokens<T, R, S>(
    paths: ThemePaths,
    config: WatchConfig,
    transformer: T,
    reporter: R,
    shutdown: S,
) -> Result<()>
where
    T: Transformer + 'static,
    R: Reporter + 'static,
    S: Future<Output = ()>,
{
    let mut watcher = FileWatcher::new(config)?;
    watcher.add(&paths.tokens_glob)?;

    let session = Rc::new(WatchSession::new(paths, transformer, reporter));

    spawn_local({
        let session = session.clone();
        async move { session.trigger().await }
    });

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            event = watcher.recv() => match event {
                Some(event) => {
                    let session = session.clone();
                    spawn_local(async move { session.handle_event(event.path()).await });
                }
                None => {
                    info!("Filesystem watcher stopped");
                    break;
                }
            },
            _ = &mut shutdown => {
                info!(passes = session.passes(), "Stopping token watcher");
                break;
            }
        }
    }

    Ok(())
}
