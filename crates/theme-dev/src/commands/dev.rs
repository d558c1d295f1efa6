//! Dev command - regenerate the stylesheet as token files change

use anyhow::Result;
use theme_dev::dev::run_dev;
use tracing::info;

use super::ThemeArgs;

/// Execute the dev command.
///
/// Configuration errors are fatal. Token errors are logged and the watcher
/// keeps running until Ctrl-C.
pub fn execute(args: ThemeArgs) -> Result<()> {
    let root = args.canonical_root()?;
    let options = args.options(&root)?;

    info!(root = %root.display(), "Starting theme watcher");

    // The watch session and every pass it schedules run on this one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_dev(&options, &root))?;

    Ok(())
}
