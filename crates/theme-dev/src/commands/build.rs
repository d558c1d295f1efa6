//! Build command - one-shot stylesheet generation

use anyhow::Result;
use theme_dev::build::run_build;
use tracing::info;

use super::ThemeArgs;

/// Execute the build command.
///
/// Any configuration or token error is returned and exits non-zero.
pub fn execute(args: ThemeArgs) -> Result<()> {
    let root = args.canonical_root()?;
    let options = args.options(&root)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let paths = runtime.block_on(run_build(&options, &root))?;

    info!(output = %paths.output_path.display(), "Theme build complete");
    Ok(())
}
