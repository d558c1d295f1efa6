//! Production build hook.
//!
//! Runs exactly one regeneration pass. Unlike the dev watcher, every failure
//! here is fatal: shipping a build with a stale stylesheet is worse than
//! failing it.

use std::path::Path;

use tracing::info;

use crate::config::{ThemeOptions, ThemePaths};
use crate::error::Result;
use crate::transform::{ThemeWriter, TransformRequest, Transformer};

/// Resolve `options` against `root` and regenerate the stylesheet once.
///
/// Missing options fail before the transformer is called. The transformer's
/// `written` report is not consulted.
pub async fn build_theme<T: Transformer>(
    transformer: &T,
    options: &ThemeOptions,
    root: &Path,
) -> Result<ThemePaths> {
    let paths = options.resolve(root)?;
    info!(
        tokens_dir = %paths.tokens_dir.display(),
        output = %paths.output_path.display(),
        "Generating theme"
    );

    transformer
        .transform(&TransformRequest::from(&paths))
        .await?;

    Ok(paths)
}

/// [`build_theme`] with the default [`ThemeWriter`].
pub async fn run_build(options: &ThemeOptions, root: &Path) -> Result<ThemePaths> {
    build_theme(&ThemeWriter, options, root).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transform::TransformOutcome;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct CountingTransformer {
        calls: Cell<usize>,
        requests: RefCell<Vec<TransformRequest>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl Transformer for CountingTransformer {
        async fn transform(&self, request: &TransformRequest) -> Result<TransformOutcome> {
            self.calls.set(self.calls.get() + 1);
            self.requests.borrow_mut().push(request.clone());
            if self.fail {
                return Err(Error::Task("tokens are broken".to_string()));
            }
            Ok(TransformOutcome { written: false })
        }
    }

    fn options() -> ThemeOptions {
        ThemeOptions {
            tokens_glob: Some("tokens/**/*.json".to_string()),
            output_path: Some("css/theme.css".to_string()),
            tokens_dir: Some("tokens".to_string()),
            debounce_ms: None,
        }
    }

    #[tokio::test]
    async fn test_build_invokes_transformer_once() {
        let transformer = CountingTransformer::default();
        let paths = build_theme(&transformer, &options(), Path::new("/site"))
            .await
            .unwrap();

        assert_eq!(transformer.calls.get(), 1);
        assert_eq!(
            transformer.requests.borrow()[0],
            TransformRequest {
                output_path: Path::new("/site/css/theme.css").to_path_buf(),
                tokens_dir: Path::new("/site/tokens").to_path_buf(),
            }
        );
        assert_eq!(paths.tokens_glob, "/site/tokens/**/*.json");
    }

    #[tokio::test]
    async fn test_missing_option_fails_before_transform() {
        let transformer = CountingTransformer::default();
        let options = ThemeOptions {
            output_path: None,
            ..options()
        };

        let err = build_theme(&transformer, &options, Path::new("/site"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingOption("output_path")));
        assert_eq!(transformer.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_transform_failure_fails_build() {
        let transformer = CountingTransformer {
            fail: true,
            ..Default::default()
        };
        let err = build_theme(&transformer, &options(), Path::new("/site"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("tokens are broken"));
    }
}
