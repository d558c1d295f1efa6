//! The token transformer contract and its default implementation.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::ThemePaths;
use crate::error::{Error, Result};

/// Input of a single regeneration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    /// Absolute path of the generated stylesheet
    pub output_path: PathBuf,

    /// Absolute tokens directory
    pub tokens_dir: PathBuf,
}

impl From<&ThemePaths> for TransformRequest {
    fn from(paths: &ThemePaths) -> Self {
        Self {
            output_path: paths.output_path.clone(),
            tokens_dir: paths.tokens_dir.clone(),
        }
    }
}

/// Result of a successful pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOutcome {
    /// Whether the stylesheet content changed on disk
    pub written: bool,
}

/// Turns a tokens directory into a stylesheet.
///
/// Implementations must be idempotent: a second call with unchanged tokens
/// reports `written: false` and leaves the output content as it was.
///
/// The trait is `?Send` because the watch session drives it from a
/// single-threaded `LocalSet`.
#[async_trait(?Send)]
pub trait Transformer {
    async fn transform(&self, request: &TransformRequest) -> Result<TransformOutcome>;
}

/// Default transformer backed by [`theme_tokens::write_theme`].
///
/// The file work runs on tokio's blocking pool so the watcher keeps receiving
/// events while a pass is in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeWriter;

#[async_trait(?Send)]
impl Transformer for ThemeWriter {
    async fn transform(&self, request: &TransformRequest) -> Result<TransformOutcome> {
        let tokens_dir = request.tokens_dir.clone();
        let output_path = request.output_path.clone();

        let write = tokio::task::spawn_blocking(move || {
            theme_tokens::write_theme(&tokens_dir, &output_path)
        })
        .await
        .map_err(|e| Error::Task(e.to_string()))??;

        Ok(TransformOutcome {
            written: write.written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_theme_writer_writes_then_skips() {
        let tokens = TempDir::new().unwrap();
        std::fs::write(
            tokens.path().join("colors.json"),
            r##"{"items": [{"name": "Primary", "value": "#0042bf"}]}"##,
        )
        .unwrap();
        let out = TempDir::new().unwrap();
        let request = TransformRequest {
            output_path: out.path().join("theme.css"),
            tokens_dir: tokens.path().to_path_buf(),
        };

        let first = ThemeWriter.transform(&request).await.unwrap();
        assert!(first.written);
        let second = ThemeWriter.transform(&request).await.unwrap();
        assert!(!second.written);

        let css = std::fs::read_to_string(&request.output_path).unwrap();
        assert!(css.contains("--color-primary: #0042bf;"));
    }

    #[tokio::test]
    async fn test_theme_writer_surfaces_token_errors() {
        let tokens = TempDir::new().unwrap();
        std::fs::write(tokens.path().join("colors.json"), "{ not json").unwrap();
        let request = TransformRequest {
            output_path: tokens.path().join("theme.css"),
            tokens_dir: tokens.path().to_path_buf(),
        };

        let err = ThemeWriter.transform(&request).await.unwrap_err();
        assert!(matches!(err, Error::Tokens(_)));
        assert!(!request.output_path.exists());
    }
}
