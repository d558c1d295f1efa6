//! Error types for token loading and transformation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, validating or transforming design tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The tokens directory, a token file or the generated stylesheet could not
    /// be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token file is not syntactically valid JSON.
    #[error("{}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A token file parsed but does not have the expected shape.
    #[error("Invalid token file: {file}\n\n{message}")]
    Validation { file: String, message: String },

    /// Two token names sanitize to the same slug.
    #[error("Duplicate token slug detected: {slug}")]
    DuplicateToken { slug: String },

    /// Viewport bracket with `min >= max`.
    #[error("Invalid viewport: min ({min}) must be smaller than max ({max})")]
    InvalidViewport { min: f64, max: f64 },

    /// Range token whose lower bound exceeds its upper bound.
    #[error("Invalid range token '{name}': min ({min}) is greater than max ({max})")]
    InvertedRange { name: String, min: f64, max: f64 },

    /// Root font size that cannot be divided by.
    #[error("Invalid root size: {0} (must be a positive, finite number)")]
    InvalidRootSize(f64),

    /// A range token file exists but there is no viewport file to interpolate against.
    #[error("{file} requires viewport tokens, but {viewports} was not found")]
    MissingViewports {
        file: &'static str,
        viewports: &'static str,
    },
}

impl TokenError {
    /// Returns true for errors describing unusable token content or settings,
    /// as opposed to I/O or JSON syntax failures.
    pub fn is_validation(&self) -> bool {
        !matches!(self, TokenError::Io { .. } | TokenError::Json { .. })
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
