//! Error types for theme-dev

use std::path::PathBuf;

use theme_tokens::TokenError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} must be provided via the theme configuration")]
    MissingOption(&'static str),

    #[error("Failed to parse theme config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Theme config not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid tokens glob '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    #[error("Watch error: {0}")]
    Watch(String),

    #[error("Theme task failed: {0}")]
    Task(String),

    #[error(transparent)]
    Tokens(#[from] TokenError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
