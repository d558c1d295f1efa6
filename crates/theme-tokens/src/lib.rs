//! Design token processing for generated theme stylesheets.
//!
//! This crate provides:
//! - Token data types (RangeToken, ViewportTokens, MappableToken, TokenGroup)
//! - Schema validation of token files with per-field error reporting
//! - Fluid `clamp()` generation for viewport-responsive sizes
//! - Flattening of named tokens into slug-keyed CSS values
//! - Assembly and change-aware writing of the theme stylesheet
//!
//! Everything here is synchronous and free of global state; watching and
//! scheduling live in `theme-dev`.

mod clamp;
mod error;
mod flatten;
mod schema;
mod theme;
mod types;

pub use clamp::generate_clamps;
pub use error::{Result, TokenError};
pub use flatten::{flatten, slugify};
pub use schema::{parse_file, validate};
pub use theme::{
    GENERATED_HEADER, TOKEN_FILES, Theme, ThemeSection, ThemeWrite, TokenFile, TokenKind,
    VIEWPORTS_FILE, generate_theme_css, write_theme,
};
pub use types::{
    ClampResultToken, DEFAULT_ROOT_SIZE, MappableToken, RangeToken, TokenGroup, TokenValue,
    ViewportTokens,
};
