//! theme-dev: keeps a generated theme stylesheet in sync with design tokens
//!
//! This crate provides:
//! - Theme configuration loading and path resolution
//! - A one-shot build hook for production builds
//! - A debounced filesystem watcher for token files
//! - A watch session that serializes and coalesces regeneration passes

pub mod build;
pub mod config;
pub mod dev;
pub mod error;
pub mod reporter;
pub mod session;
pub mod transform;
pub mod watch;

pub use config::{ThemeOptions, ThemePaths};
pub use error::{Error, Result};
pub use reporter::{Reporter, TracingReporter};
pub use session::{SessionState, WatchSession};
pub use transform::{ThemeWriter, TransformOutcome, TransformRequest, Transformer};
