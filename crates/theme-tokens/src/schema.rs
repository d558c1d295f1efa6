//! Token file loading and schema validation.
//!
//! Each token file is checked against the JSON schema derived from the Rust
//! type it deserializes into, so a malformed file is reported with the file
//! name and every offending field path instead of a single serde message.

use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TokenError};

/// Read `tokens_dir/file_name`, validate it against the schema of `T` and
/// deserialize it.
///
/// I/O failures and JSON syntax errors are returned as [`TokenError::Io`] and
/// [`TokenError::Json`]. Shape mismatches are returned as
/// [`TokenError::Validation`], whose message names the file and lists each
/// violation with its instance path.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use theme_tokens::{RangeToken, TokenGroup, parse_file};
///
/// let spacing: TokenGroup<RangeToken> =
///     parse_file(Path::new("resources/design-tokens"), "spacing.json").unwrap();
/// println!("{} spacing steps", spacing.items.len());
/// ```
pub fn parse_file<T>(tokens_dir: &Path, file_name: &str) -> Result<T>
where
    T: DeserializeOwned + JsonSchema,
{
    let path = tokens_dir.join(file_name);
    let value = load_json(&path)?;
    debug!(path = %path.display(), "Loaded token file");

    validate::<T>(file_name, &value)?;

    serde_json::from_value(value).map_err(|e| TokenError::Validation {
        file: file_name.to_string(),
        message: e.to_string(),
    })
}

/// Validate an already-parsed JSON value against the schema of `T`.
///
/// `file_name` is only used to label the error.
pub fn validate<T: JsonSchema>(file_name: &str, value: &Value) -> Result<()> {
    let invalid_schema = |message: String| TokenError::Validation {
        file: file_name.to_string(),
        message: format!("Invalid schema: {}", message),
    };

    let schema = serde_json::to_value(schemars::schema_for!(T))
        .map_err(|e| invalid_schema(e.to_string()))?;
    let validator =
        jsonschema::validator_for(&schema).map_err(|e| invalid_schema(e.to_string()))?;

    let violations: Vec<String> = validator
        .iter_errors(value)
        .map(|e| {
            let path = e.instance_path.to_string();
            let path = if path.is_empty() { "(root)".to_string() } else { path };
            format!("- {}: {}", path, e)
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(TokenError::Validation {
            file: file_name.to_string(),
            message: violations.join("\n"),
        })
    }
}

fn load_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| TokenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TokenError::Json {
        path: path.to_path_buf(),
        source,
    })
}
