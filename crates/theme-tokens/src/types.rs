//! Token data model.
//!
//! The type hierarchy is:
//! - [`TokenGroup`]: on-disk shape of a token file (`title`, `description`, `items`)
//! - [`RangeToken`]: a size that scales between two pixel values across the viewport
//! - [`MappableToken`]: a named value (color, font stack, weight, ...) destined for flattening
//! - [`ViewportTokens`]: the viewport bracket used for fluid interpolation
//!
//! Every type derives `JsonSchema` so that token files can be validated
//! against the same definition they are deserialized into.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root font size (in pixels) used to convert pixel values into `rem`.
pub const DEFAULT_ROOT_SIZE: f64 = 16.0;

/// A property whose pixel value scales between `min` and `max`.
///
/// When `min == max` the value does not depend on the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RangeToken {
    #[schemars(length(min = 1))]
    pub name: String,
    pub min: f64,
    pub max: f64,
}

impl RangeToken {
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }
}

/// Viewport width bracket (in pixels) across which interpolation happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ViewportTokens {
    pub min: f64,
    pub max: f64,
}

/// A generated CSS length: either a fixed `rem` value or a `clamp(...)` expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampResultToken {
    pub name: String,
    pub value: String,
}

/// Value of a [`MappableToken`].
///
/// Lists become comma-separated CSS value lists (font stacks, layered shadows).
/// Numbers are accepted for convenience (`700`, `1.1`) and kept in their
/// shortest decimal form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TokenValue {
    List(Vec<String>),
    Text(String),
    Number(f64),
}

impl TokenValue {
    /// Render the value as a single CSS-ready string.
    pub fn to_css(&self) -> String {
        match self {
            TokenValue::List(items) => items.join(", "),
            TokenValue::Text(text) => text.clone(),
            TokenValue::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<Vec<String>> for TokenValue {
    fn from(value: Vec<String>) -> Self {
        TokenValue::List(value)
    }
}

/// A generic named design value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MappableToken {
    #[schemars(length(min = 1))]
    pub name: String,
    pub value: TokenValue,
}

impl MappableToken {
    pub fn new(name: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<ClampResultToken> for MappableToken {
    fn from(token: ClampResultToken) -> Self {
        MappableToken {
            name: token.name,
            value: TokenValue::Text(token.value),
        }
    }
}

/// On-disk shape of a token file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TokenGroup<T> {
    /// Human readable title, ignored by generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-form description, ignored by generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub items: Vec<T>,
}
