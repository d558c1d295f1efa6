//! Flattening of named tokens into a slug-keyed map.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TokenError};
use crate::types::MappableToken;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Anything outside ASCII word characters and hyphens.
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]+").unwrap());

/// Derive an identifier-safe slug from a human readable token name.
///
/// ```
/// assert_eq!(theme_tokens::slugify("  Shadow  A! "), "shadow-a");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(lowered.trim(), "-");
    NON_SLUG_CHARS.replace_all(&hyphenated, "").into_owned()
}

/// Flatten tokens into a map of slug to CSS value, in input order.
///
/// List values are joined with `", "`; scalars are stored as-is. The first
/// slug collision aborts with [`TokenError::DuplicateToken`] and no partial
/// map is returned.
pub fn flatten(tokens: &[MappableToken]) -> Result<IndexMap<String, String>> {
    let mut flattened = IndexMap::with_capacity(tokens.len());

    for token in tokens {
        let slug = slugify(&token.name);
        if flattened.contains_key(&slug) {
            return Err(TokenError::DuplicateToken { slug });
        }
        flattened.insert(slug, token.value.to_css());
    }

    Ok(flattened)
}
