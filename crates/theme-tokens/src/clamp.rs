//! Fluid `clamp()` generation for range tokens.
//!
//! A range token grows linearly from `min` pixels at the smallest viewport to
//! `max` pixels at the largest one and is clamped outside that bracket:
//!
//! ```text
//! clamp(minSize, intersection + slope * 100vw, maxSize)
//! ```
//!
//! All lengths are expressed in `rem` relative to the root font size.

use std::cmp::Ordering;

use crate::error::{Result, TokenError};
use crate::types::{ClampResultToken, RangeToken, ViewportTokens};

/// Convert range tokens into CSS lengths, preserving input order.
///
/// Tokens with `min == max` produce a fixed `rem` value. All other tokens
/// produce a `clamp()` expression whose preferred value has its intercept and
/// viewport slope rounded to two decimals; the bounds keep full precision.
///
/// The viewport bracket, the root size and every token are validated before
/// anything is generated.
///
/// # Example
///
/// ```
/// use theme_tokens::{RangeToken, ViewportTokens, generate_clamps};
///
/// let viewport = ViewportTokens { min: 320.0, max: 1280.0 };
/// let tokens = [RangeToken::new("sm", 14.0, 16.0), RangeToken::new("lg", 32.0, 32.0)];
/// let result = generate_clamps(&tokens, &viewport, 16.0).unwrap();
///
/// assert_eq!(result[0].value, "clamp(0.875rem, 0.83rem + 0.21vw, 1rem)");
/// assert_eq!(result[1].value, "2rem");
/// ```
pub fn generate_clamps(
    tokens: &[RangeToken],
    viewport: &ViewportTokens,
    root_size: f64,
) -> Result<Vec<ClampResultToken>> {
    if !root_size.is_finite() || root_size <= 0.0 {
        return Err(TokenError::InvalidRootSize(root_size));
    }
    if viewport.min.partial_cmp(&viewport.max) != Some(Ordering::Less) {
        return Err(TokenError::InvalidViewport {
            min: viewport.min,
            max: viewport.max,
        });
    }
    if let Some(token) = tokens.iter().find(|t| t.min > t.max) {
        return Err(TokenError::InvertedRange {
            name: token.name.clone(),
            min: token.min,
            max: token.max,
        });
    }

    Ok(tokens
        .iter()
        .map(|token| ClampResultToken {
            name: token.name.clone(),
            value: clamp_value(token, viewport, root_size),
        })
        .collect())
}

fn clamp_value(token: &RangeToken, viewport: &ViewportTokens, root_size: f64) -> String {
    let min_size = token.min / root_size;
    if token.min == token.max {
        return format!("{}rem", min_size);
    }

    let max_size = token.max / root_size;
    let min_viewport = viewport.min / root_size;
    let max_viewport = viewport.max / root_size;

    let slope = (max_size - min_size) / (max_viewport - min_viewport);
    let intersection = -min_viewport * slope + min_size;

    format!(
        "clamp({}rem, {}rem + {}vw, {}rem)",
        min_size,
        fixed2(intersection),
        fixed2(slope * 100.0),
        max_size
    )
}

/// Format with two decimals, rounding the exact binary value of `value`.
///
/// `1.115` is stored as `1.11499...` and prints as `1.11`; small negatives
/// keep their sign (`-0.00`). Exact ties can only be odd multiples of `1/8`
/// and round away from zero.
fn fixed2(value: f64) -> String {
    let scaled = value * 100.0;
    if scaled.fract().abs() == 0.5 && (value * 8.0).fract() == 0.0 {
        return format!("{:.2}", scaled.round() / 100.0);
    }
    format!("{:.2}", value)
}
