//! Keyword list normalization.

use crate::error::RenderError;
use crate::html::strip_tags;
use crate::value::AttributeValue;

/// Attribute name that receives keyword normalization.
pub const KEYWORDS: &str = "keywords";

/// Normalize keywords into a single lowercase, markup-free string.
///
/// Sequences are joined with `", "`; a mapping joins its values in key
/// order. Elements must be scalars.
///
/// # Examples
///
/// ```
/// use metatags::{AttributeValue, prepare_keywords};
///
/// let keywords = AttributeValue::from(["Rust", "<b>HTML</b>"]);
/// assert_eq!(prepare_keywords(&keywords).unwrap(), "rust, html");
/// ```
pub fn prepare_keywords(content: &AttributeValue) -> Result<String, RenderError> {
    let joined = match content {
        AttributeValue::Scalar(text) => text.clone(),
        AttributeValue::Sequence(items) => join_scalars(items.iter())?,
        AttributeValue::Mapping(map) => join_scalars(map.values())?,
    };
    Ok(strip_tags(&joined).to_lowercase())
}

fn join_scalars<'a>(
    items: impl Iterator<Item = &'a AttributeValue>,
) -> Result<String, RenderError> {
    let parts = items
        .map(|item| item.as_scalar().ok_or_else(|| RenderError::non_scalar(KEYWORDS)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(", "))
}
