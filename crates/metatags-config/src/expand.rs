//! Environment variable expansion for default attributes.
//!
//! Only braced references are expanded: `${VAR}` errors when VAR is unset,
//! `${VAR:-default}` falls back to the default. Any other `$` is literal
//! text, so prices like `$USD` survive in descriptions.

use metatags::AttributeValue;

use crate::ConfigError;

/// Expand every scalar inside an attribute value, in place.
///
/// `field` names the value in errors; nested entries extend it as
/// `field.key` for mappings and `field[i]` for sequences.
pub(crate) fn expand_attribute(value: &mut AttributeValue, field: &str) -> Result<(), ConfigError> {
    match value {
        AttributeValue::Scalar(text) => *text = expand_env(text, field)?,
        AttributeValue::Sequence(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                expand_attribute(item, &format!("{field}[{i}]"))?;
            }
        }
        AttributeValue::Mapping(map) => {
            for (key, item) in map {
                expand_attribute(item, &format!("{field}.{key}"))?;
            }
        }
    }
    Ok(())
}

/// Expand the `${...}` references in a string.
///
/// Text outside references, including bare `$NAME` and an unterminated
/// `${`, is copied unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        out.push_str(&rest[..start]);
        out.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Expand a single `${VAR}` or `${VAR:-default}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}
