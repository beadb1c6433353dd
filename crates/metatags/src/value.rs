//! Attribute values and the ordered attribute store.
//!
//! An [`AttributeValue`] is either a scalar string, a sequence of values, or a
//! nested mapping. Whether a value is "associative" is decided when it is
//! built: only [`AttributeValue::Mapping`] is flattened into `parent:child`
//! tag names during rendering.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::Serialize;

/// Insertion-ordered map of attribute names to values.
///
/// Rendering follows this order. Merging keeps the position of keys that are
/// already present and appends new keys at the end.
pub type AttributeStore = IndexMap<String, AttributeValue>;

/// A single attribute value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Plain text content.
    Scalar(String),
    /// Ordered list, rendered as one tag per element.
    Sequence(Vec<AttributeValue>),
    /// Associative content, flattened into colon-joined names.
    Mapping(AttributeStore),
}

impl AttributeValue {
    /// Check whether the value carries no content.
    ///
    /// Empty strings, empty sequences and empty mappings are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(text) => text.is_empty(),
            Self::Sequence(items) => items.is_empty(),
            Self::Mapping(map) => map.is_empty(),
        }
    }

    /// Return the text of a scalar value.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&AttributeStore> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Consume the value, returning the mapping if it is one.
    #[must_use]
    pub fn into_mapping(self) -> Option<AttributeStore> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// View the value as a list of elements.
    ///
    /// Sequences yield their items; any other value is a one-element list.
    #[must_use]
    pub fn as_slice(&self) -> &[AttributeValue] {
        match self {
            Self::Sequence(items) => items,
            other => std::slice::from_ref(other),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<u64> for AttributeValue {
    fn from(value: u64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value.to_string())
    }
}

// Templating convention: `true` prints as "1", `false` as nothing.
impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Scalar(if value { "1".to_owned() } else { String::new() })
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AttributeValue>, const N: usize> From<[T; N]> for AttributeValue {
    fn from(items: [T; N]) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<AttributeStore> for AttributeValue {
    fn from(map: AttributeStore) -> Self {
        Self::Mapping(map)
    }
}

/// Field name toml uses to carry datetimes through serde.
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_any(AttributeValueVisitor)?
            .ok_or_else(|| de::Error::invalid_type(Unexpected::Unit, &AttributeValueVisitor))
    }
}

/// A list item or map entry that may be null.
struct MaybeValue(Option<AttributeValue>);

impl<'de> Deserialize<'de> for MaybeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AttributeValueVisitor).map(MaybeValue)
    }
}

/// Accepts any self-describing value. Null yields `None`; nulls inside
/// lists and maps are treated as absent and skipped.
struct AttributeValueVisitor;

impl<'de> Visitor<'de> for AttributeValueVisitor {
    type Value = Option<AttributeValue>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, sequence or map")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value.into()))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value.into()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value.into()))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value.into()))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value.into()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value.into()))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(MaybeValue(item)) = seq.next_element()? {
            items.extend(item);
        }
        Ok(Some(AttributeValue::Sequence(items)))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut store = AttributeStore::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, MaybeValue(value))) = map.next_entry::<String, MaybeValue>()? {
            if let Some(value) = value {
                store.insert(key, value);
            }
        }

        // toml datetimes arrive as a single-entry map holding the text.
        if store.len() == 1
            && let Some(AttributeValue::Scalar(text)) = store.get(TOML_DATETIME_FIELD)
        {
            return Ok(Some(AttributeValue::Scalar(text.clone())));
        }
        Ok(Some(AttributeValue::Mapping(store)))
    }
}
