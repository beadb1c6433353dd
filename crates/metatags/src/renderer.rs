//! Attribute accumulation and tag rendering.

use crate::error::RenderError;
use crate::keywords::{KEYWORDS, prepare_keywords};
use crate::merge::{merge_into, merged};
use crate::tag::{RenderOptions, title_tag};
use crate::value::{AttributeStore, AttributeValue};

/// Attribute name rendered as a `<title>` element when requested.
const TITLE: &str = "title";

/// Accumulates page attributes and renders them as head tags.
///
/// Attributes are collected with [`set`](Self::set) over the course of a
/// request and rendered once with [`display`](Self::display). Use one
/// renderer per page or request.
///
/// # Example
///
/// ```
/// use metatags::{AttributeStore, AttributeValue, TagRenderer};
///
/// let mut renderer = TagRenderer::new();
/// let og: AttributeStore = [("title".to_owned(), AttributeValue::from("Hello"))]
///     .into_iter()
///     .collect();
/// renderer.set([("og".to_owned(), AttributeValue::from(og))].into_iter().collect(), &[]);
///
/// let html = renderer.display(&AttributeStore::new(), false).unwrap();
/// assert_eq!(html, r#"<meta property="og:title" content="Hello"/>"#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TagRenderer {
    attributes: AttributeStore,
    options: RenderOptions,
}

impl TagRenderer {
    /// Create a renderer with default formatting options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            attributes: AttributeStore::new(),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Merge attributes into the store.
    ///
    /// Top-level entries with an empty value or a key listed in `exclude`
    /// are dropped first, so they never overwrite a value set earlier.
    /// Mappings merge recursively; any other value replaces the stored one.
    pub fn set(&mut self, attributes: AttributeStore, exclude: &[&str]) -> &AttributeStore {
        let filtered: AttributeStore = attributes
            .into_iter()
            .filter(|(key, value)| {
                let keep = !value.is_empty() && !exclude.contains(&key.as_str());
                if !keep {
                    tracing::trace!(key = %key, "Skipping empty or excluded attribute");
                }
                keep
            })
            .collect();

        merge_into(&mut self.attributes, filtered);
        &self.attributes
    }

    /// Render stored attributes over `defaults` as newline-separated tags.
    ///
    /// Stored attributes win over defaults. When `display_title` is set and a
    /// `title` attribute exists, a `<title>` element is appended last.
    /// Returns an empty string when there is nothing to render.
    pub fn display(
        &self,
        defaults: &AttributeStore,
        display_title: bool,
    ) -> Result<String, RenderError> {
        Ok(self.render(defaults, display_title)?.join("\n"))
    }

    /// Render stored attributes over `defaults` as individual tags.
    pub fn render(
        &self,
        defaults: &AttributeStore,
        display_title: bool,
    ) -> Result<Vec<String>, RenderError> {
        let effective = merged(defaults, &self.attributes);
        let mut tags = Vec::new();

        for (name, content) in &effective {
            if name == KEYWORDS {
                let keywords = prepare_keywords(content)?;
                tags.push(self.options.meta_tag(KEYWORDS, &keywords));
            } else if matches!(content, AttributeValue::Mapping(_)) {
                self.collect_nested(name, content, &mut tags)?;
            } else {
                for item in content.as_slice() {
                    let text = item.as_scalar().ok_or_else(|| RenderError::non_scalar(name))?;
                    tags.push(self.options.meta_tag(name, text));
                }
            }
        }

        if display_title && let Some(title) = effective.get(TITLE) {
            let text = title.as_scalar().ok_or_else(|| RenderError::non_scalar(TITLE))?;
            tags.push(title_tag(text));
        }

        tracing::debug!(tag_count = tags.len(), "Rendered meta tags");
        Ok(tags)
    }

    /// Flatten nested content under `property` into tags.
    ///
    /// Mapping keys extend the name as `property:key`. Mappings found inside
    /// a list are flattened under the same `property`.
    pub fn process_nested_attributes(
        &self,
        property: &str,
        content: &AttributeValue,
    ) -> Result<Vec<String>, RenderError> {
        let mut tags = Vec::new();
        self.collect_nested(property, content, &mut tags)?;
        Ok(tags)
    }

    fn collect_nested(
        &self,
        property: &str,
        content: &AttributeValue,
        tags: &mut Vec<String>,
    ) -> Result<(), RenderError> {
        if let AttributeValue::Mapping(map) = content {
            for (key, value) in map {
                self.collect_nested(&format!("{property}:{key}"), value, tags)?;
            }
            return Ok(());
        }

        for item in content.as_slice() {
            match item {
                AttributeValue::Mapping(_) => self.collect_nested(property, item, tags)?,
                AttributeValue::Scalar(text) => tags.push(self.options.meta_tag(property, text)),
                AttributeValue::Sequence(_) => return Err(RenderError::non_scalar(property)),
            }
        }
        Ok(())
    }

    /// Remove all stored attributes.
    pub fn clear(&mut self) -> &AttributeStore {
        self.attributes = AttributeStore::new();
        &self.attributes
    }

    /// Current stored attributes, without defaults.
    #[must_use]
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }
}
