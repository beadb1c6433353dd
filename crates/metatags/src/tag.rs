//! Formatting of individual `<meta>`, `<link>` and `<title>` tags.
//!
//! The tag shape is chosen from the attribute name by a first-match cascade:
//! Open Graph and Facebook names become `property` tags, `description`,
//! `section` and `image_src` names gain a schema.org `itemprop`, `rel:` names
//! become `<link>` elements, and everything else is a plain `name` tag.

use serde::{Deserialize, Serialize};

use crate::html::escape_html;

/// Query string appended to the primary `og:image` URL.
pub const OG_IMAGE_SUFFIX: &str = "&auto=format%2Ccompress";

/// How the `rel:` prefix is removed from link names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelPrefix {
    /// Remove exactly the leading `rel:`.
    #[default]
    Literal,
    /// Remove every leading `r`, `e`, `l` and `:` character.
    ///
    /// Matches output produced by older renderers: `rel:role` becomes `ole`.
    Legacy,
}

impl RelPrefix {
    fn strip(self, name: &str) -> &str {
        match self {
            Self::Literal => name.strip_prefix("rel:").unwrap_or(name),
            Self::Legacy => name.trim_start_matches(['r', 'e', 'l', ':']),
        }
    }
}

/// Options controlling tag formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Treatment of the `rel:` prefix.
    pub rel_prefix: RelPrefix,
    /// Raw text appended to the `og:image` content (not escaped).
    pub og_image_suffix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rel_prefix: RelPrefix::default(),
            og_image_suffix: OG_IMAGE_SUFFIX.to_owned(),
        }
    }
}

impl RenderOptions {
    /// Format one tag for `name` with the given text content.
    ///
    /// Both `name` and `content` are escaped before being embedded.
    #[must_use]
    pub fn meta_tag(&self, name: &str, content: &str) -> String {
        let name = escape_html(name);
        let content = escape_html(content);

        if name.starts_with("og:") || name.starts_with("fb:") {
            if name == "og:image" {
                let suffix = &self.og_image_suffix;
                return format!(r#"<meta property="{name}" content="{content}{suffix}"/>"#);
            }
            if name.starts_with("og:image") {
                return format!(r#"<meta property="{name}" content="{content}"/>"#);
            }
            if name.starts_with("og:url") {
                return format!(r#"<meta itemprop="url" property="{name}" content="{content}"/>"#);
            }
            return format!(r#"<meta property="{name}" content="{content}"/>"#);
        }

        if name.starts_with("description") {
            format!(r#"<meta itemprop="description" name="{name}" content="{content}"/>"#)
        } else if name.starts_with("section") {
            format!(r#"<meta itemprop="articleSection" name="{name}" content="{content}"/>"#)
        } else if name.starts_with("image_src") {
            format!(r#"<meta itemprop="thumbnailUrl" name="{name}" content="{content}"/>"#)
        } else if name.starts_with("rel:") {
            let rel = self.rel_prefix.strip(&name);
            format!(r#"<link rel="{rel}" href="{content}"/>"#)
        } else {
            format!(r#"<meta name="{name}" content="{content}"/>"#)
        }
    }
}

/// Format one tag with the default [`RenderOptions`].
#[must_use]
pub fn meta_tag(name: &str, content: &str) -> String {
    RenderOptions::default().meta_tag(name, content)
}

/// Format a `<title>` element.
#[must_use]
pub fn title_tag(content: &str) -> String {
    format!("<title>{}</title>", escape_html(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn legacy() -> RenderOptions {
        RenderOptions {
            rel_prefix: RelPrefix::Legacy,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_og_image_gets_suffix() {
        assert_eq!(
            meta_tag("og:image", "http://x/y.jpg"),
            r#"<meta property="og:image" content="http://x/y.jpg&auto=format%2Ccompress"/>"#
        );
    }

    #[test]
    fn test_og_image_children_have_no_suffix() {
        assert_eq!(
            meta_tag("og:image:width", "1200"),
            r#"<meta property="og:image:width" content="1200"/>"#
        );
    }

    #[test]
    fn test_og_url_has_itemprop() {
        assert_eq!(
            meta_tag("og:url", "http://x/"),
            r#"<meta itemprop="url" property="og:url" content="http://x/"/>"#
        );
    }

    #[test]
    fn test_og_and_fb_are_properties() {
        assert_eq!(
            meta_tag("og:title", "T"),
            r#"<meta property="og:title" content="T"/>"#
        );
        assert_eq!(
            meta_tag("fb:app_id", "123"),
            r#"<meta property="fb:app_id" content="123"/>"#
        );
    }

    #[test]
    fn test_og_prefix_wins_over_description() {
        assert_eq!(
            meta_tag("og:description", "D"),
            r#"<meta property="og:description" content="D"/>"#
        );
    }

    #[test]
    fn test_schema_itemprops() {
        assert_eq!(
            meta_tag("description", "D"),
            r#"<meta itemprop="description" name="description" content="D"/>"#
        );
        assert_eq!(
            meta_tag("section", "Sports"),
            r#"<meta itemprop="articleSection" name="section" content="Sports"/>"#
        );
        assert_eq!(
            meta_tag("image_src", "http://x/t.jpg"),
            r#"<meta itemprop="thumbnailUrl" name="image_src" content="http://x/t.jpg"/>"#
        );
    }

    #[test]
    fn test_rel_link() {
        assert_eq!(
            meta_tag("rel:canonical", "http://x/a"),
            r#"<link rel="canonical" href="http://x/a"/>"#
        );
    }

    #[test]
    fn test_rel_literal_keeps_name_intact() {
        assert_eq!(
            meta_tag("rel:role", "http://x/"),
            r#"<link rel="role" href="http://x/"/>"#
        );
    }

    #[test]
    fn test_rel_legacy_over_strips() {
        assert_eq!(
            legacy().meta_tag("rel:role", "http://x/"),
            r#"<link rel="ole" href="http://x/"/>"#
        );
        assert_eq!(
            legacy().meta_tag("rel:canonical", "http://x/"),
            r#"<link rel="canonical" href="http://x/"/>"#
        );
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(
            meta_tag("twitter:card", "summary"),
            r#"<meta name="twitter:card" content="summary"/>"#
        );
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        assert_eq!(
            meta_tag("OG:title", "T"),
            r#"<meta name="OG:title" content="T"/>"#
        );
    }

    #[test]
    fn test_escapes_name_and_content() {
        assert_eq!(
            meta_tag(r#"a"b"#, r#"<x> & "y""#),
            r#"<meta name="a&quot;b" content="&lt;x&gt; &amp; &quot;y&quot;"/>"#
        );
    }

    #[test]
    fn test_escapes_single_quote_numerically() {
        assert_eq!(
            meta_tag("og:title", "Editor's pick"),
            r#"<meta property="og:title" content="Editor&#039;s pick"/>"#
        );
    }

    #[test]
    fn test_custom_og_image_suffix() {
        let options = RenderOptions {
            og_image_suffix: String::new(),
            ..RenderOptions::default()
        };
        assert_eq!(
            options.meta_tag("og:image", "http://x/y.jpg"),
            r#"<meta property="og:image" content="http://x/y.jpg"/>"#
        );
    }

    #[test]
    fn test_title_tag() {
        assert_eq!(title_tag("Hi"), "<title>Hi</title>");
        assert_eq!(title_tag("A & B"), "<title>A &amp; B</title>");
    }

    #[test]
    fn test_rel_prefix_deserializes_lowercase() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"rel_prefix": "legacy"}"#).unwrap();
        assert_eq!(options.rel_prefix, RelPrefix::Legacy);
        assert_eq!(options.og_image_suffix, OG_IMAGE_SUFFIX);
    }
}
