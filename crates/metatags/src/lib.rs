//! HTML head tag rendering from nested attribute maps.
//!
//! This crate turns page attributes into `<meta>`, `<link>` and `<title>`
//! tags. Attributes are accumulated on a [`TagRenderer`] and rendered over a
//! set of defaults:
//!
//! - Nested mappings are flattened into colon-joined names
//!   (`og` → `image` → `width` becomes `og:image:width`)
//! - Lists produce one tag per element
//! - `keywords` are joined, stripped of markup and lowercased
//! - The tag shape follows the name prefix (Open Graph `property` tags,
//!   schema.org `itemprop` hints, `rel:` links)
//!
//! # Example
//!
//! ```
//! use metatags::{AttributeStore, AttributeValue, TagRenderer};
//!
//! let mut renderer = TagRenderer::new();
//! let mut page = AttributeStore::new();
//! page.insert("title".to_owned(), "Release notes".into());
//! page.insert("keywords".to_owned(), AttributeValue::from(["Rust", "Releases"]));
//! page.insert("rel:canonical".to_owned(), "https://example.com/notes".into());
//! renderer.set(page, &[]);
//!
//! let html = renderer.display(&AttributeStore::new(), true).unwrap();
//! assert_eq!(
//!     html,
//!     [
//!         r#"<meta name="title" content="Release notes"/>"#,
//!         r#"<meta name="keywords" content="rust, releases"/>"#,
//!         r#"<link rel="canonical" href="https://example.com/notes"/>"#,
//!         "<title>Release notes</title>",
//!     ]
//!     .join("\n")
//! );
//! ```

mod error;
mod html;
mod keywords;
mod merge;
mod renderer;
mod tag;
mod value;

pub use error::RenderError;
pub use html::{escape_html, strip_tags};
pub use keywords::prepare_keywords;
pub use merge::{merge_into, merged};
pub use renderer::TagRenderer;
pub use tag::{OG_IMAGE_SUFFIX, RelPrefix, RenderOptions, meta_tag, title_tag};
pub use value::{AttributeStore, AttributeValue};
