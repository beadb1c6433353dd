//! Render error types.

/// Error returned when attributes cannot be rendered as tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A sequence or mapping reached a position that needs plain text,
    /// such as a list nested directly in a list.
    #[error("Content of `{name}` is not representable as text")]
    NonScalarContent {
        /// Tag name the content was rendered for.
        name: String,
    },
}

impl RenderError {
    pub(crate) fn non_scalar(name: &str) -> Self {
        Self::NonScalarContent {
            name: name.to_owned(),
        }
    }
}
