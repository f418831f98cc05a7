//! Error types for the BeeHive core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A lightbox was asked to show an image outside the visible window.
    #[error("Image is not in the visible gallery window: {0}")]
    ImageNotVisible(String),

    /// A required form field was left blank.
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    /// A path that matches none of the site routes.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

impl CoreError {
    /// Create a new image-not-visible error.
    pub fn image_not_visible(url: impl Into<String>) -> Self {
        Self::ImageNotVisible(url.into())
    }

    /// Create a new unknown-route error.
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute(path.into())
    }
}
