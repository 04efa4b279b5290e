//! Lazily resolved display images.
//!
//! # Responsibility
//! - Track whether a record has a resolved image, a pending path, or nothing.
//! - Resolve pending paths through an `ImageResolver` on first read.
//!
//! # Invariants
//! - A slot never holds a path and a handle at the same time.
//! - A resolved handle is reused until the slot is reassigned.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Base location for bundled assets.
pub const DEFAULT_IMAGE_BASE_URI: &str = "ms-appx:///";

/// Displayable image resource reference produced by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageHandle {
    uri: String,
}

impl ImageHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Image field state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ImageSlot {
    #[default]
    Empty,
    /// Path waiting to be resolved on next read.
    Pending(String),
    Resolved(ImageHandle),
}

impl ImageSlot {
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(path) => Self::Pending(path.to_string()),
            None => Self::Empty,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn resolved(&self) -> Option<&ImageHandle> {
        match self {
            Self::Resolved(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn pending_path(&self) -> Option<&str> {
        match self {
            Self::Pending(path) => Some(path.as_str()),
            _ => None,
        }
    }
}

/// Image resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    EmptyPath,
    Unresolvable { path: String, reason: String },
}

impl Display for ImageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "image path must not be empty"),
            Self::Unresolvable { path, reason } => {
                write!(f, "image path `{path}` cannot be resolved: {reason}")
            }
        }
    }
}

impl Error for ImageError {}

/// Turns a relative image path into a displayable handle.
pub trait ImageResolver {
    fn resolve(&self, path: &str) -> Result<ImageHandle, ImageError>;
}

/// Resolves paths against a fixed base URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUriResolver {
    base_uri: String,
}

impl BaseUriResolver {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }
}

impl Default for BaseUriResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URI)
    }
}

impl ImageResolver for BaseUriResolver {
    fn resolve(&self, path: &str) -> Result<ImageHandle, ImageError> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(ImageError::EmptyPath);
        }
        // Absolute references bypass the base.
        if trimmed.contains("://") {
            return Ok(ImageHandle::new(trimmed));
        }
        let relative = trimmed.trim_start_matches('/').replace('\\', "/");
        if self.base_uri.ends_with('/') {
            Ok(ImageHandle::new(format!("{}{relative}", self.base_uri)))
        } else {
            Ok(ImageHandle::new(format!("{}/{relative}", self.base_uri)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseUriResolver, ImageError, ImageResolver, ImageSlot};

    #[test]
    fn default_resolver_joins_app_base() {
        let handle = BaseUriResolver::default()
            .resolve("Assets/11.jpg")
            .expect("relative path resolves");
        assert_eq!(handle.uri(), "ms-appx:///Assets/11.jpg");
    }

    #[test]
    fn resolver_inserts_separator_and_keeps_absolute_uris() {
        let resolver = BaseUriResolver::new("https://cdn.example.org/app");
        assert_eq!(
            resolver.resolve("/Assets/12.jpg").unwrap().uri(),
            "https://cdn.example.org/app/Assets/12.jpg"
        );
        assert_eq!(
            resolver.resolve("file://tmp/x.png").unwrap().uri(),
            "file://tmp/x.png"
        );
    }

    #[test]
    fn resolver_rejects_blank_path() {
        let err = BaseUriResolver::default()
            .resolve("  ")
            .expect_err("blank path must fail");
        assert_eq!(err, ImageError::EmptyPath);
    }

    #[test]
    fn slot_from_path_tracks_pending_state() {
        let slot = ImageSlot::from_path(Some("Assets/10.jpg"));
        assert!(slot.is_pending());
        assert_eq!(slot.pending_path(), Some("Assets/10.jpg"));
        assert_eq!(slot.resolved(), None);
        assert_eq!(ImageSlot::from_path(None), ImageSlot::Empty);
    }
}
