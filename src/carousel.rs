use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigurationError;

/// Reference to one image of a gallery, usually a path relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name part of the reference, used as the caption under carousel images.
    pub fn caption(&self) -> &str {
        Path::new(&self.0)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Cyclic cursor over a fixed, non-empty gallery.
///
/// The gallery never changes after construction and the cursor is always a
/// valid index into it, so navigation cannot fail.
#[derive(Debug, Clone)]
pub struct Carousel {
    name: String,
    images: Vec<ImageRef>,
    cursor: usize,
}

impl Carousel {
    /// Builds a carousel positioned on the first image.
    ///
    /// `name` only appears in diagnostics. An empty gallery is rejected here so
    /// that no navigation call ever has to deal with it.
    pub fn new(name: impl Into<String>, images: Vec<ImageRef>) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if images.is_empty() {
            return Err(ConfigurationError::EmptyGallery { gallery: name });
        }
        Ok(Self {
            name,
            images,
            cursor: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current(&self) -> &ImageRef {
        &self.images[self.cursor]
    }

    pub fn advance(&mut self) -> &ImageRef {
        self.cursor = (self.cursor + 1) % self.images.len();
        debug!(gallery = %self.name, cursor = self.cursor, "advance");
        self.current()
    }

    pub fn retreat(&mut self) -> &ImageRef {
        let len = self.images.len();
        self.cursor = (self.cursor + len - 1) % len;
        debug!(gallery = %self.name, cursor = self.cursor, "retreat");
        self.current()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of images. Always at least one.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; construction rejects empty galleries.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// One-based pagination label, e.g. `"2 / 6"`.
    pub fn position(&self) -> String {
        format!("{} / {}", self.cursor + 1, self.images.len())
    }
}
