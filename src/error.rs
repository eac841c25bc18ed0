use std::path::PathBuf;

use thiserror::Error;

use crate::carousel::ImageRef;

/// Setup-time failures. Any of these prevents the page from being built.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("gallery `{gallery}` has no images")]
    EmptyGallery { gallery: String },

    #[error("gallery id `{0}` is defined more than once")]
    DuplicateGallery(String),

    #[error("gallery `{0}` is shown by more than one block")]
    GalleryShownTwice(String),

    #[error("unknown gallery `{0}`")]
    UnknownGallery(String),

    #[error("anchor `{0}` is used by more than one section")]
    DuplicateAnchor(String),

    #[error("contribution table `{table}` names `{member}`, who is not on the roster")]
    UnknownMember { table: String, member: String },

    #[error("metric `{metric}` in `{table}` has value {value}, expected a number in [0, 1]")]
    MetricOutOfRange {
        table: String,
        metric: String,
        value: f64,
    },

    #[error("metric `{metric}` in `{table}` has {found} values but the table has {expected} value columns")]
    MetricShape {
        table: String,
        metric: String,
        expected: usize,
        found: usize,
    },

    #[error("{0} must not be empty")]
    EmptyName(&'static str),

    #[error("failed to read content file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),
}

/// An image reference could not be located or loaded.
///
/// Never fatal: renderers show the message in place of the image and keep
/// navigation usable.
#[derive(Debug, Error)]
#[error("image not found: {image}: {reason}")]
pub struct NotFoundError {
    pub image: ImageRef,
    pub reason: String,
}

impl NotFoundError {
    pub fn new(image: &ImageRef, reason: impl Into<String>) -> Self {
        Self {
            image: image.clone(),
            reason: reason.into(),
        }
    }
}
