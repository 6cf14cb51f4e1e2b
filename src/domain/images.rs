// Copyright (c) 2025 - Cowboy AI, Inc.
//! Image Set Value Object
//!
//! An ordered sequence of remote image references attached to an event.
//! Order is user-controlled and meaningful (display order). The set is
//! capped at [`ImageSet::MAX_IMAGES`] entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Image set validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageSetError {
    #[error("Event cannot carry more than {max} images: {actual}")]
    TooMany { max: usize, actual: usize },
}

/// A stable, retrievable reference to an uploaded image (remote URL once
/// persisted)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap a blob-store reference
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered image references, capped at six
///
/// # Examples
///
/// ```rust
/// use lifeline_core::domain::{ImageRef, ImageSet};
///
/// let set = ImageSet::new(vec![ImageRef::new("https://blob/a.jpg")]).unwrap();
/// assert_eq!(set.len(), 1);
///
/// let too_many: Vec<_> = (0..7).map(|i| ImageRef::new(format!("img-{i}"))).collect();
/// assert!(ImageSet::new(too_many).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSet(Vec<ImageRef>);

impl ImageSet {
    /// Maximum number of images per event
    pub const MAX_IMAGES: usize = 6;

    /// Create an image set, enforcing the cap
    pub fn new(images: Vec<ImageRef>) -> Result<Self, ImageSetError> {
        if images.len() > Self::MAX_IMAGES {
            return Err(ImageSetError::TooMany {
                max: Self::MAX_IMAGES,
                actual: images.len(),
            });
        }
        Ok(Self(images))
    }

    /// Create an empty image set
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Append a reference, enforcing the cap
    pub fn push(&mut self, image: ImageRef) -> Result<(), ImageSetError> {
        if self.0.len() >= Self::MAX_IMAGES {
            return Err(ImageSetError::TooMany {
                max: Self::MAX_IMAGES,
                actual: self.0.len() + 1,
            });
        }
        self.0.push(image);
        Ok(())
    }

    /// Parse an edit-flow navigation parameter carrying a JSON array of
    /// image URLs
    ///
    /// A payload that fails to parse, or that exceeds the cap, falls back to
    /// an empty set rather than failing the screen (the user simply re-picks
    /// photos).
    pub fn from_nav_param(param: &str) -> Self {
        match serde_json::from_str::<Vec<String>>(param) {
            Ok(urls) if urls.len() <= Self::MAX_IMAGES => {
                Self(urls.into_iter().map(ImageRef).collect())
            }
            _ => Self::empty(),
        }
    }

    /// Number of images in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the references in display order
    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.0.iter()
    }

    /// The references as a slice, in display order
    pub fn as_slice(&self) -> &[ImageRef] {
        &self.0
    }
}
