// Copyright (c) 2025 - Cowboy AI, Inc.
//! Life Event Entity
//!
//! The atomic domain entity: a dated entry on the timeline. Events are
//! created from an [`EventDraft`] validated at the write boundary, and
//! edited through an [`EventPatch`] that can never touch `id` or
//! `created_at`.
//!
//! # Invariants
//! - `title` is non-empty at persistence time
//! - `date` is a valid calendar date
//! - at most six images
//! - `created_at` is set once at creation and strictly reflects insertion
//!   order; edits preserve it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use super::{EventDate, ImageSet, ImageSetError};

/// Draft validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventDraftError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Invalid image set: {0}")]
    InvalidImages(#[from] ImageSetError),
}

/// Opaque unique event identifier, assigned by the store on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Generate a fresh identifier (time-ordered v7)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dated entry on the timeline
///
/// `date` is when the real-world event occurred (user-editable, not unique,
/// not monotonic with creation order). `created_at` is the record creation
/// timestamp, used purely as a tie-break key and never shown to the user as
/// "the" date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    /// Immutable identity
    pub id: EventId,

    /// Non-empty event title
    pub title: String,

    /// Calendar date of the real-world event
    pub date: EventDate,

    /// Optional free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// Ordered short labels, may be empty
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,

    /// Ordered photo references, at most six
    #[serde(skip_serializing_if = "ImageSet::is_empty", default)]
    pub images: ImageSet,

    /// Record creation timestamp, set once, immutable
    pub created_at: DateTime<Utc>,
}

impl LifeEvent {
    /// Materialize a validated draft into an event record
    ///
    /// Called by the store on create; the store supplies the identity and
    /// the creation timestamp.
    pub fn from_draft(id: EventId, created_at: DateTime<Utc>, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            description: draft.description,
            tags: draft.tags,
            images: draft.images,
            created_at,
        }
    }

    /// Apply an edit, preserving `id` and `created_at`
    pub fn apply_patch(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
    }
}

/// Unpersisted event data, validated before any store call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Event title, must be non-empty after trimming
    pub title: String,

    /// Calendar date of the event
    pub date: EventDate,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Ordered tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Ordered photo references
    #[serde(default)]
    pub images: ImageSet,
}

impl EventDraft {
    /// Create a minimal draft with just a title and date
    pub fn new(title: impl Into<String>, date: EventDate) -> Self {
        Self {
            title: title.into(),
            date,
            description: String::new(),
            tags: Vec::new(),
            images: ImageSet::empty(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Attach images
    pub fn with_images(mut self, images: ImageSet) -> Self {
        self.images = images;
        self
    }

    /// Validate the draft before submission
    ///
    /// Rejected drafts never reach the store; no partial write occurs.
    pub fn validate(&self) -> Result<(), EventDraftError> {
        if self.title.trim().is_empty() {
            return Err(EventDraftError::EmptyTitle);
        }
        // The cap is enforced by ImageSet construction; re-checked here so a
        // draft deserialized from elsewhere cannot sneak past the boundary.
        ImageSet::new(self.images.as_slice().to_vec())?;
        Ok(())
    }
}

/// Partial edit of an existing event
///
/// Absent fields are left unchanged. `id` and `created_at` are not
/// expressible here, so an edit can never alter them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPatch {
    /// Replacement title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Replacement date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<EventDate>,

    /// Replacement description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Replacement tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Replacement images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageSet>,
}

impl EventPatch {
    /// Replace the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the date
    pub fn date(mut self, date: EventDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Replace the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the tags
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Replace the images
    pub fn images(mut self, images: ImageSet) -> Self {
        self.images = Some(images);
        self
    }

    /// Validate the patch before submission
    pub fn validate(&self) -> Result<(), EventDraftError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(EventDraftError::EmptyTitle);
            }
        }
        // Same re-check as EventDraft: a patch deserialized from the wire
        // never went through ImageSet construction.
        if let Some(images) = &self.images {
            ImageSet::new(images.as_slice().to_vec())?;
        }
        Ok(())
    }
}
