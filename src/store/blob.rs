// Copyright (c) 2025 - Cowboy AI, Inc.
//! Blob Store Abstraction
//!
//! Upload contract for event photos. Each upload is addressed by a
//! [`BlobKey`] of `(event_id, index, uploaded_at)`, making re-delivery of
//! the same payload idempotent. Re-uploads on edit do not delete prior
//! blobs; orphan cleanup is out of scope here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{EventId, ImageRef};
use crate::errors::CoreResult;

/// Addressing key for an uploaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobKey {
    /// The event the image belongs to
    pub event_id: EventId,

    /// Position within the event's image set (display order)
    pub index: usize,

    /// Upload timestamp, part of the idempotency key
    pub uploaded_at: DateTime<Utc>,
}

impl BlobKey {
    /// Key for the image at `index` of `event_id`, stamped now
    pub fn new(event_id: EventId, index: usize) -> Self {
        Self {
            event_id,
            index,
            uploaded_at: Utc::now(),
        }
    }

    /// Storage location derived from the key
    pub fn location(&self) -> String {
        format!(
            "events/{}/{}_{}",
            self.event_id,
            self.index,
            self.uploaded_at.timestamp_millis()
        )
    }
}

/// Blob store contract
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload an image payload, returning a stable retrievable reference
    ///
    /// Idempotent per key: re-sending the same key and payload yields the
    /// same reference.
    ///
    /// # Errors
    ///
    /// - `Upload` if the backing service rejects the payload
    async fn put(&self, key: BlobKey, bytes: Vec<u8>) -> CoreResult<ImageRef>;
}
