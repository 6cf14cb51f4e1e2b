// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Store Implementations
//!
//! Reference implementations of [`EventStore`] and [`BlobStore`] backed by
//! in-process maps, with full-snapshot push delivery over a broadcast
//! channel. Used by the integration tests and by embedders that want the
//! pipeline without a remote backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use crate::domain::{EventDraft, EventId, EventPatch, ImageRef, LifeEvent};
use crate::errors::{CoreError, CoreResult};

use super::blob::{BlobKey, BlobStore};
use super::{EventStore, SnapshotHandler, SubscriptionGuard};

/// Buffered snapshots per subscriber before deliveries coalesce
const SNAPSHOT_BUFFER: usize = 16;

/// In-memory event store with push-style snapshot delivery
///
/// Every successful write publishes the full, authoritative collection to
/// all subscribers. A slow subscriber may miss intermediate snapshots and
/// only observe the most recent one, matching the coalescing contract of
/// the remote store.
#[derive(Debug, Clone)]
pub struct InMemoryEventStore {
    records: Arc<RwLock<HashMap<EventId, LifeEvent>>>,
    snapshots: broadcast::Sender<Vec<LifeEvent>>,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (snapshots, _) = broadcast::channel(SNAPSHOT_BUFFER);
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            snapshots,
        }
    }

    /// The current full event collection, unordered
    pub async fn snapshot(&self) -> Vec<LifeEvent> {
        self.records.read().await.values().cloned().collect()
    }

    async fn publish(&self) {
        // Send while holding the read lock so every delivered snapshot
        // reflects the state at its send point; sends stay in write order.
        let records = self.records.read().await;
        // No receivers is fine; the next subscriber gets the collection on
        // registration anyway.
        let _ = self.snapshots.send(records.values().cloned().collect());
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, draft: EventDraft) -> CoreResult<EventId> {
        draft
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        let id = EventId::new();
        let event = LifeEvent::from_draft(id, chrono::Utc::now(), draft);

        self.records.write().await.insert(id, event);
        info!(%id, "event created");
        self.publish().await;

        Ok(id)
    }

    async fn update(&self, id: EventId, patch: EventPatch) -> CoreResult<()> {
        patch
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        {
            let mut records = self.records.write().await;
            let event = records
                .get_mut(&id)
                .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
            event.apply_patch(patch);
        }

        debug!(%id, "event updated");
        self.publish().await;
        Ok(())
    }

    async fn delete(&self, id: EventId) -> CoreResult<()> {
        self.records
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        debug!(%id, "event deleted");
        self.publish().await;
        Ok(())
    }

    async fn subscribe(&self, handler: Arc<dyn SnapshotHandler>) -> CoreResult<SubscriptionGuard> {
        // Register the receiver and read the initial collection under one
        // read lock: no write can land in between, so nothing already
        // buffered for this receiver is older than the initial snapshot.
        let (mut receiver, initial) = {
            let records = self.records.read().await;
            let receiver = self.snapshots.subscribe();
            let initial: Vec<LifeEvent> = records.values().cloned().collect();
            (receiver, initial)
        };

        let task = tokio::spawn(async move {
            handler.on_snapshot(initial).await;

            loop {
                match receiver.recv().await {
                    Ok(snapshot) => handler.on_snapshot(snapshot).await,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Coalesced delivery: only the latest snapshot matters
                        debug!(skipped, "snapshot receiver lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        handler
                            .on_error(CoreError::Subscription(
                                "store dropped while subscribed".to_string(),
                            ))
                            .await;
                        break;
                    }
                }
            }
        });

        info!("snapshot subscription registered");
        Ok(SubscriptionGuard::new(task))
    }
}

/// In-memory blob store
///
/// Uploads are idempotent per [`BlobKey`]; prior blobs orphaned by an edit
/// are kept; orphan cleanup is out of scope.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryBlobStore {
    /// Create an empty blob store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs
    pub async fn blob_count(&self) -> usize {
        self.blobs.read().await.len()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(&self, key: BlobKey, bytes: Vec<u8>) -> CoreResult<ImageRef> {
        let location = key.location();
        self.blobs
            .write()
            .await
            .insert(location.clone(), bytes);
        debug!(%location, "blob stored");
        Ok(ImageRef::new(format!("memory://{location}")))
    }
}
