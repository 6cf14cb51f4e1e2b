// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Store Abstraction
//!
//! The contract between the timeline core and its persistence collaborator
//! (a remote real-time document store in the reference deployment).
//!
//! # Architecture
//!
//! ```text
//! EventDraft ──> create/update/delete ──> Store ──> full snapshot push
//!                                                        │
//!                                            SnapshotHandler.on_snapshot
//!                                                        │
//!                                                TimelineSession
//! ```
//!
//! # Subscription contract
//!
//! - Every push delivers the **full, authoritative** event collection, not a
//!   diff; field ordering is unspecified and sorting is the aggregator's job.
//! - Rapid successive writes may coalesce into one delivery; only the most
//!   recent snapshot is guaranteed to be seen.
//! - The listener is registered once per screen lifetime and must be
//!   released when the screen goes away: dropping the returned
//!   [`SubscriptionGuard`] detaches it synchronously. Holding guards across
//!   repeated screen entry/exit without dropping them leaks listeners.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::{EventDraft, EventId, EventPatch, LifeEvent};
use crate::errors::{CoreError, CoreResult};

pub mod blob;
pub mod memory;

pub use blob::{BlobKey, BlobStore};
pub use memory::{InMemoryBlobStore, InMemoryEventStore};

/// Receiver for pushed store snapshots
#[async_trait]
pub trait SnapshotHandler: Send + Sync {
    /// Called with the full event collection on every remote change
    async fn on_snapshot(&self, events: Vec<LifeEvent>);

    /// Called when the subscription fails
    async fn on_error(&self, error: CoreError);
}

/// Event store contract
///
/// The store owns the canonical event records. Writes are asynchronous and
/// may fail with network or auth errors; failures surface to the user as
/// alerts and are never retried automatically by the core.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persist a new event from a validated draft
    ///
    /// The store assigns the identity and the immutable `created_at`
    /// timestamp.
    ///
    /// # Errors
    ///
    /// - `Validation` if the draft fails validation (no partial write)
    /// - `Storage` if the backing service rejects the write
    async fn create(&self, draft: EventDraft) -> CoreResult<EventId>;

    /// Apply a partial edit to an existing event
    ///
    /// `id` and `created_at` are preserved unconditionally.
    ///
    /// # Errors
    ///
    /// - `Validation` if the patch fails validation
    /// - `NotFound` if no event has this id
    async fn update(&self, id: EventId, patch: EventPatch) -> CoreResult<()>;

    /// Delete an event
    ///
    /// # Errors
    ///
    /// - `NotFound` if no event has this id
    async fn delete(&self, id: EventId) -> CoreResult<()>;

    /// Register a snapshot listener
    ///
    /// Delivers the current collection immediately, then again on every
    /// change. The subscription lives until the returned guard is dropped.
    async fn subscribe(&self, handler: Arc<dyn SnapshotHandler>) -> CoreResult<SubscriptionGuard>;
}

/// Scoped handle to an active snapshot subscription
///
/// Dropping the guard aborts the delivery task, synchronously detaching the
/// listener. There is no in-flight computation to cancel: snapshot handling
/// downstream is synchronous.
#[derive(Debug)]
pub struct SubscriptionGuard {
    task: JoinHandle<()>,
}

impl SubscriptionGuard {
    /// Wrap the delivery task driving a subscription
    pub fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.task.abort();
        debug!("snapshot subscription released");
    }
}
