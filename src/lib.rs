//! Timeline core for the Lifeline journal application
//!
//! This crate owns the derived-state pipeline behind the timeline screen:
//! grouping a live event snapshot into month buckets, substring search with
//! cyclic match navigation, date-to-position resolution for scroll-to-date,
//! and the scroll recovery policy. It also defines the contracts to the
//! external collaborators (event store, blob store) that the presentation
//! layer wires in.

pub mod config;
pub mod domain;
pub mod errors;
pub mod session;
pub mod store;
pub mod timeline;

// Re-export commonly used types
pub use config::TimelineConfig;
pub use domain::{EventDate, EventDraft, EventId, EventPatch, ImageRef, ImageSet, LifeEvent};
pub use errors::{CoreError, CoreResult};
pub use session::{SaveGuard, TimelineSession};
pub use store::{BlobStore, EventStore, SnapshotHandler, SubscriptionGuard};
pub use timeline::{
    aggregate, search, DisplayEntry, DisplaySequence, Position, ScrollCommand, ScrollRecovery,
    SearchState,
};
