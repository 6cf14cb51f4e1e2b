// Copyright (c) 2025 - Cowboy AI, Inc.
//! Lifeline Domain Models
//!
//! Core domain concepts for the timeline: the `LifeEvent` entity and the
//! value objects it is built from.
//!
//! # Value Objects with Invariants
//!
//! - [`EventDate`] - calendar date (year-month-day, no time component)
//! - [`ImageSet`] - ordered photo references, capped at six
//!
//! # Entities
//!
//! - [`LifeEvent`] - a dated entry on the timeline, with its write-boundary
//!   companions [`EventDraft`] and [`EventPatch`]

pub mod event;
pub mod event_date;
pub mod images;

// Re-export value objects and entities
pub use event::{EventDraft, EventDraftError, EventId, EventPatch, LifeEvent};
pub use event_date::{EventDate, EventDateError, MonthKey};
pub use images::{ImageRef, ImageSet, ImageSetError};
