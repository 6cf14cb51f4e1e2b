// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timeline Derived-State Pipeline
//!
//! Pure functions that turn a raw event snapshot into everything the
//! timeline screen renders and scrolls against:
//!
//! ```text
//! store snapshot ──> aggregate() ──> DisplaySequence
//!                                        │
//!                  search() <── query    │
//!                  resolve  <── picked date
//!                                        ▼
//!                                  ScrollCommand (effect data)
//! ```
//!
//! All of these are total, synchronous, deterministic computations over
//! in-memory collections; the derived structures are recomputed wholesale
//! from each full snapshot, never patched incrementally.

pub mod aggregate;
pub mod resolve;
pub mod scroll;
pub mod search;

pub use aggregate::{aggregate, bucket_by_month, DisplayEntry, DisplaySequence, MonthBucket, Position};
pub use resolve::{latest_on, nearest};
pub use scroll::{ScrollCommand, ScrollRecovery, EVENT_VIEW_OFFSET, MATCH_VIEW_OFFSET};
pub use search::{search, SearchState};
