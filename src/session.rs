// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timeline Session
//!
//! The reducer pipeline behind one timeline screen. Three independent
//! inputs (the latest store snapshot, the search query, a picked calendar
//! date) each deterministically recompute the derived state they affect;
//! nothing is patched incrementally.
//!
//! ```text
//! apply_snapshot ──> aggregate ──> DisplaySequence ──┐
//! set_query ───────> search ─────> SearchState ──────┼──> Option<ScrollCommand>
//! jump_to_*  ───────> resolve ───────────────────────┘
//! ```
//!
//! Every transition returns the scroll command it implies (if any) as data;
//! the presentation layer executes it, falling back to
//! [`ScrollRecovery`](crate::timeline::ScrollRecovery) when the list is not
//! laid out that far yet.

use tracing::debug;

use crate::config::TimelineConfig;
use crate::domain::{EventDate, LifeEvent};
use crate::timeline::{
    aggregate, latest_on, nearest, search, DisplaySequence, ScrollCommand, ScrollRecovery,
    SearchState,
};

/// Derived state for one timeline screen
///
/// Single-owner and session-local: the sequence and search state are
/// recomputed wholesale on each input change, so no locking is needed.
#[derive(Debug, Default)]
pub struct TimelineSession {
    config: TimelineConfig,
    sequence: DisplaySequence,
    query: String,
    search: SearchState,
}

impl TimelineSession {
    /// Create a session with the given configuration
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            config,
            sequence: DisplaySequence::new(),
            query: String::new(),
            search: SearchState::default(),
        }
    }

    /// The current render-ready sequence
    pub fn sequence(&self) -> &DisplaySequence {
        &self.sequence
    }

    /// The current search state
    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    /// Ingest a full store snapshot
    ///
    /// Rebuilds the display sequence (invalidating all previously computed
    /// positions) and re-runs the active search against it. Returns the
    /// scroll command for the current match, if a query is active and still
    /// matches.
    pub fn apply_snapshot(&mut self, events: &[LifeEvent]) -> Option<ScrollCommand> {
        self.sequence = aggregate(events);
        self.search = search(&self.sequence, &self.query, self.config.search_min_chars);

        debug!(
            events = events.len(),
            entries = self.sequence.len(),
            matches = self.search.match_count(),
            "snapshot applied"
        );

        self.search.target().map(ScrollCommand::to_match)
    }

    /// Change the search query
    ///
    /// Queries below the activation threshold reset the search state.
    /// Returns the scroll command for the first match, if any.
    pub fn set_query(&mut self, query: &str) -> Option<ScrollCommand> {
        self.query = query.to_string();
        self.search = search(&self.sequence, &self.query, self.config.search_min_chars);
        self.search.target().map(ScrollCommand::to_match)
    }

    /// Advance to the next match, cyclically
    pub fn next_match(&mut self) -> Option<ScrollCommand> {
        self.search.next().map(ScrollCommand::to_match)
    }

    /// Step back to the previous match, cyclically
    pub fn previous_match(&mut self) -> Option<ScrollCommand> {
        self.search.previous().map(ScrollCommand::to_match)
    }

    /// Calendar strip tap: scroll to the event dated closest to `target`
    ///
    /// `None` (no scroll, no error) when the timeline has no events.
    pub fn jump_to_date(&self, target: EventDate) -> Option<ScrollCommand> {
        nearest(&self.sequence, target).map(ScrollCommand::to_event)
    }

    /// Post-save jump: scroll to the most recently created event dated
    /// exactly `target`
    pub fn jump_to_created(&self, target: EventDate) -> Option<ScrollCommand> {
        latest_on(&self.sequence, target).map(ScrollCommand::to_event)
    }

    /// The recovery policy for scrolls this session's commands imply
    pub fn scroll_recovery(&self) -> ScrollRecovery {
        ScrollRecovery::new(self.config.scroll_retry_delay)
    }
}

/// Busy flag suppressing duplicate in-flight saves
///
/// The presentation layer disables destructive or duplicate actions (a
/// second tap on "save") while a store write is outstanding. A plain
/// boolean guard, deliberately not a queue or semaphore.
#[derive(Debug, Default)]
pub struct SaveGuard {
    busy: bool,
}

impl SaveGuard {
    /// Try to begin an operation; `false` if one is already outstanding
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Mark the outstanding operation finished
    pub fn finish(&mut self) {
        self.busy = false;
    }

    /// Whether an operation is outstanding
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}
