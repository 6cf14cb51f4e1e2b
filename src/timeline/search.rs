// Copyright (c) 2025 - Cowboy AI, Inc.
//! Search Index & Navigator
//!
//! Case-insensitive substring search over the flattened timeline, with a
//! cyclic match cursor for next/previous navigation.
//!
//! Queries shorter than the activation threshold (three characters by
//! default) produce an empty state: no filtering, no highlight. This keeps
//! one- and two-character substrings from matching half the timeline.
//!
//! The state is recomputed from scratch on every query change and on every
//! sequence rebuild while a query is active; match positions are only valid
//! against the sequence they were computed from.

use serde::{Deserialize, Serialize};

use super::aggregate::{DisplayEntry, DisplaySequence, Position};

/// Ephemeral search state for one timeline session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// The active query (empty when search is inactive)
    pub query: String,

    /// Positions of matching event entries, in sequence order
    pub matched: Vec<Position>,

    /// Cursor into `matched`
    pub current: usize,
}

impl SearchState {
    /// Whether there are no matches (inactive query included)
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// Number of matches
    pub fn match_count(&self) -> usize {
        self.matched.len()
    }

    /// The position the presentation layer should scroll to
    pub fn target(&self) -> Option<Position> {
        self.matched.get(self.current).copied()
    }

    /// Advance the cursor cyclically; no-op with zero matches
    pub fn next(&mut self) -> Option<Position> {
        if self.matched.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.matched.len();
        self.target()
    }

    /// Step the cursor back cyclically; no-op with zero matches
    pub fn previous(&mut self) -> Option<Position> {
        if self.matched.is_empty() {
            return None;
        }
        self.current = (self.current + self.matched.len() - 1) % self.matched.len();
        self.target()
    }
}

/// Filter the sequence by a query
///
/// Matches case-insensitively against event titles and descriptions; month
/// labels never match. Queries below `min_chars` yield an empty state. A
/// non-empty result starts with the cursor on the first match in sequence
/// order.
pub fn search(sequence: &DisplaySequence, query: &str, min_chars: usize) -> SearchState {
    if query.chars().count() < min_chars {
        return SearchState::default();
    }

    let needle = query.to_lowercase();
    let matched: Vec<Position> = sequence
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| match entry {
            DisplayEntry::Event(event)
                if event.title.to_lowercase().contains(&needle)
                    || event.description.to_lowercase().contains(&needle) =>
            {
                Some(position)
            }
            _ => None,
        })
        .collect();

    SearchState {
        query: query.to_string(),
        matched,
        current: 0,
    }
}
