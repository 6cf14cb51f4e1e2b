// Copyright (c) 2025 - Cowboy AI, Inc.
//! Date-to-Position Resolver
//!
//! Maps a calendar date to a position in the flattened timeline, for the two
//! scroll-to-date flows:
//!
//! - [`nearest`] (calendar strip tap): the event whose date is closest to
//!   the target, in absolute days.
//! - [`latest_on`] (post-save jump): the most recently created event on
//!   exactly the target date.
//!
//! Both return `None` when nothing resolves. A miss is an expected outcome
//! (the user tapped a date with no events), not an error.

use crate::domain::EventDate;

use super::aggregate::{DisplayEntry, DisplaySequence, Position};

/// Position of the event dated closest to `target`
///
/// Ties are broken by first occurrence in sequence order. `None` when the
/// sequence contains no event entries.
pub fn nearest(sequence: &DisplaySequence, target: EventDate) -> Option<Position> {
    let mut best: Option<(Position, i64)> = None;

    for (position, entry) in sequence.iter().enumerate() {
        if let DisplayEntry::Event(event) = entry {
            let distance = event.date.days_between(&target);
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((position, distance)),
            }
        }
    }

    best.map(|(position, _)| position)
}

/// Position of the last event in sequence order dated exactly `target`
///
/// Within a month bucket same-day events are ordered `created_at`-ascending,
/// so the last exact match is the most recently created one: the event the
/// user just saved. `None` when no event has that exact date.
pub fn latest_on(sequence: &DisplaySequence, target: EventDate) -> Option<Position> {
    let mut found = None;

    for (position, entry) in sequence.iter().enumerate() {
        if let DisplayEntry::Event(event) = entry {
            if event.date == target {
                found = Some(position);
            }
        }
    }

    found
}
