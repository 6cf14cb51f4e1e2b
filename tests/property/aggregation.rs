// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Timeline Aggregation
//!
//! Verifies the ordering and totality guarantees of the aggregation
//! pipeline over arbitrary event collections: grouping correctness, month
//! ordering, same-day tie-breaks, idempotence, and the search activation
//! threshold.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use lifeline_core::domain::{EventDate, EventDraft, EventId, LifeEvent};
use lifeline_core::timeline::{aggregate, search, DisplayEntry};

/// Generate a valid calendar date within a narrow band of years
///
/// Days are capped at 28 so every (year, month, day) combination is valid.
fn event_date() -> impl Strategy<Value = EventDate> {
    (2015i32..2026, 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| EventDate::from_ymd(year, month, day).unwrap())
}

/// Generate an event collection with unique, index-derived `created_at`
/// values (the store's uniqueness contract)
fn event_collection() -> impl Strategy<Value = Vec<LifeEvent>> {
    prop::collection::vec((event_date(), "[a-z]{1,12}"), 0..40).prop_map(|drafts| {
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        drafts
            .into_iter()
            .enumerate()
            .map(|(index, (date, title))| {
                LifeEvent::from_draft(
                    EventId::new(),
                    epoch + Duration::seconds(index as i64),
                    EventDraft::new(title, date),
                )
            })
            .collect()
    })
}

proptest! {
    /// Every input event appears in the output exactly once, and always
    /// under a label matching its own month
    #[test]
    fn prop_grouping_is_a_partition(events in event_collection()) {
        let sequence = aggregate(&events);

        let event_entries: Vec<_> = sequence
            .iter()
            .filter_map(DisplayEntry::as_event)
            .collect();
        prop_assert_eq!(event_entries.len(), events.len());

        for event in &events {
            let occurrences = event_entries.iter().filter(|e| e.id == event.id).count();
            prop_assert_eq!(occurrences, 1, "event must appear exactly once");
        }

        // Walking forward, the first label at or after an event entry is
        // that event's own month label
        for (index, entry) in sequence.iter().enumerate() {
            if let DisplayEntry::Event(event) = entry {
                let label = sequence[index..]
                    .iter()
                    .find_map(|e| match e {
                        DisplayEntry::MonthLabel(l) => Some(l.clone()),
                        DisplayEntry::Event(_) => None,
                    })
                    .expect("every event is followed by its month label");
                prop_assert_eq!(label, event.date.month_label());
            }
        }
    }

    /// Month groups run newest-to-oldest and dates inside a month descend,
    /// with same-day events in `created_at`-ascending order
    #[test]
    fn prop_sequence_ordering(events in event_collection()) {
        let sequence = aggregate(&events);

        let mut previous_month_key: Option<(i32, u32)> = None;
        let mut previous_in_month: Option<&LifeEvent> = None;

        for entry in &sequence {
            match entry {
                DisplayEntry::MonthLabel(_) => {
                    // Bucket boundary: reset the within-month comparison
                    if let Some(event) = previous_in_month.take() {
                        if let Some(prev_key) = previous_month_key {
                            prop_assert!(
                                event.date.month_key() < prev_key,
                                "months must run newest to oldest"
                            );
                        }
                        previous_month_key = Some(event.date.month_key());
                    }
                }
                DisplayEntry::Event(event) => {
                    if let Some(previous) = previous_in_month {
                        prop_assert!(
                            previous.date >= event.date,
                            "dates inside a month must descend"
                        );
                        if previous.date == event.date {
                            prop_assert!(
                                previous.created_at < event.created_at,
                                "same-day events must ascend by created_at"
                            );
                        }
                    }
                    previous_in_month = Some(event);
                }
            }
        }
    }

    /// Aggregation is deterministic: same collection, same sequence
    #[test]
    fn prop_aggregation_is_idempotent(events in event_collection()) {
        prop_assert_eq!(aggregate(&events), aggregate(&events));
    }

    /// Aggregation never depends on input order
    #[test]
    fn prop_input_order_is_irrelevant(events in event_collection()) {
        let mut reversed = events.clone();
        reversed.reverse();
        prop_assert_eq!(aggregate(&events), aggregate(&reversed));
    }

    /// Queries below the activation threshold never match anything
    #[test]
    fn prop_short_queries_are_inactive(
        events in event_collection(),
        query in "[a-z]{0,2}",
    ) {
        let sequence = aggregate(&events);
        let state = search(&sequence, &query, 3);
        prop_assert!(state.is_empty());
        prop_assert!(state.query.is_empty());
    }

    /// Every reported match position points at an event entry whose title
    /// or description contains the query, case-insensitively
    #[test]
    fn prop_matches_point_at_matching_events(
        events in event_collection(),
        query in "[a-z]{3,6}",
    ) {
        let sequence = aggregate(&events);
        let state = search(&sequence, &query, 3);

        for position in &state.matched {
            let event = sequence[*position]
                .as_event()
                .expect("matches must point at event entries");
            let haystack = format!(
                "{} {}",
                event.title.to_lowercase(),
                event.description.to_lowercase()
            );
            prop_assert!(haystack.contains(&query));
        }
    }
}
