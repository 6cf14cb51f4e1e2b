// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared test fixtures
#![allow(dead_code)] // Not every suite uses every helper

use chrono::{Duration, TimeZone, Utc};
use lifeline_core::domain::{EventDate, EventDraft, EventId, LifeEvent};

/// Build an event with a deterministic `created_at`
///
/// `created_offset_secs` is added to a fixed epoch, so relative creation
/// order is explicit in every test.
pub fn event(title: &str, date: &str, created_offset_secs: i64) -> LifeEvent {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        + Duration::seconds(created_offset_secs);
    LifeEvent::from_draft(
        EventId::new(),
        created_at,
        EventDraft::new(title, EventDate::parse(date).unwrap()),
    )
}

/// Build an event with a description
pub fn described_event(
    title: &str,
    description: &str,
    date: &str,
    created_offset_secs: i64,
) -> LifeEvent {
    let mut built = event(title, date, created_offset_secs);
    built.description = description.to_string();
    built
}

/// Parse a date literal
pub fn date(s: &str) -> EventDate {
    EventDate::parse(s).unwrap()
}
