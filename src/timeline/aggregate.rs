// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timeline Aggregator
//!
//! Groups a flat, unordered event snapshot into ordered month buckets and
//! flattens them into the single sequence the timeline list renders.
//!
//! # Ordering rules
//!
//! - Months are ordered newest first.
//! - Within a month, events are ordered date-descending; events sharing a
//!   date are ordered by `created_at` ascending, so a newly added same-day
//!   event lands after its older siblings.
//! - Each month's label entry trails the month's events in the flattened
//!   sequence. The consuming list renders inverted, which puts the label
//!   visually above its events; a non-inverting renderer should reverse the
//!   sequence rather than change this ordering.
//!
//! Aggregation is a total function: an empty snapshot yields an empty
//! sequence, and unparseable dates cannot occur here because [`EventDate`]
//! is validated at the write boundary.
//!
//! [`EventDate`]: crate::domain::EventDate

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{LifeEvent, MonthKey};

/// Index into the current [`DisplaySequence`]
///
/// Positions are only meaningful against the sequence they were computed
/// from; every snapshot rebuild invalidates previously computed positions.
pub type Position = usize;

/// One renderable entry in the flattened timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayEntry {
    /// An event card
    Event(LifeEvent),

    /// A month separator label, e.g. `"June 2015"`
    MonthLabel(String),
}

impl DisplayEntry {
    /// The event carried by this entry, if it is one
    pub fn as_event(&self) -> Option<&LifeEvent> {
        match self {
            DisplayEntry::Event(event) => Some(event),
            DisplayEntry::MonthLabel(_) => None,
        }
    }
}

/// The flattened, render-ready timeline
pub type DisplaySequence = Vec<DisplayEntry>;

/// All events of one calendar month, sorted for display
///
/// Derived and disposable: rebuilt from scratch on every snapshot, never
/// mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    /// Calendar year
    pub year: i32,

    /// Calendar month (1-12)
    pub month: u32,

    /// Human-readable label, e.g. `"June 2015"`
    pub label: String,

    /// Member events, date-descending then `created_at`-ascending
    pub events: Vec<LifeEvent>,
}

/// Group a snapshot into month buckets, newest month first
pub fn bucket_by_month(events: &[LifeEvent]) -> Vec<MonthBucket> {
    let mut groups: BTreeMap<MonthKey, Vec<LifeEvent>> = BTreeMap::new();
    for event in events {
        groups
            .entry(event.date.month_key())
            .or_default()
            .push(event.clone());
    }

    groups
        .into_iter()
        .rev()
        .map(|((year, month), mut members)| {
            members.sort_by(|a, b| {
                b.date
                    .cmp(&a.date)
                    .then_with(|| a.created_at.cmp(&b.created_at))
            });
            let label = members[0].date.month_label();
            MonthBucket {
                year,
                month,
                label,
                events: members,
            }
        })
        .collect()
}

/// Flatten a snapshot into the render-ready timeline sequence
///
/// For each month bucket (newest first), emits the bucket's sorted events
/// followed by one [`DisplayEntry::MonthLabel`].
pub fn aggregate(events: &[LifeEvent]) -> DisplaySequence {
    let buckets = bucket_by_month(events);
    let mut sequence = Vec::with_capacity(events.len() + buckets.len());

    for bucket in buckets {
        let label = bucket.label;
        sequence.extend(bucket.events.into_iter().map(DisplayEntry::Event));
        sequence.push(DisplayEntry::MonthLabel(label));
    }

    sequence
}
