// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration for the timeline pipeline

use std::time::Duration;

/// Tunables for the timeline pipeline
///
/// Defaults: search activates at three characters, a failed scroll is
/// retried once after 100 ms. The six-image cap is a domain invariant, not
/// a tunable; see [`ImageSet::MAX_IMAGES`](crate::domain::ImageSet).
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    /// Minimum query length before search activates
    pub search_min_chars: usize,

    /// Delay before the single scroll retry
    pub scroll_retry_delay: Duration,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            search_min_chars: 3,
            scroll_retry_delay: Duration::from_millis(100),
        }
    }
}
