// Copyright (c) 2025 - Cowboy AI, Inc.
//! Scroll Commands and Recovery Policy
//!
//! Scroll requests are returned as data, not performed: the pipeline decides
//! *where* to scroll, the presentation layer owns the list and performs the
//! actual scroll. This keeps the pipeline pure and the scroll behavior
//! testable without a UI.
//!
//! A scroll to a position the list has not laid out yet can fail. The
//! recovery policy retries exactly once after a fixed delay (100 ms by
//! default), then gives up silently. Best-effort only; a permanently failed
//! scroll is never reported to the user.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::aggregate::Position;

/// Viewport alignment for search matches: high enough that the match stays
/// visible above an on-screen keyboard
pub const MATCH_VIEW_OFFSET: f32 = 0.3;

/// Viewport alignment for date jumps: top of the list
pub const EVENT_VIEW_OFFSET: f32 = 0.0;

/// A scroll request for the presentation layer to execute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollCommand {
    /// Target position in the current display sequence
    pub position: Position,

    /// Whether the scroll should animate
    pub animated: bool,

    /// Fraction of the viewport height at which the target aligns
    /// (0.0 = top, 0.5 = centered)
    pub view_offset: f32,
}

impl ScrollCommand {
    /// Scroll to a search match, offset so it clears the keyboard
    pub fn to_match(position: Position) -> Self {
        Self {
            position,
            animated: true,
            view_offset: MATCH_VIEW_OFFSET,
        }
    }

    /// Scroll to an event card (calendar strip tap or post-save jump)
    pub fn to_event(position: Position) -> Self {
        Self {
            position,
            animated: true,
            view_offset: EVENT_VIEW_OFFSET,
        }
    }
}

/// Retry policy for scrolls the list could not satisfy yet
#[derive(Debug, Clone)]
pub struct ScrollRecovery {
    retry_delay: Duration,
}

impl Default for ScrollRecovery {
    fn default() -> Self {
        Self {
            retry_delay: Duration::from_millis(100),
        }
    }
}

impl ScrollRecovery {
    /// Create a policy with a custom retry delay
    pub fn new(retry_delay: Duration) -> Self {
        Self { retry_delay }
    }

    /// The delay applied before the single retry
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Run a scroll attempt, retrying once after the delay on failure
    ///
    /// `attempt` returns whether the scroll succeeded. Returns the outcome
    /// of the last attempt; a second failure is swallowed and never
    /// surfaced to the user.
    pub async fn run<F>(&self, command: ScrollCommand, mut attempt: F) -> bool
    where
        F: FnMut(ScrollCommand) -> bool,
    {
        if attempt(command) {
            return true;
        }

        debug!(
            position = command.position,
            delay_ms = self.retry_delay.as_millis() as u64,
            "scroll failed, retrying once"
        );
        tokio::time::sleep(self.retry_delay).await;

        let recovered = attempt(command);
        if !recovered {
            debug!(position = command.position, "scroll retry failed, giving up");
        }
        recovered
    }
}
