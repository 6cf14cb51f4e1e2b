// Copyright (c) 2025 - Cowboy AI, Inc.
//! Session Integration Tests
//!
//! Exercises the full loop: store writes → pushed snapshots → session
//! pipeline → scroll commands, plus the scoped subscription lifecycle.

mod fixtures;

use async_trait::async_trait;
use fixtures::date;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tokio_test::assert_ok;

use lifeline_core::domain::{EventDraft, EventPatch, LifeEvent};
use lifeline_core::errors::CoreError;
use lifeline_core::store::{EventStore, InMemoryEventStore, SnapshotHandler};
use lifeline_core::{TimelineConfig, TimelineSession};

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(1);

/// Route `tracing` output through the test harness when `RUST_LOG` is set
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Forwards pushed snapshots into a channel the test can await
struct ChannelHandler {
    tx: mpsc::UnboundedSender<Vec<LifeEvent>>,
}

#[async_trait]
impl SnapshotHandler for ChannelHandler {
    async fn on_snapshot(&self, events: Vec<LifeEvent>) {
        let _ = self.tx.send(events);
    }

    async fn on_error(&self, _error: CoreError) {}
}

fn channel_handler() -> (Arc<ChannelHandler>, mpsc::UnboundedReceiver<Vec<LifeEvent>>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(ChannelHandler { tx }), rx)
}

async fn next_snapshot(rx: &mut mpsc::UnboundedReceiver<Vec<LifeEvent>>) -> Vec<LifeEvent> {
    timeout(DELIVERY_TIMEOUT, rx.recv())
        .await
        .expect("snapshot delivery timed out")
        .expect("subscription channel closed")
}

#[tokio::test]
async fn subscription_delivers_initial_and_subsequent_snapshots() {
    init_tracing();
    let store = InMemoryEventStore::new();
    store
        .create(EventDraft::new("Graduated", date("2015-06-10")))
        .await
        .unwrap();

    let (handler, mut rx) = channel_handler();
    let _guard = store.subscribe(handler).await.unwrap();

    // Registration delivers the current collection immediately
    let initial = next_snapshot(&mut rx).await;
    assert_eq!(initial.len(), 1);

    store
        .create(EventDraft::new("First Job", date("2018-09-01")))
        .await
        .unwrap();
    let after_create = next_snapshot(&mut rx).await;
    assert_eq!(after_create.len(), 2);
}

#[tokio::test]
async fn dropping_the_guard_detaches_the_listener() {
    let store = InMemoryEventStore::new();
    let (handler, mut rx) = channel_handler();

    let guard = store.subscribe(handler).await.unwrap();
    next_snapshot(&mut rx).await; // Initial delivery

    drop(guard);

    store
        .create(EventDraft::new("Unseen", date("2024-01-01")))
        .await
        .unwrap();

    // The channel closes once the aborted task drops its sender
    let outcome = timeout(DELIVERY_TIMEOUT, rx.recv()).await;
    assert!(matches!(outcome, Ok(None)), "listener kept delivering after release");
}

#[tokio::test]
async fn snapshots_flow_through_the_session_pipeline() {
    let store = InMemoryEventStore::new();
    let (handler, mut rx) = channel_handler();
    let _guard = store.subscribe(handler).await.unwrap();
    next_snapshot(&mut rx).await; // Initial, empty

    let mut session = TimelineSession::new(TimelineConfig::default());

    store
        .create(EventDraft::new("Graduated", date("2015-06-10")))
        .await
        .unwrap();
    store
        .create(EventDraft::new("Got Married", date("2021-05-20")))
        .await
        .unwrap();

    next_snapshot(&mut rx).await;
    let snapshot = next_snapshot(&mut rx).await;
    session.apply_snapshot(&snapshot);

    // 2 events + 2 month labels
    assert_eq!(session.sequence().len(), 4);

    // Post-save jump lands on the event just created
    let command = session.jump_to_created(date("2021-05-20")).unwrap();
    assert_eq!(
        session.sequence()[command.position]
            .as_event()
            .map(|e| e.title.as_str()),
        Some("Got Married")
    );
}

#[tokio::test]
async fn edits_reach_subscribers_with_created_at_intact() {
    let store = InMemoryEventStore::new();
    let id = store
        .create(EventDraft::new("Graduated", date("2015-06-10")))
        .await
        .unwrap();

    let (handler, mut rx) = channel_handler();
    let _guard = store.subscribe(handler).await.unwrap();
    let initial = next_snapshot(&mut rx).await;
    let created_at = initial[0].created_at;

    store
        .update(id, EventPatch::default().title("Graduated High School"))
        .await
        .unwrap();

    let updated = next_snapshot(&mut rx).await;
    assert_eq!(updated[0].title, "Graduated High School");
    assert_eq!(updated[0].created_at, created_at);
}

#[tokio::test]
async fn delete_empties_the_derived_timeline() {
    let store = InMemoryEventStore::new();
    let id = store
        .create(EventDraft::new("Graduated", date("2015-06-10")))
        .await
        .unwrap();

    let (handler, mut rx) = channel_handler();
    let _guard = store.subscribe(handler).await.unwrap();
    next_snapshot(&mut rx).await;

    assert_ok!(store.delete(id).await);
    let snapshot = next_snapshot(&mut rx).await;

    let mut session = TimelineSession::new(TimelineConfig::default());
    session.apply_snapshot(&snapshot);
    assert!(session.sequence().is_empty());
    assert!(session.jump_to_date(date("2015-06-10")).is_none());
}
