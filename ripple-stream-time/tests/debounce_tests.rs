// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{Notification, RippleError};
use ripple_runtime::TokioRuntime;
use ripple_stream_time::prelude::*;
use ripple_test_utils::test_data::{person_alice, person_bob, person_charlie, TestData};
use ripple_test_utils::{user_error, Recorder, TestSource};
use std::time::Duration;
use tokio::time::sleep;

const QUIET: Duration = Duration::from_millis(500);

#[tokio::test(start_paused = true)]
async fn test_debounce_emits_after_quiet_period() {
    // Arrange
    let source = TestSource::<TestData>::new();
    let (recorder, _subscription) = Recorder::subscribe(&source.observable().debounce(QUIET));

    // Act
    source.next(person_alice());
    sleep(Duration::from_millis(400)).await;
    let early = recorder.values();
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert!(early.is_empty());
    assert_eq!(recorder.values(), vec![person_alice()]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_resets_on_new_value() {
    // Arrange
    let source = TestSource::<TestData>::new();
    let (recorder, _subscription) = Recorder::subscribe(&source.observable().debounce(QUIET));

    // Act
    source.next(person_alice());
    sleep(Duration::from_millis(300)).await;
    source.next(person_bob());
    sleep(Duration::from_millis(300)).await;
    let before_quiet = recorder.values();
    sleep(Duration::from_millis(300)).await;

    // Assert
    assert!(before_quiet.is_empty());
    assert_eq!(recorder.values(), vec![person_bob()]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_emits_each_settled_value() {
    // Arrange
    let source = TestSource::<TestData>::new();
    let (recorder, _subscription) = Recorder::subscribe(&source.observable().debounce(QUIET));

    // Act
    source.next(person_alice());
    sleep(Duration::from_millis(600)).await;
    source.next(person_bob());
    sleep(Duration::from_millis(100)).await;
    source.next(person_charlie());
    sleep(Duration::from_millis(600)).await;

    // Assert
    assert_eq!(recorder.values(), vec![person_alice(), person_charlie()]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_delays_completion() {
    // Arrange
    let source = TestSource::<TestData>::new();
    let (recorder, subscription) = Recorder::subscribe(&source.observable().debounce(QUIET));

    // Act
    source.next(person_alice());
    sleep(Duration::from_millis(100)).await;
    source.complete();
    sleep(Duration::from_millis(450)).await;
    let after_value = recorder.notifications();
    sleep(Duration::from_millis(100)).await;

    // Assert
    assert_eq!(after_value, vec![Notification::Next(person_alice())]);
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(person_alice()), Notification::Complete]
    );
    assert!(subscription.closed());
}

#[tokio::test(start_paused = true)]
async fn test_debounce_flush_immediately_on_completion() {
    // Arrange
    let source = TestSource::<TestData>::new();
    let config = DebounceConfig::new(QUIET).with_completion(CompletionPolicy::FlushImmediately);
    let (recorder, _subscription) =
        Recorder::subscribe(&source.observable().debounce_with(config, TokioRuntime));

    // Act
    source.next(person_alice());
    source.next(person_bob());
    source.complete();

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(person_bob()), Notification::Complete]
    );
}

#[tokio::test(start_paused = true)]
async fn test_debounce_error_passes_through_and_drops_pending() {
    // Arrange
    let source = TestSource::<TestData>::new();
    let (recorder, _subscription) = Recorder::subscribe(&source.observable().debounce(QUIET));

    // Act
    source.next(person_alice());
    source.error(user_error("upstream failed"));
    let immediately = recorder.error().is_some();
    sleep(Duration::from_millis(1000)).await;

    // Assert
    assert!(immediately);
    assert!(recorder.values().is_empty());
    assert_eq!(recorder.terminal_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_unsubscribe_cancels_pending_value() {
    // Arrange
    let source = TestSource::<TestData>::new();
    let (recorder, subscription) = Recorder::subscribe(&source.observable().debounce(QUIET));

    // Act
    source.next(person_alice());
    subscription.unsubscribe();
    sleep(Duration::from_millis(1000)).await;

    // Assert
    assert!(recorder.is_empty());
    assert_eq!(source.active(), 0);
}

#[test]
fn test_debounce_without_runtime_reports_error() {
    // Arrange
    let source = TestSource::<i32>::new();
    let (recorder, subscription) = Recorder::subscribe(&source.observable().debounce(QUIET));

    // Act
    source.next(1);

    // Assert
    assert!(matches!(
        recorder.error(),
        Some(RippleError::RuntimeUnavailable { .. })
    ));
    assert!(subscription.closed());
    assert_eq!(source.active(), 0);
}
