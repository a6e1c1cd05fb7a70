// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use ripple_core::{Notification, RippleError};
use ripple_exec::{from_future, IntoStreamExt};
use ripple_test_utils::test_data::{person_alice, TestData};
use ripple_test_utils::{Recorder, TestError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_from_future_emits_value_then_completes() {
    // Arrange
    let observable = from_future(async { Ok::<_, TestError>(person_alice()) });

    // Act
    let (recorder, subscription) = Recorder::subscribe(&observable);
    let before = recorder.is_empty();
    sleep(Duration::from_millis(1)).await;

    // Assert
    assert!(before);
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(person_alice()), Notification::Complete]
    );
    assert!(subscription.closed());
}

#[tokio::test(start_paused = true)]
async fn test_from_future_failure_becomes_user_error() -> anyhow::Result<()> {
    // Arrange
    let observable = from_future(async { Err::<TestData, _>(TestError::new("lookup failed")) });

    // Act
    let mut stream = observable.into_stream();
    let first = stream.next().await;
    let end = stream.next().await;

    // Assert
    match first {
        Some(Err(RippleError::UserError(error))) => {
            assert_eq!(error.to_string(), "test failure: lookup failed");
        }
        other => anyhow::bail!("expected a user error, got {other:?}"),
    }
    assert!(end.is_none());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_from_future_runs_future_once_for_many_subscribers() {
    // Arrange
    let polls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&polls);
    let observable = from_future(async move {
        counter.fetch_add(1, Ordering::SeqCst);
        sleep(Duration::from_millis(50)).await;
        Ok::<_, TestError>(7)
    });

    // Act
    let (first, _first_subscription) = Recorder::subscribe(&observable);
    let (second, _second_subscription) = Recorder::subscribe(&observable);
    sleep(Duration::from_millis(100)).await;
    let (late, _late_subscription) = Recorder::subscribe(&observable);
    sleep(Duration::from_millis(1)).await;

    // Assert
    assert_eq!(first.values(), vec![7]);
    assert_eq!(second.values(), vec![7]);
    assert_eq!(late.values(), vec![7]);
    assert_eq!(polls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_from_future_unsubscribe_before_resolution() {
    // Arrange
    let observable = from_future(async {
        sleep(Duration::from_millis(100)).await;
        Ok::<_, TestError>(1)
    });
    let (recorder, subscription) = Recorder::subscribe(&observable);

    // Act
    subscription.unsubscribe();
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert!(recorder.is_empty());
}

#[test]
fn test_from_future_without_runtime_reports_error() {
    // Arrange
    let observable = from_future(async { Ok::<_, TestError>(1) });

    // Act
    let (recorder, subscription) = Recorder::subscribe(&observable);

    // Assert
    assert!(matches!(
        recorder.error(),
        Some(RippleError::RuntimeUnavailable { .. })
    ));
    assert!(subscription.closed());
}
