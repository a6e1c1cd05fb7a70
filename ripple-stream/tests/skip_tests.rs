// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{of, Notification};
use ripple_stream::SkipExt;
use ripple_test_utils::test_data::{person_alice, person_bob, person_charlie};
use ripple_test_utils::{collect_notifications, collect_values, user_error, Recorder, TestSource};

#[test]
fn test_skip_drops_first_values() {
    // Arrange
    let tail = of(1..=7).skip(3);

    // Act
    let values = collect_values(&tail);

    // Assert
    assert_eq!(values, vec![4, 5, 6, 7]);
}

#[test]
fn test_skip_zero_is_identity() {
    // Arrange
    let source = of(vec![person_alice(), person_bob()]);

    // Act
    let skipped = collect_notifications(&source.clone().skip(0));

    // Assert
    assert_eq!(skipped, collect_notifications(&source));
}

#[test]
fn test_skip_more_than_available_only_completes() {
    // Arrange
    let nothing = of([1, 2]).skip(5);

    // Act
    let notifications = collect_notifications(&nothing);

    // Assert
    assert_eq!(notifications, vec![Notification::Complete]);
}

#[test]
fn test_skip_counter_is_per_subscription() {
    // Arrange
    let source = TestSource::new();
    let skipped = source.observable().skip(1);
    let (first, _first_subscription) = Recorder::subscribe(&skipped);

    // Act
    source.next(person_alice());
    let (second, _second_subscription) = Recorder::subscribe(&skipped);
    source.next(person_bob());
    source.next(person_charlie());

    // Assert
    assert_eq!(first.values(), vec![person_bob(), person_charlie()]);
    assert_eq!(second.values(), vec![person_charlie()]);
}

#[test]
fn test_skip_does_not_skip_errors() {
    // Arrange
    let source = TestSource::<i32>::new();
    let (recorder, _subscription) = Recorder::subscribe(&source.observable().skip(2));

    // Act
    source.next(1);
    source.error(user_error("early"));

    // Assert
    assert!(recorder.values().is_empty());
    assert!(recorder.error().is_some());
}
