// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{of, Notification, Observable};
use ripple_stream::{merge, MergeWithExt};
use ripple_test_utils::test_data::{animal_dog, person_alice, person_bob, TestData};
use ripple_test_utils::{
    assert_completed_once, collect_notifications, collect_values, user_error, Recorder, TestSource,
};

#[test]
fn test_merge_synchronous_sources_in_order() {
    // Arrange
    let merged = merge([of([1, 2, 3]), of([4, 5, 6]), of([7, 8, 9])]);

    // Act
    let notifications = collect_notifications(&merged);

    // Assert
    assert_completed_once(&notifications);
    assert_eq!(
        collect_values(&merged),
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
    );
}

#[test]
fn test_merge_interleaves_in_arrival_order() {
    // Arrange
    let people = TestSource::<TestData>::new();
    let animals = TestSource::<TestData>::new();
    let (recorder, _subscription) =
        Recorder::subscribe(&people.observable().merge_with(animals.observable()));

    // Act
    people.next(person_alice());
    animals.next(animal_dog());
    people.next(person_bob());

    // Assert
    assert_eq!(
        recorder.values(),
        vec![person_alice(), animal_dog(), person_bob()]
    );
}

#[test]
fn test_merge_completes_after_every_source() {
    // Arrange
    let first = TestSource::<i32>::new();
    let second = TestSource::<i32>::new();
    let (recorder, subscription) = Recorder::subscribe(&merge([first.observable(), second.observable()]));

    // Act
    first.complete();
    let after_first = recorder.is_completed();
    second.next(1);
    second.complete();

    // Assert
    assert!(!after_first);
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(1), Notification::Complete]
    );
    assert!(subscription.closed());
}

#[test]
fn test_merge_first_error_unsubscribes_others() {
    // Arrange
    let first = TestSource::<i32>::new();
    let second = TestSource::<i32>::new();
    let third = TestSource::<i32>::new();
    let (recorder, _subscription) = Recorder::subscribe(&merge([
        first.observable(),
        second.observable(),
        third.observable(),
    ]));

    // Act
    second.error(user_error("second failed"));
    first.next(1);
    third.error(user_error("third failed"));

    // Assert
    assert_eq!(recorder.terminal_count(), 1);
    assert!(recorder.values().is_empty());
    assert_eq!(first.active(), 0);
    assert_eq!(third.active(), 0);
}

#[test]
fn test_merge_of_nothing_completes_immediately() {
    // Arrange
    let merged = merge(Vec::<Observable<i32>>::new());

    // Act
    let notifications = collect_notifications(&merged);

    // Assert
    assert_eq!(notifications, vec![Notification::Complete]);
}

#[test]
fn test_merge_unsubscribe_releases_every_source() {
    // Arrange
    let first = TestSource::<i32>::new();
    let second = TestSource::<i32>::new();
    let (_recorder, subscription) = Recorder::subscribe(&merge([first.observable(), second.observable()]));

    // Act
    subscription.unsubscribe();

    // Assert
    assert_eq!(first.active(), 0);
    assert_eq!(second.active(), 0);
    assert_eq!(first.unsubscriptions(), 1);
    assert_eq!(second.unsubscriptions(), 1);
}

#[test]
fn test_merge_skips_remaining_sources_after_synchronous_error() {
    // Arrange
    let failing = Observable::<i32>::new(|observer| observer.error(user_error("at once")));
    let never_reached = TestSource::<i32>::new();

    // Act
    let (recorder, _subscription) = Recorder::subscribe(&merge([failing, never_reached.observable()]));

    // Assert
    assert!(recorder.error().is_some());
    assert_eq!(never_reached.subscriptions(), 0);
}
