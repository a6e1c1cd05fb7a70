// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{of, Notification, Observable, Observer, SubscriptionObserver};
use ripple_stream::SwitchLatestExt;
use ripple_test_utils::test_data::{animal_bird, animal_dog, person_alice, person_bob, TestData};
use ripple_test_utils::{collect_notifications, user_error, Recorder, TestSource};
use std::sync::Arc;

fn inner_sources(count: usize) -> Vec<TestSource<TestData>> {
    (0..count).map(|_| TestSource::new()).collect()
}

#[test]
fn test_switch_latest_synchronous_inners() {
    // Arrange
    let switched = of([1, 2]).switch_latest(|x| of([x, x + 100]));

    // Act
    let notifications = collect_notifications(&switched);

    // Assert
    assert_eq!(
        notifications,
        vec![
            Notification::Next(1),
            Notification::Next(101),
            Notification::Next(2),
            Notification::Next(102),
            Notification::Complete
        ]
    );
}

#[test]
fn test_switch_latest_keeps_only_latest_inner() {
    // Arrange
    let outer = TestSource::<usize>::new();
    let inners = inner_sources(2);
    let lookup = inners.clone();
    let (recorder, _subscription) =
        Recorder::subscribe(&outer.observable().switch_latest(move |index| lookup[index].observable()));

    // Act
    outer.next(0);
    inners[0].next(person_alice());
    outer.next(1);
    inners[0].next(person_bob());
    inners[1].next(animal_dog());

    // Assert
    assert_eq!(recorder.values(), vec![person_alice(), animal_dog()]);
    assert_eq!(inners[0].active(), 0);
    assert_eq!(inners[0].unsubscriptions(), 1);
    assert_eq!(inners[1].active(), 1);
}

#[test]
fn test_switch_latest_releases_previous_inner_before_subscribing_next() {
    // Arrange
    let outer = TestSource::<usize>::new();
    let inners = inner_sources(3);
    let lookup = inners.clone();
    let previous_active = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&previous_active);
    let switched = outer.observable().switch_latest(move |index: usize| {
        let lookup = lookup.clone();
        let seen = Arc::clone(&seen);
        Observable::new(move |observer: SubscriptionObserver<TestData>| {
            if index > 0 {
                seen.lock().push(lookup[index - 1].active());
            }
            lookup[index]
                .observable()
                .subscribe(Observer::forwarding_to(&observer))
        })
    });
    let (recorder, _subscription) = Recorder::subscribe(&switched);

    // Act
    outer.next(0);
    outer.next(1);
    outer.next(2);
    inners[2].next(person_alice());

    // Assert
    assert_eq!(*previous_active.lock(), vec![0, 0]);
    assert_eq!(recorder.values(), vec![person_alice()]);
    assert_eq!(inners[2].active(), 1);
}

#[test]
fn test_switch_latest_resubscribes_same_inner_source() {
    // Arrange
    let outer = TestSource::<usize>::new();
    let inner = TestSource::<TestData>::new();
    let shared = inner.clone();
    let (recorder, _subscription) =
        Recorder::subscribe(&outer.observable().switch_latest(move |_| shared.observable()));

    // Act
    outer.next(0);
    outer.next(1);
    inner.next(animal_bird());

    // Assert
    assert_eq!(inner.subscriptions(), 2);
    assert_eq!(inner.active(), 1);
    assert_eq!(recorder.values(), vec![animal_bird()]);
}

#[test]
fn test_switch_latest_completes_after_outer_and_active_inner() {
    // Arrange
    let outer = TestSource::<usize>::new();
    let inners = inner_sources(2);
    let lookup = inners.clone();
    let (recorder, _subscription) =
        Recorder::subscribe(&outer.observable().switch_latest(move |index| lookup[index].observable()));
    outer.next(0);
    outer.next(1);

    // Act
    outer.complete();
    let after_outer = recorder.is_completed();
    inners[1].complete();

    // Assert
    assert!(!after_outer);
    assert!(recorder.is_completed());
}

#[test]
fn test_switch_latest_outer_complete_without_inner() {
    // Arrange
    let outer = TestSource::<usize>::new();
    let (recorder, _subscription) =
        Recorder::subscribe(&outer.observable().switch_latest(|_| of([0_u8])));

    // Act
    outer.complete();

    // Assert
    assert_eq!(recorder.notifications(), vec![Notification::Complete]);
}

#[test]
fn test_switch_latest_inner_error_terminates() {
    // Arrange
    let outer = TestSource::<usize>::new();
    let inners = inner_sources(1);
    let lookup = inners.clone();
    let (recorder, _subscription) =
        Recorder::subscribe(&outer.observable().switch_latest(move |index| lookup[index].observable()));
    outer.next(0);

    // Act
    inners[0].error(user_error("inner failed"));

    // Assert
    assert!(recorder.error().is_some());
    assert_eq!(outer.active(), 0);
}

#[test]
fn test_switch_latest_unsubscribe_releases_outer_and_inner() {
    // Arrange
    let outer = TestSource::<usize>::new();
    let inners = inner_sources(1);
    let lookup = inners.clone();
    let (_recorder, subscription) =
        Recorder::subscribe(&outer.observable().switch_latest(move |index| lookup[index].observable()));
    outer.next(0);

    // Act
    subscription.unsubscribe();

    // Assert
    assert_eq!(outer.active(), 0);
    assert_eq!(inners[0].active(), 0);
}
