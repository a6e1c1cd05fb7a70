// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{of, Notification, Observable, Observer, RippleError, Teardown};
use ripple_test_utils::test_data::{person_alice, person_bob, TestData};
use ripple_test_utils::{user_error, Recorder, TestSource};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_nothing_is_delivered_after_complete() {
    // Arrange
    let observable = Observable::new(|observer| {
        observer.next(person_alice());
        observer.complete();
        observer.next(person_bob());
        observer.error(user_error("late"));
        observer.complete();
    });

    // Act
    let (recorder, subscription) = Recorder::<TestData>::subscribe(&observable);

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(person_alice()), Notification::Complete]
    );
    assert!(subscription.closed());
}

#[test]
fn test_nothing_is_delivered_after_error() {
    // Arrange
    let observable = Observable::new(|observer| {
        observer.error(user_error("first"));
        observer.next(1);
        observer.error(user_error("second"));
        observer.complete();
    });

    // Act
    let (recorder, _subscription) = Recorder::<i32>::subscribe(&observable);

    // Assert
    assert_eq!(recorder.terminal_count(), 1);
    assert!(recorder.values().is_empty());
    let error = recorder.error().map(|e| e.to_string()).unwrap_or_default();
    assert!(error.contains("first"));
}

#[test]
fn test_nothing_is_delivered_after_unsubscribe() {
    // Arrange
    let source = TestSource::<i32>::new();
    let (recorder, subscription) = Recorder::subscribe(&source.observable());
    source.next(1);

    // Act
    subscription.unsubscribe();
    source.next(2);
    source.complete();

    // Assert
    assert_eq!(recorder.notifications(), vec![Notification::Next(1)]);
    assert_eq!(source.active(), 0);
}

#[test]
fn test_unsubscribe_is_idempotent() {
    // Arrange
    let teardowns = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&teardowns);
    let observable = Observable::<i32>::new(move |_observer| {
        let counter = Arc::clone(&counter);
        Teardown::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    });
    let subscription = observable.subscribe(Observer::new());

    // Act
    subscription.unsubscribe();
    subscription.unsubscribe();

    // Assert
    assert!(subscription.closed());
    assert_eq!(teardowns.load(Ordering::SeqCst), 1);
}

#[test]
fn test_teardown_runs_before_terminal_callback() {
    // Arrange
    let order = Arc::new(Mutex::new(Vec::new()));
    let source = TestSource::<i32>::new();
    let log = Arc::clone(&order);
    let upstream = source.observable();
    let observable = Observable::new(move |observer| {
        let log = Arc::clone(&log);
        let inner = upstream.subscribe(Observer::forwarding_to(&observer));
        Teardown::new(move || {
            log.lock().push("teardown");
            inner.unsubscribe();
        })
    });
    let log = Arc::clone(&order);
    observable.subscribe(Observer::new().on_complete(move || log.lock().push("complete")));

    // Act
    source.complete();

    // Assert
    assert_eq!(*order.lock(), vec!["teardown", "complete"]);
}

#[test]
fn test_panicking_next_is_redirected_to_error() {
    // Arrange
    let source = TestSource::<i32>::new();
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    let subscription = source.observable().subscribe(
        Observer::new()
            .on_next(|value: i32| {
                if value == 2 {
                    panic!("cannot handle two");
                }
            })
            .on_error(move |error: RippleError| sink.lock().push(error.to_string())),
    );

    // Act
    source.next(1);
    source.next(2);
    source.next(3);

    // Assert
    assert_eq!(
        *errors.lock(),
        vec!["Callback panicked: cannot handle two".to_string()]
    );
    assert!(subscription.closed());
    assert_eq!(source.active(), 0);
}

#[test]
fn test_panicking_producer_is_redirected_to_error() {
    // Arrange
    let observable = Observable::<i32>::new::<_, ()>(|observer| {
        observer.next(1);
        panic!("producer failed");
    });

    // Act
    let (recorder, subscription) = Recorder::subscribe(&observable);

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert!(recorder.error().is_some_and(|e| e.is_panic()));
    assert!(subscription.closed());
}

#[test]
fn test_panicking_complete_callback_propagates() {
    // Arrange
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&values);

    // Act
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        of([1]).subscribe(
            Observer::new()
                .on_next(move |value: i32| sink.lock().push(value))
                .on_complete(|| panic!("complete failed")),
        )
    }));

    // Assert
    assert!(outcome.is_err());
    assert_eq!(*values.lock(), vec![1]);
}

#[test]
fn test_panicking_error_callback_propagates() {
    // Arrange
    let observable = Observable::<i32>::new(|observer| observer.error(user_error("failed")));

    // Act
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        observable.subscribe(Observer::new().on_error(|_| panic!("error handler failed")))
    }));

    // Assert
    assert!(outcome.is_err());
}

#[test]
fn test_error_without_callback_is_dropped() {
    // Arrange
    let observable = Observable::<i32>::new(|observer| observer.error(user_error("ignored")));

    // Act
    let subscription = observable.subscribe(|_: i32| {});

    // Assert
    assert!(subscription.closed());
}

#[test]
fn test_unsubscribe_from_inside_next() {
    // Arrange
    let source = TestSource::<i32>::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let slot = Arc::new(Mutex::new(None::<ripple_core::Subscription>));
    let sink = Arc::clone(&seen);
    let own = Arc::clone(&slot);
    let subscription = source.observable().subscribe(move |value: i32| {
        sink.lock().push(value);
        let current = own.lock().clone();
        if let Some(current) = current {
            current.unsubscribe();
        }
    });
    *slot.lock() = Some(subscription.clone());

    // Act
    source.next(1);
    source.next(2);

    // Assert
    assert_eq!(*seen.lock(), vec![1]);
    assert!(subscription.closed());
}

#[test]
fn test_each_subscription_is_independent() {
    // Arrange
    let source = TestSource::<i32>::new();
    let observable = source.observable();
    let (first, first_subscription) = Recorder::subscribe(&observable);
    let (second, _second_subscription) = Recorder::subscribe(&observable);

    // Act
    source.next(1);
    first_subscription.unsubscribe();
    source.next(2);

    // Assert
    assert_eq!(first.values(), vec![1]);
    assert_eq!(second.values(), vec![1, 2]);
    assert_eq!(source.subscriptions(), 2);
    assert_eq!(source.unsubscriptions(), 1);
}
