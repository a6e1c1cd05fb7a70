// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{Observable, RippleError, SubscriptionObserver, Teardown};
use std::sync::Arc;

struct SourceState<T> {
    next_id: u64,
    observers: Vec<(u64, SubscriptionObserver<T>)>,
    subscriptions: usize,
    unsubscriptions: usize,
}

/// Hand-driven observable for tests.
///
/// Every subscriber of [`observable`](TestSource::observable) is kept until
/// it unsubscribes or terminates; `next`, `error` and `complete` push a
/// signal to all of them. The source counts subscriptions and teardowns so
/// tests can assert that operators release their upstreams.
pub struct TestSource<T> {
    state: Arc<Mutex<SourceState<T>>>,
}

impl<T> Clone for TestSource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone + Send + 'static> Default for TestSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> TestSource<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SourceState {
                next_id: 0,
                observers: Vec::new(),
                subscriptions: 0,
                unsubscriptions: 0,
            })),
        }
    }

    /// An observable that registers its subscribers with this source.
    #[must_use]
    pub fn observable(&self) -> Observable<T> {
        let state = Arc::clone(&self.state);
        Observable::new(move |observer| {
            let id = {
                let mut state = state.lock();
                let id = state.next_id;
                state.next_id += 1;
                state.subscriptions += 1;
                state.observers.push((id, observer));
                id
            };

            let state = Arc::clone(&state);
            Teardown::new(move || {
                let removed = {
                    let mut state = state.lock();
                    state.unsubscriptions += 1;
                    let position = state.observers.iter().position(|(other, _)| *other == id);
                    position.map(|index| state.observers.remove(index))
                };
                drop(removed);
            })
        })
    }

    pub fn next(&self, value: T) {
        for observer in self.snapshot() {
            observer.next(value.clone());
        }
    }

    pub fn error(&self, error: RippleError) {
        for observer in self.snapshot() {
            observer.error(error.clone());
        }
    }

    pub fn complete(&self) {
        for observer in self.snapshot() {
            observer.complete();
        }
    }

    /// Total number of activations started.
    #[must_use]
    pub fn subscriptions(&self) -> usize {
        self.state.lock().subscriptions
    }

    /// Number of activations whose teardown ran.
    #[must_use]
    pub fn unsubscriptions(&self) -> usize {
        self.state.lock().unsubscriptions
    }

    /// Number of activations still attached.
    #[must_use]
    pub fn active(&self) -> usize {
        self.state.lock().observers.len()
    }

    #[must_use]
    pub fn has_observers(&self) -> bool {
        self.active() > 0
    }

    fn snapshot(&self) -> Vec<SubscriptionObserver<T>> {
        self.state
            .lock()
            .observers
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect()
    }
}
