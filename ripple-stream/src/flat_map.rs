// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay_errors;
use parking_lot::Mutex;
use ripple_core::{Observable, Observer, SubscriptionObserver, SubscriptionSet, Teardown};
use std::sync::Arc;

#[derive(Default)]
struct FlatMapState {
    active: usize,
    outer_done: bool,
}

impl FlatMapState {
    fn finished(&self) -> bool {
        self.outer_done && self.active == 0
    }
}

/// Extension trait providing the `flat_map` operator.
pub trait FlatMapExt<T>: Sized {
    /// Maps every value to an inner observable and merges all of them.
    ///
    /// Each inner observable is subscribed as soon as it is produced, and its
    /// values are forwarded as they arrive, interleaving with other inners.
    /// The result completes only once the source has completed and every
    /// inner observable has completed. An error from the source or from any
    /// inner terminates the result and unsubscribes everything else.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::of;
    /// use ripple_stream::FlatMapExt;
    /// use ripple_test_utils::collect_values;
    ///
    /// let expanded = of([1, 2]).flat_map(|x| of([x, x * 10]));
    ///
    /// assert_eq!(collect_values(&expanded), vec![1, 10, 2, 20]);
    /// ```
    fn flat_map<U, F>(self, transform: F) -> Observable<U>
    where
        F: Fn(T) -> Observable<U> + Send + Sync + 'static,
        U: 'static;
}

impl<T: 'static> FlatMapExt<T> for Observable<T> {
    fn flat_map<U, F>(self, transform: F) -> Observable<U>
    where
        F: Fn(T) -> Observable<U> + Send + Sync + 'static,
        U: 'static,
    {
        let transform = Arc::new(transform);
        Observable::new(move |observer: SubscriptionObserver<U>| {
            let state = Arc::new(Mutex::new(FlatMapState::default()));
            let inners = SubscriptionSet::new();

            let on_next = {
                let transform = Arc::clone(&transform);
                let state = Arc::clone(&state);
                let inners = inners.clone();
                let downstream = observer.clone();
                move |value: T| {
                    if downstream.closed() {
                        return;
                    }
                    let inner = transform(value);
                    state.lock().active += 1;

                    let on_inner_complete = {
                        let state = Arc::clone(&state);
                        let downstream = downstream.clone();
                        move || {
                            let finished = {
                                let mut state = state.lock();
                                state.active -= 1;
                                state.finished()
                            };
                            if finished {
                                downstream.complete();
                            }
                        }
                    };
                    let forward = downstream.clone();
                    let subscription = inner.subscribe(
                        relay_errors(&downstream, move |value: U| forward.next(value))
                            .on_complete(on_inner_complete),
                    );
                    inners.add(subscription);
                }
            };

            let on_outer_complete = {
                let state = Arc::clone(&state);
                let downstream = observer.clone();
                move || {
                    let finished = {
                        let mut state = state.lock();
                        state.outer_done = true;
                        state.finished()
                    };
                    if finished {
                        downstream.complete();
                    }
                }
            };

            let outer: Observer<T> = relay_errors(&observer, on_next).on_complete(on_outer_complete);
            let outer = self.subscribe(outer);

            Teardown::from(vec![Teardown::from(outer), Teardown::from(inners)])
        })
    }
}
