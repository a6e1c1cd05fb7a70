// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay_errors;
use parking_lot::Mutex;
use ripple_core::{Observable, Subscription, SubscriptionObserver, Teardown};
use std::sync::Arc;

#[derive(Default)]
struct SwitchState {
    generation: u64,
    current: Option<Subscription>,
    inner_active: bool,
    outer_done: bool,
}

/// Extension trait providing the `switch_latest` operator.
pub trait SwitchLatestExt<T>: Sized {
    /// Maps every value to an inner observable, keeping only the latest one
    /// subscribed.
    ///
    /// Before the inner observable for a new value is subscribed, the
    /// previous inner is unsubscribed synchronously, so at most one inner is
    /// active at any time. The result completes once the source has completed
    /// and the active inner (if any) has completed. Known elsewhere as
    /// `switchMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::of;
    /// use ripple_stream::SwitchLatestExt;
    /// use ripple_test_utils::collect_values;
    ///
    /// let switched = of([1, 2]).switch_latest(|x| of([x, x + 100]));
    ///
    /// assert_eq!(collect_values(&switched), vec![1, 101, 2, 102]);
    /// ```
    fn switch_latest<U, F>(self, transform: F) -> Observable<U>
    where
        F: Fn(T) -> Observable<U> + Send + Sync + 'static,
        U: 'static;
}

impl<T: 'static> SwitchLatestExt<T> for Observable<T> {
    fn switch_latest<U, F>(self, transform: F) -> Observable<U>
    where
        F: Fn(T) -> Observable<U> + Send + Sync + 'static,
        U: 'static,
    {
        let transform = Arc::new(transform);
        Observable::new(move |observer: SubscriptionObserver<U>| {
            let state = Arc::new(Mutex::new(SwitchState::default()));

            let on_next = {
                let transform = Arc::clone(&transform);
                let state = Arc::clone(&state);
                let downstream = observer.clone();
                move |value: T| {
                    if downstream.closed() {
                        return;
                    }
                    let inner = transform(value);

                    let (generation, previous) = {
                        let mut state = state.lock();
                        state.generation += 1;
                        state.inner_active = true;
                        (state.generation, state.current.take())
                    };
                    if let Some(previous) = previous {
                        previous.unsubscribe();
                    }

                    let on_inner_complete = {
                        let state = Arc::clone(&state);
                        let downstream = downstream.clone();
                        move || {
                            let finished = {
                                let mut state = state.lock();
                                if state.generation != generation {
                                    return;
                                }
                                state.inner_active = false;
                                state.current = None;
                                state.outer_done
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

                    let superseded = {
                        let mut state = state.lock();
                        if state.generation != generation {
                            true
                        } else {
                            if !subscription.closed() {
                                state.current = Some(subscription.clone());
                            }
                            false
                        }
                    };
                    if superseded {
                        debug!("switch_latest: inner {} superseded while subscribing", generation);
                        subscription.unsubscribe();
                    }
                }
            };

            let on_outer_complete = {
                let state = Arc::clone(&state);
                let downstream = observer.clone();
                move || {
                    let finished = {
                        let mut state = state.lock();
                        state.outer_done = true;
                        !state.inner_active
                    };
                    if finished {
                        downstream.complete();
                    }
                }
            };

            let outer = self.subscribe(relay_errors(&observer, on_next).on_complete(on_outer_complete));

            Teardown::new(move || {
                outer.unsubscribe();
                let current = state.lock().current.take();
                if let Some(current) = current {
                    current.unsubscribe();
                }
            })
        })
    }
}
