// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::{relay, relay_errors};
use ripple_core::{Observable, SubscriptionObserver, Teardown};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Extension trait providing the `toggle` operator.
pub trait ToggleExt<T>: Sized {
    /// Forwards values only while the last value of `toggler` was `true`.
    ///
    /// The gate starts closed. The toggler is subscribed before the source, so
    /// a synchronous toggler sets the gate before the first source value.
    /// Values arriving while the gate is closed are discarded, not buffered.
    ///
    /// Completion of the source completes the result and unsubscribes the
    /// toggler; completion of the toggler is ignored and the gate keeps its
    /// last state. An error from either side terminates the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::of;
    /// use ripple_stream::ToggleExt;
    /// use ripple_test_utils::collect_values;
    ///
    /// let open = of([1, 2, 3]).toggle(of([true]));
    /// let closed = of([1, 2, 3]).toggle(of([false]));
    ///
    /// assert_eq!(collect_values(&open), vec![1, 2, 3]);
    /// assert!(collect_values(&closed).is_empty());
    /// ```
    fn toggle(self, toggler: Observable<bool>) -> Observable<T>;
}

impl<T: 'static> ToggleExt<T> for Observable<T> {
    fn toggle(self, toggler: Observable<bool>) -> Observable<T> {
        Observable::new(move |observer: SubscriptionObserver<T>| {
            let gate = Arc::new(AtomicBool::new(false));

            let toggler_subscription = {
                let gate = Arc::clone(&gate);
                toggler.subscribe(relay_errors(&observer, move |open: bool| {
                    gate.store(open, Ordering::Release);
                }))
            };

            let downstream = observer.clone();
            let source_subscription = self.subscribe(relay(&observer, move |value: T| {
                if gate.load(Ordering::Acquire) {
                    downstream.next(value);
                }
            }));

            Teardown::from(vec![
                Teardown::from(toggler_subscription),
                Teardown::from(source_subscription),
            ])
        })
    }
}
