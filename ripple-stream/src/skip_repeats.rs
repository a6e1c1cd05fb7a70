// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay;
use parking_lot::Mutex;
use ripple_core::{Observable, SubscriptionObserver};
use std::sync::Arc;

/// Extension trait providing the `skip_repeats` family of operators.
pub trait SkipRepeatsExt<T>: Sized {
    /// Suppresses values equal to the previously emitted one.
    ///
    /// The first value is always emitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::of;
    /// use ripple_stream::SkipRepeatsExt;
    /// use ripple_test_utils::collect_values;
    ///
    /// let distinct = of([1, 1, 2, 3, 4, 4, 4, 4, 5]).skip_repeats();
    ///
    /// assert_eq!(collect_values(&distinct), vec![1, 2, 3, 4, 5]);
    /// ```
    fn skip_repeats(self) -> Observable<T>
    where
        T: PartialEq + Clone + Send;

    /// Like [`skip_repeats`](SkipRepeatsExt::skip_repeats) with a custom
    /// equality. `equal(previous, current)` returning `true` drops `current`.
    fn skip_repeats_by<E>(self, equal: E) -> Observable<T>
    where
        T: Clone + Send,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static;
}

impl<T: 'static> SkipRepeatsExt<T> for Observable<T> {
    fn skip_repeats(self) -> Observable<T>
    where
        T: PartialEq + Clone + Send,
    {
        self.skip_repeats_by(|previous, current| previous == current)
    }

    fn skip_repeats_by<E>(self, equal: E) -> Observable<T>
    where
        T: Clone + Send,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let equal = Arc::new(equal);
        Observable::new(move |observer: SubscriptionObserver<T>| {
            let equal = Arc::clone(&equal);
            let last: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));
            let downstream = observer.clone();
            self.subscribe(relay(&observer, move |value: T| {
                let previous = last.lock().clone();
                if previous.is_some_and(|previous| equal(&previous, &value)) {
                    return;
                }
                *last.lock() = Some(value.clone());
                downstream.next(value);
            }))
        })
    }
}
