// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay;
use ripple_core::{Observable, SubscriptionObserver};
use std::sync::Arc;

/// Extension trait providing the `map` and `map_to` operators.
pub trait MapExt<T>: Sized {
    /// Transforms every value with `f`.
    ///
    /// `error` and `complete` pass through unchanged, and unsubscribing the
    /// result unsubscribes the source. A panic inside `f` terminates the
    /// result with `RippleError::CallbackPanicked`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::of;
    /// use ripple_stream::MapExt;
    /// use ripple_test_utils::collect_values;
    ///
    /// let doubled = of([1, 2, 3]).map(|x| x * 2);
    ///
    /// assert_eq!(collect_values(&doubled), vec![2, 4, 6]);
    /// ```
    fn map<U, F>(self, f: F) -> Observable<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static;

    /// Replaces every value with a clone of `value`.
    fn map_to<U>(self, value: U) -> Observable<U>
    where
        U: Clone + Send + Sync + 'static;
}

impl<T: 'static> MapExt<T> for Observable<T> {
    fn map<U, F>(self, f: F) -> Observable<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        let f = Arc::new(f);
        Observable::new(move |observer: SubscriptionObserver<U>| {
            let f = Arc::clone(&f);
            let downstream = observer.clone();
            self.subscribe(relay(&observer, move |value: T| downstream.next(f(value))))
        })
    }

    fn map_to<U>(self, value: U) -> Observable<U>
    where
        U: Clone + Send + Sync + 'static,
    {
        self.map(move |_| value.clone())
    }
}
