// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay;
use ripple_core::{Observable, SubscriptionObserver};
use std::sync::Arc;

/// Extension trait providing the `filter` operator.
pub trait FilterExt<T>: Sized {
    /// Forwards only the values for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::of;
    /// use ripple_stream::FilterExt;
    /// use ripple_test_utils::collect_values;
    ///
    /// let even = of(1..=6).filter(|x| x % 2 == 0);
    ///
    /// assert_eq!(collect_values(&even), vec![2, 4, 6]);
    /// ```
    fn filter<P>(self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T: 'static> FilterExt<T> for Observable<T> {
    fn filter<P>(self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        Observable::new(move |observer: SubscriptionObserver<T>| {
            let predicate = Arc::clone(&predicate);
            let downstream = observer.clone();
            self.subscribe(relay(&observer, move |value: T| {
                if predicate(&value) {
                    downstream.next(value);
                }
            }))
        })
    }
}
