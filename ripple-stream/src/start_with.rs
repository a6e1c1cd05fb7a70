// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{Observable, Observer, SubscriptionObserver, Teardown};

/// Extension trait providing the `start_with` operator.
pub trait StartWithExt<T>: Sized {
    /// Emits `initial` synchronously on subscribe, then everything the source
    /// emits.
    ///
    /// The source is not subscribed if the subscriber closed while handling
    /// `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::of;
    /// use ripple_stream::StartWithExt;
    /// use ripple_test_utils::collect_values;
    ///
    /// let numbers = of([2, 3, 4]).start_with(1);
    ///
    /// assert_eq!(collect_values(&numbers), vec![1, 2, 3, 4]);
    /// ```
    fn start_with(self, initial: T) -> Observable<T>
    where
        T: Clone + Send + Sync;
}

impl<T: 'static> StartWithExt<T> for Observable<T> {
    fn start_with(self, initial: T) -> Observable<T>
    where
        T: Clone + Send + Sync,
    {
        Observable::new(move |observer: SubscriptionObserver<T>| {
            observer.next(initial.clone());
            if observer.closed() {
                return Teardown::empty();
            }
            self.subscribe(Observer::forwarding_to(&observer)).into()
        })
    }
}
