// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operator that drops the first n values of every activation.

use crate::util::relay;
use ripple_core::{Observable, SubscriptionObserver};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Extension trait providing the `skip` operator.
pub trait SkipExt<T>: Sized {
    /// Drops the first `n` values.
    ///
    /// The counter belongs to the activation: every subscription skips its
    /// own first `n` values. `error` and `complete` are never skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_core::of;
    /// use ripple_stream::SkipExt;
    /// use ripple_test_utils::collect_values;
    ///
    /// let tail = of(1..=7).skip(3);
    ///
    /// assert_eq!(collect_values(&tail), vec![4, 5, 6, 7]);
    /// assert_eq!(collect_values(&tail), vec![4, 5, 6, 7]);
    /// ```
    fn skip(self, n: usize) -> Observable<T>;
}

impl<T: 'static> SkipExt<T> for Observable<T> {
    fn skip(self, n: usize) -> Observable<T> {
        Observable::new(move |observer: SubscriptionObserver<T>| {
            let remaining = Arc::new(AtomicUsize::new(n));
            let downstream = observer.clone();
            self.subscribe(relay(&observer, move |value: T| {
                let skipped = remaining
                    .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| left.checked_sub(1))
                    .is_ok();
                if !skipped {
                    downstream.next(value);
                }
            }))
        })
    }
}
