// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merging several observables into one.

use crate::util::relay_errors;
use ripple_core::{Observable, SubscriptionObserver, SubscriptionSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Subscribes to every source and forwards values in arrival order.
///
/// - the first `error` from any source terminates the result and
///   unsubscribes every other source;
/// - the result completes once every source has completed;
/// - an empty list of sources completes immediately.
///
/// Sources are subscribed in order. Once the result has terminated, the
/// remaining sources are not subscribed at all.
///
/// # Examples
///
/// ```rust
/// use ripple_core::of;
/// use ripple_stream::merge;
/// use ripple_test_utils::collect_values;
///
/// let merged = merge([of([1, 2, 3]), of([4, 5, 6]), of([7, 8, 9])]);
///
/// assert_eq!(collect_values(&merged), (1..=9).collect::<Vec<_>>());
/// ```
pub fn merge<T, I>(sources: I) -> Observable<T>
where
    I: IntoIterator<Item = Observable<T>>,
    T: 'static,
{
    let sources: Vec<Observable<T>> = sources.into_iter().collect();
    Observable::new(move |observer: SubscriptionObserver<T>| {
        let subscriptions = SubscriptionSet::new();
        if sources.is_empty() {
            observer.complete();
            return subscriptions;
        }

        let remaining = Arc::new(AtomicUsize::new(sources.len()));
        for source in &sources {
            if observer.closed() {
                break;
            }
            let downstream = observer.clone();
            let on_complete = observer.clone();
            let remaining = Arc::clone(&remaining);
            let subscription = source.subscribe(
                relay_errors(&observer, move |value: T| downstream.next(value)).on_complete(
                    move || {
                        if remaining.fetch_sub(1, Ordering::AcqRel) == 1 {
                            on_complete.complete();
                        }
                    },
                ),
            );
            subscriptions.add(subscription);
        }
        subscriptions
    })
}

/// Extension trait providing the `merge_with` operator.
pub trait MergeWithExt<T>: Sized {
    /// Two-source shorthand for [`merge`].
    fn merge_with(self, other: Observable<T>) -> Observable<T>;
}

impl<T: 'static> MergeWithExt<T> for Observable<T> {
    fn merge_with(self, other: Observable<T>) -> Observable<T> {
        merge([self, other])
    }
}
