// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay_errors;
use parking_lot::Mutex;
use ripple_core::{Observable, SubscriptionObserver, Teardown};
use std::sync::Arc;

struct CombineState<A, B> {
    latest_a: Option<Arc<A>>,
    latest_b: Option<Arc<B>>,
    a_done: bool,
    b_done: bool,
}

enum Side<A, B> {
    A(A),
    B(B),
}

/// Combines two observables through `transform`.
///
/// Nothing is emitted until both sources have emitted at least once. After
/// that, every value from either side calls `transform(&latest_a, &latest_b)`
/// and emits the result; the silent side contributes its last (possibly
/// stale) value. The result completes when both sources have completed and
/// errors as soon as either source errors.
///
/// # Examples
///
/// ```rust
/// use ripple_core::of;
/// use ripple_stream::combine;
/// use ripple_test_utils::collect_values;
///
/// let sum = combine(of([1]), of([2]), |a, b| a + b);
///
/// assert_eq!(collect_values(&sum), vec![3]);
/// ```
pub fn combine<A, B, V, F>(source_a: Observable<A>, source_b: Observable<B>, transform: F) -> Observable<V>
where
    A: Send + Sync + 'static,
    B: Send + Sync + 'static,
    V: 'static,
    F: Fn(&A, &B) -> V + Send + Sync + 'static,
{
    let transform = Arc::new(transform);
    Observable::new(move |observer: SubscriptionObserver<V>| {
        let state = Arc::new(Mutex::new(CombineState {
            latest_a: None,
            latest_b: None,
            a_done: false,
            b_done: false,
        }));

        let on_value = {
            let state = Arc::clone(&state);
            let transform = Arc::clone(&transform);
            let downstream = observer.clone();
            Arc::new(move |side: Side<A, B>| {
                let latest = {
                    let mut state = state.lock();
                    match side {
                        Side::A(a) => state.latest_a = Some(Arc::new(a)),
                        Side::B(b) => state.latest_b = Some(Arc::new(b)),
                    }
                    match (&state.latest_a, &state.latest_b) {
                        (Some(a), Some(b)) => Some((Arc::clone(a), Arc::clone(b))),
                        _ => None,
                    }
                };
                // The transform may feed either source again, so it runs unlocked.
                if let Some((a, b)) = latest {
                    downstream.next(transform(&*a, &*b));
                }
            })
        };

        let on_done = {
            let state = Arc::clone(&state);
            let downstream = observer.clone();
            Arc::new(move |is_a: bool| {
                let both_done = {
                    let mut state = state.lock();
                    if is_a {
                        state.a_done = true;
                    } else {
                        state.b_done = true;
                    }
                    state.a_done && state.b_done
                };
                if both_done {
                    downstream.complete();
                }
            })
        };

        let subscription_a = {
            let on_value = Arc::clone(&on_value);
            let on_done = Arc::clone(&on_done);
            source_a.subscribe(
                relay_errors(&observer, move |a: A| on_value(Side::A(a)))
                    .on_complete(move || on_done(true)),
            )
        };
        if observer.closed() {
            return Teardown::from(subscription_a);
        }
        let subscription_b = source_b.subscribe(
            relay_errors(&observer, move |b: B| on_value(Side::B(b)))
                .on_complete(move || on_done(false)),
        );

        Teardown::from(vec![
            Teardown::from(subscription_a),
            Teardown::from(subscription_b),
        ])
    })
}

/// Extension trait providing the `combine_with` operator.
pub trait CombineWithExt<A>: Sized {
    /// Method form of [`combine`].
    fn combine_with<B, V, F>(self, other: Observable<B>, transform: F) -> Observable<V>
    where
        B: Send + Sync + 'static,
        V: 'static,
        F: Fn(&A, &B) -> V + Send + Sync + 'static;
}

impl<A: Send + Sync + 'static> CombineWithExt<A> for Observable<A> {
    fn combine_with<B, V, F>(self, other: Observable<B>, transform: F) -> Observable<V>
    where
        B: Send + Sync + 'static,
        V: 'static,
        F: Fn(&A, &B) -> V + Send + Sync + 'static,
    {
        combine(self, other, transform)
    }
}
