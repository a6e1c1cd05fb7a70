// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Latest-value combination over many sources.

use crate::map::MapExt;
use crate::util::relay_errors;
use parking_lot::Mutex;
use ripple_core::{Observable, SubscriptionObserver, SubscriptionSet};
use std::collections::BTreeMap;
use std::sync::Arc;

struct LatestState<T> {
    values: Vec<Option<T>>,
    started: usize,
    completed: usize,
}

/// Combines the latest values of every source into a `Vec`, in source order.
///
/// The first `Vec` is emitted once every source has emitted at least once;
/// after that every value from any source produces a new snapshot. The result
/// completes when all sources have completed and errors as soon as any of
/// them errors. An empty list of sources completes immediately without
/// emitting.
///
/// # Examples
///
/// ```rust
/// use ripple_core::of;
/// use ripple_stream::combine_latest;
/// use ripple_test_utils::collect_values;
///
/// let latest = combine_latest(vec![of([1]), of([2, 3])]);
///
/// assert_eq!(collect_values(&latest), vec![vec![1, 2], vec![1, 3]]);
/// ```
pub fn combine_latest<T>(sources: Vec<Observable<T>>) -> Observable<Vec<T>>
where
    T: Clone + Send + 'static,
{
    Observable::new(move |observer: SubscriptionObserver<Vec<T>>| {
        let subscriptions = SubscriptionSet::new();
        let total = sources.len();
        if total == 0 {
            observer.complete();
            return subscriptions;
        }

        let state = Arc::new(Mutex::new(LatestState {
            values: (0..total).map(|_| None).collect(),
            started: 0,
            completed: 0,
        }));

        for (index, source) in sources.iter().enumerate() {
            if observer.closed() {
                break;
            }

            let on_next = {
                let state = Arc::clone(&state);
                let downstream = observer.clone();
                move |value: T| {
                    let snapshot = {
                        let mut state = state.lock();
                        if state.values[index].is_none() {
                            state.started += 1;
                        }
                        state.values[index] = Some(value);
                        if state.started == total {
                            state.values.iter().cloned().collect::<Option<Vec<T>>>()
                        } else {
                            None
                        }
                    };
                    if let Some(snapshot) = snapshot {
                        downstream.next(snapshot);
                    }
                }
            };

            let on_complete = {
                let state = Arc::clone(&state);
                let downstream = observer.clone();
                move || {
                    let all_done = {
                        let mut state = state.lock();
                        state.completed += 1;
                        state.completed == total
                    };
                    if all_done {
                        downstream.complete();
                    }
                }
            };

            subscriptions.add(source.subscribe(relay_errors(&observer, on_next).on_complete(on_complete)));
        }
        subscriptions
    })
}

/// Combines a keyed collection of sources into an observable of maps.
///
/// Emits `{key: latest value}` once every key has emitted, then on every
/// further value from any key. Values may be stale for keys whose source has
/// gone quiet or completed. Completes once every source has completed.
///
/// # Examples
///
/// ```rust
/// use ripple_core::of;
/// use ripple_stream::combine_object;
/// use ripple_test_utils::collect_values;
/// use std::collections::BTreeMap;
///
/// let sources = BTreeMap::from([("a", of([1])), ("b", of([2]))]);
///
/// let combined = collect_values(&combine_object(sources));
///
/// assert_eq!(combined, vec![BTreeMap::from([("a", 1), ("b", 2)])]);
/// ```
pub fn combine_object<K, T>(sources: BTreeMap<K, Observable<T>>) -> Observable<BTreeMap<K, T>>
where
    K: Ord + Clone + Send + Sync + 'static,
    T: Clone + Send + 'static,
{
    let (keys, sources): (Vec<K>, Vec<Observable<T>>) = sources.into_iter().unzip();
    combine_latest(sources).map(move |values| keys.iter().cloned().zip(values).collect())
}
