// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::observable::Observable;

/// Creates an observable that synchronously emits every item, in order, then
/// completes.
///
/// Emission stops early if the subscriber unsubscribes from inside its `next`
/// callback.
///
/// ```
/// use ripple_core::of;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// of(["a", "b"]).subscribe(move |v: &'static str| sink.lock().unwrap().push(v));
///
/// assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
/// ```
pub fn of<T, I>(items: I) -> Observable<T>
where
    I: IntoIterator<Item = T>,
    T: Clone + Send + Sync + 'static,
{
    let items: Vec<T> = items.into_iter().collect();
    Observable::new(move |observer| {
        for item in &items {
            if observer.closed() {
                return;
            }
            observer.next(item.clone());
        }
        observer.complete();
    })
}
