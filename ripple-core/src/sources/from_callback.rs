// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::observable::Observable;
use std::sync::Arc;

/// Callback handed to a function adapted by [`from_callback`].
pub type Callback<R> = Arc<dyn Fn(R) + Send + Sync>;

/// Turns a function that reports results through a callback into a function
/// that returns an observable.
///
/// The adapted function does nothing until the returned observable is
/// subscribed. Each subscription calls `func` with a clone of the arguments
/// and a callback that emits every value it receives. The observable never
/// completes on its own.
///
/// ```
/// use ripple_core::{from_callback, Callback};
/// use std::sync::{Arc, Mutex};
///
/// let read_len = from_callback(|name: String, done: Callback<usize>| done(name.len()));
///
/// let seen = Arc::new(Mutex::new(None));
/// let sink = Arc::clone(&seen);
/// read_len("config.toml".to_string()).subscribe(move |len: usize| {
///     *sink.lock().unwrap() = Some(len);
/// });
///
/// assert_eq!(*seen.lock().unwrap(), Some(11));
/// ```
pub fn from_callback<A, R, F>(func: F) -> impl Fn(A) -> Observable<R>
where
    F: Fn(A, Callback<R>) + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
    R: 'static,
{
    let func = Arc::new(func);
    move |args: A| {
        let func = Arc::clone(&func);
        Observable::new(move |observer| {
            let callback: Callback<R> = Arc::new(move |value| observer.next(value));
            func(args.clone(), callback);
        })
    }
}
