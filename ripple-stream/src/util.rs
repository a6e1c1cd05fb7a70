// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{Observer, SubscriptionObserver};

/// Observer that handles values with `on_next` and relays `error` and
/// `complete` to `downstream` unchanged.
pub(crate) fn relay<T, U>(
    downstream: &SubscriptionObserver<U>,
    on_next: impl Fn(T) + Send + Sync + 'static,
) -> Observer<T>
where
    U: 'static,
{
    let on_complete = downstream.clone();
    relay_errors(downstream, on_next).on_complete(move || on_complete.complete())
}

/// Like [`relay`], leaving completion to the caller.
pub(crate) fn relay_errors<T, U>(
    downstream: &SubscriptionObserver<U>,
    on_next: impl Fn(T) + Send + Sync + 'static,
) -> Observer<T>
where
    U: 'static,
{
    let on_error = downstream.clone();
    Observer::new()
        .on_next(on_next)
        .on_error(move |error| on_error.error(error))
}
