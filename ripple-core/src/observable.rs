// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RippleError;
use crate::observer::{Observer, SubscriptionObserver};
use crate::subscription::Subscription;
use crate::teardown::Teardown;
use std::fmt;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::Arc;

type Producer<T> = dyn Fn(SubscriptionObserver<T>) -> Teardown + Send + Sync;

/// A lazy, push-based source of values.
///
/// An `Observable` only stores its producer function. Nothing happens until
/// [`subscribe`](Observable::subscribe) is called; every call starts an
/// independent activation with its own producer invocation and its own
/// state. Cloning is cheap and shares the producer.
///
/// # Example
///
/// ```
/// use ripple_core::{Observable, Observer};
/// use std::sync::{Arc, Mutex};
///
/// let ticks = Observable::new(|observer| {
///     observer.next(1);
///     observer.next(2);
///     observer.complete();
/// });
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let subscription = ticks.subscribe(move |value: i32| sink.lock().unwrap().push(value));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
/// assert!(subscription.closed());
/// ```
pub struct Observable<T> {
    producer: Arc<Producer<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T: 'static> Observable<T> {
    /// Wraps a producer function.
    ///
    /// The producer receives a [`SubscriptionObserver`] and returns whatever
    /// must be released when the activation closes: `()`, an upstream
    /// [`Subscription`], a [`SubscriptionSet`](crate::SubscriptionSet) or an
    /// explicit [`Teardown`].
    pub fn new<F, R>(producer: F) -> Self
    where
        F: Fn(SubscriptionObserver<T>) -> R + Send + Sync + 'static,
        R: Into<Teardown>,
    {
        Self {
            producer: Arc::new(move |observer| producer(observer).into()),
        }
    }

    /// Starts a new activation.
    ///
    /// The observer's `start` callback runs first and may unsubscribe, in
    /// which case the producer never runs. A panic raised by the producer is
    /// delivered as an error signal, while a panic raised by the consumer's
    /// `error` or `complete` callback propagates to the caller.
    pub fn subscribe(&self, observer: impl Into<Observer<T>>) -> Subscription {
        let Observer {
            start,
            next,
            error,
            complete,
        } = observer.into();

        let subscription = Subscription::new();
        let observer = SubscriptionObserver::new(subscription.clone(), next, error, complete);

        if let Some(start) = start {
            start(&subscription);
        }
        if subscription.closed() {
            return subscription;
        }

        let activation = observer.clone();
        match catch_unwind(AssertUnwindSafe(|| (self.producer)(activation))) {
            Ok(teardown) => {
                let releasing = observer.clone();
                subscription.set_teardown(Teardown::new(move || {
                    teardown.run();
                    releasing.release();
                }));
            }
            // A closed activation means the panic came from a terminal
            // callback or a teardown, which propagate to the caller.
            Err(payload) if observer.closed() => {
                observer.release();
                resume_unwind(payload);
            }
            Err(payload) => {
                observer.error(RippleError::callback_panicked(payload.as_ref()));
                observer.release();
            }
        }

        subscription
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}
