// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observers: the callbacks a consumer supplies, and the guarded observer
//! handed to producers.

use crate::error::RippleError;
use crate::subscription::Subscription;
use parking_lot::Mutex;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

pub(crate) type NextFn<T> = Arc<dyn Fn(T) + Send + Sync>;
pub(crate) type ErrorFn = Box<dyn FnOnce(RippleError) + Send>;
pub(crate) type CompleteFn = Box<dyn FnOnce() + Send>;
pub(crate) type StartFn = Box<dyn FnOnce(&Subscription) + Send>;

/// The callbacks a consumer passes to
/// [`Observable::subscribe`](crate::Observable::subscribe).
///
/// Every callback is optional; missing ones are no-ops. A bare closure
/// converts into an observer that only handles values:
///
/// ```
/// use ripple_core::{of, Observer};
///
/// of([1, 2, 3]).subscribe(|value: i32| println!("{value}"));
///
/// of([1, 2, 3]).subscribe(
///     Observer::new()
///         .on_next(|value: i32| println!("{value}"))
///         .on_complete(|| println!("done")),
/// );
/// ```
pub struct Observer<T> {
    pub(crate) start: Option<StartFn>,
    pub(crate) next: Option<NextFn<T>>,
    pub(crate) error: Option<ErrorFn>,
    pub(crate) complete: Option<CompleteFn>,
}

impl<T> Observer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: None,
            next: None,
            error: None,
            complete: None,
        }
    }

    /// Called with the subscription before the producer runs. Unsubscribing
    /// here prevents the producer from ever running.
    #[must_use]
    pub fn on_start(mut self, f: impl FnOnce(&Subscription) + Send + 'static) -> Self {
        self.start = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_next(mut self, f: impl Fn(T) + Send + Sync + 'static) -> Self {
        self.next = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_error(mut self, f: impl FnOnce(RippleError) + Send + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_complete(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.complete = Some(Box::new(f));
        self
    }
}

impl<T: 'static> Observer<T> {
    /// An observer that relays every signal to `downstream` unchanged.
    #[must_use]
    pub fn forwarding_to(downstream: &SubscriptionObserver<T>) -> Self {
        let on_next = downstream.clone();
        let on_error = downstream.clone();
        let on_complete = downstream.clone();
        Self::new()
            .on_next(move |value| on_next.next(value))
            .on_error(move |error| on_error.error(error))
            .on_complete(move || on_complete.complete())
    }
}

impl<T> Default for Observer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> From<F> for Observer<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new().on_next(f)
    }
}

impl<T> fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("start", &self.start.is_some())
            .field("next", &self.next.is_some())
            .field("error", &self.error.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}

struct Callbacks<T> {
    next: Option<NextFn<T>>,
    error: Option<ErrorFn>,
    complete: Option<CompleteFn>,
}

struct Shared<T> {
    subscription: Subscription,
    callbacks: Mutex<Callbacks<T>>,
}

/// The observer a producer receives.
///
/// All four operations are always present and enforce the activation's
/// lifecycle:
///
/// - nothing is delivered once the subscription is closed;
/// - `error` and `complete` close the subscription and run its teardown
///   before invoking the consumer's callback, so at most one terminal signal
///   is ever delivered;
/// - a panic raised by the consumer's `next` callback is caught and delivered
///   to the consumer's `error` callback instead of unwinding into the producer.
pub struct SubscriptionObserver<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for SubscriptionObserver<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> SubscriptionObserver<T> {
    pub(crate) fn new(
        subscription: Subscription,
        next: Option<NextFn<T>>,
        error: Option<ErrorFn>,
        complete: Option<CompleteFn>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                subscription,
                callbacks: Mutex::new(Callbacks {
                    next,
                    error,
                    complete,
                }),
            }),
        }
    }

    /// Returns `true` once the activation no longer accepts signals.
    #[must_use]
    pub fn closed(&self) -> bool {
        self.shared.subscription.closed()
    }

    /// Delivers a value.
    pub fn next(&self, value: T) {
        if self.closed() {
            return;
        }

        let next = self.shared.callbacks.lock().next.clone();
        let Some(next) = next else {
            return;
        };

        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| next(value))) {
            let error = RippleError::callback_panicked(payload.as_ref());
            debug!("next callback panicked, redirecting to error: {}", error);
            self.error(error);
        }
    }

    /// Delivers a terminal error.
    pub fn error(&self, error: RippleError) {
        let subscription = &self.shared.subscription;
        if !subscription.close() {
            return;
        }

        let callback = self.shared.callbacks.lock().error.take();
        subscription.run_teardown();

        match callback {
            Some(callback) => callback(error),
            None => {
                warn!("unhandled error dropped by observer: {}", error);
            }
        }
    }

    /// Delivers terminal completion.
    pub fn complete(&self) {
        let subscription = &self.shared.subscription;
        if !subscription.close() {
            return;
        }

        let callback = self.shared.callbacks.lock().complete.take();
        subscription.run_teardown();

        if let Some(callback) = callback {
            callback();
        }
    }

    /// Drops every callback still held, releasing whatever they captured.
    pub(crate) fn release(&self) {
        let released = {
            let mut callbacks = self.shared.callbacks.lock();
            (
                callbacks.next.take(),
                callbacks.error.take(),
                callbacks.complete.take(),
            )
        };
        drop(released);
    }
}

impl<T> fmt::Debug for SubscriptionObserver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionObserver")
            .field("subscription", &self.shared.subscription)
            .finish()
    }
}
