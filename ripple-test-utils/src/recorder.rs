// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{Notification, Observable, Observer, RippleError, Subscription};
use std::sync::Arc;

/// Observer that records every signal it receives.
///
/// ```rust
/// use ripple_core::of;
/// use ripple_test_utils::Recorder;
///
/// let recorder = Recorder::new();
/// of([1, 2, 3]).subscribe(recorder.observer());
///
/// assert_eq!(recorder.values(), vec![1, 2, 3]);
/// assert!(recorder.is_completed());
/// ```
pub struct Recorder<T> {
    log: Arc<Mutex<Vec<Notification<T>>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone + Send + 'static> Recorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a fresh recorder to `observable`.
    pub fn subscribe(observable: &Observable<T>) -> (Self, Subscription) {
        let recorder = Self::new();
        let subscription = observable.subscribe(recorder.observer());
        (recorder, subscription)
    }

    /// An observer feeding this recorder.
    #[must_use]
    pub fn observer(&self) -> Observer<T> {
        let on_next = Arc::clone(&self.log);
        let on_error = Arc::clone(&self.log);
        let on_complete = Arc::clone(&self.log);
        Observer::new()
            .on_next(move |value| on_next.lock().push(Notification::Next(value)))
            .on_error(move |error| on_error.lock().push(Notification::Error(error)))
            .on_complete(move || on_complete.lock().push(Notification::Complete))
    }

    #[must_use]
    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.log.lock().clone()
    }

    /// Values received so far, in order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.log
            .lock()
            .iter()
            .filter_map(|notification| match notification {
                Notification::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.log
            .lock()
            .iter()
            .any(|notification| matches!(notification, Notification::Complete))
    }

    /// The error received, if any.
    #[must_use]
    pub fn error(&self) -> Option<RippleError> {
        self.log.lock().iter().find_map(|notification| match notification {
            Notification::Error(error) => Some(error.clone()),
            _ => None,
        })
    }

    /// Number of terminal signals received. Never more than one.
    #[must_use]
    pub fn terminal_count(&self) -> usize {
        self.log
            .lock()
            .iter()
            .filter(|notification| notification.is_terminal())
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }

    pub fn clear(&self) {
        self.log.lock().clear();
    }
}
