// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recorder::Recorder;
use ripple_core::{Notification, Observable};

/// Subscribes and returns everything emitted synchronously during `subscribe`.
pub fn collect_notifications<T>(observable: &Observable<T>) -> Vec<Notification<T>>
where
    T: Clone + Send + 'static,
{
    let (recorder, _subscription) = Recorder::subscribe(observable);
    recorder.notifications()
}

/// Like [`collect_notifications`], keeping only the values.
pub fn collect_values<T>(observable: &Observable<T>) -> Vec<T>
where
    T: Clone + Send + 'static,
{
    let (recorder, _subscription) = Recorder::subscribe(observable);
    recorder.values()
}

/// Panics unless `notifications` ends with exactly one `Complete`.
pub fn assert_completed_once<T>(notifications: &[Notification<T>]) {
    let terminals = notifications.iter().filter(|n| n.is_terminal()).count();
    assert_eq!(terminals, 1, "expected exactly one terminal signal");
    assert!(
        matches!(notifications.last(), Some(Notification::Complete)),
        "expected the sequence to end with Complete"
    );
}
