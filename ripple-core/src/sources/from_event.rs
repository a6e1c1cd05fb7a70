// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Event-listener adapter.

use crate::observable::Observable;
use crate::teardown::Teardown;
use std::sync::Arc;

/// Listener registered on an [`EventTarget`].
///
/// Targets identify listeners by pointer (`Arc::ptr_eq`), so the same `Arc`
/// passed to `add_listener` is passed back to `remove_listener`.
pub type Listener<E> = Arc<dyn Fn(E) + Send + Sync>;

/// Options forwarded verbatim to the target on registration and removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    pub capture: bool,
    pub once: bool,
    pub passive: bool,
}

/// Anything that dispatches named events to registered listeners.
pub trait EventTarget<E>: Send + Sync {
    fn add_listener(&self, name: &str, listener: Listener<E>, options: &ListenerOptions);

    fn remove_listener(&self, name: &str, listener: &Listener<E>, options: &ListenerOptions);
}

/// Creates an observable that registers a listener on subscribe and removes
/// the very same listener on unsubscribe.
///
/// Every dispatched event is emitted as a value. The observable never
/// terminates on its own.
pub fn from_event<E, T>(
    target: Arc<T>,
    name: impl Into<String>,
    options: ListenerOptions,
) -> Observable<E>
where
    E: 'static,
    T: EventTarget<E> + ?Sized + 'static,
{
    let name: Arc<str> = Arc::from(name.into());
    Observable::new(move |observer| {
        let listener: Listener<E> = Arc::new(move |event| observer.next(event));
        target.add_listener(&name, Arc::clone(&listener), &options);

        let target = Arc::clone(&target);
        let name = Arc::clone(&name);
        Teardown::new(move || target.remove_listener(&name, &listener, &options))
    })
}
