// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{EventTarget, Listener, ListenerOptions};
use std::sync::Arc;

struct Registration<E> {
    name: String,
    listener: Listener<E>,
    options: ListenerOptions,
}

/// In-memory [`EventTarget`] that dispatches synchronously and remembers
/// every registration and removal it saw.
pub struct TestEventTarget<E> {
    listeners: Mutex<Vec<Registration<E>>>,
    removals: Mutex<Vec<(String, ListenerOptions)>>,
}

impl<E: Clone> Default for TestEventTarget<E> {
    fn default() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            removals: Mutex::new(Vec::new()),
        }
    }
}

impl<E: Clone> TestEventTarget<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls every listener registered under `name`.
    pub fn dispatch(&self, name: &str, event: E) {
        let listeners: Vec<Listener<E>> = self
            .listeners
            .lock()
            .iter()
            .filter(|registration| registration.name == name)
            .map(|registration| Arc::clone(&registration.listener))
            .collect();
        for listener in listeners {
            listener(event.clone());
        }
    }

    #[must_use]
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners
            .lock()
            .iter()
            .filter(|registration| registration.name == name)
            .count()
    }

    /// Options passed with the registrations under `name`.
    #[must_use]
    pub fn registered_options(&self, name: &str) -> Vec<ListenerOptions> {
        self.listeners
            .lock()
            .iter()
            .filter(|registration| registration.name == name)
            .map(|registration| registration.options)
            .collect()
    }

    /// Name and options of every successful removal, in order.
    #[must_use]
    pub fn removals(&self) -> Vec<(String, ListenerOptions)> {
        self.removals.lock().clone()
    }
}

impl<E: Clone + Send> EventTarget<E> for TestEventTarget<E> {
    fn add_listener(&self, name: &str, listener: Listener<E>, options: &ListenerOptions) {
        self.listeners.lock().push(Registration {
            name: name.to_string(),
            listener,
            options: *options,
        });
    }

    fn remove_listener(&self, name: &str, listener: &Listener<E>, options: &ListenerOptions) {
        let mut listeners = self.listeners.lock();
        let position = listeners.iter().position(|registration| {
            registration.name == name && Arc::ptr_eq(&registration.listener, listener)
        });
        if let Some(index) = position {
            listeners.remove(index);
            drop(listeners);
            self.removals.lock().push((name.to_string(), *options));
        }
    }
}
