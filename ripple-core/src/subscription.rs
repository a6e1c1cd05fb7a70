// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation handles.
//!
//! A [`Subscription`] is returned by every call to
//! [`Observable::subscribe`](crate::Observable::subscribe). It owns the
//! activation's closed flag and the [`Teardown`] produced by the producer.
//! Closing is a one-way transition: the flag is swapped exactly once, so the
//! teardown runs at most once no matter how many handles race to close it.

use crate::teardown::Teardown;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

struct Inner {
    id: u64,
    closed: AtomicBool,
    teardown: Mutex<Option<Teardown>>,
}

/// Handle to one activation of an observable.
///
/// Cloning yields another handle to the same activation.
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<Inner>,
}

impl Subscription {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
                closed: AtomicBool::new(false),
                teardown: Mutex::new(None),
            }),
        }
    }

    /// Returns `true` once the activation has terminated or was unsubscribed.
    #[must_use]
    pub fn closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Closes the activation and runs its teardown.
    ///
    /// Calling this on a closed subscription does nothing.
    pub fn unsubscribe(&self) {
        if self.close() {
            self.run_teardown();
        }
    }

    /// Process-unique identifier of this activation.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Returns `true` if both handles refer to the same activation.
    #[must_use]
    pub fn same_as(&self, other: &Subscription) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Marks the activation closed. Returns `true` for the caller that
    /// performed the transition.
    pub(crate) fn close(&self) -> bool {
        !self.inner.closed.swap(true, Ordering::AcqRel)
    }

    pub(crate) fn run_teardown(&self) {
        let teardown = self.inner.teardown.lock().take();
        if let Some(teardown) = teardown {
            teardown.run();
        }
    }

    /// Installs the producer's teardown. If the activation already closed
    /// while the producer was running, the teardown runs right away.
    pub(crate) fn set_teardown(&self, teardown: Teardown) {
        if self.closed() {
            teardown.run();
            return;
        }

        *self.inner.teardown.lock() = Some(teardown);

        // A concurrent close may have missed the slot we just filled
        if self.closed() {
            self.run_teardown();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.inner.id)
            .field("closed", &self.closed())
            .finish()
    }
}

/// A group of upstream subscriptions owned by one activation.
///
/// Multi-source operators add every upstream subscription they create and
/// unsubscribe the whole set from their teardown. Adding to a set that was
/// already unsubscribed unsubscribes the newcomer immediately.
#[derive(Clone, Default)]
pub struct SubscriptionSet {
    inner: Arc<Mutex<SetState>>,
}

#[derive(Default)]
struct SetState {
    disposed: bool,
    members: Vec<Subscription>,
}

impl SubscriptionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscription, pruning members that already closed.
    pub fn add(&self, subscription: Subscription) {
        let mut state = self.inner.lock();
        if state.disposed {
            drop(state);
            subscription.unsubscribe();
            return;
        }
        state.members.retain(|member| !member.closed());
        state.members.push(subscription);
    }

    /// Removes a subscription without unsubscribing it.
    pub fn remove(&self, subscription: &Subscription) {
        self.inner
            .lock()
            .members
            .retain(|member| !member.same_as(subscription));
    }

    /// Number of members that are still open.
    #[must_use]
    pub fn active(&self) -> usize {
        self.inner
            .lock()
            .members
            .iter()
            .filter(|member| !member.closed())
            .count()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }

    /// Unsubscribes every member and disposes the set.
    pub fn unsubscribe_all(&self) {
        let members = {
            let mut state = self.inner.lock();
            state.disposed = true;
            std::mem::take(&mut state.members)
        };
        for member in members {
            member.unsubscribe();
        }
    }
}

impl fmt::Debug for SubscriptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("SubscriptionSet")
            .field("disposed", &state.disposed)
            .field("members", &state.members.len())
            .finish()
    }
}
