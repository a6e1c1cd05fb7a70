// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::subscription::{Subscription, SubscriptionSet};
use std::fmt;

/// Cleanup action returned by a producer.
///
/// Runs at most once, when the activation closes. Producers usually return
/// the upstream [`Subscription`] (or `()` when there is nothing to release);
/// both convert into a `Teardown`.
#[must_use]
pub struct Teardown(Option<Box<dyn FnOnce() + Send>>);

impl Teardown {
    pub fn new(f: impl FnOnce() + Send + 'static) -> Self {
        Self(Some(Box::new(f)))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Runs the cleanup, consuming it.
    pub fn run(mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

impl Default for Teardown {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Teardown")
            .field(&if self.is_empty() { "empty" } else { "action" })
            .finish()
    }
}

impl From<()> for Teardown {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl From<Subscription> for Teardown {
    fn from(subscription: Subscription) -> Self {
        Self::new(move || subscription.unsubscribe())
    }
}

impl From<SubscriptionSet> for Teardown {
    fn from(set: SubscriptionSet) -> Self {
        Self::new(move || set.unsubscribe_all())
    }
}

impl From<Vec<Teardown>> for Teardown {
    fn from(teardowns: Vec<Teardown>) -> Self {
        Self::new(move || {
            for teardown in teardowns {
                teardown.run();
            }
        })
    }
}

impl<F> From<Option<F>> for Teardown
where
    F: Into<Teardown>,
{
    fn from(value: Option<F>) -> Self {
        value.map_or_else(Self::empty, Into::into)
    }
}
