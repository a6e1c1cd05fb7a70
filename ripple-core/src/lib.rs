// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-based observable primitive.
//!
//! An [`Observable`] wraps a producer function. Subscribing runs the producer
//! with a [`SubscriptionObserver`] and returns a [`Subscription`] that cancels
//! the activation. The primitive enforces the lifecycle contract every
//! operator relies on:
//!
//! - at most one terminal signal (`error` or `complete`) per activation;
//! - the producer's teardown runs before the terminal callback, exactly once;
//! - `unsubscribe` is idempotent;
//! - a panic in a `next` callback becomes an error signal.
//!
//! The crate also provides the adapters [`of`], [`from_callback`] and
//! [`from_event`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod error;
pub mod notification;
pub mod observable;
pub mod observer;
pub mod sources;
pub mod subscription;
pub mod teardown;

pub use self::error::{IntoRippleError, Result, RippleError};
pub use self::notification::Notification;
pub use self::observable::Observable;
pub use self::observer::{Observer, SubscriptionObserver};
pub use self::sources::from_callback::{from_callback, Callback};
pub use self::sources::from_event::{from_event, EventTarget, Listener, ListenerOptions};
pub use self::sources::of::of;
pub use self::subscription::{Subscription, SubscriptionSet};
pub use self::teardown::Teardown;
