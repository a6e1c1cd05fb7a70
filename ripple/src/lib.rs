// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Ripple
//!
//! Push-based observables with a strict subscription lifecycle.
//!
//! An [`Observable`] is a lazy producer of values. Subscribing starts an
//! independent activation and returns a [`Subscription`] that cancels it.
//! Every activation delivers at most one terminal signal, runs its teardown
//! exactly once, and turns panics in value callbacks into error signals.
//! Operators are built on those guarantees and never re-implement them.
//!
//! This crate re-exports the whole workspace:
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `ripple-core` | `Observable`, `Observer`, `Subscription`, `RippleError`, `of`, `from_event`, `from_callback` |
//! | `ripple-stream` | `map`, `filter`, `skip`, `skip_repeats`, `start_with`, `merge`, `combine`, `combine_latest`, `combine_object`, `flat_map`, `switch_latest`, `toggle` |
//! | `ripple-stream-time` | `debounce` |
//! | `ripple-exec` | `from_future`, `into_stream` |
//! | `ripple-runtime` | `Runtime`, `Timer`, `DefaultRuntime` |
//!
//! ## Quick Start
//!
//! ```rust
//! use ripple_rx::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let evens = of(1..=10)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .skip(1);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! evens.subscribe(
//!     Observer::new()
//!         .on_next(move |x: i32| sink.lock().unwrap().push(x))
//!         .on_complete(|| println!("done")),
//! );
//!
//! assert_eq!(*seen.lock().unwrap(), vec![16, 36, 64, 100]);
//! ```
//!
//! ## Features
//!
//! - `std` (default)
//! - `runtime-tokio` (default): enables `debounce` and `from_future` on Tokio
//! - `tracing`: routes internal diagnostics through `tracing` instead of stderr

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use ripple_core::{
    from_callback, from_event, of, Callback, EventTarget, IntoRippleError, Listener,
    ListenerOptions, Notification, Observable, Observer, Result, RippleError, Subscription,
    SubscriptionObserver, SubscriptionSet, Teardown,
};

pub use ripple_stream::{
    combine, combine_latest, combine_object, merge, CombineWithExt, FilterExt, FlatMapExt,
    MapExt, MergeWithExt, SkipExt, SkipRepeatsExt, StartWithExt, SwitchLatestExt, ToggleExt,
};

pub use ripple_stream_time::{CompletionPolicy, DebounceConfig, DebounceExt};

pub use ripple_exec::{from_future_with, IntoStreamExt, ObservableStream};

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub use ripple_exec::from_future;

pub use ripple_runtime::{Runtime, TaskHandle, Timer};

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub use ripple_runtime::DefaultRuntime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use ripple_core::{of, Observable, Observer, RippleError, Subscription};
    pub use ripple_stream::prelude::*;
    pub use ripple_stream_time::prelude::*;

    pub use ripple_exec::IntoStreamExt;

    #[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
    pub use ripple_exec::from_future;
}
