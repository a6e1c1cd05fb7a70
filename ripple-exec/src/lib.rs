// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridges between observables and the async world.
//!
//! - [`from_future`] turns a fallible future into an observable that emits
//!   its value once and completes.
//! - [`IntoStreamExt::into_stream`] turns an observable into a
//!   [`futures::Stream`] of `Result<T, RippleError>`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod from_future;
pub mod into_stream;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub use from_future::from_future;
pub use from_future::from_future_with;
pub use into_stream::{IntoStreamExt, ObservableStream};
