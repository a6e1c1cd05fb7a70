// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for ripple observables.
//!
//! Operators schedule their timers through the
//! [`Runtime`](ripple_runtime::Runtime) abstraction, so they work with any
//! executor that implements it. With the default `runtime-tokio` feature the
//! convenience methods use [`DefaultRuntime`](ripple_runtime::DefaultRuntime).
//!
//! # Overview
//!
//! - **[`DebounceExt`]** - `.debounce(duration)` and `.debounce_with(config, runtime)`
//! - **[`DebounceConfig`]** / **[`CompletionPolicy`]** - how completion interacts with a pending value
//!
//! # Example
//!
//! ```rust,no_run
//! use ripple_core::of;
//! use ripple_stream_time::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let quiet = of([1, 2, 3]).debounce(Duration::from_millis(100));
//! quiet.subscribe(|value: i32| println!("settled on {value}"));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod debounce;
pub mod prelude;

pub use debounce::{CompletionPolicy, DebounceConfig, DebounceExt};
