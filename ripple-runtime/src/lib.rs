// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the time-based and future-based parts of ripple.
//!
//! Operators never talk to an executor directly. They go through
//! [`Runtime`](runtime::Runtime), which spawns detached tasks and hands out a
//! [`Timer`](timer::Timer). The Tokio implementation is enabled by the
//! `runtime-tokio` feature and exposed as [`DefaultRuntime`].

pub mod impls;
pub mod runtime;
pub mod timer;

pub use runtime::{Runtime, TaskHandle};
pub use timer::Timer;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub use impls::tokio::{TokioRuntime, TokioTimer};

/// Runtime used by operators that do not take one explicitly.
#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub type DefaultRuntime = TokioRuntime;
