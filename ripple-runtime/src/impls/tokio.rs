// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{runtime::Runtime, timer::Timer, TaskHandle};
use core::future::Future;
use ripple_core::{Result, RippleError};
use std::time::Duration;

/// Spawns on the Tokio runtime entered by the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    type Timer = TokioTimer;

    fn spawn<F>(&self, future: F) -> Result<TaskHandle>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| RippleError::runtime_unavailable(e.to_string()))?;
        let task = handle.spawn(future).abort_handle();
        Ok(TaskHandle::new(move || task.abort()))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }
}
