// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use core::fmt::{self, Debug};
use core::future::Future;
use ripple_core::Result;

/// Executor seam for operators that schedule work.
pub trait Runtime: Clone + Send + Sync + Debug + 'static {
    type Timer: Timer + Default;

    fn timer(&self) -> Self::Timer {
        Self::Timer::default()
    }

    /// Spawns a detached task.
    ///
    /// # Errors
    /// Returns `RippleError::RuntimeUnavailable` when no executor is running
    /// on the calling thread.
    fn spawn<F>(&self, future: F) -> Result<TaskHandle>
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Handle to a spawned task. Dropping it leaves the task running.
pub struct TaskHandle {
    abort: Box<dyn Fn() + Send + Sync>,
}

impl TaskHandle {
    pub fn new(abort: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            abort: Box::new(abort),
        }
    }

    /// Cancels the task. Has no effect if it already finished.
    pub fn abort(&self) {
        (self.abort)();
    }
}

impl Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle").finish_non_exhaustive()
    }
}
