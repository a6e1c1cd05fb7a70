// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce.
//!
//! Every value restarts a timer; the value is emitted only if no newer value
//! arrives before the timer fires. Errors pass through immediately and drop
//! any pending value. How completion interacts with a pending value is set
//! by [`CompletionPolicy`].

use core::time::Duration;
use parking_lot::Mutex;
use ripple_core::{Observable, Observer, RippleError, SubscriptionObserver, Teardown};
use ripple_runtime::{Runtime, TaskHandle, Timer};
use std::sync::Arc;

/// What happens when the source completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompletionPolicy {
    /// Completion is scheduled `duration` after the source completes. A value
    /// still pending when it fires is emitted first.
    #[default]
    Delayed,
    /// A pending value is emitted at once, followed by completion.
    FlushImmediately,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DebounceConfig {
    pub duration: Duration,
    pub completion: CompletionPolicy,
}

impl DebounceConfig {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            completion: CompletionPolicy::Delayed,
        }
    }

    #[must_use]
    pub const fn with_completion(mut self, completion: CompletionPolicy) -> Self {
        self.completion = completion;
        self
    }
}

impl From<Duration> for DebounceConfig {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

/// Extension trait providing the `debounce` operator.
pub trait DebounceExt<T>: Sized {
    /// Debounces with an explicit configuration and runtime.
    ///
    /// Timers are spawned through `runtime`. If spawning fails the result
    /// terminates with `RippleError::RuntimeUnavailable`.
    fn debounce_with<R: Runtime>(self, config: DebounceConfig, runtime: R) -> Observable<T>;

    /// Debounces by `duration` on the default runtime, delaying completion by
    /// the same duration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ripple_stream_time::DebounceExt;
    /// use ripple_test_utils::{Recorder, TestSource};
    /// use std::time::Duration;
    ///
    /// # #[tokio::main(flavor = "current_thread", start_paused = true)]
    /// # async fn main() {
    /// let source = TestSource::new();
    /// let (recorder, _subscription) =
    ///     Recorder::subscribe(&source.observable().debounce(Duration::from_millis(100)));
    ///
    /// source.next("a");
    /// source.next("b");
    /// tokio::time::sleep(Duration::from_millis(150)).await;
    ///
    /// assert_eq!(recorder.values(), vec!["b"]);
    /// # }
    /// ```
    #[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
    fn debounce(self, duration: Duration) -> Observable<T> {
        self.debounce_with(DebounceConfig::new(duration), ripple_runtime::DefaultRuntime::default())
    }
}

struct DebounceState<T> {
    generation: u64,
    pending: Option<T>,
    timer: Option<TaskHandle>,
    completion: Option<TaskHandle>,
}

impl<T> DebounceState<T> {
    /// Drops the pending value and hands back every scheduled task so the
    /// caller can abort them outside the lock.
    fn cancel(&mut self) -> (Option<TaskHandle>, Option<TaskHandle>) {
        self.generation += 1;
        self.pending = None;
        (self.timer.take(), self.completion.take())
    }
}

fn abort_all((timer, completion): (Option<TaskHandle>, Option<TaskHandle>)) {
    for task in [timer, completion].into_iter().flatten() {
        task.abort();
    }
}

impl<T: Send + 'static> DebounceExt<T> for Observable<T> {
    fn debounce_with<R: Runtime>(self, config: DebounceConfig, runtime: R) -> Observable<T> {
        Observable::new(move |observer: SubscriptionObserver<T>| {
            let state = Arc::new(Mutex::new(DebounceState {
                generation: 0,
                pending: None,
                timer: None,
                completion: None,
            }));

            let on_next = {
                let state = Arc::clone(&state);
                let runtime = runtime.clone();
                let downstream = observer.clone();
                move |value: T| {
                    let (generation, previous) = {
                        let mut state = state.lock();
                        state.generation += 1;
                        state.pending = Some(value);
                        (state.generation, state.timer.take())
                    };
                    if let Some(previous) = previous {
                        debug!("debounce: restarting timer for generation {}", generation);
                        previous.abort();
                    }

                    let timer = runtime.timer();
                    let fire = {
                        let state = Arc::clone(&state);
                        let downstream = downstream.clone();
                        async move {
                            timer.sleep_future(config.duration).await;
                            let ready = {
                                let mut state = state.lock();
                                if state.generation == generation {
                                    state.timer = None;
                                    state.pending.take()
                                } else {
                                    None
                                }
                            };
                            if let Some(value) = ready {
                                downstream.next(value);
                            }
                        }
                    };

                    match runtime.spawn(fire) {
                        Ok(task) => {
                            let stale = {
                                let mut state = state.lock();
                                if state.generation == generation && !downstream.closed() {
                                    state.timer = Some(task);
                                    None
                                } else {
                                    Some(task)
                                }
                            };
                            if let Some(task) = stale {
                                task.abort();
                            }
                        }
                        Err(error) => {
                            warn!("debounce: cannot schedule timer: {}", error);
                            downstream.error(error);
                        }
                    }
                }
            };

            let on_error = {
                let state = Arc::clone(&state);
                let downstream = observer.clone();
                move |error: RippleError| {
                    let scheduled = state.lock().cancel();
                    abort_all(scheduled);
                    downstream.error(error);
                }
            };

            let on_complete = {
                let state = Arc::clone(&state);
                let runtime = runtime.clone();
                let downstream = observer.clone();
                move || match config.completion {
                    CompletionPolicy::FlushImmediately => {
                        let (pending, timer) = {
                            let mut state = state.lock();
                            (state.pending.take(), state.timer.take())
                        };
                        if let Some(timer) = timer {
                            timer.abort();
                        }
                        if let Some(value) = pending {
                            downstream.next(value);
                        }
                        downstream.complete();
                    }
                    CompletionPolicy::Delayed => {
                        let timer = runtime.timer();
                        let fire = {
                            let state = Arc::clone(&state);
                            let downstream = downstream.clone();
                            async move {
                                timer.sleep_future(config.duration).await;
                                let (pending, timer) = {
                                    let mut state = state.lock();
                                    state.completion = None;
                                    (state.pending.take(), state.timer.take())
                                };
                                if let Some(timer) = timer {
                                    timer.abort();
                                }
                                if let Some(value) = pending {
                                    downstream.next(value);
                                }
                                downstream.complete();
                            }
                        };

                        match runtime.spawn(fire) {
                            Ok(task) => {
                                let mut guard = state.lock();
                                if downstream.closed() {
                                    drop(guard);
                                    task.abort();
                                } else {
                                    guard.completion = Some(task);
                                }
                            }
                            Err(error) => {
                                warn!("debounce: cannot schedule completion: {}", error);
                                downstream.error(error);
                            }
                        }
                    }
                }
            };

            let upstream = self.subscribe(
                Observer::new()
                    .on_next(on_next)
                    .on_error(on_error)
                    .on_complete(on_complete),
            );

            Teardown::new(move || {
                upstream.unsubscribe();
                let scheduled = state.lock().cancel();
                abort_all(scheduled);
            })
        })
    }
}
