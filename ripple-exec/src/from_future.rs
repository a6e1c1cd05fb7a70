// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::FutureExt;
use ripple_core::{Observable, RippleError, SubscriptionObserver, Teardown};
use ripple_runtime::Runtime;
use std::error::Error;
use std::future::Future;
use std::sync::Arc;

/// Creates an observable from a fallible future, scheduled on the default
/// runtime.
///
/// On success the value is emitted once, then the observable completes. On
/// failure the error is delivered as `RippleError::UserError`. The future is
/// shared: it runs at most once, however many times the observable is
/// subscribed, and every subscriber receives a clone of its output.
///
/// # Examples
///
/// ```rust
/// use ripple_exec::{from_future, IntoStreamExt};
/// use futures::TryStreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let answer = from_future(async { Ok::<_, std::io::Error>(42) });
///
/// let values: Vec<i32> = answer.into_stream().try_collect().await?;
///
/// assert_eq!(values, vec![42]);
/// # Ok(())
/// # }
/// ```
#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub fn from_future<F, T, E>(future: F) -> Observable<T>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Clone + Send + Sync + 'static,
    E: Error + Send + Sync + 'static,
{
    from_future_with(future, ripple_runtime::DefaultRuntime::default())
}

/// Like [`from_future`], driving the future on `runtime`.
///
/// Every subscription spawns one task that awaits the shared future;
/// unsubscribing aborts that task. If the task cannot be spawned the
/// observable errors with `RippleError::RuntimeUnavailable`.
pub fn from_future_with<F, T, E, R>(future: F, runtime: R) -> Observable<T>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Clone + Send + Sync + 'static,
    E: Error + Send + Sync + 'static,
    R: Runtime,
{
    // Arc makes the failure cloneable for every subscriber of the shared future
    let shared = future.map(|result| result.map_err(Arc::new)).shared();

    Observable::new(move |observer: SubscriptionObserver<T>| {
        let settled = shared.clone();
        let downstream = observer.clone();
        let task = runtime.spawn(async move {
            match settled.await {
                Ok(value) => {
                    downstream.next(value);
                    downstream.complete();
                }
                Err(error) => downstream.error(RippleError::user_error(error)),
            }
        });

        match task {
            Ok(task) => Teardown::new(move || task.abort()),
            Err(error) => {
                warn!("from_future: cannot spawn task: {}", error);
                observer.error(error);
                Teardown::empty()
            }
        }
    })
}
