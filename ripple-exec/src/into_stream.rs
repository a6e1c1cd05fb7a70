// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use futures::{Stream, StreamExt};
use ripple_core::{Observable, Observer, RippleError, Subscription};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension trait providing the `into_stream` bridge.
pub trait IntoStreamExt<T>: Sized {
    /// Subscribes immediately and exposes the signals as a stream.
    ///
    /// Each value is yielded as `Ok(value)`. An error is yielded as
    /// `Err(error)` and ends the stream; completion ends the stream.
    /// Values are buffered without bound until polled. Dropping the stream
    /// unsubscribes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use ripple_core::of;
    /// use ripple_exec::IntoStreamExt;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let values: Vec<i32> = of([1, 2, 3])
    ///     .into_stream()
    ///     .filter_map(|item| async move { item.ok() })
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(values, vec![1, 2, 3]);
    /// # }
    /// ```
    fn into_stream(self) -> ObservableStream<T>;
}

impl<T: Send + 'static> IntoStreamExt<T> for Observable<T> {
    fn into_stream(self) -> ObservableStream<T> {
        let (sender, receiver) = unbounded();
        let on_error = sender.clone();
        let on_complete = sender.clone();

        let subscription = self.subscribe(
            Observer::new()
                .on_next(move |value: T| {
                    if sender.unbounded_send(Ok(value)).is_err() {
                        debug!("into_stream: receiver dropped, value discarded");
                    }
                })
                .on_error(move |error: RippleError| {
                    let _ = on_error.unbounded_send(Err(error));
                    on_error.close_channel();
                })
                .on_complete(move || on_complete.close_channel()),
        );

        ObservableStream {
            receiver,
            subscription,
        }
    }
}

/// Stream returned by [`IntoStreamExt::into_stream`].
#[derive(Debug)]
pub struct ObservableStream<T> {
    receiver: UnboundedReceiver<Result<T, RippleError>>,
    subscription: Subscription,
}

impl<T> ObservableStream<T> {
    /// The subscription feeding this stream.
    #[must_use]
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl<T> Stream for ObservableStream<T> {
    type Item = Result<T, RippleError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_next_unpin(cx)
    }
}

impl<T> Drop for ObservableStream<T> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}
