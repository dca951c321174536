//! Future returned by the async combinators.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

pin_project! {
    /// Either an outcome that is already decided, or the continuation's future.
    ///
    /// A short-circuited chain resolves on the first poll without touching the
    /// continuation. Otherwise the continuation's future is polled and its
    /// output is returned verbatim.
    ///
    /// # Cancel Safety
    ///
    /// `ChainFuture` is cancel-safe if the continuation's future is.
    #[must_use = "futures do nothing unless polled"]
    pub struct ChainFuture<Fut, R> {
        #[pin]
        future: Option<Fut>,
        ready: Option<R>,
    }
}

impl<Fut, R> ChainFuture<Fut, R> {
    /// A future that resolves to `outcome` without running any continuation.
    #[inline]
    pub(crate) fn ready(outcome: R) -> Self {
        Self { future: None, ready: Some(outcome) }
    }

    /// A future that drives the continuation's future to completion.
    #[inline]
    pub(crate) fn pending(future: Fut) -> Self {
        Self { future: Some(future), ready: None }
    }

    /// Returns `true` when the chain short-circuited and no continuation runs.
    #[inline]
    pub fn is_short_circuited(&self) -> bool {
        self.ready.is_some()
    }
}

impl<Fut, R> Future for ChainFuture<Fut, R>
where
    Fut: Future<Output = R>,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<R> {
        let mut this = self.project();

        if let Some(outcome) = this.ready.take() {
            return Poll::Ready(outcome);
        }

        let future = this
            .future
            .as_mut()
            .as_pin_mut()
            .expect("ChainFuture polled after completion; this is a bug");
        let output = ready!(future.poll(cx));
        this.future.set(None);
        Poll::Ready(output)
    }
}

impl<Fut, R> FusedFuture for ChainFuture<Fut, R>
where
    Fut: Future<Output = R>,
{
    fn is_terminated(&self) -> bool {
        self.ready.is_none() && self.future.is_none()
    }
}
