use std::{
    future::Future,
    pin::Pin,
    task::{ready, Context, Poll},
    time::Duration,
};

use pin_project_lite::pin_project;
use tokio::time::Sleep;

pin_project! {
    /// Future resolving to its value after a fixed wait.
    pub struct Delayed<T> {
        #[pin]
        timer: Sleep,
        value: Option<T>,
    }
}

/// Produce `value` once `wait` has elapsed.
pub fn delayed<T>(value: T, wait: Duration) -> Delayed<T> {
    Delayed {
        timer: tokio::time::sleep(wait),
        value: Some(value),
    }
}

impl<T> Future for Delayed<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        ready!(this.timer.poll(cx));
        Poll::Ready(this.value.take().expect("Delayed polled after completion"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::delayed;

    #[tokio::test(start_paused = true)]
    async fn resolves_after_the_wait() {
        let start = tokio::time::Instant::now();
        let value = delayed(42u32, Duration::from_millis(250)).await;
        assert_eq!(value, 42);
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn chained_delays_resolve_in_await_order() {
        let wait = Duration::from_millis(100);
        let first = delayed("first", wait).await;
        let second = delayed("second", wait).await;
        assert_eq!((first, second), ("first", "second"));
    }
}
