//! Scoped timers
//!
//! Recurring work (the activity poller) and one-shot delays (the form's
//! transient notice) share one guarantee: once the owning view is torn
//! down, the callback never fires again. `ScopedTimer` holds a
//! cancellation token and aborts its task on drop.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A timer whose task is cancelled when the handle is dropped
#[derive(Debug)]
pub struct ScopedTimer {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScopedTimer {
    /// Run `work` once after `delay`, unless cancelled first.
    pub fn once<F>(delay: Duration, work: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => work.await,
            }
        });
        Self { cancel, handle }
    }

    /// Run `work` immediately, then on every `period` tick until
    /// cancelled.
    pub fn repeating<W, F>(period: Duration, mut work: W) -> Self
    where
        W: FnMut() -> F + Send + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => work().await,
                }
            }
        });
        Self { cancel, handle }
    }

    /// Stop the timer without waiting for the task to wind down.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_once_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let _timer = ScopedTimer::once(Duration::from_secs(3), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(2_999)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_once_never_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let timer = ScopedTimer::once(Duration::from_secs(3), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(timer);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeating_ticks_until_dropped() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let timer = ScopedTimer::repeating(Duration::from_secs(30), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        // First tick is immediate.
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 2);

        drop(timer);
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
