//! Cancellable one-shot timers.
//!
//! [`schedule`] waits for a quiet period and then runs a task. The task receives
//! the same [`CancellationToken`] the returned [`DebounceHandle`] controls, so a
//! single `cancel()` stops the timer or, once it has fired, whatever request the
//! task started with that token.

use crate::infrastructure::CancellationToken;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle to a scheduled task.
///
/// Dropping the handle cancels it.
#[derive(Debug)]
pub struct DebounceHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl DebounceHandle {
    /// Cancels the timer and anything downstream sharing its token.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` while the timer is waiting or the task is still running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.token.is_cancelled() && !self.task.is_finished()
    }
}

impl Drop for DebounceHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Runs `task` after `delay` unless the returned handle is cancelled first.
///
/// Must be called from within a tokio runtime.
///
/// # Examples
///
/// ```
/// use country_picker::search::debounce::schedule;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let handle = schedule(Duration::from_millis(300), |_token| async {
///     println!("never printed");
/// });
/// handle.cancel();
/// assert!(!handle.is_pending());
/// # }
/// ```
pub fn schedule<F, Fut>(delay: Duration, task: F) -> DebounceHandle
where
    F: FnOnce(CancellationToken) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let token = CancellationToken::new();
    let timer_token = token.clone();

    let task = tokio::spawn(async move {
        tokio::select! {
            biased;
            () = timer_token.cancelled() => return,
            () = tokio::time::sleep(delay) => {}
        }
        task(timer_token).await;
    });

    DebounceHandle { token, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(counter: &Arc<AtomicUsize>, delay: Duration) -> DebounceHandle {
        let counter = Arc::clone(counter);
        schedule(delay, move |_| async move {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let handle = counting(&fired, Duration::from_millis(300));

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(handle.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_deadline_skips_task() {
        let fired = Arc::new(AtomicUsize::new(0));
        let handle = counting(&fired, Duration::from_millis(300));

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!handle.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let fired = Arc::new(AtomicUsize::new(0));
        drop(counting(&fired, Duration::from_millis(300)));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn task_observes_cancellation_after_firing() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let handle = schedule(Duration::from_millis(10), move |token| async move {
            token.cancelled().await;
            let _ = tx.send(());
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.cancel();

        tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("task should observe cancel")
            .unwrap();
    }
}
