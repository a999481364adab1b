//! Cooperative cancellation shared between a debounce timer and the request it
//! eventually starts.
//!
//! A [`CancellationToken`] is a cheap, cloneable handle over a `watch` channel.
//! Every clone observes the same flag, so cancelling the handle held by the
//! search pipeline stops both a pending timer and an in-flight HTTP call.

use std::sync::Arc;
use tokio::sync::watch;

/// Shared cancellation flag.
///
/// Cancellation is one-way: once cancelled, a token stays cancelled.
///
/// # Examples
///
/// ```
/// use country_picker::infrastructure::CancellationToken;
///
/// let token = CancellationToken::new();
/// let observer = token.clone();
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    flag: Arc<watch::Sender<bool>>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        let (flag, _rx) = watch::channel(false);
        Self {
            flag: Arc::new(flag),
        }
    }

    /// Marks the token cancelled and wakes every waiter.
    pub fn cancel(&self) {
        self.flag.send_replace(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.flag.borrow()
    }

    /// Completes once the token is cancelled.
    ///
    /// Returns immediately for an already-cancelled token.
    pub async fn cancelled(&self) {
        let mut rx = self.flag.subscribe();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
