// Request Context - cancellation signal + optional deadline
//
// Repositories run their statements through `Context::run`, which races
// them against the caller's cancel signal and deadline. Losing the race
// drops the statement future; a write's open transaction then rolls back.
// COMMIT is not raced: `check` is the last gate before it.

use crate::error::{AppError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Caller-supplied cancellation/timeout scope for one operation
#[derive(Clone, Debug)]
pub struct Context {
    cancel: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

impl Context {
    /// Never cancelled, no deadline
    pub fn background() -> Self {
        Self {
            cancel: None,
            deadline: None,
        }
    }

    /// Context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().child_with_timeout(timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancel: None,
            deadline: Some(deadline),
        }
    }

    /// Derive a context that shares this one's cancel signal and expires
    /// at the earlier of the two deadlines
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(parent) if parent < candidate => parent,
            _ => candidate,
        };

        Self {
            cancel: self.cancel.clone(),
            deadline: Some(deadline),
        }
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Fail fast if the context is already done
    pub fn check(&self, op: &str) -> Result<()> {
        if self.is_cancelled() {
            return Err(AppError::Cancelled(op.to_string()));
        }
        if self.is_expired() {
            return Err(AppError::DeadlineExceeded(op.to_string()));
        }
        Ok(())
    }

    /// Run `fut` bound to this context
    pub async fn run<F, T>(&self, op: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.check(op)?;

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(AppError::Cancelled(op.to_string())),
            _ = self.expired() => Err(AppError::DeadlineExceeded(op.to_string())),
            res = fut => res,
        }
    }

    async fn cancelled(&self) {
        match &self.cancel {
            Some(rx) => {
                let mut rx = rx.clone();
                // Sender dropped without cancelling: never fires
                let closed = rx.wait_for(|cancelled| *cancelled).await.is_err();
                if closed {
                    std::future::pending::<()>().await;
                }
            }
            None => std::future::pending::<()>().await,
        }
    }

    async fn expired(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

/// Cancel side of a context pair
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signal cancellation to every context derived from this pair
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// Create a cancellable context
pub fn cancel_pair() -> (CancelHandle, Context) {
    let (tx, rx) = watch::channel(false);
    (
        CancelHandle { tx },
        Context {
            cancel: Some(rx),
            deadline: None,
        },
    )
}
