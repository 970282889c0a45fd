// Producer completion signal for concurrent draining

use std::sync::Arc;
use tokio::sync::watch;

/// Observed by the Resolver: fires once every producer has finished
#[derive(Clone)]
pub struct CompletionToken {
    rx: watch::Receiver<bool>,
}

impl CompletionToken {
    /// True once `complete` was called or every sender was dropped
    pub fn is_complete(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Wait for the completion signal (returns immediately if already fired)
    pub async fn wait(&mut self) {
        if self.is_complete() {
            return;
        }
        let _ = self.rx.changed().await;
    }
}

/// Held by producers. Cloneable; dropping the last clone also completes.
#[derive(Clone)]
pub struct CompletionSender {
    tx: Arc<watch::Sender<bool>>,
}

impl CompletionSender {
    /// Signal that no further items will be pushed
    pub fn complete(&self) {
        let _ = self.tx.send(true);
    }
}

/// Create a completion channel
pub fn completion_channel() -> (CompletionSender, CompletionToken) {
    let (tx, rx) = watch::channel(false);
    (CompletionSender { tx: Arc::new(tx) }, CompletionToken { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_explicit_complete() {
        let (tx, mut token) = completion_channel();
        assert!(!token.is_complete());
        tx.complete();
        assert!(token.is_complete());
        token.wait().await;
    }

    #[tokio::test]
    async fn test_dropping_all_senders_completes() {
        let (tx, token) = completion_channel();
        let second = tx.clone();
        drop(tx);
        assert!(!token.is_complete());
        drop(second);
        assert!(token.is_complete());
    }

    #[test]
    fn test_wait_pending_until_complete() {
        let (tx, mut token) = completion_channel();
        let mut wait = tokio_test::task::spawn(token.wait());

        tokio_test::assert_pending!(wait.poll());
        tx.complete();
        assert!(wait.is_woken());
        tokio_test::assert_ready!(wait.poll());
    }

    #[tokio::test]
    async fn test_wait_wakes_on_complete() {
        let (tx, mut token) = completion_channel();
        let waiter = tokio::spawn(async move {
            token.wait().await;
            token.is_complete()
        });
        tx.complete();
        assert!(waiter.await.unwrap());
    }
}
