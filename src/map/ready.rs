//! One-shot "map is ready" signal.
//!
//! The host fires the [`ReadyNotifier`] once its base layer is loaded; the
//! render pass awaits the matching [`ReadySignal`]. Firing consumes the
//! notifier, so the signal resolves at most once.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tracing::debug;

use crate::error::RenderError;

/// Create a connected notifier/signal pair
pub fn ready_channel() -> (ReadyNotifier, ReadySignal) {
    let (tx, rx) = oneshot::channel();
    (ReadyNotifier { tx }, ReadySignal { rx })
}

/// Sending half, held by whoever loads the map
#[derive(Debug)]
pub struct ReadyNotifier {
    tx: oneshot::Sender<()>,
}

impl ReadyNotifier {
    /// Mark the map as loaded
    pub fn notify(self) {
        if self.tx.send(()).is_err() {
            debug!("Ready signal dropped before the map loaded");
        }
    }
}

/// Receiving half, awaited by the render pass
#[derive(Debug)]
pub struct ReadySignal {
    rx: oneshot::Receiver<()>,
}

impl Future for ReadySignal {
    type Output = Result<(), RenderError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.map_err(|_| RenderError::HostClosed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready_eq, task};

    #[test]
    fn test_pending_until_notified() {
        let (notifier, signal) = ready_channel();
        let mut signal = task::spawn(signal);

        assert_pending!(signal.poll());
        notifier.notify();
        assert!(signal.is_woken());
        assert_ready_eq!(signal.poll(), Ok(()));
    }

    #[test]
    fn test_dropped_notifier_closes() {
        let (notifier, signal) = ready_channel();
        let mut signal = task::spawn(signal);

        drop(notifier);
        assert_ready_eq!(signal.poll(), Err(RenderError::HostClosed));
    }

    #[test]
    fn test_notify_after_signal_dropped() {
        let (notifier, signal) = ready_channel();
        drop(signal);
        // Must not panic
        notifier.notify();
    }

    #[tokio::test]
    async fn test_await_across_tasks() {
        let (notifier, signal) = ready_channel();
        let waiter = tokio::spawn(signal);

        tokio::task::yield_now().await;
        notifier.notify();

        assert_eq!(waiter.await.unwrap(), Ok(()));
    }
}
