use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// One-shot cancellation token shared between the interrupt handler and the
/// engine invocation.
///
/// The flag moves from "not requested" to "requested" exactly once; later
/// `cancel` calls are no-ops. Clones are cheap and observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    requested: AtomicBool,
    notify: Notify,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Returns `true` only for the first call.
    pub fn cancel(&self) -> bool {
        let first = !self.shared.requested.swap(true, Ordering::SeqCst);
        if first {
            self.shared.notify.notify_waiters();
        }
        first
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.requested.load(Ordering::SeqCst)
    }

    /// Wait until cancellation is requested.
    pub async fn cancelled(&self) {
        let mut notified = std::pin::pin!(self.shared.notify.notified());
        // Register with the notifier before checking the flag so a cancel
        // arriving in between cannot be missed.
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Bridge Ctrl-C onto the cancellation token.
///
/// The first interrupt requests cancellation and the in-flight engine call is
/// left to wind down on its own. The task keeps listening so repeated
/// interrupts are swallowed instead of tearing the process down mid-run.
pub fn listen_for_interrupt(token: CancelToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    })
}
