//! Stale-view notification.
//!
//! After any mutation the service signals "the view rooted at project/run X
//! is stale" so a presentation layer can re-render it. One-way,
//! fire-and-forget; the sender never waits for or requires an acknowledgment.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A view root invalidated by a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleView {
    /// The project page (project header + run list).
    Project(String),
    /// The run page (steps + source log + progress).
    Run(String),
}

/// Fire-and-forget publisher of [`StaleView`] signals.
///
/// Every mutation in `MrpService` calls `notify()` after its write commits.
/// A dropped or absent subscriber never fails the mutation.
pub struct StaleViewNotifier {
    tx: Option<UnboundedSender<StaleView>>,
}

impl StaleViewNotifier {
    /// Create a notifier and the receiver a presentation layer subscribes to.
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<StaleView>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Create a disabled notifier (for callers that don't subscribe).
    #[must_use]
    pub const fn disabled() -> Self {
        Self { tx: None }
    }

    /// Whether a subscriber channel is attached.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Publish a stale-view signal. Never fails.
    pub fn notify(&self, view: StaleView) {
        if let Some(tx) = &self.tx {
            if tx.send(view).is_err() {
                tracing::debug!("stale-view subscriber dropped; signal discarded");
            }
        }
    }
}
