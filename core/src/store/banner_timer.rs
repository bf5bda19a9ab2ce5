//! Auto-hide timer for the save banner
//!
//! At most one timer is live. It is re-armed each time the banner is shown,
//! cancelled when the banner hides, and aborted when the owner is dropped.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::warn;

use super::state::Action;

/// Default time the banner stays visible
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct BannerTimer {
    timeout: Duration,
    handle: Option<JoinHandle<()>>,
}

impl BannerTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            handle: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Replace any pending timer with one that expires `generation`.
    ///
    /// Outside a Tokio runtime no timer can run; the banner then stays up
    /// until dismissed.
    pub fn arm(&mut self, events: UnboundedSender<Action>, generation: u64) {
        self.cancel();
        let Ok(runtime) = Handle::try_current() else {
            warn!(generation, "No Tokio runtime, save banner will not auto-hide");
            return;
        };
        let timeout = self.timeout;
        self.handle = Some(runtime.spawn(async move {
            tokio::time::sleep(timeout).await;
            // Receiver gone means the store was dropped
            let _ = events.send(Action::BannerExpired(generation));
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Default for BannerTimer {
    fn default() -> Self {
        Self::new(BANNER_TIMEOUT)
    }
}

impl Drop for BannerTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
