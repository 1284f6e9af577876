//! Full-rebuild requests from widgets to the host loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag asking the host to tear down and rebuild the whole screen.
///
/// Requests raised before the host's next frame coalesce into one rebuild.
#[derive(Clone, Debug, Default)]
pub struct RebuildRequest {
    pending: Arc<AtomicBool>,
}

impl RebuildRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.pending.store(true, Ordering::SeqCst);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Clear the flag, returning whether a rebuild was pending.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}
