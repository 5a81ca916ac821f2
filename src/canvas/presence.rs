use std::sync::atomic::{AtomicU32, Ordering};

/// Live count of connected clients.
///
/// A single process-wide atomic is the source of truth. The decrement is a
/// read-modify-write on the current value, never a stale count captured at
/// connection-open time, and it clamps at zero so a duplicate or malformed
/// disconnect cannot drive the counter negative. Resets to zero on restart.
#[derive(Debug, Default)]
pub struct PresenceTracker {
    count: AtomicU32,
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection, returning the new count.
    pub fn on_connect(&self) -> u32 {
        self.count.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Register a disconnection, returning the new count.
    pub fn on_disconnect(&self) -> u32 {
        let previous =
            self.count
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                    Some(current.saturating_sub(1))
                });
        match previous {
            Ok(value) | Err(value) => value.saturating_sub(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }
}
