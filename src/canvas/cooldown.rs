use std::time::Duration;

use moka::ops::compute::{CompResult, Op};
use moka::sync::Cache;
use tracing::debug;

/// Outcome of a paint admission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Rejected { remaining: Duration },
}

#[derive(Debug, Clone)]
struct CooldownState {
    last_paint_at: i64,
}

/// Per-client write-admission gate.
///
/// A client that painted less than the configured cooldown ago is rejected
/// with the remaining wait; "cooling" is derived from `last_paint_at` and
/// `now` on each attempt, never stored as a flag and never driven by a
/// timer. A zero cooldown disables the gate and admits everything.
///
/// States are keyed by the opaque client identifier in an idle-expiring
/// cache, so stale clients fall out on their own once their session is long
/// gone.
pub struct CooldownGate {
    cooldown: Duration,
    states: Cache<String, CooldownState>,
}

impl CooldownGate {
    pub fn new(cooldown: Duration) -> Self {
        // Entries only matter while a cooldown can still be pending; keep
        // them around a generous multiple of it before idle eviction.
        let idle = Duration::from_secs(3600).max(cooldown * 4);
        let states = Cache::builder()
            .max_capacity(100_000)
            .time_to_idle(idle)
            .build();
        Self { cooldown, states }
    }

    /// Decide whether a paint attempt from `client_id` at `now_ms` (epoch
    /// milliseconds) is allowed. On admission the attempt time is recorded
    /// in the same atomic cache operation, so two racing attempts from one
    /// client cannot both slip through a half-updated state.
    pub fn try_admit(&self, client_id: &str, now_ms: i64) -> Admission {
        if self.cooldown.is_zero() {
            return Admission::Admitted;
        }
        let cooldown_ms = self.cooldown.as_millis() as i64;

        let result = self
            .states
            .entry(client_id.to_string())
            .and_compute_with(|existing| match existing {
                Some(entry) if now_ms - entry.value().last_paint_at < cooldown_ms => Op::Nop,
                _ => Op::Put(CooldownState {
                    last_paint_at: now_ms,
                }),
            });

        match result {
            CompResult::Unchanged(entry) => {
                let elapsed = now_ms - entry.value().last_paint_at;
                let remaining = Duration::from_millis((cooldown_ms - elapsed).max(0) as u64);
                debug!(
                    "Rejected paint from '{}', {:.1}s of cooldown left",
                    client_id,
                    remaining.as_secs_f64()
                );
                Admission::Rejected { remaining }
            }
            _ => Admission::Admitted,
        }
    }
}
