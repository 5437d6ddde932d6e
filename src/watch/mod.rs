//! Debounced recompute scheduling

/// Delay between the last qualifying change and the recompute, in
/// milliseconds. Long enough for late style and font application to settle
/// before measuring, short enough to feel immediate.
pub const DEBOUNCE_DELAY_MS: u64 = 200;

/// What changed; every kind re-runs the full pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Résumé content was replaced
    Content,
    /// Template or style settings changed
    Settings,
    /// Page size or margins changed
    Geometry,
    /// Real font metrics arrived (e.g. a webfont finished loading)
    FontMetrics,
}

/// Single-slot debounce timer over millisecond timestamps.
///
/// At most one recompute is ever pending. Scheduling while one is pending
/// replaces its deadline (last-write-wins); nothing queues behind it. The
/// host runtime owns the actual timer and polls `fire_if_due`, so the
/// primitive ports to any environment with a clock.
#[derive(Debug, Clone)]
pub struct RecomputeTimer {
    deadline_ms: Option<u64>,
    delay_ms: u64,
}

impl Default for RecomputeTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecomputeTimer {
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY_MS)
    }

    /// Timer with a custom delay
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            deadline_ms: None,
            delay_ms,
        }
    }

    /// Arm the slot, replacing any pending deadline
    pub fn schedule(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms + self.delay_ms);
    }

    /// Whether a recompute is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Milliseconds until the deadline, if one is armed
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline_ms.map(|d| d.saturating_sub(now_ms))
    }

    /// Consume the deadline if it has passed
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending recompute without firing it
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }
}

/// Current wall-clock time in milliseconds
pub(crate) fn current_timestamp() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_never_fires() {
        let mut timer = RecomputeTimer::new();
        assert!(!timer.is_pending());
        assert!(!timer.fire_if_due(1_000_000));
        assert_eq!(timer.remaining_ms(0), None);
    }

    #[test]
    fn test_fires_only_after_delay() {
        let mut timer = RecomputeTimer::new();
        timer.schedule(1000);
        assert!(timer.is_pending());
        assert!(!timer.fire_if_due(1000 + DEBOUNCE_DELAY_MS - 1));
        assert!(timer.is_pending());
        assert!(timer.fire_if_due(1000 + DEBOUNCE_DELAY_MS));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_fire_consumes_deadline() {
        let mut timer = RecomputeTimer::new();
        timer.schedule(0);
        assert!(timer.fire_if_due(DEBOUNCE_DELAY_MS));
        assert!(!timer.fire_if_due(DEBOUNCE_DELAY_MS * 10));
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let mut timer = RecomputeTimer::with_delay(200);
        timer.schedule(0);
        timer.schedule(150);
        // The first deadline (200) no longer exists.
        assert!(!timer.fire_if_due(210));
        assert!(timer.fire_if_due(350));
    }

    #[test]
    fn test_cancel_clears_slot() {
        let mut timer = RecomputeTimer::new();
        timer.schedule(0);
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.fire_if_due(DEBOUNCE_DELAY_MS * 2));
    }

    #[test]
    fn test_remaining_counts_down_and_saturates() {
        let mut timer = RecomputeTimer::with_delay(200);
        timer.schedule(100);
        assert_eq!(timer.remaining_ms(100), Some(200));
        assert_eq!(timer.remaining_ms(250), Some(50));
        assert_eq!(timer.remaining_ms(400), Some(0));
    }
}
