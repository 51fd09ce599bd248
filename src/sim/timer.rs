//! Millisecond timers for cooldowns, spawn intervals and lifetimes

/// Accumulates elapsed milliseconds toward a target.
///
/// Readiness is a pure query; the owner must call [`Timer::reset`] after
/// consuming it, otherwise the timer stays ready.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timer {
    current_ticks: f32,
    target_ticks: f32,
}

impl Timer {
    pub fn new(target_ms: f32) -> Self {
        Self {
            current_ticks: 0.0,
            target_ticks: target_ms,
        }
    }

    /// Add `dt` seconds. No clamping: the counter may overshoot the target.
    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.current_ticks += dt * 1000.0;
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.current_ticks >= self.target_ticks
    }

    pub fn reset(&mut self) {
        self.current_ticks = 0.0;
    }

    /// Elapsed milliseconds since the last reset
    pub fn elapsed(&self) -> f32 {
        self.current_ticks
    }

    pub fn target(&self) -> f32 {
        self.target_ticks
    }
}
