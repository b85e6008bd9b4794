//! L3 Molecular Layer: Smooth-scroll coordinator
//!
//! Raw scroll input never moves the page directly. Deltas accumulate
//! into a target offset and the presented offset catches up with an
//! exponential lag, settling within roughly the configured smooth time.
//! Every region reads the presented offset, so trigger boundaries stay
//! in sync with what is actually on screen.

use std::time::Duration;

/// Presented offsets this close to the target snap to it.
const SETTLE_EPSILON: f64 = 0.05;

/// Virtual scroll offset with input batching and lag smoothing.
#[derive(Debug)]
pub struct SmoothScroll {
    target: f64,
    presented: f64,
    /// Raw input accumulated since the last tick.
    pending_delta: f64,
    max_scroll: f64,
    smooth_time: Duration,
    enabled: bool,
}

impl SmoothScroll {
    pub fn new(smooth_time: Duration, enabled: bool) -> Self {
        Self {
            target: 0.0,
            presented: 0.0,
            pending_delta: 0.0,
            max_scroll: 0.0,
            smooth_time,
            enabled,
        }
    }

    /// Queue a relative scroll. Multiple inputs between ticks coalesce
    /// into one target move.
    pub fn scroll_by(&mut self, delta: f64) {
        self.pending_delta += delta;
    }

    /// Retarget to an absolute offset, dropping queued relative input.
    /// The presented offset glides there from wherever it currently is.
    pub fn scroll_to(&mut self, pos: f64) {
        self.pending_delta = 0.0;
        self.target = pos.clamp(0.0, self.max_scroll);
    }

    /// Teleport target and presented offset, e.g. on initial placement.
    pub fn jump_to(&mut self, pos: f64) {
        let pos = pos.clamp(0.0, self.max_scroll);
        self.pending_delta = 0.0;
        self.target = pos;
        self.presented = pos;
    }

    /// Stop gliding: the current presented offset becomes the target.
    pub fn cancel(&mut self) {
        self.pending_delta = 0.0;
        self.target = self.presented;
    }

    /// Update the scrollable range, re-clamping both offsets.
    pub fn set_max_scroll(&mut self, max_scroll: f64) {
        self.max_scroll = max_scroll.max(0.0);
        self.target = self.target.clamp(0.0, self.max_scroll);
        self.presented = self.presented.clamp(0.0, self.max_scroll);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Apply queued input and advance the presented offset. Returns the
    /// new presented offset.
    pub fn tick(&mut self, dt: Duration) -> f64 {
        if self.pending_delta != 0.0 {
            self.target = (self.target + self.pending_delta).clamp(0.0, self.max_scroll);
            self.pending_delta = 0.0;
        }

        let gap = self.target - self.presented;
        if gap == 0.0 {
            return self.presented;
        }
        if !self.enabled || gap.abs() < SETTLE_EPSILON {
            self.presented = self.target;
            return self.presented;
        }

        // Exponential catch-up: settled (within ~5%) after smooth_time.
        let tau = self.smooth_time.as_secs_f64().max(1e-3) / 3.0;
        let alpha = 1.0 - (-dt.as_secs_f64() / tau).exp();
        self.presented += gap * alpha;
        self.presented
    }

    /// The offset regions and the renderer read.
    pub fn pos(&self) -> f64 {
        self.presented
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    /// True while queued input or an unsettled glide remains.
    pub fn needs_update(&self) -> bool {
        self.pending_delta != 0.0 || self.presented != self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn smoother() -> SmoothScroll {
        let mut s = SmoothScroll::new(ms(800), true);
        s.set_max_scroll(1000.0);
        s
    }

    #[test]
    fn test_pending_input_coalesces() {
        let mut s = smoother();
        s.scroll_by(10.0);
        s.scroll_by(15.0);
        s.tick(ms(16));
        assert_eq!(s.target(), 25.0);
        assert!(s.pos() > 0.0 && s.pos() < 25.0);
    }

    #[test]
    fn test_glide_approaches_without_overshoot() {
        let mut s = smoother();
        s.scroll_to(100.0);
        let mut prev = 0.0;
        for _ in 0..250 {
            let p = s.tick(ms(16));
            assert!(p >= prev, "presented offset moved backward");
            assert!(p <= 100.0 + 1e-9, "overshot the target");
            prev = p;
        }
        assert_eq!(s.pos(), 100.0);
        assert!(!s.needs_update());
    }

    #[test]
    fn test_retarget_mid_glide_is_continuous() {
        let mut s = smoother();
        s.scroll_to(100.0);
        for _ in 0..5 {
            s.tick(ms(16));
        }
        let before = s.pos();
        s.scroll_to(0.0);
        let after = s.tick(ms(16));
        assert!((after - before).abs() < before, "jumped instead of gliding");
    }

    #[test]
    fn test_disabled_teleports() {
        let mut s = SmoothScroll::new(ms(800), false);
        s.set_max_scroll(1000.0);
        s.scroll_by(300.0);
        assert_eq!(s.tick(ms(16)), 300.0);
    }

    #[test]
    fn test_clamps_to_range() {
        let mut s = smoother();
        s.scroll_by(-50.0);
        s.tick(ms(16));
        assert_eq!(s.target(), 0.0);
        s.scroll_to(5000.0);
        assert_eq!(s.target(), 1000.0);
    }

    #[test]
    fn test_shrinking_range_reclamps() {
        let mut s = smoother();
        s.jump_to(900.0);
        s.set_max_scroll(500.0);
        assert_eq!(s.pos(), 500.0);
        assert_eq!(s.target(), 500.0);
    }

    #[test]
    fn test_cancel_freezes() {
        let mut s = smoother();
        s.scroll_to(400.0);
        for _ in 0..3 {
            s.tick(ms(16));
        }
        let frozen = s.pos();
        s.cancel();
        s.tick(ms(500));
        assert_eq!(s.pos(), frozen);
        assert!(!s.needs_update());
    }
}
