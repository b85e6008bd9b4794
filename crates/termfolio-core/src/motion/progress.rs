//! L3 Molecular Layer: Scroll progress source
//!
//! Normalizes the page scroll position into per-region progress values
//! and owns the scroll input subscription. The subscription is reference
//! counted: the first attached listener turns the feed on, detaching the
//! last turns it off, and the count is observable so teardown can be
//! verified.

use std::collections::HashSet;

use super::layout::ResolvedSpan;
use super::timing::clamp01;

/// Scroll travel direction derived from consecutive positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Progress notification for one region.
///
/// `progress` is clamped to [0, 1]; `direction` reflects the scroll move
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    pub progress: f64,
    pub direction: Direction,
}

/// Normalized progress of `pos` through a resolved span.
///
/// Returns exactly 0.0 before the span and exactly 1.0 past it.
#[inline]
pub fn span_progress(span: &ResolvedSpan, pos: f64) -> f64 {
    clamp01((pos - span.start) / (span.end - span.start))
}

/// Token identifying one attached scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

/// The single scroll position publisher for the page.
///
/// Consumers attach a listener token while they have live regions and
/// detach it when the last region goes away. Detach is idempotent.
#[derive(Debug, Default)]
pub struct ScrollFeed {
    pos: f64,
    last_pos: Option<f64>,
    listeners: HashSet<ListenerToken>,
    next_token: u64,
}

impl ScrollFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener; the feed is live while at least one is attached.
    pub fn attach(&mut self) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.listeners.insert(token);
        token
    }

    /// Detach a listener. Detaching an already-detached token is a no-op.
    pub fn detach(&mut self, token: ListenerToken) {
        self.listeners.remove(&token);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_live(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Publish a new scroll position. Returns the travel direction, or
    /// `None` when the position did not change.
    pub fn publish(&mut self, pos: f64) -> Option<Direction> {
        let prev = self.last_pos.replace(pos);
        self.pos = pos;
        match prev {
            Some(p) if pos > p => Some(Direction::Forward),
            Some(p) if pos < p => Some(Direction::Backward),
            Some(_) => None,
            // First publish counts as forward travel from page load.
            None => Some(Direction::Forward),
        }
    }

    pub fn pos(&self) -> f64 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_progress_formula() {
        let span = ResolvedSpan {
            start: 0.0,
            end: 1000.0,
        };
        assert!((span_progress(&span, 250.0) - 0.25).abs() < 1e-9);
        assert!((span_progress(&span, 1000.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_span_progress_clamps_outside() {
        let span = ResolvedSpan {
            start: 100.0,
            end: 200.0,
        };
        assert_eq!(span_progress(&span, 50.0), 0.0);
        assert_eq!(span_progress(&span, 1200.0), 1.0);
    }

    #[test]
    fn test_span_progress_monotonic() {
        let span = ResolvedSpan {
            start: 100.0,
            end: 200.0,
        };
        let mut prev = 0.0;
        for i in 0..=300 {
            let v = span_progress(&span, i as f64);
            assert!(v >= prev, "not monotonic at pos={}", i);
            prev = v;
        }
    }

    #[test]
    fn test_listener_refcount() {
        let mut feed = ScrollFeed::new();
        assert_eq!(feed.listener_count(), 0);
        assert!(!feed.is_live());

        let a = feed.attach();
        let b = feed.attach();
        assert_eq!(feed.listener_count(), 2);
        assert!(feed.is_live());

        feed.detach(a);
        assert_eq!(feed.listener_count(), 1);
        // Double detach is a no-op.
        feed.detach(a);
        assert_eq!(feed.listener_count(), 1);

        feed.detach(b);
        assert_eq!(feed.listener_count(), 0);
        assert!(!feed.is_live());
    }

    #[test]
    fn test_publish_direction() {
        let mut feed = ScrollFeed::new();
        assert_eq!(feed.publish(0.0), Some(Direction::Forward));
        assert_eq!(feed.publish(10.0), Some(Direction::Forward));
        assert_eq!(feed.publish(10.0), None);
        assert_eq!(feed.publish(4.0), Some(Direction::Backward));
        assert_eq!(feed.pos(), 4.0);
    }
}
