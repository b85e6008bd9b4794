//! L3 Molecular Layer: Effect timeline
//!
//! An ordered sequence of tween entries with relative start offsets.
//! Entries may overlap, which is how choreographed transitions run an
//! exit and an entrance concurrently with a fixed delay between their
//! starts. The timeline advances only through `tick`, so playback is
//! deterministic for a given sequence of durations.

use std::time::Duration;

use super::animate::{Animator, TargetId, TweenSpec};

/// One scheduled tween within a timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    /// Offset from timeline start at which the tween begins.
    pub at: Duration,
    pub target: TargetId,
    pub spec: TweenSpec,
}

/// Playback position of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Playing,
    Finished,
}

/// A one-shot schedule of tweens handed to the animator as time passes.
#[derive(Debug)]
pub struct EffectTimeline {
    entries: Vec<TimelineEntry>,
    /// Index of the next entry to hand off, in `at` order.
    next: usize,
    elapsed: Duration,
    end: Duration,
    state: Playback,
}

impl EffectTimeline {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next: 0,
            elapsed: Duration::ZERO,
            end: Duration::ZERO,
            state: Playback::Idle,
        }
    }

    /// Schedule a tween at an offset from timeline start.
    pub fn entry(mut self, at: Duration, target: TargetId, spec: TweenSpec) -> Self {
        let finish = at + spec.delay + spec.duration;
        if finish > self.end {
            self.end = finish;
        }
        self.entries.push(TimelineEntry { at, target, spec });
        self
    }

    /// Begin playback. Entries are handed to the animator as their
    /// offsets elapse; entries sharing an offset keep insertion order.
    pub fn play(mut self) -> Self {
        self.entries.sort_by_key(|e| e.at);
        self.state = Playback::Playing;
        self
    }

    /// Advance playback, starting any entries whose offset has elapsed.
    pub fn tick(&mut self, dt: Duration, fx: &mut Animator) {
        if self.state != Playback::Playing {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        while self.next < self.entries.len() && self.entries[self.next].at <= self.elapsed {
            let e = self.entries[self.next];
            fx.animate(e.target, e.spec);
            self.next += 1;
        }
        if self.next == self.entries.len() && self.elapsed >= self.end {
            self.state = Playback::Finished;
        }
    }

    pub fn state(&self) -> Playback {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == Playback::Finished
    }

    /// Total span from start to the last tween's completion.
    pub fn duration(&self) -> Duration {
        self.end
    }

    /// The schedule itself, for inspection.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }
}

impl Default for EffectTimeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::animate::Property;
    use crate::motion::easing::EasingType;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_entries_start_at_their_offsets() {
        let mut fx = Animator::new();
        let a = fx.alloc_target();
        let b = fx.alloc_target();
        let mut tl = EffectTimeline::new()
            .entry(
                ms(0),
                a,
                TweenSpec::new(Property::Opacity, 0.0, ms(100)).easing(EasingType::Linear),
            )
            .entry(
                ms(150),
                b,
                TweenSpec::new(Property::Opacity, 0.0, ms(100)).easing(EasingType::Linear),
            )
            .play();

        tl.tick(ms(50), &mut fx);
        assert!(fx.is_animating(a));
        assert!(!fx.is_animating(b), "second entry must wait for its offset");

        tl.tick(ms(100), &mut fx);
        assert!(fx.is_animating(b));
    }

    #[test]
    fn test_overlapping_entries_run_concurrently() {
        let mut fx = Animator::new();
        let a = fx.alloc_target();
        let b = fx.alloc_target();
        let mut tl = EffectTimeline::new()
            .entry(ms(0), a, TweenSpec::new(Property::OffsetX, 10.0, ms(300)))
            .entry(ms(150), b, TweenSpec::new(Property::OffsetX, -10.0, ms(300)))
            .play();

        tl.tick(ms(200), &mut fx);
        assert!(fx.is_animating(a) && fx.is_animating(b));
        assert_eq!(tl.duration(), ms(450));
    }

    #[test]
    fn test_finishes_after_last_entry_completes() {
        let mut fx = Animator::new();
        let a = fx.alloc_target();
        let mut tl = EffectTimeline::new()
            .entry(ms(100), a, TweenSpec::new(Property::Scale, 0.8, ms(200)))
            .play();

        assert_eq!(tl.state(), Playback::Playing);
        tl.tick(ms(150), &mut fx);
        assert!(!tl.is_finished());
        tl.tick(ms(200), &mut fx);
        assert!(tl.is_finished());
    }

    #[test]
    fn test_idle_timeline_does_nothing() {
        let mut fx = Animator::new();
        let a = fx.alloc_target();
        let mut tl =
            EffectTimeline::new().entry(ms(0), a, TweenSpec::new(Property::Opacity, 0.0, ms(100)));
        tl.tick(ms(500), &mut fx);
        assert_eq!(tl.state(), Playback::Idle);
        assert!(!fx.is_animating(a));
    }
}
