//! Count-up statistics. Each counter fills from zero to its final
//! value the first time its section scrolls into view, and never
//! replays after that.

use std::time::Duration;

use crate::motion::animate::{Animator, Property, TargetId, TweenSpec};
use crate::motion::easing::EasingType;
use crate::motion::trigger::TriggerEvent;

use super::ControllerEvent;

const COUNT_MS: u64 = 800;
const COUNT_STAGGER_MS: u64 = 80;

#[derive(Debug)]
pub struct CounterController {
    counters: Vec<(TargetId, f64)>,
    played: bool,
}

impl CounterController {
    /// Primes every counter at zero; `counters` pairs each target with
    /// the value it counts up to.
    pub fn new(counters: Vec<(TargetId, f64)>, fx: &mut Animator) -> Self {
        for &(target, _) in &counters {
            fx.set(target, Property::Fill, 0.0);
        }
        Self {
            counters,
            played: false,
        }
    }

    pub fn has_played(&self) -> bool {
        self.played
    }

    pub fn dispatch(&mut self, event: &ControllerEvent, fx: &mut Animator) {
        let ControllerEvent::Trigger {
            event: TriggerEvent::Enter,
            ..
        } = event
        else {
            return;
        };
        if self.played {
            return;
        }
        self.played = true;
        for (i, &(target, value)) in self.counters.iter().enumerate() {
            fx.animate(
                target,
                TweenSpec::new(Property::Fill, value, Duration::from_millis(COUNT_MS))
                    .from(0.0)
                    .delay(Duration::from_millis(COUNT_STAGGER_MS * i as u64))
                    .easing(EasingType::Quad),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::trigger::TriggerHandle;

    fn enter() -> ControllerEvent {
        ControllerEvent::Trigger {
            handle: TriggerHandle::from_raw(1),
            event: TriggerEvent::Enter,
        }
    }

    #[test]
    fn test_counters_start_at_zero() {
        let mut fx = Animator::new();
        let t = fx.alloc_target();
        let _ctrl = CounterController::new(vec![(t, 42.0)], &mut fx);
        assert_eq!(fx.value(t, Property::Fill), 0.0);
    }

    #[test]
    fn test_enter_counts_up_with_stagger() {
        let mut fx = Animator::new();
        let a = fx.alloc_target();
        let b = fx.alloc_target();
        let mut ctrl = CounterController::new(vec![(a, 10.0), (b, 20.0)], &mut fx);

        ctrl.dispatch(&enter(), &mut fx);
        fx.tick(Duration::from_millis(400));
        let first = fx.value(a, Property::Fill);
        let second = fx.value(b, Property::Fill);
        // The second counter started 80ms later, so it trails in
        // fraction of its own range.
        assert!(first > 0.0);
        assert!(second / 20.0 < first / 10.0);

        fx.tick(Duration::from_millis(600));
        assert_eq!(fx.value(a, Property::Fill), 10.0);
        assert_eq!(fx.value(b, Property::Fill), 20.0);
    }

    #[test]
    fn test_counts_only_once() {
        let mut fx = Animator::new();
        let t = fx.alloc_target();
        let mut ctrl = CounterController::new(vec![(t, 5.0)], &mut fx);

        ctrl.dispatch(&enter(), &mut fx);
        fx.tick(Duration::from_millis(1000));
        fx.take_updates();
        assert!(ctrl.has_played());

        ctrl.dispatch(&enter(), &mut fx);
        fx.tick(Duration::from_millis(100));
        assert!(fx.take_updates().is_empty());
        assert_eq!(fx.value(t, Property::Fill), 5.0);
    }

    #[test]
    fn test_leave_is_ignored() {
        let mut fx = Animator::new();
        let t = fx.alloc_target();
        let mut ctrl = CounterController::new(vec![(t, 5.0)], &mut fx);

        let ControllerEvent::Trigger { handle, .. } = enter() else {
            unreachable!();
        };
        ctrl.dispatch(
            &ControllerEvent::Trigger {
                handle,
                event: TriggerEvent::Leave,
            },
            &mut fx,
        );
        assert!(!ctrl.has_played());
    }
}
