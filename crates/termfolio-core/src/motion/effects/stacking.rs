//! Stacking tunnel for the pinned experience section. Section progress
//! is split into one window per item; each item flies from a recessed
//! entry pose to its rest pose inside its own window, so items complete
//! in sequence while the section holds its place on screen.
//!
//! The discrete step index advances at the i/N window boundaries and
//! backs up the same way when scrolling in reverse.

use crate::motion::animate::{Animator, Property, TargetId};
use crate::motion::progress::ProgressEvent;
use crate::motion::timing::{clamp01, lerp};
use crate::motion::trigger::TriggerEvent;

use super::ControllerEvent;

/// Entry pose and step count for one stacking run.
#[derive(Debug, Clone, Copy)]
pub struct StackingParams {
    pub steps: usize,
    pub depth_from: f64,
    pub depth_to: f64,
    pub opacity_from: f64,
    pub scale_from: f64,
}

impl Default for StackingParams {
    fn default() -> Self {
        Self {
            steps: 3,
            depth_from: -500.0,
            depth_to: 0.0,
            opacity_from: 0.7,
            scale_from: 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackPhase {
    Idle,
    Active { step: usize },
}

#[derive(Debug)]
pub struct StackingController {
    items: Vec<TargetId>,
    params: StackingParams,
    phase: StackPhase,
}

impl StackingController {
    /// Primes every item at the recessed entry pose.
    pub fn new(items: Vec<TargetId>, params: StackingParams, fx: &mut Animator) -> Self {
        for &item in &items {
            fx.set(item, Property::Depth, params.depth_from);
            fx.set(item, Property::Opacity, params.opacity_from);
            fx.set(item, Property::Scale, params.scale_from);
        }
        Self {
            items,
            params,
            phase: StackPhase::Idle,
        }
    }

    pub fn phase(&self) -> StackPhase {
        self.phase
    }

    pub fn step(&self) -> Option<usize> {
        match self.phase {
            StackPhase::Active { step } => Some(step),
            StackPhase::Idle => None,
        }
    }

    pub fn dispatch(&mut self, event: &ControllerEvent, fx: &mut Animator) {
        let ControllerEvent::Trigger { event, .. } = event else {
            return;
        };
        match event {
            TriggerEvent::Enter => self.phase = StackPhase::Active { step: 0 },
            TriggerEvent::EnterBack => {
                self.phase = StackPhase::Active {
                    step: self.params.steps.saturating_sub(1),
                }
            }
            TriggerEvent::Leave | TriggerEvent::LeaveBack => self.phase = StackPhase::Idle,
            TriggerEvent::Update(ev) => self.apply(ev, fx),
        }
    }

    fn apply(&mut self, ev: &ProgressEvent, fx: &mut Animator) {
        let steps = self.params.steps.max(1);
        let scaled = ev.progress * steps as f64;

        if let StackPhase::Active { .. } = self.phase {
            let step = (scaled.floor() as usize).min(steps - 1);
            self.phase = StackPhase::Active { step };
        }

        for (i, &item) in self.items.iter().enumerate() {
            let local = clamp01(scaled - i as f64);
            // Quad ease-out, matching the tunnel's original feel.
            let eased = 1.0 - (1.0 - local) * (1.0 - local);
            fx.set(
                item,
                Property::Depth,
                lerp(self.params.depth_from, self.params.depth_to, eased),
            );
            fx.set(
                item,
                Property::Opacity,
                lerp(self.params.opacity_from, 1.0, eased),
            );
            fx.set(
                item,
                Property::Scale,
                lerp(self.params.scale_from, 1.0, eased),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::progress::Direction;
    use crate::motion::trigger::TriggerHandle;

    fn trigger(event: TriggerEvent) -> ControllerEvent {
        ControllerEvent::Trigger {
            handle: TriggerHandle::from_raw(1),
            event,
        }
    }

    fn update(progress: f64) -> ControllerEvent {
        trigger(TriggerEvent::Update(ProgressEvent {
            progress,
            direction: Direction::Forward,
        }))
    }

    #[test]
    fn test_starts_idle_at_entry_pose() {
        let mut fx = Animator::new();
        let items = vec![fx.alloc_target(), fx.alloc_target()];
        let ctrl = StackingController::new(items.clone(), StackingParams::default(), &mut fx);

        assert_eq!(ctrl.phase(), StackPhase::Idle);
        for &item in &items {
            assert_eq!(fx.value(item, Property::Depth), -500.0);
            assert_eq!(fx.value(item, Property::Opacity), 0.7);
            assert_eq!(fx.value(item, Property::Scale), 0.9);
        }
    }

    #[test]
    fn test_step_advances_at_window_boundaries() {
        let mut fx = Animator::new();
        let items = (0..4).map(|_| fx.alloc_target()).collect();
        let params = StackingParams {
            steps: 4,
            ..StackingParams::default()
        };
        let mut ctrl = StackingController::new(items, params, &mut fx);
        ctrl.dispatch(&trigger(TriggerEvent::Enter), &mut fx);

        for (progress, step) in [(0.0, 0), (0.2, 0), (0.25, 1), (0.5, 2), (0.75, 3), (1.0, 3)] {
            ctrl.dispatch(&update(progress), &mut fx);
            assert_eq!(ctrl.step(), Some(step), "progress {progress}");
        }
    }

    #[test]
    fn test_items_complete_in_sequence() {
        let mut fx = Animator::new();
        let items: Vec<_> = (0..3).map(|_| fx.alloc_target()).collect();
        let mut ctrl =
            StackingController::new(items.clone(), StackingParams::default(), &mut fx);
        ctrl.dispatch(&trigger(TriggerEvent::Enter), &mut fx);

        // Halfway through the section the first item is done, the second
        // is halfway through its own window, the third has not started.
        ctrl.dispatch(&update(0.5), &mut fx);
        assert_eq!(fx.value(items[0], Property::Depth), 0.0);
        assert_eq!(fx.value(items[0], Property::Opacity), 1.0);
        assert!((fx.value(items[1], Property::Depth) + 125.0).abs() < 1e-9);
        assert!((fx.value(items[1], Property::Opacity) - 0.925).abs() < 1e-9);
        assert!((fx.value(items[1], Property::Scale) - 0.975).abs() < 1e-9);
        assert_eq!(fx.value(items[2], Property::Depth), -500.0);
        assert_eq!(fx.value(items[2], Property::Opacity), 0.7);
    }

    #[test]
    fn test_full_progress_brings_all_items_to_rest() {
        let mut fx = Animator::new();
        let items: Vec<_> = (0..3).map(|_| fx.alloc_target()).collect();
        let mut ctrl =
            StackingController::new(items.clone(), StackingParams::default(), &mut fx);
        ctrl.dispatch(&trigger(TriggerEvent::Enter), &mut fx);
        ctrl.dispatch(&update(1.0), &mut fx);

        for &item in &items {
            assert_eq!(fx.value(item, Property::Depth), 0.0);
            assert_eq!(fx.value(item, Property::Opacity), 1.0);
            assert_eq!(fx.value(item, Property::Scale), 1.0);
        }
    }

    #[test]
    fn test_edges_toggle_phase() {
        let mut fx = Animator::new();
        let items = (0..3).map(|_| fx.alloc_target()).collect();
        let mut ctrl = StackingController::new(items, StackingParams::default(), &mut fx);

        ctrl.dispatch(&trigger(TriggerEvent::Enter), &mut fx);
        assert_eq!(ctrl.phase(), StackPhase::Active { step: 0 });

        ctrl.dispatch(&trigger(TriggerEvent::Leave), &mut fx);
        assert_eq!(ctrl.phase(), StackPhase::Idle);

        ctrl.dispatch(&trigger(TriggerEvent::EnterBack), &mut fx);
        assert_eq!(ctrl.phase(), StackPhase::Active { step: 2 });

        ctrl.dispatch(&trigger(TriggerEvent::LeaveBack), &mut fx);
        assert_eq!(ctrl.phase(), StackPhase::Idle);
    }
}
