//! Education timeline dots. Exactly one dot is highlighted at any
//! moment: scrolling an entry's region into view moves the highlight
//! there, and activating a dot directly asks the engine to center its
//! entry in the viewport.

use std::time::Duration;

use crate::motion::animate::{Animator, Property, TargetId, TweenSpec};
use crate::motion::easing::EasingType;
use crate::motion::trigger::{TriggerEvent, TriggerHandle};

use super::{ControllerEvent, EngineRequest, NavCommand};

const DOT_MS: u64 = 200;

#[derive(Debug)]
pub struct TimelineDotsController {
    dots: Vec<(TriggerHandle, TargetId)>,
    centers: Vec<f64>,
    active: usize,
}

impl TimelineDotsController {
    /// `dots` pairs each entry's trigger with its dot target, in
    /// timeline order. The first dot starts highlighted.
    pub fn new(dots: Vec<(TriggerHandle, TargetId)>, fx: &mut Animator) -> Self {
        for (i, &(_, dot)) in dots.iter().enumerate() {
            fx.set(dot, Property::Fill, if i == 0 { 1.0 } else { 0.0 });
        }
        Self {
            dots,
            centers: Vec::new(),
            active: 0,
        }
    }

    /// Absolute scroll position that centers each entry, refreshed
    /// whenever the layout changes.
    pub fn update_centers(&mut self, centers: Vec<f64>) {
        self.centers = centers;
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn dispatch(
        &mut self,
        event: &ControllerEvent,
        fx: &mut Animator,
    ) -> Option<EngineRequest> {
        match event {
            ControllerEvent::Trigger {
                handle,
                event: TriggerEvent::Enter | TriggerEvent::EnterBack,
            } => {
                if let Some(index) = self.dots.iter().position(|(h, _)| h == handle) {
                    self.highlight(index, fx);
                }
                None
            }
            ControllerEvent::Command(NavCommand::ActivateDot(index)) => {
                if *index >= self.dots.len() {
                    return None;
                }
                self.highlight(*index, fx);
                self.centers.get(*index).map(|&row| EngineRequest::ScrollTo(row))
            }
            _ => None,
        }
    }

    fn highlight(&mut self, index: usize, fx: &mut Animator) {
        if index == self.active {
            return;
        }
        let fade = Duration::from_millis(DOT_MS);
        let (_, off) = self.dots[self.active];
        let (_, on) = self.dots[index];
        fx.animate(
            off,
            TweenSpec::new(Property::Fill, 0.0, fade).easing(EasingType::Quad),
        );
        fx.animate(
            on,
            TweenSpec::new(Property::Fill, 1.0, fade).easing(EasingType::Quad),
        );
        self.active = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(fx: &mut Animator) -> (TimelineDotsController, Vec<TargetId>) {
        let targets: Vec<TargetId> = (0..2).map(|_| fx.alloc_target()).collect();
        let dots = targets
            .iter()
            .enumerate()
            .map(|(i, &t)| (TriggerHandle::from_raw(10 + i as u64), t))
            .collect();
        let mut ctrl = TimelineDotsController::new(dots, fx);
        ctrl.update_centers(vec![120.0, 240.0]);
        (ctrl, targets)
    }

    #[test]
    fn test_first_dot_starts_highlighted() {
        let mut fx = Animator::new();
        let (ctrl, targets) = fixture(&mut fx);
        assert_eq!(ctrl.active_index(), 0);
        assert_eq!(fx.value(targets[0], Property::Fill), 1.0);
        assert_eq!(fx.value(targets[1], Property::Fill), 0.0);
    }

    #[test]
    fn test_region_enter_moves_highlight() {
        let mut fx = Animator::new();
        let (mut ctrl, targets) = fixture(&mut fx);

        let req = ctrl.dispatch(
            &ControllerEvent::Trigger {
                handle: TriggerHandle::from_raw(11),
                event: TriggerEvent::Enter,
            },
            &mut fx,
        );
        assert!(req.is_none());
        assert_eq!(ctrl.active_index(), 1);

        fx.tick(Duration::from_millis(300));
        assert_eq!(fx.value(targets[0], Property::Fill), 0.0);
        assert_eq!(fx.value(targets[1], Property::Fill), 1.0);
    }

    #[test]
    fn test_activation_requests_centering_scroll() {
        let mut fx = Animator::new();
        let (mut ctrl, _) = fixture(&mut fx);

        let req = ctrl.dispatch(
            &ControllerEvent::Command(NavCommand::ActivateDot(1)),
            &mut fx,
        );
        assert_eq!(req, Some(EngineRequest::ScrollTo(240.0)));
        assert_eq!(ctrl.active_index(), 1);
    }

    #[test]
    fn test_out_of_range_activation_is_noop() {
        let mut fx = Animator::new();
        let (mut ctrl, _) = fixture(&mut fx);
        fx.take_updates();

        let req = ctrl.dispatch(
            &ControllerEvent::Command(NavCommand::ActivateDot(9)),
            &mut fx,
        );
        assert!(req.is_none());
        assert_eq!(ctrl.active_index(), 0);
        assert!(!fx.needs_update());
    }

    #[test]
    fn test_enter_back_rehighlights_earlier_entry() {
        let mut fx = Animator::new();
        let (mut ctrl, _) = fixture(&mut fx);

        ctrl.dispatch(
            &ControllerEvent::Trigger {
                handle: TriggerHandle::from_raw(11),
                event: TriggerEvent::Enter,
            },
            &mut fx,
        );
        ctrl.dispatch(
            &ControllerEvent::Trigger {
                handle: TriggerHandle::from_raw(10),
                event: TriggerEvent::EnterBack,
            },
            &mut fx,
        );
        assert_eq!(ctrl.active_index(), 0);
    }
}
