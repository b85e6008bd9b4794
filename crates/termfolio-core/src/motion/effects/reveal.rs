//! Reveal-on-scroll: content blocks slide up and fade in when their
//! region enters going forward, and reverse to hidden when the viewport
//! scrolls back above them.

use std::collections::HashMap;
use std::time::Duration;

use crate::motion::animate::{Animator, Property, TargetId, TweenSpec};
use crate::motion::easing::EasingType;
use crate::motion::trigger::{TriggerEvent, TriggerHandle};

use super::ControllerEvent;

/// Rows a hidden block sits below its resting position.
const HIDDEN_OFFSET: f64 = 20.0;
/// Reveal tween length.
const REVEAL_MS: u64 = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Hidden,
    Shown,
}

#[derive(Debug)]
struct Block {
    target: TargetId,
    state: BlockState,
}

/// Plays the reveal tween per watched block, reversing on backward exit.
#[derive(Debug, Default)]
pub struct RevealController {
    blocks: HashMap<TriggerHandle, Block>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a block. The target starts in the hidden pose.
    pub fn watch(&mut self, handle: TriggerHandle, target: TargetId, fx: &mut Animator) {
        fx.set(target, Property::Opacity, 0.0);
        fx.set(target, Property::OffsetY, HIDDEN_OFFSET);
        self.blocks.insert(
            handle,
            Block {
                target,
                state: BlockState::Hidden,
            },
        );
    }

    pub fn dispatch(&mut self, event: &ControllerEvent, fx: &mut Animator) {
        let ControllerEvent::Trigger { handle, event } = event else {
            return;
        };
        let Some(block) = self.blocks.get_mut(handle) else {
            return;
        };
        match event {
            TriggerEvent::Enter if block.state == BlockState::Hidden => {
                play(block.target, 1.0, 0.0, fx);
                block.state = BlockState::Shown;
            }
            TriggerEvent::LeaveBack if block.state == BlockState::Shown => {
                play(block.target, 0.0, HIDDEN_OFFSET, fx);
                block.state = BlockState::Hidden;
            }
            _ => {}
        }
    }
}

fn play(target: TargetId, opacity: f64, offset: f64, fx: &mut Animator) {
    let duration = Duration::from_millis(REVEAL_MS);
    fx.animate(
        target,
        TweenSpec::new(Property::Opacity, opacity, duration).easing(EasingType::Cubic),
    );
    fx.animate(
        target,
        TweenSpec::new(Property::OffsetY, offset, duration).easing(EasingType::Cubic),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::progress::{Direction, ProgressEvent};

    fn enter(handle: TriggerHandle) -> ControllerEvent {
        ControllerEvent::Trigger {
            handle,
            event: TriggerEvent::Enter,
        }
    }

    fn leave_back(handle: TriggerHandle) -> ControllerEvent {
        ControllerEvent::Trigger {
            handle,
            event: TriggerEvent::LeaveBack,
        }
    }

    fn handle_fixture(fx: &mut Animator) -> (RevealController, TriggerHandle, TargetId) {
        use crate::motion::layout::{Anchor, AnchorPoint, PageLayout, RegionEnd, ScrollRegion, SectionId};
        use crate::motion::progress::ScrollFeed;
        use crate::motion::trigger::{Interest, TriggerRegistry};

        let layout = PageLayout::builder(40).section(SectionId::About, 100).build();
        let mut feed = ScrollFeed::new();
        let mut reg = TriggerRegistry::new();
        let region = ScrollRegion::new(
            SectionId::About,
            Anchor::new(AnchorPoint::Top, AnchorPoint::Fraction(0.85)),
            RegionEnd::Anchor(Anchor::BOTTOM_TOP),
        );
        let handle = reg
            .register(&mut feed, &layout, 1, region, Interest::edges())
            .unwrap();
        let target = fx.alloc_target();
        let mut ctrl = RevealController::new();
        ctrl.watch(handle, target, fx);
        (ctrl, handle, target)
    }

    #[test]
    fn test_starts_hidden_and_reveals_on_enter() {
        let mut fx = Animator::new();
        let (mut ctrl, handle, target) = handle_fixture(&mut fx);

        assert_eq!(fx.value(target, Property::Opacity), 0.0);
        assert_eq!(fx.value(target, Property::OffsetY), HIDDEN_OFFSET);

        ctrl.dispatch(&enter(handle), &mut fx);
        fx.tick(Duration::from_millis(REVEAL_MS + 50));
        assert_eq!(fx.value(target, Property::Opacity), 1.0);
        assert_eq!(fx.value(target, Property::OffsetY), 0.0);
    }

    #[test]
    fn test_reverses_on_leave_back_and_replays() {
        let mut fx = Animator::new();
        let (mut ctrl, handle, target) = handle_fixture(&mut fx);

        ctrl.dispatch(&enter(handle), &mut fx);
        fx.tick(Duration::from_millis(REVEAL_MS + 50));

        ctrl.dispatch(&leave_back(handle), &mut fx);
        fx.tick(Duration::from_millis(REVEAL_MS + 50));
        assert_eq!(fx.value(target, Property::Opacity), 0.0);
        assert_eq!(fx.value(target, Property::OffsetY), HIDDEN_OFFSET);

        // A later forward entry plays the reveal again.
        ctrl.dispatch(&enter(handle), &mut fx);
        fx.tick(Duration::from_millis(REVEAL_MS + 50));
        assert_eq!(fx.value(target, Property::Opacity), 1.0);
    }

    #[test]
    fn test_repeat_enter_does_not_restart() {
        let mut fx = Animator::new();
        let (mut ctrl, handle, target) = handle_fixture(&mut fx);

        ctrl.dispatch(&enter(handle), &mut fx);
        fx.tick(Duration::from_millis(REVEAL_MS + 50));
        fx.take_updates();

        // Shown block ignores further forward entries.
        ctrl.dispatch(&enter(handle), &mut fx);
        fx.tick(Duration::from_millis(16));
        assert!(fx.take_updates().is_empty());
        assert_eq!(fx.value(target, Property::Opacity), 1.0);
    }

    #[test]
    fn test_update_events_ignored() {
        let mut fx = Animator::new();
        let (mut ctrl, handle, target) = handle_fixture(&mut fx);
        ctrl.dispatch(
            &ControllerEvent::Trigger {
                handle,
                event: TriggerEvent::Update(ProgressEvent {
                    progress: 0.5,
                    direction: Direction::Forward,
                }),
            },
            &mut fx,
        );
        assert_eq!(fx.value(target, Property::Opacity), 0.0);
    }
}
