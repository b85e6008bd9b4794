//! Typewriter reveal for the hero subtitle. Types one character per
//! fixed interval once its region first enters, then stays complete.
//! The effect never restarts, no matter how the viewport moves
//! afterwards.

use std::time::Duration;

use crate::motion::trigger::TriggerEvent;

use super::ControllerEvent;

const TYPE_CHAR_MS: u64 = 60;
const CURSOR_BLINK_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedPhase {
    Idle,
    Playing,
    Played,
}

#[derive(Debug)]
pub struct TypedTextController {
    total_chars: usize,
    visible: usize,
    typing: Duration,
    lifetime: Duration,
    phase: TypedPhase,
}

impl TypedTextController {
    pub fn new(total_chars: usize) -> Self {
        Self {
            total_chars,
            visible: 0,
            typing: Duration::ZERO,
            lifetime: Duration::ZERO,
            phase: TypedPhase::Idle,
        }
    }

    pub fn phase(&self) -> TypedPhase {
        self.phase
    }

    /// How many characters of the subtitle are currently shown.
    pub fn visible_chars(&self) -> usize {
        self.visible
    }

    /// Block cursor, blinking on a fixed cadence while typing and after.
    pub fn cursor_on(&self) -> bool {
        if self.phase == TypedPhase::Idle {
            return false;
        }
        (self.lifetime.as_millis() as u64 / CURSOR_BLINK_MS) % 2 == 0
    }

    pub fn dispatch(&mut self, event: &ControllerEvent) {
        match event {
            ControllerEvent::Trigger {
                event: TriggerEvent::Enter,
                ..
            } => {
                if self.phase == TypedPhase::Idle {
                    self.phase = if self.total_chars == 0 {
                        TypedPhase::Played
                    } else {
                        TypedPhase::Playing
                    };
                }
            }
            ControllerEvent::Tick(dt) => {
                self.lifetime += *dt;
                if self.phase != TypedPhase::Playing {
                    return;
                }
                self.typing += *dt;
                self.visible =
                    ((self.typing.as_millis() as u64 / TYPE_CHAR_MS) as usize).min(self.total_chars);
                if self.visible == self.total_chars {
                    self.phase = TypedPhase::Played;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::trigger::TriggerHandle;

    fn trigger(event: TriggerEvent) -> ControllerEvent {
        ControllerEvent::Trigger {
            handle: TriggerHandle::from_raw(7),
            event,
        }
    }

    #[test]
    fn test_idle_until_entered() {
        let mut ctrl = TypedTextController::new(10);
        ctrl.dispatch(&ControllerEvent::Tick(Duration::from_millis(500)));
        assert_eq!(ctrl.phase(), TypedPhase::Idle);
        assert_eq!(ctrl.visible_chars(), 0);
        assert!(!ctrl.cursor_on());
    }

    #[test]
    fn test_types_one_char_per_interval() {
        let mut ctrl = TypedTextController::new(10);
        ctrl.dispatch(&trigger(TriggerEvent::Enter));
        assert_eq!(ctrl.phase(), TypedPhase::Playing);

        ctrl.dispatch(&ControllerEvent::Tick(Duration::from_millis(60)));
        assert_eq!(ctrl.visible_chars(), 1);
        ctrl.dispatch(&ControllerEvent::Tick(Duration::from_millis(120)));
        assert_eq!(ctrl.visible_chars(), 3);

        ctrl.dispatch(&ControllerEvent::Tick(Duration::from_secs(5)));
        assert_eq!(ctrl.visible_chars(), 10);
        assert_eq!(ctrl.phase(), TypedPhase::Played);
    }

    #[test]
    fn test_never_restarts() {
        let mut ctrl = TypedTextController::new(4);
        ctrl.dispatch(&trigger(TriggerEvent::Enter));
        ctrl.dispatch(&ControllerEvent::Tick(Duration::from_secs(1)));
        assert_eq!(ctrl.phase(), TypedPhase::Played);

        ctrl.dispatch(&trigger(TriggerEvent::Leave));
        ctrl.dispatch(&trigger(TriggerEvent::EnterBack));
        ctrl.dispatch(&trigger(TriggerEvent::Enter));
        ctrl.dispatch(&ControllerEvent::Tick(Duration::from_secs(1)));
        assert_eq!(ctrl.phase(), TypedPhase::Played);
        assert_eq!(ctrl.visible_chars(), 4);
    }

    #[test]
    fn test_leave_mid_typing_keeps_going() {
        let mut ctrl = TypedTextController::new(10);
        ctrl.dispatch(&trigger(TriggerEvent::Enter));
        ctrl.dispatch(&ControllerEvent::Tick(Duration::from_millis(180)));
        ctrl.dispatch(&trigger(TriggerEvent::Leave));
        ctrl.dispatch(&ControllerEvent::Tick(Duration::from_millis(180)));
        assert_eq!(ctrl.visible_chars(), 6);
        assert_eq!(ctrl.phase(), TypedPhase::Playing);
    }

    #[test]
    fn test_empty_subtitle_completes_immediately() {
        let mut ctrl = TypedTextController::new(0);
        ctrl.dispatch(&trigger(TriggerEvent::Enter));
        assert_eq!(ctrl.phase(), TypedPhase::Played);
    }
}
