//! Project card deck. One card is active at a time; navigation runs an
//! exit animation on the outgoing card and, after a fixed delay, an
//! entrance on the incoming card from the opposite side. Both run
//! concurrently through the shared animator, so rapid navigation hands
//! off mid-flight instead of snapping.

use std::time::Duration;

use crate::motion::animate::{Animator, Property, TargetId, TweenSpec};
use crate::motion::trigger::TriggerEvent;

use super::{ControllerEvent, NavCommand};

/// Entrance starts this long after the exit begins.
pub const DECK_ENTRANCE_DELAY: Duration = Duration::from_millis(150);

/// Exit and entrance each run this long; with the delay the full
/// choreography is about half a second.
pub const DECK_EXIT_MS: u64 = 350;

const CARD_SLIDE_X: f64 = 100.0;
const CARD_TILT_DEG: f64 = 15.0;
const CARD_SCALE_OUT: f64 = 0.8;

#[derive(Debug)]
pub struct CardDeckController {
    cards: Vec<TargetId>,
    active: usize,
    entered: bool,
}

impl CardDeckController {
    /// Primes every card except the first as hidden. The first card is
    /// the active one and keeps its rest pose.
    pub fn new(cards: Vec<TargetId>, fx: &mut Animator) -> Self {
        for &card in cards.iter().skip(1) {
            fx.set(card, Property::Opacity, 0.0);
            fx.set(card, Property::Scale, CARD_SCALE_OUT);
        }
        Self {
            cards,
            active: 0,
            entered: false,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The deck only reacts to navigation once its section has been
    /// seen; `h`/`l` before that would animate cards nobody watched.
    pub fn dispatch(&mut self, event: &ControllerEvent, fx: &mut Animator) {
        match event {
            ControllerEvent::Trigger {
                event: TriggerEvent::Enter | TriggerEvent::EnterBack,
                ..
            } => self.entered = true,
            ControllerEvent::Command(cmd) if self.entered => match *cmd {
                NavCommand::NextCard => self.step(1, fx),
                NavCommand::PrevCard => self.step(-1, fx),
                NavCommand::GoToCard(index) => self.go_to(index, fx),
                NavCommand::ActivateDot(_) => {}
            },
            _ => {}
        }
    }

    fn step(&mut self, dir: i64, fx: &mut Animator) {
        if self.cards.len() < 2 {
            return;
        }
        let len = self.cards.len() as i64;
        let to = (self.active as i64 + dir).rem_euclid(len) as usize;
        self.transition(to, dir, fx);
    }

    fn go_to(&mut self, index: usize, fx: &mut Animator) {
        if index == self.active || index >= self.cards.len() {
            return;
        }
        let dir = if index > self.active { 1 } else { -1 };
        self.transition(index, dir, fx);
    }

    fn transition(&mut self, to: usize, dir: i64, fx: &mut Animator) {
        let dir = dir as f64;
        let out = self.cards[self.active];
        let inc = self.cards[to];
        let exit = Duration::from_millis(DECK_EXIT_MS);

        // Outgoing card slides toward the navigation direction and
        // picks up from wherever a previous transition left it.
        fx.animate(out, TweenSpec::new(Property::OffsetX, -dir * CARD_SLIDE_X, exit));
        fx.animate(out, TweenSpec::new(Property::RotationDeg, -dir * CARD_TILT_DEG, exit));
        fx.animate(out, TweenSpec::new(Property::Opacity, 0.0, exit));
        fx.animate(out, TweenSpec::new(Property::Scale, CARD_SCALE_OUT, exit));

        // Incoming card always launches from the opposite side.
        fx.animate(
            inc,
            TweenSpec::new(Property::OffsetX, 0.0, exit)
                .from(dir * CARD_SLIDE_X)
                .delay(DECK_ENTRANCE_DELAY),
        );
        fx.animate(
            inc,
            TweenSpec::new(Property::RotationDeg, 0.0, exit)
                .from(dir * CARD_TILT_DEG)
                .delay(DECK_ENTRANCE_DELAY),
        );
        fx.animate(
            inc,
            TweenSpec::new(Property::Opacity, 1.0, exit)
                .from(0.0)
                .delay(DECK_ENTRANCE_DELAY),
        );
        fx.animate(
            inc,
            TweenSpec::new(Property::Scale, 1.0, exit)
                .from(CARD_SCALE_OUT)
                .delay(DECK_ENTRANCE_DELAY),
        );

        self.active = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::trigger::TriggerHandle;

    fn seen_deck(n: usize, fx: &mut Animator) -> (CardDeckController, Vec<TargetId>) {
        let cards: Vec<TargetId> = (0..n).map(|_| fx.alloc_target()).collect();
        let mut deck = CardDeckController::new(cards.clone(), fx);
        deck.dispatch(
            &ControllerEvent::Trigger {
                handle: TriggerHandle::from_raw(1),
                event: TriggerEvent::Enter,
            },
            fx,
        );
        (deck, cards)
    }

    fn command(cmd: NavCommand) -> ControllerEvent {
        ControllerEvent::Command(cmd)
    }

    #[test]
    fn test_next_wraps_after_full_cycle() {
        let mut fx = Animator::new();
        let (mut deck, _) = seen_deck(6, &mut fx);
        for _ in 0..6 {
            deck.dispatch(&command(NavCommand::NextCard), &mut fx);
        }
        assert_eq!(deck.active_index(), 0);
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let mut fx = Animator::new();
        let (mut deck, _) = seen_deck(6, &mut fx);
        deck.dispatch(&command(NavCommand::PrevCard), &mut fx);
        assert_eq!(deck.active_index(), 5);
    }

    #[test]
    fn test_goto_current_and_out_of_range_are_noops() {
        let mut fx = Animator::new();
        let (mut deck, _) = seen_deck(6, &mut fx);
        fx.take_updates();

        deck.dispatch(&command(NavCommand::GoToCard(0)), &mut fx);
        deck.dispatch(&command(NavCommand::GoToCard(6)), &mut fx);
        deck.dispatch(&command(NavCommand::GoToCard(99)), &mut fx);

        assert_eq!(deck.active_index(), 0);
        assert!(!fx.needs_update());
        fx.tick(Duration::from_millis(16));
        assert!(fx.take_updates().is_empty());
    }

    #[test]
    fn test_goto_runs_exit_then_delayed_entrance() {
        let mut fx = Animator::new();
        let (mut deck, cards) = seen_deck(6, &mut fx);

        deck.dispatch(&command(NavCommand::GoToCard(2)), &mut fx);
        assert_eq!(deck.active_index(), 2);

        // Exit is underway before the entrance delay elapses.
        fx.tick(Duration::from_millis(16));
        assert!(fx.value(cards[0], Property::Opacity) < 1.0);
        assert_eq!(fx.value(cards[2], Property::Opacity), 0.0);

        // Past the delay the incoming card starts fading in.
        fx.tick(Duration::from_millis(184));
        assert!(fx.value(cards[2], Property::Opacity) > 0.0);
        assert!(fx.value(cards[2], Property::Opacity) < 1.0);
    }

    #[test]
    fn test_choreography_settles_at_rest_pose() {
        let mut fx = Animator::new();
        let (mut deck, cards) = seen_deck(6, &mut fx);

        deck.dispatch(&command(NavCommand::NextCard), &mut fx);
        fx.tick(Duration::from_millis(600));

        assert_eq!(fx.value(cards[0], Property::Opacity), 0.0);
        assert_eq!(fx.value(cards[1], Property::Opacity), 1.0);
        assert_eq!(fx.value(cards[1], Property::OffsetX), 0.0);
        assert_eq!(fx.value(cards[1], Property::Scale), 1.0);
        assert_eq!(fx.value(cards[1], Property::RotationDeg), 0.0);
    }

    #[test]
    fn test_rapid_navigation_hands_off_mid_flight() {
        let mut fx = Animator::new();
        let (mut deck, cards) = seen_deck(3, &mut fx);

        deck.dispatch(&command(NavCommand::NextCard), &mut fx);
        fx.tick(Duration::from_millis(100));
        let mid = fx.value(cards[0], Property::Opacity);
        assert!(mid > 0.0 && mid < 1.0);

        // Second navigation retargets card 1 mid-entrance and starts a
        // fresh exit for it; card 0's exit keeps running.
        deck.dispatch(&command(NavCommand::NextCard), &mut fx);
        assert_eq!(deck.active_index(), 2);
        fx.tick(Duration::from_millis(600));
        assert_eq!(fx.value(cards[0], Property::Opacity), 0.0);
        assert_eq!(fx.value(cards[1], Property::Opacity), 0.0);
        assert_eq!(fx.value(cards[2], Property::Opacity), 1.0);
    }

    #[test]
    fn test_commands_before_first_enter_are_ignored() {
        let mut fx = Animator::new();
        let cards: Vec<TargetId> = (0..3).map(|_| fx.alloc_target()).collect();
        let mut deck = CardDeckController::new(cards, &mut fx);
        deck.dispatch(&command(NavCommand::NextCard), &mut fx);
        assert_eq!(deck.active_index(), 0);
    }
}
