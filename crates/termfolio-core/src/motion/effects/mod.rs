//! L2 Organism Layer: Section effect controllers
//!
//! One controller per animated section behavior. Each controller is an
//! explicit state machine fed through a single `dispatch` entry point
//! with tick, trigger, and command events; controllers hold handles to
//! the targets they animate and never query anything by name. A failed
//! controller leaves its section rendered statically and cannot affect
//! siblings.

mod counter;
mod deck;
mod dots;
mod parallax;
mod particles;
mod reveal;
mod stacking;
mod typed;

pub use counter::CounterController;
pub use deck::{CardDeckController, DECK_ENTRANCE_DELAY, DECK_EXIT_MS};
pub use dots::TimelineDotsController;
pub use parallax::{ParallaxController, DRIFT_LINES, PARALLAX_DEPTHS};
pub use particles::{Particle, ParticleField};
pub use reveal::RevealController;
pub use stacking::{StackPhase, StackingController, StackingParams};
pub use typed::{TypedTextController, TypedPhase};

use std::time::Duration;

use super::trigger::{TriggerEvent, TriggerHandle};

/// Explicit user navigation routed to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    NextCard,
    PrevCard,
    GoToCard(usize),
    ActivateDot(usize),
}

/// Everything a controller can be driven by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerEvent {
    /// Frame time advanced.
    Tick(Duration),
    /// A registered region produced an edge or progress notification.
    Trigger {
        handle: TriggerHandle,
        event: TriggerEvent,
    },
    /// Explicit user interaction.
    Command(NavCommand),
}

/// Side effects a controller asks the page to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineRequest {
    /// Smooth-scroll the viewport to an absolute offset.
    ScrollTo(f64),
}
