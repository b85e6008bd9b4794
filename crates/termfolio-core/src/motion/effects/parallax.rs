//! Parallax background layers and horizontal drift lines, both pure
//! functions of section progress. Layers shift vertically at a fraction
//! of scroll speed; drift lines slide sideways in opposite directions
//! with a lagged scrub.

use crate::motion::animate::{Animator, BindSpec, Property, TargetId};
use crate::motion::layout::Scrub;
use crate::motion::trigger::TriggerEvent;

use super::ControllerEvent;

/// Depth factor per background layer; offset = viewport × depth × −0.5.
pub const PARALLAX_DEPTHS: [f64; 3] = [0.1, 0.15, 0.08];

/// (direction, speed in columns across the full span) per drift line.
pub const DRIFT_LINES: [(f64, f64); 2] = [(1.0, 50.0), (-1.0, 80.0)];

/// Drift lines catch up to scroll over roughly a second.
const DRIFT_SCRUB_MS: u64 = 1000;

/// Continuous scroll-bound motion for one section's decorative layers.
#[derive(Debug)]
pub struct ParallaxController {
    layers: Vec<TargetId>,
    lines: Vec<TargetId>,
    viewport_rows: f64,
}

impl ParallaxController {
    /// Binds each layer target to its depth-scaled vertical travel and
    /// each line target to its signed horizontal travel.
    pub fn new(
        layers: Vec<TargetId>,
        lines: Vec<TargetId>,
        viewport_rows: f64,
        fx: &mut Animator,
    ) -> Self {
        let ctrl = Self {
            layers,
            lines,
            viewport_rows,
        };
        ctrl.rebind(fx);
        ctrl
    }

    /// Layer travel scales with the viewport, so bindings are rebuilt
    /// whenever the terminal is resized.
    pub fn set_viewport_rows(&mut self, viewport_rows: f64, fx: &mut Animator) {
        if self.viewport_rows != viewport_rows {
            self.viewport_rows = viewport_rows;
            self.rebind(fx);
        }
    }

    fn rebind(&self, fx: &mut Animator) {
        for (i, &target) in self.layers.iter().enumerate() {
            let depth = PARALLAX_DEPTHS[i % PARALLAX_DEPTHS.len()];
            let travel = self.viewport_rows * depth * -0.5;
            fx.bind(target, BindSpec::new(Property::OffsetY, 0.0, travel));
        }
        for (i, &target) in self.lines.iter().enumerate() {
            let (direction, speed) = DRIFT_LINES[i % DRIFT_LINES.len()];
            fx.bind(
                target,
                BindSpec::new(Property::OffsetX, 0.0, direction * speed)
                    .scrub(Scrub::Smooth(DRIFT_SCRUB_MS)),
            );
        }
    }

    pub fn dispatch(&mut self, event: &ControllerEvent, fx: &mut Animator) {
        let ControllerEvent::Trigger {
            event: TriggerEvent::Update(progress),
            ..
        } = event
        else {
            return;
        };
        let targets: Vec<TargetId> = self
            .layers
            .iter()
            .chain(self.lines.iter())
            .copied()
            .collect();
        fx.apply_progress(&targets, *progress);
    }
}
