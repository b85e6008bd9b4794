//! L3 Molecular Layer: Property animator
//!
//! Interpolates named numeric properties per target, driven either by
//! accumulated tick time over a duration or by region progress events.
//! Starting a tween on an occupied (target, property) pair cancels the
//! old one and continues from its current value, so retargeting never
//! produces a visible jump. All writes from one tick or one progress
//! application land in the same batch, which the renderer drains before
//! drawing a frame.

use std::collections::HashMap;
use std::time::Duration;

use super::easing::EasingType;
use super::layout::Scrub;
use super::progress::ProgressEvent;
use super::timing::{is_complete, lerp, progress};

/// Perspective divisor used to project simulated z-depth, matching a
/// CSS `perspective: 1000px` ancestor.
pub const PERSPECTIVE: f64 = 1000.0;

/// Animatable properties. Rotation is in degrees, opacity in [0, 1],
/// scale a unitless multiplier, depth a translation along the simulated
/// z-axis. `Fill` is a generic numeric channel for bar fills and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    OffsetX,
    OffsetY,
    Opacity,
    Scale,
    RotationDeg,
    Depth,
    Fill,
}

impl Property {
    /// Resting value when nothing has written the property yet.
    #[inline]
    fn default_value(&self) -> f64 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            _ => 0.0,
        }
    }
}

/// Opaque handle for one animatable target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(u64);

/// One property write, as delivered to the renderer in batch order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyUpdate {
    pub target: TargetId,
    pub property: Property,
    pub value: f64,
}

/// Scale multiplier for a target at simulated depth `z` (negative z is
/// away from the viewer).
#[inline]
pub fn project_depth(z: f64, perspective: f64) -> f64 {
    // Keep the divisor positive; depths at or beyond the eye clamp.
    let z = z.min(perspective - 1.0);
    perspective / (perspective - z)
}

/// A time-driven tween request.
#[derive(Debug, Clone, Copy)]
pub struct TweenSpec {
    pub property: Property,
    pub to: f64,
    /// Explicit start value; `None` hands off from the current value.
    pub from: Option<f64>,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: EasingType,
}

impl TweenSpec {
    pub fn new(property: Property, to: f64, duration: Duration) -> Self {
        Self {
            property,
            to,
            from: None,
            duration,
            delay: Duration::ZERO,
            easing: EasingType::Cubic,
        }
    }

    pub fn from(mut self, from: f64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Debug)]
struct Tween {
    target: TargetId,
    property: Property,
    /// Sampled when the tween leaves its delay, unless given explicitly.
    from: Option<f64>,
    to: f64,
    elapsed: Duration,
    delay: Duration,
    duration: Duration,
    easing: EasingType,
}

/// A progress-driven value mapping for one (target, property).
#[derive(Debug, Clone, Copy)]
pub struct BindSpec {
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub easing: EasingType,
    pub scrub: Scrub,
}

impl BindSpec {
    pub fn new(property: Property, from: f64, to: f64) -> Self {
        Self {
            property,
            from,
            to,
            easing: EasingType::Linear,
            scrub: Scrub::On,
        }
    }

    pub fn easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    pub fn scrub(mut self, scrub: Scrub) -> Self {
        self.scrub = scrub;
        self
    }
}

#[derive(Debug)]
struct Binding {
    from: f64,
    to: f64,
    easing: EasingType,
    scrub: Scrub,
    /// Progress last received from the trigger.
    target_t: f64,
    /// Progress currently presented (lags target_t under smooth scrub).
    current_t: f64,
}

/// The page's property animator.
#[derive(Debug, Default)]
pub struct Animator {
    values: HashMap<(TargetId, Property), f64>,
    tweens: Vec<Tween>,
    bindings: HashMap<(TargetId, Property), Binding>,
    pending: Vec<PropertyUpdate>,
    next_target: u64,
    /// Reduced motion: tweens complete immediately.
    instant: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_target(&mut self) -> TargetId {
        let id = TargetId(self.next_target);
        self.next_target += 1;
        id
    }

    pub fn set_instant(&mut self, instant: bool) {
        self.instant = instant;
    }

    /// Current value of a property, or its resting default.
    pub fn value(&self, target: TargetId, property: Property) -> f64 {
        self.values
            .get(&(target, property))
            .copied()
            .unwrap_or_else(|| property.default_value())
    }

    /// Write a value immediately. Joins the current batch and cancels any
    /// tween on the same pair.
    pub fn set(&mut self, target: TargetId, property: Property, value: f64) {
        self.tweens
            .retain(|t| !(t.target == target && t.property == property));
        self.write(target, property, value);
    }

    /// Start a time-driven tween. An in-flight tween on the same pair is
    /// cancelled and the new one starts from the current value.
    pub fn animate(&mut self, target: TargetId, spec: TweenSpec) {
        self.tweens
            .retain(|t| !(t.target == target && t.property == spec.property));

        if self.instant || spec.duration.is_zero() {
            self.write(target, spec.property, spec.to);
            return;
        }

        self.tweens.push(Tween {
            target,
            property: spec.property,
            from: spec.from,
            to: spec.to,
            elapsed: Duration::ZERO,
            delay: spec.delay,
            duration: spec.duration,
            easing: spec.easing,
        });
    }

    /// Attach a progress-driven mapping. Replaces any previous binding on
    /// the same pair.
    pub fn bind(&mut self, target: TargetId, spec: BindSpec) {
        self.bindings.insert(
            (target, spec.property),
            Binding {
                from: spec.from,
                to: spec.to,
                easing: spec.easing,
                scrub: spec.scrub,
                target_t: 0.0,
                current_t: 0.0,
            },
        );
    }

    /// Feed a progress event to every binding of the given targets. All
    /// resulting writes share one batch.
    pub fn apply_progress(&mut self, targets: &[TargetId], event: ProgressEvent) {
        let mut writes = Vec::new();
        for (&(target, property), binding) in self.bindings.iter_mut() {
            if !targets.contains(&target) {
                continue;
            }
            binding.target_t = event.progress;
            match binding.scrub {
                Scrub::Smooth(_) => {
                    // Lagged bindings move during tick instead.
                }
                _ => {
                    binding.current_t = event.progress;
                    let eased = binding.easing.apply(binding.current_t);
                    writes.push((target, property, lerp(binding.from, binding.to, eased)));
                }
            }
        }
        for (target, property, value) in writes {
            self.write(target, property, value);
        }
    }

    /// Advance time-driven tweens and lagged bindings by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        let mut writes = Vec::new();

        for tween in self.tweens.iter_mut() {
            tween.elapsed = tween.elapsed.saturating_add(dt);
            if tween.elapsed < tween.delay {
                continue;
            }
            let from = match tween.from {
                Some(v) => v,
                None => {
                    // Handoff point: sample when the tween first runs.
                    let v = self
                        .values
                        .get(&(tween.target, tween.property))
                        .copied()
                        .unwrap_or_else(|| tween.property.default_value());
                    tween.from = Some(v);
                    v
                }
            };
            let active = tween.elapsed - tween.delay;
            let t = progress(active, tween.duration);
            let eased = tween.easing.apply(t);
            writes.push((tween.target, tween.property, lerp(from, tween.to, eased)));
        }
        self.tweens
            .retain(|t| !is_complete(t.elapsed, t.delay + t.duration));

        for (&(target, property), binding) in self.bindings.iter_mut() {
            if let Scrub::Smooth(ms) = binding.scrub {
                let gap = binding.target_t - binding.current_t;
                if gap == 0.0 {
                    continue;
                }
                if gap.abs() < 1e-4 {
                    // Close enough: snap and write the final value.
                    binding.current_t = binding.target_t;
                } else {
                    let tau = Duration::from_millis(ms.max(1)).as_secs_f64() / 3.0;
                    let alpha = 1.0 - (-dt.as_secs_f64() / tau).exp();
                    binding.current_t += gap * alpha;
                }
                let eased = binding.easing.apply(binding.current_t);
                writes.push((target, property, lerp(binding.from, binding.to, eased)));
            }
        }

        for (target, property, value) in writes {
            self.write(target, property, value);
        }
    }

    /// Drain the batch accumulated since the last call. The renderer
    /// applies the whole batch before drawing, so properties written in
    /// the same tick can never tear apart.
    pub fn take_updates(&mut self) -> Vec<PropertyUpdate> {
        std::mem::take(&mut self.pending)
    }

    /// Cancel every tween and binding for one target. Its current values
    /// stay where they are.
    pub fn cancel_target(&mut self, target: TargetId) {
        self.tweens.retain(|t| t.target != target);
        self.bindings.retain(|(t, _), _| *t != target);
    }

    /// Cancel everything in flight. Values freeze at their last batch.
    pub fn cancel_all(&mut self) {
        self.tweens.clear();
        self.bindings.clear();
        self.pending.clear();
    }

    pub fn is_animating(&self, target: TargetId) -> bool {
        self.tweens.iter().any(|t| t.target == target)
    }

    /// True while any tween or lagged binding still has work to do.
    pub fn needs_update(&self) -> bool {
        !self.tweens.is_empty()
            || self
                .bindings
                .values()
                .any(|b| matches!(b.scrub, Scrub::Smooth(_)) && b.target_t != b.current_t)
    }

    fn write(&mut self, target: TargetId, property: Property, value: f64) {
        self.values.insert((target, property), value);
        self.pending.push(PropertyUpdate {
            target,
            property,
            value,
        });
    }
}
