//! Scroll-driven motion engine for the portfolio page
//!
//! Everything that moves on the page flows through this module: scroll
//! input is smoothed into a presented position, published as per-region
//! progress, and turned into batched property updates the renderer
//! applies before drawing.
//!
//! # Architecture (atomic layering)
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing curves
//! - `timing` - Progress and interpolation utilities
//!
//! ## L3 Molecular Layer
//! - `layout` - Virtual page geometry and region resolution
//! - `progress` - Scroll feed and per-region progress
//! - `animate` - Property animator (tweens and scroll bindings)
//! - `timeline` - Offset-scheduled tween sequences
//! - `smoother` - Smooth-scroll coordinator
//!
//! ## L2 Organism Layer
//! - `trigger` - Region registry with enter/leave/update events
//! - `effects` - Section effect controllers
//!
//! ## L1 Organ Layer
//! - `lifecycle` - Engine mount/teardown and the per-frame pipeline
//!
//! # Usage
//!
//! ```ignore
//! use termfolio_core::motion::{EngineOptions, MotionEngine};
//!
//! let mut engine = MotionEngine::new(EngineOptions::default());
//! engine.mount(plan);
//!
//! // In the main loop: feed input, advance one frame, apply the batch.
//! engine.scroll_by(3.0);
//! let updates = engine.tick(frame_dt);
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animate;
pub mod layout;
pub mod progress;
pub mod smoother;
pub mod timeline;

// L2 Organism Layer
pub mod effects;
pub mod trigger;

// L1 Organ Layer
pub mod lifecycle;

// Re-exports for convenient access
pub use animate::{project_depth, Animator, Property, PropertyUpdate, TargetId, PERSPECTIVE};
pub use easing::EasingType;
pub use effects::{NavCommand, StackPhase, TypedPhase};
pub use layout::{PageLayout, SectionId};
pub use lifecycle::{EffectTargets, EngineOptions, MotionEngine, PagePlan, SectionPlan};
pub use progress::Direction;
pub use trigger::{TriggerEvent, TriggerHandle};
