//! L1 Organ Layer: Engine lifecycle
//!
//! Wires the scroll feed, trigger registry, animator and section
//! controllers together. Mounting follows dependency order (scroll
//! source, regions, controllers, injected chrome) and teardown runs
//! strictly in reverse. Both are idempotent and survive partial mounts:
//! a controller whose region cannot be registered is skipped with a
//! warning while the rest of the page keeps animating.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use super::animate::{Animator, Property, PropertyUpdate, TargetId, TweenSpec};
use super::effects::{
    CardDeckController, ControllerEvent, CounterController, EngineRequest, NavCommand,
    ParallaxController, ParticleField, RevealController, StackingController, StackingParams,
    TimelineDotsController, TypedPhase, TypedTextController,
};
use super::layout::{Anchor, AnchorPoint, PageLayout, RegionEnd, ScrollRegion, SectionId};
use super::progress::{ListenerToken, ScrollFeed};
use super::smoother::SmoothScroll;
use super::timeline::EffectTimeline;
use super::trigger::{Interest, TriggerEvent, TriggerHandle, TriggerRegistry};

/// Layout is re-resolved once shortly after mount, when late content
/// measurement has settled.
const REFRESH_AFTER: Duration = Duration::from_millis(500);

/// Reveal regions begin where the element top crosses 85% of the
/// viewport height.
const REVEAL_START: f64 = 0.85;

const INTRO_MS: u64 = 600;
const INTRO_RISE: f64 = 10.0;

/// Tunables the engine takes from user configuration.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub smooth_enabled: bool,
    pub smooth_time_ms: u64,
    pub reduced_motion: bool,
    pub particle_seed: u64,
    pub particle_count: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            smooth_enabled: true,
            smooth_time_ms: 800,
            reduced_motion: false,
            particle_seed: 1977,
            particle_count: 48,
        }
    }
}

/// One section's measured footprint.
#[derive(Debug, Clone, Copy)]
pub struct SectionPlan {
    pub id: SectionId,
    pub rows: u16,
    pub pin_rows: u16,
}

impl SectionPlan {
    pub fn new(id: SectionId, rows: u16) -> Self {
        Self {
            id,
            rows,
            pin_rows: 0,
        }
    }

    pub fn pinned(id: SectionId, rows: u16, pin_rows: u16) -> Self {
        Self { id, rows, pin_rows }
    }
}

/// The measured page the engine animates: section footprints plus the
/// content counts each effect needs.
#[derive(Debug, Clone)]
pub struct PagePlan {
    pub viewport_rows: u16,
    pub sections: Vec<SectionPlan>,
    pub subtitle_chars: usize,
    /// Final values for the skill counters, in display order.
    pub counter_values: Vec<f64>,
    pub card_count: usize,
    pub stack_items: usize,
    pub education_entries: usize,
}

/// Animator targets the renderer reads back, grouped by effect.
#[derive(Debug, Clone, Default)]
pub struct EffectTargets {
    pub hero: Option<TargetId>,
    pub reveals: Vec<(SectionId, TargetId)>,
    pub parallax_layers: Vec<TargetId>,
    pub drift_lines: Vec<TargetId>,
    pub counters: Vec<TargetId>,
    pub cards: Vec<TargetId>,
    pub stack_items: Vec<TargetId>,
    pub dots: Vec<TargetId>,
}

/// Which controller consumes a handle's trigger events.
#[derive(Debug, Clone, Copy)]
enum Route {
    Typed,
    Reveal,
    Parallax,
    Counter,
    Deck,
    Stacking,
    Dots,
}

/// The page's animation engine. Owns every moving part and exposes the
/// per-frame batch of property updates to the renderer.
#[derive(Debug)]
pub struct MotionEngine {
    options: EngineOptions,
    layout: PageLayout,
    revision: u64,
    feed: ScrollFeed,
    engine_token: Option<ListenerToken>,
    registry: TriggerRegistry,
    fx: Animator,
    smoother: SmoothScroll,
    routes: HashMap<TriggerHandle, Route>,
    targets: EffectTargets,
    typed: Option<TypedTextController>,
    reveal: Option<RevealController>,
    parallax: Option<ParallaxController>,
    counters: Option<CounterController>,
    deck: Option<CardDeckController>,
    stacking: Option<StackingController>,
    dots: Option<TimelineDotsController>,
    particles: Option<ParticleField>,
    intro: Option<EffectTimeline>,
    progress_bar: Option<TargetId>,
    refresh_deadline: Option<Duration>,
    plan: Option<PagePlan>,
    mounted: bool,
}

impl MotionEngine {
    pub fn new(options: EngineOptions) -> Self {
        let smoother = SmoothScroll::new(
            Duration::from_millis(options.smooth_time_ms),
            options.smooth_enabled && !options.reduced_motion,
        );
        Self {
            options,
            layout: PageLayout::default(),
            revision: 0,
            feed: ScrollFeed::new(),
            engine_token: None,
            registry: TriggerRegistry::new(),
            fx: Animator::new(),
            smoother,
            routes: HashMap::new(),
            targets: EffectTargets::default(),
            typed: None,
            reveal: None,
            parallax: None,
            counters: None,
            deck: None,
            stacking: None,
            dots: None,
            particles: None,
            intro: None,
            progress_bar: None,
            refresh_deadline: None,
            plan: None,
            mounted: false,
        }
    }

    /// Wire the whole page up. Mounting twice without an unmount in
    /// between is a no-op, so injected chrome can never double up.
    pub fn mount(&mut self, plan: PagePlan) {
        if self.mounted {
            debug!("mount requested while mounted; ignoring");
            return;
        }

        self.layout = build_layout(&plan);
        self.revision += 1;
        self.smoother.set_max_scroll(self.layout.max_scroll());
        self.engine_token = Some(self.feed.attach());

        self.mount_typed(&plan);
        self.mount_reveals(&plan);
        self.mount_parallax();
        self.mount_counters(&plan);
        self.mount_deck(&plan);
        self.mount_stacking(&plan);
        self.mount_dots(&plan);
        self.particles = Some(ParticleField::new(
            self.options.particle_count,
            self.options.particle_seed,
        ));
        self.mount_intro();

        // Injected page chrome, guarded against duplicates.
        if self.progress_bar.is_none() {
            self.progress_bar = Some(self.fx.alloc_target());
        }

        self.refresh_deadline = Some(REFRESH_AFTER);
        self.plan = Some(plan);
        self.mounted = true;
        debug!(
            triggers = self.registry.len(),
            listeners = self.feed.listener_count(),
            "engine mounted"
        );
    }

    /// Tear everything down in reverse mount order: in-flight
    /// animations, then trigger regions, then injected chrome, then the
    /// engine's own scroll subscription. Safe to call repeatedly and
    /// after partial mounts.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }

        self.refresh_deadline = None;
        self.intro = None;
        self.fx.cancel_all();

        let handles: Vec<TriggerHandle> = self.routes.keys().copied().collect();
        for handle in handles {
            self.registry.unregister(&mut self.feed, handle);
        }
        self.routes.clear();

        self.typed = None;
        self.reveal = None;
        self.parallax = None;
        self.counters = None;
        self.deck = None;
        self.stacking = None;
        self.dots = None;
        self.particles = None;

        self.progress_bar = None;

        if let Some(token) = self.engine_token.take() {
            self.feed.detach(token);
        }
        self.smoother.cancel();
        self.targets = EffectTargets::default();
        self.plan = None;
        self.mounted = false;
        debug!(
            listeners = self.feed.listener_count(),
            "engine torn down"
        );
    }

    /// Advance the whole engine by one frame and drain the resulting
    /// property batch. Unmounted engines produce nothing.
    pub fn tick(&mut self, dt: Duration) -> Vec<PropertyUpdate> {
        if !self.mounted {
            return Vec::new();
        }

        if let Some(left) = self.refresh_deadline {
            if dt >= left {
                self.refresh_deadline = None;
                self.registry.refresh_all(&self.layout, self.revision);
                debug!("deferred layout refresh completed");
            } else {
                self.refresh_deadline = Some(left - dt);
            }
        }

        let pos = self.smoother.tick(dt);
        if let Some(direction) = self.feed.publish(pos) {
            let events = self
                .registry
                .evaluate(&self.layout, self.revision, pos, direction);
            for (handle, event) in events {
                self.route(handle, event);
            }
        }

        if let Some(typed) = self.typed.as_mut() {
            typed.dispatch(&ControllerEvent::Tick(dt));
        }
        if !self.options.reduced_motion {
            if let Some(field) = self.particles.as_mut() {
                field.tick(dt);
            }
        }
        if let Some(intro) = self.intro.as_mut() {
            intro.tick(dt, &mut self.fx);
            if intro.is_finished() {
                self.intro = None;
            }
        }

        self.fx.tick(dt);
        self.write_page_progress();
        self.fx.take_updates()
    }

    /// Hand a navigation command to the controller that owns it.
    pub fn command(&mut self, cmd: NavCommand) {
        if !self.mounted {
            return;
        }
        let ev = ControllerEvent::Command(cmd);
        match cmd {
            NavCommand::NextCard | NavCommand::PrevCard | NavCommand::GoToCard(_) => {
                if let Some(deck) = self.deck.as_mut() {
                    deck.dispatch(&ev, &mut self.fx);
                }
            }
            NavCommand::ActivateDot(_) => {
                if let Some(dots) = self.dots.as_mut() {
                    if let Some(EngineRequest::ScrollTo(row)) = dots.dispatch(&ev, &mut self.fx) {
                        self.smoother.scroll_to(row);
                    }
                }
            }
        }
    }

    pub fn scroll_by(&mut self, delta: f64) {
        if self.mounted {
            self.smoother.scroll_by(delta);
        }
    }

    pub fn scroll_to(&mut self, row: f64) {
        if self.mounted {
            self.smoother.scroll_to(row);
        }
    }

    /// Teleport without smoothing; used for `gg`/`G` under reduced
    /// motion and for tests.
    pub fn jump_to(&mut self, row: f64) {
        if self.mounted {
            self.smoother.jump_to(row);
        }
    }

    /// Smooth-scroll so the section's top sits at the viewport top.
    pub fn scroll_to_section(&mut self, id: SectionId) {
        let Some(extent) = self.layout.section(id) else {
            return;
        };
        self.scroll_to(extent.top);
    }

    /// Jump to the next (+1) or previous (−1) section relative to the
    /// current scroll target.
    pub fn step_section(&mut self, dir: i64) {
        let sections = self.layout.sections();
        if sections.is_empty() {
            return;
        }
        let here = self
            .layout
            .section_at(self.smoother.target())
            .unwrap_or(sections[0].id);
        let idx = sections.iter().position(|s| s.id == here).unwrap_or(0);
        let next = (idx as i64 + dir).clamp(0, sections.len() as i64 - 1) as usize;
        self.scroll_to(sections[next].top);
    }

    /// Rebuild the layout for a new terminal size and re-resolve every
    /// registered region against it.
    pub fn resize(&mut self, viewport_rows: u16) {
        if !self.mounted {
            return;
        }
        let Some(plan) = self.plan.as_mut() else {
            return;
        };
        plan.viewport_rows = viewport_rows;
        let plan = plan.clone();

        self.layout = build_layout(&plan);
        self.revision += 1;
        self.smoother.set_max_scroll(self.layout.max_scroll());
        self.registry.refresh_all(&self.layout, self.revision);

        if let Some(parallax) = self.parallax.as_mut() {
            parallax.set_viewport_rows(self.layout.viewport_rows(), &mut self.fx);
        }
        if let Some(dots) = self.dots.as_mut() {
            dots.update_centers(entry_centers(&self.layout, plan.education_entries));
        }
        debug!(viewport_rows, revision = self.revision, "layout rebuilt");
    }

    /// Swap in a fully re-measured plan, e.g. after a width change has
    /// re-wrapped section content. Controller state is preserved, so
    /// one-shot effects do not replay.
    pub fn remeasure(&mut self, plan: PagePlan) {
        if !self.mounted {
            return;
        }
        let education_entries = plan.education_entries;
        self.layout = build_layout(&plan);
        self.plan = Some(plan);
        self.revision += 1;
        self.smoother.set_max_scroll(self.layout.max_scroll());
        self.registry.refresh_all(&self.layout, self.revision);

        if let Some(parallax) = self.parallax.as_mut() {
            parallax.set_viewport_rows(self.layout.viewport_rows(), &mut self.fx);
        }
        if let Some(dots) = self.dots.as_mut() {
            dots.update_centers(entry_centers(&self.layout, education_entries));
        }
        debug!(revision = self.revision, "layout re-measured");
    }

    /// Re-resolve all regions in place, keeping the current revision.
    pub fn refresh(&mut self) {
        if self.mounted {
            self.registry.refresh_all(&self.layout, self.revision);
        }
    }

    pub fn set_reduced_motion(&mut self, on: bool) {
        self.options.reduced_motion = on;
        self.smoother
            .set_enabled(self.options.smooth_enabled && !on);
    }

    pub fn toggle_reduced_motion(&mut self) -> bool {
        let next = !self.options.reduced_motion;
        self.set_reduced_motion(next);
        next
    }

    pub fn reduced_motion(&self) -> bool {
        self.options.reduced_motion
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn pos(&self) -> f64 {
        self.smoother.pos()
    }

    pub fn scroll_target(&self) -> f64 {
        self.smoother.target()
    }

    /// Overall page progress in [0, 1] at the presented position.
    pub fn page_progress(&self) -> f64 {
        let max = self.smoother.max_scroll();
        if max > 0.0 {
            self.smoother.pos() / max
        } else {
            0.0
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn targets(&self) -> &EffectTargets {
        &self.targets
    }

    pub fn value(&self, target: TargetId, property: Property) -> f64 {
        self.fx.value(target, property)
    }

    pub fn typed(&self) -> Option<&TypedTextController> {
        self.typed.as_ref()
    }

    pub fn deck(&self) -> Option<&CardDeckController> {
        self.deck.as_ref()
    }

    pub fn stacking(&self) -> Option<&StackingController> {
        self.stacking.as_ref()
    }

    pub fn dots(&self) -> Option<&TimelineDotsController> {
        self.dots.as_ref()
    }

    pub fn particles(&self) -> Option<&ParticleField> {
        self.particles.as_ref()
    }

    pub fn listener_count(&self) -> usize {
        self.feed.listener_count()
    }

    pub fn trigger_count(&self) -> usize {
        self.registry.len()
    }

    pub fn current_section(&self) -> Option<SectionId> {
        self.layout.section_at(self.smoother.pos())
    }

    /// True while another frame would visibly change something.
    pub fn needs_update(&self) -> bool {
        if !self.mounted {
            return false;
        }
        self.smoother.needs_update()
            || self.fx.needs_update()
            || self.intro.is_some()
            || self.refresh_deadline.is_some()
            || self
                .typed
                .as_ref()
                .is_some_and(|t| t.phase() == TypedPhase::Playing)
            || (!self.options.reduced_motion && self.hero_visible())
    }

    fn hero_visible(&self) -> bool {
        self.layout
            .section(SectionId::Hero)
            .is_some_and(|h| self.smoother.pos() < h.top + h.height)
    }

    fn route(&mut self, handle: TriggerHandle, event: TriggerEvent) {
        let Some(&route) = self.routes.get(&handle) else {
            debug!(?handle, "event for unrouted trigger dropped");
            return;
        };
        let ev = ControllerEvent::Trigger { handle, event };
        match route {
            Route::Typed => {
                if let Some(c) = self.typed.as_mut() {
                    c.dispatch(&ev);
                }
            }
            Route::Reveal => {
                if let Some(c) = self.reveal.as_mut() {
                    c.dispatch(&ev, &mut self.fx);
                }
            }
            Route::Parallax => {
                if let Some(c) = self.parallax.as_mut() {
                    c.dispatch(&ev, &mut self.fx);
                }
            }
            Route::Counter => {
                if let Some(c) = self.counters.as_mut() {
                    c.dispatch(&ev, &mut self.fx);
                }
            }
            Route::Deck => {
                if let Some(c) = self.deck.as_mut() {
                    c.dispatch(&ev, &mut self.fx);
                }
            }
            Route::Stacking => {
                if let Some(c) = self.stacking.as_mut() {
                    c.dispatch(&ev, &mut self.fx);
                }
            }
            Route::Dots => {
                if let Some(c) = self.dots.as_mut() {
                    if let Some(EngineRequest::ScrollTo(row)) = c.dispatch(&ev, &mut self.fx) {
                        self.smoother.scroll_to(row);
                    }
                }
            }
        }
    }

    fn register(
        &mut self,
        region: ScrollRegion,
        interest: Interest,
        route: Route,
    ) -> Option<TriggerHandle> {
        match self
            .registry
            .register(&mut self.feed, &self.layout, self.revision, region, interest)
        {
            Ok(handle) => {
                self.routes.insert(handle, route);
                Some(handle)
            }
            Err(err) => {
                warn!("{err}; {route:?} effect disabled");
                None
            }
        }
    }

    fn mount_typed(&mut self, plan: &PagePlan) {
        let region = ScrollRegion::new(
            SectionId::Hero,
            Anchor::TOP_BOTTOM,
            RegionEnd::Anchor(Anchor::BOTTOM_TOP),
        );
        if self.register(region, Interest::edges(), Route::Typed).is_some() {
            self.typed = Some(TypedTextController::new(plan.subtitle_chars));
        }
    }

    fn mount_reveals(&mut self, plan: &PagePlan) {
        let mut reveal = RevealController::new();
        for section in &plan.sections {
            if section.id == SectionId::Hero {
                continue;
            }
            let region = ScrollRegion::new(
                section.id,
                Anchor::new(AnchorPoint::Top, AnchorPoint::Fraction(REVEAL_START)),
                RegionEnd::Anchor(Anchor::BOTTOM_TOP),
            );
            if let Some(handle) = self.register(region, Interest::edges(), Route::Reveal) {
                let target = self.fx.alloc_target();
                reveal.watch(handle, target, &mut self.fx);
                self.targets.reveals.push((section.id, target));
            }
        }
        self.reveal = Some(reveal);
    }

    fn mount_parallax(&mut self) {
        let region = ScrollRegion::new(
            SectionId::About,
            Anchor::TOP_BOTTOM,
            RegionEnd::Anchor(Anchor::BOTTOM_TOP),
        );
        if self
            .register(region, Interest::updates(), Route::Parallax)
            .is_none()
        {
            return;
        }
        let layers: Vec<TargetId> = (0..3).map(|_| self.fx.alloc_target()).collect();
        let lines: Vec<TargetId> = (0..2).map(|_| self.fx.alloc_target()).collect();
        self.targets.parallax_layers = layers.clone();
        self.targets.drift_lines = lines.clone();
        self.parallax = Some(ParallaxController::new(
            layers,
            lines,
            self.layout.viewport_rows(),
            &mut self.fx,
        ));
    }

    fn mount_counters(&mut self, plan: &PagePlan) {
        let region = ScrollRegion::new(
            SectionId::Skills,
            Anchor::TOP_BOTTOM,
            RegionEnd::Anchor(Anchor::BOTTOM_TOP),
        );
        if self
            .register(region, Interest::edges(), Route::Counter)
            .is_none()
        {
            return;
        }
        let pairs: Vec<(TargetId, f64)> = plan
            .counter_values
            .iter()
            .map(|&v| (self.fx.alloc_target(), v))
            .collect();
        self.targets.counters = pairs.iter().map(|&(t, _)| t).collect();
        self.counters = Some(CounterController::new(pairs, &mut self.fx));
    }

    fn mount_deck(&mut self, plan: &PagePlan) {
        let region = ScrollRegion::new(
            SectionId::Projects,
            Anchor::TOP_BOTTOM,
            RegionEnd::Anchor(Anchor::BOTTOM_TOP),
        );
        if self.register(region, Interest::edges(), Route::Deck).is_none() {
            return;
        }
        let cards: Vec<TargetId> = (0..plan.card_count).map(|_| self.fx.alloc_target()).collect();
        self.targets.cards = cards.clone();
        self.deck = Some(CardDeckController::new(cards, &mut self.fx));
    }

    fn mount_stacking(&mut self, plan: &PagePlan) {
        let Some(extent) = self.layout.section(SectionId::Experience) else {
            warn!(
                "{}; Stacking effect disabled",
                crate::error::Error::InvalidTrigger {
                    section: SectionId::Experience
                }
            );
            return;
        };
        // Progress runs across the pin span, or the content height for
        // an unpinned layout.
        let span = if extent.pin_span > 0.0 {
            extent.pin_span
        } else {
            extent.height
        };
        let region = ScrollRegion::new(
            SectionId::Experience,
            Anchor::TOP_TOP,
            RegionEnd::AfterStart(span),
        );
        if self
            .register(region, Interest::all(), Route::Stacking)
            .is_none()
        {
            return;
        }
        let items: Vec<TargetId> = (0..plan.stack_items).map(|_| self.fx.alloc_target()).collect();
        self.targets.stack_items = items.clone();
        let params = StackingParams {
            steps: plan.stack_items.max(1),
            ..StackingParams::default()
        };
        self.stacking = Some(StackingController::new(items, params, &mut self.fx));
    }

    fn mount_dots(&mut self, plan: &PagePlan) {
        let entries = plan.education_entries;
        if entries == 0 {
            return;
        }
        let mut pairs = Vec::with_capacity(entries);
        for i in 0..entries {
            let lo = i as f64 / entries as f64;
            let hi = (i + 1) as f64 / entries as f64;
            let region = ScrollRegion::new(
                SectionId::Education,
                Anchor::new(AnchorPoint::Fraction(lo), AnchorPoint::Center),
                RegionEnd::Anchor(Anchor::new(
                    AnchorPoint::Fraction(hi),
                    AnchorPoint::Center,
                )),
            );
            let Some(handle) = self.register(region, Interest::edges(), Route::Dots) else {
                return;
            };
            pairs.push((handle, self.fx.alloc_target()));
        }
        self.targets.dots = pairs.iter().map(|&(_, t)| t).collect();
        let mut dots = TimelineDotsController::new(pairs, &mut self.fx);
        dots.update_centers(entry_centers(&self.layout, entries));
        self.dots = Some(dots);
    }

    fn mount_intro(&mut self) {
        let hero = self.fx.alloc_target();
        self.targets.hero = Some(hero);
        if self.options.reduced_motion {
            return;
        }
        let rise = Duration::from_millis(INTRO_MS);
        self.intro = Some(
            EffectTimeline::new()
                .entry(
                    Duration::ZERO,
                    hero,
                    TweenSpec::new(Property::Opacity, 1.0, rise).from(0.0),
                )
                .entry(
                    Duration::ZERO,
                    hero,
                    TweenSpec::new(Property::OffsetY, 0.0, rise).from(INTRO_RISE),
                )
                .play(),
        );
    }

    fn write_page_progress(&mut self) {
        let Some(bar) = self.progress_bar else {
            return;
        };
        let progress = self.page_progress();
        if (self.fx.value(bar, Property::Fill) - progress).abs() > 1e-9 {
            self.fx.set(bar, Property::Fill, progress);
        }
    }

    pub fn progress_bar(&self) -> Option<TargetId> {
        self.progress_bar
    }
}

fn build_layout(plan: &PagePlan) -> PageLayout {
    let mut builder = PageLayout::builder(plan.viewport_rows);
    for section in &plan.sections {
        builder = if section.pin_rows > 0 {
            builder.pinned_section(section.id, section.rows, section.pin_rows)
        } else {
            builder.section(section.id, section.rows)
        };
    }
    builder.build()
}

/// Scroll positions centering each education entry, assuming entries
/// split the section evenly.
fn entry_centers(layout: &PageLayout, entries: usize) -> Vec<f64> {
    let Some(extent) = layout.section(SectionId::Education) else {
        return Vec::new();
    };
    (0..entries)
        .map(|i| {
            let row = extent.top + (i as f64 + 0.5) * extent.height / entries as f64;
            layout.center_row(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> PagePlan {
        PagePlan {
            viewport_rows: 40,
            sections: vec![
                SectionPlan::new(SectionId::Hero, 40),
                SectionPlan::new(SectionId::About, 60),
                SectionPlan::new(SectionId::Skills, 50),
                SectionPlan::new(SectionId::Projects, 60),
                SectionPlan::pinned(SectionId::Experience, 40, 120),
                SectionPlan::new(SectionId::Education, 60),
                SectionPlan::new(SectionId::Footer, 20),
            ],
            subtitle_chars: 10,
            counter_values: vec![20.0, 15.0, 5.0],
            card_count: 6,
            stack_items: 3,
            education_entries: 2,
        }
    }

    fn mounted_engine() -> MotionEngine {
        let mut engine = MotionEngine::new(EngineOptions::default());
        engine.mount(plan());
        engine
    }

    #[test]
    fn test_mount_attaches_and_unmount_releases_listeners() {
        let mut engine = mounted_engine();
        assert!(engine.listener_count() > 0);
        assert!(engine.trigger_count() > 0);

        engine.unmount();
        assert_eq!(engine.listener_count(), 0);
        assert_eq!(engine.trigger_count(), 0);

        // Second teardown is a no-op.
        engine.unmount();
        assert_eq!(engine.listener_count(), 0);
    }

    #[test]
    fn test_unmounted_engine_emits_nothing() {
        let mut engine = mounted_engine();
        engine.scroll_by(30.0);
        assert!(!engine.tick(Duration::from_millis(16)).is_empty());

        engine.unmount();
        engine.scroll_by(30.0);
        for _ in 0..20 {
            assert!(engine.tick(Duration::from_millis(16)).is_empty());
        }
        assert!(!engine.needs_update());
    }

    #[test]
    fn test_double_mount_is_guarded() {
        let mut engine = mounted_engine();
        let bar = engine.progress_bar();
        let triggers = engine.trigger_count();
        let listeners = engine.listener_count();

        engine.mount(plan());
        assert_eq!(engine.progress_bar(), bar);
        assert_eq!(engine.trigger_count(), triggers);
        assert_eq!(engine.listener_count(), listeners);
    }

    #[test]
    fn test_page_progress_tracks_scroll() {
        let mut engine = mounted_engine();
        engine.jump_to(9999.0);
        engine.tick(Duration::from_millis(16));
        assert!((engine.page_progress() - 1.0).abs() < 1e-9);
        let bar = engine.progress_bar().unwrap();
        assert!((engine.value(bar, Property::Fill) - 1.0).abs() < 1e-9);

        engine.jump_to(0.0);
        engine.tick(Duration::from_millis(16));
        assert_eq!(engine.page_progress(), 0.0);
    }

    #[test]
    fn test_typed_text_starts_on_first_frame() {
        let mut engine = mounted_engine();
        engine.tick(Duration::from_millis(16));
        assert_eq!(
            engine.typed().map(|t| t.phase()),
            Some(TypedPhase::Playing)
        );
    }

    #[test]
    fn test_card_commands_route_to_deck() {
        let mut engine = mounted_engine();
        let projects_top = engine.layout().section(SectionId::Projects).unwrap().top;
        engine.jump_to(projects_top);
        engine.tick(Duration::from_millis(16));

        engine.command(NavCommand::NextCard);
        assert_eq!(engine.deck().map(|d| d.active_index()), Some(1));
        for _ in 0..5 {
            engine.command(NavCommand::NextCard);
        }
        assert_eq!(engine.deck().map(|d| d.active_index()), Some(0));
    }

    #[test]
    fn test_dot_activation_centers_entry() {
        let mut engine = mounted_engine();
        engine.command(NavCommand::ActivateDot(1));
        // Education spans rows 370..430; entry 1 centers at row 415,
        // which the 40-row viewport centers by scrolling to 395.
        assert_eq!(engine.scroll_target(), 395.0);
        assert_eq!(engine.dots().map(|d| d.active_index()), Some(1));
    }

    #[test]
    fn test_missing_section_disables_only_its_controller() {
        let mut thin = plan();
        thin.sections.retain(|s| s.id != SectionId::Education);
        let mut engine = MotionEngine::new(EngineOptions::default());
        engine.mount(thin);

        assert!(engine.mounted());
        assert!(engine.dots().is_none());
        assert!(engine.deck().is_some());
        // Commands for the missing controller are swallowed.
        engine.command(NavCommand::ActivateDot(0));
        engine.tick(Duration::from_millis(16));
    }

    #[test]
    fn test_engine_settles_after_intro_and_typing() {
        let mut engine = mounted_engine();
        engine.jump_to(engine.layout().max_scroll());
        for _ in 0..300 {
            engine.tick(Duration::from_millis(16));
        }
        assert!(!engine.needs_update());
    }

    #[test]
    fn test_resize_keeps_triggers_alive() {
        let mut engine = mounted_engine();
        let triggers = engine.trigger_count();
        engine.resize(60);
        assert_eq!(engine.trigger_count(), triggers);
        engine.scroll_by(10.0);
        assert!(!engine.tick(Duration::from_millis(16)).is_empty());
    }

    #[test]
    fn test_reduced_motion_presents_raw_positions() {
        let mut engine = MotionEngine::new(EngineOptions {
            reduced_motion: true,
            ..EngineOptions::default()
        });
        engine.mount(plan());
        engine.scroll_by(50.0);
        engine.tick(Duration::from_millis(16));
        assert_eq!(engine.pos(), 50.0);
    }

    #[test]
    fn test_stacking_pins_to_experience_span() {
        let mut engine = mounted_engine();
        // Jump into the middle of the pin span and let the trigger fire.
        engine.jump_to(270.0);
        engine.tick(Duration::from_millis(16));
        let stacking = engine.stacking().unwrap();
        assert_eq!(stacking.step(), Some(1));
    }
}
