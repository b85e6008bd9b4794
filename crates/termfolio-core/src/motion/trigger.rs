//! L2 Organism Layer: Trigger registry
//!
//! Associates scroll regions with edge and progress notifications. The
//! registry holds the page's single scroll listener: it attaches to the
//! feed when the first region registers and detaches when the last one
//! unregisters. Registration against a section missing from the layout
//! fails with [`Error::InvalidTrigger`]; spans that go stale after a
//! layout change are re-resolved on the next evaluation.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::layout::{PageLayout, ResolvedSpan, ScrollRegion};
use super::progress::{span_progress, Direction, ListenerToken, ProgressEvent, ScrollFeed};

/// Opaque identifier for one registered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriggerHandle(u64);

#[cfg(test)]
impl TriggerHandle {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Which notifications a registration wants.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interest {
    pub update: bool,
    pub enter: bool,
    pub leave: bool,
    pub enter_back: bool,
    pub leave_back: bool,
}

impl Interest {
    /// Progress updates only (scrubbed effects).
    pub fn updates() -> Self {
        Self {
            update: true,
            ..Self::default()
        }
    }

    /// Every edge plus progress updates.
    pub fn all() -> Self {
        Self {
            update: true,
            enter: true,
            leave: true,
            enter_back: true,
            leave_back: true,
        }
    }

    /// Edges only, no per-position updates.
    pub fn edges() -> Self {
        Self {
            update: false,
            ..Self::all()
        }
    }
}

/// Notification emitted for a registered region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerEvent {
    /// The span was entered travelling forward.
    Enter,
    /// The span was exited past its end.
    Leave,
    /// The span was re-entered travelling backward.
    EnterBack,
    /// The span was exited backward past its start.
    LeaveBack,
    Update(ProgressEvent),
}

/// Position of the scroll offset relative to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Before,
    Inside,
    After,
}

fn zone_of(span: &ResolvedSpan, pos: f64) -> Zone {
    if pos < span.start {
        Zone::Before
    } else if pos > span.end {
        Zone::After
    } else {
        Zone::Inside
    }
}

#[derive(Debug)]
struct TriggerState {
    region: ScrollRegion,
    span: ResolvedSpan,
    /// Layout revision the span was resolved against.
    revision: u64,
    interest: Interest,
    zone: Option<Zone>,
    last_progress: Option<f64>,
    /// Section disappeared from the layout; skipped until it returns.
    dormant: bool,
}

/// Registry of scroll-triggered regions.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    triggers: BTreeMap<u64, TriggerState>,
    next_handle: u64,
    feed_token: Option<ListenerToken>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region. Fails if the region's section is not present in
    /// the layout; a failed registration leaves no listener behind.
    pub fn register(
        &mut self,
        feed: &mut ScrollFeed,
        layout: &PageLayout,
        revision: u64,
        region: ScrollRegion,
        interest: Interest,
    ) -> Result<TriggerHandle> {
        let span = layout.resolve(&region).ok_or(Error::InvalidTrigger {
            section: region.section,
        })?;

        if self.feed_token.is_none() {
            self.feed_token = Some(feed.attach());
        }

        let handle = TriggerHandle(self.next_handle);
        self.next_handle += 1;
        self.triggers.insert(
            handle.0,
            TriggerState {
                region,
                span,
                revision,
                interest,
                zone: None,
                last_progress: None,
                dormant: false,
            },
        );
        debug!(?handle, section = ?region.section, "registered trigger region");
        Ok(handle)
    }

    /// Remove a registration. Safe to call repeatedly; removing the last
    /// region detaches the scroll listener.
    pub fn unregister(&mut self, feed: &mut ScrollFeed, handle: TriggerHandle) {
        if self.triggers.remove(&handle.0).is_some() {
            debug!(?handle, "unregistered trigger region");
        }
        if self.triggers.is_empty() {
            if let Some(token) = self.feed_token.take() {
                feed.detach(token);
            }
        }
    }

    /// Re-resolve every span against the current layout.
    pub fn refresh_all(&mut self, layout: &PageLayout, revision: u64) {
        for (id, state) in self.triggers.iter_mut() {
            match layout.resolve(&state.region) {
                Some(span) => {
                    state.span = span;
                    state.revision = revision;
                    state.dormant = false;
                }
                None => {
                    let err = Error::StaleRegion {
                        section: state.region.section,
                    };
                    warn!(handle = id, "{err}; trigger left dormant");
                    state.dormant = true;
                }
            }
        }
    }

    /// Evaluate every region against a published scroll position, emitting
    /// edge and update events in registration order. Spans resolved against
    /// an older layout revision are recovered in place first.
    pub fn evaluate(
        &mut self,
        layout: &PageLayout,
        revision: u64,
        pos: f64,
        direction: Direction,
    ) -> Vec<(TriggerHandle, TriggerEvent)> {
        let mut out = Vec::new();
        for (id, state) in self.triggers.iter_mut() {
            if state.revision != revision {
                match layout.resolve(&state.region) {
                    Some(span) => {
                        state.span = span;
                        state.revision = revision;
                        state.dormant = false;
                        debug!(handle = id, "recovered stale region");
                    }
                    None => {
                        state.dormant = true;
                        continue;
                    }
                }
            }
            if state.dormant {
                continue;
            }

            let handle = TriggerHandle(*id);
            let zone = zone_of(&state.span, pos);
            let progress = span_progress(&state.span, pos);
            // A trigger that has never been evaluated is treated as
            // starting before its span, travelling forward.
            let prev = state.zone.unwrap_or(Zone::Before);

            let mut push = |ev: TriggerEvent| out.push((handle, ev));
            match (prev, zone) {
                (Zone::Before, Zone::Inside) => {
                    if state.interest.enter {
                        push(TriggerEvent::Enter);
                    }
                }
                (Zone::After, Zone::Inside) => {
                    if state.interest.enter_back {
                        push(TriggerEvent::EnterBack);
                    }
                }
                (Zone::Before, Zone::After) => {
                    // Jumped over the whole span in one move.
                    if state.interest.enter {
                        push(TriggerEvent::Enter);
                    }
                }
                (Zone::After, Zone::Before) => {
                    if state.interest.enter_back {
                        push(TriggerEvent::EnterBack);
                    }
                }
                _ => {}
            }

            let progress_changed = state.last_progress != Some(progress);
            if state.interest.update && progress_changed && prev_or_now_inside(prev, zone) {
                push(TriggerEvent::Update(ProgressEvent {
                    progress,
                    direction,
                }));
            }

            match (prev, zone) {
                (Zone::Inside | Zone::Before, Zone::After) => {
                    if state.interest.leave {
                        push(TriggerEvent::Leave);
                    }
                }
                (Zone::Inside | Zone::After, Zone::Before) => {
                    if state.interest.leave_back {
                        push(TriggerEvent::LeaveBack);
                    }
                }
                _ => {}
            }

            state.zone = Some(zone);
            state.last_progress = Some(progress);
        }
        out
    }

    /// The region a handle was registered with, if still present.
    pub fn region(&self, handle: TriggerHandle) -> Option<&ScrollRegion> {
        self.triggers.get(&handle.0).map(|s| &s.region)
    }

    /// Last clamped progress seen for a handle.
    pub fn progress_of(&self, handle: TriggerHandle) -> Option<f64> {
        self.triggers.get(&handle.0).and_then(|s| s.last_progress)
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

/// Updates fire while inside the span, including the evaluation that
/// crosses a boundary in either direction.
fn prev_or_now_inside(prev: Zone, now: Zone) -> bool {
    prev == Zone::Inside || now == Zone::Inside || prev != now
}
