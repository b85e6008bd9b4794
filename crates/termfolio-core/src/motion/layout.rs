//! L3 Molecular Layer: Page geometry and region resolution
//!
//! The page is a virtual column of sections measured in terminal rows.
//! Regions describe scroll spans relative to a section using
//! viewport-relative anchors, and are resolved into absolute scroll
//! positions against the current [`PageLayout`]. Resolution is repeated
//! whenever the layout changes (terminal resize, content mutation).

use serde::{Deserialize, Serialize};

/// The seven content sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Footer,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Footer,
    ];

    /// Display label used by the status bar and help overlay.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Footer => "Contact",
        }
    }
}

/// A reference point on an element or on the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorPoint {
    Top,
    Center,
    Bottom,
    /// Fraction of the height from the top, e.g. 0.85 for "85%".
    Fraction(f64),
}

impl AnchorPoint {
    #[inline]
    fn offset(&self, height: f64) -> f64 {
        match self {
            AnchorPoint::Top => 0.0,
            AnchorPoint::Center => height / 2.0,
            AnchorPoint::Bottom => height,
            AnchorPoint::Fraction(f) => height * f,
        }
    }
}

/// "Element point meets viewport point", e.g. element top at viewport bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub element: AnchorPoint,
    pub viewport: AnchorPoint,
}

impl Anchor {
    pub const fn new(element: AnchorPoint, viewport: AnchorPoint) -> Self {
        Self { element, viewport }
    }

    /// Element enters at the bottom edge of the viewport.
    pub const TOP_BOTTOM: Anchor = Anchor::new(AnchorPoint::Top, AnchorPoint::Bottom);
    /// Element top pinned to the viewport top.
    pub const TOP_TOP: Anchor = Anchor::new(AnchorPoint::Top, AnchorPoint::Top);
    /// Element center aligned with the viewport center.
    pub const CENTER_CENTER: Anchor = Anchor::new(AnchorPoint::Center, AnchorPoint::Center);
    /// Element bottom leaves past the viewport top.
    pub const BOTTOM_TOP: Anchor = Anchor::new(AnchorPoint::Bottom, AnchorPoint::Top);
}

/// Where a region ends: another anchor, or a fixed span past its start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionEnd {
    Anchor(Anchor),
    /// End exactly this many rows after the resolved start.
    AfterStart(f64),
}

/// How scroll-bound values follow region progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Scrub {
    /// Not scroll-bound; progress events still fire.
    Off,
    /// Bound values track progress exactly.
    #[default]
    On,
    /// Bound values catch up to progress over roughly this many milliseconds.
    Smooth(u64),
}

/// A scroll span tied to a section, in viewport-relative terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    pub section: SectionId,
    pub start: Anchor,
    pub end: RegionEnd,
    pub scrub: Scrub,
}

impl ScrollRegion {
    pub fn new(section: SectionId, start: Anchor, end: RegionEnd) -> Self {
        Self {
            section,
            start,
            end,
            scrub: Scrub::default(),
        }
    }

    pub fn with_scrub(mut self, scrub: Scrub) -> Self {
        self.scrub = scrub;
        self
    }
}

/// A region resolved into absolute scroll positions.
///
/// Invariant: `start < end`. Resolution widens degenerate spans by one
/// row so progress math never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSpan {
    pub start: f64,
    pub end: f64,
}

/// Measured extent of one section within the virtual page.
#[derive(Debug, Clone, Copy)]
pub struct SectionExtent {
    pub id: SectionId,
    /// Document row of the section's first line.
    pub top: f64,
    /// Content height in rows.
    pub height: f64,
    /// Extra document rows during which the section stays pinned on screen.
    pub pin_span: f64,
}

/// The measured virtual page: section extents plus viewport metrics.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    sections: Vec<SectionExtent>,
    viewport_rows: f64,
    total_rows: f64,
}

impl PageLayout {
    pub fn builder(viewport_rows: u16) -> PageLayoutBuilder {
        PageLayoutBuilder {
            sections: Vec::new(),
            viewport_rows: f64::from(viewport_rows),
            cursor: 0.0,
        }
    }

    pub fn sections(&self) -> &[SectionExtent] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionExtent> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn viewport_rows(&self) -> f64 {
        self.viewport_rows
    }

    /// Total document height including pin spans.
    pub fn total_rows(&self) -> f64 {
        self.total_rows
    }

    /// Largest valid scroll position.
    pub fn max_scroll(&self) -> f64 {
        (self.total_rows - self.viewport_rows).max(0.0)
    }

    /// Scroll position that centers the section in the viewport.
    pub fn center_on(&self, id: SectionId) -> Option<f64> {
        let s = self.section(id)?;
        let centered = s.top + s.height / 2.0 - self.viewport_rows / 2.0;
        Some(centered.clamp(0.0, self.max_scroll()))
    }

    /// Scroll position that centers an absolute document row.
    pub fn center_row(&self, row: f64) -> f64 {
        (row - self.viewport_rows / 2.0).clamp(0.0, self.max_scroll())
    }

    /// The section whose extent (pin span included) covers a scroll
    /// position, taken at the viewport top.
    pub fn section_at(&self, pos: f64) -> Option<SectionId> {
        let mut current = self.sections.first().map(|s| s.id)?;
        for s in &self.sections {
            if pos >= s.top {
                current = s.id;
            }
        }
        Some(current)
    }

    /// Resolve a region into absolute scroll positions.
    ///
    /// The start is where the element anchor meets the viewport anchor;
    /// scroll position is the document row at the viewport top.
    pub fn resolve(&self, region: &ScrollRegion) -> Option<ResolvedSpan> {
        let s = self.section(region.section)?;
        let start = self.resolve_anchor(s, region.start);
        let end = match region.end {
            RegionEnd::Anchor(a) => self.resolve_anchor(s, a),
            RegionEnd::AfterStart(rows) => start + rows,
        };
        // Keep the span non-degenerate so progress never divides by zero.
        let end = if end > start { end } else { start + 1.0 };
        Some(ResolvedSpan { start, end })
    }

    fn resolve_anchor(&self, s: &SectionExtent, anchor: Anchor) -> f64 {
        let element_row = s.top + anchor.element.offset(s.height + s.pin_span);
        element_row - anchor.viewport.offset(self.viewport_rows)
    }
}

/// Builds a [`PageLayout`] by appending sections in document order.
pub struct PageLayoutBuilder {
    sections: Vec<SectionExtent>,
    viewport_rows: f64,
    cursor: f64,
}

impl PageLayoutBuilder {
    pub fn section(mut self, id: SectionId, height: u16) -> Self {
        self.push(id, f64::from(height), 0.0);
        self
    }

    /// A pinned section holds its visual position for `pin_span` extra rows
    /// of scroll while internal progress advances.
    pub fn pinned_section(mut self, id: SectionId, height: u16, pin_span: u16) -> Self {
        self.push(id, f64::from(height), f64::from(pin_span));
        self
    }

    fn push(&mut self, id: SectionId, height: f64, pin_span: f64) {
        self.sections.push(SectionExtent {
            id,
            top: self.cursor,
            height,
            pin_span,
        });
        self.cursor += height + pin_span;
    }

    pub fn build(self) -> PageLayout {
        PageLayout {
            sections: self.sections,
            viewport_rows: self.viewport_rows,
            total_rows: self.cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::builder(40)
            .section(SectionId::Hero, 40)
            .section(SectionId::About, 60)
            .pinned_section(SectionId::Experience, 40, 120)
            .section(SectionId::Footer, 20)
            .build()
    }

    #[test]
    fn test_extents_accumulate() {
        let l = layout();
        assert_eq!(l.section(SectionId::Hero).unwrap().top, 0.0);
        assert_eq!(l.section(SectionId::About).unwrap().top, 40.0);
        assert_eq!(l.section(SectionId::Experience).unwrap().top, 100.0);
        // Pin span counts toward the next section's top.
        assert_eq!(l.section(SectionId::Footer).unwrap().top, 260.0);
        assert_eq!(l.total_rows(), 280.0);
        assert_eq!(l.max_scroll(), 240.0);
    }

    #[test]
    fn test_missing_section() {
        let l = layout();
        assert!(l.section(SectionId::Projects).is_none());
        let region = ScrollRegion::new(
            SectionId::Projects,
            Anchor::TOP_BOTTOM,
            RegionEnd::Anchor(Anchor::BOTTOM_TOP),
        );
        assert!(l.resolve(&region).is_none());
    }

    #[test]
    fn test_resolve_top_bottom_to_bottom_top() {
        let l = layout();
        // About enters the viewport bottom at scroll 0 (top 40 - viewport 40)
        // and leaves past the top at scroll 100 (top 40 + height 60).
        let region = ScrollRegion::new(
            SectionId::About,
            Anchor::TOP_BOTTOM,
            RegionEnd::Anchor(Anchor::BOTTOM_TOP),
        );
        let span = l.resolve(&region).unwrap();
        assert_eq!(span.start, 0.0);
        assert_eq!(span.end, 100.0);
    }

    #[test]
    fn test_resolve_pinned_span() {
        let l = layout();
        // Pin starts when the section top reaches the viewport top.
        let region = ScrollRegion::new(
            SectionId::Experience,
            Anchor::TOP_TOP,
            RegionEnd::AfterStart(120.0),
        );
        let span = l.resolve(&region).unwrap();
        assert_eq!(span.start, 100.0);
        assert_eq!(span.end, 220.0);
    }

    #[test]
    fn test_degenerate_span_widened() {
        let l = layout();
        let region = ScrollRegion::new(
            SectionId::Hero,
            Anchor::TOP_TOP,
            RegionEnd::AfterStart(0.0),
        );
        let span = l.resolve(&region).unwrap();
        assert!(span.end > span.start);
    }

    #[test]
    fn test_center_on_clamps() {
        let l = layout();
        // Hero is already at the top; centering cannot go negative.
        assert_eq!(l.center_on(SectionId::Hero).unwrap(), 0.0);
        // Footer centering clamps to max scroll.
        assert_eq!(l.center_on(SectionId::Footer).unwrap(), l.max_scroll());
        assert_eq!(l.center_row(0.0), 0.0);
        assert_eq!(l.center_row(120.0), 100.0);
    }

    #[test]
    fn test_section_at_viewport_top() {
        let l = layout();
        assert_eq!(l.section_at(0.0), Some(SectionId::Hero));
        assert_eq!(l.section_at(39.0), Some(SectionId::Hero));
        assert_eq!(l.section_at(40.0), Some(SectionId::About));
        // Positions inside the pin span still belong to the pinned section.
        assert_eq!(l.section_at(180.0), Some(SectionId::Experience));
        assert_eq!(l.section_at(9999.0), Some(SectionId::Footer));
    }
}
