//! Content measurement
//!
//! Turns portfolio content plus a terminal size into the `PagePlan` the
//! engine mounts. Widgets use the same helpers at render time, so the
//! measured heights and the drawn heights always agree.

use termfolio_core::motion::{PagePlan, SectionId, SectionPlan};
use termfolio_core::PortfolioContent;
use unicode_width::UnicodeWidthStr;

/// Horizontal margin on each side of the page column
const PAGE_MARGIN: u16 = 4;
/// Widest column the page will use on large terminals
const MAX_CONTENT_WIDTH: u16 = 100;
/// Rows for a section heading: title, underline, blank
pub const HEADER_ROWS: u16 = 3;

/// Terminal cells a string occupies; wide glyphs count as two.
pub fn display_width(text: &str) -> u16 {
    text.width() as u16
}

/// Width of the centered content column for a terminal width
pub fn content_width(width: u16) -> u16 {
    width
        .saturating_sub(PAGE_MARGIN * 2)
        .clamp(20, MAX_CONTENT_WIDTH)
}

/// Left edge of the content column
pub fn content_x(width: u16) -> u16 {
    width.saturating_sub(content_width(width)) / 2
}

/// Greedy word wrap. Words longer than the width are hard-broken so a
/// pathological token cannot push past the column.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();

    for raw in text.lines() {
        if raw.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;
        for word in raw.split_whitespace() {
            let word_len = word.chars().count();

            if current_len > 0 && current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
                continue;
            }
            if current_len == 0 && word_len <= width {
                current.push_str(word);
                current_len = word_len;
                continue;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if word_len <= width {
                current.push_str(word);
                current_len = word_len;
            } else {
                // Hard-break an overlong word
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(width) {
                    let piece: String = chunk.iter().collect();
                    if chunk.len() == width {
                        lines.push(piece);
                    } else {
                        current_len = piece.chars().count();
                        current = piece;
                    }
                }
            }
        }
        if current_len > 0 || raw.split_whitespace().next().is_none() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Rows a string occupies when wrapped to `width` columns
pub fn text_height(text: &str, width: u16) -> u16 {
    wrap_text(text, width).len() as u16
}

/// Number of skill category columns for a content column width
pub fn skills_columns(col: u16) -> u16 {
    if col >= 64 {
        2
    } else {
        1
    }
}

/// Rows for one skill category card: one row per skill plus borders
pub fn skill_card_rows(skills: usize) -> u16 {
    skills as u16 + 2
}

/// Rows for one education entry card, borders included
pub fn education_entry_rows(entry: &termfolio_core::content::EducationEntry, col: u16) -> u16 {
    let inner = col.saturating_sub(6).max(10);
    let mut rows = 3; // degree, school, period/location
    if !entry.gpa.is_empty() {
        rows += 1;
    }
    if !entry.courses.is_empty() {
        rows += text_height(&entry.courses.join("  •  "), inner);
    }
    rows + 2
}

pub(crate) fn about_rows(content: &PortfolioContent, col: u16) -> u16 {
    let mut rows = HEADER_ROWS;
    for paragraph in &content.about.paragraphs {
        rows += text_height(paragraph, col) + 1;
    }
    if !content.about.facts.is_empty() {
        let inner = col.saturating_sub(4).max(10);
        let fact_rows: u16 = content
            .about
            .facts
            .iter()
            .map(|f| text_height(f, inner))
            .sum();
        rows += fact_rows + 2;
    }
    rows + 2
}

pub(crate) fn skills_rows(content: &PortfolioContent, col: u16) -> u16 {
    let cols = skills_columns(col);
    let cards = content.skills.len() as u16;
    if cards == 0 {
        return HEADER_ROWS + 2;
    }
    let tallest = content
        .skills
        .iter()
        .map(|c| skill_card_rows(c.skills.len()))
        .max()
        .unwrap_or(0);
    let card_lines = cards.div_ceil(cols);
    HEADER_ROWS + card_lines * (tallest + 1) + 2
}

pub(crate) fn education_rows(content: &PortfolioContent, col: u16) -> u16 {
    let entries = content.education.len() as u16;
    if entries == 0 {
        return HEADER_ROWS + 2;
    }
    let tallest = content
        .education
        .iter()
        .map(|e| education_entry_rows(e, col))
        .max()
        .unwrap_or(0);
    // Entries split the section evenly; the first slice also carries the
    // section heading, so every slice reserves room for it.
    entries * (tallest + HEADER_ROWS + 2)
}

pub(crate) fn footer_rows(content: &PortfolioContent, col: u16) -> u16 {
    let mut rows = 2; // top padding + heading
    if !content.footer.links.is_empty() {
        rows += 2;
    }
    if !content.footer.note.is_empty() {
        rows += text_height(&content.footer.note, col) + 1;
    }
    rows + 1
}

/// Measure every section and assemble the plan the engine mounts.
pub fn measure_page(content: &PortfolioContent, width: u16, viewport_rows: u16) -> PagePlan {
    let viewport_rows = viewport_rows.max(1);
    let col = content_width(width);

    let pin = viewport_rows.saturating_mul(content.experience.len() as u16);

    let sections = vec![
        SectionPlan::new(SectionId::Hero, viewport_rows),
        SectionPlan::new(SectionId::About, about_rows(content, col).max(viewport_rows)),
        SectionPlan::new(
            SectionId::Skills,
            skills_rows(content, col).max(viewport_rows),
        ),
        SectionPlan::new(SectionId::Projects, viewport_rows),
        SectionPlan::pinned(SectionId::Experience, viewport_rows, pin),
        SectionPlan::new(
            SectionId::Education,
            education_rows(content, col).max(viewport_rows),
        ),
        SectionPlan::new(SectionId::Footer, footer_rows(content, col)),
    ];

    PagePlan {
        viewport_rows,
        sections,
        subtitle_chars: content.subtitle_chars(),
        counter_values: content.skill_levels(),
        card_count: content.projects.len(),
        stack_items: content.experience.len(),
        education_entries: content.education.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("alpha beta gamma", 11);
        assert_eq!(lines, vec!["alpha beta".to_string(), "gamma".to_string()]);
    }

    #[test]
    fn test_wrap_text_hard_breaks_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(
            lines,
            vec!["abcd".to_string(), "efgh".to_string(), "ij".to_string()]
        );
    }

    #[test]
    fn test_wrap_text_preserves_empty_lines() {
        let lines = wrap_text("a\n\nb", 10);
        assert_eq!(
            lines,
            vec!["a".to_string(), String::new(), "b".to_string()]
        );
    }

    #[test]
    fn test_content_width_clamps() {
        assert_eq!(content_width(30), 22);
        assert_eq!(content_width(10), 20);
        assert_eq!(content_width(400), MAX_CONTENT_WIDTH);
    }

    #[test]
    fn test_measure_page_shape() {
        let content = PortfolioContent::builtin();
        let plan = measure_page(&content, 100, 40);

        assert_eq!(plan.viewport_rows, 40);
        assert_eq!(plan.sections.len(), 7);
        assert_eq!(plan.sections[0].id, SectionId::Hero);
        assert_eq!(plan.sections[0].rows, 40);
        assert_eq!(plan.sections[6].id, SectionId::Footer);

        // Experience is pinned for one viewport per entry
        let exp = &plan.sections[4];
        assert_eq!(exp.id, SectionId::Experience);
        assert_eq!(exp.rows, 40);
        assert_eq!(exp.pin_rows, 120);

        // Full-screen sections never measure below the viewport
        for section in &plan.sections[..6] {
            assert!(section.rows >= 40, "{:?} too short", section.id);
        }

        assert_eq!(plan.card_count, 6);
        assert_eq!(plan.stack_items, 3);
        assert_eq!(plan.education_entries, 2);
        assert_eq!(plan.counter_values.len(), 20);
    }

    #[test]
    fn test_measure_page_tiny_terminal_is_safe() {
        let content = PortfolioContent::builtin();
        let plan = measure_page(&content, 5, 0);
        assert_eq!(plan.viewport_rows, 1);
        assert!(plan.sections.iter().all(|s| s.rows >= 1));
    }
}
