//! Education section: a vertical timeline whose highlight dot follows
//! the scroll position. Digit keys recenter the matching entry, so the
//! dot row order must stay aligned with the engine's entry centers.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use termfolio_core::content::EducationEntry;
use termfolio_core::motion::Property;

use crate::app::App;
use crate::layout;
use crate::theme::{blend, Theme};
use crate::widgets::section_header;

pub struct EducationWidget;

impl EducationWidget {
    pub fn render(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
        if area.width == 0 || area.height < 6 {
            return;
        }

        let entries = &app.content.education;
        if entries.is_empty() {
            return;
        }
        let n = entries.len() as u32;

        let col = layout::content_width(area.width).min(area.width);
        let x0 = layout::content_x(area.width);
        let line_x = x0 + 2;

        for y in area.y..area.bottom() {
            buf.set_string(line_x, y, "│", Style::default().fg(theme.grey0));
        }
        section_header(
            buf,
            area,
            x0 + 6,
            col.saturating_sub(6),
            area.y + 1,
            "Education",
            theme,
        );

        let active = app.engine.dots().map_or(0, |d| d.active_index());
        let dot_targets = &app.engine.targets().dots;

        // Entries split the section height evenly; each dot sits at its
        // slice's center, which is also where dot activation scrolls to.
        for (i, entry) in entries.iter().enumerate() {
            let i32n = i as u32;
            let top = area.y + (i32n * u32::from(area.height) / n) as u16;
            let bottom = area.y + ((i32n + 1) * u32::from(area.height) / n) as u16;
            let center = area.y + ((2 * i32n + 1) * u32::from(area.height) / (2 * n)) as u16;

            let fill = dot_targets
                .get(i)
                .map_or(0.0, |&t| app.engine.value(t, Property::Fill));

            let connector = blend(theme.grey0, theme.accent, fill);
            buf.set_string(
                line_x + 1,
                center,
                "───",
                Style::default().fg(connector),
            );

            draw_entry_card(
                area,
                buf,
                theme,
                entry,
                x0,
                col,
                top,
                bottom,
                center,
                i == 0,
            );

            let dot_style = Style::default().fg(blend(theme.grey1, theme.accent, fill));
            let glyph = if fill > 0.5 { "◉" } else { "○" };
            let dot_style = if i == active {
                dot_style.add_modifier(Modifier::BOLD)
            } else {
                dot_style
            };
            buf.set_string(line_x, center, glyph, dot_style);
            if n <= 9 {
                buf.set_string(
                    x0,
                    center,
                    (i + 1).to_string(),
                    Style::default().fg(theme.grey0),
                );
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_entry_card(
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    entry: &EducationEntry,
    x0: u16,
    col: u16,
    chunk_top: u16,
    chunk_bottom: u16,
    center: u16,
    first: bool,
) {
    let card_x = x0 + 6;
    let card_w = col.saturating_sub(6).min(area.width.saturating_sub(card_x));
    if card_w < 12 {
        return;
    }

    // The first slice also holds the section heading
    let min_y = if first {
        chunk_top + layout::HEADER_ROWS + 1
    } else {
        chunk_top
    };
    let card_h = layout::education_entry_rows(entry, col).min(chunk_bottom.saturating_sub(min_y));
    if card_h < 4 {
        return;
    }
    let card_y = center
        .saturating_sub(card_h / 2)
        .clamp(min_y, chunk_bottom.saturating_sub(card_h));
    let card = Rect::new(card_x, card_y, card_w, card_h);

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.bg3))
        .style(Style::default().bg(theme.bg1))
        .render(card, buf);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );
    if inner.width == 0 {
        return;
    }
    let mut y = inner.y;

    buf.set_stringn(
        inner.x,
        y,
        &entry.degree,
        inner.width.into(),
        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
    );
    y += 1;
    if y >= inner.bottom() {
        return;
    }
    buf.set_stringn(
        inner.x,
        y,
        &entry.school,
        inner.width.into(),
        Style::default().fg(theme.accent),
    );
    y += 1;
    if y >= inner.bottom() {
        return;
    }
    buf.set_stringn(
        inner.x,
        y,
        &format!("{} · {}", entry.period, entry.location),
        inner.width.into(),
        Style::default().fg(theme.grey2),
    );
    y += 1;

    if !entry.gpa.is_empty() && y < inner.bottom() {
        buf.set_stringn(
            inner.x,
            y,
            &format!("GPA {}", entry.gpa),
            inner.width.into(),
            Style::default().fg(theme.success),
        );
        y += 1;
    }

    if !entry.courses.is_empty() {
        for line in layout::wrap_text(&entry.courses.join("  •  "), inner.width) {
            if y >= inner.bottom() {
                break;
            }
            buf.set_stringn(
                inner.x,
                y,
                &line,
                inner.width.into(),
                Style::default().fg(theme.grey2),
            );
            y += 1;
        }
    }
}
