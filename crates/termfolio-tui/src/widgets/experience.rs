//! Experience section: while the section is pinned, entries stack in a
//! depth tunnel and step forward one scroll-length at a time.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use termfolio_core::content::ExperienceEntry;
use termfolio_core::motion::{project_depth, Property, TargetId, PERSPECTIVE};

use crate::app::App;
use crate::layout;
use crate::page::{copy_row, fill_bg};
use crate::theme::Theme;
use crate::widgets::section_header;

pub struct ExperienceWidget;

impl ExperienceWidget {
    pub fn render(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
        if area.width == 0 || area.height < 8 {
            return;
        }

        let col = layout::content_width(area.width).min(area.width);
        let x0 = layout::content_x(area.width);
        let y = section_header(buf, area, x0, col, area.y + 1, "Experience", theme);

        let entries = &app.content.experience;
        if entries.is_empty() {
            return;
        }

        let card_w = col.min(76);
        let card_h = area.height.saturating_sub(y - area.y + 2).max(6);
        let base = Rect::new(
            area.x + (area.width.saturating_sub(card_w)) / 2,
            y,
            card_w,
            card_h,
        );

        // Farthest card first so nearer ones paint over it
        let mut order: Vec<(usize, TargetId, f64)> = app
            .engine
            .targets()
            .stack_items
            .iter()
            .enumerate()
            .map(|(i, &t)| (i, t, app.engine.value(t, Property::Depth)))
            .collect();
        order.sort_by(|a, b| a.2.total_cmp(&b.2));

        for (index, target, depth) in order {
            draw_stack_card(area, buf, app, theme, entries, index, target, depth, base);
        }

        draw_step_rail(area, buf, app, theme, entries.len());
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_stack_card(
    area: Rect,
    buf: &mut Buffer,
    app: &App,
    theme: &Theme,
    entries: &[ExperienceEntry],
    index: usize,
    target: TargetId,
    depth: f64,
    base: Rect,
) {
    let Some(entry) = entries.get(index) else {
        return;
    };

    let alpha = app.engine.value(target, Property::Opacity);
    if alpha <= 0.01 {
        return;
    }
    let scale = app.engine.value(target, Property::Scale);
    let total = (scale * project_depth(depth, PERSPECTIVE)).clamp(0.2, 1.0);

    let w = (f64::from(base.width) * total).round().max(16.0) as u16;
    let h = (f64::from(base.height) * total).round().max(5.0) as u16;
    // Receding cards drift upward so the stack reads as a tunnel
    let lift = ((1.0 - total) * 6.0).round() as i32;
    let x = i32::from(base.x) + i32::from(base.width.saturating_sub(w)) / 2;
    let y = i32::from(base.y) + i32::from(base.height.saturating_sub(h)) / 2 - lift;

    let card_area = Rect::new(0, 0, w, h);
    let mut card_buf = Buffer::empty(card_area);
    fill_bg(&mut card_buf, card_area, theme.bg1);
    draw_entry(card_area, &mut card_buf, theme, entry);

    for row in 0..h {
        copy_row(
            buf,
            &card_buf,
            row,
            y + i32::from(row),
            x,
            area,
            alpha,
            theme,
        );
    }
}

fn draw_entry(area: Rect, buf: &mut Buffer, theme: &Theme, entry: &ExperienceEntry) {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.bg3))
        .style(Style::default().bg(theme.bg1))
        .render(area, buf);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let mut y = inner.y;

    buf.set_stringn(
        inner.x,
        y,
        &entry.role,
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
        &entry.company,
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
    y += 2;

    for duty in &entry.responsibilities {
        let lines = layout::wrap_text(duty, inner.width.saturating_sub(2));
        for (i, line) in lines.iter().enumerate() {
            if y + 1 >= inner.bottom() {
                return;
            }
            let prefix = if i == 0 { "▸ " } else { "  " };
            buf.set_string(inner.x, y, prefix, Style::default().fg(theme.accent_alt));
            buf.set_stringn(
                inner.x + 2,
                y,
                line,
                usize::from(inner.width.saturating_sub(2)),
                Style::default().fg(theme.fg1),
            );
            y += 1;
        }
    }

    if inner.height >= 2 {
        buf.set_stringn(
            inner.x,
            inner.bottom() - 1,
            &entry.technologies.join(" · "),
            inner.width.into(),
            Style::default().fg(theme.grey2),
        );
    }
}

fn draw_step_rail(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme, len: usize) {
    let Some(stacking) = app.engine.stacking() else {
        return;
    };
    let step = stacking.step();
    let x = area.right().saturating_sub(3);
    let top = area.y + area.height.saturating_sub(len as u16 * 2) / 2;
    for i in 0..len {
        let y = top + i as u16 * 2;
        if y >= area.bottom() {
            break;
        }
        let (dot, style) = if step == Some(i) {
            ("●", Style::default().fg(theme.accent))
        } else {
            ("○", Style::default().fg(theme.grey1))
        };
        buf.set_string(x, y, dot, style);
    }
}
