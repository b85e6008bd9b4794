//! Projects section: one card of the deck at a time, with slide, tilt,
//! fade, and scale read back from the animator during transitions.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use termfolio_core::content::Project;
use termfolio_core::motion::Property;

use crate::app::App;
use crate::layout;
use crate::page::{copy_row, fill_bg};
use crate::theme::Theme;
use crate::widgets::section_header;

pub struct ProjectsWidget;

impl ProjectsWidget {
    pub fn render(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
        if area.width == 0 || area.height < 8 {
            return;
        }

        let col = layout::content_width(area.width).min(area.width);
        let x0 = layout::content_x(area.width);
        let y = section_header(buf, area, x0, col, area.y + 1, "Projects", theme);

        let projects = &app.content.projects;
        let Some(deck) = app.engine.deck() else {
            return;
        };
        if projects.is_empty() {
            return;
        }

        let card_w = col.min(72);
        let card_x = area.x + (area.width.saturating_sub(card_w)) / 2;
        let card_h = area.height.saturating_sub(y - area.y + 3).max(6);
        let base = Rect::new(card_x, y, card_w, card_h);

        let active = deck.active_index();
        let cards = &app.engine.targets().cards;

        // Outgoing cards first, the incoming card on top
        for (i, &target) in cards.iter().enumerate() {
            if i == active {
                continue;
            }
            draw_card(area, buf, app, theme, projects, i, target, base);
        }
        if let Some(&target) = cards.get(active) {
            draw_card(area, buf, app, theme, projects, active, target, base);
        }

        draw_pager(area, buf, theme, active, projects.len());
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_card(
    area: Rect,
    buf: &mut Buffer,
    app: &App,
    theme: &Theme,
    projects: &[Project],
    index: usize,
    target: termfolio_core::motion::TargetId,
    base: Rect,
) {
    let Some(project) = projects.get(index) else {
        return;
    };

    let alpha = app.engine.value(target, Property::Opacity);
    if alpha <= 0.01 {
        return;
    }
    let scale = app.engine.value(target, Property::Scale).clamp(0.2, 1.0);
    let slide = app.engine.value(target, Property::OffsetX);
    let tilt = app.engine.value(target, Property::RotationDeg);

    // Slide is animated in percent of a full exit; map it to columns that
    // carry the card fully past the section edge.
    let dx = (slide / 100.0 * f64::from(area.width + base.width) / 2.0).round() as i32;

    let w = (f64::from(base.width) * scale).round().max(12.0) as u16;
    let h = (f64::from(base.height) * scale).round().max(5.0) as u16;
    let inset_x = i32::from(base.x) + i32::from(base.width.saturating_sub(w)) / 2;
    let inset_y = i32::from(base.y) + i32::from(base.height.saturating_sub(h)) / 2;

    let card_area = Rect::new(0, 0, w, h);
    let mut card_buf = Buffer::empty(card_area);
    fill_bg(&mut card_buf, card_area, theme.bg1);
    draw_card_content(card_area, &mut card_buf, theme, project);

    // Tilt becomes a per-row shear around the card's vertical center,
    // halved because terminal cells are about twice as tall as wide.
    let shear = tilt.to_radians().tan() * 0.5;
    let cy = f64::from(h) / 2.0;
    for row in 0..h {
        let row_dx = (shear * (cy - f64::from(row))).round() as i32;
        copy_row(
            buf,
            &card_buf,
            row,
            inset_y + i32::from(row),
            inset_x + dx + row_dx,
            area,
            alpha,
            theme,
        );
    }
}

fn draw_card_content(area: Rect, buf: &mut Buffer, theme: &Theme, project: &Project) {
    Block::default()
        .title(format!(" {} ", project.title))
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
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
    if inner.width == 0 {
        return;
    }
    let mut y = inner.y;

    if !project.badges.is_empty() && y < inner.bottom() {
        let mut x = inner.x;
        for badge in &project.badges {
            let chip = format!(" {} ", badge.text);
            let width = chip.chars().count() as u16;
            if x + width > inner.right() {
                break;
            }
            buf.set_string(
                x,
                y,
                &chip,
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.badge_color(&badge.color))
                    .add_modifier(Modifier::BOLD),
            );
            x += width + 1;
        }
        y += 2;
    }

    for line in layout::wrap_text(&project.description, inner.width) {
        if y + 2 >= inner.bottom() {
            break;
        }
        buf.set_stringn(
            inner.x,
            y,
            &line,
            inner.width.into(),
            Style::default().fg(theme.fg1),
        );
        y += 1;
    }

    // Tech list and links pinned to the card's bottom rows
    if inner.height >= 2 {
        let tech = project.technologies.join(" · ");
        buf.set_stringn(
            inner.x,
            inner.bottom() - 2,
            &tech,
            inner.width.into(),
            Style::default().fg(theme.grey2),
        );

        let mut x = inner.x;
        if project.demo.is_some() {
            let label = "Demo ↗";
            buf.set_string(
                x,
                inner.bottom() - 1,
                label,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::UNDERLINED),
            );
            x += label.chars().count() as u16 + 3;
        }
        if project.repo.is_some() {
            buf.set_string(
                x,
                inner.bottom() - 1,
                "Repo ↗",
                Style::default()
                    .fg(theme.accent_alt)
                    .add_modifier(Modifier::UNDERLINED),
            );
        }
    }
}

fn draw_pager(area: Rect, buf: &mut Buffer, theme: &Theme, active: usize, len: usize) {
    // "‹ h  ○ ● ○  l ›" with every dot two cells wide
    let width = 9 + 2 * len.max(1) as u16;
    if width > area.width {
        return;
    }
    let mut x = area.x + (area.width - width) / 2;
    let y = area.bottom().saturating_sub(2);
    let hint = Style::default().fg(theme.grey1);

    buf.set_string(x, y, "‹ h  ", hint);
    x += 5;
    for i in 0..len {
        let (dot, style) = if i == active {
            ("●", Style::default().fg(theme.accent))
        } else {
            ("○", hint)
        };
        buf.set_string(x, y, dot, style);
        x += 2;
    }
    buf.set_string(x, y, " l ›", hint);
}
