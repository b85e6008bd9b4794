//! About section: parallax backdrop, drift lines, paragraphs, quick facts.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use termfolio_core::motion::Property;

use crate::app::App;
use crate::layout;
use crate::theme::Theme;
use crate::widgets::section_header;

/// Decorative glyph clusters per parallax layer: (x fraction, base row).
const LAYER_GLYPHS: [&[(f64, u16)]; 3] = [
    &[(0.12, 4), (0.82, 9), (0.28, 17)],
    &[(0.68, 6), (0.08, 13), (0.9, 20)],
    &[(0.45, 3), (0.95, 15)],
];
const LAYER_SYMBOLS: [&str; 3] = ["░", "▒", "·"];

pub struct AboutWidget;

impl AboutWidget {
    pub fn render(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        draw_parallax(area, buf, app, theme);
        draw_drift_lines(area, buf, app, theme);

        let col = layout::content_width(area.width).min(area.width);
        let x0 = layout::content_x(area.width);
        let needed = layout::about_rows(&app.content, col);
        let mut y = area.y + area.height.saturating_sub(needed) / 2;

        y = section_header(buf, area, x0, col, y, "About Me", theme);

        for paragraph in &app.content.about.paragraphs {
            for line in layout::wrap_text(paragraph, col) {
                if y >= area.bottom() {
                    return;
                }
                buf.set_stringn(
                    x0,
                    y,
                    &line,
                    col.into(),
                    Style::default().fg(theme.fg1),
                );
                y += 1;
            }
            y += 1;
        }

        draw_facts(area, buf, app, theme, x0, col, y);
    }
}

fn draw_facts(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme, x0: u16, col: u16, y: u16) {
    let facts = &app.content.about.facts;
    if facts.is_empty() || y >= area.bottom() {
        return;
    }
    let inner_w = col.saturating_sub(4).max(10);
    let fact_rows: u16 = facts.iter().map(|f| layout::text_height(f, inner_w)).sum();
    let box_h = (fact_rows + 2).min(area.bottom() - y);
    let rect = Rect::new(x0, y, col.min(area.width), box_h);

    Block::default()
        .title(" Quick Facts ")
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.bg3))
        .render(rect, buf);

    let mut fy = y + 1;
    for fact in facts {
        for line in layout::wrap_text(fact, inner_w) {
            if fy >= y + box_h - 1 {
                return;
            }
            buf.set_string(x0 + 2, fy, "▸ ", Style::default().fg(theme.accent));
            buf.set_stringn(
                x0 + 4,
                fy,
                &line,
                inner_w.saturating_sub(2).into(),
                Style::default().fg(theme.fg0),
            );
            fy += 1;
        }
    }
}

/// Background layers drift vertically at depth-scaled speeds while the
/// section scrolls.
fn draw_parallax(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
    let layers = &app.engine.targets().parallax_layers;
    for (i, &target) in layers.iter().enumerate() {
        let dy = app.engine.value(target, Property::OffsetY).round() as i32;
        let glyphs = LAYER_GLYPHS[i % LAYER_GLYPHS.len()];
        let symbol = LAYER_SYMBOLS[i % LAYER_SYMBOLS.len()];
        for &(fx, base) in glyphs {
            let x = area.x + (fx * f64::from(area.width.saturating_sub(1))).round() as u16;
            let y = i32::from(area.y) + i32::from(base) + dy;
            if y < i32::from(area.top()) || y >= i32::from(area.bottom()) {
                continue;
            }
            if let Some(cell) = buf.cell_mut(Position::new(x, y as u16)) {
                cell.set_symbol(symbol);
                cell.set_style(Style::default().fg(theme.bg3));
            }
        }
    }
}

/// Two dashed lines slide horizontally in opposite directions.
fn draw_drift_lines(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
    let lines = &app.engine.targets().drift_lines;
    if area.height < 6 {
        return;
    }
    let ys = [area.y + 1, area.bottom() - 2];
    for (i, &target) in lines.iter().enumerate() {
        let offset = app.engine.value(target, Property::OffsetX).round() as i32;
        let y = ys[i % ys.len()];
        for x in 0..area.width {
            // Dash pattern: two cells on, two off, phase-shifted by drift
            let phase = (i32::from(x) - offset).rem_euclid(4);
            if phase < 2 {
                if let Some(cell) = buf.cell_mut(Position::new(area.x + x, y)) {
                    cell.set_symbol("─");
                    cell.set_style(Style::default().fg(theme.bg2));
                }
            }
        }
    }
}
