//! Hero section: particle field, name, tagline, typed subtitle, links.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};

use termfolio_core::motion::TypedPhase;

use crate::app::App;
use crate::layout;
use crate::theme::{blend, Theme};

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        draw_particles(area, buf, app, theme);

        let profile = &app.content.profile;
        let col = layout::content_width(area.width).min(area.width);
        let x0 = layout::content_x(area.width);

        let subtitle = typed_subtitle(app);
        let subtitle_lines = layout::wrap_text(&subtitle, col);

        let mut rows: u16 = 3 + 1 + subtitle_lines.len() as u16;
        if !profile.links.is_empty() {
            rows += 2;
        }
        let mut y = area.y + area.height.saturating_sub(rows) / 2;

        if !profile.name.is_empty() {
            let greeting = "Hi, I'm";
            set_centered(buf, area, x0, col, y, greeting, Style::default().fg(theme.grey2));
        }
        y += 1;

        draw_gradient_name(buf, area, x0, col, y, &profile.name, theme);
        y += 1;

        set_centered(
            buf,
            area,
            x0,
            col,
            y,
            &profile.tagline,
            Style::default().fg(theme.fg1),
        );
        y += 2;

        let cursor = typed_cursor(app);
        for (i, line) in subtitle_lines.iter().enumerate() {
            let last = i == subtitle_lines.len() - 1;
            let text = if last && cursor {
                format!("{line}▌")
            } else {
                line.clone()
            };
            set_centered(buf, area, x0, col, y, &text, Style::default().fg(theme.grey2));
            y += 1;
        }
        y += 1;

        if !profile.links.is_empty() {
            draw_links(buf, area, x0, col, y, app, theme);
        }

        // Scroll cue on the hero's last line
        if area.height > rows + 2 {
            let cue_y = area.bottom().saturating_sub(2);
            let style = if typed_cursor(app) {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.grey0)
            };
            set_centered(buf, area, x0, col, cue_y, "↓", style);
        }
    }
}

fn typed_subtitle(app: &App) -> String {
    let full = &app.content.profile.subtitle;
    match app.engine.typed() {
        Some(typed) => full.chars().take(typed.visible_chars()).collect(),
        None => full.clone(),
    }
}

fn typed_cursor(app: &App) -> bool {
    app.engine
        .typed()
        .map(|t| t.phase() == TypedPhase::Playing || t.cursor_on())
        .unwrap_or(false)
}

fn draw_particles(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
    let Some(field) = app.engine.particles() else {
        return;
    };
    let w = f64::from(area.width.saturating_sub(1));
    let h = f64::from(area.height.saturating_sub(1));
    for (i, p) in field.particles().iter().enumerate() {
        let x = area.x + (p.x * w).round() as u16;
        let y = area.y + (p.y * h).round() as u16;
        let glow = field.intensity(i);
        let symbol = if glow > 0.75 {
            "✦"
        } else if glow > 0.4 {
            "•"
        } else {
            "·"
        };
        if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
            cell.set_symbol(symbol);
            cell.set_style(Style::default().fg(blend(theme.grey0, theme.accent, glow)));
        }
    }
}

fn draw_gradient_name(
    buf: &mut Buffer,
    area: Rect,
    x0: u16,
    col: u16,
    y: u16,
    name: &str,
    theme: &Theme,
) {
    if y >= area.bottom() || name.is_empty() {
        return;
    }
    let len = name.chars().count() as u16;
    let start = x0 + col.saturating_sub(len) / 2;
    let denom = len.saturating_sub(1).max(1);
    for (i, ch) in name.chars().enumerate() {
        let x = start + i as u16;
        if x >= area.right() {
            break;
        }
        let t = i as f64 / f64::from(denom);
        if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
            cell.set_char(ch);
            cell.set_style(
                Style::default()
                    .fg(blend(theme.accent, theme.accent_alt, t))
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

fn draw_links(buf: &mut Buffer, area: Rect, x0: u16, col: u16, y: u16, app: &App, theme: &Theme) {
    if y >= area.bottom() {
        return;
    }
    let links = &app.content.profile.links;
    let labels: Vec<String> = links.iter().map(|l| format!("[ {} ]", l.label)).collect();
    let total: u16 = labels.iter().map(|l| layout::display_width(l) + 2).sum();
    let mut x = x0 + col.saturating_sub(total) / 2;

    for (i, label) in labels.iter().enumerate() {
        let style = if i == 0 {
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.accent_alt)
                .add_modifier(Modifier::BOLD)
        };
        let width = layout::display_width(label);
        if x + width >= area.right() {
            break;
        }
        buf.set_string(x, y, label, style);
        x += width + 2;
    }
}

fn set_centered(
    buf: &mut Buffer,
    area: Rect,
    x0: u16,
    col: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if y >= area.bottom() || text.is_empty() {
        return;
    }
    let len = layout::display_width(text);
    let x = x0 + col.saturating_sub(len) / 2;
    let max = usize::from(area.right().saturating_sub(x));
    buf.set_stringn(x, y, text, max, style);
}
