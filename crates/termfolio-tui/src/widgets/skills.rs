//! Skills section: category cards with counter-driven bar fills.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use termfolio_core::content::SkillCategory;
use termfolio_core::motion::Property;

use crate::app::App;
use crate::layout;
use crate::theme::{blend, Theme};
use crate::widgets::section_header;

const CARD_GAP: u16 = 2;

pub struct SkillsWidget;

impl SkillsWidget {
    pub fn render(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let col = layout::content_width(area.width).min(area.width);
        let x0 = layout::content_x(area.width);
        let needed = layout::skills_rows(&app.content, col);
        let mut y = area.y + area.height.saturating_sub(needed) / 2;

        y = section_header(buf, area, x0, col, y, "Skills", theme);

        let categories = &app.content.skills;
        if categories.is_empty() {
            return;
        }

        let cols = layout::skills_columns(col);
        let card_w = (col.saturating_sub(CARD_GAP * (cols - 1))) / cols;
        let card_h = categories
            .iter()
            .map(|c| layout::skill_card_rows(c.skills.len()))
            .max()
            .unwrap_or(3);

        // Counter targets are flattened across categories in content order
        let mut counter_idx = 0usize;
        for (i, category) in categories.iter().enumerate() {
            let grid_x = (i as u16 % cols) * (card_w + CARD_GAP);
            let grid_y = (i as u16 / cols) * (card_h + 1);
            let rect = Rect::new(x0 + grid_x, y + grid_y, card_w, card_h);
            if rect.bottom() > area.bottom() || rect.right() > area.right() {
                counter_idx += category.skills.len();
                continue;
            }
            draw_category(rect, buf, app, theme, category, counter_idx);
            counter_idx += category.skills.len();
        }
    }
}

fn draw_category(
    rect: Rect,
    buf: &mut Buffer,
    app: &App,
    theme: &Theme,
    category: &SkillCategory,
    counter_base: usize,
) {
    let title = if category.icon.is_empty() {
        format!(" {} ", category.title)
    } else {
        format!(" {} {} ", category.icon, category.title)
    };
    Block::default()
        .title(title)
        .title_style(Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.bg3))
        .render(rect, buf);

    let inner = Rect::new(
        rect.x + 2,
        rect.y + 1,
        rect.width.saturating_sub(4),
        rect.height.saturating_sub(2),
    );

    for (i, skill) in category.skills.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let value = counter_value(app, counter_base + i, skill.level);
        draw_skill_row(inner, buf, theme, y, &skill.name, value);
    }
}

/// Current animated counter value, falling back to the static level when
/// the counter was never mounted.
fn counter_value(app: &App, index: usize, level: u8) -> f64 {
    match app.engine.targets().counters.get(index) {
        Some(&target) => app.engine.value(target, Property::Fill),
        None => f64::from(level),
    }
}

fn draw_skill_row(inner: Rect, buf: &mut Buffer, theme: &Theme, y: u16, name: &str, value: f64) {
    const NAME_W: u16 = 16;
    const PCT_W: u16 = 5;

    let name_w = NAME_W.min(inner.width);
    buf.set_stringn(
        inner.x,
        y,
        name,
        name_w.into(),
        Style::default().fg(theme.fg1),
    );

    if inner.width <= NAME_W + PCT_W + 1 {
        return;
    }
    let bar_w = inner.width - NAME_W - PCT_W - 1;
    let filled = ((value / 100.0).clamp(0.0, 1.0) * f64::from(bar_w)).round() as u16;

    for i in 0..bar_w {
        let x = inner.x + NAME_W + i;
        let (symbol, style) = if i < filled {
            let t = f64::from(i) / f64::from(bar_w.max(1));
            ("█", Style::default().fg(blend(theme.accent, theme.accent_alt, t)))
        } else {
            ("░", Style::default().fg(theme.bg2))
        };
        buf.set_string(x, y, symbol, style);
    }

    let pct = format!("{:>4.0}%", value.clamp(0.0, 100.0));
    buf.set_string(
        inner.x + NAME_W + bar_w + 1,
        y,
        &pct,
        Style::default().fg(theme.grey2),
    );
}
