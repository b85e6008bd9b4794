//! Footer section: contact heading, link row, and closing note.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::app::App;
use crate::theme::Theme;

pub struct FooterWidget;

impl FooterWidget {
    pub fn render(area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
        if area.width == 0 || area.height < 3 {
            return;
        }
        let footer = &app.content.footer;
        let mut y = area.y + 1;

        set_centered(
            buf,
            area,
            y,
            &footer.heading,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
        y += 2;

        if !footer.links.is_empty() && y < area.bottom() {
            let labels: Vec<&str> = footer.links.iter().map(|l| l.label.as_str()).collect();
            set_centered(
                buf,
                area,
                y,
                &labels.join("  ·  "),
                Style::default().fg(theme.accent_alt),
            );
            y += 2;
        }

        if !footer.note.is_empty() && y < area.bottom() {
            set_centered(buf, area, y, &footer.note, Style::default().fg(theme.grey1));
        }
    }
}

fn set_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let width = crate::layout::display_width(text);
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_stringn(x, y, text, usize::from(area.width), style);
}
