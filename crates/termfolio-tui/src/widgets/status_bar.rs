use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            let section = app.engine.current_section().map_or("", |s| s.label());
            let pct = (app.engine.page_progress() * 100.0).round() as u8;
            let motion = if app.engine.reduced_motion() {
                " | reduced motion"
            } else {
                ""
            };
            format!(" {section} | {pct}%{motion}")
        };

        let help_hint = " j/k:scroll J/K:section h/l:cards m:motion ?:help q:quit ";
        let status_width = crate::layout::display_width(&status_text);
        let padding_len =
            area.width.saturating_sub(status_width + help_hint.len() as u16) as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey2).bg(theme.bg2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
