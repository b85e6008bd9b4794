use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use termfolio_core::config::KeymapConfig;

use crate::theme::Theme;

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, keys: &KeymapConfig, theme: &Theme) {
        let area = frame.area();

        let rows = bindings(keys);
        let popup_width = 54u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<14}", truncate_str(key, 14)),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(desc.clone(), Style::default().fg(theme.fg1)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press ? or Esc to close",
                Style::default().fg(theme.grey1),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Rows of (key, description) built from the active keymap, with the
/// hardcoded alternates spelled out.
fn bindings(keys: &KeymapConfig) -> Vec<(String, String)> {
    vec![
        (
            format!("{}/{} ↓/↑", keys.scroll_down, keys.scroll_up),
            "scroll down / up".into(),
        ),
        (
            format!("{}/{}", keys.half_page_down, keys.half_page_up),
            "half page down / up (PgDn/PgUp)".into(),
        ),
        (
            format!("gg {} / {}", keys.jump_to_top, keys.jump_to_bottom),
            "top / bottom (Home/End)".into(),
        ),
        (
            format!("{}/{} Tab", keys.next_section, keys.prev_section),
            "next / previous section".into(),
        ),
        (
            format!("{}/{} →/←", keys.next_card, keys.prev_card),
            "next / previous project".into(),
        ),
        ("1..9".into(), "center an education entry".into()),
        (keys.refresh.clone(), "replay scroll reveals".into()),
        (keys.toggle_motion.clone(), "toggle reduced motion".into()),
        (keys.help.clone(), "toggle this overlay".into()),
        (
            format!("{} Ctrl+C", keys.quit),
            "quit".into(),
        ),
    ]
}

/// Center a fixed-size rect inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Truncate a string to max length with ellipsis.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
