//! One-row page progress bar pinned above the status bar. The fill is
//! read from the animator so it trails the scroll with the same scrub
//! smoothing as the section effects.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;

use termfolio_core::motion::Property;

use crate::app::App;
use crate::theme::{blend, Theme};

pub struct ProgressBarWidget;

impl ProgressBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let fill = app
            .engine
            .progress_bar()
            .map_or_else(|| app.engine.page_progress(), |t| app.engine.value(t, Property::Fill))
            .clamp(0.0, 1.0);
        let filled = (fill * f64::from(area.width)).round() as u16;

        let buf = frame.buffer_mut();
        for x in 0..area.width {
            let (glyph, style) = if x < filled {
                let t = f64::from(x) / f64::from(area.width.max(1));
                ("━", Style::default().fg(blend(theme.accent, theme.accent_alt, t)))
            } else {
                ("─", Style::default().fg(theme.bg2))
            };
            buf.set_string(area.x + x, area.y, glyph, style.bg(theme.bg0));
        }
    }
}
