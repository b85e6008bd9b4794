mod about;
mod education;
mod experience;
mod footer;
mod help;
mod hero;
mod progress_bar;
mod projects;
mod skills;
mod status_bar;

pub use about::AboutWidget;
pub use education::EducationWidget;
pub use experience::ExperienceWidget;
pub use footer::FooterWidget;
pub use help::HelpWidget;
pub use hero::HeroWidget;
pub use progress_bar::ProgressBarWidget;
pub use projects::ProjectsWidget;
pub use skills::SkillsWidget;
pub use status_bar::StatusBarWidget;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::layout::HEADER_ROWS;
use crate::theme::Theme;

/// Draw a section heading with its accent underline and return the row
/// where the section body starts.
pub(crate) fn section_header(
    buf: &mut Buffer,
    area: Rect,
    x0: u16,
    col: u16,
    y: u16,
    title: &str,
    theme: &Theme,
) -> u16 {
    if y + 1 >= area.bottom() || area.width == 0 {
        return y + HEADER_ROWS;
    }
    let max = usize::from(col.min(area.width.saturating_sub(x0)));
    buf.set_stringn(
        x0,
        y,
        title,
        max,
        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
    );
    let underline = "━".repeat(title.chars().count().min(max));
    buf.set_stringn(x0, y + 1, &underline, max, Style::default().fg(theme.accent));
    y + HEADER_ROWS
}
