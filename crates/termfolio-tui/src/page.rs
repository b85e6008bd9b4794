//! Page compositor
//!
//! Renders each visible section into an off-screen buffer, then blits the
//! visible row range onto the frame. Scroll position stays continuous all
//! the way through the engine; rounding to terminal cells happens here,
//! at the last step.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::Frame;

use termfolio_core::motion::{Property, SectionId, TargetId};

use crate::app::App;
use crate::theme::Theme;
use crate::widgets::{
    AboutWidget, EducationWidget, ExperienceWidget, FooterWidget, HeroWidget, ProjectsWidget,
    SkillsWidget,
};

/// Reveal offsets are animated in tenths of a row so the cell grid can
/// still show a couple of discrete steps of slide-in.
const OFFSET_UNITS_PER_ROW: f64 = 10.0;

pub struct PageView;

impl PageView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        fill_bg(frame.buffer_mut(), area, theme.bg0);

        if area.width == 0 || area.height == 0 || !app.engine.mounted() {
            return;
        }

        let pos = app.engine.pos();
        let extents: Vec<_> = app.engine.layout().sections().to_vec();

        for extent in extents {
            // A pinned section holds at the viewport top for its pin span,
            // then continues scrolling.
            let hold = pos.min(extent.top + extent.pin_span);
            let screen_top = extent.top.max(hold) - pos;

            if screen_top >= f64::from(area.height) || screen_top + extent.height <= 0.0 {
                continue;
            }

            let (alpha, rise) = section_fx(app, extent.id);
            if alpha <= 0.01 {
                continue;
            }

            let rows = extent.height.max(1.0) as u16;
            let section_area = Rect::new(0, 0, area.width, rows);
            let mut section_buf = Buffer::empty(section_area);
            fill_bg(&mut section_buf, section_area, theme.bg0);

            render_section(extent.id, section_area, &mut section_buf, app, theme);

            let top = (screen_top + rise).round() as i32;
            for sy in 0..rows {
                copy_row(
                    frame.buffer_mut(),
                    &section_buf,
                    sy,
                    i32::from(area.y) + top + i32::from(sy),
                    i32::from(area.x),
                    area,
                    alpha,
                    theme,
                );
            }
        }
    }
}

fn render_section(id: SectionId, area: Rect, buf: &mut Buffer, app: &App, theme: &Theme) {
    match id {
        SectionId::Hero => HeroWidget::render(area, buf, app, theme),
        SectionId::About => AboutWidget::render(area, buf, app, theme),
        SectionId::Skills => SkillsWidget::render(area, buf, app, theme),
        SectionId::Projects => ProjectsWidget::render(area, buf, app, theme),
        SectionId::Experience => ExperienceWidget::render(area, buf, app, theme),
        SectionId::Education => EducationWidget::render(area, buf, app, theme),
        SectionId::Footer => FooterWidget::render(area, buf, app, theme),
    }
}

/// Section-level fade and rise driven by the engine: the hero follows the
/// mount intro, every other section follows its reveal target.
fn section_fx(app: &App, id: SectionId) -> (f64, f64) {
    let target = match id {
        SectionId::Hero => app.engine.targets().hero,
        _ => reveal_target(app, id),
    };
    let Some(target) = target else {
        return (1.0, 0.0);
    };
    let alpha = app.engine.value(target, Property::Opacity);
    let rise = app.engine.value(target, Property::OffsetY) / OFFSET_UNITS_PER_ROW;
    (alpha, rise)
}

fn reveal_target(app: &App, id: SectionId) -> Option<TargetId> {
    app.engine
        .targets()
        .reveals
        .iter()
        .find(|(section, _)| *section == id)
        .map(|(_, target)| *target)
}

/// Paint a solid background over an area.
pub(crate) fn fill_bg(buf: &mut Buffer, area: Rect, color: Color) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.reset();
                cell.set_style(Style::default().bg(color));
            }
        }
    }
}

/// Copy one row of `src` into `dst`, offset and clipped, fading both
/// foreground and background toward the theme background. Widgets use the
/// same primitive for card shears, so fades compose multiplicatively.
#[allow(clippy::too_many_arguments)]
pub(crate) fn copy_row(
    dst: &mut Buffer,
    src: &Buffer,
    src_y: u16,
    dst_y: i32,
    dst_x: i32,
    clip: Rect,
    alpha: f64,
    theme: &Theme,
) {
    if dst_y < i32::from(clip.top()) || dst_y >= i32::from(clip.bottom()) {
        return;
    }
    let src_area = src.area;
    if src_y >= src_area.height {
        return;
    }

    for sx in 0..src_area.width {
        let x = dst_x + i32::from(sx);
        if x < i32::from(clip.left()) || x >= i32::from(clip.right()) {
            continue;
        }
        let Some(src_cell) = src.cell(Position::new(src_area.x + sx, src_area.y + src_y)) else {
            continue;
        };
        let Some(dst_cell) = dst.cell_mut(Position::new(x as u16, dst_y as u16)) else {
            continue;
        };

        *dst_cell = src_cell.clone();
        if alpha < 0.999 {
            let style = dst_cell.style();
            let mut faded = style;
            if let Some(fg) = style.fg {
                faded = faded.fg(theme.fade(fg, alpha));
            }
            if let Some(bg) = style.bg {
                faded = faded.bg(theme.fade(bg, alpha));
            }
            dst_cell.set_style(faded);
        }
    }
}
