use termfolio_core::config::{KeymapConfig, UiConfig};
use termfolio_core::{AppConfig, MotionEngine, PortfolioContent};

use crate::layout;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Scroll and effect engine for the page
    pub engine: MotionEngine,
    /// Portfolio content backing every section
    pub content: PortfolioContent,
    /// UI options (chrome visibility, tick rates)
    pub ui: UiConfig,
    /// Key bindings, kept for the help overlay
    pub keys: KeymapConfig,
    /// Rows scrolled per single step
    pub scroll_step: f64,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Status message
    pub status_message: Option<String>,
    /// Last known terminal size
    size: (u16, u16),
}

impl App {
    pub fn new(config: &AppConfig, content: PortfolioContent) -> Self {
        Self {
            engine: MotionEngine::new(config.motion.engine_options()),
            content,
            ui: config.ui.clone(),
            keys: config.keymap.clone(),
            scroll_step: f64::from(config.motion.scroll_step.max(1)),
            mode: Mode::Normal,
            should_quit: false,
            pending_key: None,
            status_message: None,
            size: (0, 0),
        }
    }

    /// Re-measure the page for a terminal size, mounting the engine on the
    /// first call. Later calls preserve controller state, so one-shot
    /// effects survive a resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.size == (width, height) && self.engine.mounted() {
            return;
        }
        self.size = (width, height);

        let rows = self.page_rows(height);
        let plan = layout::measure_page(&self.content, width, rows);
        if self.engine.mounted() {
            self.engine.remeasure(plan);
        } else {
            self.engine.mount(plan);
        }
    }

    /// Terminal rows left for the page after chrome lines
    pub fn page_rows(&self, height: u16) -> u16 {
        let mut rows = height;
        if self.ui.show_progress_bar {
            rows = rows.saturating_sub(1);
        }
        if self.ui.show_status_bar {
            rows = rows.saturating_sub(1);
        }
        rows.max(1)
    }

    /// Half of the current page viewport, in rows
    pub fn half_page(&self) -> f64 {
        (self.engine.layout().viewport_rows() / 2.0).max(1.0)
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_mounts_engine_once() {
        let mut app = App::new(&AppConfig::default(), PortfolioContent::builtin());
        assert!(!app.engine.mounted());

        app.resize(80, 24);
        assert!(app.engine.mounted());
        assert!(app.engine.layout().total_rows() > 0.0);

        // Same size again is a no-op, not a remount
        app.resize(80, 24);
        assert!(app.engine.mounted());
    }

    #[test]
    fn test_page_rows_reserves_chrome() {
        let app = App::new(&AppConfig::default(), PortfolioContent::builtin());
        // Default config shows both the progress bar and the status bar
        assert_eq!(app.page_rows(24), 22);
        assert_eq!(app.page_rows(1), 1);
    }
}
