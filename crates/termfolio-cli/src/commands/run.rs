use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use termfolio_core::motion::NavCommand;
use termfolio_core::{AppConfig, PortfolioContent};
use termfolio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    page::PageView,
    themes::load_theme,
    widgets::{HelpWidget, ProgressBarWidget, StatusBarWidget},
};

pub fn run(config: &AppConfig) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Load page content (built-in portfolio unless overridden)
    let content = PortfolioContent::load(config.content_path().as_deref())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Termfolio")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    // Create app state and mount the page at the current size
    let mut app = App::new(config, content);
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    info!(
        "Session started ({}x{}, theme '{}')",
        size.width, size.height, config.ui.theme.name
    );

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.motion.animation_fps);

    // Track if we need high frame rate for running animations.
    // This is checked at the END of each iteration to determine NEXT
    // iteration's tick rate.
    let mut needs_fast_update = true;
    let mut last_frame = Instant::now();

    // Main loop
    loop {
        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            let mut constraints = Vec::new();
            if app.ui.show_progress_bar {
                constraints.push(Constraint::Length(1));
            }
            constraints.push(Constraint::Min(1));
            if app.ui.show_status_bar {
                constraints.push(Constraint::Length(1));
            }
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(size);

            let mut idx = 0;
            if app.ui.show_progress_bar {
                ProgressBarWidget::render(frame, rows[idx], &app, &theme);
                idx += 1;
            }
            PageView::render(frame, rows[idx], &app, &theme);
            idx += 1;
            if app.ui.show_status_bar {
                StatusBarWidget::render(frame, rows[idx], &app, &theme);
            }

            // Render the help overlay on top
            if app.mode == Mode::Help {
                HelpWidget::render(frame, &app.keys, &theme);
            }
        })?;

        // Handle events (use faster tick rate while animations run)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(width, height) => {
                    app.resize(width, height);
                }
                AppEvent::Tick => {}
            }
        }

        // Advance the engine by real elapsed time, whatever woke us
        let dt = last_frame.elapsed();
        last_frame = Instant::now();
        app.engine.tick(dt);

        // Update fast update flag for next iteration
        needs_fast_update = app.engine.needs_update();

        if app.should_quit {
            break;
        }
    }

    app.engine.unmount();
    info!("Session ended");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    // Any real input replaces a lingering status message
    if action != Action::None {
        app.clear_status();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => {
            app.engine.scroll_by(app.scroll_step);
        }
        Action::ScrollUp => {
            app.engine.scroll_by(-app.scroll_step);
        }
        Action::HalfPageDown => {
            app.engine.scroll_by(app.half_page());
        }
        Action::HalfPageUp => {
            app.engine.scroll_by(-app.half_page());
        }
        Action::JumpToTop => {
            if app.engine.reduced_motion() {
                app.engine.jump_to(0.0);
            } else {
                app.engine.scroll_to(0.0);
            }
        }
        Action::JumpToBottom => {
            let bottom = app.engine.layout().max_scroll();
            if app.engine.reduced_motion() {
                app.engine.jump_to(bottom);
            } else {
                app.engine.scroll_to(bottom);
            }
        }
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextSection => {
            app.engine.step_section(1);
        }
        Action::PrevSection => {
            app.engine.step_section(-1);
        }
        Action::NextCard => {
            app.engine.command(NavCommand::NextCard);
        }
        Action::PrevCard => {
            app.engine.command(NavCommand::PrevCard);
        }
        Action::ActivateDot(index) => {
            app.engine.command(NavCommand::ActivateDot(index));
        }
        Action::Refresh => {
            app.engine.refresh();
            app.set_status("Scroll effects replayed");
        }
        Action::ToggleReducedMotion => {
            let on = app.engine.toggle_reduced_motion();
            app.set_status(if on {
                "Reduced motion on"
            } else {
                "Reduced motion off"
            });
        }
        Action::Help => {
            app.mode = Mode::Help;
        }
        Action::ExitOverlay => {
            app.mode = Mode::Normal;
        }
        Action::None => {}
    }
}
