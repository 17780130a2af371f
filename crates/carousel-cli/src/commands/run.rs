use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use carousel_core::AppConfig;
use carousel_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    theme::Theme,
    widgets,
};

pub fn run(config: AppConfig) -> Result<()> {
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Build state before touching the terminal so config errors print normally
    let mut app = App::new(config, Theme::default(), Instant::now())?;
    info!(slides = app.slides.len(), "Starting carousel TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Carousel"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    app.carousel.teardown();
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|frame| {
            app.update_layout(frame.area(), now);
            widgets::render(frame, app);
        })?;

        // Block only until the next animation frame or autoplay tick
        let timeout = app.poll_timeout(Instant::now());
        if let Some(event) = event_handler.next_within(timeout)? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    app.status_message = None;
                    let action = handle_key_event(key);
                    app.apply_action(action, now);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, now),
                // Layout is recomputed on the next draw
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
