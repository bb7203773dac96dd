//! Terminal setup and the main event loop

use crate::config::Config;
use crate::logger::Logger;
use crate::ui::core::{Action, EventHandler, EventType};
use crate::ui::register_form::RegisterForm;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the registration form until the user quits.
///
/// Returns the form so the caller can read the final submission.
pub async fn run_app(config: &Config, logger: Logger) -> Result<RegisterForm> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut form = RegisterForm::new(config, logger);
    let mut event_handler = EventHandler::new(config.ui.tick_rate_ms);

    let result = run_app_loop(&mut terminal, &mut form, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result.map(|_| form)
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    form: &mut RegisterForm,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| form.render(f))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Mouse(_)) => {
                if form.handle_event(event) == Action::Quit {
                    return Ok(());
                }
                needs_render = true;
            }
            EventType::Resize(_, _) => {
                needs_render = true;
            }
            EventType::Tick | EventType::Other => {}
        }

        if form.should_quit() {
            break;
        }
    }

    Ok(())
}
