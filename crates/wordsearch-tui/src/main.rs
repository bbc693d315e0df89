mod app;
mod cli;
mod logging;
mod render;
mod terminal;
mod theme;

use anyhow::Result;
use app::{App, AppAction};
use clap::Parser;
use cli::Cli;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init(&log_dir)?;

    // Build the first puzzle before touching the terminal so setup errors print plainly
    let settings = cli.into_settings()?;
    let mut app = App::new(settings)?;
    tracing::info!(difficulty = %app.difficulty, "Starting word search");

    // Setup terminal, restored when the guard drops or on panic
    terminal::install_panic_hook();
    let guard = terminal::TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    // Run the app
    let result = run_app(&mut stdout, &mut app);
    drop(guard);

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Terminal loop failed");
    }
    tracing::info!(found = app.found.len(), "Exiting");
    result.map_err(Into::into)
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        render::render(stdout, app)?;

        // Handle input until the next frame is due
        let timeout = app::TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Handle Ctrl+C
                    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                        break;
                    }

                    match app.handle_key(key) {
                        AppAction::Continue => {}
                        AppAction::Quit => break,
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= app::TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
