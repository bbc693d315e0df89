use crate::render;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::panic;

/// Raw mode, alternate screen and mouse capture for the lifetime of the value.
///
/// Dropping the guard hands the terminal back, including when the game loop
/// returns an error or unwinds from a panic.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Put the terminal back into its normal state.
///
/// Every step runs even if an earlier one fails; the first error is returned.
pub fn restore() -> io::Result<()> {
    let steps: [fn() -> io::Result<()>; 3] = [
        || render::clear(&mut io::stdout()),
        disable_raw_mode,
        || execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show),
    ];
    first_error(steps.iter().map(|step| step()))
}

/// Restore the terminal before the panic message is printed
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        tracing::error!(%info, "Panicked");
        default_hook(info);
    }));
}

/// Drain every result and keep the first failure
fn first_error(results: impl Iterator<Item = io::Result<()>>) -> io::Result<()> {
    let mut first = None;
    for result in results {
        if let Err(e) = result {
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}
