//! Terminal lifecycle: alternate-screen setup, teardown, and the panic hook.
//!
//! Teardown has to run on every exit path, panics included, or the user's
//! shell is left in raw mode with a hidden cursor. The teardown sequence
//! therefore lives in a free function that the panic hook can call without
//! holding the [`Tui`] value.

use std::io::{self, Stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::AppConfig;
use crate::error::Result;

/// Whether the session should capture mouse events. Off unless the config
/// asks for it; `--no-mouse` wins by forcing the setting to `Some(false)`
/// before this is consulted.
pub fn mouse_enabled(config: &AppConfig) -> bool {
    config.general.mouse.unwrap_or(false)
}

/// Alternate-screen session over stdout.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
}

impl Tui {
    /// Enter raw mode and the alternate screen, with mouse capture per the
    /// `general.mouse` setting.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mouse = mouse_enabled(config);
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal, mouse })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Hand the screen back to the shell.
    pub fn restore(&mut self) -> Result<()> {
        if self.mouse {
            execute!(self.terminal.backend_mut(), DisableMouseCapture)?;
        }
        teardown()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Leave raw mode and the alternate screen on raw stdout. Shared between
/// the normal restore path and the panic hook.
fn teardown() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that tears the screen down (best effort, errors have
/// nowhere to go), logs the panic, then defers to the previous hook.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = teardown();
        tracing::error!(panic = %info, "panic");
        previous(info);
    }));
}
