mod app;
mod components;
mod config;
mod error;
mod event;
mod handler;
mod logging;
mod search;
mod shell;
mod status;
mod theme;
mod tui;
mod ui;
mod vfs;
mod workspace;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::App;
use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::tui::{install_panic_hook, Tui};

/// A VSCode-styled portfolio IDE for the terminal.
#[derive(Parser, Debug)]
#[command(name = "idefolio", version, about)]
struct Cli {
    /// Path to a JSON seed file describing the virtual workspace
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Path to a TOML config file (overrides the default search locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color scheme: "dark" or "light"
    #[arg(long)]
    theme: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(scheme) = cli.theme {
        config.theme.scheme = Some(scheme);
    }
    if cli.no_mouse {
        config.general.mouse = Some(false);
    }

    let seed = match &cli.seed {
        Some(path) => vfs::seed::load_seed_file(path)?,
        None => vfs::seed::default_seed(),
    };

    let colors = theme::resolve_theme(&config.theme);
    let mut app = App::new(&config, &seed, colors)?;

    install_panic_hook();

    let mut tui = Tui::new(&config)?;
    let mut events = EventHandler::new(Duration::from_millis(config.tick_ms()));

    tracing::info!(
        tick_ms = config.tick_ms(),
        mouse = tui::mouse_enabled(&config),
        "starting"
    );

    loop {
        tui.terminal_mut().draw(|frame| {
            ui::render(&mut app, frame);
        })?;

        match events.next().await? {
            Event::Key(key) => handler::handle_key_event(&mut app, key),
            Event::Tick => app.tick(),
            Event::Mouse(_) => {}
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    tui.restore()?;
    Ok(())
}
