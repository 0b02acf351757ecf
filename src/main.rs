mod app;
mod carousel;
mod cli;
mod error;
mod form;
mod generator;
mod insights;
mod logging;
mod models;
mod notify;
mod services;
mod theme;
mod ui;
mod utils;
mod wizard;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use app::{App, Command};
use cli::{CliArgs, CliConfig};
use services::AppEvent;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_args(CliArgs::parse()).context("invalid configuration")?;
    logging::init(&config.log_file, &config.log_level).context("failed to set up logging")?;

    let runtime = Runtime::new().context("failed to start async runtime")?;
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app, &runtime, tx, rx);

    // Restore terminal
    stdout().execute(DisableBracketedPaste)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "ui loop exited with error");
    }
    tracing::info!("listing-tui exiting");
    result.context("terminal I/O failed")
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runtime: &Runtime,
    tx: UnboundedSender<AppEvent>,
    mut rx: UnboundedReceiver<AppEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            let command = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Paste(text) => {
                    app.handle_paste(&text);
                    None
                }
                _ => None,
            };
            if let Some(command) = command {
                dispatch(command, app, runtime, &tx);
            }
        }

        // Apply finished background work
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn dispatch(command: Command, app: &App, runtime: &Runtime, tx: &UnboundedSender<AppEvent>) {
    let config = app.services.clone();
    match command {
        Command::Generate(post) => services::spawn_generation(runtime.handle(), post, config, tx.clone()),
        Command::Export(request) => services::spawn_export(runtime.handle(), request, config, tx.clone()),
    }
}
