//! coversheet-demo - half and quarter cover sheets over a terminal screen.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Sheet presentation logic (see `coversheet_tui::sheet`).
//! - Configuration parsing (see `coversheet_config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - Logs go to a file, never to the terminal.

use anyhow::Result;
use clap::Parser;
use coversheet_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use coversheet_tui::action::Action;
use coversheet_tui::app::App;
use coversheet_tui::cli::Cli;
use coversheet_tui::runtime::{config::load_sheet_config, terminal::TerminalGuard};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tokio_util::task::TaskTracker;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "coversheet-demo.log");
    // _log_guard must live for the whole of main() so buffered logs are flushed.
    let (writer, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    let config = load_sheet_config(&cli)?;
    tracing::info!(
        reveal_ms = config.reveal_delay.as_millis() as u64,
        dismiss_ms = config.dismiss_delay.as_millis() as u64,
        theme = %config.theme,
        "Starting coversheet-demo"
    );

    let terminal_guard = TerminalGuard::enter(cli.no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let mut app = App::new(config, tx.clone());

    let task_tracker = TaskTracker::new();
    task_tracker.spawn(forward_terminal_events(tx.clone(), terminal_guard.mouse_enabled()));

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                if matches!(action, Action::Quit) {
                    tracing::info!("Quit requested");
                    break;
                }
                tracing::debug!(?action, "Handling action");
                app.update(action, Instant::now());
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick, Instant::now());
            }
        }
    }

    // Closing the channel ends the input task on its next event.
    drop(app);
    drop(tx);
    drop(rx);
    task_tracker.close();

    terminal.show_cursor()?;
    drop(terminal_guard);
    Ok(())
}

/// Forward crossterm events into the action channel until it closes.
///
/// Keys and resizes wait for channel space; mouse events are dropped when
/// the channel is full.
async fn forward_terminal_events(tx: Sender<Action>, mouse_enabled: bool) {
    let mut reader = EventStream::new();
    while let Some(event_result) = reader.next().await {
        let event = match event_result {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "Terminal event stream failed");
                break;
            }
        };

        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
            Event::Resize(width, height) => Action::Resize(width, height),
            Event::Mouse(mouse) if mouse_enabled => {
                match tx.try_send(Action::Mouse(mouse)) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
                continue;
            }
            _ => continue,
        };

        if tx.send(action).await.is_err() {
            break;
        }
    }
}
