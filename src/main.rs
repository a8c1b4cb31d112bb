// ABOUTME: Main entry point for the MowQuote terminal quote widget
//
// Binary: mowquote
// Usage: mowquote --org <id> [--accent '#3d9970'] [COMMAND]
// - No command: launches the interactive quote widget
// - quote: one-shot quote computation without the TUI

#![allow(missing_docs)]

use anyhow::{anyhow, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use mowquote::app::{App, EventHandler};
use mowquote::cli;
use mowquote::components::WizardComponent;
use mowquote::theme::{self, Theme};

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let mut args = cli::Cli::parse();

    // Take the command out before matching so the arms can borrow the
    // remaining global args
    let result = match args.command.take() {
        Some(cli::Commands::Quote(quote_args)) => cli::quote::execute(quote_args, &args).await,
        Some(cli::Commands::Widget) | None => run_widget(&args).await,
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_widget(args: &cli::Cli) -> Result<()> {
    let org_id = args
        .org
        .as_deref()
        .ok_or_else(|| anyhow!("--org is required to launch the widget"))?;

    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow!(
            "No TTY detected. The quote widget requires a terminal.\n\
             Use the `quote` subcommand for non-interactive output."
        ));
    }

    let theme = theme::install(args.accent.as_deref());
    let component = WizardComponent::new();
    let mut app = App::new(org_id, &args.source_url, &args.endpoint)?;

    tracing::info!(org_id, endpoint = %args.endpoint, "starting quote widget");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_widget_loop(&mut app, &component, theme, &mut terminal).await;

    // Always clean up terminal using unified cleanup
    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_widget_loop(
    app: &mut App,
    component: &WizardComponent,
    theme: &Theme,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    // Startup guard: ignore key events for the first 100ms so buffered
    // keypresses cannot advance the wizard
    let startup_time = Instant::now();
    const STARTUP_GUARD_MS: u64 = 100;

    loop {
        // Spawn requested async work and apply any completions, then redraw.
        // Mutation happens only here and in the key handler below, so every
        // frame sees a consistent state.
        app.process_pending_action();
        app.drain_messages();

        terminal.draw(|frame| {
            component.render(frame, &app.state, theme);
        })?;

        if app.state.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                    tracing::debug!(
                        "Ignoring key event {:?} during startup guard period",
                        key_event.code
                    );
                    continue;
                }

                if key_event.kind == KeyEventKind::Press {
                    EventHandler::handle_key_event(key_event, &mut app.state);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    // Log to a file; a TUI must never write diagnostics to the terminal
    let log_dir = dirs::home_dir()
        .map(|home| home.join(".mowquote").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".mowquote/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "mowquote-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        // No writable log location; run without diagnostics
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mowquote=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
