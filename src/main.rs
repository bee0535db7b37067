//! Franz signup - terminal signup form
//!
//! A Ratatui-based form that collects Franz account details, validates them
//! and prints the accepted values as JSON once the terminal is restored.

mod app;
mod config;
mod handler;
mod i18n;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::{App, Outcome};
use config::SignupConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use handler::AcceptingHandler;
use i18n::Catalog;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "franz_signup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SignupConfig::load()?;
    let catalog = match (config.locale.as_deref(), config.locales_dir()) {
        (Some(locale), Some(dir)) => Catalog::load_or_default(&dir, locale),
        _ => Catalog::default(),
    };
    tracing::info!(
        "Starting signup form with locale {}",
        catalog.locale().unwrap_or("default")
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(
        &config,
        Box::new(catalog),
        Box::new(AcceptingHandler::default()),
    );
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    let outcome = app.take_outcome().unwrap_or(Outcome::Cancelled);
    println!("{}", serde_json::to_string(&outcome)?);

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // The loading state is on screen; now let the handler run
        if app.has_pending_submission() {
            app.process_submission().await;
            if app.should_quit() {
                return Ok(());
            }
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.cancel();
                        return Ok(());
                    }

                    app.handle_key(key);
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
