mod anim;
mod app;
mod carousel;
mod config;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::carousel::AutoplayTimer;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Seed a config file on first run so the content is easy to edit
    if !config::exists() {
        config::save_config(&config::AppConfig::default())
            .context("failed to write default config")?;
    }
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;
    tracing::info!("starting crabfolio");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone());
    if let Ok(size) = terminal.size() {
        state.last_size = (size.width, size.height);
    }

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // The autoplay timer restarts from zero whenever the carousel moves or
    // autoplay flips, so a manual step never collides with a pending tick.
    let mut autoplay = AutoplayTimer::new(Duration::from_millis(cfg.carousel.autoplay_delay_ms));
    autoplay.sync(&state.experience.carousel, &event_tx);
    let mut synced_epoch = state.experience.carousel.epoch();

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::SubmitContact { draft } => {
                    tracing::info!(name = %draft.name, email = %draft.email, "contact message queued");
                    let done_tx = event_tx.clone();
                    tokio::spawn(async move {
                        // Stand-in for a real delivery backend
                        tokio::time::sleep(Duration::from_secs(2)).await;
                        let _ = done_tx.send(AppEvent::ContactSendComplete);
                    });
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.experience.carousel.epoch() != synced_epoch {
            autoplay.sync(&state.experience.carousel, &event_tx);
            synced_epoch = state.experience.carousel.epoch();
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
