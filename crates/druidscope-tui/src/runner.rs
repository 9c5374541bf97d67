//! Main TUI runner - entry point and event loop

use druidscope_app::config::Settings;
use druidscope_app::message::Message;
use druidscope_app::process::process_message;
use druidscope_app::signals::spawn_signal_handler;
use druidscope_app::state::AppState;
use druidscope_core::prelude::*;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use std::time::Instant;

use crate::event::{self, TickTimer};
use crate::{render, terminal};

/// Run the interactive diagram until the user quits or a signal arrives.
pub async fn run(settings: Settings) -> Result<()> {
    info!(
        "Starting on {} (icons: {}, animations: {})",
        settings.ui.initial_view, settings.ui.icons, settings.ui.animations
    );

    let mut term = terminal::enter()?;
    let mut state = AppState::with_settings(settings);

    // Messages produced off the render loop: signals and browser failures
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);
    let signals = spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, &mut msg_rx, &msg_tx);

    signals.abort();
    terminal::leave();

    result
}

fn run_loop(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
) -> Result<()> {
    let mut ticks = TickTimer::new(Instant::now());

    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll(ticks.until_next(Instant::now()))? {
            process_message(state, message, msg_tx);
        }

        // Ticks follow the clock, so held keys cannot stall animations
        for _ in 0..ticks.due(Instant::now()) {
            process_message(state, Message::Tick, msg_tx);
        }
    }

    info!("Exiting");
    Ok(())
}
