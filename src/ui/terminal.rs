use {
    crate::{
        format::AmountFormatter,
        forward_core::OrderKey,
        state::{State, StateMessage},
    },
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    ratatui::{backend::CrosstermBackend, Terminal},
    std::{sync::Arc, time::Duration},
    tokio::sync::{mpsc, RwLock},
};

/// What a key press asks the refresh task to do
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Send(StateMessage),
    Ignore,
}

/// Map a key to an action given the current window and order
pub fn handle_key(code: KeyCode, days: u32, order: OrderKey) -> KeyAction {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('o') => KeyAction::Send(StateMessage::SetOrder(order.next())),
        KeyCode::Char('r') => KeyAction::Send(StateMessage::Refresh { days }),
        KeyCode::Char('+') => KeyAction::Send(StateMessage::Refresh {
            days: days.saturating_add(1),
        }),
        KeyCode::Char('-') if days > 1 => KeyAction::Send(StateMessage::Refresh { days: days - 1 }),
        _ => KeyAction::Ignore,
    }
}

/// Run the TUI event loop
///
/// Handles keyboard input and redraws every `refresh_interval`.
pub async fn run_ui(
    state: Arc<RwLock<State>>,
    tx: mpsc::Sender<StateMessage>,
    formatter: AmountFormatter,
    refresh_interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    crossterm::terminal::enable_raw_mode()?;
    enter_screen(&mut std::io::stdout(), crossterm::terminal::disable_raw_mode)?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, &state, &tx, &formatter, refresh_interval).await;

    // Restore terminal state even when the loop failed
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()?;
    result
}

/// Switch to the alternate screen; raw mode is undone if that fails
fn enter_screen<W: std::io::Write>(
    out: &mut W,
    restore_raw_mode: impl FnOnce() -> std::io::Result<()>,
) -> std::io::Result<()> {
    if let Err(e) = crossterm::execute!(out, crossterm::terminal::EnterAlternateScreen, crossterm::cursor::Hide) {
        if let Err(restore) = restore_raw_mode() {
            log::warn!("Failed to disable raw mode: {}", restore);
        }
        return Err(e);
    }
    Ok(())
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &Arc<RwLock<State>>,
    tx: &mpsc::Sender<StateMessage>,
    formatter: &AmountFormatter,
    refresh_interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        {
            let state = state.read().await;
            terminal.draw(|f| {
                let area = f.area();
                crate::ui::layout::render_layout(f, area, &state, formatter)
            })?;
        }

        if !event::poll(refresh_interval)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let (days, order) = {
            let state = state.read().await;
            (state.days, state.order)
        };

        match handle_key(key.code, days, order) {
            KeyAction::Quit => break,
            KeyAction::Send(message) => {
                if let Err(e) = tx.send(message).await {
                    log::warn!("Failed to send message to refresh task: {}", e);
                }
            }
            KeyAction::Ignore => {}
        }
    }

    if let Err(e) = tx.send(StateMessage::Shutdown).await {
        log::debug!("Refresh task already stopped: {}", e);
    }
    Ok(())
}
