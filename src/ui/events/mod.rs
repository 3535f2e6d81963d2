// Event handling and main UI loop

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::Config;
use crate::ui::{
    NoticeModal, QuitModal,
    state::{AppState, QuitConfirmationState},
};

mod form;
mod modal;

// Event types sent from dedicated event thread to main loop
enum UiEvent {
    Input(Event), // Keyboard or other terminal events
    Tick,         // Periodic redraw
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>, tick_rate: Duration) {
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            // Calculate timeout until next tick
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break; // Main thread dropped the receiver
                }
                last_tick = Instant::now();
            }
        }
    });
}

pub fn run_ui() -> io::Result<()> {
    run_ui_with_config(&Config::default())
}

pub fn run_ui_with_config(config: &Config) -> io::Result<()> {
    // Setup terminal with alternate screen (full terminal)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::from_config(config);

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx, Duration::from_millis(config.ui.tick_rate_ms.max(1)));

    info!("board started");
    let result = run_app(&mut terminal, &mut app_state, event_rx);
    info!(projects = app_state.board.store.len(), "board closed");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        draw(terminal, state)?;

        // Block for one event, then drain the queue so key bursts land in one frame
        let first = match event_rx.recv() {
            Ok(evt) => evt,
            Err(_) => return Ok(()), // Channel closed, exit
        };

        let mut pending = vec![first];
        while let Ok(evt) = event_rx.try_recv() {
            pending.push(evt);
        }

        for evt in pending {
            if let UiEvent::Input(Event::Key(key)) = evt {
                if handle_key(key, state) {
                    return Ok(());
                }
            }
        }
    }
}

pub fn draw<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
) -> io::Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        state.viewport = area;
        state.board.render(frame, area);

        // Modals render on top of the board
        if let Some(ref notice) = state.notice {
            NoticeModal::render(frame, notice);
        }
        if let Some(ref confirmation) = state.quit_confirmation {
            QuitModal::render(frame, confirmation);
        }
    })?;
    Ok(())
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

/// Route one key press. Returns true when the app should exit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    // Ignore release/repeat reports from terminals that send them
    if key.kind != KeyEventKind::Press {
        return false;
    }

    // The notice blocks everything until dismissed
    if state.notice.is_some() {
        modal::handle_notice_key(key, state);
        return false;
    }

    if state.quit_confirmation.is_some() {
        return modal::handle_quit_key(key, state);
    }

    if is_quit_key(&key) {
        let filled_fields = state.filled_fields();
        if state.confirm_quit && filled_fields > 0 {
            state.quit_confirmation = Some(QuitConfirmationState { filled_fields });
            return false;
        }
        return true;
    }

    form::handle_form_key(key, state);
    false
}
