//! Session adapter: connects one terminal session to an [`App`].
//!
//! The process is started per connection with the remote PTY as its
//! terminal (for example as an SSH `ForceCommand`), so the transport and
//! authentication live outside this crate. The adapter turns terminal
//! input, resize reports and timers into [`SessionEvent`]s, applies them one
//! at a time and draws a frame after each.

use std::{
    error::Error,
    io::{self, IsTerminal},
    time::Duration,
};

use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::app::{App, AppOutcome, SessionEvent};
use crate::core::config::Config;
use crate::ui::renderer::ui;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Disconnected,
    /// Every event source has gone away.
    Closed,
}

pub type SessionTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Run a full interactive session on the process's terminal.
pub async fn run(mut app: App, config: &Config) -> Result<SessionEnd, Box<dyn Error>> {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        eprintln!("No active PTY required.");
        return Err("no terminal attached to the session".into());
    }

    let mut terminal = setup_terminal()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    match terminal::size() {
        Ok((width, height)) if width > 0 && height > 0 => {
            info!(width, height, "session started");
            let _ = tx.send(SessionEvent::Resize { width, height });
        }
        _ => info!("session started without geometry"),
    }

    spawn_input_pump(tx.clone(), cancel.clone());
    spawn_splash_timer(tx.clone(), config.splash_duration(), cancel.clone());
    spawn_ticker(tx, config.tick_interval(), cancel.clone());

    let result = drive(&mut app, &mut terminal, &mut rx).await;
    cancel.cancel();
    restore_terminal(&mut terminal)?;

    let end = result?;
    info!(?end, "session ended");
    Ok(end)
}

/// Apply events in arrival order, drawing a frame after each one that
/// changed something.
pub async fn drive<B: Backend>(
    app: &mut App,
    terminal: &mut Terminal<B>,
    rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> io::Result<SessionEnd> {
    terminal.draw(|f| ui(f, app))?;
    while let Some(event) = rx.recv().await {
        match app.handle_event(event) {
            AppOutcome::Continue => {
                terminal.draw(|f| ui(f, app))?;
            }
            AppOutcome::Unchanged => {}
            AppOutcome::Quit => return Ok(SessionEnd::Quit),
            AppOutcome::Disconnected => return Ok(SessionEnd::Disconnected),
        }
    }
    Ok(SessionEnd::Closed)
}

/// Map a raw terminal event to a session event, dropping the ones the
/// state machine has no use for.
pub fn translate(event: Event) -> Option<SessionEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(SessionEvent::Key(key)),
        Event::Mouse(mouse) => Some(SessionEvent::Mouse(mouse)),
        Event::Resize(width, height) => Some(SessionEvent::Resize { width, height }),
        _ => None,
    }
}

fn spawn_input_pump(tx: mpsc::UnboundedSender<SessionEvent>, cancel: CancellationToken) {
    tokio::task::spawn_blocking(move || {
        while !cancel.is_cancelled() {
            let ready = match event::poll(INPUT_POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(err) => {
                    warn!(%err, "terminal input failed");
                    let _ = tx.send(SessionEvent::Disconnect);
                    return;
                }
            };
            if !ready {
                continue;
            }
            match event::read() {
                Ok(raw) => {
                    if let Some(event) = translate(raw) {
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    warn!(%err, "terminal input failed");
                    let _ = tx.send(SessionEvent::Disconnect);
                    return;
                }
            }
        }
    });
}

fn spawn_splash_timer(
    tx: mpsc::UnboundedSender<SessionEvent>,
    delay: Duration,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(delay) => {
                debug!("splash timer elapsed");
                let _ = tx.send(SessionEvent::SplashElapsed);
            }
        }
    });
}

fn spawn_ticker(
    tx: mpsc::UnboundedSender<SessionEvent>,
    period: Duration,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {
                    if tx.send(SessionEvent::Tick).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

fn setup_terminal() -> Result<SessionTerminal, Box<dyn Error>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    undo_on_err(
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture),
        || {
            let _ = disable_raw_mode();
        },
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = undo_on_err(Terminal::new(backend), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Run `undo` if a setup step failed, so a half-configured terminal is not
/// left behind.
fn undo_on_err<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

fn restore_terminal(terminal: &mut SessionTerminal) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
