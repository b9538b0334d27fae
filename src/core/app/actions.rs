use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use tracing::info;

use super::{App, ContentComponent, Screen};

/// Everything a session adapter can deliver to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    SplashElapsed,
    Tick,
    Disconnect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppOutcome {
    /// Keep going; the adapter draws a fresh frame.
    Continue,
    /// Keep going; nothing visible changed, so no frame is needed.
    Unchanged,
    /// The user asked to leave.
    Quit,
    /// The transport went away.
    Disconnected,
}

impl App {
    pub fn handle_event(&mut self, event: SessionEvent) -> AppOutcome {
        match event {
            SessionEvent::Resize { width, height } => {
                if width == 0 || height == 0 {
                    return AppOutcome::Unchanged;
                }
                self.set_geometry(width, height);
                AppOutcome::Continue
            }
            SessionEvent::SplashElapsed => {
                self.mark_splash_elapsed();
                AppOutcome::Continue
            }
            SessionEvent::Tick => {
                if self.nav.screen != Screen::Splash {
                    return AppOutcome::Unchanged;
                }
                self.spinner.tick();
                AppOutcome::Continue
            }
            SessionEvent::Disconnect => {
                info!("session disconnected");
                AppOutcome::Disconnected
            }
            SessionEvent::Key(key) => self.handle_key(key),
            SessionEvent::Mouse(mouse) => {
                if self.nav.screen != Screen::Main {
                    return AppOutcome::Unchanged;
                }
                let moved = match &mut self.component {
                    ContentComponent::List(list) => list.handle_mouse(&mouse),
                    ContentComponent::Document(viewport) => viewport.handle_mouse(&mouse),
                    ContentComponent::Static => false,
                };
                if moved {
                    AppOutcome::Continue
                } else {
                    AppOutcome::Unchanged
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> AppOutcome {
        if key.kind == KeyEventKind::Release {
            return AppOutcome::Unchanged;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("session quit");
            return AppOutcome::Quit;
        }
        if self.nav.screen != Screen::Main {
            return AppOutcome::Unchanged;
        }

        // Navigation keys win over anything the content component would do.
        match key.code {
            KeyCode::Char('q') => {
                info!("session quit");
                return AppOutcome::Quit;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.previous_tab();
                return AppOutcome::Continue;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.next_tab();
                return AppOutcome::Continue;
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if let Some(n) = ch.to_digit(10) {
                    if n >= 1 {
                        self.select_tab(n as usize - 1);
                    }
                }
                return AppOutcome::Continue;
            }
            _ => {}
        }

        match &mut self.component {
            ContentComponent::List(list) => {
                list.handle_key(&key);
            }
            ContentComponent::Document(viewport) => {
                viewport.handle_key(&key);
            }
            ContentComponent::Static => {}
        }
        AppOutcome::Continue
    }
}
