//! TUI application state and logic

use crate::game::Session;
use crate::output::{Clipboard, ShareStatus, TerminalClipboard};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Type(char),
    Card(usize),
    Hint,
    Delete,
    Clear,
    Share,
    Quit,
    None,
}

impl Action {
    /// Decode a key press
    ///
    /// Letters go into the guess box, digits click cards, `?` asks for a
    /// hint, Backspace deletes, Delete clears, Ctrl-S shares and Esc or
    /// Ctrl-C quits.
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => Self::Quit,
            KeyCode::Char('s') if ctrl => Self::Share,
            KeyCode::Esc => Self::Quit,
            KeyCode::Char('?') => Self::Hint,
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                Self::Card(c as usize - '1' as usize)
            }
            KeyCode::Char(c) if !ctrl => Self::Type(c),
            KeyCode::Backspace => Self::Delete,
            KeyCode::Delete => Self::Clear,
            _ => Self::None,
        }
    }

    /// Decode a terminal event; only key presses do anything
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        match event {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::from_key(*key),
            _ => Self::None,
        }
    }
}

/// Application state
pub struct App {
    pub session: Option<Session>,
    pub share_status: ShareStatus,
    pub should_quit: bool,
}

impl App {
    /// `None` shows the "no puzzle today" screen
    #[must_use]
    pub const fn new(session: Option<Session>) -> Self {
        Self {
            session,
            share_status: ShareStatus::Idle,
            should_quit: false,
        }
    }

    /// Apply one decoded action; sharing goes through `clipboard`
    pub fn perform<C: Clipboard + ?Sized>(&mut self, action: Action, clipboard: &mut C) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        match action {
            Action::Type(c) => {
                let text = format!("{}{c}", session.state().guess);
                session.submit_guess(&text);
            }
            Action::Card(index) => session.click_card(index),
            Action::Hint => session.request_hint(),
            Action::Delete => session.delete_last(),
            Action::Clear => session.clear_guess(),
            Action::Share => {
                self.share_status = ShareStatus::from_copy(clipboard, &session.share());
                debug!("share: {:?}", self.share_status);
            }
            Action::Quit | Action::None => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut clipboard = TerminalClipboard::stdout();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        app.perform(Action::from_event(&event::read()?), &mut clipboard);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
