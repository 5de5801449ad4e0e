use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Focus};
use crate::config;
use crate::ui;

/// Main terminal event loop: draws the form and handles input until the user
/// quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    return Ok(());
                }
            }
        }
    }
}

/// Apply one key press to `app`. Returns `true` when the form should close.
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        _ if app.focus == Focus::Directory => match key.code {
            KeyCode::Char(c) if !c.is_control() => app.push_dir_char(c),
            KeyCode::Backspace => app.pop_dir_char(),
            KeyCode::Enter => app.focus_next(),
            _ => {}
        },
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') => app.focus_next(),
        KeyCode::Char('k') => app.focus_prev(),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_focused(),
        KeyCode::Enter => {
            if app.focus == Focus::Start {
                app.start();
            } else {
                app.toggle_focused();
            }
        }
        _ => {}
    }

    false
}
