use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::admin::{Button, Msg, Template};

use super::app::{App, Focus};
use super::{keys, modal};

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_responses();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                Event::Paste(text) => handle_paste(app, text),
                _ => {}
            }
        }
    }
}

fn handle_paste(app: &mut App, text: String) {
    if let Some(m) = app.modal.as_mut() {
        modal::paste_into_modal(m, &text);
        return;
    }
    if app.focus == Focus::Editor {
        app.dispatch(Msg::Paste(text.replace("\r\n", "\n")));
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    if handle_global_key(app, key) {
        return;
    }

    match app.focus {
        Focus::Files => handle_files_key(app, key),
        Focus::Editor => {
            if key.code == KeyCode::Esc {
                app.focus = Focus::Files;
            } else if let Some(input) = keys::to_key_input(key) {
                app.dispatch(Msg::Key(input));
            }
        }
    }
}

/// Shortcuts that work regardless of focus. Returns true when consumed.
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('q') if ctrl => app.quit = true,
        KeyCode::F(5) => app.dispatch(Msg::Button(Button::Refresh)),
        KeyCode::Char('b') if ctrl => app.dispatch(Msg::Button(Button::Build)),
        KeyCode::Char('u') if ctrl => app.request_upload(),
        KeyCode::Char('y') if ctrl => app.copy(),
        KeyCode::Char('l') if alt => app.dispatch(Msg::Insert(Template::Link)),
        KeyCode::Char('i') if alt => app.dispatch(Msg::Insert(Template::Image)),
        KeyCode::Char('n') if alt => app.dispatch(Msg::Insert(Template::Note)),
        _ => return false,
    }
    true
}

fn handle_files_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if ctrl => app.dispatch(Msg::Save),
        KeyCode::Up | KeyCode::Char('k') => app.move_file_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_file_cursor(1),
        KeyCode::PageUp => app.move_file_cursor(-10),
        KeyCode::PageDown => app.move_file_cursor(10),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Tab | KeyCode::Right => app.focus = Focus::Editor,
        KeyCode::Char('s') => app.dispatch(Msg::Button(Button::Save)),
        KeyCode::Char('b') => app.dispatch(Msg::Button(Button::Build)),
        KeyCode::Char('r') => app.dispatch(Msg::Button(Button::Refresh)),
        KeyCode::Char('u') => app.request_upload(),
        KeyCode::Char('q') => app.quit = true,
        _ => {}
    }
}
