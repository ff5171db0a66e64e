use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::admin::{Msg, Prompt};

use super::app::App;
use super::input::Input;

#[derive(Debug)]
pub(super) enum ModalKind {
    Confirm(Prompt),
    PickUpload,
}

#[derive(Debug)]
pub(super) struct Modal {
    pub(super) kind: ModalKind,
    pub(super) input: Input,
    pub(super) error: Option<String>,
}

impl Modal {
    pub(super) fn confirm(prompt: Prompt) -> Self {
        Self {
            kind: ModalKind::Confirm(prompt),
            input: Input::default(),
            error: None,
        }
    }

    pub(super) fn pick_upload() -> Self {
        Self {
            kind: ModalKind::PickUpload,
            input: Input::default(),
            error: None,
        }
    }

    fn title(&self) -> &'static str {
        match self.kind {
            ModalKind::Confirm(_) => "Confirm",
            ModalKind::PickUpload => "Upload image",
        }
    }
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 80);
    let h = 8.min(area.height);
    let box_area = Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);
    let block = Block::default().borders(Borders::ALL).title(modal.title());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match &modal.kind {
        ModalKind::Confirm(prompt) => {
            let lines = vec![
                Line::from(prompt.text()),
                Line::from(""),
                Line::styled("Enter/y: yes   Esc/n: no", Style::default().fg(Color::Gray)),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }

        ModalKind::PickUpload => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Min(0),
                ])
                .split(inner);

            frame.render_widget(
                Paragraph::new("Local file (png, jpg, gif, webp, svg, pdf):"),
                parts[0],
            );
            frame.render_widget(
                Paragraph::new(modal.input.buf.as_str())
                    .block(Block::default().borders(Borders::ALL).title("Path")),
                parts[1],
            );
            if let Some(err) = modal.error.as_deref() {
                frame.render_widget(
                    Paragraph::new(err)
                        .style(Style::default().fg(Color::Red))
                        .wrap(Wrap { trim: false }),
                    parts[2],
                );
            }

            let cursor_x = parts[1].x + 1 + modal.input.cursor as u16;
            let max_x = parts[1].x + parts[1].width.saturating_sub(2);
            frame.set_cursor_position((cursor_x.min(max_x), parts[1].y + 1));
        }
    }
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };

    match modal.kind {
        ModalKind::Confirm(_) => {
            let answer = match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Some(false),
                _ => None,
            };
            if let Some(yes) = answer {
                app.modal = None;
                app.dispatch(Msg::Confirmed(yes));
            }
        }

        ModalKind::PickUpload => match key.code {
            KeyCode::Esc => {
                app.modal = None;
                app.dispatch(Msg::Upload(None));
            }
            KeyCode::Enter => {
                let raw = modal.input.buf.clone();
                match app.submit_upload(&raw) {
                    Ok(()) => app.modal = None,
                    Err(err) => {
                        if let Some(m) = app.modal.as_mut() {
                            m.error = Some(err);
                        }
                    }
                }
            }
            KeyCode::Backspace => modal.input.backspace(),
            KeyCode::Delete => modal.input.delete(),
            KeyCode::Left => modal.input.move_left(),
            KeyCode::Right => modal.input.move_right(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                modal.input.insert_char(c);
                modal.error = None;
            }
            _ => {}
        },
    }
}

/// Bracketed paste into the picker's path field.
pub(super) fn paste_into_modal(modal: &mut Modal, text: &str) {
    if matches!(modal.kind, ModalKind::PickUpload) {
        modal.input.insert_str(text);
        modal.error = None;
    }
}
