use std::cell::Cell;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use time::OffsetDateTime;

use crate::admin::{AdminState, Effect, Msg, Status, update};
use crate::clipboard::{self, Clipboard, CopyButton};
use crate::model::{AdminConfig, UploadFile};
use crate::remote::RemoteClient;

use super::modal::Modal;
use super::worker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    Files,
    Editor,
}

pub(super) struct App {
    pub(super) state: AdminState,
    pub(super) base_url: String,
    pub(super) modal: Option<Modal>,
    pub(super) focus: Focus,
    pub(super) file_cursor: usize,
    /// First visible editor line; adjusted while drawing.
    pub(super) scroll: Cell<usize>,
    pub(super) quit: bool,

    pub(super) copy_button: CopyButton,
    pub(super) copy_error: Option<String>,
    clipboard: Box<dyn Clipboard>,

    pub(super) status_at: OffsetDateTime,
    last_status: Status,

    client: RemoteClient,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
}

impl App {
    pub(super) fn new(client: RemoteClient, config: &AdminConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let state = AdminState::new(config.indent_unit.clone());
        let last_status = state.status().clone();
        let mut app = Self {
            state,
            base_url: config.base_url.clone(),
            modal: None,
            focus: Focus::Files,
            file_cursor: 0,
            scroll: Cell::new(0),
            quit: false,
            copy_button: CopyButton::new("Copy"),
            copy_error: None,
            clipboard: clipboard::detect(),
            status_at: OffsetDateTime::now_utc(),
            last_status,
            client,
            tx,
            rx,
        };
        app.dispatch(Msg::LoadFiles);
        app
    }

    /// Feeds one message through the controller and starts its effects.
    pub(super) fn dispatch(&mut self, msg: Msg) {
        let effects = update(&mut self.state, msg);
        if self.state.status() != &self.last_status {
            self.last_status = self.state.status().clone();
            self.status_at = OffsetDateTime::now_utc();
        }
        self.clamp_file_cursor();

        for effect in effects {
            match effect {
                Effect::Call(call) => {
                    tracing::debug!(?call, "spawning api call");
                    worker::spawn_call(self.client.clone(), call, self.tx.clone());
                }
                Effect::Confirm(prompt) => {
                    self.modal = Some(Modal::confirm(prompt));
                }
            }
        }
    }

    /// Applies every response that has arrived since the last frame.
    pub(super) fn drain_responses(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.dispatch(msg);
        }
    }

    pub(super) fn move_file_cursor(&mut self, delta: isize) {
        let len = self.state.files().len();
        if len == 0 {
            return;
        }
        let next = self.file_cursor as isize + delta;
        self.file_cursor = next.clamp(0, len as isize - 1) as usize;
    }

    pub(super) fn open_selected(&mut self) {
        let Some(path) = self.state.files().get(self.file_cursor).cloned() else {
            return;
        };
        self.dispatch(Msg::OpenFile(path));
        self.focus = Focus::Editor;
    }

    pub(super) fn request_upload(&mut self) {
        self.modal = Some(Modal::pick_upload());
    }

    /// Reads the picked file. On failure the picker stays open with the error.
    pub(super) fn submit_upload(&mut self, raw: &str) -> Result<(), String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err("path is empty".to_string());
        }
        let file = UploadFile::from_path(Path::new(raw)).map_err(|e| format!("{:#}", e))?;
        self.dispatch(Msg::Upload(Some(file)));
        Ok(())
    }

    /// Copies the selection, or the whole buffer when nothing is selected.
    pub(super) fn copy(&mut self) {
        let buffer = self.state.session().buffer();
        let text = if buffer.has_selection() {
            buffer.selected_text().to_string()
        } else {
            buffer.text().to_string()
        };
        match self
            .copy_button
            .click(self.clipboard.as_mut(), &text, Instant::now())
        {
            Ok(()) => self.copy_error = None,
            Err(err) => {
                tracing::warn!(error = %err, "copy failed");
                self.copy_error = Some(format!("{:#}", err));
            }
        }
    }

    fn clamp_file_cursor(&mut self) {
        let len = self.state.files().len();
        if len == 0 {
            self.file_cursor = 0;
        } else if self.file_cursor >= len {
            self.file_cursor = len - 1;
        }
    }
}
