use crate::editor::{KeyInput, KeyOutcome};
use crate::model::UploadFile;

use super::{
    AdminState, ApiCall, Button, Effect, Msg, PendingAction, Prompt, Status, image_markdown,
};

const UNSAVED: &str = "Есть несохранённые изменения";

/// Applies one message. Pure: all I/O is returned as effects.
pub fn update(state: &mut AdminState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::LoadFiles => load_files(state),
        Msg::OpenFile(path) => open_file(state, path),
        Msg::Confirmed(yes) => confirmed(state, yes),
        Msg::Save => save_active(state),
        Msg::Build => build_and_deploy(state),
        Msg::Button(b) => button(state, b),
        Msg::Key(k) => key(state, k),
        Msg::Paste(text) => {
            insert(state, &text);
            Vec::new()
        }
        Msg::Insert(t) => {
            insert(state, t.text());
            Vec::new()
        }
        Msg::Upload(file) => upload(state, file),

        Msg::FilesLoaded(result) => {
            state.listing = false;
            match result {
                Ok(files) => {
                    state.set_status(Status::ok(format!("Файлов: {}", files.len())));
                    state.files = files;
                }
                Err(e) => state.set_status(Status::error(e)),
            }
            Vec::new()
        }

        Msg::FileLoaded { path, result } => {
            let applied = match result {
                Ok(content) => {
                    let applied = state.session.finish_open(&path, content);
                    if applied {
                        state.set_status(Status::ok("Готово"));
                    }
                    applied
                }
                Err(e) => {
                    let applied = state.session.fail_open(&path);
                    if applied {
                        state.set_status(Status::error(e));
                    }
                    applied
                }
            };
            if applied {
                state.opening = false;
            } else {
                tracing::debug!(path, "stale file response ignored");
            }
            Vec::new()
        }

        Msg::Saved {
            path,
            content,
            result,
        } => {
            state.saving = false;
            match result {
                Ok(()) => {
                    if !state.session.mark_saved(&path, content) {
                        tracing::debug!(path, "saved file is no longer open");
                    }
                    state.set_status(Status::ok("Сохранено"));
                }
                Err(e) => state.set_status(Status::error(e)),
            }
            Vec::new()
        }

        Msg::Built(result) => {
            state.building = false;
            match result {
                Ok(message) => {
                    let message = message.filter(|m| !m.is_empty());
                    state.set_status(Status::ok(message.unwrap_or_else(|| "Готово".to_string())));
                }
                Err(e) => state.set_status(Status::error(e)),
            }
            Vec::new()
        }

        Msg::Uploaded(result) => {
            match result {
                Ok(url) => {
                    if let Some(url) = url.filter(|u| !u.is_empty()) {
                        insert(state, &image_markdown(&url));
                    }
                    state.set_status(Status::ok("Файл загружен"));
                }
                Err(e) => state.set_status(Status::error(e)),
            }
            Vec::new()
        }
    }
}

fn load_files(state: &mut AdminState) -> Vec<Effect> {
    if state.listing {
        tracing::debug!("refresh dropped: list in flight");
        return Vec::new();
    }
    state.listing = true;
    state.set_status(Status::neutral("Загружаю список…"));
    vec![Effect::Call(ApiCall::ListFiles)]
}

fn open_file(state: &mut AdminState, path: String) -> Vec<Effect> {
    if path.is_empty() {
        return Vec::new();
    }
    if state.session.is_dirty() {
        state.pending = Some(PendingAction::Open(path));
        return vec![Effect::Confirm(Prompt::DiscardChanges)];
    }
    start_open(state, path)
}

fn start_open(state: &mut AdminState, path: String) -> Vec<Effect> {
    state.opening = true;
    state.session.begin_open(&path);
    state.set_status(Status::neutral("Загружаю…"));
    vec![Effect::Call(ApiCall::ReadFile { path })]
}

fn confirmed(state: &mut AdminState, yes: bool) -> Vec<Effect> {
    let Some(action) = state.pending.take() else {
        return Vec::new();
    };
    if !yes {
        tracing::debug!(?action, "declined");
        return Vec::new();
    }
    match action {
        PendingAction::Open(path) => start_open(state, path),
        PendingAction::Build => start_build(state),
    }
}

fn save_active(state: &mut AdminState) -> Vec<Effect> {
    let Some(path) = state.session.active().map(str::to_string) else {
        return Vec::new();
    };
    if state.saving {
        tracing::debug!(path, "save dropped: save in flight");
        return Vec::new();
    }
    // The live text belongs to the previous file until the open completes.
    if state.session.loaded() != Some(path.as_str()) {
        tracing::debug!(path, "save dropped: file still loading");
        return Vec::new();
    }

    state.saving = true;
    state.set_status(Status::neutral("Сохраняю…"));
    vec![Effect::Call(ApiCall::WriteFile {
        path,
        content: state.session.text().to_string(),
    })]
}

fn build_and_deploy(state: &mut AdminState) -> Vec<Effect> {
    if state.building {
        tracing::debug!("build dropped: build in flight");
        return Vec::new();
    }
    state.pending = Some(PendingAction::Build);
    vec![Effect::Confirm(Prompt::Build)]
}

fn start_build(state: &mut AdminState) -> Vec<Effect> {
    if state.building {
        return Vec::new();
    }
    state.building = true;
    state.set_status(Status::neutral("Сборка и публикация…"));
    vec![Effect::Call(ApiCall::Build)]
}

fn button(state: &mut AdminState, b: Button) -> Vec<Effect> {
    let controls = state.controls();
    match b {
        Button::Save if controls.save_enabled => save_active(state),
        Button::Build if controls.build_enabled => build_and_deploy(state),
        Button::Refresh if controls.refresh_enabled => load_files(state),
        _ => {
            tracing::debug!(?b, "disabled button ignored");
            Vec::new()
        }
    }
}

fn key(state: &mut AdminState, input: KeyInput) -> Vec<Effect> {
    match state.session.handle_key(input) {
        KeyOutcome::Save => save_active(state),
        KeyOutcome::Edited => {
            if state.session.is_dirty() {
                state.set_status(Status::neutral(UNSAVED));
            }
            Vec::new()
        }
        KeyOutcome::Moved | KeyOutcome::Ignored => Vec::new(),
    }
}

fn insert(state: &mut AdminState, text: &str) {
    state.session.insert_at_cursor(text);
    if state.session.is_dirty() {
        state.set_status(Status::neutral(UNSAVED));
    }
}

fn upload(state: &mut AdminState, file: Option<UploadFile>) -> Vec<Effect> {
    let Some(file) = file else {
        return Vec::new();
    };
    tracing::debug!(name = file.name.as_str(), size = file.bytes.len(), "uploading");
    state.set_status(Status::neutral("Загрузка файла…"));
    vec![Effect::Call(ApiCall::Upload(file))]
}

#[cfg(test)]
#[path = "../tests/admin/update_tests.rs"]
mod tests;
