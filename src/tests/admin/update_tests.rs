use std::cell::RefCell;
use std::collections::HashMap;

use super::*;
use crate::admin::{StatusKind, Template, drive, perform};
use crate::editor::Key;
use crate::remote::{AdminApi, RequestError};

#[derive(Default)]
struct FakeApi {
    files: Vec<String>,
    contents: HashMap<String, String>,
    writes: RefCell<Vec<(String, String)>>,
    uploads: RefCell<Vec<String>>,
    fail_list: bool,
    fail_write: bool,
    upload_url: Option<String>,
}

fn server_error() -> RequestError {
    RequestError::Status {
        status: 500,
        status_text: "Internal Server Error".to_string(),
        body: Some("boom".to_string()),
    }
}

impl AdminApi for FakeApi {
    fn health(&self) -> Result<bool, RequestError> {
        Ok(true)
    }

    fn list_files(&self) -> Result<Vec<String>, RequestError> {
        if self.fail_list {
            return Err(RequestError::Network("connection refused".to_string()));
        }
        Ok(self.files.clone())
    }

    fn read_file(&self, path: &str) -> Result<String, RequestError> {
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| RequestError::Status {
                status: 404,
                status_text: "Not Found".to_string(),
                body: None,
            })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), RequestError> {
        if self.fail_write {
            return Err(server_error());
        }
        self.writes
            .borrow_mut()
            .push((path.to_string(), content.to_string()));
        Ok(())
    }

    fn build(&self) -> Result<Option<String>, RequestError> {
        Ok(Some("Опубликовано".to_string()))
    }

    fn upload(&self, file: UploadFile) -> Result<Option<String>, RequestError> {
        self.uploads.borrow_mut().push(file.name);
        Ok(self.upload_url.clone())
    }
}

fn fake() -> FakeApi {
    FakeApi {
        files: vec!["a.md".to_string(), "b.md".to_string()],
        contents: HashMap::from([
            ("a.md".to_string(), "# Hi".to_string()),
            ("b.md".to_string(), "bee".to_string()),
        ]),
        ..FakeApi::default()
    }
}

fn run(state: &mut AdminState, api: &FakeApi, msg: Msg) {
    drive(state, api, &mut |_| true, msg);
}

fn opened(api: &FakeApi, path: &str) -> AdminState {
    let mut state = AdminState::new("\t");
    run(&mut state, api, Msg::LoadFiles);
    run(&mut state, api, Msg::OpenFile(path.to_string()));
    state
}

fn type_str(state: &mut AdminState, api: &FakeApi, text: &str) {
    for c in text.chars() {
        run(state, api, Msg::Key(KeyInput::plain(Key::Char(c))));
    }
}

#[test]
fn list_open_edit_save_round() {
    let api = fake();
    let mut state = AdminState::new("\t");

    run(&mut state, &api, Msg::LoadFiles);
    assert_eq!(state.files(), ["a.md", "b.md"]);
    assert_eq!(state.status(), &Status::ok("Файлов: 2"));

    run(&mut state, &api, Msg::OpenFile("a.md".to_string()));
    assert_eq!(state.text(), "# Hi");
    assert!(!state.is_dirty());
    assert_eq!(state.status(), &Status::ok("Готово"));

    run(&mut state, &api, Msg::Key(KeyInput::plain(Key::End)));
    type_str(&mut state, &api, "!");
    assert!(state.is_dirty());
    assert_eq!(state.status(), &Status::neutral(UNSAVED));

    run(&mut state, &api, Msg::Button(Button::Save));
    assert_eq!(
        api.writes.borrow().as_slice(),
        [("a.md".to_string(), "# Hi!".to_string())]
    );
    assert!(!state.is_dirty());
    assert_eq!(state.session().synced(), "# Hi!");
    assert_eq!(state.status(), &Status::ok("Сохранено"));
}

#[test]
fn save_button_is_inactive_while_clean() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    assert!(!state.controls().save_enabled);
    assert!(update(&mut state, Msg::Button(Button::Save)).is_empty());
    assert!(api.writes.borrow().is_empty());
}

#[test]
fn declining_discard_keeps_path_and_text() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    type_str(&mut state, &api, "x");

    let effects = update(&mut state, Msg::OpenFile("b.md".to_string()));
    assert_eq!(effects, vec![Effect::Confirm(Prompt::DiscardChanges)]);
    assert_eq!(
        state.pending(),
        Some(&PendingAction::Open("b.md".to_string()))
    );

    assert!(update(&mut state, Msg::Confirmed(false)).is_empty());
    assert_eq!(state.active(), Some("a.md"));
    assert_eq!(state.text(), "x# Hi");
    assert!(state.is_dirty());
    assert!(state.pending().is_none());
}

#[test]
fn confirming_discard_opens_the_new_file() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    type_str(&mut state, &api, "x");

    run(&mut state, &api, Msg::OpenFile("b.md".to_string()));
    assert_eq!(state.active(), Some("b.md"));
    assert_eq!(state.text(), "bee");
    assert!(!state.is_dirty());
}

#[test]
fn failed_save_leaves_dirty_and_reports() {
    let api = FakeApi {
        fail_write: true,
        ..fake()
    };
    let mut state = opened(&api, "a.md");
    type_str(&mut state, &api, "x");

    run(&mut state, &api, Msg::Save);
    assert!(state.is_dirty());
    assert!(!state.is_saving());
    assert_eq!(state.status().kind, StatusKind::Error);
    assert_eq!(
        state.status().message,
        "Ошибка: 500 Internal Server Error: boom"
    );
}

#[test]
fn second_save_is_dropped_while_first_is_in_flight() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    type_str(&mut state, &api, "x");

    let first = update(&mut state, Msg::Save);
    assert_eq!(first.len(), 1);
    assert!(state.is_saving());
    assert!(!state.controls().save_enabled);
    assert!(update(&mut state, Msg::Save).is_empty());

    let Effect::Call(call) = first.into_iter().next().unwrap() else {
        panic!("expected api call");
    };
    update(&mut state, perform(&api, call));
    assert!(!state.is_saving());
    assert_eq!(api.writes.borrow().len(), 1);
}

#[test]
fn save_without_active_file_is_a_no_op() {
    let mut state = AdminState::new("\t");
    assert!(update(&mut state, Msg::Save).is_empty());
    assert!(update(&mut state, Msg::Key(KeyInput::ctrl('s'))).is_empty());
}

#[test]
fn build_requires_confirmation_and_drops_duplicates() {
    let mut state = AdminState::new("\t");

    assert_eq!(
        update(&mut state, Msg::Build),
        vec![Effect::Confirm(Prompt::Build)]
    );
    assert_eq!(
        update(&mut state, Msg::Confirmed(true)),
        vec![Effect::Call(ApiCall::Build)]
    );
    assert!(state.is_building());
    assert!(!state.controls().build_enabled);
    assert!(update(&mut state, Msg::Build).is_empty());

    update(&mut state, Msg::Built(Ok(None)));
    assert!(!state.is_building());
    assert_eq!(state.status(), &Status::ok("Готово"));

    update(&mut state, Msg::Build);
    update(&mut state, Msg::Confirmed(true));
    update(&mut state, Msg::Built(Err(server_error())));
    assert!(!state.is_building());
    assert_eq!(state.status().kind, StatusKind::Error);
}

#[test]
fn declined_build_changes_nothing() {
    let mut state = AdminState::new("\t");
    let before = state.status().clone();
    update(&mut state, Msg::Build);
    assert!(update(&mut state, Msg::Confirmed(false)).is_empty());
    assert!(!state.is_building());
    assert_eq!(state.status(), &before);
}

#[test]
fn build_reports_server_message() {
    let api = fake();
    let mut state = AdminState::new("\t");
    run(&mut state, &api, Msg::Button(Button::Build));
    assert_eq!(state.status(), &Status::ok("Опубликовано"));
}

#[test]
fn upload_inserts_image_reference_at_cursor() {
    let api = FakeApi {
        upload_url: Some("/assets/uploads/x.png".to_string()),
        ..fake()
    };
    let mut state = opened(&api, "a.md");
    run(&mut state, &api, Msg::Key(KeyInput::plain(Key::End)));

    let file = UploadFile::new("x.png", vec![1, 2, 3]);
    run(&mut state, &api, Msg::Upload(Some(file)));
    assert_eq!(state.text(), "# Hi![картинка](/assets/uploads/x.png)");
    assert!(state.is_dirty());
    assert_eq!(state.status(), &Status::ok("Файл загружен"));
    assert_eq!(api.uploads.borrow().as_slice(), ["x.png".to_string()]);
}

#[test]
fn upload_without_url_only_confirms() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    run(
        &mut state,
        &api,
        Msg::Upload(Some(UploadFile::new("doc.pdf", vec![0]))),
    );
    assert_eq!(state.text(), "# Hi");
    assert!(!state.is_dirty());
    assert_eq!(state.status(), &Status::ok("Файл загружен"));
}

#[test]
fn dismissed_picker_does_nothing() {
    let mut state = AdminState::new("\t");
    assert!(update(&mut state, Msg::Upload(None)).is_empty());
    assert_eq!(state.status(), &Status::neutral("Готово"));
}

#[test]
fn failed_list_keeps_previous_files() {
    let api = fake();
    let mut state = AdminState::new("\t");
    run(&mut state, &api, Msg::LoadFiles);

    let broken = FakeApi {
        fail_list: true,
        ..fake()
    };
    run(&mut state, &broken, Msg::LoadFiles);
    assert_eq!(state.files().len(), 2);
    assert!(!state.is_loading());
    assert_eq!(
        state.status().message,
        "Ошибка: network error: connection refused"
    );
}

#[test]
fn failed_open_reports_and_keeps_previous_document() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    run(&mut state, &api, Msg::OpenFile("missing.md".to_string()));
    assert_eq!(state.active(), Some("a.md"));
    assert_eq!(state.text(), "# Hi");
    assert_eq!(state.status().message, "Ошибка: 404 Not Found");
    assert!(!state.is_loading());
}

#[test]
fn stale_file_response_is_ignored() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    update(&mut state, Msg::OpenFile("b.md".to_string()));
    update(&mut state, Msg::OpenFile("a.md".to_string()));

    update(
        &mut state,
        Msg::FileLoaded {
            path: "b.md".to_string(),
            result: Ok("bee".to_string()),
        },
    );
    assert!(state.is_loading());
    assert_eq!(state.text(), "# Hi");
}

#[test]
fn list_response_does_not_unlock_save_during_open() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    assert_eq!(
        update(&mut state, Msg::LoadFiles),
        [Effect::Call(ApiCall::ListFiles)]
    );
    update(&mut state, Msg::OpenFile("b.md".to_string()));

    update(&mut state, Msg::FilesLoaded(Ok(api.files.clone())));
    assert!(!state.is_listing());
    assert!(state.is_opening());
    assert!(state.is_loading());

    // The buffer still shows a.md while b.md is active.
    update(&mut state, Msg::Key(KeyInput::plain(Key::Char('!'))));
    assert!(state.is_dirty());
    assert!(!state.controls().save_enabled);
    assert!(update(&mut state, Msg::Button(Button::Save)).is_empty());
    assert!(update(&mut state, Msg::Save).is_empty());
    assert!(update(&mut state, Msg::Key(KeyInput::ctrl('s'))).is_empty());
    assert!(!state.is_saving());

    update(
        &mut state,
        Msg::FileLoaded {
            path: "b.md".to_string(),
            result: Ok("bee".to_string()),
        },
    );
    assert_eq!(state.text(), "bee");
    assert!(!state.is_dirty());
    assert!(api.writes.borrow().is_empty());
}

#[test]
fn open_response_does_not_unlock_refresh_during_list() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    update(&mut state, Msg::LoadFiles);
    update(&mut state, Msg::OpenFile("b.md".to_string()));

    update(
        &mut state,
        Msg::FileLoaded {
            path: "b.md".to_string(),
            result: Ok("bee".to_string()),
        },
    );
    assert!(!state.is_opening());
    assert!(state.is_listing());
    assert!(!state.controls().refresh_enabled);
    assert!(update(&mut state, Msg::LoadFiles).is_empty());
    assert!(update(&mut state, Msg::Button(Button::Refresh)).is_empty());

    // Editing the freshly opened file may be saved while the list is out.
    update(&mut state, Msg::Key(KeyInput::plain(Key::Char('!'))));
    assert!(state.controls().save_enabled);
    assert_eq!(
        update(&mut state, Msg::Button(Button::Save)),
        [Effect::Call(ApiCall::WriteFile {
            path: "b.md".to_string(),
            content: "!bee".to_string(),
        })]
    );

    update(&mut state, Msg::FilesLoaded(Ok(api.files.clone())));
    assert!(!state.is_loading());
    assert!(state.controls().refresh_enabled);
}

#[test]
fn templates_insert_and_mark_dirty() {
    let api = fake();
    let mut state = opened(&api, "a.md");
    run(&mut state, &api, Msg::Insert(Template::Link));
    assert_eq!(state.text(), "[текст](https://example.com)# Hi");
    assert!(state.is_dirty());
    assert!(state.controls().save_enabled);
    assert_eq!(state.status(), &Status::neutral(UNSAVED));
}

#[test]
fn file_entries_mark_active() {
    let api = fake();
    let state = opened(&api, "b.md");
    let entries = state.file_entries();
    assert_eq!(entries.len(), 2);
    assert!(!entries[0].active);
    assert!(entries[1].active);
    assert_eq!(entries[1].path, "b.md");
}
