//! The admin panel controller.
//!
//! Every user action and every backend response is a [`Msg`]. [`update`]
//! applies one to [`AdminState`] without doing I/O and returns the
//! [`Effect`]s the front end must carry out: API calls to run (see
//! [`perform`]) and confirmations to ask for. Actions that hit a busy guard
//! are dropped, not queued.

use crate::editor::KeyInput;
use crate::model::UploadFile;
use crate::remote::RequestError;

mod perform;
mod state;
mod status;
mod update;

pub use self::perform::{drive, perform};
pub use self::state::{AdminState, FileEntryView};
pub use self::status::{Controls, Status, StatusKind};
pub use self::update::update;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// Refresh the file list.
    LoadFiles,
    OpenFile(String),
    /// Answer to the last [`Effect::Confirm`].
    Confirmed(bool),
    Save,
    Build,
    /// A toolbar button; dropped when the presenter shows it disabled.
    Button(Button),
    Key(KeyInput),
    Paste(String),
    Insert(Template),
    /// `None` when the picker was dismissed.
    Upload(Option<UploadFile>),

    FilesLoaded(Result<Vec<String>, RequestError>),
    FileLoaded {
        path: String,
        result: Result<String, RequestError>,
    },
    Saved {
        path: String,
        content: String,
        result: Result<(), RequestError>,
    },
    Built(Result<Option<String>, RequestError>),
    Uploaded(Result<Option<String>, RequestError>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Call(ApiCall),
    Confirm(Prompt),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    ListFiles,
    ReadFile { path: String },
    WriteFile { path: String, content: String },
    Build,
    Upload(UploadFile),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Save,
    Build,
    Refresh,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    DiscardChanges,
    Build,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Prompt::DiscardChanges => {
                "Есть несохранённые изменения. Открыть другую страницу и потерять их?"
            }
            Prompt::Build => "Собрать и опубликовать сайт сейчас?",
        }
    }
}

/// An action parked until the user answers a confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Open(String),
    Build,
}

/// Toolbar snippets inserted at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    Link,
    Image,
    Note,
}

impl Template {
    pub fn text(self) -> &'static str {
        match self {
            Template::Link => "[текст](https://example.com)",
            Template::Image => "![описание](/assets/uploads/filename.png)",
            Template::Note => "\n!!! tip \"Заметка\"\n\tКороткий полезный совет.\n",
        }
    }
}

/// Markdown image reference for an uploaded asset.
pub fn image_markdown(url: &str) -> String {
    format!("![картинка]({})", url)
}
