use crate::editor::EditorSession;

use super::{Controls, PendingAction, Status};

/// Everything the admin panel shows, owned by one controller.
#[derive(Clone, Debug)]
pub struct AdminState {
    pub(super) files: Vec<String>,
    pub(super) session: EditorSession,
    pub(super) saving: bool,
    pub(super) building: bool,
    /// A file-list request is out.
    pub(super) listing: bool,
    /// A file-content request for the active path is out.
    pub(super) opening: bool,
    pub(super) status: Status,
    pub(super) pending: Option<PendingAction>,
}

/// One row of the file panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntryView<'a> {
    pub path: &'a str,
    pub active: bool,
}

impl AdminState {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            session: EditorSession::new(indent_unit),
            saving: false,
            building: false,
            listing: false,
            opening: false,
            status: Status::neutral("Готово"),
            pending: None,
        }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// The file panel in server order, with the active entry marked.
    pub fn file_entries(&self) -> Vec<FileEntryView<'_>> {
        let active = self.session.active();
        self.files
            .iter()
            .map(|p| FileEntryView {
                path: p.as_str(),
                active: Some(p.as_str()) == active,
            })
            .collect()
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn active(&self) -> Option<&str> {
        self.session.active()
    }

    pub fn text(&self) -> &str {
        self.session.text()
    }

    pub fn is_dirty(&self) -> bool {
        self.session.is_dirty()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_building(&self) -> bool {
        self.building
    }

    /// True while either a list or an open request is out.
    pub fn is_loading(&self) -> bool {
        self.listing || self.opening
    }

    pub fn is_listing(&self) -> bool {
        self.listing
    }

    pub fn is_opening(&self) -> bool {
        self.opening
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn controls(&self) -> Controls {
        Controls {
            save_enabled: self.session.active().is_some()
                && self.session.active() == self.session.loaded()
                && self.session.is_dirty()
                && !self.saving
                && !self.opening,
            build_enabled: !self.building && !self.is_loading(),
            refresh_enabled: !self.is_loading(),
        }
    }

    pub(super) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
