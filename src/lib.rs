//! Terminal admin client for a static documentation site.
//!
//! The interesting parts are UI-independent: [`admin`] holds the controller
//! (state, messages, effects), [`editor`] the text buffer, [`landing`] and
//! [`clipboard`] the landing-page widgets. [`tui_shell`] is one front end
//! over them.

pub mod admin;
pub mod clipboard;
pub mod editor;
pub mod landing;
pub mod logging;
pub mod model;
pub mod remote;
pub mod tui;

mod tui_shell;
