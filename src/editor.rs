//! The open document: live text, cursor/selection, and dirty tracking
//! against the last content known to be persisted.

mod buffer;
mod keys;
mod session;

pub use self::buffer::TextBuffer;
pub use self::keys::{Key, KeyInput};
pub use self::session::{EditorSession, KeyOutcome};
