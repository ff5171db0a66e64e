#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Neutral,
    Ok,
    Error,
}

/// The status line. Each operation overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn neutral(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Neutral,
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Ok,
        }
    }

    pub fn error(err: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Ошибка: {}", err),
            kind: StatusKind::Error,
        }
    }
}

/// Which controls are currently usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub save_enabled: bool,
    pub build_enabled: bool,
    pub refresh_enabled: bool,
}
