use anyhow::Result;

use crate::model::AdminConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config: AdminConfig,
}

pub fn run(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
