use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "docs-admin.json";

/// Environment variable overriding `base_url`.
pub const BASE_URL_ENV: &str = "DOCS_ADMIN_URL";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Origin of the documentation site, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,

    /// Path under the origin where the admin API is mounted.
    pub api_prefix: String,

    /// Header sent on every state-changing request.
    pub admin_header: String,
    pub admin_header_value: String,

    /// Raw `Cookie` header value; stands in for same-origin browser credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,

    pub timeout_secs: u64,

    /// Inserted by Tab and prepended by block indent.
    pub indent_unit: String,

    /// Where the TUI writes its log. Without it the TUI logs nowhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            api_prefix: "/admin/api".to_string(),
            admin_header: "X-Stream-Admin".to_string(),
            admin_header_value: "1".to_string(),
            cookie: None,
            timeout_secs: 30,
            indent_unit: "\t".to_string(),
            log_file: None,
        }
    }
}

impl AdminConfig {
    /// Loads the config.
    ///
    /// An explicit path must exist. Without one, `docs-admin.json` in the
    /// current directory is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let bytes =
            std::fs::read(&path).with_context(|| format!("read config {}", path.display()))?;
        Self::from_json(&bytes).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let cfg: Self = serde_json::from_slice(bytes).context("decode config json")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Applies `DOCS_ADMIN_URL` and then an explicit CLI override, in that order.
    pub fn with_overrides(mut self, env_url: Option<String>, cli_url: Option<String>) -> Self {
        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(url) = cli_url {
            self.base_url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            anyhow::bail!("base_url must start with http:// or https:// (got {:?})", self.base_url);
        }
        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            anyhow::bail!("api_prefix must start with '/' (got {:?})", self.api_prefix);
        }
        if self.indent_unit.is_empty() || self.indent_unit.contains('\n') {
            anyhow::bail!("indent_unit must be non-empty and single-line");
        }
        Ok(())
    }

    /// Full URL for an API path such as `/list`.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_prefix.trim_end_matches('/'),
            path
        )
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
