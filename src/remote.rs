use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::model::{AdminConfig, UploadFile};

mod http_client;
pub use self::http_client::{Payload, RequestError};

mod types;
pub use self::types::*;
mod operations;

/// The backend operations the admin panel consumes.
///
/// `RemoteClient` talks HTTP; tests substitute in-memory fakes.
pub trait AdminApi {
    fn health(&self) -> Result<bool, RequestError>;
    fn list_files(&self) -> Result<Vec<String>, RequestError>;
    fn read_file(&self, path: &str) -> Result<String, RequestError>;
    fn write_file(&self, path: &str, content: &str) -> Result<(), RequestError>;
    /// Returns the server message, if it sent one.
    fn build(&self) -> Result<Option<String>, RequestError>;
    /// Returns the URL of the stored asset, if the server sent one.
    fn upload(&self, file: UploadFile) -> Result<Option<String>, RequestError>;
}

#[derive(Clone)]
pub struct RemoteClient {
    config: AdminConfig,
    admin_header: (HeaderName, HeaderValue),
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: AdminConfig) -> Result<Self> {
        config.validate()?;

        let name = HeaderName::from_bytes(config.admin_header.as_bytes())
            .with_context(|| format!("invalid admin header name {:?}", config.admin_header))?;
        let value = HeaderValue::from_str(&config.admin_header_value)
            .context("invalid admin header value")?;

        let mut defaults = HeaderMap::new();
        defaults.insert(
            reqwest::header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        );
        defaults.insert(reqwest::header::PRAGMA, HeaderValue::from_static("no-cache"));
        if let Some(cookie) = config.cookie.as_deref() {
            let mut v = HeaderValue::from_str(cookie).context("invalid cookie value")?;
            v.set_sensitive(true);
            defaults.insert(reqwest::header::COOKIE, v);
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent("docs-admin")
            .default_headers(defaults)
            .timeout(std::time::Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            config,
            admin_header: (name, value),
            client,
        })
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }
}
