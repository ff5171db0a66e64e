use reqwest::blocking::RequestBuilder;

use super::*;

/// A failed admin API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The server answered with a non-success status.
    #[error("{} {}{}", .status, .status_text, body_suffix(.body))]
    Status {
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response claimed JSON but did not parse.
    #[error("invalid JSON response: {0}")]
    Decode(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(b) => format!(": {}", b),
        None => String::new(),
    }
}

/// A decoded success body.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Text(String),
}

impl Payload {
    pub fn str_field(&self, key: &str) -> Option<&str> {
        match self {
            Payload::Json(v) => v.get(key).and_then(|x| x.as_str()),
            Payload::Text(_) => None,
        }
    }

    /// String items of an array field. Anything that is not an array reads as empty.
    pub fn str_list_field(&self, key: &str) -> Vec<String> {
        let Payload::Json(v) = self else {
            return Vec::new();
        };
        v.get(key)
            .and_then(|x| x.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        match self {
            Payload::Json(v) => v.get(key).and_then(|x| x.as_bool()),
            Payload::Text(_) => None,
        }
    }
}

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    pub(super) fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    /// A state-changing request; carries the admin marker header.
    pub(super) fn admin(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let (name, value) = &self.admin_header;
        self.client
            .request(method, self.url(path))
            .header(name.clone(), value.clone())
    }

    /// Sends once and decodes the body by content type. No retries.
    pub(super) fn execute(&self, req: RequestBuilder, label: &str) -> Result<Payload, RequestError> {
        let resp = req.send().map_err(|e| {
            tracing::warn!(op = label, error = %e, "request failed");
            RequestError::Network(e.to_string())
        })?;

        let status = resp.status();
        tracing::debug!(op = label, status = status.as_u16(), url = %resp.url(), "response");

        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            let err = RequestError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                body: if body.is_empty() { None } else { Some(body) },
            };
            tracing::warn!(op = label, error = %err, "request rejected");
            return Err(err);
        }

        let is_json = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        let text = resp
            .text()
            .map_err(|e| RequestError::Network(e.to_string()))?;

        if is_json {
            serde_json::from_str(&text)
                .map(Payload::Json)
                .map_err(|e| RequestError::Decode(e.to_string()))
        } else {
            Ok(Payload::Text(text))
        }
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
