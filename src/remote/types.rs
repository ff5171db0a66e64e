//! Request payloads sent to the admin API.
//!
//! Responses are read field-by-field from [`super::Payload`] instead, since
//! the backend may omit or mistype any of them.

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct WriteFileRequest {
    pub content: String,
}
