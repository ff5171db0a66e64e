//! Admin API endpoints.

use reqwest::Method;
use reqwest::blocking::multipart::{Form, Part};

use super::*;

impl AdminApi for RemoteClient {
    fn health(&self) -> Result<bool, RequestError> {
        let out = self.execute(self.get("/health"), "health")?;
        Ok(out.bool_field("ok").unwrap_or(false))
    }

    fn list_files(&self) -> Result<Vec<String>, RequestError> {
        let out = self.execute(self.get("/list"), "list files")?;
        Ok(out.str_list_field("files"))
    }

    fn read_file(&self, path: &str) -> Result<String, RequestError> {
        let req = self.get("/file").query(&[("path", path)]);
        let out = self.execute(req, "read file")?;
        Ok(out.str_field("content").unwrap_or_default().to_string())
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), RequestError> {
        let req = self
            .admin(Method::PUT, "/file")
            .query(&[("path", path)])
            .json(&WriteFileRequest {
                content: content.to_string(),
            });
        self.execute(req, "write file")?;
        tracing::info!(path, bytes = content.len(), "file saved");
        Ok(())
    }

    fn build(&self) -> Result<Option<String>, RequestError> {
        let out = self.execute(self.admin(Method::POST, "/build"), "build")?;
        let msg = out.str_field("message").map(str::to_string);
        tracing::info!(message = msg.as_deref().unwrap_or(""), "build finished");
        Ok(msg)
    }

    fn upload(&self, file: UploadFile) -> Result<Option<String>, RequestError> {
        let UploadFile { name, bytes, mime } = file;
        let size = bytes.len();
        let mut part = Part::bytes(bytes).file_name(name.clone());
        if let Some(m) = mime {
            part = part
                .mime_str(m)
                .map_err(|e| RequestError::Network(e.to_string()))?;
        }
        let form = Form::new().part("file", part);

        let out = self.execute(self.admin(Method::POST, "/upload").multipart(form), "upload")?;
        let url = out.str_field("url").map(str::to_string);
        tracing::info!(name, size, url = url.as_deref().unwrap_or(""), "upload finished");
        Ok(url)
    }
}
