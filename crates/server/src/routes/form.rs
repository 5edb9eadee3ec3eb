//! Multipart form reading shared by the upload endpoints.

use std::collections::HashMap;

use axum::extract::Multipart;

use service::storage::UploadObject;

use crate::errors::ApiError;

pub const FILE_FIELD: &str = "file";

/// Text fields plus the optional `file` part of a multipart body.
#[derive(Debug, Default)]
pub struct FormParts {
    pub fields: HashMap<String, String>,
    pub file: Option<UploadObject>,
}

impl FormParts {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Text field or empty string.
    pub fn text_or_default(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.text(name).map(str::trim), Some("true") | Some("1") | Some("on"))
    }
}

/// Drain the multipart stream. A file part without a name or content counts
/// as no file, which is what browsers send for an empty file input.
pub async fn read_form(mut multipart: Multipart) -> Result<FormParts, ApiError> {
    let mut parts = FormParts::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid form data: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == FILE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid form data: {e}")))?;
            if !file_name.is_empty() && !bytes.is_empty() {
                parts.file = Some(UploadObject { file_name, content_type, bytes: bytes.to_vec() });
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid form data: {e}")))?;
            parts.fields.insert(name, value);
        }
    }
    Ok(parts)
}
