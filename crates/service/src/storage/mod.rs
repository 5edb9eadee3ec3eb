//! Object storage for uploaded images.
//!
//! Images live in public buckets; the database only keeps their public URL.
//! [`ObjectStorage`] is the seam between the content services and the hosted
//! storage REST API ([`supabase::SupabaseStorage`]); tests use
//! [`memory::MemoryStorage`].

pub mod memory;
pub mod supabase;

use async_trait::async_trait;
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use thiserror::Error;

use crate::errors::ServiceError;

pub const SLIDER_FOLDER: &str = "sliders";
pub const NEWS_FOLDER: &str = "news";
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const TOKEN_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Http(String),
    #[error("storage rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A file received from a client, ready to be stored.
#[derive(Clone, Debug)]
pub struct UploadObject {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadObject {
    /// Extension of the uploaded file name, lowercased; `bin` when absent.
    pub fn extension(&self) -> String {
        match self.file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
            _ => "bin".to_string(),
        }
    }

    /// Accept only `image/*` uploads of at most `max_bytes`.
    pub fn validate_image(&self, max_bytes: usize) -> Result<(), ServiceError> {
        let is_image = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"));
        if !is_image {
            return Err(ServiceError::Validation(
                "Please select a valid image file (JPG, PNG, GIF, WEBP)".into(),
            ));
        }
        if self.bytes.len() > max_bytes {
            return Err(ServiceError::Validation(format!(
                "Image size must be at most {} bytes",
                max_bytes
            )));
        }
        Ok(())
    }
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `object` at `path`. Existing objects are never overwritten.
    async fn upload(&self, bucket: &str, path: &str, object: &UploadObject) -> Result<(), StorageError>;
    fn public_url(&self, bucket: &str, path: &str) -> String;
    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError>;
}

/// `<folder>/<random>-<unix millis>.<ext>`
pub fn object_path(folder: &str, object: &UploadObject) -> String {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();
    format!("{}/{}-{}.{}", folder, token, Utc::now().timestamp_millis(), object.extension())
}

pub fn public_url_for(base: &str, bucket: &str, path: &str) -> String {
    format!("{}/storage/v1/object/public/{}/{}", base.trim_end_matches('/'), bucket, path)
}

/// Recover the object path from a public URL of `bucket`. `None` when the URL
/// does not point into that bucket.
pub fn path_from_public_url(url: &str, bucket: &str) -> Option<String> {
    let marker = format!("/object/public/{}/", bucket);
    let (_, path) = url.split_once(&marker)?;
    let path = path.split(['?', '#']).next().unwrap_or(path);
    (!path.is_empty()).then(|| path.to_string())
}
