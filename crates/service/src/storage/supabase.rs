use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde_json::json;
use tracing::debug;

use super::{public_url_for, ObjectStorage, StorageError, UploadObject};

const CACHE_CONTROL: &str = "max-age=3600";

/// Client for the hosted storage REST API (`/storage/v1/object/...`).
#[derive(Clone)]
pub struct SupabaseStorage {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStorage {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| StorageError::Http(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(cfg: &configs::StorageConfig) -> Result<Self, StorageError> {
        Self::new(cfg.url.clone(), cfg.anon_key.clone())
    }

    fn object_endpoint(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path)
    }

    async fn check(resp: Response) -> Result<(), StorageError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(StorageError::Rejected { status: status.as_u16(), body })
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn upload(&self, bucket: &str, path: &str, object: &UploadObject) -> Result<(), StorageError> {
        let content_type = object
            .content_type
            .clone()
            .unwrap_or_else(|| "application/octet-stream".to_string());
        debug!(bucket, path, size = object.bytes.len(), "uploading object");
        let resp = self
            .client
            .post(self.object_endpoint(bucket, path))
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CACHE_CONTROL, CACHE_CONTROL)
            .header("x-upsert", "false")
            .body(object.bytes.clone())
            .send()
            .await
            .map_err(|e| StorageError::Http(e.to_string()))?;
        Self::check(resp).await
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        public_url_for(&self.base_url, bucket, path)
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError> {
        if paths.is_empty() {
            return Ok(());
        }
        debug!(bucket, count = paths.len(), "removing objects");
        let resp = self
            .client
            .delete(format!("{}/storage/v1/object/{}", self.base_url, bucket))
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .json(&json!({ "prefixes": paths }))
            .send()
            .await
            .map_err(|e| StorageError::Http(e.to_string()))?;
        Self::check(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_use_trimmed_base() {
        let s = SupabaseStorage::new("https://proj.example.co/", "key").unwrap();
        assert_eq!(
            s.object_endpoint("slider-images", "sliders/a-1.png"),
            "https://proj.example.co/storage/v1/object/slider-images/sliders/a-1.png"
        );
        assert_eq!(
            s.public_url("slider-images", "sliders/a-1.png"),
            "https://proj.example.co/storage/v1/object/public/slider-images/sliders/a-1.png"
        );
    }
}
