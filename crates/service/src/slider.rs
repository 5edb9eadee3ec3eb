//! Homepage slider: each row is one uploaded image.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::slider::{self, SliderDraft};

use crate::content::{ContentService, OrderedRepository};
use crate::errors::ServiceError;
use crate::ordering::{Direction, MoveStrategy};
use crate::storage::{
    object_path, path_from_public_url, ObjectStorage, UploadObject, DEFAULT_MAX_IMAGE_BYTES, SLIDER_FOLDER,
};

pub type SliderRepo = dyn OrderedRepository<Record = slider::Model, Draft = SliderDraft>;

pub struct SliderService {
    content: ContentService<SliderRepo>,
    storage: Arc<dyn ObjectStorage>,
    bucket: String,
    max_image_bytes: usize,
}

impl SliderService {
    pub fn new(repo: Arc<SliderRepo>, storage: Arc<dyn ObjectStorage>, bucket: impl Into<String>) -> Self {
        Self {
            content: ContentService::new(repo, MoveStrategy::Positional, "slider"),
            storage,
            bucket: bucket.into(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn with_max_image_bytes(mut self, max_image_bytes: usize) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    pub async fn list(&self) -> Result<Vec<slider::Model>, ServiceError> {
        self.content.list().await
    }

    /// Upload the image, then append a row pointing at its public URL.
    #[instrument(skip(self, upload), fields(file = %upload.file_name))]
    pub async fn add(&self, upload: UploadObject) -> Result<slider::Model, ServiceError> {
        upload.validate_image(self.max_image_bytes)?;
        let path = object_path(SLIDER_FOLDER, &upload);
        self.storage.upload(&self.bucket, &path, &upload).await?;
        let image_url = self.storage.public_url(&self.bucket, &path);
        match self.content.add(SliderDraft { image_url }).await {
            Ok(created) => Ok(created),
            Err(e) => {
                warn!(%path, error = %e, "slider insert failed; uploaded image is orphaned");
                Err(e)
            }
        }
    }

    /// Delete the row, then try to remove its image. `claimed_image_url` is the
    /// URL the caller believes the row has; the stored one wins.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32, claimed_image_url: Option<&str>) -> Result<slider::Model, ServiceError> {
        let removed = self.content.delete(id).await?;
        if let Some(claimed) = claimed_image_url {
            if claimed != removed.image_url {
                warn!(stored = %removed.image_url, claimed, "image url mismatch on slider delete");
            }
        }
        self.remove_image(&removed.image_url).await;
        Ok(removed)
    }

    pub async fn reorder(&self, ids: &[i32]) -> Result<(), ServiceError> {
        self.content.reorder(ids).await
    }

    pub async fn move_item(&self, id: i32, direction: Direction) -> Result<bool, ServiceError> {
        self.content.move_item(id, direction).await
    }

    pub async fn set_order_index(&self, id: i32, order_index: i32) -> Result<(), ServiceError> {
        self.content.set_order_index(id, order_index).await
    }

    async fn remove_image(&self, url: &str) {
        let Some(path) = path_from_public_url(url, &self.bucket) else {
            warn!(url, "slider image is not in the slider bucket; skipping removal");
            return;
        };
        match self.storage.remove(&self.bucket, &[path.clone()]).await {
            Ok(()) => info!(%path, "slider image removed"),
            Err(e) => warn!(%path, error = %e, "failed to remove slider image"),
        }
    }
}
