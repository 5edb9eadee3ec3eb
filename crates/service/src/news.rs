//! News posts with an optional image.
//!
//! Moves exchange the stored indices of two neighbours, so both rows need an
//! index; legacy rows without one can only be placed through a full reorder.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::news::{self, NewsDraft, NewsView};
use models::{Language, Validate};

use crate::content::{ContentService, OrderedRepository};
use crate::errors::ServiceError;
use crate::ordering::{Direction, MoveStrategy};
use crate::storage::{
    object_path, path_from_public_url, ObjectStorage, UploadObject, DEFAULT_MAX_IMAGE_BYTES, NEWS_FOLDER,
};

pub type NewsRepo = dyn OrderedRepository<Record = news::Model, Draft = NewsDraft>;

/// What an update does with the post's current image.
#[derive(Debug)]
pub enum ImageChange {
    Keep,
    Replace(UploadObject),
    Remove,
}

pub struct NewsService {
    content: ContentService<NewsRepo>,
    storage: Arc<dyn ObjectStorage>,
    bucket: String,
    max_image_bytes: usize,
}

impl NewsService {
    pub fn new(repo: Arc<NewsRepo>, storage: Arc<dyn ObjectStorage>, bucket: impl Into<String>) -> Self {
        Self {
            content: ContentService::new(repo, MoveStrategy::Swap, "news"),
            storage,
            bucket: bucket.into(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn with_max_image_bytes(mut self, max_image_bytes: usize) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    pub async fn list(&self) -> Result<Vec<news::Model>, ServiceError> {
        self.content.list().await
    }

    pub async fn localized(&self, lang: Language) -> Result<Vec<NewsView>, ServiceError> {
        Ok(self.list().await?.iter().map(|n| n.localized(lang)).collect())
    }

    #[instrument(skip(self, draft, image))]
    pub async fn add(&self, mut draft: NewsDraft, image: Option<UploadObject>) -> Result<news::Model, ServiceError> {
        draft.validate()?;
        if let Some(upload) = image {
            draft.image_url = Some(self.upload_image(&upload).await?);
        }
        self.content.add(draft).await
    }

    /// Update every text field; `image` decides what happens to the picture.
    /// A replaced or removed image is deleted from storage after the row is saved.
    #[instrument(skip(self, draft, image))]
    pub async fn update(&self, id: i32, mut draft: NewsDraft, image: ImageChange) -> Result<news::Model, ServiceError> {
        draft.validate()?;
        let existing = self.content.get(id).await?;
        let stale = match image {
            ImageChange::Keep => {
                draft.image_url = existing.image_url;
                None
            }
            ImageChange::Replace(upload) => {
                draft.image_url = Some(self.upload_image(&upload).await?);
                existing.image_url
            }
            ImageChange::Remove => {
                draft.image_url = None;
                existing.image_url
            }
        };
        let updated = self.content.update(id, draft).await?;
        if let Some(url) = stale {
            self.delete_image(&url).await;
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<news::Model, ServiceError> {
        let removed = self.content.delete(id).await?;
        if let Some(url) = &removed.image_url {
            self.delete_image(url).await;
        }
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

    async fn upload_image(&self, upload: &UploadObject) -> Result<String, ServiceError> {
        upload.validate_image(self.max_image_bytes)?;
        let path = object_path(NEWS_FOLDER, upload);
        self.storage.upload(&self.bucket, &path, upload).await?;
        info!(%path, "news image uploaded");
        Ok(self.storage.public_url(&self.bucket, &path))
    }

    // Best effort: the row change has already been committed.
    async fn delete_image(&self, url: &str) {
        let Some(path) = path_from_public_url(url, &self.bucket) else {
            return;
        };
        if let Err(e) = self.storage.remove(&self.bucket, &[path.clone()]).await {
            warn!(%path, error = %e, "failed to remove news image");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::test_support::{news_fixture, png, NEWS_BUCKET};

    fn draft(title: &str, day: u32) -> NewsDraft {
        NewsDraft {
            title: title.into(),
            title_si: format!("{title} (si)"),
            description: "Body".into(),
            description_si: "Body (si)".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn add_with_image_stores_public_url() {
        let (svc, _repo, storage) = news_fixture();
        let post = svc.add(draft("Opening", 1), Some(png("hall.jpg"))).await.unwrap();
        let url = post.image_url.unwrap();
        let path = path_from_public_url(&url, NEWS_BUCKET).unwrap();
        assert!(path.starts_with("news/"));
        assert!(storage.contains(NEWS_BUCKET, &path));
        assert_eq!(post.order_index, Some(0));
    }

    #[tokio::test]
    async fn invalid_draft_uploads_nothing() {
        let (svc, _repo, storage) = news_fixture();
        let bad = NewsDraft { title: " ".into(), ..draft("x", 1) };
        let err = svc.add(bad, Some(png("a.png"))).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(storage.object_count(), 0);
    }

    #[tokio::test]
    async fn oversized_image_is_rejected_before_any_write() {
        let (svc, repo, storage) = news_fixture();
        let post = svc.add(draft("Opening", 1), Some(png("old.png"))).await.unwrap();

        let huge = UploadObject { bytes: vec![0; DEFAULT_MAX_IMAGE_BYTES + 1], ..png("big.png") };
        let err = svc.update(post.id, draft("Renamed", 1), ImageChange::Replace(huge)).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(storage.object_count(), 1);
        assert_eq!(repo.snapshot()[0].title, "Opening");
    }

    #[tokio::test]
    async fn blank_descriptions_are_rejected() {
        let (svc, repo, _storage) = news_fixture();
        let err = svc
            .add(NewsDraft { description: String::new(), description_si: String::new(), ..draft("x", 1) }, None)
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        let err = svc
            .add(NewsDraft { description_si: "  ".into(), ..draft("x", 1) }, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("description_si is required"));
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn replacing_image_removes_old_object() {
        let (svc, _repo, storage) = news_fixture();
        let post = svc.add(draft("Opening", 1), Some(png("old.png"))).await.unwrap();
        let old_url = post.image_url.clone().unwrap();

        let updated = svc
            .update(post.id, draft("Opening", 1), ImageChange::Replace(png("new.png")))
            .await
            .unwrap();
        let new_url = updated.image_url.unwrap();
        assert_ne!(new_url, old_url);
        assert_eq!(storage.object_count(), 1);
        assert!(storage.contains(NEWS_BUCKET, &path_from_public_url(&new_url, NEWS_BUCKET).unwrap()));
    }

    #[tokio::test]
    async fn keep_and_remove_image() {
        let (svc, _repo, storage) = news_fixture();
        let post = svc.add(draft("Opening", 1), Some(png("a.png"))).await.unwrap();

        let kept = svc.update(post.id, draft("Renamed", 1), ImageChange::Keep).await.unwrap();
        assert_eq!(kept.title, "Renamed");
        assert_eq!(kept.image_url, post.image_url);

        let cleared = svc.update(post.id, draft("Renamed", 1), ImageChange::Remove).await.unwrap();
        assert_eq!(cleared.image_url, None);
        assert_eq!(storage.object_count(), 0);
    }

    #[tokio::test]
    async fn move_swaps_stored_indices() {
        let (svc, repo, _storage) = news_fixture();
        let a = svc.add(draft("A", 1), None).await.unwrap();
        let b = svc.add(draft("B", 2), None).await.unwrap();
        repo.set_order_index(b.id, 7).await.unwrap();

        assert!(svc.move_item(b.id, Direction::Up).await.unwrap());
        let rows = svc.list().await.unwrap();
        assert_eq!(rows.iter().map(|r| (r.id, r.order_index)).collect::<Vec<_>>(), vec![(b.id, Some(0)), (a.id, Some(7))]);
    }

    #[tokio::test]
    async fn move_next_to_unindexed_row_fails() {
        let legacy = news::Model {
            id: 9,
            title: "Legacy".into(),
            title_si: "Legacy".into(),
            description: String::new(),
            description_si: String::new(),
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            image_url: None,
            order_index: None,
            created_at: chrono::Utc::now().into(),
        };
        let repo = Arc::new(crate::content::mock::MemoryRepository::with_rows(vec![legacy]));
        let svc = NewsService::new(repo, Arc::new(crate::storage::memory::MemoryStorage::default()), NEWS_BUCKET);
        let a = svc.add(draft("A", 1), None).await.unwrap();

        let err = svc.move_item(a.id, Direction::Down).await.unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("order management not available"));
    }

    #[tokio::test]
    async fn delete_with_image_is_best_effort() {
        let (svc, repo, storage) = news_fixture();
        let post = svc.add(draft("A", 1), Some(png("a.png"))).await.unwrap();
        storage.fail_removals(true);
        svc.delete(post.id).await.unwrap();
        assert!(repo.snapshot().is_empty());
    }
}
