#![cfg(test)]
use std::sync::Arc;

use models::{news, slider};

use crate::content::mock::MemoryRepository;
use crate::news::NewsService;
use crate::slider::SliderService;
use crate::storage::memory::MemoryStorage;
use crate::storage::UploadObject;

pub const SLIDER_BUCKET: &str = "slider-images";
pub const NEWS_BUCKET: &str = "news-images";

pub fn png(name: &str) -> UploadObject {
    UploadObject {
        file_name: name.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

pub fn slider_fixture() -> (SliderService, Arc<MemoryRepository<slider::Model>>, Arc<MemoryStorage>) {
    let repo = Arc::new(MemoryRepository::<slider::Model>::default());
    let storage = Arc::new(MemoryStorage::default());
    let svc = SliderService::new(repo.clone(), storage.clone(), SLIDER_BUCKET);
    (svc, repo, storage)
}

pub fn news_fixture() -> (NewsService, Arc<MemoryRepository<news::Model>>, Arc<MemoryStorage>) {
    let repo = Arc::new(MemoryRepository::<news::Model>::default());
    let storage = Arc::new(MemoryStorage::default());
    let svc = NewsService::new(repo.clone(), storage.clone(), NEWS_BUCKET);
    (svc, repo, storage)
}
