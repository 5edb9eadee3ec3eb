use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{public_url_for, ObjectStorage, StorageError, UploadObject};

pub const MEMORY_BASE_URL: &str = "memory://storage";

/// In-process bucket store with switchable failures.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<(String, String), UploadObject>>,
    fail_uploads: AtomicBool,
    fail_removals: AtomicBool,
}

impl MemoryStorage {
    pub fn contains(&self, bucket: &str, path: &str) -> bool {
        self.objects
            .lock()
            .map(|m| m.contains_key(&(bucket.to_string(), path.to_string())))
            .unwrap_or(false)
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn fail_uploads(&self, on: bool) {
        self.fail_uploads.store(on, Ordering::SeqCst);
    }

    pub fn fail_removals(&self, on: bool) {
        self.fail_removals.store(on, Ordering::SeqCst);
    }

    fn poisoned() -> StorageError {
        StorageError::Http("memory storage lock poisoned".into())
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(&self, bucket: &str, path: &str, object: &UploadObject) -> Result<(), StorageError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::Rejected { status: 500, body: "upload disabled".into() });
        }
        let mut objects = self.objects.lock().map_err(|_| Self::poisoned())?;
        let key = (bucket.to_string(), path.to_string());
        if objects.contains_key(&key) {
            return Err(StorageError::Rejected { status: 409, body: "The resource already exists".into() });
        }
        objects.insert(key, object.clone());
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        public_url_for(MEMORY_BASE_URL, bucket, path)
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StorageError> {
        if self.fail_removals.load(Ordering::SeqCst) {
            return Err(StorageError::Rejected { status: 500, body: "remove disabled".into() });
        }
        let mut objects = self.objects.lock().map_err(|_| Self::poisoned())?;
        for p in paths {
            objects.remove(&(bucket.to_string(), p.clone()));
        }
        Ok(())
    }
}
