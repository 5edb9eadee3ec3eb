//! In-memory repository for tests and doc examples.

use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use models::branch::{self, BranchDraft};
use models::news::{self, NewsDraft};
use models::service_item::{self, ServiceDraft};
use models::slider::{self, SliderDraft};

use super::{OrderedRecord, OrderedRepository};
use crate::errors::ServiceError;
use crate::ordering::sort_indexed_first;

/// Rows that [`MemoryRepository`] can build and patch from a draft.
pub trait MemoryRecord: OrderedRecord {
    type Draft: Send + Sync + 'static;

    fn create(id: i32, draft: Self::Draft, order_index: i32) -> Self;
    fn apply(&mut self, draft: Self::Draft);
    fn set_order_index(&mut self, order_index: i32);

    fn sort(rows: &mut [Self]) {
        rows.sort_by_key(|r| (r.order_index().is_none(), r.order_index(), r.id()));
    }
}

impl MemoryRecord for slider::Model {
    type Draft = SliderDraft;

    fn create(id: i32, draft: SliderDraft, order_index: i32) -> Self {
        Self { id, image_url: draft.image_url, order_index, created_at: Utc::now().into() }
    }

    fn apply(&mut self, draft: SliderDraft) {
        self.image_url = draft.image_url;
    }

    fn set_order_index(&mut self, order_index: i32) {
        self.order_index = order_index;
    }
}

impl MemoryRecord for branch::Model {
    type Draft = BranchDraft;

    fn create(id: i32, draft: BranchDraft, order_index: i32) -> Self {
        let mut row = Self {
            id,
            title: String::new(),
            description: String::new(),
            title_si: String::new(),
            description_si: String::new(),
            address: None,
            address_si: None,
            contact_number: None,
            map_url: None,
            is_coming_soon: false,
            order_index,
            created_at: Utc::now().into(),
        };
        row.apply(draft);
        row
    }

    fn apply(&mut self, draft: BranchDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.title_si = draft.title_si;
        self.description_si = draft.description_si;
        self.address = draft.address;
        self.address_si = draft.address_si;
        self.contact_number = draft.contact_number;
        self.map_url = draft.map_url;
        self.is_coming_soon = draft.is_coming_soon;
    }

    fn set_order_index(&mut self, order_index: i32) {
        self.order_index = order_index;
    }
}

impl MemoryRecord for service_item::Model {
    type Draft = ServiceDraft;

    fn create(id: i32, draft: ServiceDraft, order_index: i32) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            title_si: draft.title_si,
            description_si: draft.description_si,
            order_index,
            created_at: Utc::now().into(),
        }
    }

    fn apply(&mut self, draft: ServiceDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.title_si = draft.title_si;
        self.description_si = draft.description_si;
    }

    fn set_order_index(&mut self, order_index: i32) {
        self.order_index = order_index;
    }
}

impl MemoryRecord for news::Model {
    type Draft = NewsDraft;

    fn create(id: i32, draft: NewsDraft, order_index: i32) -> Self {
        Self {
            id,
            title: draft.title,
            title_si: draft.title_si,
            description: draft.description,
            description_si: draft.description_si,
            date: draft.date,
            image_url: draft.image_url,
            order_index: Some(order_index),
            created_at: Utc::now().into(),
        }
    }

    fn apply(&mut self, draft: NewsDraft) {
        self.title = draft.title;
        self.title_si = draft.title_si;
        self.description = draft.description;
        self.description_si = draft.description_si;
        self.date = draft.date;
        self.image_url = draft.image_url;
    }

    fn set_order_index(&mut self, order_index: i32) {
        self.order_index = Some(order_index);
    }

    fn sort(rows: &mut [Self]) {
        sort_indexed_first(rows, |r| r.order_index, |a, b| b.date.cmp(&a.date));
    }
}

/// Vec-backed repository with write counting and failure injection.
pub struct MemoryRepository<T> {
    rows: Mutex<Vec<T>>,
    next_id: AtomicUsize,
    index_writes: AtomicUsize,
    write_budget: Mutex<Option<usize>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            index_writes: AtomicUsize::new(0),
            write_budget: Mutex::new(None),
        }
    }
}

impl<T: MemoryRecord> MemoryRepository<T> {
    /// Seed rows verbatim (ids and indices as given).
    pub fn with_rows(rows: Vec<T>) -> Self {
        let next = rows.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        let repo = Self::default();
        repo.next_id.store(next as usize, AtomicOrdering::SeqCst);
        if let Ok(mut guard) = repo.rows.lock() {
            *guard = rows;
        }
        repo
    }

    /// Number of successful `set_order_index` calls so far.
    pub fn index_writes(&self) -> usize {
        self.index_writes.load(AtomicOrdering::SeqCst)
    }

    /// Let the next `n` index writes succeed and fail every one after that.
    pub fn fail_index_writes_after(&self, n: usize) {
        if let Ok(mut budget) = self.write_budget.lock() {
            *budget = Some(n);
        }
    }

    /// Rows in storage order, without sorting.
    pub fn snapshot(&self) -> Vec<T> {
        self.rows.lock().map(|g| g.clone()).unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>, ServiceError> {
        self.rows.lock().map_err(|_| ServiceError::Db("memory repository lock poisoned".into()))
    }

    fn take_write_budget(&self) -> Result<(), ServiceError> {
        let mut budget = self
            .write_budget
            .lock()
            .map_err(|_| ServiceError::Db("memory repository lock poisoned".into()))?;
        match budget.as_mut() {
            Some(0) => Err(ServiceError::Db("injected write failure".into())),
            Some(n) => {
                *n -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<T: MemoryRecord> OrderedRepository for MemoryRepository<T> {
    type Record = T;
    type Draft = T::Draft;

    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let mut rows = self.lock()?.clone();
        T::sort(&mut rows);
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<T>, ServiceError> {
        Ok(self.lock()?.iter().find(|r| r.id() == id).cloned())
    }

    async fn max_order_index(&self) -> Result<Option<i32>, ServiceError> {
        Ok(self.lock()?.iter().filter_map(|r| r.order_index()).max())
    }

    async fn insert(&self, draft: T::Draft, order_index: i32) -> Result<T, ServiceError> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst) as i32;
        let row = T::create(id, draft, order_index);
        self.lock()?.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, draft: T::Draft) -> Result<T, ServiceError> {
        let mut rows = self.lock()?;
        let row = rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found("row"))?;
        row.apply(draft);
        Ok(row.clone())
    }

    async fn set_order_index(&self, id: i32, order_index: i32) -> Result<(), ServiceError> {
        self.take_write_budget()?;
        let mut rows = self.lock()?;
        let row = rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found("row"))?;
        row.set_order_index(order_index);
        self.index_writes.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut rows = self.lock()?;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        Ok(rows.len() != before)
    }
}
