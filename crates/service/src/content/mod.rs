//! Ordered-content CRUD shared by sliders, branches, services and news.
//!
//! Every table has the same contract: list in display order, insert at the
//! end (`max + 1`), update/delete by id, and reorder by rewriting
//! `order_index`. [`OrderedRepository`] is the persistence seam and
//! [`ContentService`] applies the rules from [`crate::ordering`] on top of it.

pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use models::{branch, news, service_item, slider, Validate};

use crate::errors::ServiceError;
use crate::ordering::{self, Direction, IndexWrite, MoveStrategy, PlanError};

/// A stored row with a position among its siblings.
pub trait OrderedRecord: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
    fn order_index(&self) -> Option<i32>;
}

impl OrderedRecord for slider::Model {
    fn id(&self) -> i32 { self.id }
    fn order_index(&self) -> Option<i32> { Some(self.order_index) }
}

impl OrderedRecord for branch::Model {
    fn id(&self) -> i32 { self.id }
    fn order_index(&self) -> Option<i32> { Some(self.order_index) }
}

impl OrderedRecord for service_item::Model {
    fn id(&self) -> i32 { self.id }
    fn order_index(&self) -> Option<i32> { Some(self.order_index) }
}

impl OrderedRecord for news::Model {
    fn id(&self) -> i32 { self.id }
    fn order_index(&self) -> Option<i32> { self.order_index }
}

/// Persistence for one content table.
#[async_trait]
pub trait OrderedRepository: Send + Sync {
    type Record: OrderedRecord;
    type Draft: Send + Sync + 'static;

    /// All rows in display order.
    async fn list(&self) -> Result<Vec<Self::Record>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Self::Record>, ServiceError>;
    /// Largest stored `order_index`, `None` for an empty table.
    async fn max_order_index(&self) -> Result<Option<i32>, ServiceError>;
    async fn insert(&self, draft: Self::Draft, order_index: i32) -> Result<Self::Record, ServiceError>;
    async fn update(&self, id: i32, draft: Self::Draft) -> Result<Self::Record, ServiceError>;
    /// Fails with `NotFound` when no row has this id.
    async fn set_order_index(&self, id: i32, order_index: i32) -> Result<(), ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// CRUD and ordering rules for one entity, independent of the web layer.
pub struct ContentService<R: OrderedRepository + ?Sized> {
    repo: Arc<R>,
    strategy: MoveStrategy,
    entity: &'static str,
}

impl<R> ContentService<R>
where
    R: OrderedRepository + ?Sized,
    R::Draft: Validate,
{
    pub fn new(repo: Arc<R>, strategy: MoveStrategy, entity: &'static str) -> Self {
        Self { repo, strategy, entity }
    }

    pub fn entity(&self) -> &'static str { self.entity }

    pub fn strategy(&self) -> MoveStrategy { self.strategy }

    pub async fn list(&self) -> Result<Vec<R::Record>, ServiceError> {
        let rows = self.repo.list().await?;
        debug!(entity = self.entity, count = rows.len(), "listed");
        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<R::Record, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(self.entity))
    }

    /// Validate and insert at the end of the list.
    ///
    /// The max-index read and the insert are not atomic; two concurrent adds
    /// can receive the same index.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::service_item::ServiceDraft;
    /// use service::content::{mock::MemoryRepository, ContentService};
    /// use service::ordering::MoveStrategy;
    ///
    /// let repo = Arc::new(MemoryRepository::<models::service_item::Model>::default());
    /// let svc = ContentService::new(repo, MoveStrategy::Rewrite, "service");
    /// let draft = ServiceDraft {
    ///     title: "Gold loans".into(),
    ///     description: String::new(),
    ///     title_si: "රන් ණය".into(),
    ///     description_si: String::new(),
    /// };
    /// let first = tokio_test::block_on(svc.add(draft.clone())).unwrap();
    /// let second = tokio_test::block_on(svc.add(draft)).unwrap();
    /// assert_eq!((first.order_index, second.order_index), (0, 1));
    /// ```
    #[instrument(skip(self, draft), fields(entity = self.entity))]
    pub async fn add(&self, draft: R::Draft) -> Result<R::Record, ServiceError> {
        draft.validate()?;
        let max = self.repo.max_order_index().await?;
        let next = ordering::next_order_index(max);
        debug!(next_order_index = next, "computed next order index");
        let created = self.repo.insert(draft, next).await?;
        info!(id = created.id(), order_index = next, "created");
        Ok(created)
    }

    #[instrument(skip(self, draft), fields(entity = self.entity))]
    pub async fn update(&self, id: i32, draft: R::Draft) -> Result<R::Record, ServiceError> {
        draft.validate()?;
        let updated = self.repo.update(id, draft).await?;
        info!(id, "updated");
        Ok(updated)
    }

    /// Delete by id and hand back the removed row.
    #[instrument(skip(self), fields(entity = self.entity))]
    pub async fn delete(&self, id: i32) -> Result<R::Record, ServiceError> {
        let existing = self.get(id).await?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(self.entity));
        }
        info!(id, "deleted");
        Ok(existing)
    }

    /// Whole-list rewrite: `ids[i]` gets `order_index = i`.
    #[instrument(skip(self), fields(entity = self.entity, count = ids.len()))]
    pub async fn reorder(&self, ids: &[i32]) -> Result<(), ServiceError> {
        let writes = ordering::plan_reorder(ids).map_err(|e| self.plan_error(e))?;
        self.apply(&writes).await?;
        info!("reordered");
        Ok(())
    }

    /// Move one step up or down. Returns `false` when the row is already at
    /// that edge; nothing is written in that case.
    #[instrument(skip(self), fields(entity = self.entity))]
    pub async fn move_item(&self, id: i32, direction: Direction) -> Result<bool, ServiceError> {
        let rows: Vec<(i32, Option<i32>)> = self
            .repo
            .list()
            .await?
            .iter()
            .map(|r| (r.id(), r.order_index()))
            .collect();
        let plan = ordering::plan_move(&rows, id, direction, self.strategy)
            .map_err(|e| self.plan_error(e))?;
        match plan {
            Some(writes) => {
                self.apply(&writes).await?;
                info!(writes = writes.len(), "moved");
                Ok(true)
            }
            None => {
                debug!("already at edge; nothing to move");
                Ok(false)
            }
        }
    }

    pub async fn set_order_index(&self, id: i32, order_index: i32) -> Result<(), ServiceError> {
        self.repo.set_order_index(id, order_index).await
    }

    // Sequential and non-transactional: a failure leaves earlier writes in place.
    async fn apply(&self, writes: &[IndexWrite]) -> Result<(), ServiceError> {
        for w in writes {
            debug!(id = w.id, order_index = w.order_index, "write order index");
            self.repo.set_order_index(w.id, w.order_index).await?;
        }
        Ok(())
    }

    fn plan_error(&self, e: PlanError) -> ServiceError {
        match e {
            PlanError::UnknownId(_) => ServiceError::not_found(self.entity),
            PlanError::MissingIndex(id) => ServiceError::Validation(format!(
                "order management not available: {} {} has no order index",
                self.entity, id
            )),
            PlanError::DuplicateId(_) => ServiceError::Validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use models::service_item::{self, ServiceDraft};

    use super::mock::MemoryRepository;
    use super::*;

    fn draft(title: &str) -> ServiceDraft {
        ServiceDraft {
            title: title.into(),
            description: format!("{title} description"),
            title_si: format!("{title} si"),
            description_si: String::new(),
        }
    }

    fn service(strategy: MoveStrategy) -> (Arc<MemoryRepository<service_item::Model>>, ContentService<MemoryRepository<service_item::Model>>) {
        let repo = Arc::new(MemoryRepository::default());
        (repo.clone(), ContentService::new(repo, strategy, "service"))
    }

    fn titles(rows: &[service_item::Model]) -> Vec<&str> {
        rows.iter().map(|r| r.title.as_str()).collect()
    }

    #[tokio::test]
    async fn add_appends_after_current_max() {
        let (repo, svc) = service(MoveStrategy::Rewrite);
        let a = svc.add(draft("A")).await.unwrap();
        assert_eq!(a.order_index, 0);
        // The next index follows the maximum even when positions are skipped.
        svc.set_order_index(a.id, 7).await.unwrap();
        let b = svc.add(draft("B")).await.unwrap();
        assert_eq!(b.order_index, 8);
        assert_eq!(repo.index_writes(), 1);
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_store() {
        let (repo, svc) = service(MoveStrategy::Rewrite);
        let err = svc.add(draft(" ")).await.unwrap_err();
        assert!(err.is_client_error());
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn moving_b_up_yields_b_a_c() {
        let (_, svc) = service(MoveStrategy::Rewrite);
        let _a = svc.add(draft("A")).await.unwrap();
        let b = svc.add(draft("B")).await.unwrap();
        let _c = svc.add(draft("C")).await.unwrap();

        assert!(svc.move_item(b.id, Direction::Up).await.unwrap());
        let rows = svc.list().await.unwrap();
        assert_eq!(titles(&rows), vec!["B", "A", "C"]);
        let indices: Vec<i32> = rows.iter().map(|r| r.order_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn edge_moves_write_nothing() {
        let (repo, svc) = service(MoveStrategy::Rewrite);
        let a = svc.add(draft("A")).await.unwrap();
        let c = svc.add(draft("C")).await.unwrap();
        assert!(!svc.move_item(a.id, Direction::Up).await.unwrap());
        assert!(!svc.move_item(c.id, Direction::Down).await.unwrap());
        assert_eq!(repo.index_writes(), 0);
        assert_eq!(titles(&svc.list().await.unwrap()), vec!["A", "C"]);
    }

    #[tokio::test]
    async fn reorder_writes_positions() {
        let (_, svc) = service(MoveStrategy::Rewrite);
        let mut ids = Vec::new();
        for t in ["A", "B", "C", "D"] {
            ids.push(svc.add(draft(t)).await.unwrap().id);
        }
        ids.reverse();
        svc.reorder(&ids).await.unwrap();
        let rows = svc.list().await.unwrap();
        assert_eq!(titles(&rows), vec!["D", "C", "B", "A"]);
        for (pos, row) in rows.iter().enumerate() {
            assert_eq!(row.order_index, pos as i32);
        }
    }

    #[tokio::test]
    async fn reorder_rejects_duplicates_before_writing() {
        let (repo, svc) = service(MoveStrategy::Rewrite);
        let a = svc.add(draft("A")).await.unwrap();
        let err = svc.reorder(&[a.id, a.id]).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(repo.index_writes(), 0);
    }

    #[tokio::test]
    async fn failed_write_leaves_partial_reorder() {
        let (repo, svc) = service(MoveStrategy::Rewrite);
        let mut ids = Vec::new();
        for t in ["A", "B", "C"] {
            ids.push(svc.add(draft(t)).await.unwrap().id);
        }
        repo.fail_index_writes_after(1);
        let reversed: Vec<i32> = ids.iter().rev().copied().collect();
        assert!(svc.reorder(&reversed).await.is_err());
        // C got index 0 before the failure, A still holds 0 as well.
        let snapshot = repo.snapshot();
        let c = snapshot.iter().find(|r| r.title == "C").unwrap();
        let a = snapshot.iter().find(|r| r.title == "A").unwrap();
        assert_eq!((c.order_index, a.order_index), (0, 0));
    }

    #[tokio::test]
    async fn delete_removes_row_from_listing() {
        let (_, svc) = service(MoveStrategy::Rewrite);
        let a = svc.add(draft("A")).await.unwrap();
        let b = svc.add(draft("B")).await.unwrap();
        let removed = svc.delete(a.id).await.unwrap();
        assert_eq!(removed.id, a.id);
        let rows = svc.list().await.unwrap();
        assert!(rows.iter().all(|r| r.id != a.id));
        assert_eq!(rows[0].id, b.id);
        assert!(matches!(svc.delete(a.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn moving_unknown_id_is_not_found() {
        let (_, svc) = service(MoveStrategy::Positional);
        svc.add(draft("A")).await.unwrap();
        assert!(matches!(svc.move_item(404, Direction::Up).await, Err(ServiceError::NotFound(_))));
    }
}
