//! Branches and services: plain ordered text content, reordered by whole-list
//! rewrite.

use std::sync::Arc;

use models::branch::{self, BranchDraft, BranchView};
use models::service_item::{self, ServiceDraft, ServiceView};
use models::Language;

use crate::content::{ContentService, OrderedRepository};
use crate::errors::ServiceError;
use crate::ordering::MoveStrategy;

pub type BranchRepo = dyn OrderedRepository<Record = branch::Model, Draft = BranchDraft>;
pub type ServiceRepo = dyn OrderedRepository<Record = service_item::Model, Draft = ServiceDraft>;

pub type BranchService = ContentService<BranchRepo>;
pub type ServiceCatalog = ContentService<ServiceRepo>;

pub fn branch_service(repo: Arc<BranchRepo>) -> BranchService {
    ContentService::new(repo, MoveStrategy::Rewrite, "branch")
}

pub fn service_catalog(repo: Arc<ServiceRepo>) -> ServiceCatalog {
    ContentService::new(repo, MoveStrategy::Rewrite, "service")
}

pub async fn localized_branches(svc: &BranchService, lang: Language) -> Result<Vec<BranchView>, ServiceError> {
    Ok(svc.list().await?.iter().map(|b| b.localized(lang)).collect())
}

pub async fn localized_services(svc: &ServiceCatalog, lang: Language) -> Result<Vec<ServiceView>, ServiceError> {
    Ok(svc.list().await?.iter().map(|s| s.localized(lang)).collect())
}
