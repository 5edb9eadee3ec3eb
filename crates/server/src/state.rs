use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::admin_gate::AdminGate;
use service::catalog::{self, BranchService, ServiceCatalog};
use service::news::NewsService;
use service::repo::{SeaOrmBranchRepository, SeaOrmNewsRepository, SeaOrmServiceRepository, SeaOrmSliderRepository};
use service::slider::SliderService;
use service::storage::ObjectStorage;

/// Shared handler state; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub sliders: Arc<SliderService>,
    pub branches: Arc<BranchService>,
    pub services: Arc<ServiceCatalog>,
    pub news: Arc<NewsService>,
    pub gate: Arc<AdminGate>,
}

impl AppState {
    /// Wire the SeaORM repositories and the given object storage.
    pub fn with_database(
        db: DatabaseConnection,
        storage: Arc<dyn ObjectStorage>,
        storage_cfg: &configs::StorageConfig,
        gate: AdminGate,
    ) -> Self {
        Self {
            sliders: Arc::new(SliderService::new(
                Arc::new(SeaOrmSliderRepository { db: db.clone() }),
                storage.clone(),
                storage_cfg.slider_bucket.clone(),
            )
            .with_max_image_bytes(storage_cfg.max_image_bytes)),
            branches: Arc::new(catalog::branch_service(Arc::new(SeaOrmBranchRepository { db: db.clone() }))),
            services: Arc::new(catalog::service_catalog(Arc::new(SeaOrmServiceRepository { db: db.clone() }))),
            news: Arc::new(NewsService::new(
                Arc::new(SeaOrmNewsRepository { db }),
                storage,
                storage_cfg.news_bucket.clone(),
            )
            .with_max_image_bytes(storage_cfg.max_image_bytes)),
            gate: Arc::new(gate),
        }
    }
}
