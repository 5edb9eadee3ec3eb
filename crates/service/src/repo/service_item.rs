use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::service_item::{self, ServiceDraft};

use super::db_err;
use crate::content::OrderedRepository;
use crate::errors::ServiceError;

pub struct SeaOrmServiceRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl OrderedRepository for SeaOrmServiceRepository {
    type Record = service_item::Model;
    type Draft = ServiceDraft;

    async fn list(&self) -> Result<Vec<service_item::Model>, ServiceError> {
        service_item::Entity::find()
            .order_by_asc(service_item::Column::OrderIndex)
            .order_by_asc(service_item::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn get(&self, id: i32) -> Result<Option<service_item::Model>, ServiceError> {
        service_item::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn max_order_index(&self) -> Result<Option<i32>, ServiceError> {
        let top = service_item::Entity::find()
            .order_by_desc(service_item::Column::OrderIndex)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(top.map(|m| m.order_index))
    }

    async fn insert(&self, draft: ServiceDraft, order_index: i32) -> Result<service_item::Model, ServiceError> {
        draft.into_active_model(order_index).insert(&self.db).await.map_err(db_err)
    }

    async fn update(&self, id: i32, draft: ServiceDraft) -> Result<service_item::Model, ServiceError> {
        let mut am: service_item::ActiveModel = service_item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| ServiceError::not_found("service"))?
            .into();
        draft.apply_to(&mut am);
        am.update(&self.db).await.map_err(db_err)
    }

    async fn set_order_index(&self, id: i32, order_index: i32) -> Result<(), ServiceError> {
        let res = service_item::Entity::update_many()
            .col_expr(service_item::Column::OrderIndex, Expr::value(order_index))
            .filter(service_item::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("service"));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = service_item::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }
}
