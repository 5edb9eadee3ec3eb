use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::branch::{self, BranchDraft};

use super::db_err;
use crate::content::OrderedRepository;
use crate::errors::ServiceError;

pub struct SeaOrmBranchRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl OrderedRepository for SeaOrmBranchRepository {
    type Record = branch::Model;
    type Draft = BranchDraft;

    async fn list(&self) -> Result<Vec<branch::Model>, ServiceError> {
        branch::Entity::find()
            .order_by_asc(branch::Column::OrderIndex)
            .order_by_asc(branch::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn get(&self, id: i32) -> Result<Option<branch::Model>, ServiceError> {
        branch::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn max_order_index(&self) -> Result<Option<i32>, ServiceError> {
        let top = branch::Entity::find()
            .order_by_desc(branch::Column::OrderIndex)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(top.map(|m| m.order_index))
    }

    async fn insert(&self, draft: BranchDraft, order_index: i32) -> Result<branch::Model, ServiceError> {
        draft.into_active_model(order_index).insert(&self.db).await.map_err(db_err)
    }

    async fn update(&self, id: i32, draft: BranchDraft) -> Result<branch::Model, ServiceError> {
        let mut am: branch::ActiveModel = branch::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| ServiceError::not_found("branch"))?
            .into();
        draft.apply_to(&mut am);
        am.update(&self.db).await.map_err(db_err)
    }

    async fn set_order_index(&self, id: i32, order_index: i32) -> Result<(), ServiceError> {
        let res = branch::Entity::update_many()
            .col_expr(branch::Column::OrderIndex, Expr::value(order_index))
            .filter(branch::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("branch"));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = branch::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }
}
