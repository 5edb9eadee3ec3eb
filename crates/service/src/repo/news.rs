use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::news::{self, NewsDraft};

use super::db_err;
use crate::content::OrderedRepository;
use crate::errors::ServiceError;
use crate::ordering::sort_indexed_first;

/// News rows may predate ordering and carry no `order_index`.
pub struct SeaOrmNewsRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmNewsRepository {
    /// Drop a row's index so it falls back to date ordering.
    pub async fn clear_order_index(&self, id: i32) -> Result<(), ServiceError> {
        news::Entity::update_many()
            .col_expr(news::Column::OrderIndex, Expr::value(Option::<i32>::None))
            .filter(news::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

#[async_trait]
impl OrderedRepository for SeaOrmNewsRepository {
    type Record = news::Model;
    type Draft = NewsDraft;

    // NULL placement differs between backends, so the final order is settled here.
    async fn list(&self) -> Result<Vec<news::Model>, ServiceError> {
        let mut rows = news::Entity::find()
            .order_by_desc(news::Column::Date)
            .order_by_asc(news::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        sort_indexed_first(&mut rows, |r| r.order_index, |a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<news::Model>, ServiceError> {
        news::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn max_order_index(&self) -> Result<Option<i32>, ServiceError> {
        let top = news::Entity::find()
            .filter(news::Column::OrderIndex.is_not_null())
            .order_by_desc(news::Column::OrderIndex)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(top.and_then(|m| m.order_index))
    }

    async fn insert(&self, draft: NewsDraft, order_index: i32) -> Result<news::Model, ServiceError> {
        draft.into_active_model(order_index).insert(&self.db).await.map_err(db_err)
    }

    async fn update(&self, id: i32, draft: NewsDraft) -> Result<news::Model, ServiceError> {
        let mut am: news::ActiveModel = news::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| ServiceError::not_found("news"))?
            .into();
        draft.apply_to(&mut am);
        am.update(&self.db).await.map_err(db_err)
    }

    async fn set_order_index(&self, id: i32, order_index: i32) -> Result<(), ServiceError> {
        let res = news::Entity::update_many()
            .col_expr(news::Column::OrderIndex, Expr::value(order_index))
            .filter(news::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("news"));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = news::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }
}
