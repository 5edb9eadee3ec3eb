use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::slider::{self, SliderDraft};

use super::db_err;
use crate::content::OrderedRepository;
use crate::errors::ServiceError;

pub struct SeaOrmSliderRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl OrderedRepository for SeaOrmSliderRepository {
    type Record = slider::Model;
    type Draft = SliderDraft;

    async fn list(&self) -> Result<Vec<slider::Model>, ServiceError> {
        slider::Entity::find()
            .order_by_asc(slider::Column::OrderIndex)
            .order_by_asc(slider::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn get(&self, id: i32) -> Result<Option<slider::Model>, ServiceError> {
        slider::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn max_order_index(&self) -> Result<Option<i32>, ServiceError> {
        let top = slider::Entity::find()
            .order_by_desc(slider::Column::OrderIndex)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(top.map(|m| m.order_index))
    }

    async fn insert(&self, draft: SliderDraft, order_index: i32) -> Result<slider::Model, ServiceError> {
        draft.into_active_model(order_index).insert(&self.db).await.map_err(db_err)
    }

    async fn update(&self, id: i32, draft: SliderDraft) -> Result<slider::Model, ServiceError> {
        let mut am: slider::ActiveModel = slider::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| ServiceError::not_found("slider"))?
            .into();
        draft.apply_to(&mut am);
        am.update(&self.db).await.map_err(db_err)
    }

    async fn set_order_index(&self, id: i32, order_index: i32) -> Result<(), ServiceError> {
        let res = slider::Entity::update_many()
            .col_expr(slider::Column::OrderIndex, Expr::value(order_index))
            .filter(slider::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("slider"));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = slider::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }
}
