use sea_orm::{entity::prelude::*, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate::{require_text, Validate}};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sliders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image_url: String,
    pub order_index: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A slider row is created from an already-uploaded image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderDraft {
    pub image_url: String,
}

impl Validate for SliderDraft {
    fn validate(&self) -> Result<(), ModelError> {
        require_text("image_url", &self.image_url)
    }
}

impl SliderDraft {
    pub fn into_active_model(self, order_index: i32) -> ActiveModel {
        ActiveModel {
            image_url: Set(self.image_url),
            order_index: Set(order_index),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
    }

    pub fn apply_to(self, am: &mut ActiveModel) {
        am.image_url = Set(self.image_url);
    }
}
