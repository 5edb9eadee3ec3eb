//! Pawning services offered by the business (table `services`).

use sea_orm::{entity::prelude::*, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::language::Language;
use crate::validate::{require_text, Validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub title_si: String,
    pub description_si: String,
    pub order_index: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title_si: String,
    #[serde(default)]
    pub description_si: String,
}

impl Validate for ServiceDraft {
    fn validate(&self) -> Result<(), ModelError> {
        require_text("title", &self.title)
    }
}

impl ServiceDraft {
    pub fn into_active_model(self, order_index: i32) -> ActiveModel {
        let mut am = ActiveModel {
            order_index: Set(order_index),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };
        self.apply_to(&mut am);
        am
    }

    pub fn apply_to(self, am: &mut ActiveModel) {
        am.title = Set(self.title);
        am.description = Set(self.description);
        am.title_si = Set(self.title_si);
        am.description_si = Set(self.description_si);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub order_index: i32,
}

impl Model {
    pub fn localized(&self, lang: Language) -> ServiceView {
        ServiceView {
            id: self.id,
            title: lang.pick(&self.title, &self.title_si).to_string(),
            description: lang.pick(&self.description, &self.description_si).to_string(),
            order_index: self.order_index,
        }
    }
}
