use sea_orm::{entity::prelude::*, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::language::Language;
use crate::validate::{non_blank, require_text, Validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub title_si: String,
    pub description: String,
    pub description_si: String,
    pub date: Date,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsDraft {
    pub title: String,
    pub title_si: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_si: String,
    pub date: Date,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Validate for NewsDraft {
    fn validate(&self) -> Result<(), ModelError> {
        require_text("title", &self.title)?;
        require_text("title_si", &self.title_si)?;
        require_text("description", &self.description)?;
        require_text("description_si", &self.description_si)
    }
}

impl NewsDraft {
    pub fn into_active_model(self, order_index: i32) -> ActiveModel {
        let mut am = ActiveModel {
            order_index: Set(Some(order_index)),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };
        self.apply_to(&mut am);
        am
    }

    /// Every editable field is written, so a draft without an image clears it.
    pub fn apply_to(self, am: &mut ActiveModel) {
        am.title = Set(self.title);
        am.title_si = Set(self.title_si);
        am.description = Set(self.description);
        am.description_si = Set(self.description_si);
        am.date = Set(self.date);
        am.image_url = Set(non_blank(self.image_url));
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: Date,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
}

impl Model {
    pub fn localized(&self, lang: Language) -> NewsView {
        NewsView {
            id: self.id,
            title: lang.pick(&self.title, &self.title_si).to_string(),
            description: lang.pick(&self.description, &self.description_si).to_string(),
            date: self.date,
            image_url: self.image_url.clone(),
            order_index: self.order_index,
        }
    }
}
