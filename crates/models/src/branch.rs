use sea_orm::{entity::prelude::*, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::language::Language;
use crate::validate::{non_blank, optional_http_url, require_text, Validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub title_si: String,
    pub description_si: String,
    pub address: Option<String>,
    pub address_si: Option<String>,
    pub contact_number: Option<String>,
    pub map_url: Option<String>,
    pub is_coming_soon: bool,
    pub order_index: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title_si: String,
    #[serde(default)]
    pub description_si: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_si: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub map_url: Option<String>,
    #[serde(default)]
    pub is_coming_soon: bool,
}

impl Validate for BranchDraft {
    fn validate(&self) -> Result<(), ModelError> {
        require_text("title", &self.title)?;
        optional_http_url("map_url", self.map_url.as_deref())
    }
}

impl BranchDraft {
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
        am.address = Set(non_blank(self.address));
        am.address_si = Set(non_blank(self.address_si));
        am.contact_number = Set(non_blank(self.contact_number));
        am.map_url = Set(non_blank(self.map_url));
        am.is_coming_soon = Set(self.is_coming_soon);
    }
}

/// Branch as shown on the public site in one language.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub map_url: Option<String>,
    pub is_coming_soon: bool,
    pub order_index: i32,
}

impl Model {
    pub fn localized(&self, lang: Language) -> BranchView {
        BranchView {
            id: self.id,
            title: lang.pick(&self.title, &self.title_si).to_string(),
            description: lang.pick(&self.description, &self.description_si).to_string(),
            address: lang.pick_opt(self.address.as_deref(), self.address_si.as_deref()),
            contact_number: self.contact_number.clone(),
            map_url: self.map_url.clone(),
            is_coming_soon: self.is_coming_soon,
            order_index: self.order_index,
        }
    }
}
