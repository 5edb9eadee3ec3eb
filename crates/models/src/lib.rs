//! SeaORM entities for the site's editable content, their write inputs
//! ("drafts"), validation and localized read views.

pub mod errors;
pub mod db;
pub mod language;
pub mod validate;
pub mod slider;
pub mod branch;
pub mod service_item;
pub mod news;

pub use language::Language;
pub use validate::Validate;
