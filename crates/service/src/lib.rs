//! Service layer for the site's editable content.
//! - `ordering` holds the pure order-index rules; `content` applies them
//!   through a repository abstraction shared by every entity, with SeaORM
//!   implementations in `repo`.
//! - `slider` and `news` add object-storage handling (`storage`) on top;
//!   `catalog` covers branches and services.
//! - `admin_gate` implements the flag + login-time check guarding admin screens.

pub mod errors;
pub mod ordering;
pub mod content;
pub mod repo;
pub mod storage;
pub mod catalog;
pub mod slider;
pub mod news;
pub mod admin_gate;
#[cfg(test)]
pub mod test_support;
