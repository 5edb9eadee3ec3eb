//! HTTP surface of the CMS: public content API, cookie-gated admin API and
//! the OpenAPI document.

pub mod errors;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{load_config, run};
