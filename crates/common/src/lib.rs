//! Shared building blocks for the CMS workspace: logging bootstrap,
//! runtime/environment checks and the JSON response types every route uses.

pub mod types;
pub mod utils;
pub mod env;
