//! # Domain Layer
//!
//! The query model and the error taxonomy shared by every other layer.
//! This layer is independent of the web framework and the upstream API.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
