//! User collection: records, lookup filters, and user-specific errors.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;
