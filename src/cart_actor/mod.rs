//! Cart collection: per-user product+size rows with quantities.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;
