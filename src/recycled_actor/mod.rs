//! Recycle marketplace collection: secondhand listings with a visibility flag.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;
