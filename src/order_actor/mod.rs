//! Order collection: checkout snapshots and status actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;
