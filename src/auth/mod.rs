//! Token issuing/verification and password hashing.

pub mod jwt;
pub mod password;

pub use jwt::*;
pub use password::*;
