//! Typed clients over the collection actors. Thin wrappers except where a
//! flow genuinely orchestrates several collections (cart merge, checkout).

#[macro_use]
pub mod macros;

pub mod cart_client;
pub mod comment_client;
pub mod favorite_client;
pub mod order_client;
pub mod product_client;
pub mod recycled_client;
pub mod session_client;
pub mod user_client;

pub use cart_client::*;
pub use comment_client::*;
pub use favorite_client::*;
pub use order_client::*;
pub use product_client::*;
pub use recycled_client::*;
pub use session_client::*;
pub use user_client::*;
