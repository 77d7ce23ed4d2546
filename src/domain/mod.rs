pub mod cart;
pub mod comment;
pub mod favorite;
pub mod order;
pub mod product;
pub mod recycled;
pub mod session;
pub mod user;

pub use cart::*;
pub use comment::*;
pub use favorite::*;
pub use order::*;
pub use product::*;
pub use recycled::*;
pub use session::*;
pub use user::*;
