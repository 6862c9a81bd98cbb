//! Domain models.

pub mod product;
pub mod session;
pub mod user;

pub use product::Product;
pub use session::CurrentUser;
pub use session::keys as session_keys;
pub use user::User;
