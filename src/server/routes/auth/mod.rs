//! Authentication endpoints

mod login;
mod models;
mod session;
mod user;

pub use login::login;
pub use models::LoginRequest;
pub use session::logout;
pub use user::get_current_user;
