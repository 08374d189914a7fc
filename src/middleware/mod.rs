pub mod current_user;
pub mod require_login;

pub use current_user::{current_user_middleware, CurrentUser};
pub use require_login::require_login;
