pub mod auth;
pub mod token;

pub use auth::AuthenticatedUser;
pub use token::{Claims, ClaimsUser};
