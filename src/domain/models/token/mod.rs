pub mod token;

pub use token::{Claims, ClaimsUser};
