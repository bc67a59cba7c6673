pub mod users;
pub mod posts;
pub mod profiles;

pub use users::User;
pub use posts::{Comment, Like, Post};
pub use profiles::{Education, Experience, Profile, Social};
