pub mod users;
pub mod tokens;
pub mod posts;
pub mod profiles;

pub use users::{CreateUserRequest, LoginRequest, UserResponse};
pub use tokens::TokenResponse;
pub use posts::{CreateCommentRequest, CreatePostRequest};
pub use profiles::{EducationRequest, ExperienceRequest, ProfileOwner, ProfileRequest, ProfileResponse};
