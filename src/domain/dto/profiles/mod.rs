pub mod request;
pub mod response;

pub use request::{EducationRequest, ExperienceRequest, ProfileRequest};
pub use response::{ProfileOwner, ProfileResponse};
