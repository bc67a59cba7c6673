pub mod request;

pub use request::{CreateCommentRequest, CreatePostRequest};
