pub mod profile_service;
pub mod github_client;

pub use profile_service::ProfileService;
pub use github_client::{GithubClient, ReqwestGithubClient};
