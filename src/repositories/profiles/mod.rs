pub mod profile_repo;

pub use profile_repo::{MongoProfileRepository, ProfileRepository};
