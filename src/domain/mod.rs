//! 도메인 계층
//!
//! - [`entities`] - 저장소에 영속되는 문서 (User, Post, Profile)
//! - [`dto`] - HTTP 요청/응답 데이터 구조
//! - [`models`] - 인증 컨텍스트, 토큰 클레임

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Comment, Education, Experience, Like, Post, Profile, Social, User};
pub use models::{AuthenticatedUser, Claims, ClaimsUser};
