//! # User Data Transfer Objects Module
//!
//! 계정 API의 요청/응답 구조입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user_request.rs   # 회원가입 (name, email, password)
//! │   └── auth_request.rs          # 로그인 (email, password)
//! └── response/
//!     └── user_response.rs         # 비밀번호를 제외한 사용자
//! ```
//!
//! 요청 DTO는 [`ValidationRules`](crate::validation::ValidationRules)로 규칙을 선언하고,
//! 응답 DTO는 엔티티에서 `From`으로 변환됩니다. 해시된 비밀번호는 응답 타입에 필드 자체가 없습니다.

pub mod request;
pub mod response;

pub use request::{CreateUserRequest, LoginRequest};
pub use response::UserResponse;
