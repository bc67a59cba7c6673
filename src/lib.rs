//! DevConnect 백엔드
//!
//! 개발자 소셜 네트워크의 REST API 서버입니다.
//! 계정과 JWT 인증, 개발자 프로필(경력, 학력, GitHub 저장소), 게시글과 좋아요/댓글을 제공합니다.
//!
//! # Features
//!
//! - **계정**: 회원가입, Gravatar 아바타, bcrypt 해싱
//! - **JWT 인증**: HS256 Bearer 토큰, 1시간 만료
//! - **프로필**: 생성/갱신(upsert), 경력과 학력 항목, GitHub 저장소 조회
//! - **게시글**: 작성자 스냅샷, 좋아요, 댓글
//! - **저장소 선택**: MongoDB 또는 프로세스 메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 추출, 검증 게이트, JSON 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙, 분류된 AppError
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← trait 객체 (MongoDB / In-memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use devconnect_backend::core::{Repositories, ServiceContainer};
//!
//! let container = ServiceContainer::build(
//!     Repositories::in_memory(),
//!     TokenService::from_env(),
//!     Arc::new(ReqwestGithubClient::from_env()),
//!     PasswordConfig::bcrypt_cost(),
//! );
//!
//! App::new().configure(|cfg| container.configure(cfg));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod validation;
