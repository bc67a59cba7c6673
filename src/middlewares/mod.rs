//! HTTP 미들웨어
//!
//! - [`AuthMiddleware`] - Bearer 토큰 검증, 인증 사용자 주입
//! - [`ErrorBoundary`] - 핸들러 패닉과 분류되지 않은 에러를 단일 에러 응답으로 변환

pub mod auth_middleware;
pub mod error_boundary;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
pub use error_boundary::ErrorBoundary;
