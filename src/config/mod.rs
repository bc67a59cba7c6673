//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 타입이 있는 정적 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 해싱, Rate Limiting 설정
//! - [`auth_config`] - JWT 토큰, GitHub API 설정
//!
//! ## 환경 파일
//!
//! `PROFILE` 값에 따라 `main`에서 다음 파일을 먼저 로드합니다.
//!
//! | PROFILE | 파일 |
//! |---------|------|
//! | `dev` (기본값) | `.env.dev` |
//! | `prod` | `.env.prod` |
//! | 그 외 | `.env` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let secret = JwtConfig::secret();
//! let backend = DatabaseConfig::storage_backend();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_SECONDS="3600"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="devconnect"
//! export STORAGE_BACKEND="mongo"   # mongo | memory
//! export GITHUB_CLIENT_ID="..."
//! export GITHUB_CLIENT_SECRET="..."
//! export BCRYPT_COST="10"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
