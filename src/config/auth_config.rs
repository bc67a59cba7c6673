//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 GitHub API 호출에 필요한 설정을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_SECONDS="3600"
//!
//! export GITHUB_API_URL="https://api.github.com"
//! export GITHUB_CLIENT_ID="your-github-client-id"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! ```

use std::env;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 없으면 개발용 기본값을 사용하고 경고 로그를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 토큰 유효 기간(초). 기본값: 3600 (1시간)
    pub fn expiration_seconds() -> i64 {
        env::var("JWT_EXPIRATION_SECONDS")
            .ok()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|seconds| *seconds > 0)
            .unwrap_or(3600)
    }
}

/// GitHub REST API 설정
pub struct GithubConfig;

impl GithubConfig {
    /// API 기본 URL. 기본값: "https://api.github.com"
    pub fn api_url() -> String {
        env::var("GITHUB_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "https://api.github.com".to_string())
    }

    pub fn client_id() -> String {
        env::var("GITHUB_CLIENT_ID").unwrap_or_default()
    }

    /// 로그에 출력하지 마세요.
    pub fn client_secret() -> String {
        env::var("GITHUB_CLIENT_SECRET").unwrap_or_default()
    }

    /// GitHub는 `User-Agent` 헤더가 없는 요청을 거절합니다.
    pub fn user_agent() -> String {
        env::var("GITHUB_USER_AGENT").unwrap_or_else(|_| "devconnect-backend".to_string())
    }
}
