//! JWT 클레임 구조체
//!
//! 토큰 페이로드는 `{ "user": { "id": "..." }, "iat": ..., "exp": ... }` 형태입니다.

use serde::{Deserialize, Serialize};

/// 토큰에 담기는 사용자 식별 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsUser {
    pub id: String,
}

/// JWT 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user: ClaimsUser,
    /// 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 만료 시간 (Unix timestamp)
    pub exp: i64,
}
