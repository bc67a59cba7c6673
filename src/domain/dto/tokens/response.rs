use serde::{Deserialize, Serialize};

/// 로그인 성공 응답 `{ "token": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
