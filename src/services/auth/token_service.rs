//! JWT 토큰 관리 서비스 구현
//!
//! HS256으로 서명된 `{ user: { id } }` 토큰을 발급하고 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::models::token::{Claims, ClaimsUser};
use crate::errors::errors::AppError;

/// 토큰 검증 실패 메시지
pub const INVALID_TOKEN_MESSAGE: &str = "Token is not valid";

pub struct TokenService {
    secret: String,
    expiration_seconds: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_seconds,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_SECONDS`로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_seconds())
    }

    pub fn expiration_seconds(&self) -> i64 {
        self.expiration_seconds
    }

    /// 사용자 ID에 대한 액세스 토큰을 발급합니다.
    pub fn generate_token(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.expiration_seconds);

        let claims = Claims {
            user: ClaimsUser {
                id: user_id.to_string(),
            },
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    ///
    /// 만료, 서명 불일치, 형식 오류 모두 같은 `AuthenticationError`입니다.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        decode::<Claims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string())
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_verify_token() {
        let service = TokenService::new("test-secret", 3600);

        let token = service.generate_token("507f1f77bcf86cd799439011").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.user.id, "507f1f77bcf86cd799439011");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new("secret-a", 3600);
        let verifier = TokenService::new("secret-b", 3600);
        let token = issuer.generate_token("user-1").unwrap();

        let result = verifier.verify_token(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(msg)) if msg == INVALID_TOKEN_MESSAGE));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // 기본 leeway(60초)보다 충분히 과거로 만료
        let service = TokenService::new("test-secret", -3600);
        let token = service.generate_token("user-1").unwrap();

        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new("test-secret", 3600);

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
