//! 자격 증명 확인과 세션 토큰 발급

use std::sync::Arc;
use crate::domain::dto::tokens::TokenResponse;
use crate::domain::dto::users::{LoginRequest, UserResponse};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::services::auth::token_service::TokenService;
use crate::validation::ValidationGate;

/// 사용자 존재 여부를 드러내지 않도록 두 실패 경우에 같은 메시지를 씁니다.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// 이메일/비밀번호를 확인하고 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 요청 규칙 위반
    /// * `AuthenticationError` - 없는 이메일 또는 비밀번호 불일치
    pub async fn authenticate(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        ValidationGate::check(&request)?;

        let email = request.email.trim().to_lowercase();

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                log::info!("로그인 실패 - 등록되지 않은 이메일");
                AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string())
            })?;

        let is_valid = bcrypt::verify(&request.password, &user.password)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            log::info!("로그인 실패 - 비밀번호 불일치: {}", user.id);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        let token = self.tokens.generate_token(&user.id)?;
        log::info!("🔑 로그인 성공: {}", user.id);

        Ok(TokenResponse { token })
    }

    /// 토큰 소유자 정보 (비밀번호 제외)
    pub async fn get_user(&self, user_id: &str) -> AppResult<UserResponse> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found!", user_id)))
    }
}
