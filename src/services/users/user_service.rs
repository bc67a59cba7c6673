//! # 사용자 관리 서비스 구현
//!
//! 회원가입만 담당합니다. 토큰은 발급하지 않으며 로그인은
//! [`AuthService`](crate::services::auth::AuthService)의 별도 단계입니다.

use std::sync::Arc;
use bcrypt::hash;
use sha2::{Digest, Sha256};
use crate::domain::dto::users::{CreateUserRequest, UserResponse};
use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::{duplicate_email_message, UserRepository};
use crate::validation::ValidationGate;

/// Gravatar 옵션: 200px, PG 등급, 기본 이미지 mystery-man
const GRAVATAR_OPTIONS: &str = "s=200&r=pg&d=mm";

/// 이메일로부터 Gravatar URL을 결정적으로 만듭니다.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?{}", digest, GRAVATAR_OPTIONS)
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 계정을 만듭니다.
    ///
    /// 이메일은 trim 후 소문자로 저장됩니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 요청 규칙 위반 (저장소는 건드리지 않음)
    /// * `ConflictError` - 같은 이메일의 사용자가 이미 있는 경우
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        ValidationGate::check(&request)?;

        let email = request.email.trim().to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError(duplicate_email_message(&email)));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let avatar = gravatar_url(&email);
        let user = User::new(request.name.trim().to_string(), email, password_hash, avatar);

        // 동시 가입은 유니크 인덱스에서 ConflictError로 걸러짐
        let created = self.users.create(user).await?;
        log::info!("👤 사용자 생성 완료: {}", created.id);

        Ok(UserResponse::from(created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;

    fn request(name: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn service() -> (UserService, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        (UserService::new(repo.clone(), 4), repo)
    }

    #[actix_web::test]
    async fn test_create_user_hashes_password_and_sets_avatar() {
        let (service, repo) = service();

        let created = service.create_user(request("Ada", " Ada@Example.com ", "secret123")).await.unwrap();

        let stored = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.email, "ada@example.com");
        assert_ne!(stored.password, "secret123");
        assert!(bcrypt::verify("secret123", &stored.password).unwrap());
        assert_eq!(stored.avatar, gravatar_url("ada@example.com"));
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict_and_single_record_remains() {
        let (service, repo) = service();
        let first = service.create_user(request("Ada", "ada@example.com", "secret123")).await.unwrap();

        let second = service.create_user(request("Imposter", "ada@example.com", "password")).await;

        assert!(matches!(
            second,
            Err(AppError::ConflictError(msg)) if msg == "User with email ada@example.com already exists!"
        ));
        let stored = repo.find_by_email("ada@example.com").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.name, "Ada");
    }

    #[actix_web::test]
    async fn test_invalid_request_creates_nothing() {
        let (service, repo) = service();

        let result = service.create_user(request("", "bad-email", "123")).await;

        match result {
            Err(AppError::ValidationError(messages)) => assert!(messages.len() >= 3),
            other => panic!("Expected ValidationError, got {:?}", other.map(|u| u.id)),
        }
        assert!(repo.find_by_email("bad-email").await.unwrap().is_none());
    }

    #[test]
    fn test_gravatar_url_is_deterministic() {
        let url = gravatar_url("Ada@Example.com");

        assert_eq!(url, gravatar_url(" ada@example.com"));
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&r=pg&d=mm"));
    }
}
