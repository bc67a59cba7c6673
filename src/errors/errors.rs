//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 모든 도메인 실패는 [`AppError`] 하나로 분류되어 올라오고,
//! `actix_web::ResponseError` 구현이 유일한 응답 생성 지점이 됩니다.
//! 서비스 계층은 HTTP 응답을 만들지 않고 분류된 에러만 반환합니다.
//!
//! ## 응답 형식
//!
//! 분류된 에러는 자신의 상태 코드와 메시지 목록으로 응답합니다.
//!
//! ```json
//! { "errors": ["Post was already liked by the user!"] }
//! ```
//!
//! 분류되지 않은 에러(데이터베이스, 내부 오류)는 서버 로그에만 원문을 남기고
//! 클라이언트에는 `"Internal server error"` 하나만 돌려줍니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn delete_post(&self, post_id: &str, user_id: &str) -> AppResult<()> {
//!     let post = self.get_post_by_id(post_id).await?;
//!     if post.user != user_id {
//!         return Err(AppError::unauthorized_action("User not authorized to delete this post!"));
//!     }
//!     self.posts.delete(post_id).await?;
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// 클라이언트에 노출되는 일반 에러 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 에러 분류 태그
///
/// 응답 상태 코드는 런타임 타입 검사가 아니라 이 태그로 결정됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationFailure,
    AuthenticationFailure,
    AuthorizationFailure,
    NotFound,
    Conflict,
    UpstreamFailure,
    InternalFailure,
}

impl ErrorKind {
    /// 분류별 HTTP 상태 코드
    ///
    /// | Kind | Status |
    /// |------|--------|
    /// | `ValidationFailure` | 400 |
    /// | `AuthenticationFailure` | 401 |
    /// | `AuthorizationFailure` | 401 |
    /// | `NotFound` | 404 |
    /// | `Conflict` | 400 |
    /// | `UpstreamFailure` | 404 |
    /// | `InternalFailure` | 500 |
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::ValidationFailure | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::AuthenticationFailure | ErrorKind::AuthorizationFailure => {
                StatusCode::UNAUTHORIZED
            }
            ErrorKind::NotFound | ErrorKind::UpstreamFailure => StatusCode::NOT_FOUND,
            ErrorKind::InternalFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400). 위반된 규칙의 메시지를 모두 담습니다.
    #[error("Validation error: {}", .0.join(", "))]
    ValidationError(Vec<String>),

    /// 인증 실패 에러 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 리소스 소유권 없음 (401)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (400)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 외부 서비스 에러 (404)
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    /// 데이터베이스 관련 에러 (500, 메시지 비공개)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500, 메시지 비공개)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 메시지 검증 에러
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![message.into()])
    }

    /// 작성자가 아닌 사용자의 변경 시도
    pub fn unauthorized_action(message: &str) -> Self {
        AppError::AuthorizationError(format!("Unauthorized action: {}", message))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ValidationError(_) => ErrorKind::ValidationFailure,
            AppError::AuthenticationError(_) => ErrorKind::AuthenticationFailure,
            AppError::AuthorizationError(_) => ErrorKind::AuthorizationFailure,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ConflictError(_) => ErrorKind::Conflict,
            AppError::UpstreamError(_) => ErrorKind::UpstreamFailure,
            AppError::DatabaseError(_) | AppError::InternalError(_) => ErrorKind::InternalFailure,
        }
    }

    /// 클라이언트에 보여줄 메시지 목록
    ///
    /// 내부 실패는 원문 대신 일반 메시지로 대체됩니다.
    pub fn messages(&self) -> Vec<String> {
        match self {
            AppError::ValidationError(messages) => messages.clone(),
            AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::UpstreamError(msg) => vec![msg.clone()],
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                vec![INTERNAL_ERROR_MESSAGE.to_string()]
            }
        }
    }
}

/// 에러 응답 본문 `{ "errors": [...] }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 실패는 이 지점에서 서버 로그로 남깁니다.
    fn error_response(&self) -> HttpResponse {
        if self.kind() == ErrorKind::InternalFailure {
            log::error!("❌ 처리되지 않은 에러: {}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            errors: self.messages(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError(vec!["Name is required".to_string()]);
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Post not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid credentials".to_string());
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::unauthorized_action("User not authorized to delete this post!");
        assert_eq!(error.kind(), ErrorKind::AuthorizationFailure);
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_conflict_and_upstream_status() {
        assert_eq!(
            AppError::ConflictError("dup".to_string()).error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UpstreamError("github".to_string()).error_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_validation_body_keeps_every_message() {
        let body = body_of(AppError::ValidationError(vec![
            "Name is required".to_string(),
            "Please include a valid email".to_string(),
        ]))
        .await;

        assert_eq!(
            body,
            serde_json::json!({ "errors": ["Name is required", "Please include a valid email"] })
        );
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let body = body_of(AppError::InternalError("secret stack trace".to_string())).await;

        assert_eq!(body, serde_json::json!({ "errors": [INTERNAL_ERROR_MESSAGE] }));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
