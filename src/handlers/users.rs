//! 사용자 등록 핸들러

use actix_web::{post, web, HttpResponse};
use crate::domain::dto::users::request::CreateUserRequest;
use crate::errors::errors::AppError;
use crate::services::users::UserService;
use crate::validation::ValidatedJson;

/// 회원가입
///
/// `POST /api/users`
///
/// 성공하면 201과 함께 비밀번호가 제외된 사용자를 반환합니다. 토큰은 발급하지 않습니다.
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: ValidatedJson<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}
