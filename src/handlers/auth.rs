//! 인증 핸들러

use actix_web::{get, post, web, HttpResponse};
use crate::domain::dto::users::request::LoginRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::AuthService;
use crate::validation::ValidatedJson;

/// 로그인
///
/// `POST /api/auth` → `{ "token": "..." }`
///
/// 이메일이 없거나 비밀번호가 틀리면 동일하게 `Invalid credentials` (401)입니다.
#[post("")]
pub async fn login(
    service: web::Data<AuthService>,
    payload: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = service.authenticate(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(token))
}

/// 토큰 소유자 조회
///
/// `GET /api/auth`
#[get("", wrap = "AuthMiddleware::required()")]
pub async fn get_current_user(
    service: web::Data<AuthService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}
