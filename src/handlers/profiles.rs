//! 프로필 핸들러
//!
//! 공개 조회와 인증이 필요한 변경이 한 스코프에 섞여 있어서,
//! 인증은 라우트 단위 `wrap`으로 붙입니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::domain::dto::profiles::request::{EducationRequest, ExperienceRequest, ProfileRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::profiles::ProfileService;
use crate::validation::{ensure_object_id, ValidatedJson};

/// 전체 프로필 (공개)
#[get("")]
pub async fn get_profiles(service: web::Data<ProfileService>) -> Result<HttpResponse, AppError> {
    let profiles = service.get_profiles().await?;

    Ok(HttpResponse::Ok().json(profiles))
}

/// 프로필 생성 또는 갱신. 201.
#[post("", wrap = "AuthMiddleware::required()")]
pub async fn create_profile(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: ValidatedJson<ProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = service.create_profile(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(profile))
}

#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn get_current_profile(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = service.get_current_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[get("/user/{user_id}")]
pub async fn get_profile_by_user(
    service: web::Data<ProfileService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ensure_object_id(&user_id)?;
    let profile = service.get_profile(&user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 본인 계정과 프로필 삭제. 204.
#[delete("/user/{user_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_user_and_profile(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ensure_object_id(&user_id)?;
    service.remove_user_and_profile(&user.user_id, &user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[put("/experience", wrap = "AuthMiddleware::required()")]
pub async fn add_experience(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: ValidatedJson<ExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = service.add_profile_experience(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/experience/{experience_id}", wrap = "AuthMiddleware::required()")]
pub async fn remove_experience(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    experience_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = service.remove_profile_experience(&user.user_id, &experience_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[put("/education", wrap = "AuthMiddleware::required()")]
pub async fn add_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: ValidatedJson<EducationRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = service.add_profile_education(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/education/{education_id}", wrap = "AuthMiddleware::required()")]
pub async fn remove_education(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    education_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = service.remove_profile_education(&user.user_id, &education_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// GitHub 최근 저장소 5개 (공개)
#[get("/github/{username}")]
pub async fn get_github_repositories(
    service: web::Data<ProfileService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repositories = service.fetch_github_repositories(&username).await?;

    Ok(HttpResponse::Ok().json(repositories))
}
