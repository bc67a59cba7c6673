//! 게시글, 좋아요, 댓글 핸들러
//!
//! `/api/posts` 스코프 전체가 [`AuthMiddleware`](crate::middlewares::AuthMiddleware) 뒤에 있습니다.
//! 형식이 잘못된 게시글 ID는 조회 없이 404로 끝납니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use mongodb::bson::oid::ObjectId;
use crate::domain::dto::posts::request::{CreateCommentRequest, CreatePostRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::{AppError, AppResult};
use crate::services::posts::PostService;
use crate::validation::ValidatedJson;

pub const INVALID_POST_ID_MESSAGE: &str = "Invalid post id!";

fn ensure_post_id(post_id: &str) -> AppResult<()> {
    ObjectId::parse_str(post_id)
        .map(|_| ())
        .map_err(|_| AppError::NotFound(INVALID_POST_ID_MESSAGE.to_string()))
}

#[get("")]
pub async fn get_posts(
    service: web::Data<PostService>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let posts = service.get_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[post("")]
pub async fn create_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    payload: ValidatedJson<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let post = service.create_new_post(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post))
}

#[get("/{post_id}")]
pub async fn get_post(
    service: web::Data<PostService>,
    _user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ensure_post_id(&post_id)?;
    let post = service.get_post_by_id(&post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 작성자만 삭제할 수 있습니다. 성공 시 204.
#[delete("/{post_id}")]
pub async fn delete_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ensure_post_id(&post_id)?;
    service.delete_post(&post_id, &user.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 좋아요 추가 후 `likes` 배열 반환
#[put("/like/{post_id}")]
pub async fn like_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ensure_post_id(&post_id)?;
    let likes = service.like_post(&post_id, &user.user_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}

#[put("/unlike/{post_id}")]
pub async fn unlike_post(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ensure_post_id(&post_id)?;
    let likes = service.unlike_post(&post_id, &user.user_id).await?;

    Ok(HttpResponse::Ok().json(likes))
}

/// 댓글 작성 후 `comments` 배열 반환
#[post("/comment/{post_id}")]
pub async fn create_comment(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    post_id: web::Path<String>,
    payload: ValidatedJson<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    ensure_post_id(&post_id)?;
    let comments = service.create_comment(payload.into_inner(), &post_id, &user.user_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

#[delete("/comment/{post_id}/{comment_id}")]
pub async fn delete_comment(
    service: web::Data<PostService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (post_id, comment_id) = path.into_inner();
    ensure_post_id(&post_id)?;
    let comments = service.delete_comment(&comment_id, &post_id, &user.user_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}
