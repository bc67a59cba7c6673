//! # Routes Configuration Module
//!
//! 모든 HTTP 경로를 등록합니다.
//!
//! ## 라우트 구조
//!
//! ```text
//! /
//! ├── /health                          # GET   헬스체크
//! └── /api
//!     ├── /users                       # POST  회원가입
//!     ├── /auth                        # POST  로그인, GET 토큰 소유자 🔒
//!     ├── /profile                     # GET   전체, POST 생성/갱신 🔒
//!     │   ├── /me                      # GET   🔒
//!     │   ├── /user/{user_id}          # GET, DELETE 🔒
//!     │   ├── /experience[/{id}]       # PUT, DELETE 🔒
//!     │   ├── /education[/{id}]        # PUT, DELETE 🔒
//!     │   └── /github/{username}       # GET
//!     └── /posts                       # 스코프 전체 🔒
//!         ├── /{post_id}               # GET, DELETE
//!         ├── /like/{post_id}          # PUT
//!         ├── /unlike/{post_id}        # PUT
//!         └── /comment/{post_id}[/{comment_id}]  # POST, DELETE
//! ```
//!
//! 🔒 표시는 [`AuthMiddleware`]를 거칩니다.

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
    configure_profile_routes(cfg);
    configure_post_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/users").service(handlers::users::create_user));
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::get_current_user),
    );
}

fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/profile")
            .service(handlers::profiles::get_profiles)
            .service(handlers::profiles::create_profile)
            .service(handlers::profiles::get_current_profile)
            .service(handlers::profiles::get_profile_by_user)
            .service(handlers::profiles::delete_user_and_profile)
            .service(handlers::profiles::add_experience)
            .service(handlers::profiles::remove_experience)
            .service(handlers::profiles::add_education)
            .service(handlers::profiles::remove_education)
            .service(handlers::profiles::get_github_repositories),
    );
}

fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .wrap(AuthMiddleware::required())
            .service(handlers::posts::get_posts)
            .service(handlers::posts::create_post)
            .service(handlers::posts::like_post)
            .service(handlers::posts::unlike_post)
            .service(handlers::posts::create_comment)
            .service(handlers::posts::delete_comment)
            .service(handlers::posts::get_post)
            .service(handlers::posts::delete_post),
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "devconnect_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
