//! JWT 인증 미들웨어
//!
//! 보호된 라우트 앞에서 토큰을 검증하고, 성공하면
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를 request extensions에 넣습니다.
//! 실패하면 핸들러는 실행되지 않고 401 응답이 나갑니다.
//!
//! 토큰은 `Authorization: Bearer <token>` 또는 `x-auth-token` 헤더로 받습니다.
//!
//! ```rust,ignore
//! web::scope("/api/posts")
//!     .wrap(AuthMiddleware::required())
//!     .service(get_posts)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 유효한 토큰이 없으면 요청을 거절합니다.
    pub fn required() -> Self {
        AuthMiddleware
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, web, App, HttpResponse};
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    fn token_service() -> web::Data<TokenService> {
        web::Data::new(TokenService::new("middleware-secret", 3600))
    }

    #[actix_web::test]
    async fn test_missing_token_is_rejected_before_handler() {
        let app = test::init_service(
            App::new()
                .app_data(token_service())
                .service(web::scope("").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "errors": ["No token, authorization denied"] }));
    }

    #[actix_web::test]
    async fn test_invalid_token_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(token_service())
                .service(web::scope("").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "errors": ["Token is not valid"] }));
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let tokens = token_service();
        let token = tokens.generate_token("user-42").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(tokens)
                .service(web::scope("").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        for (header, value) in [
            ("Authorization", format!("Bearer {}", token)),
            ("x-auth-token", token.clone()),
        ] {
            let req = test::TestRequest::get()
                .uri("/whoami")
                .insert_header((header, value))
                .to_request();
            let body = test::call_and_read_body(&app, req).await;

            assert_eq!(body, "user-42");
        }
    }
}
