//! 추출기 단계 에러 경계
//!
//! 핸들러 본문이 실행되기 전에 실패하는 경우(잘못된 JSON, 경로 파싱 실패,
//! 존재하지 않는 경로)도 `{ "errors": [...] }` 형식으로 응답되도록
//! actix-web 기본 에러를 [`AppError`]로 변환합니다.

use actix_web::{web, HttpRequest, HttpResponse};
use crate::errors::errors::AppError;

/// 추출기 에러 핸들러와 기본 서비스를 등록합니다.
///
/// ```rust,ignore
/// App::new().configure(boundary::configure)
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .default_service(web::to(route_not_found));
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::validation(format!("Invalid JSON payload: {}", err)).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::validation(format!("Invalid path: {}", err)).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::validation(format!("Invalid query: {}", err)).into())
}

async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!(
        "Route {} {} not found!",
        req.method(),
        req.path()
    )))
}
