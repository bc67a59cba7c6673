//! DevConnect 백엔드 메인 애플리케이션
//!
//! 설정을 읽고 저장소와 서비스를 조립한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use devconnect_backend::config::{
    DatabaseConfig, Environment, PasswordConfig, RateLimitConfig, ServerConfig, StorageBackend,
};
use devconnect_backend::core::{print_startup_banner, Repositories, ServiceContainer};
use devconnect_backend::db::Database;
use devconnect_backend::errors::boundary;
use devconnect_backend::middlewares::ErrorBoundary;
use devconnect_backend::routes::configure_all_routes;
use devconnect_backend::services::auth::TokenService;
use devconnect_backend::services::profiles::ReqwestGithubClient;

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    print_startup_banner();
    info!("🚀 DevConnect 백엔드 시작중... (환경: {:?})", Environment::current());

    let repositories = initialize_repositories().await?;

    let container = ServiceContainer::build(
        repositories,
        TokenService::from_env(),
        Arc::new(ReqwestGithubClient::from_env()),
        PasswordConfig::bcrypt_cost(),
    );

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(container).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어는 바깥쪽부터 ErrorBoundary, NormalizePath, Logger, CORS, Governor 순서입니다.
async fn start_http_server(container: ServiceContainer) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );

    HttpServer::new(move || {
        let container = container.clone();

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(ErrorBoundary)
            .configure(move |cfg| container.configure(cfg))
            .configure(boundary::configure)
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// `STORAGE_BACKEND`에 따라 리포지토리를 준비합니다
///
/// MongoDB 연결 또는 인덱스 생성에 실패하면 서버를 띄우지 않습니다.
async fn initialize_repositories() -> io::Result<Repositories> {
    match DatabaseConfig::storage_backend() {
        StorageBackend::Memory => {
            info!("🧠 메모리 저장소 사용 (재시작 시 데이터 소실)");
            Ok(Repositories::in_memory())
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name())
                .await
                .map_err(|e| {
                    error!("❌ 데이터베이스 연결 실패: {}", e);
                    io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
                })?;

            Repositories::mongo(Arc::new(database)).await.map_err(|e| {
                error!("❌ 리포지토리 초기화 실패: {}", e);
                io::Error::other(e.to_string())
            })
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화. 기본값: "info,actix_web=debug"
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 프론트엔드 개발 서버(3000)와 자체 서버(5000)에서의 요청을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:5000")
        .allowed_origin("http://127.0.0.1:5000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-auth-token"),
        ])
        .supports_credentials()
        .max_age(3600)
}
