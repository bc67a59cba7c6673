//! # HTTP Request Handlers Module
//!
//! 요청을 추출하고 서비스를 호출한 뒤 결과를 JSON으로 응답합니다.
//! 비즈니스 판단은 서비스 계층에, 응답 상태 결정은 [`AppError`](crate::errors::AppError)에 맡깁니다.
//!
//! ```text
//! Client ─▶ Middleware (Auth, ErrorBoundary) ─▶ Handlers ─▶ Services ─▶ Repositories
//! ```
//!
//! ## 공통 규칙
//!
//! - 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! - 요청 본문은 [`ValidatedJson`](crate::validation::ValidatedJson)으로 받아 규칙 검증을 통과한 값만 서비스에 전달합니다.
//! - 서비스는 `web::Data`로 주입됩니다.
//! - 인증이 필요한 핸들러는 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를 인자로 받습니다.
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`users`] | `/api/users` |
//! | [`auth`] | `/api/auth` |
//! | [`profiles`] | `/api/profile` |
//! | [`posts`] | `/api/posts` |

pub mod users;
pub mod auth;
pub mod profiles;
pub mod posts;
