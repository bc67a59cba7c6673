//! 요청 검증 게이트
//!
//! 각 요청 DTO는 `(필드, 조건, 메시지)` 규칙 목록을 선언하고,
//! [`ValidationGate`]가 규칙을 모두 평가해 위반 메시지를 한 번에 모읍니다.
//! [`ValidatedJson`] 추출기가 핸들러 본문보다 먼저 게이트를 실행하므로
//! 잘못된 입력은 서비스 호출이나 저장소 쓰기에 도달하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_post(
//!     user: AuthenticatedUser,
//!     payload: ValidatedJson<CreatePostRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     // 여기 도달했다면 text 규칙을 통과한 상태
//! }
//! ```

pub mod rules;
pub mod validated_json;

pub use rules::*;
pub use validated_json::ValidatedJson;
