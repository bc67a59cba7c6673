//! 비즈니스 로직 계층
//!
//! 서비스는 HTTP 응답을 만들지 않고 [`AppError`](crate::errors::AppError)로 분류된 실패만 돌려줍니다.
//!
//! - [`auth`] - 자격 증명 확인, 토큰 발급/검증
//! - [`users`] - 회원가입
//! - [`posts`] - 게시글, 좋아요, 댓글
//! - [`profiles`] - 프로필, 경력/학력 이력, GitHub 저장소 조회

pub mod users;
pub mod auth;
pub mod posts;
pub mod profiles;
