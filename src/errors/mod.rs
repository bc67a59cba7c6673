//! 에러 모델과 에러 경계
//!
//! - [`errors`] - `AppError` 분류 체계와 단일 응답 생성기
//! - [`boundary`] - 추출기(JSON, Path, Query) 실패와 미등록 경로를 `AppError`로 모으는 설정

pub mod errors;
pub mod boundary;

pub use errors::*;
