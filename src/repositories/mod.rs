//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 trait 객체(`Arc<dyn UserRepository>` 등)에만 의존합니다.
//! 구현은 두 가지입니다.
//!
//! - MongoDB 컬렉션 (`Mongo*Repository`)
//! - 프로세스 메모리 ([`memory`]), 로컬 실행과 테스트용
//!
//! 모든 메서드는 단일 CRUD 호출이며 read-modify-write 트랜잭션은 제공하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod posts;
pub mod profiles;
pub mod memory;

pub use users::{MongoUserRepository, UserRepository};
pub use posts::{MongoPostRepository, PostRepository};
pub use profiles::{MongoProfileRepository, ProfileRepository};

use mongodb::error::{Error as MongoError, ErrorKind as MongoErrorKind, WriteFailure};
use crate::errors::errors::AppError;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

pub(crate) fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        MongoErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// 드라이버 에러를 `DatabaseError`로 변환합니다.
pub(crate) fn database_error(error: MongoError) -> AppError {
    AppError::DatabaseError(error.to_string())
}
