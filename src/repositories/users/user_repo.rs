//! # 사용자 리포지토리 구현
//!
//! - **컬렉션명**: `users`
//! - **인덱스**: email(unique)
//!
//! 중복 이메일 쓰기는 유니크 인덱스가 거절하고 `ConflictError`로 변환됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::{database_error, is_duplicate_key};

/// 사용자 저장소
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 여러 ID를 한 번에 조회합니다. 없는 ID는 결과에서 빠집니다.
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<User>>;

    /// 새 사용자를 저장합니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 같은 이메일이 이미 있는 경우
    async fn create(&self, user: User) -> AppResult<User>;

    /// 삭제되었으면 `true`
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// 이메일 중복 메시지
pub fn duplicate_email_message(email: &str) -> String {
    format!("User with email {} already exists!", email)
}

/// MongoDB 사용자 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    /// 이메일 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(database_error)
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.collection()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        match self.collection().insert_one(&user).await {
            Ok(_) => {
                log::debug!("사용자 저장 완료: {}", user.id);
                Ok(user)
            }
            Err(e) if is_duplicate_key(&e) => {
                Err(AppError::ConflictError(duplicate_email_message(&user.email)))
            }
            Err(e) => Err(database_error(e)),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(database_error)?;

        Ok(result.deleted_count > 0)
    }
}
