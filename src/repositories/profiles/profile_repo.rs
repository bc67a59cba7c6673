//! # 프로필 리포지토리 구현
//!
//! - **컬렉션명**: `profiles`
//! - **인덱스**: user(unique), 사용자당 프로필 하나

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::db::Database;
use crate::domain::entities::profiles::Profile;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::{database_error, is_duplicate_key};

/// 프로필 저장소
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Profile>>;

    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<Profile>>;

    /// 소유 사용자 기준으로 문서를 교체하거나 새로 저장합니다.
    async fn upsert(&self, profile: &Profile) -> AppResult<()>;

    /// 삭제된 프로필을 반환합니다. 없으면 `None`.
    async fn delete_by_user(&self, user_id: &str) -> AppResult<Option<Profile>>;
}

/// MongoDB 프로필 리포지토리
pub struct MongoProfileRepository {
    db: Arc<Database>,
}

impl MongoProfileRepository {
    pub const COLLECTION: &'static str = "profiles";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Profile> {
        self.db.get_database().collection::<Profile>(Self::COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(user_index)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn find_all(&self) -> AppResult<Vec<Profile>> {
        self.collection()
            .find(doc! {})
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<Profile>> {
        self.collection()
            .find_one(doc! { "user": user_id })
            .await
            .map_err(database_error)
    }

    async fn upsert(&self, profile: &Profile) -> AppResult<()> {
        match self
            .collection()
            .replace_one(doc! { "user": profile.user.as_str() }, profile)
            .upsert(true)
            .await
        {
            Ok(_) => Ok(()),
            // 동시 upsert 경합
            Err(e) if is_duplicate_key(&e) => Err(AppError::ConflictError(format!(
                "Profile for user {} already exists!",
                profile.user
            ))),
            Err(e) => Err(database_error(e)),
        }
    }

    async fn delete_by_user(&self, user_id: &str) -> AppResult<Option<Profile>> {
        self.collection()
            .find_one_and_delete(doc! { "user": user_id })
            .await
            .map_err(database_error)
    }
}
