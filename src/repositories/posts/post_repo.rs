//! # 게시글 리포지토리 구현
//!
//! 좋아요와 댓글은 게시글 문서 안에 포함되어 있으므로
//! 변경은 항상 문서 전체를 [`PostRepository::save`]로 다시 쓰는 방식입니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection};
use crate::db::Database;
use crate::domain::entities::posts::Post;
use crate::errors::errors::AppResult;
use crate::repositories::database_error;

/// 게시글 저장소
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// 최신 게시글이 앞에 오도록 정렬된 전체 목록
    async fn find_all(&self) -> AppResult<Vec<Post>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Post>>;

    async fn create(&self, post: Post) -> AppResult<Post>;

    /// 문서 전체를 교체합니다. 대상이 없으면 `false`.
    async fn save(&self, post: &Post) -> AppResult<bool>;

    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// 작성 시간 내림차순 정렬
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// MongoDB 게시글 리포지토리
///
/// - **컬렉션명**: `posts`
pub struct MongoPostRepository {
    db: Arc<Database>,
}

impl MongoPostRepository {
    pub const COLLECTION: &'static str = "posts";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Post> {
        self.db.get_database().collection::<Post>(Self::COLLECTION)
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find_all(&self) -> AppResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .collection()
            .find(doc! {})
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)?;

        // date는 문자열로 저장되므로 정렬은 애플리케이션에서 수행
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Post>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)
    }

    async fn create(&self, post: Post) -> AppResult<Post> {
        self.collection()
            .insert_one(&post)
            .await
            .map_err(database_error)?;

        Ok(post)
    }

    async fn save(&self, post: &Post) -> AppResult<bool> {
        let result = self
            .collection()
            .replace_one(doc! { "_id": post.id.as_str() }, post)
            .await
            .map_err(database_error)?;

        Ok(result.matched_count > 0)
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
