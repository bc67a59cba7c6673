//! # 게시글 서비스 구현
//!
//! 게시글 CRUD, 좋아요/좋아요 취소, 댓글 작성/삭제를 담당합니다.
//!
//! 모든 변경은 문서 조회 → 메모리에서 수정 → 문서 전체 저장 순서로 진행됩니다.
//! 같은 게시글에 대한 동시 변경은 마지막 저장이 이깁니다(lost update).
//!
//! ## 규칙
//!
//! - 좋아요는 사용자당 하나. 반복 요청은 `ConflictError`로 거절됩니다.
//! - 게시글과 댓글은 작성자만 삭제할 수 있습니다.
//! - 게시글/댓글의 `name`, `avatar`는 작성 시점 스냅샷입니다.

use std::sync::Arc;
use crate::domain::dto::posts::request::{CreateCommentRequest, CreatePostRequest};
use crate::domain::entities::posts::{Comment, Like, Post};
use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::posts::PostRepository;
use crate::repositories::users::UserRepository;
use crate::validation::ValidationGate;

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

fn post_not_found(post_id: &str) -> AppError {
    AppError::NotFound(format!("Post with id {} not found!", post_id))
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// 최신 게시글이 앞에 오는 전체 목록
    pub async fn get_posts(&self) -> AppResult<Vec<Post>> {
        self.posts.find_all().await
    }

    pub async fn get_post_by_id(&self, post_id: &str) -> AppResult<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))
    }

    pub async fn create_new_post(&self, user_id: &str, request: CreatePostRequest) -> AppResult<Post> {
        ValidationGate::check(&request)?;

        let author = self.load_user(user_id).await?;
        let post = Post::new(&author, request.text.trim().to_string());

        let created = self.posts.create(post).await?;
        log::info!("📝 게시글 작성: {} (작성자 {})", created.id, user_id);

        Ok(created)
    }

    /// 작성자만 게시글을 삭제할 수 있습니다.
    pub async fn delete_post(&self, post_id: &str, user_id: &str) -> AppResult<()> {
        let post = self.get_post_by_id(post_id).await?;

        if !post.is_authored_by(user_id) {
            log::warn!("게시글 삭제 거부: {} (요청자 {})", post_id, user_id);
            return Err(AppError::unauthorized_action("User not authorized to delete this post!"));
        }

        if !self.posts.delete(post_id).await? {
            return Err(post_not_found(post_id));
        }

        log::info!("🗑️ 게시글 삭제: {}", post_id);
        Ok(())
    }

    /// 좋아요를 맨 앞에 추가하고 갱신된 목록을 반환합니다.
    pub async fn like_post(&self, post_id: &str, user_id: &str) -> AppResult<Vec<Like>> {
        let mut post = self.get_post_by_id(post_id).await?;

        if !post.add_like(user_id) {
            return Err(AppError::ConflictError("Post was already liked by the user!".to_string()));
        }

        self.persist(&post).await?;
        Ok(post.likes)
    }

    /// 해당 사용자의 좋아요만 제거하고 갱신된 목록을 반환합니다.
    pub async fn unlike_post(&self, post_id: &str, user_id: &str) -> AppResult<Vec<Like>> {
        let mut post = self.get_post_by_id(post_id).await?;

        if !post.remove_like(user_id) {
            return Err(AppError::ConflictError(
                "Post has not yet been liked by the user!".to_string(),
            ));
        }

        self.persist(&post).await?;
        Ok(post.likes)
    }

    pub async fn create_comment(
        &self,
        request: CreateCommentRequest,
        post_id: &str,
        user_id: &str,
    ) -> AppResult<Vec<Comment>> {
        ValidationGate::check(&request)?;

        let author = self.load_user(user_id).await?;
        let mut post = self.get_post_by_id(post_id).await?;

        post.add_comment(Comment::new(&author, request.text.trim().to_string()));

        self.persist(&post).await?;
        Ok(post.comments)
    }

    /// 댓글 ID로 대상을 찾아 작성자 확인 후 제거합니다.
    pub async fn delete_comment(&self, comment_id: &str, post_id: &str, user_id: &str) -> AppResult<Vec<Comment>> {
        let mut post = self.get_post_by_id(post_id).await?;

        let comment = post.find_comment(comment_id).ok_or_else(|| {
            AppError::NotFound(format!("Comment with id {} does not exist!", comment_id))
        })?;

        if comment.user != user_id {
            return Err(AppError::unauthorized_action(
                "User not authorized to delete this comment!",
            ));
        }

        post.remove_comment(comment_id);

        self.persist(&post).await?;
        Ok(post.comments)
    }

    async fn load_user(&self, user_id: &str) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found!", user_id)))
    }

    /// 조회와 저장 사이에 게시글이 삭제되었으면 `NotFound`
    async fn persist(&self, post: &Post) -> AppResult<()> {
        if self.posts.save(post).await? {
            Ok(())
        } else {
            Err(post_not_found(&post.id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::{InMemoryPostRepository, InMemoryUserRepository};

    fn post(text: &str) -> CreatePostRequest {
        CreatePostRequest { text: text.to_string() }
    }

    fn comment(text: &str) -> CreateCommentRequest {
        CreateCommentRequest { text: text.to_string() }
    }

    struct Fixture {
        service: PostService,
        alice: User,
        bob: User,
    }

    async fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserRepository::new());
        let alice = users
            .create(User::new("Alice".into(), "alice@example.com".into(), "hash".into(), "//a".into()))
            .await
            .unwrap();
        let bob = users
            .create(User::new("Bob".into(), "bob@example.com".into(), "hash".into(), "//b".into()))
            .await
            .unwrap();

        Fixture {
            service: PostService::new(Arc::new(InMemoryPostRepository::new()), users),
            alice,
            bob,
        }
    }

    #[actix_web::test]
    async fn test_blank_text_is_rejected_before_any_write() {
        let f = fixture().await;

        let result = f.service.create_new_post(&f.alice.id, post("   ")).await;
        assert!(matches!(result, Err(AppError::ValidationError(messages)) if messages == vec!["Text is required"]));
        assert!(f.service.get_posts().await.unwrap().is_empty());

        let target = f.service.create_new_post(&f.alice.id, post("hello")).await.unwrap();
        let result = f.service.create_comment(comment(""), &target.id, &f.bob.id).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(f.service.get_post_by_id(&target.id).await.unwrap().comments.is_empty());
    }

    #[actix_web::test]
    async fn test_double_like_is_conflict_and_count_unchanged() {
        let f = fixture().await;
        let post = f.service.create_new_post(&f.alice.id, post("hello")).await.unwrap();

        let likes = f.service.like_post(&post.id, &f.bob.id).await.unwrap();
        assert_eq!(likes.len(), 1);

        let second = f.service.like_post(&post.id, &f.bob.id).await;
        assert!(matches!(
            second,
            Err(AppError::ConflictError(msg)) if msg == "Post was already liked by the user!"
        ));
        assert_eq!(f.service.get_post_by_id(&post.id).await.unwrap().likes.len(), 1);
    }

    #[actix_web::test]
    async fn test_like_then_unlike_round_trip() {
        let f = fixture().await;
        let post = f.service.create_new_post(&f.alice.id, post("hi")).await.unwrap();

        let likes = f.service.like_post(&post.id, &f.bob.id).await.unwrap();
        assert_eq!(likes, vec![Like { user: f.bob.id.clone() }]);

        let likes = f.service.unlike_post(&post.id, &f.bob.id).await.unwrap();
        assert!(likes.is_empty());
    }

    #[actix_web::test]
    async fn test_unlike_before_like_fails_and_removes_only_own_like() {
        let f = fixture().await;
        let post = f.service.create_new_post(&f.alice.id, post("hi")).await.unwrap();

        let early = f.service.unlike_post(&post.id, &f.bob.id).await;
        assert!(matches!(
            early,
            Err(AppError::ConflictError(msg)) if msg == "Post has not yet been liked by the user!"
        ));

        f.service.like_post(&post.id, &f.alice.id).await.unwrap();
        f.service.like_post(&post.id, &f.bob.id).await.unwrap();
        let likes = f.service.unlike_post(&post.id, &f.bob.id).await.unwrap();

        assert_eq!(likes, vec![Like { user: f.alice.id.clone() }]);
    }

    #[actix_web::test]
    async fn test_non_author_cannot_delete_post() {
        let f = fixture().await;
        let post = f.service.create_new_post(&f.alice.id, post("mine")).await.unwrap();

        let result = f.service.delete_post(&post.id, &f.bob.id).await;

        assert!(matches!(
            result,
            Err(AppError::AuthorizationError(msg))
                if msg == "Unauthorized action: User not authorized to delete this post!"
        ));
        assert!(f.service.get_post_by_id(&post.id).await.is_ok());

        f.service.delete_post(&post.id, &f.alice.id).await.unwrap();
        assert!(matches!(
            f.service.get_post_by_id(&post.id).await,
            Err(AppError::NotFound(msg)) if msg == format!("Post with id {} not found!", post.id)
        ));
    }

    #[actix_web::test]
    async fn test_post_snapshots_author_and_lists_newest_first() {
        let f = fixture().await;
        let first = f.service.create_new_post(&f.alice.id, post("first")).await.unwrap();
        let second = f.service.create_new_post(&f.bob.id, post("second")).await.unwrap();

        assert_eq!(first.name, "Alice");
        assert_eq!(second.avatar, "//b");

        let posts = f.service.get_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts[0].date >= posts[1].date);
    }

    #[actix_web::test]
    async fn test_comment_by_other_user_cannot_be_deleted() {
        let f = fixture().await;
        let post = f.service.create_new_post(&f.alice.id, post("post")).await.unwrap();
        let comments = f.service.create_comment(comment("x"), &post.id, &f.alice.id).await.unwrap();
        let comment_id = comments[0].id.clone();

        let result = f.service.delete_comment(&comment_id, &post.id, &f.bob.id).await;

        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
        assert_eq!(f.service.get_post_by_id(&post.id).await.unwrap().comments.len(), 1);
    }

    #[actix_web::test]
    async fn test_delete_comment_removes_the_matching_comment() {
        let f = fixture().await;
        let post = f.service.create_new_post(&f.alice.id, post("post")).await.unwrap();
        f.service.create_comment(comment("older"), &post.id, &f.bob.id).await.unwrap();
        let comments = f.service.create_comment(comment("newer"), &post.id, &f.bob.id).await.unwrap();
        assert_eq!(comments[0].text, "newer");
        let older_id = comments[1].id.clone();

        let remaining = f.service.delete_comment(&older_id, &post.id, &f.bob.id).await.unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "newer");
        assert_eq!(remaining[0].name, "Bob");
    }

    #[actix_web::test]
    async fn test_delete_missing_comment_is_not_found() {
        let f = fixture().await;
        let post = f.service.create_new_post(&f.alice.id, post("post")).await.unwrap();

        let result = f.service.delete_comment("507f1f77bcf86cd799439011", &post.id, &f.alice.id).await;

        assert!(matches!(
            result,
            Err(AppError::NotFound(msg)) if msg == "Comment with id 507f1f77bcf86cd799439011 does not exist!"
        ));
    }
}
