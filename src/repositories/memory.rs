//! 인메모리 리포지토리
//!
//! `STORAGE_BACKEND=memory`로 서버를 띄우거나 서비스 테스트에서 사용합니다.
//! 잠금은 한 번의 CRUD 호출 동안만 유지되며 await 지점을 넘지 않습니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use crate::domain::entities::posts::Post;
use crate::domain::entities::profiles::Profile;
use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::posts::post_repo::{sort_newest_first, PostRepository};
use crate::repositories::profiles::ProfileRepository;
use crate::repositories::users::user_repo::{duplicate_email_message, UserRepository};

fn lock<'a, T>(store: &'a Mutex<T>, name: &str) -> AppResult<MutexGuard<'a, T>> {
    store
        .lock()
        .map_err(|_| AppError::InternalError(format!("{} 저장소 잠금이 오염되었습니다", name)))
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(lock(&self.users, "users")?.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(lock(&self.users, "users")?
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<User>> {
        let users = lock(&self.users, "users")?;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = lock(&self.users, "users")?;

        // 유니크 인덱스와 같은 제약
        if users.values().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError(duplicate_email_message(&user.email)));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(lock(&self.users, "users")?.remove(id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> AppResult<Vec<Post>> {
        let mut posts: Vec<Post> = lock(&self.posts, "posts")?.values().cloned().collect();
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Post>> {
        Ok(lock(&self.posts, "posts")?.get(id).cloned())
    }

    async fn create(&self, post: Post) -> AppResult<Post> {
        lock(&self.posts, "posts")?.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn save(&self, post: &Post) -> AppResult<bool> {
        let mut posts = lock(&self.posts, "posts")?;
        match posts.get_mut(&post.id) {
            Some(stored) => {
                *stored = post.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(lock(&self.posts, "posts")?.remove(id).is_some())
    }
}

/// 사용자 ID를 키로 쓰는 프로필 저장소
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<HashMap<String, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_all(&self) -> AppResult<Vec<Profile>> {
        let mut profiles: Vec<Profile> = lock(&self.profiles, "profiles")?.values().cloned().collect();
        profiles.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(profiles)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<Profile>> {
        Ok(lock(&self.profiles, "profiles")?.get(user_id).cloned())
    }

    async fn upsert(&self, profile: &Profile) -> AppResult<()> {
        lock(&self.profiles, "profiles")?.insert(profile.user.clone(), profile.clone());
        Ok(())
    }

    async fn delete_by_user(&self, user_id: &str) -> AppResult<Option<Profile>> {
        Ok(lock(&self.profiles, "profiles")?.remove(user_id))
    }
}
