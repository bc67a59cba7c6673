//! Post Entity Implementation
//!
//! 게시글과 그 안에 포함된 좋아요/댓글 목록입니다.
//! 목록은 모두 최신 항목이 앞에 오도록 유지됩니다.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 좋아요 항목. 사용자당 최대 하나.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user: String,
}

/// 댓글
///
/// `name`/`avatar`는 작성 시점의 작성자 정보 스냅샷입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            user: author.id.clone(),
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
        }
    }
}

/// 게시글 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    /// 작성자 ID
    pub user: String,
    pub text: String,
    /// 작성 시점의 작성자 이름
    pub name: String,
    /// 작성 시점의 작성자 아바타
    pub avatar: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Post {
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            user: author.id.clone(),
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.user == user_id
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|like| like.user == user_id)
    }

    /// 좋아요를 맨 앞에 추가합니다. 이미 있으면 아무것도 하지 않고 `false`.
    pub fn add_like(&mut self, user_id: &str) -> bool {
        if self.is_liked_by(user_id) {
            return false;
        }
        self.likes.insert(0, Like { user: user_id.to_string() });
        true
    }

    /// 해당 사용자의 좋아요만 제거합니다. 없으면 `false`.
    pub fn remove_like(&mut self, user_id: &str) -> bool {
        let before = self.likes.len();
        self.likes.retain(|like| like.user != user_id);
        self.likes.len() != before
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn find_comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == comment_id)
    }

    /// 댓글 ID로 위치를 찾아 제거합니다.
    pub fn remove_comment(&mut self, comment_id: &str) -> Option<Comment> {
        let index = self.comments.iter().position(|comment| comment.id == comment_id)?;
        Some(self.comments.remove(index))
    }
}
