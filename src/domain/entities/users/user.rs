//! User Entity Implementation
//!
//! 이메일/패스워드 계정을 표현하는 사용자 엔티티입니다.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `password`는 bcrypt 해시이며 응답에는 [`UserResponse`](crate::domain::dto::users::response::UserResponse)를 거쳐서만 나갑니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
    /// Gravatar URL
    pub avatar: String,
    /// 가입 시간
    pub date: DateTime<Utc>,
}

impl User {
    /// 새 ObjectId를 발급해 사용자를 생성합니다.
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            name,
            email,
            password: password_hash,
            avatar,
            date: Utc::now(),
        }
    }
}
