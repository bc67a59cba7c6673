use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::entities::users::User;

/// 사용자 응답 DTO (비밀번호 제외)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, email, avatar, date, .. } = user;

        Self { id, name, email, avatar, date }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_never_serialized() {
        let user = User::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "//www.gravatar.com/avatar/x".to_string(),
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["name"], "Ada");
        assert!(json["_id"].is_string());
    }
}
