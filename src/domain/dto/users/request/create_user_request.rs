//! 사용자 생성 요청 DTO
//!
//! 누락된 필드는 빈 문자열로 역직렬화되어 검증 규칙에서 걸러집니다.

use serde::Deserialize;
use crate::validation::rules::{is_email, min_length, not_empty, FieldRule, ValidationRules};

/// 최소 비밀번호 길이
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// 회원가입 요청
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ValidationRules for CreateUserRequest {
    fn rules() -> Vec<FieldRule<Self>> {
        vec![
            FieldRule::new("name", |r: &Self| not_empty(&r.name), "Name is required"),
            FieldRule::new("email", |r: &Self| is_email(r.email.trim()), "Please include a valid email"),
            FieldRule::new(
                "password",
                |r: &Self| min_length(&r.password, MIN_PASSWORD_LENGTH),
                "Please enter a password with 6 or more characters",
            ),
        ]
    }
}
