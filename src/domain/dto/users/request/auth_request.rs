//! 인증 요청관련 DTO

use serde::Deserialize;
use crate::validation::rules::{is_email, not_empty, FieldRule, ValidationRules};

/// 로컬 로그인 요청
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ValidationRules for LoginRequest {
    fn rules() -> Vec<FieldRule<Self>> {
        vec![
            FieldRule::new("email", |r: &Self| is_email(r.email.trim()), "Please include a valid email"),
            FieldRule::new("password", |r: &Self| not_empty(&r.password), "Password is required"),
        ]
    }
}
