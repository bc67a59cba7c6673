//! 게시글/댓글 작성 요청 DTO

use serde::Deserialize;
use crate::validation::rules::{not_empty, FieldRule, ValidationRules};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub text: String,
}

impl ValidationRules for CreatePostRequest {
    fn rules() -> Vec<FieldRule<Self>> {
        vec![FieldRule::new("text", |r: &Self| not_empty(&r.text), "Text is required")]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCommentRequest {
    pub text: String,
}

impl ValidationRules for CreateCommentRequest {
    fn rules() -> Vec<FieldRule<Self>> {
        vec![FieldRule::new("text", |r: &Self| not_empty(&r.text), "Text is required")]
    }
}
