//! 선언적 필드 규칙과 규칙 평가기

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use validator::{ValidateEmail, ValidateLength};
use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::is_valid_string;

/// 요청 본문의 날짜 형식
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 단일 필드 규칙
///
/// `check`가 `false`를 반환하면 `message`가 위반 목록에 추가됩니다.
pub struct FieldRule<T> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

impl<T> FieldRule<T> {
    pub fn new(field: &'static str, check: fn(&T) -> bool, message: &'static str) -> Self {
        Self { field, check, message }
    }
}

/// 규칙 목록을 선언하는 요청 DTO
pub trait ValidationRules: Sized {
    /// 평가 순서대로 나열된 규칙 목록
    fn rules() -> Vec<FieldRule<Self>>;
}

/// 규칙 평가기
pub struct ValidationGate;

impl ValidationGate {
    /// 모든 규칙을 평가하고 위반 메시지를 규칙 순서대로 반환합니다.
    ///
    /// 첫 위반에서 멈추지 않습니다.
    pub fn violations<T: ValidationRules>(payload: &T) -> Vec<String> {
        T::rules()
            .into_iter()
            .filter(|rule| !(rule.check)(payload))
            .map(|rule| {
                log::debug!("검증 실패 - 필드: {}, 메시지: {}", rule.field, rule.message);
                rule.message.to_string()
            })
            .collect()
    }

    /// 위반이 하나라도 있으면 `ValidationError`로 중단합니다.
    pub fn check<T: ValidationRules>(payload: &T) -> AppResult<()> {
        let violations = Self::violations(payload);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(violations))
        }
    }
}

pub fn not_empty(value: &str) -> bool {
    is_valid_string(value)
}

pub fn is_email(value: &str) -> bool {
    value.validate_email()
}

pub fn min_length(value: &str, min: u64) -> bool {
    value.validate_length(Some(min), None, None)
}

/// `YYYY-MM-DD` 형식 날짜인지 확인합니다.
pub fn is_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_ok()
}

/// 선택 날짜 필드: 없으면 통과
pub fn is_optional_date(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, is_date)
}

/// 경로 파라미터가 MongoDB ObjectId 형식인지 검증합니다.
pub fn ensure_object_id(value: &str) -> AppResult<()> {
    ObjectId::parse_str(value)
        .map(|_| ())
        .map_err(|_| AppError::validation("Invalid object id!"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Signup {
        name: String,
        email: String,
    }

    impl ValidationRules for Signup {
        fn rules() -> Vec<FieldRule<Self>> {
            vec![
                FieldRule::new("name", |s: &Self| not_empty(&s.name), "Name is required"),
                FieldRule::new("email", |s: &Self| is_email(s.email.trim()), "Please include a valid email"),
            ]
        }
    }

    #[test]
    fn test_collects_all_violations_in_rule_order() {
        let payload = Signup {
            name: "  ".to_string(),
            email: "nope".to_string(),
        };

        assert_eq!(
            ValidationGate::violations(&payload),
            vec!["Name is required", "Please include a valid email"]
        );
    }

    #[test]
    fn test_check_passes_valid_payload() {
        let payload = Signup {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        assert!(ValidationGate::check(&payload).is_ok());
    }

    #[test]
    fn test_predicates() {
        assert!(min_length("123456", 6));
        assert!(!min_length("12345", 6));
        assert!(is_date("2020-02-29"));
        assert!(!is_date("29/02/2020"));
        assert!(is_optional_date(&None));
        assert!(!is_optional_date(&Some("yesterday".to_string())));
    }

    #[test]
    fn test_ensure_object_id() {
        assert!(ensure_object_id("507f1f77bcf86cd799439011").is_ok());
        assert!(matches!(
            ensure_object_id("not-an-id"),
            Err(AppError::ValidationError(messages)) if messages == vec!["Invalid object id!"]
        ));
    }
}
