//! # 문자열 유틸리티
//!
//! 요청 DTO 정리와 검증 규칙에서 쓰는 문자열 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// 값이 없거나 공백뿐이면 `None`, 아니면 trim된 값을 돌려줍니다.
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Acme  ".to_string())), Some("Acme".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 빈 문자열이 아니고 공백만으로 구성되지 않았는지 확인
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 콤마로 구분된 입력을 항목 목록으로 나눕니다.
///
/// 각 항목은 trim되고 빈 항목은 버립니다. 순서는 입력 순서를 따릅니다.
///
/// ```rust,ignore
/// assert_eq!(split_comma_list(" rust, go ,,ts "), vec!["rust", "go", "ts"]);
/// ```
pub fn split_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 씁니다.
/// null, 빈 문자열, 공백뿐인 문자열은 모두 `None`이 됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
