//! 프로필 생성/수정 및 경력/학력 추가 요청 DTO

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use crate::domain::entities::profiles::{Education, Experience, Profile, Social};
use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::{deserialize_optional_string, split_comma_list};
use crate::validation::rules::{is_date, is_optional_date, not_empty, FieldRule, ValidationRules, DATE_FORMAT};

/// 프로필 upsert 요청
///
/// `skills`는 콤마로 구분된 문자열입니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRequest {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub website: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,
    pub status: String,
    #[serde(alias = "githubusername", deserialize_with = "deserialize_optional_string")]
    pub github: Option<String>,
    pub skills: String,
    #[serde(alias = "youTube", deserialize_with = "deserialize_optional_string")]
    pub youtube: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub twitter: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub facebook: Option<String>,
    #[serde(alias = "linkedIn", deserialize_with = "deserialize_optional_string")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub instagram: Option<String>,
}

impl ValidationRules for ProfileRequest {
    fn rules() -> Vec<FieldRule<Self>> {
        vec![
            FieldRule::new("status", |r: &Self| not_empty(&r.status), "Status is required"),
            FieldRule::new("skills", |r: &Self| not_empty(&r.skills), "Skills is required"),
        ]
    }
}

impl ProfileRequest {
    /// 요청 필드로 프로필을 덮어씁니다.
    ///
    /// ID, 소유자, 경력, 학력, 생성 시간은 유지됩니다.
    pub fn apply_to(self, profile: &mut Profile) {
        profile.company = self.company;
        profile.website = self.website;
        profile.location = self.location;
        profile.bio = self.bio;
        profile.status = self.status.trim().to_string();
        profile.github = self.github;
        profile.skills = split_comma_list(&self.skills);
        profile.social = Social {
            youtube: self.youtube,
            twitter: self.twitter,
            facebook: self.facebook,
            linkedin: self.linkedin,
            instagram: self.instagram,
        };
    }
}

/// 경력 추가 요청
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceRequest {
    pub title: String,
    pub company: String,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    pub from: String,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub to: Option<String>,
    pub current: bool,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl ValidationRules for ExperienceRequest {
    fn rules() -> Vec<FieldRule<Self>> {
        vec![
            FieldRule::new("title", |r: &Self| not_empty(&r.title), "Title is required"),
            FieldRule::new("company", |r: &Self| not_empty(&r.company), "Company is required"),
            FieldRule::new("from", |r: &Self| not_empty(&r.from), "From date is required"),
            FieldRule::new("from", |r: &Self| !not_empty(&r.from) || is_date(&r.from), FROM_DATE_FORMAT_MESSAGE),
            FieldRule::new("to", |r: &Self| is_optional_date(&r.to), TO_DATE_FORMAT_MESSAGE),
        ]
    }
}

impl ExperienceRequest {
    pub fn into_experience(self) -> AppResult<Experience> {
        Ok(Experience {
            id: ObjectId::new().to_hex(),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location,
            from: parse_date(&self.from, FROM_DATE_FORMAT_MESSAGE)?,
            to: parse_optional_date(self.to.as_deref())?,
            current: self.current,
            description: self.description,
        })
    }
}

/// 학력 추가 요청
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationRequest {
    pub school: String,
    pub degree: String,
    #[serde(rename = "fieldOfStudy", alias = "fieldofstudy")]
    pub field_of_study: String,
    pub from: String,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub to: Option<String>,
    pub current: bool,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl ValidationRules for EducationRequest {
    fn rules() -> Vec<FieldRule<Self>> {
        vec![
            FieldRule::new("school", |r: &Self| not_empty(&r.school), "School is required"),
            FieldRule::new("degree", |r: &Self| not_empty(&r.degree), "Degree is required"),
            FieldRule::new("fieldOfStudy", |r: &Self| not_empty(&r.field_of_study), "Field of study is required"),
            FieldRule::new("from", |r: &Self| not_empty(&r.from), "From date is required"),
            FieldRule::new("from", |r: &Self| !not_empty(&r.from) || is_date(&r.from), FROM_DATE_FORMAT_MESSAGE),
            FieldRule::new("to", |r: &Self| is_optional_date(&r.to), TO_DATE_FORMAT_MESSAGE),
        ]
    }
}

impl EducationRequest {
    pub fn into_education(self) -> AppResult<Education> {
        Ok(Education {
            id: ObjectId::new().to_hex(),
            school: self.school.trim().to_string(),
            degree: self.degree.trim().to_string(),
            field_of_study: self.field_of_study.trim().to_string(),
            from: parse_date(&self.from, FROM_DATE_FORMAT_MESSAGE)?,
            to: parse_optional_date(self.to.as_deref())?,
            current: self.current,
            description: self.description,
        })
    }
}

const FROM_DATE_FORMAT_MESSAGE: &str = "From date must be a valid date (YYYY-MM-DD)";
const TO_DATE_FORMAT_MESSAGE: &str = "To date must be a valid date (YYYY-MM-DD)";

fn parse_date(value: &str, message: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| AppError::validation(message))
}

fn parse_optional_date(value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    value.map(|to| parse_date(to, TO_DATE_FORMAT_MESSAGE)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationGate;

    #[test]
    fn test_profile_request_accepts_legacy_field_names() {
        let request: ProfileRequest = serde_json::from_str(
            r#"{"status": "Developer", "skills": "rust, go", "githubusername": "octocat", "youTube": "yt", "linkedIn": "li"}"#,
        )
        .unwrap();

        assert_eq!(request.github.as_deref(), Some("octocat"));
        assert_eq!(request.youtube.as_deref(), Some("yt"));
        assert_eq!(request.linkedin.as_deref(), Some("li"));
    }

    #[test]
    fn test_apply_to_normalizes_skills_and_keeps_history() {
        let mut profile = Profile::new("user-1", "Junior".to_string());
        let experience = ExperienceRequest {
            title: "Dev".to_string(),
            company: "Acme".to_string(),
            from: "2019-01-01".to_string(),
            ..Default::default()
        };
        profile.add_experience(experience.into_experience().unwrap());

        let request = ProfileRequest {
            status: " Senior ".to_string(),
            skills: " HTML, CSS ,JavaScript".to_string(),
            twitter: Some("@ada".to_string()),
            ..Default::default()
        };
        request.apply_to(&mut profile);

        assert_eq!(profile.status, "Senior");
        assert_eq!(profile.skills, vec!["HTML", "CSS", "JavaScript"]);
        assert_eq!(profile.social.twitter.as_deref(), Some("@ada"));
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn test_experience_rules() {
        let request: ExperienceRequest = serde_json::from_str(r#"{"to": "last year"}"#).unwrap();

        assert_eq!(
            ValidationGate::violations(&request),
            vec![
                "Title is required",
                "Company is required",
                "From date is required",
                TO_DATE_FORMAT_MESSAGE,
            ]
        );
    }

    #[test]
    fn test_education_rules_and_conversion() {
        let request: EducationRequest = serde_json::from_str(
            r#"{"school": "MIT", "degree": "BSc", "fieldOfStudy": "CS", "from": "2010-09-01", "current": true}"#,
        )
        .unwrap();

        assert!(ValidationGate::check(&request).is_ok());

        let education = request.into_education().unwrap();
        assert_eq!(education.field_of_study, "CS");
        assert_eq!(education.from, NaiveDate::from_ymd_opt(2010, 9, 1).unwrap());
        assert!(education.to.is_none());
        assert!(education.current);
    }

    #[test]
    fn test_education_missing_field_of_study() {
        let request: EducationRequest = serde_json::from_str(
            r#"{"school": "MIT", "degree": "BSc", "from": "2010/09/01"}"#,
        )
        .unwrap();

        assert_eq!(
            ValidationGate::violations(&request),
            vec!["Field of study is required", FROM_DATE_FORMAT_MESSAGE]
        );
    }
}
