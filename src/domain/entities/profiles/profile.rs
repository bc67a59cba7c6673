//! Profile Entity Implementation
//!
//! 사용자당 하나의 개발자 프로필과 경력/학력 이력입니다.

use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 소셜 링크
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// 경력 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// 학력 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: String,
    pub school: String,
    pub degree: String,
    #[serde(rename = "fieldOfStudy")]
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// 프로필 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    /// 소유 사용자 ID (unique)
    pub user: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    /// GitHub 사용자 이름
    pub github: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social: Social,
    /// 최신 항목이 앞
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// 최신 항목이 앞
    #[serde(default)]
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: &str, status: String) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            user: user_id.to_string(),
            company: None,
            website: None,
            location: None,
            bio: None,
            status,
            github: None,
            skills: Vec::new(),
            social: Social::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
    }

    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
    }

    /// 항목 ID로 경력을 제거합니다. 없으면 `None`.
    pub fn remove_experience(&mut self, experience_id: &str) -> Option<Experience> {
        let index = self.experience.iter().position(|item| item.id == experience_id)?;
        Some(self.experience.remove(index))
    }

    /// 항목 ID로 학력을 제거합니다. 없으면 `None`.
    pub fn remove_education(&mut self, education_id: &str) -> Option<Education> {
        let index = self.education.iter().position(|item| item.id == education_id)?;
        Some(self.education.remove(index))
    }
}
