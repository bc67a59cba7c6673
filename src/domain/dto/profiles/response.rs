use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::entities::profiles::{Education, Experience, Profile, Social};
use crate::domain::entities::users::User;

/// 프로필 소유자 요약 (`_id`, `name`, `avatar`)
#[derive(Debug, Clone, Serialize)]
pub struct ProfileOwner {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl From<&User> for ProfileOwner {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// 소유자 정보가 결합된 프로필 응답
///
/// 소유자 계정이 없으면 `user`는 `null`입니다.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<ProfileOwner>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl ProfileResponse {
    pub fn new(profile: Profile, owner: Option<&User>) -> Self {
        Self {
            id: profile.id,
            user: owner.map(ProfileOwner::from),
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            status: profile.status,
            github: profile.github,
            skills: profile.skills,
            social: profile.social,
            experience: profile.experience,
            education: profile.education,
            date: profile.date,
        }
    }
}
