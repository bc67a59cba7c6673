//! # 프로필 서비스 구현
//!
//! 프로필 upsert, 경력/학력 이력 관리, 계정 삭제, GitHub 저장소 조회를 담당합니다.
//! 응답은 항상 소유자의 `name`/`avatar`가 결합된 [`ProfileResponse`]입니다.

use std::collections::HashMap;
use std::sync::Arc;
use serde_json::Value;
use crate::domain::dto::profiles::{EducationRequest, ExperienceRequest, ProfileRequest, ProfileResponse};
use crate::domain::entities::profiles::Profile;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::profiles::ProfileRepository;
use crate::repositories::users::UserRepository;
use crate::services::profiles::github_client::GithubClient;
use crate::validation::ValidationGate;

pub const PROFILE_NOT_FOUND_MESSAGE: &str = "Profile not found!";
pub const NO_PROFILE_FOR_USER_MESSAGE: &str = "There is no profile for this user";

pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    users: Arc<dyn UserRepository>,
    github: Arc<dyn GithubClient>,
}

impl ProfileService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        users: Arc<dyn UserRepository>,
        github: Arc<dyn GithubClient>,
    ) -> Self {
        Self { profiles, users, github }
    }

    /// 사용자 ID로 프로필을 조회합니다.
    pub async fn get_profile(&self, user_id: &str) -> AppResult<ProfileResponse> {
        let profile = self.require_profile(user_id, PROFILE_NOT_FOUND_MESSAGE).await?;
        self.with_owner(profile).await
    }

    /// 요청자 본인의 프로필
    pub async fn get_current_profile(&self, user_id: &str) -> AppResult<ProfileResponse> {
        let profile = self.require_profile(user_id, NO_PROFILE_FOR_USER_MESSAGE).await?;
        self.with_owner(profile).await
    }

    pub async fn get_profiles(&self) -> AppResult<Vec<ProfileResponse>> {
        let profiles = self.profiles.find_all().await?;

        let owner_ids: Vec<String> = profiles.iter().map(|profile| profile.user.clone()).collect();
        let owners: HashMap<String, _> = self
            .users
            .find_by_ids(&owner_ids)
            .await?
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let owner = owners.get(&profile.user);
                ProfileResponse::new(profile, owner)
            })
            .collect())
    }

    /// 프로필이 있으면 수정 가능한 필드를 교체하고, 없으면 새로 만듭니다.
    pub async fn create_profile(&self, user_id: &str, request: ProfileRequest) -> AppResult<ProfileResponse> {
        ValidationGate::check(&request)?;

        let mut profile = match self.profiles.find_by_user(user_id).await? {
            Some(existing) => existing,
            None => {
                log::info!("🆕 프로필 생성: 사용자 {}", user_id);
                Profile::new(user_id, String::new())
            }
        };

        request.apply_to(&mut profile);
        self.profiles.upsert(&profile).await?;

        self.with_owner(profile).await
    }

    /// 경력을 맨 앞에 추가합니다.
    pub async fn add_profile_experience(&self, user_id: &str, request: ExperienceRequest) -> AppResult<ProfileResponse> {
        ValidationGate::check(&request)?;
        let experience = request.into_experience()?;

        let mut profile = self.require_profile(user_id, PROFILE_NOT_FOUND_MESSAGE).await?;
        profile.add_experience(experience);
        self.profiles.upsert(&profile).await?;

        self.with_owner(profile).await
    }

    /// 학력을 맨 앞에 추가합니다.
    pub async fn add_profile_education(&self, user_id: &str, request: EducationRequest) -> AppResult<ProfileResponse> {
        ValidationGate::check(&request)?;
        let education = request.into_education()?;

        let mut profile = self.require_profile(user_id, PROFILE_NOT_FOUND_MESSAGE).await?;
        profile.add_education(education);
        self.profiles.upsert(&profile).await?;

        self.with_owner(profile).await
    }

    pub async fn remove_profile_experience(&self, user_id: &str, experience_id: &str) -> AppResult<ProfileResponse> {
        let mut profile = self.require_profile(user_id, PROFILE_NOT_FOUND_MESSAGE).await?;

        if profile.remove_experience(experience_id).is_none() {
            return Err(AppError::NotFound(format!(
                "Experience with id {} does not exist!",
                experience_id
            )));
        }

        self.profiles.upsert(&profile).await?;
        self.with_owner(profile).await
    }

    pub async fn remove_profile_education(&self, user_id: &str, education_id: &str) -> AppResult<ProfileResponse> {
        let mut profile = self.require_profile(user_id, PROFILE_NOT_FOUND_MESSAGE).await?;

        if profile.remove_education(education_id).is_none() {
            return Err(AppError::NotFound(format!(
                "Education with id {} does not exist!",
                education_id
            )));
        }

        self.profiles.upsert(&profile).await?;
        self.with_owner(profile).await
    }

    /// 프로필과 사용자 계정을 함께 삭제합니다.
    ///
    /// 본인 계정만 삭제할 수 있습니다. 사용자가 작성한 게시글은 남습니다.
    /// 계정 삭제가 실패하면 프로필도 남아 있습니다.
    pub async fn remove_user_and_profile(&self, acting_user_id: &str, user_id: &str) -> AppResult<()> {
        if acting_user_id != user_id {
            log::warn!("계정 삭제 거부: {} (요청자 {})", user_id, acting_user_id);
            return Err(AppError::unauthorized_action("User not authorized to delete this profile!"));
        }

        if self.profiles.find_by_user(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User with id {} not found!", user_id)));
        }

        // 계정을 먼저 지웁니다. 실패하면 프로필은 그대로 남아 재시도할 수 있습니다.
        self.users.delete(user_id).await?;

        if let Err(err) = self.profiles.delete_by_user(user_id).await {
            log::error!("❌ 계정 삭제 후 프로필 정리 실패: {} ({})", user_id, err);
            return Err(err);
        }

        log::info!("🗑️ 사용자와 프로필 삭제: {}", user_id);
        Ok(())
    }

    pub async fn fetch_github_repositories(&self, username: &str) -> AppResult<Value> {
        self.github.fetch_repositories(username.trim()).await
    }

    async fn require_profile(&self, user_id: &str, message: &str) -> AppResult<Profile> {
        self.profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(message.to_string()))
    }

    async fn with_owner(&self, profile: Profile) -> AppResult<ProfileResponse> {
        let owner = self.users.find_by_id(&profile.user).await?;
        Ok(ProfileResponse::new(profile, owner.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::domain::entities::users::User;
    use crate::repositories::memory::{InMemoryProfileRepository, InMemoryUserRepository};
    use crate::services::profiles::github_client::StubGithubClient;

    struct Fixture {
        service: ProfileService,
        users: Arc<InMemoryUserRepository>,
        ada: User,
    }

    async fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserRepository::new());
        let ada = users
            .create(User::new("Ada".into(), "ada@example.com".into(), "hash".into(), "//ada".into()))
            .await
            .unwrap();
        let github = StubGithubClient {
            username: "octocat".to_string(),
            repositories: json!([{ "name": "hello-world" }]),
        };

        Fixture {
            service: ProfileService::new(
                Arc::new(InMemoryProfileRepository::new()),
                users.clone(),
                Arc::new(github),
            ),
            users,
            ada,
        }
    }

    fn profile_request(status: &str, skills: &str) -> ProfileRequest {
        ProfileRequest {
            status: status.to_string(),
            skills: skills.to_string(),
            ..Default::default()
        }
    }

    fn experience(title: &str) -> ExperienceRequest {
        ExperienceRequest {
            title: title.to_string(),
            company: "Acme".to_string(),
            from: "2018-03-01".to_string(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_create_profile_twice_updates_in_place() {
        let f = fixture().await;

        let first = f.service.create_profile(&f.ada.id, profile_request("Junior", "rust")).await.unwrap();
        let second = f
            .service
            .create_profile(&f.ada.id, profile_request("Senior", " rust, go ,ts"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.skills, vec!["rust", "go", "ts"]);

        let profiles = f.service.get_profiles().await.unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].status, "Senior");
        assert_eq!(profiles[0].user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
    }

    #[actix_web::test]
    async fn test_get_profile_joins_owner_and_reports_missing() {
        let f = fixture().await;

        assert!(matches!(
            f.service.get_profile(&f.ada.id).await,
            Err(AppError::NotFound(msg)) if msg == PROFILE_NOT_FOUND_MESSAGE
        ));
        assert!(matches!(
            f.service.get_current_profile(&f.ada.id).await,
            Err(AppError::NotFound(msg)) if msg == NO_PROFILE_FOR_USER_MESSAGE
        ));

        f.service.create_profile(&f.ada.id, profile_request("Dev", "rust")).await.unwrap();
        let profile = f.service.get_profile(&f.ada.id).await.unwrap();
        let owner = profile.user.unwrap();

        assert_eq!(owner.id, f.ada.id);
        assert_eq!(owner.avatar, "//ada");
    }

    #[actix_web::test]
    async fn test_experience_requires_profile_and_is_prepended() {
        let f = fixture().await;

        assert!(matches!(
            f.service.add_profile_experience(&f.ada.id, experience("Intern")).await,
            Err(AppError::NotFound(_))
        ));

        f.service.create_profile(&f.ada.id, profile_request("Dev", "rust")).await.unwrap();
        f.service.add_profile_experience(&f.ada.id, experience("Intern")).await.unwrap();
        let profile = f.service.add_profile_experience(&f.ada.id, experience("Engineer")).await.unwrap();

        let titles: Vec<&str> = profile.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Engineer", "Intern"]);
    }

    #[actix_web::test]
    async fn test_remove_experience_by_item_id() {
        let f = fixture().await;
        f.service.create_profile(&f.ada.id, profile_request("Dev", "rust")).await.unwrap();
        f.service.add_profile_experience(&f.ada.id, experience("Intern")).await.unwrap();
        let profile = f.service.add_profile_experience(&f.ada.id, experience("Engineer")).await.unwrap();
        let intern_id = profile.experience[1].id.clone();

        let profile = f.service.remove_profile_experience(&f.ada.id, &intern_id).await.unwrap();
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "Engineer");

        assert!(matches!(
            f.service.remove_profile_experience(&f.ada.id, &intern_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_education_add_and_remove() {
        let f = fixture().await;
        f.service.create_profile(&f.ada.id, profile_request("Dev", "rust")).await.unwrap();
        let request = EducationRequest {
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "CS".to_string(),
            from: "2010-09-01".to_string(),
            to: Some("2014-06-01".to_string()),
            ..Default::default()
        };

        let profile = f.service.add_profile_education(&f.ada.id, request).await.unwrap();
        let education_id = profile.education[0].id.clone();
        let profile = f.service.remove_profile_education(&f.ada.id, &education_id).await.unwrap();

        assert!(profile.education.is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_experience_never_touches_profile() {
        let f = fixture().await;
        f.service.create_profile(&f.ada.id, profile_request("Dev", "rust")).await.unwrap();

        let result = f.service.add_profile_experience(&f.ada.id, ExperienceRequest::default()).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(f.service.get_profile(&f.ada.id).await.unwrap().experience.is_empty());
    }

    #[actix_web::test]
    async fn test_remove_user_and_profile() {
        let f = fixture().await;

        assert!(matches!(
            f.service.remove_user_and_profile(&f.ada.id, &f.ada.id).await,
            Err(AppError::NotFound(_))
        ));

        f.service.create_profile(&f.ada.id, profile_request("Dev", "rust")).await.unwrap();

        assert!(matches!(
            f.service.remove_user_and_profile("507f1f77bcf86cd799439011", &f.ada.id).await,
            Err(AppError::AuthorizationError(_))
        ));

        f.service.remove_user_and_profile(&f.ada.id, &f.ada.id).await.unwrap();

        assert!(f.service.get_profiles().await.unwrap().is_empty());
        assert!(f.users.find_by_id(&f.ada.id).await.unwrap().is_none());
    }

    /// `delete`만 실패하는 사용자 저장소
    struct FailingDeleteUsers(Arc<InMemoryUserRepository>);

    #[async_trait::async_trait]
    impl UserRepository for FailingDeleteUsers {
        async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
            self.0.find_by_id(id).await
        }

        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            self.0.find_by_email(email).await
        }

        async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<User>> {
            self.0.find_by_ids(ids).await
        }

        async fn create(&self, user: User) -> AppResult<User> {
            self.0.create(user).await
        }

        async fn delete(&self, _id: &str) -> AppResult<bool> {
            Err(AppError::DatabaseError("connection reset".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_failed_account_delete_keeps_profile() {
        let f = fixture().await;
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let service = ProfileService::new(
            profiles.clone(),
            Arc::new(FailingDeleteUsers(f.users.clone())),
            Arc::new(StubGithubClient::empty()),
        );
        service.create_profile(&f.ada.id, profile_request("Dev", "rust")).await.unwrap();

        let result = service.remove_user_and_profile(&f.ada.id, &f.ada.id).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert!(profiles.find_by_user(&f.ada.id).await.unwrap().is_some());
        assert!(f.users.find_by_id(&f.ada.id).await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_fetch_github_repositories_delegates_to_client() {
        let f = fixture().await;

        let repos = f.service.fetch_github_repositories("octocat").await.unwrap();
        assert_eq!(repos, json!([{ "name": "hello-world" }]));

        assert!(matches!(
            f.service.fetch_github_repositories("ghost").await,
            Err(AppError::UpstreamError(_))
        ));
    }
}
