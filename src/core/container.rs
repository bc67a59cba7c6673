//! 서비스 컨테이너
//!
//! 전역 레지스트리 대신 생성자 주입으로 서비스 그래프를 만듭니다.
//! 각 서비스는 `Arc`로 한 번 생성되며, 모든 워커가 같은 인스턴스를 공유합니다.

use std::sync::Arc;
use actix_web::web;
use log::info;
use crate::db::Database;
use crate::errors::errors::AppResult;
use crate::repositories::memory::{InMemoryPostRepository, InMemoryProfileRepository, InMemoryUserRepository};
use crate::repositories::{
    MongoPostRepository, MongoProfileRepository, MongoUserRepository, PostRepository, ProfileRepository,
    UserRepository,
};
use crate::services::auth::{AuthService, TokenService};
use crate::services::posts::PostService;
use crate::services::profiles::{GithubClient, ProfileService};
use crate::services::users::UserService;
use crate::utils::display_terminal::{print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task};

const REPOSITORY_COUNT: usize = 3;
const SERVICE_COUNT: usize = 5;

/// 리포지토리 trait 객체 묶음
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl Repositories {
    /// MongoDB 컬렉션 기반 리포지토리를 만들고 인덱스를 보장합니다.
    pub async fn mongo(database: Arc<Database>) -> AppResult<Self> {
        print_step_start(1, "MongoDB repositories");

        let users = MongoUserRepository::new(database.clone());
        users.create_indexes().await?;
        print_sub_task("UserRepository", "users (email_unique)");

        let profiles = MongoProfileRepository::new(database.clone());
        profiles.create_indexes().await?;
        print_sub_task("ProfileRepository", "profiles (user_unique)");

        let posts = MongoPostRepository::new(database);
        print_sub_task("PostRepository", "posts");

        print_step_complete(1, "Repositories ready", REPOSITORY_COUNT);

        Ok(Self {
            users: Arc::new(users),
            posts: Arc::new(posts),
            profiles: Arc::new(profiles),
        })
    }

    /// 프로세스 메모리 리포지토리. 재시작하면 데이터가 사라집니다.
    pub fn in_memory() -> Self {
        print_step_start(1, "In-memory repositories");
        print_step_complete(1, "Repositories ready", REPOSITORY_COUNT);

        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
        }
    }
}

/// 핸들러가 사용하는 모든 서비스
#[derive(Clone)]
pub struct ServiceContainer {
    pub tokens: Arc<TokenService>,
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub posts: Arc<PostService>,
    pub profiles: Arc<ProfileService>,
}

impl ServiceContainer {
    pub fn build(
        repositories: Repositories,
        tokens: TokenService,
        github: Arc<dyn GithubClient>,
        bcrypt_cost: u32,
    ) -> Self {
        print_step_start(2, "Services");

        let tokens = Arc::new(tokens);
        let auth = Arc::new(AuthService::new(repositories.users.clone(), tokens.clone()));
        let users = Arc::new(UserService::new(repositories.users.clone(), bcrypt_cost));
        let posts = Arc::new(PostService::new(repositories.posts.clone(), repositories.users.clone()));
        let profiles = Arc::new(ProfileService::new(repositories.profiles, repositories.users, github));

        print_sub_task("TokenService", &format!("HS256, {}s", tokens.expiration_seconds()));
        print_sub_task("UserService", &format!("bcrypt cost {}", bcrypt_cost));
        print_step_complete(2, "Services ready", SERVICE_COUNT);
        print_final_summary(REPOSITORY_COUNT, SERVICE_COUNT);

        info!("✅ 서비스 컨테이너 구성 완료");

        Self { tokens, auth, users, posts, profiles }
    }

    /// 각 서비스를 `web::Data`로 앱에 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.tokens.clone()))
            .app_data(web::Data::from(self.auth.clone()))
            .app_data(web::Data::from(self.users.clone()))
            .app_data(web::Data::from(self.posts.clone()))
            .app_data(web::Data::from(self.profiles.clone()));
    }

    /// 메모리 리포지토리, GitHub 스텁, bcrypt cost 4로 구성된 테스트용 컨테이너
    #[cfg(test)]
    pub fn for_tests() -> Self {
        use crate::services::profiles::github_client::StubGithubClient;

        Self::build(
            Repositories::in_memory(),
            TokenService::new("test-secret", 3600),
            Arc::new(StubGithubClient::empty()),
            4,
        )
    }
}

/// 시작 배너
pub fn print_startup_banner() {
    print_boxed_title("DevConnect Backend");
}
