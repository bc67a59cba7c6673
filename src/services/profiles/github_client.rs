//! GitHub 저장소 조회 클라이언트
//!
//! 사용자의 최근 저장소 5개를 생성 시간 오름차순으로 가져옵니다.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use crate::config::GithubConfig;
use crate::errors::errors::{AppError, AppResult};

/// 업스트림 실패 메시지
pub const NO_GITHUB_PROFILE_MESSAGE: &str = "No Github profile found!";

#[async_trait]
pub trait GithubClient: Send + Sync {
    /// GitHub 응답 JSON을 그대로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `UpstreamError` - 200이 아닌 응답, 네트워크 실패, 해석할 수 없는 본문
    async fn fetch_repositories(&self, username: &str) -> AppResult<Value>;
}

/// reqwest 기반 GitHub REST API 클라이언트
pub struct ReqwestGithubClient {
    http: reqwest::Client,
    api_url: String,
    client_id: String,
    client_secret: String,
    user_agent: String,
}

impl ReqwestGithubClient {
    pub fn new(api_url: String, client_id: String, client_secret: String, user_agent: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
            client_id,
            client_secret,
            user_agent,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            GithubConfig::api_url(),
            GithubConfig::client_id(),
            GithubConfig::client_secret(),
            GithubConfig::user_agent(),
        )
    }

    fn repositories_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page=5&sort=created:asc&client_id={}&client_secret={}",
            self.api_url,
            urlencoding::encode(username),
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.client_secret),
        )
    }
}

fn upstream_failure() -> AppError {
    AppError::UpstreamError(NO_GITHUB_PROFILE_MESSAGE.to_string())
}

#[async_trait]
impl GithubClient for ReqwestGithubClient {
    async fn fetch_repositories(&self, username: &str) -> AppResult<Value> {
        let response = self
            .http
            .get(self.repositories_url(username))
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| {
                log::warn!("⚠️ GitHub 요청 실패: {}", e);
                upstream_failure()
            })?;

        if response.status() != StatusCode::OK {
            log::info!("GitHub 응답 상태 {} - 사용자: {}", response.status(), username);
            return Err(upstream_failure());
        }

        response.json::<Value>().await.map_err(|e| {
            log::warn!("⚠️ GitHub 응답 파싱 실패: {}", e);
            upstream_failure()
        })
    }
}

/// 테스트용 고정 응답 클라이언트
///
/// 등록된 사용자 이름에만 응답하고 나머지는 업스트림 실패로 처리합니다.
#[cfg(test)]
pub struct StubGithubClient {
    pub username: String,
    pub repositories: Value,
}

#[cfg(test)]
impl StubGithubClient {
    pub fn empty() -> Self {
        Self {
            username: String::new(),
            repositories: Value::Array(Vec::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl GithubClient for StubGithubClient {
    async fn fetch_repositories(&self, username: &str) -> AppResult<Value> {
        if !self.username.is_empty() && self.username == username {
            Ok(self.repositories.clone())
        } else {
            Err(upstream_failure())
        }
    }
}
