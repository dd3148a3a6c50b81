// src/github.rs
//! GitHub profile fetcher - the one upstream dependency of the engine.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::cache::TtlCache;
use crate::types::{Profile, Repository};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "oppwatch/0.1";
const REPO_PAGE_SIZE: u32 = 100;
const REPO_KEEP_COUNT: usize = 20;

/// Raw user shape from the `/users/{username}` API.
#[derive(Debug, Deserialize)]
struct GithubUserDto {
    login: String,
    name: Option<String>,
    bio: Option<String>,
    #[serde(default)]
    public_repos: u32,
    #[serde(default)]
    followers: u32,
    #[serde(default)]
    following: u32,
    #[serde(default)]
    avatar_url: String,
    location: Option<String>,
    company: Option<String>,
    blog: Option<String>,
}

/// Raw repository shape from the `/users/{username}/repos` API.
#[derive(Debug, Deserialize)]
struct GithubRepoDto {
    name: String,
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u32,
    #[serde(default)]
    forks_count: u32,
    updated_at: DateTime<Utc>,
    html_url: String,
    #[serde(default)]
    topics: Vec<String>,
}

impl From<GithubUserDto> for Profile {
    fn from(dto: GithubUserDto) -> Self {
        Profile {
            display_name: dto.name.unwrap_or(dto.login),
            bio: dto.bio.unwrap_or_default(),
            public_repo_count: dto.public_repos,
            follower_count: dto.followers,
            following_count: dto.following,
            avatar_url: dto.avatar_url,
            location: dto.location.filter(|s| !s.trim().is_empty()),
            company: dto.company.filter(|s| !s.trim().is_empty()),
            blog_url: dto.blog.filter(|s| !s.trim().is_empty()),
        }
    }
}

impl From<GithubRepoDto> for Repository {
    fn from(dto: GithubRepoDto) -> Self {
        Repository {
            name: dto.name,
            description: dto.description.unwrap_or_default(),
            primary_language: dto.language,
            star_count: dto.stargazers_count,
            fork_count: dto.forks_count,
            updated_at: dto.updated_at,
            url: dto.html_url,
            topics: dto.topics,
        }
    }
}

/// HTTP client for the GitHub REST API, with TTL caching per username.
///
/// A missing account is a normal, displayable condition, so both fetchers
/// return `Ok(None)` for non-success responses instead of failing. Transport
/// errors propagate and are never cached.
pub struct GithubClient {
    client: Client,
    api_base_url: String,
    profile_cache: TtlCache<Option<Profile>>,
    repo_cache: TtlCache<Option<Vec<Repository>>>,
}

impl GithubClient {
    pub fn new(
        api_base_url: String,
        profile_ttl: std::time::Duration,
        repository_ttl: std::time::Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_base_url,
            profile_cache: TtlCache::new(profile_ttl),
            repo_cache: TtlCache::new(repository_ttl),
        })
    }

    pub async fn fetch_profile(&self, username: &str) -> Result<Option<Profile>> {
        self.profile_cache
            .get_or_fetch(username, || self.request_profile(username))
            .await
    }

    /// Most-recently-updated repositories, truncated to the first
    /// `REPO_KEEP_COUNT` entries of the provider's own ordering.
    pub async fn fetch_repositories(&self, username: &str) -> Result<Option<Vec<Repository>>> {
        self.repo_cache
            .get_or_fetch(username, || self.request_repositories(username))
            .await
    }

    async fn request_profile(&self, username: &str) -> Result<Option<Profile>> {
        let url = format!("{}/users/{}", self.api_base_url, username);
        info!("Fetching GitHub profile: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("GitHub profile request failed")?;

        if !response.status().is_success() {
            warn!("GitHub returned {} for user {}", response.status(), username);
            return Ok(None);
        }

        let dto: GithubUserDto = response
            .json()
            .await
            .context("Failed to parse GitHub user response")?;

        Ok(Some(dto.into()))
    }

    async fn request_repositories(&self, username: &str) -> Result<Option<Vec<Repository>>> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            self.api_base_url, username, REPO_PAGE_SIZE
        );
        info!("Fetching GitHub repositories: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("GitHub repository request failed")?;

        if !response.status().is_success() {
            warn!(
                "GitHub returned {} for repositories of {}",
                response.status(),
                username
            );
            return Ok(None);
        }

        let dtos: Vec<GithubRepoDto> = response
            .json()
            .await
            .context("Failed to parse GitHub repository response")?;

        Ok(Some(normalize_repositories(dtos)))
    }
}

fn normalize_repositories(dtos: Vec<GithubRepoDto>) -> Vec<Repository> {
    dtos.into_iter()
        .take(REPO_KEEP_COUNT)
        .map(Repository::from)
        .collect()
}
