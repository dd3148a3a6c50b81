// src/config.rs
//! Environment-driven configuration for the engine and server.

use anyhow::Result;
use std::time::Duration;
use tracing::info;

use crate::cache::CacheTtl;

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Skills the portfolio owner declares up front; repository languages and
/// topics are merged in at scoring time.
const DEFAULT_DECLARED_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "SQL",
    "TensorFlow",
    "PyTorch",
    "OpenCV",
    "React",
    "Docker",
];

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub github_api_url: String,
    pub declared_skills: Vec<String>,
    pub profile_ttl: Duration,
    pub repository_ttl: Duration,
    pub catalog_ttl: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            declared_skills: DEFAULT_DECLARED_SKILLS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            profile_ttl: CacheTtl::PROFILE,
            repository_ttl: CacheTtl::REPOSITORIES,
            catalog_ttl: CacheTtl::CATALOG,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment, with usable defaults for
    /// local runs.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let github_api_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| defaults.github_api_url);

        let declared_skills = match std::env::var("DECLARED_SKILLS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => defaults.declared_skills,
        };

        let profile_ttl = ttl_from_env("PROFILE_TTL_SECS", defaults.profile_ttl);
        let repository_ttl = ttl_from_env("REPOSITORY_TTL_SECS", defaults.repository_ttl);
        let catalog_ttl = ttl_from_env("CATALOG_TTL_SECS", defaults.catalog_ttl);

        info!(
            "Loaded engine configuration: api={}, {} declared skills, catalog ttl {}s",
            github_api_url,
            declared_skills.len(),
            catalog_ttl.as_secs()
        );

        Ok(Self {
            github_api_url,
            declared_skills,
            profile_ttl,
            repository_ttl,
            catalog_ttl,
        })
    }
}

/// Whole seconds from the environment; anything unset or unparsable keeps
/// the default.
fn ttl_from_env(var: &str, default: Duration) -> Duration {
    std::env::var(var)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}
