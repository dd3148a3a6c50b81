// src/types/profile.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a GitHub account at fetch time. Replaced wholesale on
/// re-fetch, never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub bio: String,
    pub public_repo_count: u32,
    pub follower_count: u32,
    pub following_count: u32,
    pub avatar_url: String,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog_url: Option<String>,
}

/// One public repository, in the provider's own recency ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: String,
    pub primary_language: Option<String>,
    pub star_count: u32,
    pub fork_count: u32,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub topics: Vec<String>,
}
