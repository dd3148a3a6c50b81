use anyhow::Result;

pub mod assembler;
pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod github;
pub mod matching;
pub mod types;
pub mod web;

pub use config::EngineConfig;
pub use web::start_web_server;

use assembler::{ApplicationPackage, PackageAssembler};
use cache::TtlCache;
use catalog::{CatalogSource, StaticCatalog};
use github::GithubClient;
use matching::{candidate_skill_set, filter_postings, rank_by_recency, score_postings};
use types::{JobPosting, Profile, Repository, ScoredPosting, SearchCriteria};

/// Opportunity matching engine facade.
///
/// Wires the GitHub fetcher (TTL-cached), the posting catalog and the
/// declared skill list into the operations the API surface exposes. The
/// catalog is behind a trait so the built-in static set can be swapped for a
/// live aggregator.
pub struct OpportunityEngine {
    github: GithubClient,
    catalog: Box<dyn CatalogSource + Send + Sync>,
    catalog_cache: TtlCache<Vec<JobPosting>>,
    declared_skills: Vec<String>,
}

impl OpportunityEngine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self {
            github: GithubClient::new(
                config.github_api_url.clone(),
                config.profile_ttl,
                config.repository_ttl,
            )?,
            catalog: Box::new(StaticCatalog::new()),
            catalog_cache: TtlCache::new(config.catalog_ttl),
            declared_skills: config.declared_skills.clone(),
        })
    }

    pub fn with_catalog(mut self, catalog: Box<dyn CatalogSource + Send + Sync>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Catalog snapshot, refreshed at most once per TTL window. The static
    /// source makes this cheap, but a live aggregator behind the same trait
    /// would not be.
    async fn catalog_postings(&self) -> Result<Vec<JobPosting>> {
        self.catalog_cache
            .get_or_fetch("catalog", || async { Ok(self.catalog.postings()) })
            .await
    }

    /// Profile snapshot for the given account; `None` when the account does
    /// not exist, which callers display as a placeholder rather than an
    /// error.
    pub async fn profile(&self, username: &str) -> Result<Option<Profile>> {
        self.github.fetch_profile(username).await
    }

    pub async fn repositories(&self, username: &str) -> Result<Option<Vec<Repository>>> {
        self.github.fetch_repositories(username).await
    }

    /// Filter the catalog against the criteria, newest postings first.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<JobPosting>> {
        let matches = filter_postings(&self.catalog_postings().await?, criteria);
        Ok(rank_by_recency(matches))
    }

    /// Score the whole catalog against the candidate's skill profile:
    /// declared skills plus any extras, enriched with languages and topics
    /// from their recent repositories.
    pub async fn recommendations(
        &self,
        username: &str,
        extra_skills: &[String],
    ) -> Result<Vec<ScoredPosting>> {
        let repos = self
            .github
            .fetch_repositories(username)
            .await?
            .unwrap_or_default();

        let mut declared = self.declared_skills.clone();
        declared.extend_from_slice(extra_skills);

        let skills = candidate_skill_set(&declared, &repos);
        Ok(score_postings(&self.catalog_postings().await?, &skills))
    }

    /// Compose a cover letter and technical summary for one target
    /// company/position pair, populated with the live profile statistics.
    pub async fn application_package(
        &self,
        username: &str,
        company: &str,
        position: &str,
    ) -> Result<ApplicationPackage> {
        let profile = self.github.fetch_profile(username).await?;
        let repos = self
            .github
            .fetch_repositories(username)
            .await?
            .unwrap_or_default();

        Ok(PackageAssembler::assemble(
            company,
            position,
            profile.as_ref(),
            &repos,
        ))
    }
}
