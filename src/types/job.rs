// src/types/job.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    Internship,
    Contract,
    PartTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Student,
    Entry,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisaRequirement {
    #[default]
    Any,
    Required,
    NotRequired,
}

/// Immutable catalog record. The posting age is kept in its human-readable
/// form (`posted_relative`); the ranker derives an absolute timestamp from it
/// on demand instead of storing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub salary: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub posted_relative: String,
    pub apply_url: String,
    pub remote_friendly: bool,
    pub visa_sponsorship: bool,
}

/// Per-invocation search parameters. `None` for experience level or job
/// type means "all"; a location of "any" passes every posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub visa: VisaRequirement,
}

fn default_location() -> String {
    "any".to_string()
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            location: default_location(),
            experience_level: None,
            job_type: None,
            visa: VisaRequirement::Any,
        }
    }
}

/// A posting plus its skill-overlap score. Computed fresh per scoring run;
/// never cached, since the skill profile can change between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub match_score: f64,
    pub matched_skills: Vec<String>,
}
