// src/assembler.rs
//! Application package assembly: templated cover letter and technical
//! summary populated with live profile statistics.
//!
//! Assembly is pure template substitution over values already in memory; no
//! network or disk access happens here. Identical inputs (including the
//! timestamp) produce byte-identical text.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{Profile, Repository};

const MAX_REPO_HIGHLIGHTS: usize = 3;
const MISSING_STAT: &str = "N/A";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoHighlight {
    pub name: String,
    pub description: String,
}

/// Profile statistics captured at assembly time. `None` counts render as
/// "N/A" in the letter text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubStatsSnapshot {
    pub public_repo_count: Option<u32>,
    pub follower_count: Option<u32>,
    pub repos_updated_this_year: u32,
    pub highlights: Vec<RepoHighlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationPackage {
    pub cover_letter: String,
    pub technical_summary: String,
    pub github_stats: GithubStatsSnapshot,
    pub generated_at: DateTime<Utc>,
}

/// Company-specific letter openings; anything else falls back to the
/// generic template with the company name substituted in.
const COMPANY_TEMPLATES: &[(&str, &str)] = &[
    (
        "google",
        "Dear Google Hiring Team,\n\n\
         I am writing to apply for the {{position}} position. Google's work on \
         planet-scale infrastructure and applied machine learning is exactly \
         where I want to contribute, and my public work backs that ambition: \
         {{repo_count}} public repositories, {{followers}} followers, and \
         {{active_repos}} projects updated this year.\n\n\
         Recent work:\n{{highlights}}\n\
         I would welcome the chance to discuss how my background fits the team.\n\n\
         Sincerely,\n{{name}}",
    ),
    (
        "microsoft",
        "Dear Microsoft Hiring Team,\n\n\
         I am applying for the {{position}} role. Microsoft's developer-first \
         culture and Azure's reach align with how I build software in the open: \
         {{repo_count}} public repositories, {{followers}} followers, and \
         {{active_repos}} projects updated this year.\n\n\
         Recent work:\n{{highlights}}\n\
         Thank you for your consideration.\n\n\
         Sincerely,\n{{name}}",
    ),
    (
        "amazon",
        "Dear Amazon Hiring Team,\n\n\
         I am excited to apply for the {{position}} position. I share Amazon's \
         bias for action, and my GitHub activity shows it: {{repo_count}} public \
         repositories, {{followers}} followers, and {{active_repos}} projects \
         updated this year.\n\n\
         Recent work:\n{{highlights}}\n\
         I look forward to hearing from you.\n\n\
         Sincerely,\n{{name}}",
    ),
    (
        "meta",
        "Dear Meta Hiring Team,\n\n\
         I am applying for the {{position}} position. Meta's open research \
         culture, from PyTorch to FAIR, shaped much of how I learned to build, \
         and my own public record reflects that: {{repo_count}} public \
         repositories, {{followers}} followers, and {{active_repos}} projects \
         updated this year.\n\n\
         Recent work:\n{{highlights}}\n\
         I would be glad to discuss the role further.\n\n\
         Sincerely,\n{{name}}",
    ),
    (
        "apple",
        "Dear Apple Hiring Team,\n\n\
         I am writing to apply for the {{position}} position. Apple's standard \
         of craft is one I hold my own work to: {{repo_count}} public \
         repositories, {{followers}} followers, and {{active_repos}} projects \
         updated this year.\n\n\
         Recent work:\n{{highlights}}\n\
         Thank you for your time and consideration.\n\n\
         Sincerely,\n{{name}}",
    ),
];

const GENERIC_TEMPLATE: &str = "Dear {{company}} Hiring Team,\n\n\
    I am writing to apply for the {{position}} position at {{company}}. My \
    public engineering record includes {{repo_count}} public repositories, \
    {{followers}} followers, and {{active_repos}} projects updated this \
    year.\n\n\
    Recent work:\n{{highlights}}\n\
    I would welcome the opportunity to discuss how I can contribute.\n\n\
    Sincerely,\n{{name}}";

const TECHNICAL_SUMMARY_TEMPLATE: &str = "Technical Summary - {{name}}\n\
    Target: {{position}} at {{company}}\n\n\
    GitHub activity snapshot:\n\
    - Public repositories: {{repo_count}}\n\
    - Followers: {{followers}}\n\
    - Projects updated this year: {{active_repos}}\n\n\
    Highlighted projects:\n{{highlights}}";

pub struct PackageAssembler;

impl PackageAssembler {
    pub fn assemble(
        company: &str,
        position: &str,
        profile: Option<&Profile>,
        repos: &[Repository],
    ) -> ApplicationPackage {
        Self::assemble_at(company, position, profile, repos, Utc::now())
    }

    /// Deterministic inner assembly; `now` pins both the timestamp and the
    /// "updated this year" statistic.
    pub fn assemble_at(
        company: &str,
        position: &str,
        profile: Option<&Profile>,
        repos: &[Repository],
        now: DateTime<Utc>,
    ) -> ApplicationPackage {
        let stats = Self::stats_snapshot(profile, repos, now);

        let mut vars = HashMap::new();
        vars.insert("company".to_string(), company.to_string());
        vars.insert("position".to_string(), position.to_string());
        vars.insert(
            "name".to_string(),
            profile
                .map(|p| p.display_name.clone())
                .unwrap_or_else(|| MISSING_STAT.to_string()),
        );
        vars.insert("repo_count".to_string(), format_stat(stats.public_repo_count));
        vars.insert("followers".to_string(), format_stat(stats.follower_count));
        vars.insert(
            "active_repos".to_string(),
            stats.repos_updated_this_year.to_string(),
        );
        vars.insert("highlights".to_string(), format_highlights(&stats.highlights));

        let template = Self::letter_template(company);
        let cover_letter = process_variables(template, &vars);
        let technical_summary = process_variables(TECHNICAL_SUMMARY_TEMPLATE, &vars);

        ApplicationPackage {
            cover_letter,
            technical_summary,
            github_stats: stats,
            generated_at: now,
        }
    }

    fn letter_template(company: &str) -> &'static str {
        let key = company.trim().to_lowercase();
        COMPANY_TEMPLATES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, template)| *template)
            .unwrap_or(GENERIC_TEMPLATE)
    }

    fn stats_snapshot(
        profile: Option<&Profile>,
        repos: &[Repository],
        now: DateTime<Utc>,
    ) -> GithubStatsSnapshot {
        let repos_updated_this_year = repos
            .iter()
            .filter(|r| r.updated_at.year() == now.year())
            .count() as u32;

        // Repositories arrive most-recently-updated first; the head of the
        // list is the highlight reel.
        let highlights = repos
            .iter()
            .take(MAX_REPO_HIGHLIGHTS)
            .map(|r| RepoHighlight {
                name: r.name.clone(),
                description: r.description.clone(),
            })
            .collect();

        GithubStatsSnapshot {
            public_repo_count: profile.map(|p| p.public_repo_count),
            follower_count: profile.map(|p| p.follower_count),
            repos_updated_this_year,
            highlights,
        }
    }
}

fn format_stat(value: Option<u32>) -> String {
    value.map_or_else(|| MISSING_STAT.to_string(), |v| v.to_string())
}

fn format_highlights(highlights: &[RepoHighlight]) -> String {
    if highlights.is_empty() {
        return "- (no public repositories)\n".to_string();
    }
    highlights
        .iter()
        .map(|h| {
            if h.description.is_empty() {
                format!("- {}\n", h.name)
            } else {
                format!("- {}: {}\n", h.name, h.description)
            }
        })
        .collect()
}

fn process_variables(content: &str, vars: &HashMap<String, String>) -> String {
    vars.iter().fold(content.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{{}}}}}", key), value)
    })
}
