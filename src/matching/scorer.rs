// src/matching/scorer.rs
//! Skill-overlap scoring against a derived candidate skill set.

use std::collections::HashSet;

use crate::types::{JobPosting, Repository, ScoredPosting};

/// Union of the declared skill list with languages and topics discovered on
/// the candidate's repositories. Deduplicated case-insensitively, first
/// spelling wins; this keeps recommendations responsive to recent coding
/// activity without re-declaring skills by hand.
pub fn candidate_skill_set(declared: &[String], repos: &[Repository]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    let mut add = |skill: &str| {
        let trimmed = skill.trim();
        if !trimmed.is_empty() && seen.insert(trimmed.to_lowercase()) {
            skills.push(trimmed.to_string());
        }
    };

    for skill in declared {
        add(skill);
    }
    for repo in repos {
        if let Some(language) = &repo.primary_language {
            add(language);
        }
        for topic in &repo.topics {
            add(topic);
        }
    }

    skills
}

/// Scores every posting by fractional overlap between the candidate skills
/// and its required-skill list, sorted descending by score. A posting with
/// no required skills scores exactly 0.
pub fn score_postings(postings: &[JobPosting], candidate_skills: &[String]) -> Vec<ScoredPosting> {
    let mut scored: Vec<ScoredPosting> = postings
        .iter()
        .map(|posting| {
            let haystack = posting.required_skills.join(" ").to_lowercase();
            let matched_skills: Vec<String> = candidate_skills
                .iter()
                .filter(|skill| {
                    let skill = skill.trim().to_lowercase();
                    !skill.is_empty() && haystack.contains(&skill)
                })
                .cloned()
                .collect();

            let match_score = if posting.required_skills.is_empty() {
                0.0
            } else {
                100.0 * matched_skills.len() as f64 / posting.required_skills.len() as f64
            };

            ScoredPosting {
                posting: posting.clone(),
                match_score,
                matched_skills,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    scored
}
