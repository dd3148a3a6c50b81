// src/matching/filter.rs
//! Multi-criteria posting filter.
//!
//! Four independent predicates are AND-ed together; within the keyword
//! predicate, matching is OR across keywords. Equivalence rules live in
//! lookup tables rather than branch chains so they stay testable and easy
//! to extend.

use tracing::debug;

use crate::types::{ExperienceLevel, JobPosting, SearchCriteria, VisaRequirement};

/// Terms treated as interchangeable during keyword matching. A keyword
/// belonging to a group matches if any other member of the group appears in
/// the posting text.
const SYNONYM_GROUPS: &[&[&str]] = &[
    &["ai", "artificial intelligence", "machine learning"],
    &["software", "developer", "engineer", "development"],
    &["data", "analyst", "scientist", "analytics"],
];

/// Named regions and the location substrings they cover. A regional filter
/// also accepts remote-friendly postings. This is a fixed equivalence table,
/// not a geographic computation.
const LOCATION_ALIASES: &[(&str, &[&str])] = &[
    ("kenya", &["nairobi", "kenya"]),
    ("africa", &["nairobi", "kenya", "africa"]),
];

pub fn filter_postings(catalog: &[JobPosting], criteria: &SearchCriteria) -> Vec<JobPosting> {
    let matches: Vec<JobPosting> = catalog
        .iter()
        .filter(|p| {
            keyword_matches(p, &criteria.keywords)
                && location_matches(p, &criteria.location)
                && experience_matches(p, criteria.experience_level)
                && job_type_matches(p, criteria)
                && visa_matches(p, criteria.visa)
        })
        .cloned()
        .collect();

    debug!(
        "Filtered {} postings down to {} matches",
        catalog.len(),
        matches.len()
    );
    matches
}

fn keyword_matches(posting: &JobPosting, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {} {} {}",
        posting.title,
        posting.description,
        posting.required_skills.join(" "),
        posting.company
    )
    .to_lowercase();

    keywords.iter().any(|keyword| {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return false;
        }
        if haystack.contains(&keyword) {
            return true;
        }
        synonyms_for(&keyword)
            .iter()
            .any(|synonym| haystack.contains(synonym))
    })
}

fn synonyms_for(keyword: &str) -> Vec<&'static str> {
    SYNONYM_GROUPS
        .iter()
        .filter(|group| group.contains(&keyword))
        .flat_map(|group| group.iter().copied())
        .filter(|term| *term != keyword)
        .collect()
}

fn location_matches(posting: &JobPosting, wanted: &str) -> bool {
    let wanted = wanted.trim().to_lowercase();
    if wanted.is_empty() || wanted == "any" {
        return true;
    }

    let location = posting.location.to_lowercase();
    match wanted.as_str() {
        "remote" => posting.remote_friendly,
        "on-site" | "onsite" => !posting.remote_friendly,
        "hybrid" => location.contains("hybrid") || posting.remote_friendly,
        _ => {
            if location.contains(&wanted) {
                return true;
            }
            for (region, aliases) in LOCATION_ALIASES {
                if wanted.contains(region) {
                    return posting.remote_friendly
                        || aliases.iter().any(|alias| location.contains(alias));
                }
            }
            false
        }
    }
}

fn experience_matches(posting: &JobPosting, wanted: Option<ExperienceLevel>) -> bool {
    match wanted {
        None => true,
        // A Mid search also surfaces Entry roles; the reverse does not hold,
        // and Senior stays strict. Long-standing catalog behavior, kept
        // as-is (see tests).
        Some(ExperienceLevel::Mid) => matches!(
            posting.experience_level,
            ExperienceLevel::Mid | ExperienceLevel::Entry
        ),
        Some(level) => posting.experience_level == level,
    }
}

fn job_type_matches(posting: &JobPosting, criteria: &SearchCriteria) -> bool {
    match criteria.job_type {
        None => true,
        Some(job_type) => posting.job_type == job_type,
    }
}

fn visa_matches(posting: &JobPosting, wanted: VisaRequirement) -> bool {
    match wanted {
        VisaRequirement::Any => true,
        VisaRequirement::Required => posting.visa_sponsorship,
        VisaRequirement::NotRequired => !posting.visa_sponsorship,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JobType;

    fn base_posting() -> JobPosting {
        JobPosting {
            title: "AI Research Engineer".to_string(),
            company: "Meta".to_string(),
            location: "Menlo Park, CA".to_string(),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Entry,
            salary: "$150,000".to_string(),
            description: "Research role on vision and language models".to_string(),
            required_skills: vec!["Python".to_string(), "PyTorch".to_string()],
            posted_relative: "3 days ago".to_string(),
            apply_url: "https://example.com/apply".to_string(),
            remote_friendly: true,
            visa_sponsorship: true,
        }
    }

    fn criteria_with_keywords(keywords: &[&str]) -> SearchCriteria {
        SearchCriteria {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            ..SearchCriteria::default()
        }
    }

    #[test]
    fn keywords_are_a_union_not_an_intersection() {
        let catalog = vec![base_posting()];
        // Only "ai" hits; "blockchain" matching nothing must not exclude it.
        let results = filter_postings(&catalog, &criteria_with_keywords(&["blockchain", "ai"]));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn unmatched_keyword_yields_empty_result() {
        let catalog = vec![base_posting()];
        let results = filter_postings(&catalog, &criteria_with_keywords(&["blockchain"]));
        assert!(results.is_empty());
    }

    #[test]
    fn synonym_table_bridges_ai_and_machine_learning() {
        let mut posting = base_posting();
        posting.title = "Research Scientist".to_string();
        posting.description = "Deep learning role".to_string();
        posting.required_skills = vec!["Machine Learning".to_string()];

        let results = filter_postings(&[posting], &criteria_with_keywords(&["ai"]));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn any_location_passes_everything() {
        let catalog = vec![base_posting()];
        let criteria = SearchCriteria {
            location: "any".to_string(),
            ..SearchCriteria::default()
        };
        assert_eq!(filter_postings(&catalog, &criteria).len(), catalog.len());
    }

    #[test]
    fn remote_filter_requires_remote_friendly() {
        let mut on_site = base_posting();
        on_site.remote_friendly = false;
        let catalog = vec![base_posting(), on_site];

        let criteria = SearchCriteria {
            location: "remote".to_string(),
            ..SearchCriteria::default()
        };
        let results = filter_postings(&catalog, &criteria);
        assert_eq!(results.len(), 1);
        assert!(results[0].remote_friendly);
    }

    #[test]
    fn hybrid_filter_accepts_hybrid_locations_and_remote() {
        let mut hybrid = base_posting();
        hybrid.location = "Redmond, WA (Hybrid)".to_string();
        hybrid.remote_friendly = false;

        let mut strict = base_posting();
        strict.location = "Redmond, WA".to_string();
        strict.remote_friendly = false;

        let criteria = SearchCriteria {
            location: "hybrid".to_string(),
            ..SearchCriteria::default()
        };
        let results = filter_postings(&[hybrid, strict], &criteria);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn kenya_filter_covers_nairobi_and_remote_postings() {
        let mut nairobi = base_posting();
        nairobi.location = "Nairobi, Kenya".to_string();
        nairobi.remote_friendly = false;

        let mut remote = base_posting();
        remote.location = "San Francisco, CA".to_string();
        remote.remote_friendly = true;

        let mut elsewhere = base_posting();
        elsewhere.location = "Berlin, Germany".to_string();
        elsewhere.remote_friendly = false;

        let criteria = SearchCriteria {
            location: "Kenya".to_string(),
            ..SearchCriteria::default()
        };
        assert_eq!(filter_postings(&[nairobi, remote, elsewhere], &criteria).len(), 2);
    }

    #[test]
    fn mid_search_also_surfaces_entry_roles() {
        // Documented quirk: Mid accepts Entry, but Senior does not accept Mid.
        let mut entry = base_posting();
        entry.experience_level = ExperienceLevel::Entry;
        let mut mid = base_posting();
        mid.experience_level = ExperienceLevel::Mid;
        let mut senior = base_posting();
        senior.experience_level = ExperienceLevel::Senior;
        let catalog = vec![entry, mid.clone(), senior];

        let criteria = SearchCriteria {
            experience_level: Some(ExperienceLevel::Mid),
            ..SearchCriteria::default()
        };
        assert_eq!(filter_postings(&catalog, &criteria).len(), 2);

        let criteria = SearchCriteria {
            experience_level: Some(ExperienceLevel::Senior),
            ..SearchCriteria::default()
        };
        assert_eq!(filter_postings(&catalog, &criteria).len(), 1);
    }

    #[test]
    fn visa_requirement_matches_exactly_with_any_wildcard() {
        let mut sponsored = base_posting();
        sponsored.visa_sponsorship = true;
        let mut unsponsored = base_posting();
        unsponsored.visa_sponsorship = false;
        let catalog = vec![sponsored, unsponsored];

        let all = filter_postings(&catalog, &SearchCriteria::default());
        assert_eq!(all.len(), 2);

        let criteria = SearchCriteria {
            visa: VisaRequirement::Required,
            ..SearchCriteria::default()
        };
        assert_eq!(filter_postings(&catalog, &criteria).len(), 1);

        let criteria = SearchCriteria {
            visa: VisaRequirement::NotRequired,
            ..SearchCriteria::default()
        };
        assert_eq!(filter_postings(&catalog, &criteria).len(), 1);
    }

    #[test]
    fn job_type_matches_exactly() {
        let mut internship = base_posting();
        internship.job_type = JobType::Internship;
        let catalog = vec![base_posting(), internship];

        let criteria = SearchCriteria {
            job_type: Some(JobType::Internship),
            ..SearchCriteria::default()
        };
        let results = filter_postings(&catalog, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].job_type, JobType::Internship);
    }

    #[test]
    fn remote_ai_search_finds_the_meta_posting() {
        let catalog = vec![base_posting()];
        let criteria = SearchCriteria {
            keywords: vec!["ai".to_string()],
            location: "remote".to_string(),
            ..SearchCriteria::default()
        };
        let results = filter_postings(&catalog, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].company, "Meta");
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(filter_postings(&[], &SearchCriteria::default()).is_empty());
    }
}
