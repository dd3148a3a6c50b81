// src/matching/ranker.rs
//! Orders postings newest-first from their human-readable ages.
//!
//! The parse is a lossy display heuristic, not a scheduling guarantee: the
//! first integer in the string is the magnitude, the unit comes from a
//! substring check, and anything unrecognized counts as 30 days old.

use chrono::{DateTime, Duration, Utc};

use crate::types::JobPosting;

const FALLBACK_AGE_DAYS: i64 = 30;

/// Age of a posting from its `posted_relative` text, e.g. "3 days ago".
pub fn parse_posted_age(text: &str) -> Duration {
    let lower = text.to_lowercase();

    let digits: String = lower
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let magnitude: i64 = digits.parse().unwrap_or(1);

    // Absurd magnitudes overflow the duration arithmetic; treat them like
    // any other unparsable age.
    let age = if lower.contains("hour") {
        Duration::try_hours(magnitude)
    } else if lower.contains("day") {
        Duration::try_days(magnitude)
    } else if lower.contains("week") {
        Duration::try_weeks(magnitude)
    } else {
        None
    };

    age.unwrap_or_else(|| Duration::days(FALLBACK_AGE_DAYS))
}

/// Absolute timestamp derived from the posting age. Not stored on the
/// posting; recomputed against the caller's `now`.
pub fn posted_absolute(posting: &JobPosting, now: DateTime<Utc>) -> DateTime<Utc> {
    now - parse_posted_age(&posting.posted_relative)
}

/// Stable sort, newest first. Ties keep their catalog order.
pub fn rank_by_recency(mut postings: Vec<JobPosting>) -> Vec<JobPosting> {
    let now = Utc::now();
    postings.sort_by_key(|p| std::cmp::Reverse(posted_absolute(p, now)));
    postings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExperienceLevel, JobType};

    fn posting(title: &str, posted_relative: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Entry,
            salary: String::new(),
            description: String::new(),
            required_skills: vec!["Rust".to_string()],
            posted_relative: posted_relative.to_string(),
            apply_url: "https://example.com".to_string(),
            remote_friendly: true,
            visa_sponsorship: false,
        }
    }

    #[test]
    fn parses_common_age_phrasings() {
        assert_eq!(parse_posted_age("12 hours ago"), Duration::hours(12));
        assert_eq!(parse_posted_age("3 days ago"), Duration::days(3));
        assert_eq!(parse_posted_age("2 weeks ago"), Duration::weeks(2));
        assert_eq!(parse_posted_age("Posted 5 days ago"), Duration::days(5));
    }

    #[test]
    fn unrecognized_unit_falls_back_to_thirty_days() {
        assert_eq!(parse_posted_age("recently posted"), Duration::days(30));
        assert_eq!(parse_posted_age("2 months ago"), Duration::days(30));
    }

    #[test]
    fn missing_magnitude_defaults_to_one() {
        assert_eq!(parse_posted_age("a day ago"), Duration::days(1));
    }

    #[test]
    fn overflowing_magnitude_falls_back_instead_of_panicking() {
        assert_eq!(
            parse_posted_age("9000000000000000000 hours ago"),
            Duration::days(30)
        );
        let ranked = rank_by_recency(vec![
            posting("sane", "3 days ago"),
            posting("wild", "9000000000000000000 weeks ago"),
        ]);
        assert_eq!(ranked[0].title, "sane");
    }

    #[test]
    fn newer_postings_rank_ahead_of_older_ones() {
        let ranked = rank_by_recency(vec![
            posting("older", "1 week ago"),
            posting("newer", "3 days ago"),
        ]);
        assert_eq!(ranked[0].title, "newer");
        assert_eq!(ranked[1].title, "older");
    }

    #[test]
    fn derived_absolute_timestamps_order_as_expected() {
        let now = Utc::now();
        let three_days = posting("a", "3 days ago");
        let one_week = posting("b", "1 week ago");

        assert!(posted_absolute(&one_week, now) < posted_absolute(&three_days, now));
    }

    #[test]
    fn ties_keep_their_input_order() {
        let ranked = rank_by_recency(vec![
            posting("first", "2 days ago"),
            posting("second", "48 hours ago"),
            posting("third", "2 days ago"),
        ]);
        // "48 hours" and "2 days" parse to the same age; catalog order wins.
        let titles: Vec<&str> = ranked.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }
}
