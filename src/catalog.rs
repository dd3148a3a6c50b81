// src/catalog.rs
//! Opportunity catalog provider.
//!
//! `StaticCatalog` is the in-memory stand-in for a live multi-source
//! aggregator; the filter, ranker and scorer only ever see `CatalogSource`,
//! so swapping in a real scraper changes nothing downstream.

use crate::types::{ExperienceLevel, JobPosting, JobType};

pub trait CatalogSource {
    fn postings(&self) -> Vec<JobPosting>;
}

pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for StaticCatalog {
    fn postings(&self) -> Vec<JobPosting> {
        sample_postings()
    }
}

fn posting(
    title: &str,
    company: &str,
    location: &str,
    job_type: JobType,
    experience_level: ExperienceLevel,
    salary: &str,
    description: &str,
    required_skills: &[&str],
    posted_relative: &str,
    apply_url: &str,
    remote_friendly: bool,
    visa_sponsorship: bool,
) -> JobPosting {
    JobPosting {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type,
        experience_level,
        salary: salary.to_string(),
        description: description.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        posted_relative: posted_relative.to_string(),
        apply_url: apply_url.to_string(),
        remote_friendly,
        visa_sponsorship,
    }
}

fn sample_postings() -> Vec<JobPosting> {
    vec![
        posting(
            "AI Research Engineer",
            "Meta",
            "Menlo Park, CA",
            JobType::FullTime,
            ExperienceLevel::Entry,
            "$150,000 - $200,000",
            "Work on large-scale machine learning research with the FAIR team, \
             from model prototyping to production deployment.",
            &["Python", "PyTorch", "Computer Vision", "NLP", "Research"],
            "3 days ago",
            "https://www.metacareers.com/jobs/ai-research-engineer",
            true,
            true,
        ),
        posting(
            "Machine Learning Engineer",
            "Google",
            "Mountain View, CA",
            JobType::FullTime,
            ExperienceLevel::Mid,
            "$160,000 - $220,000",
            "Build and ship ML pipelines powering Search ranking and quality \
             signals at planetary scale.",
            &["Python", "TensorFlow", "Kubernetes", "SQL"],
            "2 weeks ago",
            "https://careers.google.com/jobs/ml-engineer",
            false,
            true,
        ),
        posting(
            "Software Engineer, Early Career",
            "Microsoft",
            "Redmond, WA (Hybrid)",
            JobType::FullTime,
            ExperienceLevel::Entry,
            "$120,000 - $160,000",
            "Join the Azure developer experience group building cloud tooling \
             used by millions of developers.",
            &["C#", ".NET", "Azure", "TypeScript"],
            "1 week ago",
            "https://careers.microsoft.com/jobs/swe-early-career",
            false,
            true,
        ),
        posting(
            "Backend Developer",
            "Safaricom",
            "Nairobi, Kenya",
            JobType::FullTime,
            ExperienceLevel::Mid,
            "KES 250,000 - 400,000",
            "Develop payment and messaging services for the M-Pesa platform.",
            &["Java", "Spring Boot", "PostgreSQL", "Kafka"],
            "5 days ago",
            "https://www.safaricom.co.ke/careers/backend-developer",
            false,
            false,
        ),
        posting(
            "Data Analyst Intern",
            "Andela",
            "Nairobi, Kenya",
            JobType::Internship,
            ExperienceLevel::Student,
            "Stipend",
            "Support the talent analytics team with dashboarding and reporting \
             across placement data.",
            &["SQL", "Python", "Excel", "Analytics"],
            "12 hours ago",
            "https://andela.com/careers/data-analyst-intern",
            true,
            false,
        ),
        posting(
            "Frontend Engineer",
            "Amazon",
            "Seattle, WA",
            JobType::FullTime,
            ExperienceLevel::Mid,
            "$140,000 - $185,000",
            "Own customer-facing storefront features on a high-traffic retail \
             development team.",
            &["JavaScript", "React", "TypeScript", "CSS"],
            "4 days ago",
            "https://www.amazon.jobs/frontend-engineer",
            true,
            true,
        ),
        posting(
            "Computer Vision Engineer",
            "Apple",
            "Cupertino, CA",
            JobType::FullTime,
            ExperienceLevel::Senior,
            "$180,000 - $250,000",
            "Design on-device vision models for camera and spatial computing \
             experiences.",
            &["Python", "OpenCV", "C++", "Metal"],
            "3 weeks ago",
            "https://jobs.apple.com/computer-vision-engineer",
            false,
            true,
        ),
        posting(
            "NLP Research Intern",
            "OpenAI",
            "Remote",
            JobType::Internship,
            ExperienceLevel::Student,
            "$9,000 / month",
            "Contribute to applied natural language processing research on \
             summarization and evaluation.",
            &["Python", "PyTorch", "Transformers"],
            "1 day ago",
            "https://openai.com/careers/nlp-research-intern",
            true,
            false,
        ),
        posting(
            "DevOps Engineer",
            "Twiga Foods",
            "Nairobi, Kenya (Hybrid)",
            JobType::Contract,
            ExperienceLevel::Mid,
            "KES 300,000 - 450,000",
            "Run the cloud infrastructure behind a fast-growing agritech \
             logistics network.",
            &["Docker", "Kubernetes", "Terraform", "AWS"],
            "6 days ago",
            "https://twiga.com/careers/devops-engineer",
            false,
            false,
        ),
        posting(
            "Web Developer (Part-Time)",
            "Turing",
            "Remote",
            JobType::PartTime,
            ExperienceLevel::Entry,
            "$40 - $60 / hour",
            "Maintain and extend client web applications on flexible hours.",
            &["HTML", "CSS", "JavaScript", "Django"],
            "recently posted",
            "https://www.turing.com/jobs/web-developer",
            true,
            false,
        ),
    ]
}
