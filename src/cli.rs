// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::types::{ExperienceLevel, JobType, SearchCriteria, VisaRequirement};
use crate::{start_web_server, OpportunityEngine};

#[derive(Parser)]
#[command(name = "oppwatch")]
#[command(about = "Opportunity matching and aggregation backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Run a one-off search against the posting catalog
    Search {
        /// Keyword to match (repeatable); postings matching any keyword pass
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        #[arg(long, default_value = "any")]
        location: String,
        /// student, entry, mid or senior
        #[arg(long)]
        experience: Option<String>,
        /// full-time, internship, contract or part-time
        #[arg(long)]
        job_type: Option<String>,
        /// any, required or not-required
        #[arg(long, default_value = "any")]
        visa: String,
    },
    /// Compose an application package for a company and position
    Package {
        #[arg(long)]
        username: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        position: String,
    },
}

fn parse_experience(raw: &str) -> Option<ExperienceLevel> {
    match raw.to_lowercase().as_str() {
        "student" => Some(ExperienceLevel::Student),
        "entry" => Some(ExperienceLevel::Entry),
        "mid" => Some(ExperienceLevel::Mid),
        "senior" => Some(ExperienceLevel::Senior),
        _ => None,
    }
}

fn parse_job_type(raw: &str) -> Option<JobType> {
    match raw.to_lowercase().as_str() {
        "full-time" | "fulltime" => Some(JobType::FullTime),
        "internship" => Some(JobType::Internship),
        "contract" => Some(JobType::Contract),
        "part-time" | "parttime" => Some(JobType::PartTime),
        _ => None,
    }
}

fn parse_visa(raw: &str) -> VisaRequirement {
    match raw.to_lowercase().as_str() {
        "required" => VisaRequirement::Required,
        "not-required" | "notrequired" => VisaRequirement::NotRequired,
        _ => VisaRequirement::Any,
    }
}

pub async fn handle_command(cli: Cli, engine: OpportunityEngine) -> Result<()> {
    match cli.command {
        Command::Serve { port } => start_web_server(engine, port).await,

        Command::Search {
            keywords,
            location,
            experience,
            job_type,
            visa,
        } => {
            let criteria = SearchCriteria {
                keywords,
                location,
                experience_level: experience.as_deref().and_then(parse_experience),
                job_type: job_type.as_deref().and_then(parse_job_type),
                visa: parse_visa(&visa),
            };

            let results = engine.search(&criteria).await?;
            if results.is_empty() {
                println!("No postings matched. Try broader keywords or location 'any'.");
                return Ok(());
            }

            println!("{} matching postings (newest first):\n", results.len());
            for posting in results {
                println!(
                    "  {} @ {} [{}] - posted {}",
                    posting.title, posting.company, posting.location, posting.posted_relative
                );
                println!("    skills: {}", posting.required_skills.join(", "));
                println!("    apply:  {}\n", posting.apply_url);
            }
            Ok(())
        }

        Command::Package {
            username,
            company,
            position,
        } => {
            let package = engine
                .application_package(&username, &company, &position)
                .await?;

            println!("=== Cover letter ===\n\n{}\n", package.cover_letter);
            println!("=== Technical summary ===\n\n{}", package.technical_summary);
            Ok(())
        }
    }
}
