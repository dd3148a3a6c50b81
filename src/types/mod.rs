// src/types/mod.rs
pub mod job;
pub mod profile;

pub use job::{
    ExperienceLevel, JobPosting, JobType, ScoredPosting, SearchCriteria, VisaRequirement,
};
pub use profile::{Profile, Repository};
