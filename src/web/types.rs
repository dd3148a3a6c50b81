// src/web/types.rs
use rocket::serde::{Deserialize, Serialize};

use crate::types::{JobPosting, ScoredPosting};

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

// ===== Request payloads =====

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RecommendationsRequest {
    pub username: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct PackageRequest {
    pub username: String,
    pub company: String,
    pub position: String,
}

// ===== Response data bodies =====

/// Search results plus relaxation hints; the hints are only populated when
/// nothing matched, so the frontend can offer a useful empty state.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SearchData {
    pub postings: Vec<JobPosting>,
    pub total: usize,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RecommendationsData {
    pub recommendations: Vec<ScoredPosting>,
    pub total: usize,
}
