// src/web/handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use super::types::{
    DataResponse, PackageRequest, RecommendationsData, RecommendationsRequest, SearchData,
    StandardErrorResponse, TextResponse,
};
use crate::assembler::ApplicationPackage;
use crate::types::{Profile, Repository, SearchCriteria};
use crate::OpportunityEngine;

const NOT_FOUND: &str = "NOT_FOUND";
const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";

fn upstream_error(err: anyhow::Error) -> Json<StandardErrorResponse> {
    error!("Upstream request failed: {:#}", err);
    Json(StandardErrorResponse::new(
        "GitHub is unreachable right now".to_string(),
        UPSTREAM_ERROR.to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

fn unknown_user(username: &str) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        format!("GitHub user '{}' was not found", username),
        NOT_FOUND.to_string(),
        vec!["Check the username spelling".to_string()],
    ))
}

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success("Opportunity engine is up".to_string()))
}

pub async fn profile_handler(
    username: &str,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<Profile>>, Json<StandardErrorResponse>> {
    match engine.profile(username).await {
        Ok(Some(profile)) => Ok(Json(DataResponse::success(
            format!("Profile for {}", username),
            profile,
        ))),
        Ok(None) => Err(unknown_user(username)),
        Err(e) => Err(upstream_error(e)),
    }
}

pub async fn repositories_handler(
    username: &str,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<Vec<Repository>>>, Json<StandardErrorResponse>> {
    match engine.repositories(username).await {
        Ok(Some(repos)) => Ok(Json(DataResponse::success(
            format!("{} repositories for {}", repos.len(), username),
            repos,
        ))),
        Ok(None) => Err(unknown_user(username)),
        Err(e) => Err(upstream_error(e)),
    }
}

pub async fn search_jobs_handler(
    criteria: Json<SearchCriteria>,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<SearchData>>, Json<StandardErrorResponse>> {
    let criteria = criteria.into_inner();
    let postings = engine.search(&criteria).await.map_err(upstream_error)?;
    info!(
        "Job search with {} keywords returned {} postings",
        criteria.keywords.len(),
        postings.len()
    );

    // An empty result is a valid state, not an error; hand the frontend
    // something actionable to show.
    let (message, suggestions) = if postings.is_empty() {
        (
            "No postings matched your criteria".to_string(),
            vec![
                "Try broader keywords".to_string(),
                "Set location to \"any\"".to_string(),
                "Clear the experience level filter".to_string(),
            ],
        )
    } else {
        (format!("Found {} matching postings", postings.len()), vec![])
    };

    let total = postings.len();
    Ok(Json(DataResponse::success(
        message,
        SearchData {
            postings,
            total,
            suggestions,
        },
    )))
}

pub async fn recommendations_handler(
    request: Json<RecommendationsRequest>,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<RecommendationsData>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();

    match engine
        .recommendations(&request.username, &request.skills)
        .await
    {
        Ok(recommendations) => {
            let total = recommendations.len();
            Ok(Json(DataResponse::success(
                format!("Scored {} postings for {}", total, request.username),
                RecommendationsData {
                    recommendations,
                    total,
                },
            )))
        }
        Err(e) => Err(upstream_error(e)),
    }
}

pub async fn application_package_handler(
    request: Json<PackageRequest>,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<ApplicationPackage>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();

    match engine
        .application_package(&request.username, &request.company, &request.position)
        .await
    {
        Ok(package) => Ok(Json(DataResponse::success(
            format!(
                "Application package for {} at {}",
                request.position, request.company
            ),
            package,
        ))),
        Err(e) => Err(upstream_error(e)),
    }
}
