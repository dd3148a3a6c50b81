// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

use crate::assembler::ApplicationPackage;
use crate::types::{Profile, Repository, SearchCriteria};
use crate::OpportunityEngine;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[get("/profile/<username>")]
pub async fn get_profile(
    username: &str,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<Profile>>, Json<StandardErrorResponse>> {
    handlers::profile_handler(username, engine).await
}

#[get("/repositories/<username>")]
pub async fn get_repositories(
    username: &str,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<Vec<Repository>>>, Json<StandardErrorResponse>> {
    handlers::repositories_handler(username, engine).await
}

#[post("/jobs/search", data = "<criteria>")]
pub async fn search_jobs(
    criteria: Json<SearchCriteria>,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<SearchData>>, Json<StandardErrorResponse>> {
    handlers::search_jobs_handler(criteria, engine).await
}

#[post("/jobs/recommendations", data = "<request>")]
pub async fn recommend_jobs(
    request: Json<RecommendationsRequest>,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<RecommendationsData>>, Json<StandardErrorResponse>> {
    handlers::recommendations_handler(request, engine).await
}

#[post("/application-package", data = "<request>")]
pub async fn application_package(
    request: Json<PackageRequest>,
    engine: &State<OpportunityEngine>,
) -> Result<Json<DataResponse<ApplicationPackage>>, Json<StandardErrorResponse>> {
    handlers::application_package_handler(request, engine).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be parsed".to_string(),
        "UNPROCESSABLE".to_string(),
        vec!["Check field names and enum values".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

fn mount_api(rocket: Rocket<Build>, engine: OpportunityEngine) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(engine)
        .register("/api", catchers![bad_request, unprocessable, internal_error])
        .mount(
            "/api",
            routes![
                health,
                get_profile,
                get_repositories,
                search_jobs,
                recommend_jobs,
                application_package,
                options,
            ],
        )
}

pub fn build_rocket(engine: OpportunityEngine) -> Rocket<Build> {
    mount_api(rocket::build(), engine)
}

/// Start the API server on the given port.
pub async fn start_web_server(engine: OpportunityEngine, port: u16) -> Result<()> {
    info!("Starting opportunity engine API server on port {}", port);

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    let _rocket = mount_api(rocket::custom(figment), engine).launch().await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineConfig;
    use rocket::http::ContentType;
    use rocket::local::blocking::Client;

    fn client() -> Client {
        let config = EngineConfig {
            github_api_url: "http://127.0.0.1:0".to_string(),
            declared_skills: vec!["Python".to_string()],
            ..EngineConfig::default()
        };
        let engine = OpportunityEngine::new(&config).unwrap();
        Client::tracked(build_rocket(engine)).unwrap()
    }

    #[test]
    fn health_endpoint_responds() {
        let client = client();
        let response = client.get("/api/health").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert!(response.into_string().unwrap().contains("up"));
    }

    #[test]
    fn search_with_empty_criteria_returns_the_whole_catalog() {
        let client = client();
        let response = client
            .post("/api/jobs/search")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body: serde_json::Value =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["success"], true);
        assert!(body["data"]["total"].as_u64().unwrap() >= 8);
    }

    #[test]
    fn unmatched_search_includes_relaxation_suggestions() {
        let client = client();
        let response = client
            .post("/api/jobs/search")
            .header(ContentType::JSON)
            .body(r#"{"keywords": ["blockchain"]}"#)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body: serde_json::Value =
            serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["data"]["total"], 0);
        assert!(!body["data"]["suggestions"].as_array().unwrap().is_empty());
    }
}
