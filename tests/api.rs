//! Endpoint-level tests
//!
//! Exercise the handlers against fixture state, the same way the router wires
//! them up in production.

mod helpers;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use nrtr_server::types::{LoginRequest, OpportunityListParams, ResourceListParams};
use nrtr_server::web::handlers::api;
use nrtr_server::{ApiServer, AppState, Datasets, ServerConfig, ServerError};

use fixtures::{sample_opportunities, sample_resources};
use helpers::state_with;

fn test_state() -> std::sync::Arc<AppState> {
    state_with(sample_resources(), sample_opportunities())
}

#[tokio::test]
async fn health_reports_dataset_counts() {
    let Json(response) = api::health(State(test_state())).await;

    assert_eq!(response.status, "ok");
    assert_eq!(response.resources, 3);
    assert_eq!(response.opportunities, 3);
}

#[tokio::test]
async fn list_resources_without_params_returns_everything_in_order() {
    let Json(response) =
        api::list_resources(State(test_state()), Query(ResourceListParams::default())).await;

    assert_eq!(response.count, 3);
    let ids: Vec<&str> = response.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r1", "r2", "r3"]);
}

#[tokio::test]
async fn list_resources_applies_case_insensitive_exact_filters() {
    let params = ResourceListParams {
        county: Some("lake".to_string()),
        resource_type: Some("food".to_string()),
        ..Default::default()
    };

    let Json(response) = api::list_resources(State(test_state()), Query(params)).await;

    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].id, "r1");
}

#[tokio::test]
async fn list_resources_empty_filter_behaves_like_absent() {
    let params = ResourceListParams {
        county: Some(String::new()),
        ..Default::default()
    };

    let Json(response) = api::list_resources(State(test_state()), Query(params)).await;

    assert_eq!(response.count, 3);
}

#[tokio::test]
async fn list_resources_free_text_search_hits_designated_fields() {
    let params = ResourceListParams {
        q: Some("shelter".to_string()),
        ..Default::default()
    };

    let Json(response) = api::list_resources(State(test_state()), Query(params)).await;

    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].id, "r2");
}

#[tokio::test]
async fn list_resources_limit_caps_results() {
    let params = ResourceListParams {
        limit: Some("2".to_string()),
        ..Default::default()
    };

    let Json(response) = api::list_resources(State(test_state()), Query(params)).await;

    assert_eq!(response.count, 2);
    assert_eq!(response.results[0].id, "r1");
    assert_eq!(response.results[1].id, "r2");
}

#[tokio::test]
async fn list_resources_limit_zero_returns_nothing() {
    let params = ResourceListParams {
        limit: Some("0".to_string()),
        ..Default::default()
    };

    let Json(response) = api::list_resources(State(test_state()), Query(params)).await;

    assert_eq!(response.count, 0);
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn list_resources_malformed_limit_means_no_limit() {
    let params = ResourceListParams {
        limit: Some("lots".to_string()),
        ..Default::default()
    };

    let Json(response) = api::list_resources(State(test_state()), Query(params)).await;

    assert_eq!(response.count, 3);
}

#[tokio::test]
async fn get_resource_returns_the_record() {
    let Json(resource) = api::get_resource(State(test_state()), Path("r2".to_string()))
        .await
        .unwrap();

    assert_eq!(resource.id, "r2");
    assert_eq!(resource.name.as_deref(), Some("Harbor House"));
}

#[tokio::test]
async fn get_resource_misses_with_exact_error_body() {
    let err = api::get_resource(State(test_state()), Path("zzz".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, ServerError::ResourceNotFound { .. }));

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "error": "Resource not found" }));
}

#[tokio::test]
async fn list_opportunities_filters_by_category() {
    let params = OpportunityListParams {
        category: Some("stem".to_string()),
        ..Default::default()
    };

    let Json(response) = api::list_opportunities(State(test_state()), Query(params)).await;

    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].id, "o1");
}

#[tokio::test]
async fn get_opportunity_misses_with_exact_error_body() {
    let err = api::get_opportunity(State(test_state()), Path("zzz".to_string()))
        .await
        .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "error": "Opportunity not found" }));
}

#[tokio::test]
async fn counties_come_back_sorted_and_deduplicated() {
    let Json(response) = api::list_counties(State(test_state())).await;

    assert_eq!(response.counties, ["Cook", "Lake"]);
}

#[tokio::test]
async fn stats_tallies_both_datasets() {
    let Json(response) = api::stats(State(test_state())).await;

    assert_eq!(response.resources_by_county["Lake"], 2);
    assert_eq!(response.resources_by_county["Cook"], 1);
    assert_eq!(response.resources_by_type["Food"], 2);
    assert_eq!(response.resources_by_type["Shelter"], 1);
    assert_eq!(response.opportunities_by_county["Lake"], 2);
    assert_eq!(response.opportunities_by_category["STEM"], 1);
}

#[tokio::test]
async fn login_accepts_the_demo_account() {
    let request = LoginRequest {
        email: Some("demo@nrtr.org".to_string()),
        password: Some("demo123".to_string()),
    };

    let Json(response) = api::login(Json(request)).await.unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Login successful");
}

#[tokio::test]
async fn login_rejects_bad_credentials_with_exact_error_body() {
    let request = LoginRequest {
        email: Some("demo@nrtr.org".to_string()),
        password: Some("wrong".to_string()),
    };

    let err = api::login(Json(request)).await.unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "success": false, "message": "Invalid credentials" }));
}

#[tokio::test]
async fn login_treats_missing_fields_as_bad_credentials() {
    let err = api::login(Json(LoginRequest::default())).await.unwrap_err();

    assert!(matches!(err, ServerError::InvalidCredentials));
}

#[tokio::test]
async fn list_response_serializes_with_count_and_results() {
    let Json(response) =
        api::list_resources(State(test_state()), Query(ResourceListParams::default())).await;

    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(body["count"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
    assert_eq!(body["results"][0]["id"], "r1");
}

#[tokio::test]
async fn router_builds_with_all_routes() {
    let server = ApiServer::new(AppState {
        config: ServerConfig::default(),
        datasets: Datasets {
            resources: sample_resources(),
            opportunities: sample_opportunities(),
        },
    });

    let _router = server.build_router();
    assert_eq!(server.state().datasets.resources.len(), 3);
}
