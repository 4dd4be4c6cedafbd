//! REST API handlers
//!
//! One handler per endpoint. Handlers only translate between HTTP and the
//! pure query functions; every dataset access goes through the injected
//! read-only [`AppState`].

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::debug;

use crate::auth;
use crate::error::{ServerError, ServerResult};
use crate::query;
use crate::store::AppState;
use crate::types::{
    CountiesResponse, HealthResponse, ListResponse, LoginRequest, LoginResponse, Opportunity,
    OpportunityField, OpportunityListParams, Resource, ResourceField, ResourceListParams,
    StatsResponse,
};

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        resources: state.datasets.resources.len(),
        opportunities: state.datasets.opportunities.len(),
    })
}

/// GET /api/resources
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResourceListParams>,
) -> Json<ListResponse<Resource>> {
    let exact = [
        (ResourceField::County, params.county.as_deref()),
        (ResourceField::Type, params.resource_type.as_deref()),
    ];

    let filtered = query::apply_filters(
        &state.datasets.resources,
        &exact,
        params.q.as_deref(),
        Resource::SEARCH_FIELDS,
    );
    let results: Vec<Resource> = query::truncate(filtered, query::parse_limit(params.limit.as_deref()))
        .into_iter()
        .cloned()
        .collect();

    Json(ListResponse {
        count: results.len(),
        results,
    })
}

/// GET /api/resources/:id
pub async fn get_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<Resource>> {
    query::find_by_id(&state.datasets.resources, &id)
        .cloned()
        .map(Json)
        .ok_or(ServerError::ResourceNotFound { id })
}

/// GET /api/opportunities
pub async fn list_opportunities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OpportunityListParams>,
) -> Json<ListResponse<Opportunity>> {
    let exact = [
        (OpportunityField::County, params.county.as_deref()),
        (OpportunityField::Category, params.category.as_deref()),
    ];

    let filtered = query::apply_filters(
        &state.datasets.opportunities,
        &exact,
        params.q.as_deref(),
        Opportunity::SEARCH_FIELDS,
    );
    let results: Vec<Opportunity> = query::truncate(filtered, query::parse_limit(params.limit.as_deref()))
        .into_iter()
        .cloned()
        .collect();

    Json(ListResponse {
        count: results.len(),
        results,
    })
}

/// GET /api/opportunities/:id
pub async fn get_opportunity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<Opportunity>> {
    query::find_by_id(&state.datasets.opportunities, &id)
        .cloned()
        .map(Json)
        .ok_or(ServerError::OpportunityNotFound { id })
}

/// GET /api/meta/counties — distinct counties across the resource dataset.
pub async fn list_counties(State(state): State<Arc<AppState>>) -> Json<CountiesResponse> {
    let counties = query::sorted_distinct(
        state
            .datasets
            .resources
            .iter()
            .map(|resource| resource.county.as_deref()),
    );

    Json(CountiesResponse { counties })
}

/// GET /api/meta/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let resources = &state.datasets.resources;
    let opportunities = &state.datasets.opportunities;

    Json(StatsResponse {
        resources_by_county: query::tally(resources.iter().map(|r| r.county.as_deref())),
        resources_by_type: query::tally(resources.iter().map(|r| r.resource_type.as_deref())),
        opportunities_by_county: query::tally(opportunities.iter().map(|o| o.county.as_deref())),
        opportunities_by_category: query::tally(opportunities.iter().map(|o| o.category.as_deref())),
    })
}

/// POST /api/login
pub async fn login(Json(request): Json<LoginRequest>) -> ServerResult<Json<LoginResponse>> {
    let email = request.email.as_deref().unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();

    if auth::verify_credentials(email, password) {
        Ok(Json(LoginResponse {
            success: true,
            message: "Login successful",
        }))
    } else {
        debug!(email, "Login rejected");
        Err(ServerError::InvalidCredentials)
    }
}
