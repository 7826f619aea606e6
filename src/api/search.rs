use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use crate::models::SearchRecord;
use crate::services::{CompanySearchOutcome, PlatformSearchOutcome, SearchParams};

use super::{ApiError, ApiResponse, AppState, validation};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSearchRequest {
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(flatten)]
    pub params: SearchParams,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchRequest {
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(flatten)]
    pub params: SearchParams,
}

/// `POST /api/search/platforms`
///
/// One result entry per requested platform; 400 when no platform is
/// named. Top-level success requires every entry to succeed.
pub async fn search_platforms(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlatformSearchRequest>,
) -> Result<Json<PlatformSearchOutcome>, ApiError> {
    validation::validate_platforms(&request.platforms)?;

    let outcome = state
        .search_service()
        .search_platforms(&request.platforms, &request.params)
        .await;

    log_search(&state, &request.params, &request.platforms, outcome.total_jobs).await;

    Ok(Json(outcome))
}

/// `POST /api/search/companies`
///
/// No required fields; an empty body scans the default roster.
pub async fn search_companies(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CompanySearchRequest>,
) -> Result<Json<CompanySearchOutcome>, ApiError> {
    let outcome = state
        .search_service()
        .search_companies(&request.companies, &request.params)
        .await;

    let targets: Vec<String> = outcome
        .results
        .iter()
        .map(|r| r.target.clone())
        .collect();
    log_search(&state, &request.params, &targets, outcome.total_jobs).await;

    Ok(Json(outcome))
}

pub async fn get_history(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<SearchRecord>>> {
    Json(ApiResponse::success(state.store().search_history().await))
}

/// History is advisory; a persistence hiccup must not fail the search.
async fn log_search(
    state: &Arc<AppState>,
    params: &SearchParams,
    targets: &[String],
    results_count: usize,
) {
    let result = state
        .store()
        .record_search(
            params.keywords.as_deref().unwrap_or(""),
            params.location.as_deref().unwrap_or(""),
            targets,
            params.industry.as_deref().unwrap_or(""),
            params.company_size.as_deref().unwrap_or(""),
            results_count,
        )
        .await;

    if let Err(e) = result {
        warn!("Failed to record search history: {e}");
    }
}
