use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;

use crate::models::JobPosting;
use crate::services::ImportSummary;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    #[serde(default)]
    pub postings: Vec<JobPosting>,
}

/// `POST /api/import`
///
/// Folds a confirmed search result set into the CRM and reports
/// per-entity counts.
pub async fn import_postings(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<ApiResponse<ImportSummary>>, ApiError> {
    let summary = state
        .import_service()
        .import_postings(request.postings)
        .await?;
    Ok(Json(ApiResponse::success(summary)))
}
