use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::models::{JobListing, JobListingPatch, NewJobListing};

use super::{ApiError, ApiResponse, AppState, validation};

pub async fn list_jobs(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<JobListing>>> {
    Json(ApiResponse::success(state.store().job_listings().await))
}

pub async fn add_job(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewJobListing>,
) -> Result<Json<ApiResponse<JobListing>>, ApiError> {
    validation::validate_required("title", &payload.title)?;

    let job = state.store().add_job_listing(payload).await?;
    Ok(Json(ApiResponse::success(job)))
}

pub async fn update_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<JobListingPatch>,
) -> Result<Json<ApiResponse<JobListing>>, ApiError> {
    let job = state.store().update_job_listing(&id, patch).await?;
    Ok(Json(ApiResponse::success(job)))
}

pub async fn remove_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.store().delete_job_listing(&id).await?;
    Ok(Json(ApiResponse::success(())))
}
