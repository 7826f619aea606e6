use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::models::{Lead, LeadPatch, NewLead};

use super::{ApiError, ApiResponse, AppState};

pub async fn list_leads(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<Lead>>> {
    Json(ApiResponse::success(state.store().leads().await))
}

pub async fn add_lead(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewLead>,
) -> Result<Json<ApiResponse<Lead>>, ApiError> {
    let lead = state.store().add_lead(payload).await?;
    Ok(Json(ApiResponse::success(lead)))
}

pub async fn update_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<LeadPatch>,
) -> Result<Json<ApiResponse<Lead>>, ApiError> {
    let lead = state.store().update_lead(&id, patch).await?;
    Ok(Json(ApiResponse::success(lead)))
}

pub async fn remove_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.store().delete_lead(&id).await?;
    Ok(Json(ApiResponse::success(())))
}
