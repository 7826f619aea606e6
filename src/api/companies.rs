use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::info;

use crate::models::{Company, CompanyPatch, Contact, JobListing, Lead, NewCompany};

use super::{ApiError, ApiResponse, AppState, validation};

pub async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<Company>>> {
    Json(ApiResponse::success(state.store().companies().await))
}

pub async fn add_company(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCompany>,
) -> Result<Json<ApiResponse<Company>>, ApiError> {
    validation::validate_required("name", &payload.name)?;

    let company = state.store().add_company(payload).await?;
    info!("Added company {} ({})", company.name, company.id);
    Ok(Json(ApiResponse::success(company)))
}

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Company>>, ApiError> {
    let company = state
        .store()
        .get_company(&id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Company {id} not found")))?;
    Ok(Json(ApiResponse::success(company)))
}

pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<CompanyPatch>,
) -> Result<Json<ApiResponse<Company>>, ApiError> {
    let company = state.store().update_company(&id, patch).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Cascades to the company's contacts, job listings and leads.
pub async fn remove_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.store().delete_company(&id).await?;
    info!("Removed company {id} and its dependent records");
    Ok(Json(ApiResponse::success(())))
}

pub async fn company_contacts(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ApiResponse<Vec<Contact>>> {
    Json(ApiResponse::success(
        state.store().contacts_for_company(&id).await,
    ))
}

pub async fn company_jobs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ApiResponse<Vec<JobListing>>> {
    Json(ApiResponse::success(
        state.store().jobs_for_company(&id).await,
    ))
}

pub async fn company_leads(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ApiResponse<Vec<Lead>>> {
    Json(ApiResponse::success(
        state.store().leads_for_company(&id).await,
    ))
}
