use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::db::ContactWithCompany;
use crate::models::{Contact, ContactPatch, NewContact};

use super::{ApiError, ApiResponse, AppState, validation};

pub async fn list_contacts(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<Contact>>> {
    Json(ApiResponse::success(state.store().contacts().await))
}

pub async fn add_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewContact>,
) -> Result<Json<ApiResponse<Contact>>, ApiError> {
    validation::validate_required("name", &payload.name)?;

    let contact = state.store().add_contact(payload).await?;
    Ok(Json(ApiResponse::success(contact)))
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<ContactPatch>,
) -> Result<Json<ApiResponse<Contact>>, ApiError> {
    let contact = state.store().update_contact(&id, patch).await?;
    Ok(Json(ApiResponse::success(contact)))
}

pub async fn remove_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.store().delete_contact(&id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// Contacts joined with their owning company for display lists.
pub async fn contacts_with_company(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<ContactWithCompany>>> {
    Json(ApiResponse::success(
        state.store().contacts_with_company().await,
    ))
}
