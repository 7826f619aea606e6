use axum::{Json, extract::State};
use std::sync::Arc;

use crate::db::CrmStats;

use super::{ApiResponse, AppState, SystemStatus};

/// `GET /api/system/status`
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<SystemStatus>> {
    let stats = state.store().stats().await;
    let scraper_enabled = state.shared.config().await.scraper.enabled;

    let status = SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        total_companies: stats.total_companies,
        total_contacts: stats.total_contacts,
        total_jobs: stats.total_jobs,
        total_leads: stats.total_leads,
        scraper_enabled,
    };

    Json(ApiResponse::success(status))
}

/// `GET /api/stats`
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<CrmStats>> {
    Json(ApiResponse::success(state.store().stats().await))
}
