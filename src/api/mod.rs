use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod companies;
mod contacts;
mod error;
mod export;
mod import;
mod jobs;
mod leads;
mod observability;
mod search;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn search_service(&self) -> &Arc<crate::services::SearchService> {
        &self.shared.search_service
    }

    #[must_use]
    pub fn import_service(&self) -> &Arc<crate::services::ImportService> {
        &self.shared.import_service
    }
}

pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = {
        let config = state.shared.config.read().await;
        config.server.cors_allowed_origins.clone()
    };

    let api_router = Router::new()
        .route("/search/platforms", post(search::search_platforms))
        .route("/search/companies", post(search::search_companies))
        .route("/search/history", get(search::get_history))
        .route("/companies", get(companies::list_companies))
        .route("/companies", post(companies::add_company))
        .route("/companies/{id}", get(companies::get_company))
        .route("/companies/{id}", put(companies::update_company))
        .route("/companies/{id}", delete(companies::remove_company))
        .route("/companies/{id}/contacts", get(companies::company_contacts))
        .route("/companies/{id}/jobs", get(companies::company_jobs))
        .route("/companies/{id}/leads", get(companies::company_leads))
        .route("/contacts", get(contacts::list_contacts))
        .route("/contacts", post(contacts::add_contact))
        .route("/contacts/with-company", get(contacts::contacts_with_company))
        .route("/contacts/{id}", put(contacts::update_contact))
        .route("/contacts/{id}", delete(contacts::remove_contact))
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs", post(jobs::add_job))
        .route("/jobs/{id}", put(jobs::update_job))
        .route("/jobs/{id}", delete(jobs::remove_job))
        .route("/leads", get(leads::list_leads))
        .route("/leads", post(leads::add_lead))
        .route("/leads/{id}", put(leads::update_lead))
        .route("/leads/{id}", delete(leads::remove_lead))
        .route("/import", post(import::import_postings))
        .route("/export/csv", post(export::export_csv))
        .route("/stats", get(system::get_stats))
        .route("/system/status", get(system::get_status))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_metrics))
}
