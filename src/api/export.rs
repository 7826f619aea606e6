use axum::{
    Json,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::models::JobPosting;
use crate::services::export;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub postings: Vec<JobPosting>,
}

/// `POST /api/export/csv`
///
/// Renders the flattened job/company/contact sheet as a CSV download,
/// one row per posting.
pub async fn export_csv(Json(request): Json<ExportRequest>) -> Response {
    let csv = export::postings_to_csv(&request.postings);
    let disposition = format!("attachment; filename=\"{}\"", export::export_filename());

    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response()
}
