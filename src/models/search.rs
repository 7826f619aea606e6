use serde::{Deserialize, Serialize};

/// One entry in the capped search-history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: String,
    pub query: String,
    pub location: String,
    /// Comma-joined target list, platform or company names.
    pub platforms: String,
    pub industries: String,
    pub company_sizes: String,
    pub results_count: usize,
    pub created_at: String,
}
