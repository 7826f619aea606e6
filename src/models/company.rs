use serde::{Deserialize, Serialize};

/// A target company in the sales pipeline.
///
/// Deleting a company cascades to its contacts, job listings and leads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    /// Size bucket, e.g. "51-200 employees".
    pub size: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub created_at: String,
}

/// Input for creating a company; id and timestamp are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: String,
    pub industry: String,
    pub size: String,
    pub location: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Partial update; only present fields are merged into the record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
}

impl Company {
    pub fn apply(&mut self, patch: CompanyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(industry) = patch.industry {
            self.industry = industry;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if patch.website.is_some() {
            self.website = patch.website;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if patch.logo.is_some() {
            self.logo = patch.logo;
        }
    }
}
