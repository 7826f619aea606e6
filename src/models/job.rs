use std::fmt;

use serde::{Deserialize, Serialize};

/// The job platforms the search service knows how to target.
///
/// These are labels and fixed URL templates, not live integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Computrabajo,
    Bumeran,
    Zonajobs,
}

impl Platform {
    pub const ALL: [Self; 4] = [
        Self::Linkedin,
        Self::Computrabajo,
        Self::Bumeran,
        Self::Zonajobs,
    ];

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "linkedin" => Some(Self::Linkedin),
            "computrabajo" => Some(Self::Computrabajo),
            "bumeran" => Some(Self::Bumeran),
            "zonajobs" => Some(Self::Zonajobs),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Computrabajo => "computrabajo",
            Self::Bumeran => "bumeran",
            Self::Zonajobs => "zonajobs",
        }
    }

    /// The platform's fixed search query-string template with the
    /// keyword and location filters substituted in.
    #[must_use]
    pub fn search_url(self, keywords: &str, location: &str) -> String {
        let q = urlencoding::encode(keywords);
        let l = urlencoding::encode(location);
        match self {
            Self::Linkedin => format!(
                "https://www.linkedin.com/jobs/search/?keywords={q}&location={l}"
            ),
            Self::Computrabajo => format!("https://www.computrabajo.com/empleos?q={q}&l={l}"),
            Self::Bumeran => format!("https://www.bumeran.com.ar/empleos-busqueda-{q}.html"),
            Self::Zonajobs => format!("https://www.zonajobs.com.ar/empleos?palabra={q}"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job listing stored in the CRM, owned by a company.
///
/// Listings are effectively immutable after creation; an update path
/// exists but no flow drives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub platform: Platform,
    pub url: String,
    pub posted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobListing {
    pub company_id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub platform: Platform,
    pub url: String,
    pub posted_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListingPatch {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub posted_date: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
}

impl JobListing {
    pub fn apply(&mut self, patch: JobListingPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(posted_date) = patch.posted_date {
            self.posted_date = posted_date;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if patch.requirements.is_some() {
            self.requirements = patch.requirements;
        }
    }
}

/// A posting as emitted by the search service, before any import into
/// the CRM. Every posting produced by this system is synthesized, and
/// says so.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub company_name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub location: String,
    /// Present for platform-mode results; career-page postings have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub url: String,
    pub posted_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_info: Option<PostingCompanyInfo>,
    #[serde(default)]
    pub contacts: Vec<PostingContact>,
    /// Always true for generated postings; kept explicit so a future
    /// real extraction path cannot be confused with simulation.
    pub synthetic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingCompanyInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingContact {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
