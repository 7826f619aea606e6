use std::fmt;

use serde::{Deserialize, Serialize};

/// Pipeline stage of a lead, ordered from first touch to resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Won,
    Lost,
}

impl LeadStatus {
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::Proposal,
        Self::Won,
        Self::Lost,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Proposal => "proposal",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadPriority {
    Low,
    Medium,
    High,
}

impl LeadPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for LeadPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sales-pipeline record tracking intent to engage a company,
/// independent of whether a contact is known yet.
///
/// When `contact_id` is set it must reference a contact belonging to
/// `company_id`; the store rejects anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub company_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    pub status: LeadStatus,
    pub priority: LeadPriority,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_follow_up: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub company_id: String,
    #[serde(default)]
    pub contact_id: Option<String>,
    pub status: LeadStatus,
    pub priority: LeadPriority,
    pub source: String,
    #[serde(default)]
    pub estimated_value: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub next_follow_up: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPatch {
    pub contact_id: Option<String>,
    pub status: Option<LeadStatus>,
    pub priority: Option<LeadPriority>,
    pub source: Option<String>,
    pub estimated_value: Option<f64>,
    pub notes: Option<String>,
    pub next_follow_up: Option<String>,
}

impl Lead {
    /// Merges the patch. The caller stamps `updated_at`.
    pub fn apply(&mut self, patch: LeadPatch) {
        if patch.contact_id.is_some() {
            self.contact_id = patch.contact_id;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(source) = patch.source {
            self.source = source;
        }
        if patch.estimated_value.is_some() {
            self.estimated_value = patch.estimated_value;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
        if patch.next_follow_up.is_some() {
            self.next_follow_up = patch.next_follow_up;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_order_matches_pipeline() {
        let mut statuses = LeadStatus::ALL;
        statuses.sort();
        assert_eq!(statuses, LeadStatus::ALL);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&LeadStatus::Qualified).unwrap(),
            "\"qualified\""
        );
        assert_eq!(
            serde_json::to_string(&LeadPriority::High).unwrap(),
            "\"high\""
        );
    }
}
