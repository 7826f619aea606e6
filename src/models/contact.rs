use serde::{Deserialize, Serialize};

/// A person at a [`Company`](super::Company). Owned by exactly one
/// company via `company_id`; deleted independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub title: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Whether this contact has hiring/budget authority.
    pub is_decision_maker: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact_date: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub company_id: String,
    pub name: String,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub is_decision_maker: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub last_contact_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub is_decision_maker: Option<bool>,
    pub notes: Option<String>,
    pub last_contact_date: Option<String>,
}

impl Contact {
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if patch.email.is_some() {
            self.email = patch.email;
        }
        if patch.phone.is_some() {
            self.phone = patch.phone;
        }
        if patch.linkedin.is_some() {
            self.linkedin = patch.linkedin;
        }
        if let Some(flag) = patch.is_decision_maker {
            self.is_decision_maker = flag;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
        if patch.last_contact_date.is_some() {
            self.last_contact_date = patch.last_contact_date;
        }
    }
}
