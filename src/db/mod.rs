//! The CRM data store.
//!
//! Owns the four collections (companies, contacts, job listings,
//! leads) plus the capped search-history log, all behind one
//! `RwLock`; there is exactly one logical writer. Every mutation
//! persists the touched collection(s) whole through the injected
//! [`StorageBackend`]; load failures degrade to empty collections.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::constants::{keys, limits};
use crate::models::{
    self, Company, CompanyPatch, Contact, ContactPatch, JobListing, JobListingPatch, Lead,
    LeadPatch, LeadStatus, NewCompany, NewContact, NewJobListing, NewLead, SearchRecord,
};
use crate::storage::StorageBackend;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl StoreError {
    fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

#[derive(Default)]
struct Collections {
    companies: Vec<Company>,
    contacts: Vec<Contact>,
    jobs: Vec<JobListing>,
    leads: Vec<Lead>,
    history: Vec<SearchRecord>,
}

/// A contact joined with its owning company, for display views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactWithCompany {
    #[serde(flatten)]
    pub contact: Contact,
    pub company: Company,
}

/// Aggregate counts across the pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmStats {
    pub total_companies: usize,
    pub total_contacts: usize,
    pub total_jobs: usize,
    pub total_leads: usize,
    pub leads_by_status: BTreeMap<String, usize>,
    pub companies_by_industry: BTreeMap<String, usize>,
}

#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    /// Loads all collections from the backend. A missing document or a
    /// read/parse failure yields an empty collection, never an error.
    pub async fn load(backend: Arc<dyn StorageBackend>) -> Self {
        let collections = Collections {
            companies: read_collection(backend.as_ref(), keys::COMPANIES).await,
            contacts: read_collection(backend.as_ref(), keys::CONTACTS).await,
            jobs: read_collection(backend.as_ref(), keys::JOBS).await,
            leads: read_collection(backend.as_ref(), keys::LEADS).await,
            history: read_collection(backend.as_ref(), keys::SEARCH_HISTORY).await,
        };

        info!(
            companies = collections.companies.len(),
            contacts = collections.contacts.len(),
            jobs = collections.jobs.len(),
            leads = collections.leads.len(),
            "CRM store loaded"
        );

        Self {
            backend,
            inner: Arc::new(RwLock::new(collections)),
        }
    }

    async fn persist<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string_pretty(items).map_err(|e| StoreError::Storage(e.into()))?;
        self.backend.write(key, &payload).await?;
        Ok(())
    }

    // Companies

    pub async fn companies(&self) -> Vec<Company> {
        self.inner.read().await.companies.clone()
    }

    pub async fn get_company(&self, id: &str) -> Option<Company> {
        self.inner
            .read()
            .await
            .companies
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Case-insensitive lookup by name, used by the import flow to
    /// de-duplicate companies discovered through searches.
    pub async fn find_company_by_name(&self, name: &str) -> Option<Company> {
        self.inner
            .read()
            .await
            .companies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    pub async fn add_company(&self, new: NewCompany) -> Result<Company, StoreError> {
        let company = Company {
            id: models::record_id(),
            name: new.name,
            industry: new.industry,
            size: new.size,
            location: new.location,
            website: new.website,
            description: new.description,
            logo: new.logo,
            created_at: models::now_rfc3339(),
        };

        let mut guard = self.inner.write().await;
        guard.companies.push(company.clone());
        self.persist(keys::COMPANIES, &guard.companies).await?;
        Ok(company)
    }

    pub async fn update_company(
        &self,
        id: &str,
        patch: CompanyPatch,
    ) -> Result<Company, StoreError> {
        let mut guard = self.inner.write().await;
        let company = guard
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Company", id))?;

        company.apply(patch);
        let updated = company.clone();
        self.persist(keys::COMPANIES, &guard.companies).await?;
        Ok(updated)
    }

    /// Removes the company and everything referencing it: contacts,
    /// job listings and leads. No orphans remain.
    pub async fn delete_company(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        if !guard.companies.iter().any(|c| c.id == id) {
            return Err(StoreError::not_found("Company", id));
        }

        guard.companies.retain(|c| c.id != id);
        guard.contacts.retain(|c| c.company_id != id);
        guard.jobs.retain(|j| j.company_id != id);
        guard.leads.retain(|l| l.company_id != id);

        self.persist(keys::COMPANIES, &guard.companies).await?;
        self.persist(keys::CONTACTS, &guard.contacts).await?;
        self.persist(keys::JOBS, &guard.jobs).await?;
        self.persist(keys::LEADS, &guard.leads).await?;
        Ok(())
    }

    // Contacts

    pub async fn contacts(&self) -> Vec<Contact> {
        self.inner.read().await.contacts.clone()
    }

    pub async fn add_contact(&self, new: NewContact) -> Result<Contact, StoreError> {
        let mut guard = self.inner.write().await;
        if !guard.companies.iter().any(|c| c.id == new.company_id) {
            return Err(StoreError::Validation(format!(
                "company {} does not exist",
                new.company_id
            )));
        }

        let contact = Contact {
            id: models::record_id(),
            company_id: new.company_id,
            name: new.name,
            title: new.title,
            department: new.department,
            email: new.email,
            phone: new.phone,
            linkedin: new.linkedin,
            is_decision_maker: new.is_decision_maker,
            notes: new.notes,
            last_contact_date: new.last_contact_date,
            created_at: models::now_rfc3339(),
        };

        guard.contacts.push(contact.clone());
        self.persist(keys::CONTACTS, &guard.contacts).await?;
        Ok(contact)
    }

    pub async fn update_contact(
        &self,
        id: &str,
        patch: ContactPatch,
    ) -> Result<Contact, StoreError> {
        let mut guard = self.inner.write().await;
        let contact = guard
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Contact", id))?;

        contact.apply(patch);
        let updated = contact.clone();
        self.persist(keys::CONTACTS, &guard.contacts).await?;
        Ok(updated)
    }

    pub async fn delete_contact(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        if !guard.contacts.iter().any(|c| c.id == id) {
            return Err(StoreError::not_found("Contact", id));
        }
        guard.contacts.retain(|c| c.id != id);
        self.persist(keys::CONTACTS, &guard.contacts).await?;
        Ok(())
    }

    // Job listings

    pub async fn job_listings(&self) -> Vec<JobListing> {
        self.inner.read().await.jobs.clone()
    }

    pub async fn add_job_listing(&self, new: NewJobListing) -> Result<JobListing, StoreError> {
        let mut guard = self.inner.write().await;
        if !guard.companies.iter().any(|c| c.id == new.company_id) {
            return Err(StoreError::Validation(format!(
                "company {} does not exist",
                new.company_id
            )));
        }

        let job = JobListing {
            id: models::record_id(),
            company_id: new.company_id,
            title: new.title,
            department: new.department,
            location: new.location,
            platform: new.platform,
            url: new.url,
            posted_date: new.posted_date,
            description: new.description,
            requirements: new.requirements,
            created_at: models::now_rfc3339(),
        };

        guard.jobs.push(job.clone());
        self.persist(keys::JOBS, &guard.jobs).await?;
        Ok(job)
    }

    pub async fn update_job_listing(
        &self,
        id: &str,
        patch: JobListingPatch,
    ) -> Result<JobListing, StoreError> {
        let mut guard = self.inner.write().await;
        let job = guard
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| StoreError::not_found("Job listing", id))?;

        job.apply(patch);
        let updated = job.clone();
        self.persist(keys::JOBS, &guard.jobs).await?;
        Ok(updated)
    }

    pub async fn delete_job_listing(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        if !guard.jobs.iter().any(|j| j.id == id) {
            return Err(StoreError::not_found("Job listing", id));
        }
        guard.jobs.retain(|j| j.id != id);
        self.persist(keys::JOBS, &guard.jobs).await?;
        Ok(())
    }

    // Leads

    pub async fn leads(&self) -> Vec<Lead> {
        self.inner.read().await.leads.clone()
    }

    pub async fn add_lead(&self, new: NewLead) -> Result<Lead, StoreError> {
        let mut guard = self.inner.write().await;
        if !guard.companies.iter().any(|c| c.id == new.company_id) {
            return Err(StoreError::Validation(format!(
                "company {} does not exist",
                new.company_id
            )));
        }
        if let Some(contact_id) = &new.contact_id {
            validate_contact_link(&guard.contacts, &new.company_id, contact_id)?;
        }

        let now = models::now_rfc3339();
        let lead = Lead {
            id: models::record_id(),
            company_id: new.company_id,
            contact_id: new.contact_id,
            status: new.status,
            priority: new.priority,
            source: new.source,
            estimated_value: new.estimated_value,
            notes: new.notes,
            next_follow_up: new.next_follow_up,
            created_at: now.clone(),
            updated_at: now,
        };

        guard.leads.push(lead.clone());
        self.persist(keys::LEADS, &guard.leads).await?;
        Ok(lead)
    }

    /// Every update stamps `updated_at`.
    pub async fn update_lead(&self, id: &str, patch: LeadPatch) -> Result<Lead, StoreError> {
        let mut guard = self.inner.write().await;
        let Collections {
            leads, contacts, ..
        } = &mut *guard;

        let lead = leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::not_found("Lead", id))?;

        if let Some(contact_id) = &patch.contact_id {
            validate_contact_link(contacts, &lead.company_id, contact_id)?;
        }

        lead.apply(patch);
        lead.updated_at = models::now_rfc3339();
        let updated = lead.clone();
        self.persist(keys::LEADS, &guard.leads).await?;
        Ok(updated)
    }

    pub async fn delete_lead(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        if !guard.leads.iter().any(|l| l.id == id) {
            return Err(StoreError::not_found("Lead", id));
        }
        guard.leads.retain(|l| l.id != id);
        self.persist(keys::LEADS, &guard.leads).await?;
        Ok(())
    }

    // Derived views

    pub async fn contacts_for_company(&self, company_id: &str) -> Vec<Contact> {
        self.inner
            .read()
            .await
            .contacts
            .iter()
            .filter(|c| c.company_id == company_id)
            .cloned()
            .collect()
    }

    pub async fn jobs_for_company(&self, company_id: &str) -> Vec<JobListing> {
        self.inner
            .read()
            .await
            .jobs
            .iter()
            .filter(|j| j.company_id == company_id)
            .cloned()
            .collect()
    }

    pub async fn leads_for_company(&self, company_id: &str) -> Vec<Lead> {
        self.inner
            .read()
            .await
            .leads
            .iter()
            .filter(|l| l.company_id == company_id)
            .cloned()
            .collect()
    }

    /// Contacts joined with their owning company for display.
    pub async fn contacts_with_company(&self) -> Vec<ContactWithCompany> {
        let guard = self.inner.read().await;
        guard
            .contacts
            .iter()
            .filter_map(|contact| {
                guard
                    .companies
                    .iter()
                    .find(|c| c.id == contact.company_id)
                    .map(|company| ContactWithCompany {
                        contact: contact.clone(),
                        company: company.clone(),
                    })
            })
            .collect()
    }

    pub async fn stats(&self) -> CrmStats {
        let guard = self.inner.read().await;

        let mut leads_by_status: BTreeMap<String, usize> = BTreeMap::new();
        for status in LeadStatus::ALL {
            let count = guard.leads.iter().filter(|l| l.status == status).count();
            if count > 0 {
                leads_by_status.insert(status.to_string(), count);
            }
        }

        let mut companies_by_industry: BTreeMap<String, usize> = BTreeMap::new();
        for company in &guard.companies {
            let industry = if company.industry.is_empty() {
                "Unknown".to_string()
            } else {
                company.industry.clone()
            };
            *companies_by_industry.entry(industry).or_insert(0) += 1;
        }

        CrmStats {
            total_companies: guard.companies.len(),
            total_contacts: guard.contacts.len(),
            total_jobs: guard.jobs.len(),
            total_leads: guard.leads.len(),
            leads_by_status,
            companies_by_industry,
        }
    }

    // Search history

    /// Prepends a record and evicts beyond the cap, oldest first.
    pub async fn record_search(
        &self,
        query: &str,
        location: &str,
        targets: &[String],
        industries: &str,
        company_sizes: &str,
        results_count: usize,
    ) -> Result<SearchRecord, StoreError> {
        let record = SearchRecord {
            id: models::record_id(),
            query: query.to_string(),
            location: location.to_string(),
            platforms: targets.join(","),
            industries: industries.to_string(),
            company_sizes: company_sizes.to_string(),
            results_count,
            created_at: models::now_rfc3339(),
        };

        let mut guard = self.inner.write().await;
        guard.history.insert(0, record.clone());
        guard.history.truncate(limits::SEARCH_HISTORY_CAP);
        self.persist(keys::SEARCH_HISTORY, &guard.history).await?;
        Ok(record)
    }

    /// Recent searches, newest first.
    pub async fn search_history(&self) -> Vec<SearchRecord> {
        self.inner.read().await.history.clone()
    }
}

fn validate_contact_link(
    contacts: &[Contact],
    company_id: &str,
    contact_id: &str,
) -> Result<(), StoreError> {
    let contact = contacts
        .iter()
        .find(|c| c.id == contact_id)
        .ok_or_else(|| StoreError::Validation(format!("contact {contact_id} does not exist")))?;

    if contact.company_id != company_id {
        return Err(StoreError::Validation(format!(
            "contact {contact_id} belongs to company {}, not {company_id}",
            contact.company_id
        )));
    }
    Ok(())
}

async fn read_collection<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str) -> Vec<T> {
    match backend.read(key).await {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(items) => items,
            Err(e) => {
                warn!("Failed to parse stored {key}: {e}; starting empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Failed to read stored {key}: {e}; starting empty");
            Vec::new()
        }
    }
}
