//! Folds a confirmed search result set into the CRM.
//!
//! Postings are grouped by company; companies are de-duplicated by
//! case-insensitive name against the store, the first discovered
//! contact becomes the company's decision-maker, each posting becomes
//! a job listing, and one lead is opened per company.

use serde::Serialize;
use tracing::{debug, info};

use crate::db::{Store, StoreError};
use crate::models::{JobPosting, LeadPriority, LeadStatus, NewCompany, NewContact, NewJobListing, NewLead};

/// Per-entity counts for one import run.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub companies_created: usize,
    pub companies_matched: usize,
    pub contacts_created: usize,
    pub jobs_created: usize,
    /// Postings without a platform cannot become job listings; they
    /// still contribute to the company, contact and lead records.
    pub jobs_skipped: usize,
    pub leads_created: usize,
}

pub struct ImportService {
    store: Store,
}

impl ImportService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn import_postings(
        &self,
        postings: Vec<JobPosting>,
    ) -> Result<ImportSummary, StoreError> {
        let mut summary = ImportSummary::default();

        // Group by company, preserving first-seen order.
        let mut groups: Vec<(String, Vec<JobPosting>)> = Vec::new();
        for posting in postings {
            match groups
                .iter_mut()
                .find(|(name, _)| name.eq_ignore_ascii_case(&posting.company_name))
            {
                Some((_, items)) => items.push(posting),
                None => groups.push((posting.company_name.clone(), vec![posting])),
            }
        }

        for (name, group) in groups {
            self.import_company_group(&name, &group, &mut summary).await?;
        }

        info!(
            companies_created = summary.companies_created,
            companies_matched = summary.companies_matched,
            jobs_created = summary.jobs_created,
            leads_created = summary.leads_created,
            "Import complete"
        );
        Ok(summary)
    }

    async fn import_company_group(
        &self,
        name: &str,
        group: &[JobPosting],
        summary: &mut ImportSummary,
    ) -> Result<(), StoreError> {
        let first = &group[0];
        let info = first.company_info.as_ref();

        let company = if let Some(existing) = self.store.find_company_by_name(name).await {
            summary.companies_matched += 1;
            existing
        } else {
            summary.companies_created += 1;
            self.store
                .add_company(NewCompany {
                    name: name.to_string(),
                    industry: info
                        .and_then(|i| i.industry.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    size: info
                        .and_then(|i| i.size.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    location: first.location.clone(),
                    website: info.and_then(|i| i.website.clone()),
                    description: info.and_then(|i| i.description.clone()).or_else(|| {
                        Some(format!(
                            "Company discovered through job platform search with {} open positions.",
                            group.len()
                        ))
                    }),
                    logo: None,
                })
                .await?
        };

        let primary_contact = self.import_primary_contact(&company.id, name, group, summary).await?;

        for posting in group {
            let Some(platform) = posting.platform else {
                debug!(company = name, posting = %posting.id, "Posting has no platform; listing skipped");
                summary.jobs_skipped += 1;
                continue;
            };

            self.store
                .add_job_listing(NewJobListing {
                    company_id: company.id.clone(),
                    title: posting.title.clone(),
                    department: posting
                        .department
                        .clone()
                        .unwrap_or_else(|| "Various".to_string()),
                    location: posting.location.clone(),
                    platform,
                    url: posting.url.clone(),
                    posted_date: posting.posted_date.clone(),
                    description: Some(posting.description.clone()),
                    requirements: posting.requirements.clone(),
                })
                .await?;
            summary.jobs_created += 1;
        }

        let priority = if group.len() > 3 {
            LeadPriority::High
        } else {
            LeadPriority::Medium
        };

        self.store
            .add_lead(NewLead {
                company_id: company.id.clone(),
                contact_id: primary_contact,
                status: LeadStatus::New,
                priority,
                source: "job_platform_search".to_string(),
                estimated_value: None,
                notes: Some(format!(
                    "Lead generated from job search import. Company has {} active job posting(s).",
                    group.len()
                )),
                next_follow_up: None,
            })
            .await?;
        summary.leads_created += 1;

        Ok(())
    }

    /// Creates the first discovered contact as the company's
    /// decision-maker, unless a contact with the same name exists.
    /// Returns the contact id to attach to the lead, if any.
    async fn import_primary_contact(
        &self,
        company_id: &str,
        company_name: &str,
        group: &[JobPosting],
        summary: &mut ImportSummary,
    ) -> Result<Option<String>, StoreError> {
        let Some(discovered) = group.iter().flat_map(|p| p.contacts.iter()).next() else {
            return Ok(None);
        };

        let existing = self.store.contacts_for_company(company_id).await;
        if let Some(found) = existing
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(&discovered.name))
        {
            return Ok(Some(found.id.clone()));
        }

        let contact = self
            .store
            .add_contact(NewContact {
                company_id: company_id.to_string(),
                name: discovered.name.clone(),
                title: discovered.title.clone(),
                department: "Hiring".to_string(),
                email: discovered.email.clone(),
                phone: None,
                linkedin: discovered.linkedin.clone(),
                is_decision_maker: true,
                notes: Some(format!(
                    "Contact discovered through job platform search. Responsible for hiring at {company_name}."
                )),
                last_contact_date: None,
            })
            .await?;
        summary.contacts_created += 1;
        Ok(Some(contact.id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{Platform, PostingContact};
    use crate::storage::MemoryBackend;

    fn posting(company: &str, title: &str, platform: Option<Platform>) -> JobPosting {
        JobPosting {
            id: format!("test_{company}_{title}"),
            company_name: company.to_string(),
            title: title.to_string(),
            department: Some("Engineering".to_string()),
            location: "Remote - Latin America".to_string(),
            platform,
            url: "https://example.com/job".to_string(),
            posted_date: "2026-08-01".to_string(),
            description: "A role".to_string(),
            requirements: None,
            salary_range: None,
            employment_type: None,
            company_info: None,
            contacts: vec![PostingContact {
                name: "Ana Rodriguez".to_string(),
                title: "HR Manager".to_string(),
                linkedin: None,
                email: Some("ana@example.com".to_string()),
            }],
            synthetic: true,
        }
    }

    #[tokio::test]
    async fn test_import_groups_and_deduplicates_companies() {
        let store = Store::load(Arc::new(MemoryBackend::new())).await;
        let service = ImportService::new(store.clone());

        let postings = vec![
            posting("Acme", "Engineer", Some(Platform::Linkedin)),
            posting("acme", "Designer", Some(Platform::Bumeran)),
            posting("Initech", "Analyst", Some(Platform::Zonajobs)),
        ];

        let summary = service.import_postings(postings).await.unwrap();
        assert_eq!(summary.companies_created, 2);
        assert_eq!(summary.companies_matched, 0);
        assert_eq!(summary.jobs_created, 3);
        assert_eq!(summary.leads_created, 2);
        // One contact per company; the duplicate name is reused.
        assert_eq!(summary.contacts_created, 2);

        // Re-importing matches instead of duplicating.
        let summary = service
            .import_postings(vec![posting("ACME", "Engineer", Some(Platform::Linkedin))])
            .await
            .unwrap();
        assert_eq!(summary.companies_created, 0);
        assert_eq!(summary.companies_matched, 1);
        assert_eq!(summary.contacts_created, 0);
        assert_eq!(store.companies().await.len(), 2);
    }

    #[tokio::test]
    async fn test_import_skips_listings_without_platform() {
        let store = Store::load(Arc::new(MemoryBackend::new())).await;
        let service = ImportService::new(store.clone());

        let summary = service
            .import_postings(vec![posting("Globant", "Consultant", None)])
            .await
            .unwrap();

        assert_eq!(summary.companies_created, 1);
        assert_eq!(summary.jobs_created, 0);
        assert_eq!(summary.jobs_skipped, 1);
        assert_eq!(summary.leads_created, 1);
        assert!(store.job_listings().await.is_empty());

        let leads = store.leads().await;
        assert_eq!(leads.len(), 1);
        assert!(leads[0].contact_id.is_some());
    }

    #[tokio::test]
    async fn test_import_priority_follows_posting_volume() {
        let store = Store::load(Arc::new(MemoryBackend::new())).await;
        let service = ImportService::new(store.clone());

        let many: Vec<JobPosting> = (0..4)
            .map(|i| posting("Busy Corp", &format!("Role {i}"), Some(Platform::Linkedin)))
            .collect();
        service.import_postings(many).await.unwrap();

        service
            .import_postings(vec![posting("Quiet Corp", "Role", Some(Platform::Linkedin))])
            .await
            .unwrap();

        let leads = store.leads().await;
        let busy = leads
            .iter()
            .find(|l| l.notes.as_deref().unwrap().contains("4 active"))
            .unwrap();
        assert_eq!(busy.priority, LeadPriority::High);

        let quiet = leads
            .iter()
            .find(|l| l.notes.as_deref().unwrap().contains("1 active"))
            .unwrap();
        assert_eq!(quiet.priority, LeadPriority::Medium);
    }
}
