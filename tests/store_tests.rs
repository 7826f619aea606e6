use std::sync::Arc;

use leadarr::db::{Store, StoreError};
use leadarr::models::{
    LeadPatch, LeadPriority, LeadStatus, NewCompany, NewContact, NewJobListing, NewLead, Platform,
};
use leadarr::storage::{JsonFileBackend, MemoryBackend};

fn new_company(name: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        industry: "Technology".to_string(),
        size: "51-200 employees".to_string(),
        location: "Buenos Aires, Argentina".to_string(),
        website: Some("https://example.com".to_string()),
        description: None,
        logo: None,
    }
}

fn new_contact(company_id: &str, name: &str) -> NewContact {
    NewContact {
        company_id: company_id.to_string(),
        name: name.to_string(),
        title: "HR Manager".to_string(),
        department: "Hiring".to_string(),
        email: Some("hr@example.com".to_string()),
        phone: None,
        linkedin: None,
        is_decision_maker: true,
        notes: None,
        last_contact_date: None,
    }
}

fn new_job(company_id: &str) -> NewJobListing {
    NewJobListing {
        company_id: company_id.to_string(),
        title: "Software Engineer".to_string(),
        department: "Engineering".to_string(),
        location: "Remote".to_string(),
        platform: Platform::Linkedin,
        url: "https://linkedin.com/jobs/x".to_string(),
        posted_date: "2026-08-01".to_string(),
        description: None,
        requirements: None,
    }
}

fn new_lead(company_id: &str, contact_id: Option<String>) -> NewLead {
    NewLead {
        company_id: company_id.to_string(),
        contact_id,
        status: LeadStatus::New,
        priority: LeadPriority::Medium,
        source: "manual".to_string(),
        estimated_value: None,
        notes: None,
        next_follow_up: None,
    }
}

#[tokio::test]
async fn test_round_trip_persistence_is_id_stable() {
    let dir = tempfile::tempdir().unwrap();

    let backend = Arc::new(JsonFileBackend::new(dir.path()));
    let store = Store::load(backend).await;

    let mut ids = Vec::new();
    for name in ["Acme", "Initech", "Globex"] {
        ids.push(store.add_company(new_company(name)).await.unwrap().id);
    }
    let contact = store.add_contact(new_contact(&ids[0], "Ana")).await.unwrap();
    store.add_job_listing(new_job(&ids[0])).await.unwrap();
    store
        .add_lead(new_lead(&ids[0], Some(contact.id.clone())))
        .await
        .unwrap();

    let before = store.companies().await;
    drop(store);

    // A fresh store over the same directory sees identical records.
    let reloaded = Store::load(Arc::new(JsonFileBackend::new(dir.path()))).await;
    let after = reloaded.companies().await;

    assert_eq!(after.len(), 3);
    assert_eq!(
        serde_json::to_value(&before).unwrap(),
        serde_json::to_value(&after).unwrap()
    );
    assert_eq!(reloaded.contacts().await.len(), 1);
    assert_eq!(reloaded.job_listings().await.len(), 1);
    assert_eq!(reloaded.leads().await.len(), 1);
    assert_eq!(reloaded.leads().await[0].contact_id, Some(contact.id));
}

#[tokio::test]
async fn test_delete_company_cascades_without_orphans() {
    let store = Store::load(Arc::new(MemoryBackend::new())).await;

    let acme = store.add_company(new_company("Acme")).await.unwrap();
    let other = store.add_company(new_company("Other")).await.unwrap();

    let acme_contact = store.add_contact(new_contact(&acme.id, "Ana")).await.unwrap();
    store.add_contact(new_contact(&other.id, "Bea")).await.unwrap();
    store.add_job_listing(new_job(&acme.id)).await.unwrap();
    store.add_job_listing(new_job(&other.id)).await.unwrap();
    store
        .add_lead(new_lead(&acme.id, Some(acme_contact.id)))
        .await
        .unwrap();
    store.add_lead(new_lead(&other.id, None)).await.unwrap();

    store.delete_company(&acme.id).await.unwrap();

    assert!(store.get_company(&acme.id).await.is_none());
    assert!(store.contacts().await.iter().all(|c| c.company_id == other.id));
    assert!(store.job_listings().await.iter().all(|j| j.company_id == other.id));
    assert!(store.leads().await.iter().all(|l| l.company_id == other.id));
}

#[tokio::test]
async fn test_add_company_then_lead_then_delete_leaves_no_leads() {
    let store = Store::load(Arc::new(MemoryBackend::new())).await;

    let acme = store.add_company(new_company("Acme")).await.unwrap();
    store.add_lead(new_lead(&acme.id, None)).await.unwrap();
    store.delete_company(&acme.id).await.unwrap();

    assert!(store.leads().await.is_empty());
}

#[tokio::test]
async fn test_history_cap_evicts_oldest() {
    let store = Store::load(Arc::new(MemoryBackend::new())).await;

    for i in 0..51 {
        store
            .record_search(&format!("query {i}"), "", &["linkedin".to_string()], "", "", i)
            .await
            .unwrap();
    }

    let history = store.search_history().await;
    assert_eq!(history.len(), 50);
    assert_eq!(history[0].query, "query 50");
    assert!(history.iter().all(|r| r.query != "query 0"));
}

#[tokio::test]
async fn test_lead_contact_must_belong_to_lead_company() {
    let store = Store::load(Arc::new(MemoryBackend::new())).await;

    let a = store.add_company(new_company("A")).await.unwrap();
    let b = store.add_company(new_company("B")).await.unwrap();
    let contact_b = store.add_contact(new_contact(&b.id, "Bea")).await.unwrap();

    let rejected = store
        .add_lead(new_lead(&a.id, Some(contact_b.id.clone())))
        .await;
    assert!(matches!(rejected, Err(StoreError::Validation(_))));

    let lead = store.add_lead(new_lead(&a.id, None)).await.unwrap();
    let repatch = store
        .update_lead(
            &lead.id,
            LeadPatch {
                contact_id: Some(contact_b.id),
                ..LeadPatch::default()
            },
        )
        .await;
    assert!(matches!(repatch, Err(StoreError::Validation(_))));

    let contact_a = store.add_contact(new_contact(&a.id, "Ana")).await.unwrap();
    let ok = store
        .update_lead(
            &lead.id,
            LeadPatch {
                contact_id: Some(contact_a.id.clone()),
                ..LeadPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(ok.contact_id, Some(contact_a.id));
}

#[tokio::test]
async fn test_patch_merges_only_present_fields() {
    let store = Store::load(Arc::new(MemoryBackend::new())).await;

    let acme = store.add_company(new_company("Acme")).await.unwrap();
    let updated = store
        .update_company(
            &acme.id,
            leadarr::models::CompanyPatch {
                industry: Some("Fintech".to_string()),
                ..leadarr::models::CompanyPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Acme");
    assert_eq!(updated.industry, "Fintech");
    assert_eq!(updated.website.as_deref(), Some("https://example.com"));
    assert_eq!(updated.id, acme.id);
}

#[tokio::test]
async fn test_lead_update_stamps_updated_at() {
    let store = Store::load(Arc::new(MemoryBackend::new())).await;

    let acme = store.add_company(new_company("Acme")).await.unwrap();
    let lead = store.add_lead(new_lead(&acme.id, None)).await.unwrap();
    assert_eq!(lead.created_at, lead.updated_at);

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = store
        .update_lead(
            &lead.id,
            LeadPatch {
                status: Some(LeadStatus::Contacted),
                ..LeadPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, LeadStatus::Contacted);
    assert_eq!(updated.created_at, lead.created_at);
    assert_ne!(updated.updated_at, lead.updated_at);
}

#[tokio::test]
async fn test_corrupt_document_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("companies.json"), "{ not json").unwrap();

    let store = Store::load(Arc::new(JsonFileBackend::new(dir.path()))).await;
    assert!(store.companies().await.is_empty());

    // The store stays usable and overwrites the bad document.
    store.add_company(new_company("Acme")).await.unwrap();
    let reloaded = Store::load(Arc::new(JsonFileBackend::new(dir.path()))).await;
    assert_eq!(reloaded.companies().await.len(), 1);
}
