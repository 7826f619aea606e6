pub mod company;
pub mod contact;
pub mod job;
pub mod lead;
pub mod search;

pub use company::{Company, CompanyPatch, NewCompany};
pub use contact::{Contact, ContactPatch, NewContact};
pub use job::{
    JobListing, JobListingPatch, JobPosting, NewJobListing, Platform, PostingCompanyInfo,
    PostingContact,
};
pub use lead::{Lead, LeadPatch, LeadPriority, LeadStatus, NewLead};
pub use search::SearchRecord;

use rand::Rng;
use rand::distr::Alphanumeric;

/// Opaque record id: epoch milliseconds plus a 9-character random
/// alphanumeric suffix, e.g. `1723819200123_k3V9q2Z7a`.
pub fn record_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("{}_{}", chrono::Utc::now().timestamp_millis(), suffix)
}

/// Current timestamp in the format every record stores.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_shape() {
        let id = record_id();
        let (millis, suffix) = id.split_once('_').expect("id has a separator");
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_record_ids_are_unique() {
        let a = record_id();
        let b = record_id();
        assert_ne!(a, b);
    }
}
