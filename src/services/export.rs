//! CSV lead sheet: one row per posting, company and primary contact
//! flattened alongside.

use crate::models::JobPosting;

const HEADER: &[&str] = &[
    "Company Name",
    "Job Title",
    "Location",
    "Platform",
    "Posted Date",
    "Job URL",
    "Company Industry",
    "Company Size",
    "Company Website",
    "Contact Name",
    "Contact Title",
    "Contact LinkedIn",
    "Contact Email",
];

/// Builds the CSV document. Every data field is quoted; embedded
/// quotes are doubled.
#[must_use]
pub fn postings_to_csv(postings: &[JobPosting]) -> String {
    let mut csv = HEADER.join(",");
    csv.push('\n');

    for posting in postings {
        let info = posting.company_info.as_ref();
        let contact = posting.contacts.first();

        let fields = [
            posting.company_name.as_str(),
            posting.title.as_str(),
            posting.location.as_str(),
            posting.platform.map_or("", |p| p.as_str()),
            posting.posted_date.as_str(),
            posting.url.as_str(),
            info.and_then(|i| i.industry.as_deref()).unwrap_or(""),
            info.and_then(|i| i.size.as_deref()).unwrap_or(""),
            info.and_then(|i| i.website.as_deref()).unwrap_or(""),
            contact.map_or("", |c| c.name.as_str()),
            contact.map_or("", |c| c.title.as_str()),
            contact.and_then(|c| c.linkedin.as_deref()).unwrap_or(""),
            contact.and_then(|c| c.email.as_deref()).unwrap_or(""),
        ];

        let row: Vec<String> = fields.iter().map(|f| quote(f)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Download filename for the sheet, dated like the original export.
#[must_use]
pub fn export_filename() -> String {
    format!(
        "leadarr-leads-{}.csv",
        chrono::Utc::now().format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Platform, PostingCompanyInfo, PostingContact};

    fn sample_posting() -> JobPosting {
        JobPosting {
            id: "x".to_string(),
            company_name: "Acme, Inc".to_string(),
            title: "Senior \"Rust\" Engineer".to_string(),
            department: None,
            location: "Buenos Aires, Argentina".to_string(),
            platform: Some(Platform::Linkedin),
            url: "https://linkedin.com/jobs/abc".to_string(),
            posted_date: "2026-08-01".to_string(),
            description: "desc".to_string(),
            requirements: None,
            salary_range: None,
            employment_type: None,
            company_info: Some(PostingCompanyInfo {
                industry: Some("Technology".to_string()),
                size: None,
                website: None,
                description: None,
                domain: None,
            }),
            contacts: vec![PostingContact {
                name: "Ana Rodriguez".to_string(),
                title: "HR Manager".to_string(),
                linkedin: None,
                email: Some("ana@acme.com".to_string()),
            }],
            synthetic: true,
        }
    }

    #[test]
    fn test_header_and_one_row_per_posting() {
        let csv = postings_to_csv(&[sample_posting(), sample_posting()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Company Name,Job Title,"));
    }

    #[test]
    fn test_fields_are_quoted_and_escaped() {
        let csv = postings_to_csv(&[sample_posting()]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Acme, Inc\""));
        assert!(row.contains("\"Senior \"\"Rust\"\" Engineer\""));
        assert!(row.contains("\"linkedin\""));
        assert!(row.contains("\"ana@acme.com\""));
    }

    #[test]
    fn test_empty_set_is_header_only() {
        let csv = postings_to_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
