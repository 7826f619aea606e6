//! Platform-mode and company-mode job searches.
//!
//! Each requested target is processed independently and concurrently
//! (bounded fan-out, request order preserved). External scrape calls
//! are best-effort with a per-call timeout; any failure degrades to
//! the synthetic generator and is recorded in the target's report
//! instead of being hidden.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use futures::stream;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clients::ScrapeClient;
use crate::config::Config;
use crate::models::{self, JobPosting, Platform};
use crate::services::{generator, roster};

/// Free-text filters shared by both search modes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
}

impl SearchParams {
    fn keywords(&self) -> &str {
        self.keywords.as_deref().unwrap_or("")
    }

    fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// Outcome of the best-effort external fetch for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    /// The external API returned the page; postings are still simulated.
    Fetched,
    /// No scrape client is configured.
    Skipped,
    /// The call failed or timed out; the reason lands in `error`.
    Failed,
}

/// Per-target result record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetReport {
    /// The platform or company this entry reports on.
    pub target: String,
    pub success: bool,
    pub jobs: Vec<JobPosting>,
    pub total_found: usize,
    pub scrape: ScrapeStatus,
    /// Informational only; a degraded target still succeeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSearchOutcome {
    pub success: bool,
    pub total_jobs: usize,
    pub total_found: usize,
    pub jobs: Vec<JobPosting>,
    pub results: Vec<TargetReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    pub data_source: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchOutcome {
    pub success: bool,
    pub total_jobs: usize,
    pub total_found: usize,
    pub jobs: Vec<JobPosting>,
    pub companies_scraped: usize,
    pub results: Vec<TargetReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    pub data_source: &'static str,
    pub timestamp: String,
    pub search_params: SearchParams,
}

enum ScrapeAttempt {
    Fetched,
    Skipped,
    Failed(String),
}

pub struct SearchService {
    scrape: Option<Arc<ScrapeClient>>,
    config: Config,
}

impl SearchService {
    #[must_use]
    pub const fn new(scrape: Option<Arc<ScrapeClient>>, config: Config) -> Self {
        Self { scrape, config }
    }

    fn fan_out_width(&self) -> usize {
        self.config.search.max_concurrent_requests.max(1)
    }

    fn scrape_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.config.scraper.request_timeout_seconds))
    }

    /// Searches every requested platform. One report per platform, in
    /// request order; unknown platform names fail their own entry
    /// without affecting the others.
    pub async fn search_platforms(
        &self,
        platforms: &[String],
        params: &SearchParams,
    ) -> PlatformSearchOutcome {
        info!(targets = platforms.len(), "Starting platform search");

        let results: Vec<TargetReport> = stream::iter(platforms.iter().cloned())
            .map(|name| self.platform_target(name, params))
            .buffered(self.fan_out_width())
            .collect()
            .await;

        let jobs: Vec<JobPosting> = results.iter().flat_map(|r| r.jobs.clone()).collect();
        let total_found = results.iter().map(|r| r.total_found).sum();
        let errors: Vec<String> = results.iter().filter_map(|r| r.error.clone()).collect();
        let success = results.iter().all(|r| r.success);

        PlatformSearchOutcome {
            success,
            total_jobs: jobs.len(),
            total_found,
            jobs,
            results,
            errors: if errors.is_empty() { None } else { Some(errors) },
            data_source: "platform-simulation",
        }
    }

    async fn platform_target(&self, name: String, params: &SearchParams) -> TargetReport {
        let Some(platform) = Platform::parse(&name) else {
            return TargetReport {
                target: name.clone(),
                success: false,
                jobs: Vec::new(),
                total_found: 0,
                scrape: ScrapeStatus::Skipped,
                error: Some(format!("Platform {name} not supported")),
            };
        };

        let url = platform.search_url(params.keywords(), params.location());
        let attempt = self.attempt_scrape(&url).await;

        let jobs = generator::platform_jobs(platform, params.location());
        let total_found = jobs.len();

        let (scrape, error) = match attempt {
            ScrapeAttempt::Fetched => (ScrapeStatus::Fetched, None),
            ScrapeAttempt::Skipped => (ScrapeStatus::Skipped, None),
            ScrapeAttempt::Failed(reason) => (
                ScrapeStatus::Failed,
                Some(format!("Scraping failed, using simulated data: {reason}")),
            ),
        };

        debug!(platform = %platform, jobs = total_found, ?scrape, "Platform target done");

        TargetReport {
            target: platform.to_string(),
            success: true,
            jobs,
            total_found,
            scrape,
            error,
        }
    }

    /// Scans roster companies' career pages. Every selected company
    /// yields a report; degradations surface as warnings, not
    /// failures.
    pub async fn search_companies(
        &self,
        companies: &[String],
        params: &SearchParams,
    ) -> CompanySearchOutcome {
        let selected = roster::select(companies, params.industry.as_deref());
        info!(
            requested = companies.len(),
            selected = selected.len(),
            "Starting career-page search"
        );

        let results: Vec<TargetReport> = stream::iter(selected.iter().copied().copied())
            .map(|profile: roster::CompanyProfile| self.company_target(profile, params))
            .buffered(self.fan_out_width())
            .collect()
            .await;

        let jobs: Vec<JobPosting> = results.iter().flat_map(|r| r.jobs.clone()).collect();
        let total_found = results.iter().map(|r| r.total_found).sum();
        let warnings: Vec<String> = results.iter().filter_map(|r| r.error.clone()).collect();
        let success = results.iter().all(|r| r.success);

        CompanySearchOutcome {
            success,
            total_jobs: jobs.len(),
            total_found,
            jobs,
            companies_scraped: selected.len(),
            results,
            warnings: if warnings.is_empty() {
                None
            } else {
                Some(warnings)
            },
            data_source: "career-page-simulation",
            timestamp: models::now_rfc3339(),
            search_params: params.clone(),
        }
    }

    async fn company_target(
        &self,
        profile: roster::CompanyProfile,
        params: &SearchParams,
    ) -> TargetReport {
        let attempt = self.attempt_scrape(profile.careers_url).await;

        let jobs = generator::company_jobs(&profile, params.keywords(), params.location());
        let total_found = jobs.len();

        let (scrape, error) = match attempt {
            ScrapeAttempt::Fetched => (ScrapeStatus::Fetched, None),
            ScrapeAttempt::Skipped => (ScrapeStatus::Skipped, None),
            ScrapeAttempt::Failed(reason) => (
                ScrapeStatus::Failed,
                Some(format!(
                    "Scraping {} failed, using simulated data: {reason}",
                    profile.name
                )),
            ),
        };

        debug!(company = profile.name, jobs = total_found, ?scrape, "Company target done");

        TargetReport {
            target: profile.name.to_string(),
            success: true,
            jobs,
            total_found,
            scrape,
            error,
        }
    }

    async fn attempt_scrape(&self, url: &str) -> ScrapeAttempt {
        let Some(client) = &self.scrape else {
            return ScrapeAttempt::Skipped;
        };

        match tokio::time::timeout(self.scrape_timeout(), client.scrape(url)).await {
            Ok(Ok(_payload)) => {
                debug!(url, "Scrape API returned content");
                ScrapeAttempt::Fetched
            }
            Ok(Err(e)) => {
                warn!(url, "Scrape API call failed: {e}");
                ScrapeAttempt::Failed(e.to_string())
            }
            Err(_) => {
                warn!(url, "Scrape API call timed out");
                ScrapeAttempt::Failed(format!(
                    "timed out after {}s",
                    self.scrape_timeout().as_secs()
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SearchService {
        SearchService::new(None, Config::default())
    }

    #[tokio::test]
    async fn test_one_report_per_platform_in_request_order() {
        let platforms: Vec<String> = ["linkedin", "bumeran", "zonajobs"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let outcome = service()
            .search_platforms(&platforms, &SearchParams::default())
            .await;

        assert_eq!(outcome.results.len(), 3);
        let targets: Vec<&str> = outcome.results.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(targets, ["linkedin", "bumeran", "zonajobs"]);
        for report in &outcome.results {
            assert_eq!(report.jobs.len(), report.total_found);
            assert_eq!(report.scrape, ScrapeStatus::Skipped);
        }
        assert_eq!(outcome.total_jobs, outcome.jobs.len());
    }

    #[tokio::test]
    async fn test_unknown_platform_fails_only_its_entry() {
        let platforms: Vec<String> = ["linkedin", "unknownplatform"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let outcome = service()
            .search_platforms(&platforms, &SearchParams::default())
            .await;

        assert_eq!(outcome.results.len(), 2);
        assert!(!outcome.success);

        let linkedin = &outcome.results[0];
        assert!(linkedin.success);
        assert!((3..=10).contains(&linkedin.jobs.len()));

        let unknown = &outcome.results[1];
        assert!(!unknown.success);
        assert!(unknown.jobs.is_empty());
        assert_eq!(unknown.total_found, 0);
        assert!(unknown.error.as_deref().unwrap().contains("not supported"));
    }

    #[tokio::test]
    async fn test_company_search_envelope() {
        let outcome = service()
            .search_companies(&[], &SearchParams::default())
            .await;

        assert!(outcome.success);
        assert_eq!(outcome.companies_scraped, 8);
        assert_eq!(outcome.results.len(), 8);
        assert_eq!(outcome.total_jobs, outcome.jobs.len());
        assert_eq!(outcome.data_source, "career-page-simulation");
        assert!(outcome.warnings.is_none());
        assert!(outcome.jobs.iter().all(|j| j.synthetic));
    }

    #[tokio::test]
    async fn test_company_search_industry_filter() {
        let params = SearchParams {
            industry: Some("Fintech".to_string()),
            ..SearchParams::default()
        };
        let outcome = service().search_companies(&[], &params).await;

        assert_eq!(outcome.companies_scraped, 3);
        assert!(
            outcome
                .results
                .iter()
                .all(|r| ["Ualá", "Nubank", "Stone"].contains(&r.target.as_str()))
        );
    }
}
