pub mod export;
pub mod generator;
pub mod import;
pub mod roster;
pub mod search;

pub use import::{ImportService, ImportSummary};
pub use search::{
    CompanySearchOutcome, PlatformSearchOutcome, ScrapeStatus, SearchParams, SearchService,
    TargetReport,
};
