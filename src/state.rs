use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clients::ScrapeClient;
use crate::config::Config;
use crate::db::Store;
use crate::services::{ImportService, SearchService};
use crate::storage::JsonFileBackend;

/// Build a shared HTTP client with reasonable defaults for API calls.
/// Reused across HTTP-based services to enable connection pooling.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent("Leadarr/1.0")
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub search_service: Arc<SearchService>,

    pub import_service: Arc<ImportService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let backend = Arc::new(JsonFileBackend::new(config.general.data_dir.clone()));
        let store = Store::load(backend).await;

        let scrape = if config.scraper.enabled {
            let http_client =
                build_shared_http_client(config.scraper.request_timeout_seconds.into())?;
            Some(Arc::new(ScrapeClient::with_shared_client(
                http_client,
                config.scraper.base_url.clone(),
                config.scraper.api_key.clone(),
            )))
        } else {
            None
        };

        let search_service = Arc::new(SearchService::new(scrape, config.clone()));
        let import_service = Arc::new(ImportService::new(store.clone()));

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            store,
            search_service,
            import_service,
        })
    }

    pub async fn config(&self) -> Config {
        self.config.read().await.clone()
    }
}
