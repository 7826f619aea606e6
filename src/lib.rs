pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use config::Config;

use cli::{Cli, Commands};
use services::SearchParams;
use state::SharedState;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let builder = PrometheusBuilder::new();
        let handle = builder
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let mut log_level = config.general.log_level.clone();
    if config.general.suppress_connection_errors {
        log_level.push_str(",reqwest::retry=off,hyper_util=off");
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if config.observability.loki_enabled {
        let url = url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let (layer, task) = tracing_loki::builder()
            .label("app", "leadarr")?
            .extra_field("env", "production")?
            .build_url(url)?;

        tokio::spawn(task);

        registry.with(layer).init();
        info!(
            "Loki logging initialized at {}",
            config.observability.loki_url
        );
    } else {
        registry.init();
    }

    match Cli::parse().command {
        Some(Commands::Serve) => run_daemon(config, prometheus_handle).await,

        Some(Commands::Search { query, location }) => {
            cmd_search(config, &query.join(" "), location).await
        }

        Some(Commands::Stats) => cmd_stats(config).await,

        Some(Commands::History { limit }) => cmd_history(config, limit).await,

        Some(Commands::Init) => {
            Config::create_default_if_missing()?;
            println!("✓ Config file created. Edit config.toml and run again.");
            Ok(())
        }

        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

async fn run_daemon(
    config: Config,
    prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
) -> anyhow::Result<()> {
    info!(
        "Leadarr v{} starting in daemon mode...",
        env!("CARGO_PKG_VERSION")
    );

    if !config.server.enabled {
        anyhow::bail!("server.enabled is false in config.toml");
    }

    let port = config.server.port;
    let state = api::create_app_state_from_config(config, prometheus_handle).await?;
    let app = api::router(state).await;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server_handle = tokio::spawn(async move {
        info!("🌐 Web Server running at http://0.0.0.0:{port}");
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {e}");
        }
    });

    info!("Daemon running. Press Ctrl+C to stop.");

    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {e}");
        }
    }

    server_handle.abort();
    info!("Daemon stopped");

    Ok(())
}

async fn cmd_search(config: Config, query: &str, location: Option<String>) -> anyhow::Result<()> {
    println!("Searching platforms for: {query}");

    let state = SharedState::new(config).await?;
    let params = SearchParams {
        keywords: Some(query.to_string()),
        location,
        ..SearchParams::default()
    };

    let platforms: Vec<String> = models::Platform::ALL.iter().map(ToString::to_string).collect();
    let outcome = state.search_service.search_platforms(&platforms, &params).await;

    println!();
    println!("Search Results:");
    println!("{:-<60}", "");

    for report in &outcome.results {
        let status = if report.success { "✓" } else { "✗" };
        println!("{status} {} ({} postings)", report.target, report.total_found);

        for job in report.jobs.iter().take(3) {
            println!("    {} @ {} ({})", job.title, job.company_name, job.location);
        }
        if report.jobs.len() > 3 {
            println!("    ... and {} more", report.jobs.len() - 3);
        }
    }

    println!();
    println!(
        "Total: {} postings across {} platforms (simulated data)",
        outcome.total_jobs,
        outcome.results.len()
    );

    Ok(())
}

async fn cmd_stats(config: Config) -> anyhow::Result<()> {
    let state = SharedState::new(config).await?;
    let stats = state.store.stats().await;

    println!("CRM Pipeline");
    println!("{:-<40}", "");
    println!("Companies: {}", stats.total_companies);
    println!("Contacts:  {}", stats.total_contacts);
    println!("Jobs:      {}", stats.total_jobs);
    println!("Leads:     {}", stats.total_leads);

    if !stats.leads_by_status.is_empty() {
        println!();
        println!("Leads by status:");
        for (status, count) in &stats.leads_by_status {
            println!("  {status:<12} {count}");
        }
    }

    if !stats.companies_by_industry.is_empty() {
        println!();
        println!("Companies by industry:");
        for (industry, count) in &stats.companies_by_industry {
            println!("  {industry:<24} {count}");
        }
    }

    Ok(())
}

async fn cmd_history(config: Config, limit: usize) -> anyhow::Result<()> {
    let state = SharedState::new(config).await?;
    let history = state.store.search_history().await;

    if history.is_empty() {
        println!("No searches recorded yet.");
        return Ok(());
    }

    println!("Recent Searches (last {}):", history.len().min(limit));
    println!("{:-<60}", "");

    for record in history.iter().take(limit) {
        let query = if record.query.is_empty() {
            "(no keywords)"
        } else {
            &record.query
        };
        println!("• {} ({} results)", query, record.results_count);
        println!("  Targets: {} | {}", record.platforms, record.created_at);
    }

    Ok(())
}
