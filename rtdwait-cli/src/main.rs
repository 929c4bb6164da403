//! rtdwait
//!
//! Blocks a release workflow until ReadTheDocs has finished every build for
//! a commit.
//!
//! Architecture:
//! - Configuration: CLI flags with environment fallbacks
//! - Repository: the single HTTP call to the builds endpoint
//! - Poller: sleep/query loop bounded by a deadline
//! - Context: logger and failure reporter handed to the poller
//!
//! Exits 0 once nothing is pending and 1 on an API failure or timeout.

mod config;
mod context;
mod error;
mod poller;
mod repository;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::context::{Logger, TracingLogger, reporter_from_env};
use crate::poller::BuildPoller;
use crate::repository::HttpBuildSource;
use rtdwait_client::{DEFAULT_BASE_URL, ReadTheDocsClient};

/// Event targets carry the binary's crate name (`rtdwait`)
const DEFAULT_LOG_FILTER: &str = "rtdwait=info,rtdwait_client=info";

#[derive(Parser)]
#[command(name = "rtdwait")]
#[command(about = "Wait for ReadTheDocs builds of a commit to finish", long_about = None)]
#[command(version)]
struct Cli {
    /// ReadTheDocs project slug
    #[arg(long, env = "RTD_PROJECT")]
    project: String,

    /// Commit whose builds to wait for
    #[arg(long, env = "GITHUB_SHA")]
    commit: String,

    /// ReadTheDocs API token
    #[arg(long, env = "RTD_API_TOKEN", hide_env_values = true)]
    token: String,

    /// Base URL of the ReadTheDocs instance
    #[arg(long, env = "RTD_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Seconds to sleep before each poll
    #[arg(long, env = "RTD_POLL_INTERVAL", default_value_t = 10)]
    poll_interval: u64,

    /// Total seconds to wait before giving up
    #[arg(long, env = "RTD_TIMEOUT", default_value_t = 900)]
    timeout: u64,

    /// Seconds a single API request may take
    #[arg(long, env = "RTD_REQUEST_TIMEOUT", default_value_t = 30)]
    request_timeout: u64,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            api_url: cli.api_url,
            poll_interval: Duration::from_secs(cli.poll_interval),
            timeout: Duration::from_secs(cli.timeout),
            request_timeout: Duration::from_secs(cli.request_timeout),
            ..Config::new(cli.project, cli.commit, cli.token.trim())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let reporter = reporter_from_env();
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

    match run(cli.into(), logger).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.fail(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config, logger: Arc<dyn Logger>) -> Result<()> {
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .user_agent(concat!("rtdwait/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    let client = ReadTheDocsClient::with_client(&config.api_url, &config.token, http_client);
    let source = Arc::new(HttpBuildSource::new(client));

    let poller = BuildPoller::new(config, source, logger);
    let summary = poller.run().await?;
    debug!(
        "Finished after {} request(s) in {:?}",
        summary.requests, summary.elapsed
    );

    Ok(())
}
