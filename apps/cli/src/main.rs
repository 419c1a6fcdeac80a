//! fhir-sync - pull resources from a remote FHIR server
//!
//! Runs one sync cycle per invocation: seeds the download queue from the
//! configured queries, drains it page by page, and reports per-type
//! failures without aborting the batch. A host scheduler (cron, systemd
//! timer) re-invokes the binary and reads the exit code: 0 on success,
//! 75 (EX_TEMPFAIL) when a retry is worthwhile, 1 when the attempt budget
//! is spent.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wolfram_client::{FhirHttpClient, ServerConfiguration};
use wolfram_sync::{
    run_sync, task_outcome, DownloadWorkManager, SyncContext, SyncOutcome, TaskOutcome,
    UrlDownloadWorkManager,
};

use crate::config::Config;

const EXIT_RETRY: u8 = 75;

#[derive(Debug, Parser)]
#[command(name = "fhir-sync", version, about = "Pull resources from a remote FHIR server")]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = "wolfram.toml")]
    config: PathBuf,

    /// Seed query, e.g. "Patient?address-city=NAIROBI". Repeatable;
    /// overrides the queries from the config file.
    #[arg(long = "query")]
    queries: Vec<String>,

    /// Print the per-type `_summary=count` probe URLs and exit without
    /// downloading anything.
    #[arg(long)]
    summary_only: bool,

    /// Print the search parameters defined for a resource type and exit,
    /// e.g. `--describe Patient`.
    #[arg(long, value_name = "TYPE")]
    describe: Option<String>,

    /// Attempt number supplied by the scheduler (0-based).
    #[arg(long, default_value_t = 0)]
    run_attempt: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()).await {
        Ok(outcome) => match outcome {
            TaskOutcome::Success => ExitCode::SUCCESS,
            TaskOutcome::Retry => ExitCode::from(EXIT_RETRY),
            TaskOutcome::Failure => ExitCode::FAILURE,
        },
        Err(err) => {
            tracing::error!("fatal error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<TaskOutcome> {
    if let Some(resource_type) = &args.describe {
        for param in wolfram_search_params::search_params_for(resource_type) {
            println!("{}\t{}\t{}", param.name, param.param_type, param.path);
        }
        return Ok(TaskOutcome::Success);
    }

    let config = Config::load(&args.config).context("failed to load configuration")?;

    let queries = if args.queries.is_empty() {
        config.sync.queries.clone()
    } else {
        args.queries.clone()
    };
    if queries.is_empty() {
        anyhow::bail!("no seed queries given; set [sync] queries or pass --query");
    }

    let server = ServerConfiguration::new(&config.server.base_url)
        .with_basic_auth(&config.server.username, &config.server.password);
    let client = FhirHttpClient::new(server).context("failed to create HTTP client")?;

    if args.summary_only {
        let manager = UrlDownloadWorkManager::new(queries);
        for (resource_type, url) in manager.summary_request_urls()? {
            println!("{resource_type}: {url}");
        }
        return Ok(TaskOutcome::Success);
    }

    let ctx = SyncContext {
        queries,
        run_attempt: args.run_attempt,
        max_retries: config.sync.max_retries,
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        server = config.server.base_url,
        "starting sync"
    );

    // The sink is where a persistence engine would take over; the CLI just
    // counts what came down.
    let mut total = 0usize;
    let outcome = run_sync(&client, &ctx, |resources| {
        for resource in &resources {
            tracing::debug!(
                resource_type = %resource.resource_type,
                id = resource.id.as_deref().unwrap_or("-"),
                "downloaded resource"
            );
        }
        total += resources.len();
    })
    .await;

    match &outcome {
        SyncOutcome::Success { summary, .. } => {
            tracing::info!(
                pages = summary.pages,
                resources = summary.resources,
                "sync completed"
            );
        }
        SyncOutcome::Error {
            summary, errors, ..
        } => {
            tracing::warn!(
                pages = summary.pages,
                resources = summary.resources,
                failures = errors.len(),
                "sync completed with failures"
            );
            for error in errors {
                tracing::error!(resource_type = %error.resource_type, error = %error, "resource sync failed");
            }
        }
    }
    tracing::info!(total, "resources handed to sink");

    Ok(task_outcome(&outcome, &ctx))
}

/// Environment-variable driven logging, human-readable output.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fhir_sync=info,wolfram_sync=info,wolfram_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
