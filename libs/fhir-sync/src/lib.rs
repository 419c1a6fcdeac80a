//! Paginated FHIR download sequencing
//!
//! This crate drives a pull-based sync of an arbitrary set of seed queries
//! against a remote FHIR server. The moving parts:
//!
//! - [`UrlDownloadWorkManager`]: a FIFO queue of page requests seeded from
//!   query strings; parsing a page response feeds any continuation link
//!   back into the queue, so multi-page result sets drain without the
//!   caller ever seeing pagination.
//! - [`FhirDataSource`]: the transport seam. The engine never talks HTTP
//!   itself; see `wolfram-client` for the reqwest implementation.
//! - [`Synchronizer`] / [`run_sync`]: the drive loop, collecting failures
//!   per resource type ([`ResourceSyncError`]) so one broken seed query
//!   does not abort the batch.
//!
//! # Example
//!
//! ```rust,no_run
//! use wolfram_sync::{run_sync, task_outcome, SyncContext};
//! # async fn example(client: impl wolfram_sync::FhirDataSource) {
//! let ctx = SyncContext {
//!     queries: vec!["Patient?address-city=NAIROBI".to_string()],
//!     run_attempt: 0,
//!     max_retries: 2,
//! };
//! let outcome = run_sync(&client, &ctx, |resources| {
//!     // hand the page's resources to the persistence engine
//!     drop(resources);
//! })
//! .await;
//! let _next_step = task_outcome(&outcome, &ctx);
//! # }
//! ```

pub mod data_source;
pub mod download;
pub mod error;
pub mod synchronizer;
pub mod worker;

pub use data_source::FhirDataSource;
pub use download::{DownloadRequest, DownloadWorkManager, UrlDownloadWorkManager};
pub use error::{Error, ResourceSyncError, Result};
pub use synchronizer::{DownloadSummary, SyncOutcome, Synchronizer};
pub use worker::{run_sync, task_outcome, SyncContext, TaskOutcome};
