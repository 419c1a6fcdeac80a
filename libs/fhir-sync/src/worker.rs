//! Background sync task
//!
//! The host scheduler invokes [`run_sync`] on whatever trigger it owns and
//! interprets the ternary [`TaskOutcome`]; there is no framework base class
//! to subclass. Retry state lives entirely in the scheduler's
//! attempt-count input, so the engine itself stays stateless across runs.

use tracing::info;

use wolfram_models::ResourceEnvelope;

use crate::data_source::FhirDataSource;
use crate::download::UrlDownloadWorkManager;
use crate::synchronizer::{SyncOutcome, Synchronizer};

/// What the scheduler should do with a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    Retry,
    Failure,
}

/// Inputs for one scheduled run.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Seed queries, one per resource type to pull.
    pub queries: Vec<String>,
    /// Which attempt this is, supplied by the scheduler (0-based).
    pub run_attempt: u32,
    /// How many failed attempts the scheduler tolerates before giving up.
    pub max_retries: u32,
}

/// Run one full sync cycle over a fresh work manager.
pub async fn run_sync<S, F>(source: &S, ctx: &SyncContext, sink: F) -> SyncOutcome
where
    S: FhirDataSource,
    F: FnMut(Vec<ResourceEnvelope>),
{
    info!(
        queries = ctx.queries.len(),
        attempt = ctx.run_attempt,
        "starting sync run"
    );
    let mut manager = UrlDownloadWorkManager::new(ctx.queries.clone());
    Synchronizer::new(source).download(&mut manager, sink).await
}

/// Map a finished cycle onto the scheduler's ternary contract: errors are
/// retryable while the attempt budget lasts, fatal once it is spent.
pub fn task_outcome(outcome: &SyncOutcome, ctx: &SyncContext) -> TaskOutcome {
    match outcome {
        SyncOutcome::Success { .. } => TaskOutcome::Success,
        SyncOutcome::Error { .. } if ctx.run_attempt < ctx.max_retries => TaskOutcome::Retry,
        SyncOutcome::Error { .. } => TaskOutcome::Failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::error::{Error, ResourceSyncError};
    use crate::synchronizer::DownloadSummary;
    use wolfram_models::ResourceType;

    fn ctx(run_attempt: u32, max_retries: u32) -> SyncContext {
        SyncContext {
            queries: vec![],
            run_attempt,
            max_retries,
        }
    }

    fn failed_outcome() -> SyncOutcome {
        SyncOutcome::Error {
            completed: Utc::now(),
            summary: DownloadSummary::default(),
            errors: vec![ResourceSyncError {
                resource_type: ResourceType::Patient,
                source: Error::MalformedQuery("boom".to_string()),
            }],
        }
    }

    #[test]
    fn test_success_is_success_regardless_of_attempts() {
        let outcome = SyncOutcome::Success {
            completed: Utc::now(),
            summary: DownloadSummary::default(),
        };
        assert_eq!(task_outcome(&outcome, &ctx(99, 2)), TaskOutcome::Success);
    }

    #[test]
    fn test_error_retries_while_budget_lasts() {
        assert_eq!(task_outcome(&failed_outcome(), &ctx(0, 2)), TaskOutcome::Retry);
        assert_eq!(task_outcome(&failed_outcome(), &ctx(1, 2)), TaskOutcome::Retry);
    }

    #[test]
    fn test_error_is_fatal_once_budget_spent() {
        assert_eq!(task_outcome(&failed_outcome(), &ctx(2, 2)), TaskOutcome::Failure);
        assert_eq!(task_outcome(&failed_outcome(), &ctx(3, 2)), TaskOutcome::Failure);
    }
}
