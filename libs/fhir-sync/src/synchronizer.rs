//! Sync cycle orchestration
//!
//! Drives one pull cycle: request the next page, hand the response to the
//! work manager, deliver the extracted resources to the caller's sink, and
//! repeat until the queue is exhausted. Failures are collected per resource
//! type so one broken seed never blocks the others.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use wolfram_models::{ResourceEnvelope, ResourceType};

use crate::data_source::FhirDataSource;
use crate::download::DownloadWorkManager;
use crate::error::ResourceSyncError;

/// Progress counters for one completed cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub pages: usize,
    pub resources: usize,
}

/// Outcome of one sync cycle, stamped at completion time.
///
/// `Error` still means the cycle ran to exhaustion: every queued request
/// was attempted and successfully downloaded pages were delivered to the
/// sink before the failures were reported.
#[derive(Debug)]
pub enum SyncOutcome {
    Success {
        completed: DateTime<Utc>,
        summary: DownloadSummary,
    },
    Error {
        completed: DateTime<Utc>,
        summary: DownloadSummary,
        errors: Vec<ResourceSyncError>,
    },
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Success { .. })
    }
}

/// Drives a [`DownloadWorkManager`] against a [`FhirDataSource`].
pub struct Synchronizer<'a, S> {
    source: &'a S,
}

impl<'a, S: FhirDataSource> Synchronizer<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Drain `manager` to exhaustion, feeding each page's extracted
    /// resources to `sink`.
    ///
    /// The sink is the persistence boundary: it receives the envelopes in
    /// page order and owns whatever storage or reconciliation happens next.
    /// A failed request is recorded against its resource type and the drain
    /// continues with the remaining queue.
    pub async fn download<M, F>(&self, manager: &mut M, mut sink: F) -> SyncOutcome
    where
        M: DownloadWorkManager + ?Sized,
        F: FnMut(Vec<ResourceEnvelope>),
    {
        let mut summary = DownloadSummary::default();
        let mut errors = Vec::new();

        while let Some(request) = manager.next_request() {
            debug!(url = request.url(), "requesting page");
            match self.source.download(&request).await {
                Ok(page) => {
                    let resources = manager.process_response(&page);
                    summary.pages += 1;
                    summary.resources += resources.len();
                    if !resources.is_empty() {
                        sink(resources);
                    }
                }
                Err(source) => {
                    let resource_type = resource_type_of(request.url());
                    warn!(
                        url = request.url(),
                        %resource_type,
                        error = %source,
                        "page download failed, continuing with remaining queue"
                    );
                    errors.push(ResourceSyncError {
                        resource_type,
                        source,
                    });
                }
            }
        }

        let completed = Utc::now();
        info!(
            pages = summary.pages,
            resources = summary.resources,
            failures = errors.len(),
            "sync cycle drained"
        );
        if errors.is_empty() {
            SyncOutcome::Success { completed, summary }
        } else {
            SyncOutcome::Error {
                completed,
                summary,
                errors,
            }
        }
    }
}

/// Best-effort resource type of a request URL: the path segment before the
/// query string. Continuation links that carry no type segment (e.g.
/// `_getpages` URLs) fall back to the base `Resource` kind.
fn resource_type_of(url: &str) -> ResourceType {
    let path = url.split('?').next().unwrap_or_default();
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    ResourceType::from_code(segment).unwrap_or(ResourceType::Resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_of_relative_query() {
        assert_eq!(
            resource_type_of("Patient?address-city=NAIROBI"),
            ResourceType::Patient
        );
    }

    #[test]
    fn test_resource_type_of_absolute_url() {
        assert_eq!(
            resource_type_of("https://fhir.example/openmrs/ws/fhir2/R4/Observation?status=final"),
            ResourceType::Observation
        );
    }

    #[test]
    fn test_resource_type_of_paging_url_falls_back() {
        assert_eq!(
            resource_type_of("https://fhir.example?_getpages=xyz&_getpagesoffset=10"),
            ResourceType::Resource
        );
    }
}
