//! Download work sequencing
//!
//! A work manager owns the pending-request queue for one sync cycle: it
//! hands out page requests one at a time, extracts the resources from each
//! page response, and feeds continuation links back into its own queue so
//! callers drain multi-page result sets without any pagination awareness.

use std::collections::{BTreeMap, VecDeque};

use serde_json::Value;
use tracing::{debug, warn};

use wolfram_models::{Bundle, ResourceEnvelope, ResourceType};

use crate::download::request::DownloadRequest;
use crate::error::{Error, Result};

/// Query directive asking the server for a match count instead of results.
const SUMMARY_COUNT: &str = "_summary=count";

/// The sequencing seam between the sync loop and whatever decides which
/// pages to fetch.
///
/// All methods are synchronous transformations over in-memory state; the
/// only blocking in a sync cycle happens at the transport boundary. A
/// manager is single-drainer by construction (`&mut self`) and is built
/// fresh for each cycle: once exhausted it stays exhausted.
pub trait DownloadWorkManager {
    /// Pop the next pending request, or `None` once the queue is drained.
    /// Safe to call repeatedly after exhaustion.
    fn next_request(&mut self) -> Option<DownloadRequest>;

    /// Pair each seed query with a count-only probe URL, keyed by resource
    /// type, for callers that want progress totals before downloading.
    ///
    /// A read-only projection of the seed configuration; the download queue
    /// is not consumed.
    fn summary_request_urls(&self) -> Result<BTreeMap<ResourceType, String>>;

    /// Extract the resources embedded in one page response, preserving
    /// entry order, and enqueue the page's continuation link when present.
    ///
    /// Pages that are not searchset bundles yield an empty collection;
    /// a malformed page is "nothing to extract", not an error.
    fn process_response(&mut self, page: &Value) -> Vec<ResourceEnvelope>;
}

/// [`DownloadWorkManager`] seeded from a fixed list of query strings.
#[derive(Debug)]
pub struct UrlDownloadWorkManager {
    queries: Vec<String>,
    queue: VecDeque<DownloadRequest>,
}

impl UrlDownloadWorkManager {
    pub fn new(queries: Vec<String>) -> Self {
        let queue = queries.iter().map(DownloadRequest::of).collect();
        Self { queries, queue }
    }

    /// Number of requests currently waiting, including enqueued
    /// continuation links.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl DownloadWorkManager for UrlDownloadWorkManager {
    fn next_request(&mut self) -> Option<DownloadRequest> {
        self.queue.pop_front()
    }

    fn summary_request_urls(&self) -> Result<BTreeMap<ResourceType, String>> {
        let mut urls = BTreeMap::new();
        for query in &self.queries {
            if query.trim().is_empty() {
                return Err(Error::MalformedQuery("empty query string".to_string()));
            }
            let type_code = query.split('?').next().unwrap_or_default();
            let resource_type = ResourceType::from_code(type_code)
                .ok_or_else(|| Error::UnknownResourceType(type_code.to_string()))?;
            let separator = if query.contains('?') { '&' } else { '?' };
            urls.insert(resource_type, format!("{query}{separator}{SUMMARY_COUNT}"));
        }
        Ok(urls)
    }

    fn process_response(&mut self, page: &Value) -> Vec<ResourceEnvelope> {
        let bundle = match Bundle::from_value(page) {
            Ok(bundle) => bundle,
            Err(err) => {
                debug!(error = %err, "page is not a bundle, nothing to extract");
                return Vec::new();
            }
        };
        if !bundle.is_searchset() {
            debug!(bundle_type = ?bundle.bundle_type, "ignoring non-searchset bundle");
            return Vec::new();
        }

        if let Some(next) = bundle.next_link() {
            debug!(url = next, "enqueueing continuation page");
            self.queue.push_back(DownloadRequest::of(next));
        }

        let mut resources = Vec::new();
        for entry in bundle.entries() {
            let Some(raw) = &entry.resource else {
                warn!("skipping bundle entry without a resource");
                continue;
            };
            match ResourceEnvelope::from_value(raw.clone()) {
                Ok(envelope) => resources.push(envelope),
                Err(err) => warn!(error = %err, "skipping unparsable bundle entry"),
            }
        }
        debug!(count = resources.len(), "extracted resources from page");
        resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn searchset(entries: Vec<Value>) -> Value {
        json!({
            "resourceType": "Bundle",
            "type": "searchset",
            "total": entries.len(),
            "entry": entries.iter().map(|r| json!({"resource": r})).collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_drains_seed_queries_in_fifo_order() {
        let mut manager = UrlDownloadWorkManager::new(vec![
            "Patient?address-city=NAIROBI".to_string(),
            "Observation?status=final".to_string(),
        ]);

        assert_eq!(
            manager.next_request().unwrap().url(),
            "Patient?address-city=NAIROBI"
        );
        assert_eq!(
            manager.next_request().unwrap().url(),
            "Observation?status=final"
        );
        assert_eq!(manager.next_request(), None);
        // Exhaustion is terminal and idempotent.
        assert_eq!(manager.next_request(), None);
    }

    #[test]
    fn test_exactly_n_requests_for_n_seeds() {
        let queries: Vec<String> = (0..5).map(|i| format!("Patient?_id={i}")).collect();
        let mut manager = UrlDownloadWorkManager::new(queries);

        for _ in 0..5 {
            assert!(manager.next_request().is_some());
        }
        assert!(manager.next_request().is_none());
    }

    #[test]
    fn test_summary_urls_append_count_directive() {
        let manager =
            UrlDownloadWorkManager::new(vec!["Patient?address-city=NAIROBI".to_string()]);

        let urls = manager.summary_request_urls().unwrap();
        assert_eq!(
            urls.get(&ResourceType::Patient).map(String::as_str),
            Some("Patient?address-city=NAIROBI&_summary=count")
        );
    }

    #[test]
    fn test_summary_urls_for_bare_type_query() {
        let manager = UrlDownloadWorkManager::new(vec!["Encounter".to_string()]);

        let urls = manager.summary_request_urls().unwrap();
        assert_eq!(
            urls.get(&ResourceType::Encounter).map(String::as_str),
            Some("Encounter?_summary=count")
        );
    }

    #[test]
    fn test_summary_urls_reject_unknown_type() {
        let manager = UrlDownloadWorkManager::new(vec!["Widget?x=y".to_string()]);

        let err = manager.summary_request_urls().unwrap_err();
        assert!(matches!(err, Error::UnknownResourceType(code) if code == "Widget"));
    }

    #[test]
    fn test_summary_urls_reject_empty_query() {
        let manager = UrlDownloadWorkManager::new(vec!["".to_string()]);

        let err = manager.summary_request_urls().unwrap_err();
        assert!(matches!(err, Error::MalformedQuery(_)));
    }

    #[test]
    fn test_summary_urls_leave_queue_untouched() {
        let manager = UrlDownloadWorkManager::new(vec![
            "Patient?active=true".to_string(),
            "Observation?status=final".to_string(),
        ]);

        manager.summary_request_urls().unwrap();
        assert_eq!(manager.pending(), 2);
    }

    #[test]
    fn test_process_response_extracts_entries_in_order() {
        let mut manager = UrlDownloadWorkManager::new(vec!["Patient".to_string()]);
        let page = searchset(vec![
            json!({"resourceType": "Patient", "id": "a"}),
            json!({"resourceType": "Patient", "id": "b"}),
            json!({"resourceType": "Patient", "id": "c"}),
        ]);

        let resources = manager.process_response(&page);
        let ids: Vec<_> = resources.iter().map(|r| r.id.as_deref().unwrap()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_process_response_ignores_non_searchset() {
        let mut manager = UrlDownloadWorkManager::new(vec!["Patient".to_string()]);
        let page = json!({
            "resourceType": "Bundle",
            "type": "transaction",
            "entry": [{"resource": {"resourceType": "Patient", "id": "a"}}]
        });

        assert!(manager.process_response(&page).is_empty());
    }

    #[test]
    fn test_process_response_ignores_non_bundle() {
        let mut manager = UrlDownloadWorkManager::new(vec!["Patient".to_string()]);

        assert!(manager
            .process_response(&json!({"resourceType": "Patient", "id": "a"}))
            .is_empty());
        assert!(manager.process_response(&json!("not even an object")).is_empty());
    }

    #[test]
    fn test_process_response_enqueues_next_link() {
        let mut manager = UrlDownloadWorkManager::new(vec!["Patient?_count=1".to_string()]);
        // Drain the seed first, as the sync loop would.
        manager.next_request().unwrap();
        assert!(manager.next_request().is_none());

        let mut page = searchset(vec![json!({"resourceType": "Patient", "id": "a"})]);
        page["link"] = json!([
            {"relation": "self", "url": "http://fhir.example/Patient?_count=1"},
            {"relation": "next", "url": "http://fhir.example?_getpages=xyz"}
        ]);
        manager.process_response(&page);

        let follow_up = manager.next_request().unwrap();
        assert_eq!(follow_up.url(), "http://fhir.example?_getpages=xyz");
        assert!(manager.next_request().is_none());
    }

    #[test]
    fn test_process_response_skips_unparsable_entries() {
        let mut manager = UrlDownloadWorkManager::new(vec!["Patient".to_string()]);
        let page = searchset(vec![
            json!({"resourceType": "Patient", "id": "a"}),
            json!({"no": "resourceType"}),
            json!({"resourceType": "Patient", "id": "b"}),
        ]);

        let resources = manager.process_response(&page);
        assert_eq!(resources.len(), 2);
    }
}
