//! End-to-end drive-loop tests over an in-memory transport.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use wolfram_models::ResourceType;
use wolfram_sync::{
    run_sync, task_outcome, DownloadRequest, Error, FhirDataSource, Result, SyncContext,
    SyncOutcome, Synchronizer, TaskOutcome, UrlDownloadWorkManager,
};

/// Serves canned pages by URL; any URL without a page fails like a dead
/// connection would.
struct FixtureSource {
    pages: HashMap<String, Value>,
}

impl FixtureSource {
    fn new(pages: Vec<(&str, Value)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(url, page)| (url.to_string(), page))
                .collect(),
        }
    }
}

#[async_trait]
impl FhirDataSource for FixtureSource {
    async fn download(&self, request: &DownloadRequest) -> Result<Value> {
        self.pages.get(request.url()).cloned().ok_or_else(|| {
            Error::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("no route to {}", request.url()),
            ))
        })
    }
}

fn patient(id: &str) -> Value {
    json!({"resourceType": "Patient", "id": id})
}

fn searchset(resources: Vec<Value>, next: Option<&str>) -> Value {
    let mut bundle = json!({
        "resourceType": "Bundle",
        "type": "searchset",
        "entry": resources.iter().map(|r| json!({"resource": r})).collect::<Vec<_>>()
    });
    if let Some(url) = next {
        bundle["link"] = json!([{"relation": "next", "url": url}]);
    }
    bundle
}

#[tokio::test]
async fn multi_page_result_set_drains_to_exhaustion() {
    let source = FixtureSource::new(vec![
        (
            "Patient?address-city=NAIROBI",
            searchset(
                vec![patient("a"), patient("b")],
                Some("http://fhir.example?_getpages=p2"),
            ),
        ),
        (
            "http://fhir.example?_getpages=p2",
            searchset(vec![patient("c")], None),
        ),
    ]);

    let mut manager =
        UrlDownloadWorkManager::new(vec!["Patient?address-city=NAIROBI".to_string()]);
    let mut seen = Vec::new();
    let outcome = Synchronizer::new(&source)
        .download(&mut manager, |resources| {
            seen.extend(resources.into_iter().map(|r| r.id.unwrap()))
        })
        .await;

    assert_eq!(seen, ["a", "b", "c"]);
    match outcome {
        SyncOutcome::Success { summary, .. } => {
            assert_eq!(summary.pages, 2);
            assert_eq!(summary.resources, 3);
        }
        SyncOutcome::Error { errors, .. } => panic!("unexpected errors: {errors:?}"),
    }
}

#[tokio::test]
async fn one_failing_seed_does_not_block_the_others() {
    let source = FixtureSource::new(vec![(
        "Patient?active=true",
        searchset(vec![patient("a")], None),
    )]);

    let mut manager = UrlDownloadWorkManager::new(vec![
        "Observation?status=final".to_string(),
        "Patient?active=true".to_string(),
    ]);
    let mut seen = Vec::new();
    let outcome = Synchronizer::new(&source)
        .download(&mut manager, |resources| {
            seen.extend(resources.into_iter().map(|r| r.id.unwrap()))
        })
        .await;

    // The Patient seed still downloaded even though Observation failed first.
    assert_eq!(seen, ["a"]);
    match outcome {
        SyncOutcome::Error {
            summary, errors, ..
        } => {
            assert_eq!(summary.pages, 1);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].resource_type, ResourceType::Observation);
            assert!(matches!(errors[0].source, Error::Transport(_)));
        }
        SyncOutcome::Success { .. } => panic!("expected a partial failure"),
    }
}

#[tokio::test]
async fn scheduled_run_maps_onto_ternary_outcome() {
    let source = FixtureSource::new(vec![(
        "Patient?active=true",
        searchset(vec![patient("a")], None),
    )]);

    let ctx = SyncContext {
        queries: vec!["Patient?active=true".to_string()],
        run_attempt: 0,
        max_retries: 2,
    };
    let outcome = run_sync(&source, &ctx, |_| {}).await;
    assert!(outcome.is_success());
    assert_eq!(task_outcome(&outcome, &ctx), TaskOutcome::Success);

    let failing_ctx = SyncContext {
        queries: vec!["Encounter?status=finished".to_string()],
        ..ctx.clone()
    };
    let outcome = run_sync(&source, &failing_ctx, |_| {}).await;
    assert_eq!(task_outcome(&outcome, &failing_ctx), TaskOutcome::Retry);

    let last_attempt = SyncContext {
        run_attempt: 2,
        ..failing_ctx.clone()
    };
    let outcome = run_sync(&source, &last_attempt, |_| {}).await;
    assert_eq!(task_outcome(&outcome, &last_attempt), TaskOutcome::Failure);
}
