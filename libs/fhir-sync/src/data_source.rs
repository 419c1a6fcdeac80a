//! Transport boundary

use async_trait::async_trait;
use serde_json::Value;

use crate::download::DownloadRequest;
use crate::error::Result;

/// The narrow seam to whatever executes HTTP for the sync loop.
///
/// Implementations own connections, authentication, retries at the socket
/// level, and TLS; the sync engine hands them one request at a time and
/// expects the parsed JSON body back. Failures surface as
/// [`Error::Transport`](crate::Error::Transport) and are handled by the
/// orchestrator, never inside the sequencer.
#[async_trait]
pub trait FhirDataSource: Send + Sync {
    async fn download(&self, request: &DownloadRequest) -> Result<Value>;
}
