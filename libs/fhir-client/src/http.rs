//! reqwest-backed FHIR data source

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use wolfram_sync::{DownloadRequest, FhirDataSource};

use crate::config::{AuthMethod, ServerConfiguration};
use crate::error::{Error, Result};

const FHIR_JSON: &str = "application/fhir+json";

/// HTTP client bound to one FHIR server.
///
/// Implements [`FhirDataSource`], so it plugs straight into the sync
/// engine's drive loop.
#[derive(Debug)]
pub struct FhirHttpClient {
    client: Client,
    config: ServerConfiguration,
}

impl FhirHttpClient {
    pub fn new(config: ServerConfiguration) -> Result<Self> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(Error::InvalidBaseUrl(config.base_url));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Resolve a request URL against the configured base. Continuation
    /// links come back absolute from the server and pass through untouched.
    fn resolve_url(&self, request_url: &str) -> String {
        if request_url.starts_with("http://") || request_url.starts_with("https://") {
            request_url.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.base_url.trim_end_matches('/'),
                request_url.trim_start_matches('/')
            )
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let mut request = self.client.get(url).header(ACCEPT, FHIR_JSON);
        request = match &self.config.auth {
            AuthMethod::None => request,
            AuthMethod::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            AuthMethod::Bearer(token) => request.bearer_auth(token),
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl FhirDataSource for FhirHttpClient {
    async fn download(&self, request: &DownloadRequest) -> wolfram_sync::Result<Value> {
        let url = self.resolve_url(request.url());
        debug!(%url, "downloading page");
        self.get_json(&url).await.map_err(wolfram_sync::Error::transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> FhirHttpClient {
        FhirHttpClient::new(ServerConfiguration::new(base_url)).unwrap()
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = FhirHttpClient::new(ServerConfiguration::new("fhir.example/R4")).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_resolves_relative_query_against_base() {
        let client = client("https://fhir.example/openmrs/ws/fhir2/R4");
        assert_eq!(
            client.resolve_url("Patient?address-city=NAIROBI"),
            "https://fhir.example/openmrs/ws/fhir2/R4/Patient?address-city=NAIROBI"
        );
    }

    #[test]
    fn test_resolves_with_redundant_slashes() {
        let client = client("https://fhir.example/R4/");
        assert_eq!(
            client.resolve_url("/Patient?active=true"),
            "https://fhir.example/R4/Patient?active=true"
        );
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let client = client("https://fhir.example/R4");
        assert_eq!(
            client.resolve_url("http://other.example?_getpages=xyz"),
            "http://other.example?_getpages=xyz"
        );
    }
}
