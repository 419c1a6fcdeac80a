//! Server connection settings

use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How requests authenticate against the server.
///
/// This is credential plumbing only; token acquisition and renewal belong
/// to whoever hands the configuration in.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    None,
    Basic { username: String, password: String },
    Bearer(String),
}

/// Connection settings for one remote FHIR server.
#[derive(Debug, Clone)]
pub struct ServerConfiguration {
    pub base_url: String,
    pub auth: AuthMethod,
    pub timeout: Duration,
}

impl ServerConfiguration {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: AuthMethod::None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth = AuthMethod::Basic {
            username: username.into(),
            password: password.into(),
        };
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthMethod::Bearer(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfiguration::new("https://fhir.example/R4");
        assert_eq!(config.base_url, "https://fhir.example/R4");
        assert!(matches!(config.auth, AuthMethod::None));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_basic_auth_builder() {
        let config =
            ServerConfiguration::new("https://fhir.example/R4").with_basic_auth("admin", "secret");
        match config.auth {
            AuthMethod::Basic { username, password } => {
                assert_eq!(username, "admin");
                assert_eq!(password, "secret");
            }
            other => panic!("unexpected auth method: {other:?}"),
        }
    }
}
