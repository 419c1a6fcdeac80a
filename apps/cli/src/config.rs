//! Configuration file loading
//!
//! A `wolfram.toml` supplies the server connection and the seed queries:
//!
//! ```toml
//! [server]
//! base_url = "https://openmrs.example/ws/fhir2/R4"
//! username = "admin"
//! password = "Admin123"
//!
//! [sync]
//! queries = ["Patient?address-city=NAIROBI"]
//! max_retries = 2
//! ```
//!
//! Every missing required key is reported by name before loading fails, so
//! a misconfigured deployment sees the whole list at once instead of one
//! error per run.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

fn default_max_retries() -> u32 {
    2
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerSection,
    #[serde(default)]
    pub sync: SyncSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerSection {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SyncSection {
    #[serde(default)]
    pub queries: Vec<String>,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for SyncSection {
    fn default() -> Self {
        Self {
            queries: Vec::new(),
            max_retries: default_max_retries(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("config file {} can't be read", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("config file {} is not valid TOML", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> anyhow::Result<()> {
        let mut valid = true;
        for (key, value) in [
            ("server.base_url", &self.server.base_url),
            ("server.username", &self.server.username),
            ("server.password", &self.server.password),
        ] {
            if value.trim().is_empty() {
                tracing::error!("the key {key} is not set in {}", path.display());
                valid = false;
            }
        }
        if !valid {
            bail!("some required configuration keys are not set");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [server]
            base_url = "https://openmrs.example/ws/fhir2/R4"
            username = "admin"
            password = "Admin123"

            [sync]
            queries = ["Patient?address-city=NAIROBI"]
            max_retries = 5
            "#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.base_url, "https://openmrs.example/ws/fhir2/R4");
        assert_eq!(config.sync.queries, ["Patient?address-city=NAIROBI"]);
        assert_eq!(config.sync.max_retries, 5);
    }

    #[test]
    fn test_sync_section_is_optional() {
        let file = write_config(
            r#"
            [server]
            base_url = "https://fhir.example/R4"
            username = "u"
            password = "p"
            "#,
        );

        let config = Config::load(file.path()).unwrap();
        assert!(config.sync.queries.is_empty());
        assert_eq!(config.sync.max_retries, 2);
    }

    #[test]
    fn test_missing_credentials_fail_validation() {
        let file = write_config(
            r#"
            [server]
            base_url = "https://fhir.example/R4"
            "#,
        );

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(Config::load(Path::new("/definitely/not/here.toml")).is_err());
    }
}
