//! FHIR HTTP client
//!
//! The transport half of the wolfram sync engine: a reqwest-backed
//! [`FhirHttpClient`] that implements `wolfram-sync`'s `FhirDataSource`
//! seam. The engine decides *what* to fetch; this crate owns the *how*:
//! connections, TLS, timeouts, and credentials.
//!
//! # Example
//!
//! ```rust,no_run
//! use wolfram_client::{FhirHttpClient, ServerConfiguration};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfiguration::new("https://openmrs.example/ws/fhir2/R4")
//!     .with_basic_auth("admin", "Admin123");
//! let client = FhirHttpClient::new(config)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::{AuthMethod, ServerConfiguration};
pub use error::{Error, Result};
pub use http::FhirHttpClient;
