//! FHIR data models
//!
//! This crate provides the data structures the wolfram sync engine moves
//! around: the version-agnostic [`Bundle`] model for paginated search
//! results, the [`ResourceType`] tag enumerating every resource kind the
//! engine knows about, and the [`ResourceEnvelope`] unit handed to the
//! persistence boundary.
//!
//! # Design Philosophy
//!
//! - **Version-agnostic core**: common fields present across FHIR R4, R4B,
//!   and R5
//! - **Tagged dispatch**: every parsed resource carries an enumerated
//!   [`ResourceType`], so routing never relies on runtime type inspection
//! - **Flexible**: resource bodies stay raw `serde_json::Value`s; this
//!   crate does not model the ~140 resource schemas
//!
//! # Example
//!
//! ```rust
//! use wolfram_models::Bundle;
//! use serde_json::json;
//!
//! let page = json!({
//!     "resourceType": "Bundle",
//!     "type": "searchset",
//!     "total": 1,
//!     "entry": [{"resource": {"resourceType": "Patient", "id": "123"}}]
//! });
//!
//! let bundle = Bundle::from_value(&page).unwrap();
//! assert!(bundle.is_searchset());
//! assert_eq!(bundle.entry_count(), 1);
//! ```

pub mod bundle;
pub mod error;
pub mod resource;
pub mod resource_type;

// Re-export commonly used types
pub use bundle::*;
pub use error::{Error, Result};
pub use resource::*;
pub use resource_type::ResourceType;
