//! FHIR search parameter catalog
//!
//! An immutable, process-wide mapping from resource-type name to the
//! ordered list of search parameters defined for it, generated from the
//! HL7 FHIR R4 registry. One flat table keyed by type name stands in for a
//! ~140-way class hierarchy: the per-type variation is data, not code.
//!
//! The catalog stores FHIRPath expressions verbatim and never evaluates
//! them; the persistence/indexing layer that consumes a lookup decides what
//! to do with each path.
//!
//! # Example
//!
//! ```rust
//! use wolfram_search_params::search_params_for;
//!
//! let params = search_params_for("Patient");
//! assert!(params.iter().any(|p| p.name == "family"));
//! // Every list ends with the six base parameters common to all resources.
//! assert_eq!(params.last().unwrap().name, "_tag");
//! ```

mod catalog;
mod generated;
mod types;

pub use catalog::{base_resource_params, search_params_for, search_params_for_type};
pub use types::{SearchParamDefinition, SearchParamType};
