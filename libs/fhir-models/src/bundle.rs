//! FHIR Bundle model
//!
//! Version-agnostic model for the bundle pages a search returns. Only the
//! fields the sync engine inspects are typed; everything else rides along
//! in `extensions`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Link relation marking the continuation page of a paginated result set,
/// per the IANA link-relation registry referenced by the FHIR spec.
pub const LINK_RELATION_NEXT: &str = "next";

/// FHIR Bundle resource
///
/// A container for a collection of resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Resource type - always "Bundle"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// Logical id of this artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Indicates the purpose of this bundle - how it was intended to be used
    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    /// When the bundle was assembled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// If search, the total number of matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    /// Links related to this Bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<BundleLink>>,

    /// Entry in the bundle - will have a resource or information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<BundleEntry>>,

    /// Additional content beyond core fields (extensions, version-specific fields)
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

fn default_resource_type() -> String {
    "Bundle".to_string()
}

/// Type of Bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    /// Document Bundle - A set of resources composing a single coherent document
    Document,
    /// Message Bundle - A message (application/response or application/request)
    Message,
    /// Transaction Bundle - A transaction - intended to be processed atomically
    Transaction,
    /// Transaction Response Bundle - Response to a transaction
    #[serde(rename = "transaction-response")]
    TransactionResponse,
    /// Batch Bundle - A set of resources collected for a specific purpose
    Batch,
    /// Batch Response Bundle - Response to a batch
    #[serde(rename = "batch-response")]
    BatchResponse,
    /// History Bundle - A list of resources with history
    History,
    /// Search Results Bundle - Results of a search operation
    Searchset,
    /// Collection Bundle - A set of resources collected for a specific purpose
    Collection,
}

/// Links related to this Bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleLink {
    /// See http://www.iana.org/assignments/link-relations/link-relations.xhtml#link-relations-1
    pub relation: String,

    /// Reference details for the link
    pub url: String,
}

/// Entry in the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    /// Full URL for the entry (relative to the base URL, or absolute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    /// A resource in this bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,

    /// Search-related information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<BundleEntrySearch>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Search-related information for a Bundle entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntrySearch {
    /// Why this entry is in the result set - whether it's included as a match or because of an _include requirement
    #[serde(rename = "mode", skip_serializing_if = "Option::is_none")]
    pub search_mode: Option<BundleEntrySearchMode>,

    /// Search ranking (between 0 and 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Additional content beyond core fields
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

/// Why an entry is in the result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleEntrySearchMode {
    /// This resource matched the search specification
    Match,
    /// This resource is returned because it is referred to from another resource in the search set
    Include,
    /// An OperationOutcome providing additional information about the processing of a search entry
    Outcome,
}

impl Bundle {
    /// Create a new Bundle with minimal required fields
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            resource_type: "Bundle".to_string(),
            id: None,
            bundle_type,
            timestamp: None,
            total: None,
            link: None,
            entry: None,
            extensions: HashMap::new(),
        }
    }

    /// Parse from JSON Value
    pub fn from_value(value: &Value) -> Result<Self> {
        let bundle: Bundle = serde_json::from_value(value.clone())?;
        if bundle.resource_type != "Bundle" {
            return Err(Error::InvalidResource(format!(
                "expected resourceType Bundle, got {}",
                bundle.resource_type
            )));
        }
        Ok(bundle)
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }

    /// Check if this is a search result bundle
    pub fn is_searchset(&self) -> bool {
        matches!(self.bundle_type, BundleType::Searchset)
    }

    /// URL of the continuation page, if this bundle carries one.
    ///
    /// Looks for the first link with the `next` relation; `self`, `prev`,
    /// and any other relations are ignored.
    pub fn next_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .find(|link| link.relation == LINK_RELATION_NEXT)
            .map(|link| link.url.as_str())
    }

    /// Get the number of entries in the bundle
    pub fn entry_count(&self) -> usize {
        self.entry.as_ref().map(|e| e.len()).unwrap_or(0)
    }

    /// Get entries as a slice
    pub fn entries(&self) -> &[BundleEntry] {
        self.entry.as_deref().unwrap_or(&[])
    }

    /// Add an entry to the bundle
    pub fn add_entry(&mut self, entry: BundleEntry) {
        self.entry.get_or_insert_with(Vec::new).push(entry);
    }

    /// Add a link to the bundle
    pub fn add_link(&mut self, relation: impl Into<String>, url: impl Into<String>) {
        self.link.get_or_insert_with(Vec::new).push(BundleLink {
            relation: relation.into(),
            url: url.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_searchset_bundle() {
        let json = json!({
            "resourceType": "Bundle",
            "id": "example-bundle",
            "type": "searchset",
            "total": 1,
            "entry": [
                {
                    "fullUrl": "http://example.org/fhir/Patient/123",
                    "resource": {
                        "resourceType": "Patient",
                        "id": "123"
                    },
                    "search": {
                        "mode": "match",
                        "score": 1.0
                    }
                }
            ]
        });

        let bundle: Bundle = serde_json::from_value(json).unwrap();
        assert_eq!(bundle.id, Some("example-bundle".to_string()));
        assert_eq!(bundle.bundle_type, BundleType::Searchset);
        assert_eq!(bundle.total, Some(1));
        assert_eq!(bundle.entry_count(), 1);
        assert!(bundle.is_searchset());
    }

    #[test]
    fn test_serialize_bundle() {
        let bundle = Bundle::new(BundleType::Searchset);
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["resourceType"], "Bundle");
        assert_eq!(json["type"], "searchset");
    }

    #[test]
    fn test_non_searchset_types() {
        let bundle = Bundle::new(BundleType::Transaction);
        assert!(!bundle.is_searchset());
        let bundle = Bundle::new(BundleType::History);
        assert!(!bundle.is_searchset());
    }

    #[test]
    fn test_next_link_found() {
        let mut bundle = Bundle::new(BundleType::Searchset);
        bundle.add_link("self", "http://example.org/fhir/Patient?_count=10");
        bundle.add_link("next", "http://example.org/fhir?_getpages=abc&_getpagesoffset=10");

        assert_eq!(
            bundle.next_link(),
            Some("http://example.org/fhir?_getpages=abc&_getpagesoffset=10")
        );
    }

    #[test]
    fn test_next_link_ignores_other_relations() {
        let mut bundle = Bundle::new(BundleType::Searchset);
        bundle.add_link("self", "http://example.org/fhir/Patient");
        bundle.add_link("prev", "http://example.org/fhir?_getpagesoffset=0");

        assert_eq!(bundle.next_link(), None);
    }

    #[test]
    fn test_next_link_without_links() {
        let bundle = Bundle::new(BundleType::Searchset);
        assert_eq!(bundle.next_link(), None);
    }

    #[test]
    fn test_from_value_rejects_non_bundle() {
        let json = json!({"resourceType": "Patient", "id": "123"});
        assert!(Bundle::from_value(&json).is_err());

        // Even with a plausible `type` field, a non-Bundle resourceType is
        // not a bundle.
        let json = json!({"resourceType": "Patient", "type": "searchset"});
        assert!(matches!(
            Bundle::from_value(&json),
            Err(Error::InvalidResource(_))
        ));
    }

    #[test]
    fn test_add_entry() {
        let mut bundle = Bundle::new(BundleType::Collection);
        let entry = BundleEntry {
            full_url: Some("http://example.org/fhir/Patient/123".to_string()),
            resource: Some(json!({"resourceType": "Patient", "id": "123"})),
            search: None,
            extensions: HashMap::new(),
        };

        bundle.add_entry(entry);
        assert_eq!(bundle.entry_count(), 1);
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let json = json!({
            "resourceType": "Bundle",
            "type": "searchset",
            "meta": {"lastUpdated": "2024-01-01T00:00:00Z"}
        });

        let bundle: Bundle = serde_json::from_value(json).unwrap();
        assert!(bundle.extensions.contains_key("meta"));
    }
}
