//! Search parameter value kinds and definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a query value for a parameter is encoded and compared, per the FHIR
/// `SearchParamType` value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchParamType {
    Number,
    Date,
    String,
    Token,
    Reference,
    Composite,
    Quantity,
    Uri,
    Special,
}

impl SearchParamType {
    /// The FHIR code for this kind, e.g. `"token"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchParamType::Number => "number",
            SearchParamType::Date => "date",
            SearchParamType::String => "string",
            SearchParamType::Token => "token",
            SearchParamType::Reference => "reference",
            SearchParamType::Composite => "composite",
            SearchParamType::Quantity => "quantity",
            SearchParamType::Uri => "uri",
            SearchParamType::Special => "special",
        }
    }
}

impl fmt::Display for SearchParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable attribute of a resource type.
///
/// `path` is a FHIRPath expression locating the attribute within a resource
/// instance. Union expressions (`a | b`) and type-filtered expressions
/// (`.where(...)`, `as Type`) are stored verbatim; evaluating them is the
/// indexing layer's job, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParamDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: SearchParamType,
    pub path: String,
}

impl SearchParamDefinition {
    pub fn new(
        name: impl Into<String>,
        param_type: SearchParamType,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_serializes_to_fhir_codes() {
        let json = serde_json::to_string(&SearchParamType::Reference).unwrap();
        assert_eq!(json, "\"reference\"");
        assert_eq!(SearchParamType::Reference.to_string(), "reference");
    }

    #[test]
    fn test_definition_serde_shape() {
        let def = SearchParamDefinition::new("family", SearchParamType::String, "Patient.name.family");
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["name"], "family");
        assert_eq!(json["type"], "string");
        assert_eq!(json["path"], "Patient.name.family");
    }
}
