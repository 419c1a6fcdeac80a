//! Extracted resource envelope

use serde_json::Value;

use crate::error::{Error, Result};
use crate::resource_type::ResourceType;

/// A single resource lifted out of a bundle page.
///
/// Carries the enumerated type tag and the logical id next to the raw JSON
/// body, so downstream consumers (the persistence boundary, search
/// indexing) can dispatch on the tag without re-inspecting the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceEnvelope {
    pub resource_type: ResourceType,
    pub id: Option<String>,
    pub content: Value,
}

impl ResourceEnvelope {
    /// Lift a raw JSON resource into an envelope.
    ///
    /// The `resourceType` field is required and must name a type this build
    /// knows about.
    pub fn from_value(content: Value) -> Result<Self> {
        let type_code = content
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MissingField("resourceType".to_string()))?;
        let resource_type = ResourceType::from_code(type_code)
            .ok_or_else(|| Error::UnknownResourceType(type_code.to_string()))?;
        let id = content.get("id").and_then(Value::as_str).map(str::to_string);

        Ok(Self {
            resource_type,
            id,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let envelope = ResourceEnvelope::from_value(json!({
            "resourceType": "Patient",
            "id": "123",
            "name": [{"family": "Chalmers"}]
        }))
        .unwrap();

        assert_eq!(envelope.resource_type, ResourceType::Patient);
        assert_eq!(envelope.id.as_deref(), Some("123"));
        assert_eq!(envelope.content["name"][0]["family"], "Chalmers");
    }

    #[test]
    fn test_from_value_without_id() {
        let envelope =
            ResourceEnvelope::from_value(json!({"resourceType": "Observation"})).unwrap();
        assert_eq!(envelope.resource_type, ResourceType::Observation);
        assert_eq!(envelope.id, None);
    }

    #[test]
    fn test_from_value_missing_type() {
        let err = ResourceEnvelope::from_value(json!({"id": "123"})).unwrap_err();
        assert!(matches!(err, Error::MissingField(field) if field == "resourceType"));
    }

    #[test]
    fn test_from_value_unknown_type() {
        let err = ResourceEnvelope::from_value(json!({"resourceType": "Widget"})).unwrap_err();
        assert!(matches!(err, Error::UnknownResourceType(code) if code == "Widget"));
    }
}
