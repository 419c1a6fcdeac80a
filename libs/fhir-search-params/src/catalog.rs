//! Catalog lookup
//!
//! One immutable, process-wide table maps every resource-type name to its
//! declared search parameters. Lookup is total: unknown names still get the
//! six base parameters every resource supports.

use wolfram_models::ResourceType;

use crate::generated::RESOURCE_PARAMS;
use crate::types::{SearchParamDefinition, SearchParamType};

/// All search parameters defined for `resource_type`, in declaration order,
/// with the six base parameters (`_id`, `_lastUpdated`, `_profile`,
/// `_security`, `_source`, `_tag`) appended at the end.
///
/// Never fails: an unrecognized type name yields exactly the base
/// parameters. The result is deterministic and the underlying table is
/// `'static`, so concurrent callers need no synchronization.
pub fn search_params_for(resource_type: &str) -> Vec<SearchParamDefinition> {
    let mut params: Vec<SearchParamDefinition> = RESOURCE_PARAMS
        .get(resource_type)
        .map(|rows| {
            rows.iter()
                .map(|row| SearchParamDefinition::new(row.name, row.param_type, row.path))
                .collect()
        })
        .unwrap_or_default();
    params.extend(base_resource_params(resource_type));
    params
}

/// [`search_params_for`] keyed by the enumerated tag instead of a raw name,
/// for callers that already hold a parsed resource.
pub fn search_params_for_type(resource_type: ResourceType) -> Vec<SearchParamDefinition> {
    search_params_for(resource_type.as_str())
}

/// The six parameters every resource supports, with paths prefixed by the
/// queried type name (`Patient.id`, `Patient.meta.lastUpdated`, ...).
pub fn base_resource_params(resource_name: &str) -> Vec<SearchParamDefinition> {
    vec![
        SearchParamDefinition::new("_id", SearchParamType::Token, format!("{resource_name}.id")),
        SearchParamDefinition::new(
            "_lastUpdated",
            SearchParamType::Date,
            format!("{resource_name}.meta.lastUpdated"),
        ),
        SearchParamDefinition::new(
            "_profile",
            SearchParamType::Uri,
            format!("{resource_name}.meta.profile"),
        ),
        SearchParamDefinition::new(
            "_security",
            SearchParamType::Token,
            format!("{resource_name}.meta.security"),
        ),
        SearchParamDefinition::new(
            "_source",
            SearchParamType::Uri,
            format!("{resource_name}.meta.source"),
        ),
        SearchParamDefinition::new(
            "_tag",
            SearchParamType::Token,
            format!("{resource_name}.meta.tag"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_NAMES: [&str; 6] = [
        "_id",
        "_lastUpdated",
        "_profile",
        "_security",
        "_source",
        "_tag",
    ];

    #[test]
    fn test_patient_params() {
        let params = search_params_for("Patient");

        // 23 Patient-specific parameters plus the 6 base parameters.
        assert_eq!(params.len(), 29);

        let family = params.iter().find(|p| p.name == "family").unwrap();
        assert_eq!(family.param_type, SearchParamType::String);
        assert_eq!(family.path, "Patient.name.family");
    }

    #[test]
    fn test_base_params_are_appended_last() {
        for resource_type in ["Patient", "Observation", "Appointment", "Location"] {
            let params = search_params_for(resource_type);
            let tail: Vec<&str> = params[params.len() - 6..]
                .iter()
                .map(|p| p.name.as_str())
                .collect();
            assert_eq!(tail, BASE_NAMES, "base tail for {resource_type}");

            for param in &params[params.len() - 6..] {
                assert!(
                    param.path.starts_with(resource_type),
                    "{} path {} not prefixed with {resource_type}",
                    param.name,
                    param.path
                );
            }
        }
    }

    #[test]
    fn test_unknown_type_yields_only_base_params() {
        let params = search_params_for("NotARealResource");
        assert_eq!(params.len(), 6);
        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, BASE_NAMES);
        assert_eq!(params[0].path, "NotARealResource.id");
    }

    #[test]
    fn test_lookup_is_deterministic() {
        assert_eq!(search_params_for("Observation"), search_params_for("Observation"));
        assert_eq!(search_params_for("Nope"), search_params_for("Nope"));
    }

    #[test]
    fn test_lookup_by_tag_matches_lookup_by_name() {
        assert_eq!(
            search_params_for_type(ResourceType::MedicationRequest),
            search_params_for("MedicationRequest")
        );
    }

    #[test]
    fn test_union_paths_are_preserved_verbatim() {
        let params = search_params_for("EventDefinition");
        let context_quantity = params.iter().find(|p| p.name == "context-quantity").unwrap();
        assert_eq!(
            context_quantity.path,
            "(EventDefinition.useContext.value as Quantity) | (EventDefinition.useContext.value as Range)"
        );
    }

    #[test]
    fn test_every_catalog_type_has_a_resource_type_tag() {
        for key in crate::generated::RESOURCE_PARAMS.keys() {
            assert!(
                ResourceType::from_code(key).is_some(),
                "catalog type {key} has no ResourceType variant"
            );
        }
    }

    #[test]
    fn test_appointment_declaration_order() {
        let params = search_params_for("Appointment");
        // Declaration order from the upstream registry, not alphabetical by
        // accident: spot-check the first and last specific entries.
        assert_eq!(params[0].name, "actor");
        assert_eq!(params[params.len() - 7].name, "supporting-info");
    }
}
