//! FHIR R4 resource type tags.
//!
//! One variant per resource kind known to the search-parameter catalog.
//! Variant names are exactly the wire codes, so serde derives map them
//! directly to and from JSON.

// @generated from the HL7 FHIR R4 resource list; do not edit by hand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kind of a FHIR resource, carried as an enumerated tag by every
/// parsed resource so dispatch never relies on runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Account,
    ActivityDefinition,
    AdverseEvent,
    AllergyIntolerance,
    Appointment,
    AppointmentResponse,
    AuditEvent,
    Basic,
    BodyStructure,
    Bundle,
    CapabilityStatement,
    CarePlan,
    CareTeam,
    ChargeItem,
    ChargeItemDefinition,
    Claim,
    ClaimResponse,
    ClinicalImpression,
    CodeSystem,
    Communication,
    CommunicationRequest,
    CompartmentDefinition,
    Composition,
    ConceptMap,
    Condition,
    Consent,
    Contract,
    Coverage,
    CoverageEligibilityRequest,
    CoverageEligibilityResponse,
    DetectedIssue,
    Device,
    DeviceDefinition,
    DeviceMetric,
    DeviceRequest,
    DeviceUseStatement,
    DiagnosticReport,
    DocumentManifest,
    DocumentReference,
    EffectEvidenceSynthesis,
    Encounter,
    Endpoint,
    EnrollmentRequest,
    EnrollmentResponse,
    EpisodeOfCare,
    EventDefinition,
    Evidence,
    EvidenceVariable,
    ExampleScenario,
    ExplanationOfBenefit,
    FamilyMemberHistory,
    Flag,
    Goal,
    GraphDefinition,
    Group,
    GuidanceResponse,
    HealthcareService,
    ImagingStudy,
    Immunization,
    ImmunizationEvaluation,
    ImmunizationRecommendation,
    ImplementationGuide,
    InsurancePlan,
    Invoice,
    Library,
    Linkage,
    List,
    Location,
    Measure,
    MeasureReport,
    Media,
    Medication,
    MedicationAdministration,
    MedicationDispense,
    MedicationKnowledge,
    MedicationRequest,
    MedicationStatement,
    MedicinalProduct,
    MedicinalProductAuthorization,
    MedicinalProductContraindication,
    MedicinalProductIndication,
    MedicinalProductInteraction,
    MedicinalProductPackaged,
    MedicinalProductPharmaceutical,
    MedicinalProductUndesirableEffect,
    MessageDefinition,
    MessageHeader,
    MolecularSequence,
    NamingSystem,
    NutritionOrder,
    Observation,
    OperationDefinition,
    Organization,
    OrganizationAffiliation,
    Patient,
    PaymentNotice,
    PaymentReconciliation,
    Person,
    PlanDefinition,
    Practitioner,
    PractitionerRole,
    Procedure,
    Provenance,
    Questionnaire,
    QuestionnaireResponse,
    RelatedPerson,
    RequestGroup,
    ResearchDefinition,
    ResearchElementDefinition,
    ResearchStudy,
    ResearchSubject,
    Resource,
    RiskAssessment,
    RiskEvidenceSynthesis,
    Schedule,
    SearchParameter,
    ServiceRequest,
    Slot,
    Specimen,
    SpecimenDefinition,
    StructureDefinition,
    StructureMap,
    Subscription,
    Substance,
    SubstanceSpecification,
    SupplyDelivery,
    SupplyRequest,
    Task,
    TerminologyCapabilities,
    TestReport,
    TestScript,
    ValueSet,
    VerificationResult,
    VisionPrescription,
}

impl ResourceType {
    /// The wire code for this resource type, e.g. `"Patient"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Account => "Account",
            ResourceType::ActivityDefinition => "ActivityDefinition",
            ResourceType::AdverseEvent => "AdverseEvent",
            ResourceType::AllergyIntolerance => "AllergyIntolerance",
            ResourceType::Appointment => "Appointment",
            ResourceType::AppointmentResponse => "AppointmentResponse",
            ResourceType::AuditEvent => "AuditEvent",
            ResourceType::Basic => "Basic",
            ResourceType::BodyStructure => "BodyStructure",
            ResourceType::Bundle => "Bundle",
            ResourceType::CapabilityStatement => "CapabilityStatement",
            ResourceType::CarePlan => "CarePlan",
            ResourceType::CareTeam => "CareTeam",
            ResourceType::ChargeItem => "ChargeItem",
            ResourceType::ChargeItemDefinition => "ChargeItemDefinition",
            ResourceType::Claim => "Claim",
            ResourceType::ClaimResponse => "ClaimResponse",
            ResourceType::ClinicalImpression => "ClinicalImpression",
            ResourceType::CodeSystem => "CodeSystem",
            ResourceType::Communication => "Communication",
            ResourceType::CommunicationRequest => "CommunicationRequest",
            ResourceType::CompartmentDefinition => "CompartmentDefinition",
            ResourceType::Composition => "Composition",
            ResourceType::ConceptMap => "ConceptMap",
            ResourceType::Condition => "Condition",
            ResourceType::Consent => "Consent",
            ResourceType::Contract => "Contract",
            ResourceType::Coverage => "Coverage",
            ResourceType::CoverageEligibilityRequest => "CoverageEligibilityRequest",
            ResourceType::CoverageEligibilityResponse => "CoverageEligibilityResponse",
            ResourceType::DetectedIssue => "DetectedIssue",
            ResourceType::Device => "Device",
            ResourceType::DeviceDefinition => "DeviceDefinition",
            ResourceType::DeviceMetric => "DeviceMetric",
            ResourceType::DeviceRequest => "DeviceRequest",
            ResourceType::DeviceUseStatement => "DeviceUseStatement",
            ResourceType::DiagnosticReport => "DiagnosticReport",
            ResourceType::DocumentManifest => "DocumentManifest",
            ResourceType::DocumentReference => "DocumentReference",
            ResourceType::EffectEvidenceSynthesis => "EffectEvidenceSynthesis",
            ResourceType::Encounter => "Encounter",
            ResourceType::Endpoint => "Endpoint",
            ResourceType::EnrollmentRequest => "EnrollmentRequest",
            ResourceType::EnrollmentResponse => "EnrollmentResponse",
            ResourceType::EpisodeOfCare => "EpisodeOfCare",
            ResourceType::EventDefinition => "EventDefinition",
            ResourceType::Evidence => "Evidence",
            ResourceType::EvidenceVariable => "EvidenceVariable",
            ResourceType::ExampleScenario => "ExampleScenario",
            ResourceType::ExplanationOfBenefit => "ExplanationOfBenefit",
            ResourceType::FamilyMemberHistory => "FamilyMemberHistory",
            ResourceType::Flag => "Flag",
            ResourceType::Goal => "Goal",
            ResourceType::GraphDefinition => "GraphDefinition",
            ResourceType::Group => "Group",
            ResourceType::GuidanceResponse => "GuidanceResponse",
            ResourceType::HealthcareService => "HealthcareService",
            ResourceType::ImagingStudy => "ImagingStudy",
            ResourceType::Immunization => "Immunization",
            ResourceType::ImmunizationEvaluation => "ImmunizationEvaluation",
            ResourceType::ImmunizationRecommendation => "ImmunizationRecommendation",
            ResourceType::ImplementationGuide => "ImplementationGuide",
            ResourceType::InsurancePlan => "InsurancePlan",
            ResourceType::Invoice => "Invoice",
            ResourceType::Library => "Library",
            ResourceType::Linkage => "Linkage",
            ResourceType::List => "List",
            ResourceType::Location => "Location",
            ResourceType::Measure => "Measure",
            ResourceType::MeasureReport => "MeasureReport",
            ResourceType::Media => "Media",
            ResourceType::Medication => "Medication",
            ResourceType::MedicationAdministration => "MedicationAdministration",
            ResourceType::MedicationDispense => "MedicationDispense",
            ResourceType::MedicationKnowledge => "MedicationKnowledge",
            ResourceType::MedicationRequest => "MedicationRequest",
            ResourceType::MedicationStatement => "MedicationStatement",
            ResourceType::MedicinalProduct => "MedicinalProduct",
            ResourceType::MedicinalProductAuthorization => "MedicinalProductAuthorization",
            ResourceType::MedicinalProductContraindication => "MedicinalProductContraindication",
            ResourceType::MedicinalProductIndication => "MedicinalProductIndication",
            ResourceType::MedicinalProductInteraction => "MedicinalProductInteraction",
            ResourceType::MedicinalProductPackaged => "MedicinalProductPackaged",
            ResourceType::MedicinalProductPharmaceutical => "MedicinalProductPharmaceutical",
            ResourceType::MedicinalProductUndesirableEffect => "MedicinalProductUndesirableEffect",
            ResourceType::MessageDefinition => "MessageDefinition",
            ResourceType::MessageHeader => "MessageHeader",
            ResourceType::MolecularSequence => "MolecularSequence",
            ResourceType::NamingSystem => "NamingSystem",
            ResourceType::NutritionOrder => "NutritionOrder",
            ResourceType::Observation => "Observation",
            ResourceType::OperationDefinition => "OperationDefinition",
            ResourceType::Organization => "Organization",
            ResourceType::OrganizationAffiliation => "OrganizationAffiliation",
            ResourceType::Patient => "Patient",
            ResourceType::PaymentNotice => "PaymentNotice",
            ResourceType::PaymentReconciliation => "PaymentReconciliation",
            ResourceType::Person => "Person",
            ResourceType::PlanDefinition => "PlanDefinition",
            ResourceType::Practitioner => "Practitioner",
            ResourceType::PractitionerRole => "PractitionerRole",
            ResourceType::Procedure => "Procedure",
            ResourceType::Provenance => "Provenance",
            ResourceType::Questionnaire => "Questionnaire",
            ResourceType::QuestionnaireResponse => "QuestionnaireResponse",
            ResourceType::RelatedPerson => "RelatedPerson",
            ResourceType::RequestGroup => "RequestGroup",
            ResourceType::ResearchDefinition => "ResearchDefinition",
            ResourceType::ResearchElementDefinition => "ResearchElementDefinition",
            ResourceType::ResearchStudy => "ResearchStudy",
            ResourceType::ResearchSubject => "ResearchSubject",
            ResourceType::Resource => "Resource",
            ResourceType::RiskAssessment => "RiskAssessment",
            ResourceType::RiskEvidenceSynthesis => "RiskEvidenceSynthesis",
            ResourceType::Schedule => "Schedule",
            ResourceType::SearchParameter => "SearchParameter",
            ResourceType::ServiceRequest => "ServiceRequest",
            ResourceType::Slot => "Slot",
            ResourceType::Specimen => "Specimen",
            ResourceType::SpecimenDefinition => "SpecimenDefinition",
            ResourceType::StructureDefinition => "StructureDefinition",
            ResourceType::StructureMap => "StructureMap",
            ResourceType::Subscription => "Subscription",
            ResourceType::Substance => "Substance",
            ResourceType::SubstanceSpecification => "SubstanceSpecification",
            ResourceType::SupplyDelivery => "SupplyDelivery",
            ResourceType::SupplyRequest => "SupplyRequest",
            ResourceType::Task => "Task",
            ResourceType::TerminologyCapabilities => "TerminologyCapabilities",
            ResourceType::TestReport => "TestReport",
            ResourceType::TestScript => "TestScript",
            ResourceType::ValueSet => "ValueSet",
            ResourceType::VerificationResult => "VerificationResult",
            ResourceType::VisionPrescription => "VisionPrescription",
        }
    }

    /// Resolve a wire code to its tag. Returns `None` for codes this
    /// build does not know about.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Account" => Some(ResourceType::Account),
            "ActivityDefinition" => Some(ResourceType::ActivityDefinition),
            "AdverseEvent" => Some(ResourceType::AdverseEvent),
            "AllergyIntolerance" => Some(ResourceType::AllergyIntolerance),
            "Appointment" => Some(ResourceType::Appointment),
            "AppointmentResponse" => Some(ResourceType::AppointmentResponse),
            "AuditEvent" => Some(ResourceType::AuditEvent),
            "Basic" => Some(ResourceType::Basic),
            "BodyStructure" => Some(ResourceType::BodyStructure),
            "Bundle" => Some(ResourceType::Bundle),
            "CapabilityStatement" => Some(ResourceType::CapabilityStatement),
            "CarePlan" => Some(ResourceType::CarePlan),
            "CareTeam" => Some(ResourceType::CareTeam),
            "ChargeItem" => Some(ResourceType::ChargeItem),
            "ChargeItemDefinition" => Some(ResourceType::ChargeItemDefinition),
            "Claim" => Some(ResourceType::Claim),
            "ClaimResponse" => Some(ResourceType::ClaimResponse),
            "ClinicalImpression" => Some(ResourceType::ClinicalImpression),
            "CodeSystem" => Some(ResourceType::CodeSystem),
            "Communication" => Some(ResourceType::Communication),
            "CommunicationRequest" => Some(ResourceType::CommunicationRequest),
            "CompartmentDefinition" => Some(ResourceType::CompartmentDefinition),
            "Composition" => Some(ResourceType::Composition),
            "ConceptMap" => Some(ResourceType::ConceptMap),
            "Condition" => Some(ResourceType::Condition),
            "Consent" => Some(ResourceType::Consent),
            "Contract" => Some(ResourceType::Contract),
            "Coverage" => Some(ResourceType::Coverage),
            "CoverageEligibilityRequest" => Some(ResourceType::CoverageEligibilityRequest),
            "CoverageEligibilityResponse" => Some(ResourceType::CoverageEligibilityResponse),
            "DetectedIssue" => Some(ResourceType::DetectedIssue),
            "Device" => Some(ResourceType::Device),
            "DeviceDefinition" => Some(ResourceType::DeviceDefinition),
            "DeviceMetric" => Some(ResourceType::DeviceMetric),
            "DeviceRequest" => Some(ResourceType::DeviceRequest),
            "DeviceUseStatement" => Some(ResourceType::DeviceUseStatement),
            "DiagnosticReport" => Some(ResourceType::DiagnosticReport),
            "DocumentManifest" => Some(ResourceType::DocumentManifest),
            "DocumentReference" => Some(ResourceType::DocumentReference),
            "EffectEvidenceSynthesis" => Some(ResourceType::EffectEvidenceSynthesis),
            "Encounter" => Some(ResourceType::Encounter),
            "Endpoint" => Some(ResourceType::Endpoint),
            "EnrollmentRequest" => Some(ResourceType::EnrollmentRequest),
            "EnrollmentResponse" => Some(ResourceType::EnrollmentResponse),
            "EpisodeOfCare" => Some(ResourceType::EpisodeOfCare),
            "EventDefinition" => Some(ResourceType::EventDefinition),
            "Evidence" => Some(ResourceType::Evidence),
            "EvidenceVariable" => Some(ResourceType::EvidenceVariable),
            "ExampleScenario" => Some(ResourceType::ExampleScenario),
            "ExplanationOfBenefit" => Some(ResourceType::ExplanationOfBenefit),
            "FamilyMemberHistory" => Some(ResourceType::FamilyMemberHistory),
            "Flag" => Some(ResourceType::Flag),
            "Goal" => Some(ResourceType::Goal),
            "GraphDefinition" => Some(ResourceType::GraphDefinition),
            "Group" => Some(ResourceType::Group),
            "GuidanceResponse" => Some(ResourceType::GuidanceResponse),
            "HealthcareService" => Some(ResourceType::HealthcareService),
            "ImagingStudy" => Some(ResourceType::ImagingStudy),
            "Immunization" => Some(ResourceType::Immunization),
            "ImmunizationEvaluation" => Some(ResourceType::ImmunizationEvaluation),
            "ImmunizationRecommendation" => Some(ResourceType::ImmunizationRecommendation),
            "ImplementationGuide" => Some(ResourceType::ImplementationGuide),
            "InsurancePlan" => Some(ResourceType::InsurancePlan),
            "Invoice" => Some(ResourceType::Invoice),
            "Library" => Some(ResourceType::Library),
            "Linkage" => Some(ResourceType::Linkage),
            "List" => Some(ResourceType::List),
            "Location" => Some(ResourceType::Location),
            "Measure" => Some(ResourceType::Measure),
            "MeasureReport" => Some(ResourceType::MeasureReport),
            "Media" => Some(ResourceType::Media),
            "Medication" => Some(ResourceType::Medication),
            "MedicationAdministration" => Some(ResourceType::MedicationAdministration),
            "MedicationDispense" => Some(ResourceType::MedicationDispense),
            "MedicationKnowledge" => Some(ResourceType::MedicationKnowledge),
            "MedicationRequest" => Some(ResourceType::MedicationRequest),
            "MedicationStatement" => Some(ResourceType::MedicationStatement),
            "MedicinalProduct" => Some(ResourceType::MedicinalProduct),
            "MedicinalProductAuthorization" => Some(ResourceType::MedicinalProductAuthorization),
            "MedicinalProductContraindication" => Some(ResourceType::MedicinalProductContraindication),
            "MedicinalProductIndication" => Some(ResourceType::MedicinalProductIndication),
            "MedicinalProductInteraction" => Some(ResourceType::MedicinalProductInteraction),
            "MedicinalProductPackaged" => Some(ResourceType::MedicinalProductPackaged),
            "MedicinalProductPharmaceutical" => Some(ResourceType::MedicinalProductPharmaceutical),
            "MedicinalProductUndesirableEffect" => Some(ResourceType::MedicinalProductUndesirableEffect),
            "MessageDefinition" => Some(ResourceType::MessageDefinition),
            "MessageHeader" => Some(ResourceType::MessageHeader),
            "MolecularSequence" => Some(ResourceType::MolecularSequence),
            "NamingSystem" => Some(ResourceType::NamingSystem),
            "NutritionOrder" => Some(ResourceType::NutritionOrder),
            "Observation" => Some(ResourceType::Observation),
            "OperationDefinition" => Some(ResourceType::OperationDefinition),
            "Organization" => Some(ResourceType::Organization),
            "OrganizationAffiliation" => Some(ResourceType::OrganizationAffiliation),
            "Patient" => Some(ResourceType::Patient),
            "PaymentNotice" => Some(ResourceType::PaymentNotice),
            "PaymentReconciliation" => Some(ResourceType::PaymentReconciliation),
            "Person" => Some(ResourceType::Person),
            "PlanDefinition" => Some(ResourceType::PlanDefinition),
            "Practitioner" => Some(ResourceType::Practitioner),
            "PractitionerRole" => Some(ResourceType::PractitionerRole),
            "Procedure" => Some(ResourceType::Procedure),
            "Provenance" => Some(ResourceType::Provenance),
            "Questionnaire" => Some(ResourceType::Questionnaire),
            "QuestionnaireResponse" => Some(ResourceType::QuestionnaireResponse),
            "RelatedPerson" => Some(ResourceType::RelatedPerson),
            "RequestGroup" => Some(ResourceType::RequestGroup),
            "ResearchDefinition" => Some(ResourceType::ResearchDefinition),
            "ResearchElementDefinition" => Some(ResourceType::ResearchElementDefinition),
            "ResearchStudy" => Some(ResourceType::ResearchStudy),
            "ResearchSubject" => Some(ResourceType::ResearchSubject),
            "Resource" => Some(ResourceType::Resource),
            "RiskAssessment" => Some(ResourceType::RiskAssessment),
            "RiskEvidenceSynthesis" => Some(ResourceType::RiskEvidenceSynthesis),
            "Schedule" => Some(ResourceType::Schedule),
            "SearchParameter" => Some(ResourceType::SearchParameter),
            "ServiceRequest" => Some(ResourceType::ServiceRequest),
            "Slot" => Some(ResourceType::Slot),
            "Specimen" => Some(ResourceType::Specimen),
            "SpecimenDefinition" => Some(ResourceType::SpecimenDefinition),
            "StructureDefinition" => Some(ResourceType::StructureDefinition),
            "StructureMap" => Some(ResourceType::StructureMap),
            "Subscription" => Some(ResourceType::Subscription),
            "Substance" => Some(ResourceType::Substance),
            "SubstanceSpecification" => Some(ResourceType::SubstanceSpecification),
            "SupplyDelivery" => Some(ResourceType::SupplyDelivery),
            "SupplyRequest" => Some(ResourceType::SupplyRequest),
            "Task" => Some(ResourceType::Task),
            "TerminologyCapabilities" => Some(ResourceType::TerminologyCapabilities),
            "TestReport" => Some(ResourceType::TestReport),
            "TestScript" => Some(ResourceType::TestScript),
            "ValueSet" => Some(ResourceType::ValueSet),
            "VerificationResult" => Some(ResourceType::VerificationResult),
            "VisionPrescription" => Some(ResourceType::VisionPrescription),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::from_code(s).ok_or_else(|| Error::UnknownResourceType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        assert_eq!(ResourceType::Patient.as_str(), "Patient");
        assert_eq!(ResourceType::from_code("Patient"), Some(ResourceType::Patient));
        assert_eq!(ResourceType::from_code("NotAResource"), None);
    }

    #[test]
    fn serde_uses_wire_codes() {
        let json = serde_json::to_string(&ResourceType::MedicationRequest).unwrap();
        assert_eq!(json, "\"MedicationRequest\"");
        let back: ResourceType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ResourceType::MedicationRequest);
    }

    #[test]
    fn from_str_reports_unknown_codes() {
        let err = "Widget".parse::<ResourceType>().unwrap_err();
        assert!(matches!(err, Error::UnknownResourceType(code) if code == "Widget"));
    }
}
