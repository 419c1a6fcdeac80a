// @generated from the HL7 FHIR R4 search parameter registry
// (https://hl7.org/fhir/R4/searchparameter-registry.html).
// Do not edit by hand; regenerate when the upstream definitions change.

use phf::phf_map;

use crate::types::SearchParamType;

/// One row of the static per-type table. Paths are opaque FHIRPath
/// expressions, preserved verbatim from the upstream definitions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParamRow {
    pub(crate) name: &'static str,
    pub(crate) param_type: SearchParamType,
    pub(crate) path: &'static str,
}

const fn row(
    name: &'static str,
    param_type: SearchParamType,
    path: &'static str,
) -> ParamRow {
    ParamRow { name, param_type, path }
}

const APPOINTMENT: &[ParamRow] = &[
    row("actor", SearchParamType::Reference, "Appointment.participant.actor"),
    row("appointment-type", SearchParamType::Token, "Appointment.appointmentType"),
    row("based-on", SearchParamType::Reference, "Appointment.basedOn"),
    row("date", SearchParamType::Date, "Appointment.start"),
    row("identifier", SearchParamType::Token, "Appointment.identifier"),
    row("location", SearchParamType::Reference, "Appointment.participant.actor.where(resolve() is Location)"),
    row("part-status", SearchParamType::Token, "Appointment.participant.status"),
    row("patient", SearchParamType::Reference, "Appointment.participant.actor.where(resolve() is Patient)"),
    row("practitioner", SearchParamType::Reference, "Appointment.participant.actor.where(resolve() is Practitioner)"),
    row("reason-code", SearchParamType::Token, "Appointment.reasonCode"),
    row("reason-reference", SearchParamType::Reference, "Appointment.reasonReference"),
    row("service-category", SearchParamType::Token, "Appointment.serviceCategory"),
    row("service-type", SearchParamType::Token, "Appointment.serviceType"),
    row("slot", SearchParamType::Reference, "Appointment.slot"),
    row("specialty", SearchParamType::Token, "Appointment.specialty"),
    row("status", SearchParamType::Token, "Appointment.status"),
    row("supporting-info", SearchParamType::Reference, "Appointment.supportingInformation"),
];

const ACCOUNT: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "Account.identifier"),
    row("name", SearchParamType::String, "Account.name"),
    row("owner", SearchParamType::Reference, "Account.owner"),
    row("patient", SearchParamType::Reference, "Account.subject.where(resolve() is Patient)"),
    row("period", SearchParamType::Date, "Account.servicePeriod"),
    row("status", SearchParamType::Token, "Account.status"),
    row("subject", SearchParamType::Reference, "Account.subject"),
    row("type", SearchParamType::Token, "Account.type"),
];

const INVOICE: &[ParamRow] = &[
    row("account", SearchParamType::Reference, "Invoice.account"),
    row("date", SearchParamType::Date, "Invoice.date"),
    row("identifier", SearchParamType::Token, "Invoice.identifier"),
    row("issuer", SearchParamType::Reference, "Invoice.issuer"),
    row("participant", SearchParamType::Reference, "Invoice.participant.actor"),
    row("participant-role", SearchParamType::Token, "Invoice.participant.role"),
    row("patient", SearchParamType::Reference, "Invoice.subject.where(resolve() is Patient)"),
    row("recipient", SearchParamType::Reference, "Invoice.recipient"),
    row("status", SearchParamType::Token, "Invoice.status"),
    row("subject", SearchParamType::Reference, "Invoice.subject"),
    row("totalgross", SearchParamType::Quantity, "Invoice.totalGross"),
    row("totalnet", SearchParamType::Quantity, "Invoice.totalNet"),
    row("type", SearchParamType::Token, "Invoice.type"),
];

const EVENT_DEFINITION: &[ParamRow] = &[
    row("composed-of", SearchParamType::Reference, "EventDefinition.relatedArtifact.where(type='composed-of').resource"),
    row("context", SearchParamType::Token, "(EventDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(EventDefinition.useContext.value as Quantity) | (EventDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "EventDefinition.useContext.code"),
    row("date", SearchParamType::Date, "EventDefinition.date"),
    row("depends-on", SearchParamType::Reference, "EventDefinition.relatedArtifact.where(type='depends-on').resource"),
    row("derived-from", SearchParamType::Reference, "EventDefinition.relatedArtifact.where(type='derived-from').resource"),
    row("description", SearchParamType::String, "EventDefinition.description"),
    row("effective", SearchParamType::Date, "EventDefinition.effectivePeriod"),
    row("identifier", SearchParamType::Token, "EventDefinition.identifier"),
    row("jurisdiction", SearchParamType::Token, "EventDefinition.jurisdiction"),
    row("name", SearchParamType::String, "EventDefinition.name"),
    row("predecessor", SearchParamType::Reference, "EventDefinition.relatedArtifact.where(type='predecessor').resource"),
    row("publisher", SearchParamType::String, "EventDefinition.publisher"),
    row("status", SearchParamType::Token, "EventDefinition.status"),
    row("successor", SearchParamType::Reference, "EventDefinition.relatedArtifact.where(type='successor').resource"),
    row("title", SearchParamType::String, "EventDefinition.title"),
    row("topic", SearchParamType::Token, "EventDefinition.topic"),
    row("url", SearchParamType::Uri, "EventDefinition.url"),
    row("version", SearchParamType::Token, "EventDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "EventDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "EventDefinition.useContext"),
];

const DOCUMENT_MANIFEST: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "DocumentManifest.masterIdentifier | DocumentManifest.identifier"),
    row("patient", SearchParamType::Reference, "DocumentManifest.subject.where(resolve() is Patient)"),
    row("type", SearchParamType::Token, "DocumentManifest.type"),
    row("author", SearchParamType::Reference, "DocumentManifest.author"),
    row("created", SearchParamType::Date, "DocumentManifest.created"),
    row("description", SearchParamType::String, "DocumentManifest.description"),
    row("item", SearchParamType::Reference, "DocumentManifest.content"),
    row("recipient", SearchParamType::Reference, "DocumentManifest.recipient"),
    row("related-id", SearchParamType::Token, "DocumentManifest.related.identifier"),
    row("related-ref", SearchParamType::Reference, "DocumentManifest.related.ref"),
    row("source", SearchParamType::Uri, "DocumentManifest.source"),
    row("status", SearchParamType::Token, "DocumentManifest.status"),
    row("subject", SearchParamType::Reference, "DocumentManifest.subject"),
];

const MESSAGE_DEFINITION: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(MessageDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(MessageDefinition.useContext.value as Quantity) | (MessageDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "MessageDefinition.useContext.code"),
    row("date", SearchParamType::Date, "MessageDefinition.date"),
    row("description", SearchParamType::String, "MessageDefinition.description"),
    row("jurisdiction", SearchParamType::Token, "MessageDefinition.jurisdiction"),
    row("name", SearchParamType::String, "MessageDefinition.name"),
    row("publisher", SearchParamType::String, "MessageDefinition.publisher"),
    row("status", SearchParamType::Token, "MessageDefinition.status"),
    row("title", SearchParamType::String, "MessageDefinition.title"),
    row("url", SearchParamType::Uri, "MessageDefinition.url"),
    row("version", SearchParamType::Token, "MessageDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "MessageDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "MessageDefinition.useContext"),
    row("identifier", SearchParamType::Token, "MessageDefinition.identifier"),
    row("category", SearchParamType::Token, "MessageDefinition.category"),
    row("event", SearchParamType::Token, "MessageDefinition.event"),
    row("focus", SearchParamType::Token, "MessageDefinition.focus.code"),
    row("parent", SearchParamType::Reference, "MessageDefinition.parent"),
];

const GOAL: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "Goal.identifier"),
    row("patient", SearchParamType::Reference, "Goal.subject.where(resolve() is Patient)"),
    row("achievement-status", SearchParamType::Token, "Goal.achievementStatus"),
    row("category", SearchParamType::Token, "Goal.category"),
    row("lifecycle-status", SearchParamType::Token, "Goal.lifecycleStatus"),
    row("start-date", SearchParamType::Date, "(Goal.start as date)"),
    row("subject", SearchParamType::Reference, "Goal.subject"),
    row("target-date", SearchParamType::Date, "(Goal.target.due as date)"),
];

const MEDICINAL_PRODUCT_PACKAGED: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "MedicinalProductPackaged.identifier"),
    row("subject", SearchParamType::Reference, "MedicinalProductPackaged.subject"),
];

const ENDPOINT: &[ParamRow] = &[
    row("connection-type", SearchParamType::Token, "Endpoint.connectionType"),
    row("identifier", SearchParamType::Token, "Endpoint.identifier"),
    row("name", SearchParamType::String, "Endpoint.name"),
    row("organization", SearchParamType::Reference, "Endpoint.managingOrganization"),
    row("payload-type", SearchParamType::Token, "Endpoint.payloadType"),
    row("status", SearchParamType::Token, "Endpoint.status"),
];

const ENROLLMENT_REQUEST: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "EnrollmentRequest.identifier"),
    row("patient", SearchParamType::Reference, "EnrollmentRequest.candidate"),
    row("status", SearchParamType::Token, "EnrollmentRequest.status"),
    row("subject", SearchParamType::Reference, "EnrollmentRequest.candidate"),
];

const CONSENT: &[ParamRow] = &[
    row("date", SearchParamType::Date, "Consent.dateTime"),
    row("identifier", SearchParamType::Token, "Consent.identifier"),
    row("patient", SearchParamType::Reference, "Consent.patient"),
    row("action", SearchParamType::Token, "Consent.provision.action"),
    row("actor", SearchParamType::Reference, "Consent.provision.actor.reference"),
    row("category", SearchParamType::Token, "Consent.category"),
    row("consentor", SearchParamType::Reference, "Consent.performer"),
    row("data", SearchParamType::Reference, "Consent.provision.data.reference"),
    row("organization", SearchParamType::Reference, "Consent.organization"),
    row("period", SearchParamType::Date, "Consent.provision.period"),
    row("purpose", SearchParamType::Token, "Consent.provision.purpose"),
    row("scope", SearchParamType::Token, "Consent.scope"),
    row("security-label", SearchParamType::Token, "Consent.provision.securityLabel"),
    row("source-reference", SearchParamType::Reference, "Consent.source"),
    row("status", SearchParamType::Token, "Consent.status"),
];

const MEDICATION: &[ParamRow] = &[
    row("code", SearchParamType::Token, "Medication.code"),
    row("expiration-date", SearchParamType::Date, "Medication.batch.expirationDate"),
    row("form", SearchParamType::Token, "Medication.form"),
    row("identifier", SearchParamType::Token, "Medication.identifier"),
    row("ingredient", SearchParamType::Reference, "(Medication.ingredient.item as Reference)"),
    row("ingredient-code", SearchParamType::Token, "(Medication.ingredient.item as CodeableConcept)"),
    row("lot-number", SearchParamType::Token, "Medication.batch.lotNumber"),
    row("manufacturer", SearchParamType::Reference, "Medication.manufacturer"),
    row("status", SearchParamType::Token, "Medication.status"),
];

const CAPABILITY_STATEMENT: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(CapabilityStatement.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(CapabilityStatement.useContext.value as Quantity) | (CapabilityStatement.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "CapabilityStatement.useContext.code"),
    row("date", SearchParamType::Date, "CapabilityStatement.date"),
    row("description", SearchParamType::String, "CapabilityStatement.description"),
    row("fhirversion", SearchParamType::Token, "CapabilityStatement.version"),
    row("format", SearchParamType::Token, "CapabilityStatement.format"),
    row("guide", SearchParamType::Reference, "CapabilityStatement.implementationGuide"),
    row("jurisdiction", SearchParamType::Token, "CapabilityStatement.jurisdiction"),
    row("mode", SearchParamType::Token, "CapabilityStatement.rest.mode"),
    row("name", SearchParamType::String, "CapabilityStatement.name"),
    row("publisher", SearchParamType::String, "CapabilityStatement.publisher"),
    row("resource", SearchParamType::Token, "CapabilityStatement.rest.resource.type"),
    row("resource-profile", SearchParamType::Reference, "CapabilityStatement.rest.resource.profile"),
    row("security-service", SearchParamType::Token, "CapabilityStatement.rest.security.service"),
    row("software", SearchParamType::String, "CapabilityStatement.software.name"),
    row("status", SearchParamType::Token, "CapabilityStatement.status"),
    row("supported-profile", SearchParamType::Reference, "CapabilityStatement.rest.resource.supportedProfile"),
    row("title", SearchParamType::String, "CapabilityStatement.title"),
    row("url", SearchParamType::Uri, "CapabilityStatement.url"),
    row("version", SearchParamType::Token, "CapabilityStatement.version"),
    row("context-type-quantity", SearchParamType::Composite, "CapabilityStatement.useContext"),
    row("context-type-value", SearchParamType::Composite, "CapabilityStatement.useContext"),
];

const MEASURE: &[ParamRow] = &[
    row("composed-of", SearchParamType::Reference, "Measure.relatedArtifact.where(type='composed-of').resource"),
    row("context", SearchParamType::Token, "(Measure.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(Measure.useContext.value as Quantity) | (Measure.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "Measure.useContext.code"),
    row("date", SearchParamType::Date, "Measure.date"),
    row("depends-on", SearchParamType::Reference, "Measure.relatedArtifact.where(type='depends-on').resource | Measure.library"),
    row("derived-from", SearchParamType::Reference, "Measure.relatedArtifact.where(type='derived-from').resource"),
    row("description", SearchParamType::String, "Measure.description"),
    row("effective", SearchParamType::Date, "Measure.effectivePeriod"),
    row("identifier", SearchParamType::Token, "Measure.identifier"),
    row("jurisdiction", SearchParamType::Token, "Measure.jurisdiction"),
    row("name", SearchParamType::String, "Measure.name"),
    row("predecessor", SearchParamType::Reference, "Measure.relatedArtifact.where(type='predecessor').resource"),
    row("publisher", SearchParamType::String, "Measure.publisher"),
    row("status", SearchParamType::Token, "Measure.status"),
    row("successor", SearchParamType::Reference, "Measure.relatedArtifact.where(type='successor').resource"),
    row("title", SearchParamType::String, "Measure.title"),
    row("topic", SearchParamType::Token, "Measure.topic"),
    row("url", SearchParamType::Uri, "Measure.url"),
    row("version", SearchParamType::Token, "Measure.version"),
    row("context-type-quantity", SearchParamType::Composite, "Measure.useContext"),
    row("context-type-value", SearchParamType::Composite, "Measure.useContext"),
];

const RESEARCH_SUBJECT: &[ParamRow] = &[
    row("date", SearchParamType::Date, "ResearchSubject.period"),
    row("identifier", SearchParamType::Token, "ResearchSubject.identifier"),
    row("individual", SearchParamType::Reference, "ResearchSubject.individual"),
    row("patient", SearchParamType::Reference, "ResearchSubject.individual"),
    row("status", SearchParamType::Token, "ResearchSubject.status"),
    row("study", SearchParamType::Reference, "ResearchSubject.study"),
];

const SUBSCRIPTION: &[ParamRow] = &[
    row("contact", SearchParamType::Token, "Subscription.contact"),
    row("criteria", SearchParamType::String, "Subscription.criteria"),
    row("payload", SearchParamType::Token, "Subscription.channel.payload"),
    row("status", SearchParamType::Token, "Subscription.status"),
    row("type", SearchParamType::Token, "Subscription.channel.type"),
    row("url", SearchParamType::Uri, "Subscription.channel.endpoint"),
];

const DOCUMENT_REFERENCE: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "DocumentReference.masterIdentifier | DocumentReference.identifier"),
    row("patient", SearchParamType::Reference, "DocumentReference.subject.where(resolve() is Patient)"),
    row("type", SearchParamType::Token, "DocumentReference.type"),
    row("encounter", SearchParamType::Reference, "DocumentReference.context.encounter"),
    row("authenticator", SearchParamType::Reference, "DocumentReference.authenticator"),
    row("author", SearchParamType::Reference, "DocumentReference.author"),
    row("category", SearchParamType::Token, "DocumentReference.category"),
    row("contenttype", SearchParamType::Token, "DocumentReference.content.attachment.contentType"),
    row("custodian", SearchParamType::Reference, "DocumentReference.custodian"),
    row("date", SearchParamType::Date, "DocumentReference.date"),
    row("description", SearchParamType::String, "DocumentReference.description"),
    row("event", SearchParamType::Token, "DocumentReference.context.event"),
    row("facility", SearchParamType::Token, "DocumentReference.context.facilityType"),
    row("format", SearchParamType::Token, "DocumentReference.content.format"),
    row("language", SearchParamType::Token, "DocumentReference.content.attachment.language"),
    row("location", SearchParamType::Uri, "DocumentReference.content.attachment.url"),
    row("period", SearchParamType::Date, "DocumentReference.context.period"),
    row("related", SearchParamType::Reference, "DocumentReference.context.related"),
    row("relatesto", SearchParamType::Reference, "DocumentReference.relatesTo.target"),
    row("relation", SearchParamType::Token, "DocumentReference.relatesTo.code"),
    row("security-label", SearchParamType::Token, "DocumentReference.securityLabel"),
    row("setting", SearchParamType::Token, "DocumentReference.context.practiceSetting"),
    row("status", SearchParamType::Token, "DocumentReference.status"),
    row("subject", SearchParamType::Reference, "DocumentReference.subject"),
    row("relationship", SearchParamType::Composite, "DocumentReference.relatesTo"),
];

const GRAPH_DEFINITION: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(GraphDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(GraphDefinition.useContext.value as Quantity) | (GraphDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "GraphDefinition.useContext.code"),
    row("date", SearchParamType::Date, "GraphDefinition.date"),
    row("description", SearchParamType::String, "GraphDefinition.description"),
    row("jurisdiction", SearchParamType::Token, "GraphDefinition.jurisdiction"),
    row("name", SearchParamType::String, "GraphDefinition.name"),
    row("publisher", SearchParamType::String, "GraphDefinition.publisher"),
    row("status", SearchParamType::Token, "GraphDefinition.status"),
    row("url", SearchParamType::Uri, "GraphDefinition.url"),
    row("version", SearchParamType::Token, "GraphDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "GraphDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "GraphDefinition.useContext"),
    row("start", SearchParamType::Token, "GraphDefinition.start"),
];

const COVERAGE_ELIGIBILITY_RESPONSE: &[ParamRow] = &[
    row("created", SearchParamType::Date, "CoverageEligibilityResponse.created"),
    row("disposition", SearchParamType::String, "CoverageEligibilityResponse.disposition"),
    row("identifier", SearchParamType::Token, "CoverageEligibilityResponse.identifier"),
    row("insurer", SearchParamType::Reference, "CoverageEligibilityResponse.insurer"),
    row("outcome", SearchParamType::Token, "CoverageEligibilityResponse.outcome"),
    row("patient", SearchParamType::Reference, "CoverageEligibilityResponse.patient"),
    row("request", SearchParamType::Reference, "CoverageEligibilityResponse.request"),
    row("requestor", SearchParamType::Reference, "CoverageEligibilityResponse.requestor"),
    row("status", SearchParamType::Token, "CoverageEligibilityResponse.status"),
];

const MEASURE_REPORT: &[ParamRow] = &[
    row("date", SearchParamType::Date, "MeasureReport.date"),
    row("evaluated-resource", SearchParamType::Reference, "MeasureReport.evaluatedResource"),
    row("identifier", SearchParamType::Token, "MeasureReport.identifier"),
    row("measure", SearchParamType::Reference, "MeasureReport.measure"),
    row("patient", SearchParamType::Reference, "MeasureReport.subject.where(resolve() is Patient)"),
    row("period", SearchParamType::Date, "MeasureReport.period"),
    row("reporter", SearchParamType::Reference, "MeasureReport.reporter"),
    row("status", SearchParamType::Token, "MeasureReport.status"),
    row("subject", SearchParamType::Reference, "MeasureReport.subject"),
];

const PRACTITIONER_ROLE: &[ParamRow] = &[
    row("email", SearchParamType::Token, "PractitionerRole.telecom.where(system='email')"),
    row("phone", SearchParamType::Token, "PractitionerRole.telecom.where(system='phone')"),
    row("telecom", SearchParamType::Token, "PractitionerRole.telecom"),
    row("active", SearchParamType::Token, "PractitionerRole.active"),
    row("date", SearchParamType::Date, "PractitionerRole.period"),
    row("endpoint", SearchParamType::Reference, "PractitionerRole.endpoint"),
    row("identifier", SearchParamType::Token, "PractitionerRole.identifier"),
    row("location", SearchParamType::Reference, "PractitionerRole.location"),
    row("organization", SearchParamType::Reference, "PractitionerRole.organization"),
    row("practitioner", SearchParamType::Reference, "PractitionerRole.practitioner"),
    row("role", SearchParamType::Token, "PractitionerRole.code"),
    row("service", SearchParamType::Reference, "PractitionerRole.healthcareService"),
    row("specialty", SearchParamType::Token, "PractitionerRole.specialty"),
];

const SERVICE_REQUEST: &[ParamRow] = &[
    row("code", SearchParamType::Token, "ServiceRequest.code"),
    row("identifier", SearchParamType::Token, "ServiceRequest.identifier"),
    row("patient", SearchParamType::Reference, "ServiceRequest.subject.where(resolve() is Patient)"),
    row("encounter", SearchParamType::Reference, "ServiceRequest.encounter"),
    row("authored", SearchParamType::Date, "ServiceRequest.authoredOn"),
    row("based-on", SearchParamType::Reference, "ServiceRequest.basedOn"),
    row("body-site", SearchParamType::Token, "ServiceRequest.bodySite"),
    row("category", SearchParamType::Token, "ServiceRequest.category"),
    row("instantiates-canonical", SearchParamType::Reference, "ServiceRequest.instantiatesCanonical"),
    row("instantiates-uri", SearchParamType::Uri, "ServiceRequest.instantiatesUri"),
    row("intent", SearchParamType::Token, "ServiceRequest.intent"),
    row("occurrence", SearchParamType::Date, "ServiceRequest.occurrence"),
    row("performer", SearchParamType::Reference, "ServiceRequest.performer"),
    row("performer-type", SearchParamType::Token, "ServiceRequest.performerType"),
    row("priority", SearchParamType::Token, "ServiceRequest.priority"),
    row("replaces", SearchParamType::Reference, "ServiceRequest.replaces"),
    row("requester", SearchParamType::Reference, "ServiceRequest.requester"),
    row("requisition", SearchParamType::Token, "ServiceRequest.requisition"),
    row("specimen", SearchParamType::Reference, "ServiceRequest.specimen"),
    row("status", SearchParamType::Token, "ServiceRequest.status"),
    row("subject", SearchParamType::Reference, "ServiceRequest.subject"),
];

const RELATED_PERSON: &[ParamRow] = &[
    row("address", SearchParamType::String, "RelatedPerson.address"),
    row("address-city", SearchParamType::String, "RelatedPerson.address.city"),
    row("address-country", SearchParamType::String, "RelatedPerson.address.country"),
    row("address-postalcode", SearchParamType::String, "RelatedPerson.address.postalCode"),
    row("address-state", SearchParamType::String, "RelatedPerson.address.state"),
    row("address-use", SearchParamType::Token, "RelatedPerson.address.use"),
    row("birthdate", SearchParamType::Date, "RelatedPerson.birthDate"),
    row("email", SearchParamType::Token, "RelatedPerson.telecom.where(system='email')"),
    row("gender", SearchParamType::Token, "RelatedPerson.gender"),
    row("phone", SearchParamType::Token, "RelatedPerson.telecom.where(system='phone')"),
    row("phonetic", SearchParamType::String, "RelatedPerson.name"),
    row("telecom", SearchParamType::Token, "RelatedPerson.telecom"),
    row("active", SearchParamType::Token, "RelatedPerson.active"),
    row("identifier", SearchParamType::Token, "RelatedPerson.identifier"),
    row("name", SearchParamType::String, "RelatedPerson.name"),
    row("patient", SearchParamType::Reference, "RelatedPerson.patient"),
    row("relationship", SearchParamType::Token, "RelatedPerson.relationship"),
];

const SUPPLY_REQUEST: &[ParamRow] = &[
    row("date", SearchParamType::Date, "SupplyRequest.authoredOn"),
    row("identifier", SearchParamType::Token, "SupplyRequest.identifier"),
    row("category", SearchParamType::Token, "SupplyRequest.category"),
    row("requester", SearchParamType::Reference, "SupplyRequest.requester"),
    row("status", SearchParamType::Token, "SupplyRequest.status"),
    row("subject", SearchParamType::Reference, "SupplyRequest.deliverTo"),
    row("supplier", SearchParamType::Reference, "SupplyRequest.supplier"),
];

const PRACTITIONER: &[ParamRow] = &[
    row("address", SearchParamType::String, "Practitioner.address"),
    row("address-city", SearchParamType::String, "Practitioner.address.city"),
    row("address-country", SearchParamType::String, "Practitioner.address.country"),
    row("address-postalcode", SearchParamType::String, "Practitioner.address.postalCode"),
    row("address-state", SearchParamType::String, "Practitioner.address.state"),
    row("address-use", SearchParamType::Token, "Practitioner.address.use"),
    row("email", SearchParamType::Token, "Practitioner.telecom.where(system='email')"),
    row("family", SearchParamType::String, "Practitioner.name.family"),
    row("gender", SearchParamType::Token, "Practitioner.gender"),
    row("given", SearchParamType::String, "Practitioner.name.given"),
    row("phone", SearchParamType::Token, "Practitioner.telecom.where(system='phone')"),
    row("phonetic", SearchParamType::String, "Practitioner.name"),
    row("telecom", SearchParamType::Token, "Practitioner.telecom"),
    row("active", SearchParamType::Token, "Practitioner.active"),
    row("communication", SearchParamType::Token, "Practitioner.communication"),
    row("identifier", SearchParamType::Token, "Practitioner.identifier"),
    row("name", SearchParamType::String, "Practitioner.name"),
];

const VERIFICATION_RESULT: &[ParamRow] = &[
    row("target", SearchParamType::Reference, "VerificationResult.target"),
];

const BODY_STRUCTURE: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "BodyStructure.identifier"),
    row("location", SearchParamType::Token, "BodyStructure.location"),
    row("morphology", SearchParamType::Token, "BodyStructure.morphology"),
    row("patient", SearchParamType::Reference, "BodyStructure.patient"),
];

const SLOT: &[ParamRow] = &[
    row("appointment-type", SearchParamType::Token, "Slot.appointmentType"),
    row("identifier", SearchParamType::Token, "Slot.identifier"),
    row("schedule", SearchParamType::Reference, "Slot.schedule"),
    row("service-category", SearchParamType::Token, "Slot.serviceCategory"),
    row("service-type", SearchParamType::Token, "Slot.serviceType"),
    row("specialty", SearchParamType::Token, "Slot.specialty"),
    row("start", SearchParamType::Date, "Slot.start"),
    row("status", SearchParamType::Token, "Slot.status"),
];

const CONTRACT: &[ParamRow] = &[
    row("authority", SearchParamType::Reference, "Contract.authority"),
    row("domain", SearchParamType::Reference, "Contract.domain"),
    row("identifier", SearchParamType::Token, "Contract.identifier"),
    row("instantiates", SearchParamType::Uri, "Contract.instantiatesUri"),
    row("issued", SearchParamType::Date, "Contract.issued"),
    row("patient", SearchParamType::Reference, "Contract.subject.where(resolve() is Patient)"),
    row("signer", SearchParamType::Reference, "Contract.signer.party"),
    row("status", SearchParamType::Token, "Contract.status"),
    row("subject", SearchParamType::Reference, "Contract.subject"),
    row("url", SearchParamType::Uri, "Contract.url"),
];

const PERSON: &[ParamRow] = &[
    row("address", SearchParamType::String, "Person.address"),
    row("address-city", SearchParamType::String, "Person.address.city"),
    row("address-country", SearchParamType::String, "Person.address.country"),
    row("address-postalcode", SearchParamType::String, "Person.address.postalCode"),
    row("address-state", SearchParamType::String, "Person.address.state"),
    row("address-use", SearchParamType::Token, "Person.address.use"),
    row("birthdate", SearchParamType::Date, "Person.birthDate"),
    row("email", SearchParamType::Token, "Person.telecom.where(system='email')"),
    row("gender", SearchParamType::Token, "Person.gender"),
    row("phone", SearchParamType::Token, "Person.telecom.where(system='phone')"),
    row("phonetic", SearchParamType::String, "Person.name"),
    row("telecom", SearchParamType::Token, "Person.telecom"),
    row("identifier", SearchParamType::Token, "Person.identifier"),
    row("link", SearchParamType::Reference, "Person.link.target"),
    row("name", SearchParamType::String, "Person.name"),
    row("organization", SearchParamType::Reference, "Person.managingOrganization"),
    row("patient", SearchParamType::Reference, "Person.link.target.where(resolve() is Patient)"),
    row("practitioner", SearchParamType::Reference, "Person.link.target.where(resolve() is Practitioner)"),
    row("relatedperson", SearchParamType::Reference, "Person.link.target.where(resolve() is RelatedPerson)"),
];

const RISK_ASSESSMENT: &[ParamRow] = &[
    row("date", SearchParamType::Date, "(RiskAssessment.occurrence as dateTime)"),
    row("identifier", SearchParamType::Token, "RiskAssessment.identifier"),
    row("patient", SearchParamType::Reference, "RiskAssessment.subject.where(resolve() is Patient)"),
    row("encounter", SearchParamType::Reference, "RiskAssessment.encounter"),
    row("condition", SearchParamType::Reference, "RiskAssessment.condition"),
    row("method", SearchParamType::Token, "RiskAssessment.method"),
    row("performer", SearchParamType::Reference, "RiskAssessment.performer"),
    row("probability", SearchParamType::Number, "RiskAssessment.prediction.probability"),
    row("risk", SearchParamType::Token, "RiskAssessment.prediction.qualitativeRisk"),
    row("subject", SearchParamType::Reference, "RiskAssessment.subject"),
];

const GROUP: &[ParamRow] = &[
    row("actual", SearchParamType::Token, "Group.actual"),
    row("characteristic", SearchParamType::Token, "Group.characteristic.code"),
    row("code", SearchParamType::Token, "Group.code"),
    row("exclude", SearchParamType::Token, "Group.characteristic.exclude"),
    row("identifier", SearchParamType::Token, "Group.identifier"),
    row("managing-entity", SearchParamType::Reference, "Group.managingEntity"),
    row("member", SearchParamType::Reference, "Group.member.entity"),
    row("type", SearchParamType::Token, "Group.type"),
    row("value", SearchParamType::Token, "(Group.characteristic.value as CodeableConcept) | (Group.characteristic.value as boolean)"),
    row("characteristic-value", SearchParamType::Composite, "Group.characteristic"),
];

const PAYMENT_NOTICE: &[ParamRow] = &[
    row("created", SearchParamType::Date, "PaymentNotice.created"),
    row("identifier", SearchParamType::Token, "PaymentNotice.identifier"),
    row("payment-status", SearchParamType::Token, "PaymentNotice.paymentStatus"),
    row("provider", SearchParamType::Reference, "PaymentNotice.provider"),
    row("request", SearchParamType::Reference, "PaymentNotice.request"),
    row("response", SearchParamType::Reference, "PaymentNotice.response"),
    row("status", SearchParamType::Token, "PaymentNotice.status"),
];

const RESEARCH_DEFINITION: &[ParamRow] = &[
    row("composed-of", SearchParamType::Reference, "ResearchDefinition.relatedArtifact.where(type='composed-of').resource"),
    row("context", SearchParamType::Token, "(ResearchDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(ResearchDefinition.useContext.value as Quantity) | (ResearchDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "ResearchDefinition.useContext.code"),
    row("date", SearchParamType::Date, "ResearchDefinition.date"),
    row("depends-on", SearchParamType::Reference, "ResearchDefinition.relatedArtifact.where(type='depends-on').resource | ResearchDefinition.library"),
    row("derived-from", SearchParamType::Reference, "ResearchDefinition.relatedArtifact.where(type='derived-from').resource"),
    row("description", SearchParamType::String, "ResearchDefinition.description"),
    row("effective", SearchParamType::Date, "ResearchDefinition.effectivePeriod"),
    row("identifier", SearchParamType::Token, "ResearchDefinition.identifier"),
    row("jurisdiction", SearchParamType::Token, "ResearchDefinition.jurisdiction"),
    row("name", SearchParamType::String, "ResearchDefinition.name"),
    row("predecessor", SearchParamType::Reference, "ResearchDefinition.relatedArtifact.where(type='predecessor').resource"),
    row("publisher", SearchParamType::String, "ResearchDefinition.publisher"),
    row("status", SearchParamType::Token, "ResearchDefinition.status"),
    row("successor", SearchParamType::Reference, "ResearchDefinition.relatedArtifact.where(type='successor').resource"),
    row("title", SearchParamType::String, "ResearchDefinition.title"),
    row("topic", SearchParamType::Token, "ResearchDefinition.topic"),
    row("url", SearchParamType::Uri, "ResearchDefinition.url"),
    row("version", SearchParamType::Token, "ResearchDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "ResearchDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "ResearchDefinition.useContext"),
];

const ORGANIZATION: &[ParamRow] = &[
    row("active", SearchParamType::Token, "Organization.active"),
    row("address", SearchParamType::String, "Organization.address"),
    row("address-city", SearchParamType::String, "Organization.address.city"),
    row("address-country", SearchParamType::String, "Organization.address.country"),
    row("address-postalcode", SearchParamType::String, "Organization.address.postalCode"),
    row("address-state", SearchParamType::String, "Organization.address.state"),
    row("address-use", SearchParamType::Token, "Organization.address.use"),
    row("endpoint", SearchParamType::Reference, "Organization.endpoint"),
    row("identifier", SearchParamType::Token, "Organization.identifier"),
    row("name", SearchParamType::String, "Organization.name | Organization.alias"),
    row("partof", SearchParamType::Reference, "Organization.partOf"),
    row("phonetic", SearchParamType::String, "Organization.name"),
    row("type", SearchParamType::Token, "Organization.type"),
];

const CARE_TEAM: &[ParamRow] = &[
    row("date", SearchParamType::Date, "CareTeam.period"),
    row("identifier", SearchParamType::Token, "CareTeam.identifier"),
    row("patient", SearchParamType::Reference, "CareTeam.subject.where(resolve() is Patient)"),
    row("category", SearchParamType::Token, "CareTeam.category"),
    row("encounter", SearchParamType::Reference, "CareTeam.encounter"),
    row("participant", SearchParamType::Reference, "CareTeam.participant.member"),
    row("status", SearchParamType::Token, "CareTeam.status"),
    row("subject", SearchParamType::Reference, "CareTeam.subject"),
];

const IMPLEMENTATION_GUIDE: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(ImplementationGuide.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(ImplementationGuide.useContext.value as Quantity) | (ImplementationGuide.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "ImplementationGuide.useContext.code"),
    row("date", SearchParamType::Date, "ImplementationGuide.date"),
    row("description", SearchParamType::String, "ImplementationGuide.description"),
    row("jurisdiction", SearchParamType::Token, "ImplementationGuide.jurisdiction"),
    row("name", SearchParamType::String, "ImplementationGuide.name"),
    row("publisher", SearchParamType::String, "ImplementationGuide.publisher"),
    row("status", SearchParamType::Token, "ImplementationGuide.status"),
    row("title", SearchParamType::String, "ImplementationGuide.title"),
    row("url", SearchParamType::Uri, "ImplementationGuide.url"),
    row("version", SearchParamType::Token, "ImplementationGuide.version"),
    row("context-type-quantity", SearchParamType::Composite, "ImplementationGuide.useContext"),
    row("context-type-value", SearchParamType::Composite, "ImplementationGuide.useContext"),
    row("depends-on", SearchParamType::Reference, "ImplementationGuide.dependsOn.uri"),
    row("experimental", SearchParamType::Token, "ImplementationGuide.experimental"),
    row("global", SearchParamType::Reference, "ImplementationGuide.global.profile"),
    row("resource", SearchParamType::Reference, "ImplementationGuide.definition.resource.reference"),
];

const IMAGING_STUDY: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "ImagingStudy.identifier"),
    row("patient", SearchParamType::Reference, "ImagingStudy.subject.where(resolve() is Patient)"),
    row("basedon", SearchParamType::Reference, "ImagingStudy.basedOn"),
    row("bodysite", SearchParamType::Token, "ImagingStudy.series.bodySite"),
    row("dicom-class", SearchParamType::Token, "ImagingStudy.series.instance.sopClass"),
    row("encounter", SearchParamType::Reference, "ImagingStudy.encounter"),
    row("endpoint", SearchParamType::Reference, "ImagingStudy.endpoint | ImagingStudy.series.endpoint"),
    row("instance", SearchParamType::Token, "ImagingStudy.series.instance.uid"),
    row("interpreter", SearchParamType::Reference, "ImagingStudy.interpreter"),
    row("modality", SearchParamType::Token, "ImagingStudy.series.modality"),
    row("performer", SearchParamType::Reference, "ImagingStudy.series.performer.actor"),
    row("reason", SearchParamType::Token, "ImagingStudy.reasonCode"),
    row("referrer", SearchParamType::Reference, "ImagingStudy.referrer"),
    row("series", SearchParamType::Token, "ImagingStudy.series.uid"),
    row("started", SearchParamType::Date, "ImagingStudy.started"),
    row("status", SearchParamType::Token, "ImagingStudy.status"),
    row("subject", SearchParamType::Reference, "ImagingStudy.subject"),
];

const FAMILY_MEMBER_HISTORY: &[ParamRow] = &[
    row("code", SearchParamType::Token, "FamilyMemberHistory.condition.code"),
    row("date", SearchParamType::Date, "FamilyMemberHistory.date"),
    row("identifier", SearchParamType::Token, "FamilyMemberHistory.identifier"),
    row("patient", SearchParamType::Reference, "FamilyMemberHistory.patient"),
    row("instantiates-canonical", SearchParamType::Reference, "FamilyMemberHistory.instantiatesCanonical"),
    row("instantiates-uri", SearchParamType::Uri, "FamilyMemberHistory.instantiatesUri"),
    row("relationship", SearchParamType::Token, "FamilyMemberHistory.relationship"),
    row("sex", SearchParamType::Token, "FamilyMemberHistory.sex"),
    row("status", SearchParamType::Token, "FamilyMemberHistory.status"),
];

const CHARGE_ITEM: &[ParamRow] = &[
    row("account", SearchParamType::Reference, "ChargeItem.account"),
    row("code", SearchParamType::Token, "ChargeItem.code"),
    row("context", SearchParamType::Reference, "ChargeItem.context"),
    row("entered-date", SearchParamType::Date, "ChargeItem.enteredDate"),
    row("enterer", SearchParamType::Reference, "ChargeItem.enterer"),
    row("factor-override", SearchParamType::Number, "ChargeItem.factorOverride"),
    row("identifier", SearchParamType::Token, "ChargeItem.identifier"),
    row("occurrence", SearchParamType::Date, "ChargeItem.occurrence"),
    row("patient", SearchParamType::Reference, "ChargeItem.subject.where(resolve() is Patient)"),
    row("performer-actor", SearchParamType::Reference, "ChargeItem.performer.actor"),
    row("performer-function", SearchParamType::Token, "ChargeItem.performer.function"),
    row("performing-organization", SearchParamType::Reference, "ChargeItem.performingOrganization"),
    row("price-override", SearchParamType::Quantity, "ChargeItem.priceOverride"),
    row("quantity", SearchParamType::Quantity, "ChargeItem.quantity"),
    row("requesting-organization", SearchParamType::Reference, "ChargeItem.requestingOrganization"),
    row("service", SearchParamType::Reference, "ChargeItem.service"),
    row("subject", SearchParamType::Reference, "ChargeItem.subject"),
];

const RESEARCH_ELEMENT_DEFINITION: &[ParamRow] = &[
    row("composed-of", SearchParamType::Reference, "ResearchElementDefinition.relatedArtifact.where(type='composed-of').resource"),
    row("context", SearchParamType::Token, "(ResearchElementDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(ResearchElementDefinition.useContext.value as Quantity) | (ResearchElementDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "ResearchElementDefinition.useContext.code"),
    row("date", SearchParamType::Date, "ResearchElementDefinition.date"),
    row("depends-on", SearchParamType::Reference, "ResearchElementDefinition.relatedArtifact.where(type='depends-on').resource | ResearchElementDefinition.library"),
    row("derived-from", SearchParamType::Reference, "ResearchElementDefinition.relatedArtifact.where(type='derived-from').resource"),
    row("description", SearchParamType::String, "ResearchElementDefinition.description"),
    row("effective", SearchParamType::Date, "ResearchElementDefinition.effectivePeriod"),
    row("identifier", SearchParamType::Token, "ResearchElementDefinition.identifier"),
    row("jurisdiction", SearchParamType::Token, "ResearchElementDefinition.jurisdiction"),
    row("name", SearchParamType::String, "ResearchElementDefinition.name"),
    row("predecessor", SearchParamType::Reference, "ResearchElementDefinition.relatedArtifact.where(type='predecessor').resource"),
    row("publisher", SearchParamType::String, "ResearchElementDefinition.publisher"),
    row("status", SearchParamType::Token, "ResearchElementDefinition.status"),
    row("successor", SearchParamType::Reference, "ResearchElementDefinition.relatedArtifact.where(type='successor').resource"),
    row("title", SearchParamType::String, "ResearchElementDefinition.title"),
    row("topic", SearchParamType::Token, "ResearchElementDefinition.topic"),
    row("url", SearchParamType::Uri, "ResearchElementDefinition.url"),
    row("version", SearchParamType::Token, "ResearchElementDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "ResearchElementDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "ResearchElementDefinition.useContext"),
];

const ENCOUNTER: &[ParamRow] = &[
    row("date", SearchParamType::Date, "Encounter.period"),
    row("identifier", SearchParamType::Token, "Encounter.identifier"),
    row("patient", SearchParamType::Reference, "Encounter.subject.where(resolve() is Patient)"),
    row("type", SearchParamType::Token, "Encounter.type"),
    row("account", SearchParamType::Reference, "Encounter.account"),
    row("appointment", SearchParamType::Reference, "Encounter.appointment"),
    row("based-on", SearchParamType::Reference, "Encounter.basedOn"),
    row("class", SearchParamType::Token, "Encounter.class"),
    row("diagnosis", SearchParamType::Reference, "Encounter.diagnosis.condition"),
    row("episode-of-care", SearchParamType::Reference, "Encounter.episodeOfCare"),
    row("length", SearchParamType::Quantity, "Encounter.length"),
    row("location", SearchParamType::Reference, "Encounter.location.location"),
    row("location-period", SearchParamType::Date, "Encounter.location.period"),
    row("part-of", SearchParamType::Reference, "Encounter.partOf"),
    row("participant", SearchParamType::Reference, "Encounter.participant.individual"),
    row("participant-type", SearchParamType::Token, "Encounter.participant.type"),
    row("practitioner", SearchParamType::Reference, "Encounter.participant.individual.where(resolve() is Practitioner)"),
    row("reason-code", SearchParamType::Token, "Encounter.reasonCode"),
    row("reason-reference", SearchParamType::Reference, "Encounter.reasonReference"),
    row("service-provider", SearchParamType::Reference, "Encounter.serviceProvider"),
    row("special-arrangement", SearchParamType::Token, "Encounter.hospitalization.specialArrangement"),
    row("status", SearchParamType::Token, "Encounter.status"),
    row("subject", SearchParamType::Reference, "Encounter.subject"),
];

const SUBSTANCE: &[ParamRow] = &[
    row("category", SearchParamType::Token, "Substance.category"),
    row("code", SearchParamType::Token, "Substance.code | (Substance.ingredient.substance as CodeableConcept)"),
    row("container-identifier", SearchParamType::Token, "Substance.instance.identifier"),
    row("expiry", SearchParamType::Date, "Substance.instance.expiry"),
    row("identifier", SearchParamType::Token, "Substance.identifier"),
    row("quantity", SearchParamType::Quantity, "Substance.instance.quantity"),
    row("status", SearchParamType::Token, "Substance.status"),
    row("substance-reference", SearchParamType::Reference, "(Substance.ingredient.substance as Reference)"),
];

const SUBSTANCE_SPECIFICATION: &[ParamRow] = &[
    row("code", SearchParamType::Token, "SubstanceSpecification.code.code"),
];

const SEARCH_PARAMETER: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(SearchParameter.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(SearchParameter.useContext.value as Quantity) | (SearchParameter.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "SearchParameter.useContext.code"),
    row("date", SearchParamType::Date, "SearchParameter.date"),
    row("description", SearchParamType::String, "SearchParameter.description"),
    row("jurisdiction", SearchParamType::Token, "SearchParameter.jurisdiction"),
    row("name", SearchParamType::String, "SearchParameter.name"),
    row("publisher", SearchParamType::String, "SearchParameter.publisher"),
    row("status", SearchParamType::Token, "SearchParameter.status"),
    row("url", SearchParamType::Uri, "SearchParameter.url"),
    row("version", SearchParamType::Token, "SearchParameter.version"),
    row("context-type-quantity", SearchParamType::Composite, "SearchParameter.useContext"),
    row("context-type-value", SearchParamType::Composite, "SearchParameter.useContext"),
    row("base", SearchParamType::Token, "SearchParameter.base"),
    row("code", SearchParamType::Token, "SearchParameter.code"),
    row("component", SearchParamType::Reference, "SearchParameter.component.definition"),
    row("derived-from", SearchParamType::Reference, "SearchParameter.derivedFrom"),
    row("target", SearchParamType::Token, "SearchParameter.target"),
    row("type", SearchParamType::Token, "SearchParameter.type"),
];

const ACTIVITY_DEFINITION: &[ParamRow] = &[
    row("composed-of", SearchParamType::Reference, "ActivityDefinition.relatedArtifact.where(type='composed-of').resource"),
    row("context", SearchParamType::Token, "(ActivityDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(ActivityDefinition.useContext.value as Quantity) | (ActivityDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "ActivityDefinition.useContext.code"),
    row("date", SearchParamType::Date, "ActivityDefinition.date"),
    row("depends-on", SearchParamType::Reference, "ActivityDefinition.relatedArtifact.where(type='depends-on').resource | ActivityDefinition.library"),
    row("derived-from", SearchParamType::Reference, "ActivityDefinition.relatedArtifact.where(type='derived-from').resource"),
    row("description", SearchParamType::String, "ActivityDefinition.description"),
    row("effective", SearchParamType::Date, "ActivityDefinition.effectivePeriod"),
    row("identifier", SearchParamType::Token, "ActivityDefinition.identifier"),
    row("jurisdiction", SearchParamType::Token, "ActivityDefinition.jurisdiction"),
    row("name", SearchParamType::String, "ActivityDefinition.name"),
    row("predecessor", SearchParamType::Reference, "ActivityDefinition.relatedArtifact.where(type='predecessor').resource"),
    row("publisher", SearchParamType::String, "ActivityDefinition.publisher"),
    row("status", SearchParamType::Token, "ActivityDefinition.status"),
    row("successor", SearchParamType::Reference, "ActivityDefinition.relatedArtifact.where(type='successor').resource"),
    row("title", SearchParamType::String, "ActivityDefinition.title"),
    row("topic", SearchParamType::Token, "ActivityDefinition.topic"),
    row("url", SearchParamType::Uri, "ActivityDefinition.url"),
    row("version", SearchParamType::Token, "ActivityDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "ActivityDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "ActivityDefinition.useContext"),
];

const COMMUNICATION: &[ParamRow] = &[
    row("based-on", SearchParamType::Reference, "Communication.basedOn"),
    row("category", SearchParamType::Token, "Communication.category"),
    row("encounter", SearchParamType::Reference, "Communication.encounter"),
    row("identifier", SearchParamType::Token, "Communication.identifier"),
    row("instantiates-canonical", SearchParamType::Reference, "Communication.instantiatesCanonical"),
    row("instantiates-uri", SearchParamType::Uri, "Communication.instantiatesUri"),
    row("medium", SearchParamType::Token, "Communication.medium"),
    row("part-of", SearchParamType::Reference, "Communication.partOf"),
    row("patient", SearchParamType::Reference, "Communication.subject.where(resolve() is Patient)"),
    row("received", SearchParamType::Date, "Communication.received"),
    row("recipient", SearchParamType::Reference, "Communication.recipient"),
    row("sender", SearchParamType::Reference, "Communication.sender"),
    row("sent", SearchParamType::Date, "Communication.sent"),
    row("status", SearchParamType::Token, "Communication.status"),
    row("subject", SearchParamType::Reference, "Communication.subject"),
];

const INSURANCE_PLAN: &[ParamRow] = &[
    row("address", SearchParamType::String, "InsurancePlan.contact.address"),
    row("address-city", SearchParamType::String, "InsurancePlan.contact.address.city"),
    row("address-country", SearchParamType::String, "InsurancePlan.contact.address.country"),
    row("address-postalcode", SearchParamType::String, "InsurancePlan.contact.address.postalCode"),
    row("address-state", SearchParamType::String, "InsurancePlan.contact.address.state"),
    row("address-use", SearchParamType::Token, "InsurancePlan.contact.address.use"),
    row("administered-by", SearchParamType::Reference, "InsurancePlan.administeredBy"),
    row("endpoint", SearchParamType::Reference, "InsurancePlan.endpoint"),
    row("identifier", SearchParamType::Token, "InsurancePlan.identifier"),
    row("name", SearchParamType::String, "name | alias"),
    row("owned-by", SearchParamType::Reference, "InsurancePlan.ownedBy"),
    row("phonetic", SearchParamType::String, "InsurancePlan.name"),
    row("status", SearchParamType::Token, "InsurancePlan.status"),
    row("type", SearchParamType::Token, "InsurancePlan.type"),
];

const LINKAGE: &[ParamRow] = &[
    row("author", SearchParamType::Reference, "Linkage.author"),
    row("item", SearchParamType::Reference, "Linkage.item.resource"),
    row("source", SearchParamType::Reference, "Linkage.item.resource"),
];

const IMMUNIZATION_EVALUATION: &[ParamRow] = &[
    row("date", SearchParamType::Date, "ImmunizationEvaluation.date"),
    row("dose-status", SearchParamType::Token, "ImmunizationEvaluation.doseStatus"),
    row("identifier", SearchParamType::Token, "ImmunizationEvaluation.identifier"),
    row("immunization-event", SearchParamType::Reference, "ImmunizationEvaluation.immunizationEvent"),
    row("patient", SearchParamType::Reference, "ImmunizationEvaluation.patient"),
    row("status", SearchParamType::Token, "ImmunizationEvaluation.status"),
    row("target-disease", SearchParamType::Token, "ImmunizationEvaluation.targetDisease"),
];

const DEVICE_USE_STATEMENT: &[ParamRow] = &[
    row("patient", SearchParamType::Reference, "DeviceUseStatement.subject"),
    row("device", SearchParamType::Reference, "DeviceUseStatement.device"),
    row("identifier", SearchParamType::Token, "DeviceUseStatement.identifier"),
    row("subject", SearchParamType::Reference, "DeviceUseStatement.subject"),
];

const REQUEST_GROUP: &[ParamRow] = &[
    row("author", SearchParamType::Reference, "RequestGroup.author"),
    row("authored", SearchParamType::Date, "RequestGroup.authoredOn"),
    row("code", SearchParamType::Token, "RequestGroup.code"),
    row("encounter", SearchParamType::Reference, "RequestGroup.encounter"),
    row("group-identifier", SearchParamType::Token, "RequestGroup.groupIdentifier"),
    row("identifier", SearchParamType::Token, "RequestGroup.identifier"),
    row("instantiates-canonical", SearchParamType::Reference, "RequestGroup.instantiatesCanonical"),
    row("instantiates-uri", SearchParamType::Uri, "RequestGroup.instantiatesUri"),
    row("intent", SearchParamType::Token, "RequestGroup.intent"),
    row("participant", SearchParamType::Reference, "RequestGroup.action.participant"),
    row("patient", SearchParamType::Reference, "RequestGroup.subject.where(resolve() is Patient)"),
    row("priority", SearchParamType::Token, "RequestGroup.priority"),
    row("status", SearchParamType::Token, "RequestGroup.status"),
    row("subject", SearchParamType::Reference, "RequestGroup.subject"),
];

const DEVICE_REQUEST: &[ParamRow] = &[
    row("code", SearchParamType::Token, "(DeviceRequest.code as CodeableConcept)"),
    row("identifier", SearchParamType::Token, "DeviceRequest.identifier"),
    row("patient", SearchParamType::Reference, "DeviceRequest.subject.where(resolve() is Patient)"),
    row("encounter", SearchParamType::Reference, "DeviceRequest.encounter"),
    row("authored-on", SearchParamType::Date, "DeviceRequest.authoredOn"),
    row("based-on", SearchParamType::Reference, "DeviceRequest.basedOn"),
    row("device", SearchParamType::Reference, "(DeviceRequest.code as Reference)"),
    row("event-date", SearchParamType::Date, "(DeviceRequest.occurrence as dateTime) | (DeviceRequest.occurrence as Period)"),
    row("group-identifier", SearchParamType::Token, "DeviceRequest.groupIdentifier"),
    row("instantiates-canonical", SearchParamType::Reference, "DeviceRequest.instantiatesCanonical"),
    row("instantiates-uri", SearchParamType::Uri, "DeviceRequest.instantiatesUri"),
    row("insurance", SearchParamType::Reference, "DeviceRequest.insurance"),
    row("intent", SearchParamType::Token, "DeviceRequest.intent"),
    row("performer", SearchParamType::Reference, "DeviceRequest.performer"),
    row("prior-request", SearchParamType::Reference, "DeviceRequest.priorRequest"),
    row("requester", SearchParamType::Reference, "DeviceRequest.requester"),
    row("status", SearchParamType::Token, "DeviceRequest.status"),
    row("subject", SearchParamType::Reference, "DeviceRequest.subject"),
];

const MESSAGE_HEADER: &[ParamRow] = &[
    row("author", SearchParamType::Reference, "MessageHeader.author"),
    row("code", SearchParamType::Token, "MessageHeader.response.code"),
    row("destination", SearchParamType::String, "MessageHeader.destination.name"),
    row("destination-uri", SearchParamType::Uri, "MessageHeader.destination.endpoint"),
    row("enterer", SearchParamType::Reference, "MessageHeader.enterer"),
    row("event", SearchParamType::Token, "MessageHeader.event"),
    row("focus", SearchParamType::Reference, "MessageHeader.focus"),
    row("receiver", SearchParamType::Reference, "MessageHeader.destination.receiver"),
    row("response-id", SearchParamType::Token, "MessageHeader.response.identifier"),
    row("responsible", SearchParamType::Reference, "MessageHeader.responsible"),
    row("sender", SearchParamType::Reference, "MessageHeader.sender"),
    row("source", SearchParamType::String, "MessageHeader.source.name"),
    row("source-uri", SearchParamType::Uri, "MessageHeader.source.endpoint"),
    row("target", SearchParamType::Reference, "MessageHeader.destination.target"),
];

const IMMUNIZATION_RECOMMENDATION: &[ParamRow] = &[
    row("date", SearchParamType::Date, "ImmunizationRecommendation.date"),
    row("identifier", SearchParamType::Token, "ImmunizationRecommendation.identifier"),
    row("information", SearchParamType::Reference, "ImmunizationRecommendation.recommendation.supportingPatientInformation"),
    row("patient", SearchParamType::Reference, "ImmunizationRecommendation.patient"),
    row("status", SearchParamType::Token, "ImmunizationRecommendation.recommendation.forecastStatus"),
    row("support", SearchParamType::Reference, "ImmunizationRecommendation.recommendation.supportingImmunization"),
    row("target-disease", SearchParamType::Token, "ImmunizationRecommendation.recommendation.targetDisease"),
    row("vaccine-type", SearchParamType::Token, "ImmunizationRecommendation.recommendation.vaccineCode"),
];

const PROVENANCE: &[ParamRow] = &[
    row("agent", SearchParamType::Reference, "Provenance.agent.who"),
    row("agent-role", SearchParamType::Token, "Provenance.agent.role"),
    row("agent-type", SearchParamType::Token, "Provenance.agent.type"),
    row("entity", SearchParamType::Reference, "Provenance.entity.what"),
    row("location", SearchParamType::Reference, "Provenance.location"),
    row("patient", SearchParamType::Reference, "Provenance.target.where(resolve() is Patient)"),
    row("recorded", SearchParamType::Date, "Provenance.recorded"),
    row("signature-type", SearchParamType::Token, "Provenance.signature.type"),
    row("target", SearchParamType::Reference, "Provenance.target"),
    row("when", SearchParamType::Date, "(Provenance.occurred as dateTime)"),
];

const TASK: &[ParamRow] = &[
    row("authored-on", SearchParamType::Date, "Task.authoredOn"),
    row("based-on", SearchParamType::Reference, "Task.basedOn"),
    row("business-status", SearchParamType::Token, "Task.businessStatus"),
    row("code", SearchParamType::Token, "Task.code"),
    row("encounter", SearchParamType::Reference, "Task.encounter"),
    row("focus", SearchParamType::Reference, "Task.focus"),
    row("group-identifier", SearchParamType::Token, "Task.groupIdentifier"),
    row("identifier", SearchParamType::Token, "Task.identifier"),
    row("intent", SearchParamType::Token, "Task.intent"),
    row("modified", SearchParamType::Date, "Task.lastModified"),
    row("owner", SearchParamType::Reference, "Task.owner"),
    row("part-of", SearchParamType::Reference, "Task.partOf"),
    row("patient", SearchParamType::Reference, "Task.for.where(resolve() is Patient)"),
    row("performer", SearchParamType::Token, "Task.performerType"),
    row("period", SearchParamType::Date, "Task.executionPeriod"),
    row("priority", SearchParamType::Token, "Task.priority"),
    row("requester", SearchParamType::Reference, "Task.requester"),
    row("status", SearchParamType::Token, "Task.status"),
    row("subject", SearchParamType::Reference, "Task.for"),
];

const QUESTIONNAIRE: &[ParamRow] = &[
    row("code", SearchParamType::Token, "Questionnaire.item.code"),
    row("context", SearchParamType::Token, "(Questionnaire.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(Questionnaire.useContext.value as Quantity) | (Questionnaire.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "Questionnaire.useContext.code"),
    row("date", SearchParamType::Date, "Questionnaire.date"),
    row("definition", SearchParamType::Uri, "Questionnaire.item.definition"),
    row("description", SearchParamType::String, "Questionnaire.description"),
    row("effective", SearchParamType::Date, "Questionnaire.effectivePeriod"),
    row("identifier", SearchParamType::Token, "Questionnaire.identifier"),
    row("jurisdiction", SearchParamType::Token, "Questionnaire.jurisdiction"),
    row("name", SearchParamType::String, "Questionnaire.name"),
    row("publisher", SearchParamType::String, "Questionnaire.publisher"),
    row("status", SearchParamType::Token, "Questionnaire.status"),
    row("subject-type", SearchParamType::Token, "Questionnaire.subjectType"),
    row("title", SearchParamType::String, "Questionnaire.title"),
    row("url", SearchParamType::Uri, "Questionnaire.url"),
    row("version", SearchParamType::Token, "Questionnaire.version"),
    row("context-type-quantity", SearchParamType::Composite, "Questionnaire.useContext"),
    row("context-type-value", SearchParamType::Composite, "Questionnaire.useContext"),
];

const EXPLANATION_OF_BENEFIT: &[ParamRow] = &[
    row("care-team", SearchParamType::Reference, "ExplanationOfBenefit.careTeam.provider"),
    row("claim", SearchParamType::Reference, "ExplanationOfBenefit.claim"),
    row("coverage", SearchParamType::Reference, "ExplanationOfBenefit.insurance.coverage"),
    row("created", SearchParamType::Date, "ExplanationOfBenefit.created"),
    row("detail-udi", SearchParamType::Reference, "ExplanationOfBenefit.item.detail.udi"),
    row("disposition", SearchParamType::String, "ExplanationOfBenefit.disposition"),
    row("encounter", SearchParamType::Reference, "ExplanationOfBenefit.item.encounter"),
    row("enterer", SearchParamType::Reference, "ExplanationOfBenefit.enterer"),
    row("facility", SearchParamType::Reference, "ExplanationOfBenefit.facility"),
    row("identifier", SearchParamType::Token, "ExplanationOfBenefit.identifier"),
    row("item-udi", SearchParamType::Reference, "ExplanationOfBenefit.item.udi"),
    row("patient", SearchParamType::Reference, "ExplanationOfBenefit.patient"),
    row("payee", SearchParamType::Reference, "ExplanationOfBenefit.payee.party"),
    row("procedure-udi", SearchParamType::Reference, "ExplanationOfBenefit.procedure.udi"),
    row("provider", SearchParamType::Reference, "ExplanationOfBenefit.provider"),
    row("status", SearchParamType::Token, "ExplanationOfBenefit.status"),
    row("subdetail-udi", SearchParamType::Reference, "ExplanationOfBenefit.item.detail.subDetail.udi"),
];

const MEDICINAL_PRODUCT_PHARMACEUTICAL: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "MedicinalProductPharmaceutical.identifier"),
    row("route", SearchParamType::Token, "MedicinalProductPharmaceutical.routeOfAdministration.code"),
    row("target-species", SearchParamType::Token, "MedicinalProductPharmaceutical.routeOfAdministration.targetSpecies.code"),
];

const RESEARCH_STUDY: &[ParamRow] = &[
    row("category", SearchParamType::Token, "ResearchStudy.category"),
    row("date", SearchParamType::Date, "ResearchStudy.period"),
    row("focus", SearchParamType::Token, "ResearchStudy.focus"),
    row("identifier", SearchParamType::Token, "ResearchStudy.identifier"),
    row("keyword", SearchParamType::Token, "ResearchStudy.keyword"),
    row("location", SearchParamType::Token, "ResearchStudy.location"),
    row("partof", SearchParamType::Reference, "ResearchStudy.partOf"),
    row("principalinvestigator", SearchParamType::Reference, "ResearchStudy.principalInvestigator"),
    row("protocol", SearchParamType::Reference, "ResearchStudy.protocol"),
    row("site", SearchParamType::Reference, "ResearchStudy.site"),
    row("sponsor", SearchParamType::Reference, "ResearchStudy.sponsor"),
    row("status", SearchParamType::Token, "ResearchStudy.status"),
    row("title", SearchParamType::String, "ResearchStudy.title"),
];

const SPECIMEN: &[ParamRow] = &[
    row("accession", SearchParamType::Token, "Specimen.accessionIdentifier"),
    row("bodysite", SearchParamType::Token, "Specimen.collection.bodySite"),
    row("collected", SearchParamType::Date, "Specimen.collection.collected"),
    row("collector", SearchParamType::Reference, "Specimen.collection.collector"),
    row("container", SearchParamType::Token, "Specimen.container.type"),
    row("container-id", SearchParamType::Token, "Specimen.container.identifier"),
    row("identifier", SearchParamType::Token, "Specimen.identifier"),
    row("parent", SearchParamType::Reference, "Specimen.parent"),
    row("patient", SearchParamType::Reference, "Specimen.subject.where(resolve() is Patient)"),
    row("status", SearchParamType::Token, "Specimen.status"),
    row("subject", SearchParamType::Reference, "Specimen.subject"),
    row("type", SearchParamType::Token, "Specimen.type"),
];

const ALLERGY_INTOLERANCE: &[ParamRow] = &[
    row("asserter", SearchParamType::Reference, "AllergyIntolerance.asserter"),
    row("category", SearchParamType::Token, "AllergyIntolerance.category"),
    row("clinical-status", SearchParamType::Token, "AllergyIntolerance.clinicalStatus"),
    row("code", SearchParamType::Token, "AllergyIntolerance.code | AllergyIntolerance.reaction.substance"),
    row("criticality", SearchParamType::Token, "AllergyIntolerance.criticality"),
    row("date", SearchParamType::Date, "AllergyIntolerance.recordedDate"),
    row("identifier", SearchParamType::Token, "AllergyIntolerance.identifier"),
    row("last-date", SearchParamType::Date, "AllergyIntolerance.lastOccurrence"),
    row("manifestation", SearchParamType::Token, "AllergyIntolerance.reaction.manifestation"),
    row("onset", SearchParamType::Date, "AllergyIntolerance.reaction.onset"),
    row("patient", SearchParamType::Reference, "AllergyIntolerance.patient"),
    row("recorder", SearchParamType::Reference, "AllergyIntolerance.recorder"),
    row("route", SearchParamType::Token, "AllergyIntolerance.reaction.exposureRoute"),
    row("severity", SearchParamType::Token, "AllergyIntolerance.reaction.severity"),
    row("type", SearchParamType::Token, "AllergyIntolerance.type"),
    row("verification-status", SearchParamType::Token, "AllergyIntolerance.verificationStatus"),
];

const CARE_PLAN: &[ParamRow] = &[
    row("date", SearchParamType::Date, "CarePlan.period"),
    row("identifier", SearchParamType::Token, "CarePlan.identifier"),
    row("patient", SearchParamType::Reference, "CarePlan.subject.where(resolve() is Patient)"),
    row("activity-code", SearchParamType::Token, "CarePlan.activity.detail.code"),
    row("activity-date", SearchParamType::Date, "CarePlan.activity.detail.scheduled"),
    row("activity-reference", SearchParamType::Reference, "CarePlan.activity.reference"),
    row("based-on", SearchParamType::Reference, "CarePlan.basedOn"),
    row("care-team", SearchParamType::Reference, "CarePlan.careTeam"),
    row("category", SearchParamType::Token, "CarePlan.category"),
    row("condition", SearchParamType::Reference, "CarePlan.addresses"),
    row("encounter", SearchParamType::Reference, "CarePlan.encounter"),
    row("goal", SearchParamType::Reference, "CarePlan.goal"),
    row("instantiates-canonical", SearchParamType::Reference, "CarePlan.instantiatesCanonical"),
    row("instantiates-uri", SearchParamType::Uri, "CarePlan.instantiatesUri"),
    row("intent", SearchParamType::Token, "CarePlan.intent"),
    row("part-of", SearchParamType::Reference, "CarePlan.partOf"),
    row("performer", SearchParamType::Reference, "CarePlan.activity.detail.performer"),
    row("replaces", SearchParamType::Reference, "CarePlan.replaces"),
    row("status", SearchParamType::Token, "CarePlan.status"),
    row("subject", SearchParamType::Reference, "CarePlan.subject"),
];

const STRUCTURE_DEFINITION: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(StructureDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(StructureDefinition.useContext.value as Quantity) | (StructureDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "StructureDefinition.useContext.code"),
    row("date", SearchParamType::Date, "StructureDefinition.date"),
    row("description", SearchParamType::String, "StructureDefinition.description"),
    row("jurisdiction", SearchParamType::Token, "StructureDefinition.jurisdiction"),
    row("name", SearchParamType::String, "StructureDefinition.name"),
    row("publisher", SearchParamType::String, "StructureDefinition.publisher"),
    row("status", SearchParamType::Token, "StructureDefinition.status"),
    row("title", SearchParamType::String, "StructureDefinition.title"),
    row("url", SearchParamType::Uri, "StructureDefinition.url"),
    row("version", SearchParamType::Token, "StructureDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "StructureDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "StructureDefinition.useContext"),
    row("identifier", SearchParamType::Token, "StructureDefinition.identifier"),
    row("abstract", SearchParamType::Token, "StructureDefinition.abstract"),
    row("base", SearchParamType::Reference, "StructureDefinition.baseDefinition"),
    row("base-path", SearchParamType::Token, "StructureDefinition.snapshot.element.base.path | StructureDefinition.differential.element.base.path"),
    row("derivation", SearchParamType::Token, "StructureDefinition.derivation"),
    row("experimental", SearchParamType::Token, "StructureDefinition.experimental"),
    row("ext-context", SearchParamType::Token, "StructureDefinition.context.type"),
    row("keyword", SearchParamType::Token, "StructureDefinition.keyword"),
    row("kind", SearchParamType::Token, "StructureDefinition.kind"),
    row("path", SearchParamType::Token, "StructureDefinition.snapshot.element.path | StructureDefinition.differential.element.path"),
    row("type", SearchParamType::Uri, "StructureDefinition.type"),
    row("valueset", SearchParamType::Reference, "StructureDefinition.snapshot.element.binding.valueSet"),
];

const EPISODE_OF_CARE: &[ParamRow] = &[
    row("date", SearchParamType::Date, "EpisodeOfCare.period"),
    row("identifier", SearchParamType::Token, "EpisodeOfCare.identifier"),
    row("patient", SearchParamType::Reference, "EpisodeOfCare.patient"),
    row("type", SearchParamType::Token, "EpisodeOfCare.type"),
    row("care-manager", SearchParamType::Reference, "EpisodeOfCare.careManager.where(resolve() is Practitioner)"),
    row("condition", SearchParamType::Reference, "EpisodeOfCare.diagnosis.condition"),
    row("incoming-referral", SearchParamType::Reference, "EpisodeOfCare.referralRequest"),
    row("organization", SearchParamType::Reference, "EpisodeOfCare.managingOrganization"),
    row("status", SearchParamType::Token, "EpisodeOfCare.status"),
];

const CHARGE_ITEM_DEFINITION: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(ChargeItemDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(ChargeItemDefinition.useContext.value as Quantity) | (ChargeItemDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "ChargeItemDefinition.useContext.code"),
    row("date", SearchParamType::Date, "ChargeItemDefinition.date"),
    row("description", SearchParamType::String, "ChargeItemDefinition.description"),
    row("effective", SearchParamType::Date, "ChargeItemDefinition.effectivePeriod"),
    row("identifier", SearchParamType::Token, "ChargeItemDefinition.identifier"),
    row("jurisdiction", SearchParamType::Token, "ChargeItemDefinition.jurisdiction"),
    row("publisher", SearchParamType::String, "ChargeItemDefinition.publisher"),
    row("status", SearchParamType::Token, "ChargeItemDefinition.status"),
    row("title", SearchParamType::String, "ChargeItemDefinition.title"),
    row("url", SearchParamType::Uri, "ChargeItemDefinition.url"),
    row("version", SearchParamType::Token, "ChargeItemDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "ChargeItemDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "ChargeItemDefinition.useContext"),
];

const PROCEDURE: &[ParamRow] = &[
    row("code", SearchParamType::Token, "Procedure.code"),
    row("date", SearchParamType::Date, "Procedure.performed"),
    row("identifier", SearchParamType::Token, "Procedure.identifier"),
    row("patient", SearchParamType::Reference, "Procedure.subject.where(resolve() is Patient)"),
    row("encounter", SearchParamType::Reference, "Procedure.encounter"),
    row("based-on", SearchParamType::Reference, "Procedure.basedOn"),
    row("category", SearchParamType::Token, "Procedure.category"),
    row("instantiates-canonical", SearchParamType::Reference, "Procedure.instantiatesCanonical"),
    row("instantiates-uri", SearchParamType::Uri, "Procedure.instantiatesUri"),
    row("location", SearchParamType::Reference, "Procedure.location"),
    row("part-of", SearchParamType::Reference, "Procedure.partOf"),
    row("performer", SearchParamType::Reference, "Procedure.performer.actor"),
    row("reason-code", SearchParamType::Token, "Procedure.reasonCode"),
    row("reason-reference", SearchParamType::Reference, "Procedure.reasonReference"),
    row("status", SearchParamType::Token, "Procedure.status"),
    row("subject", SearchParamType::Reference, "Procedure.subject"),
];

const LIST: &[ParamRow] = &[
    row("code", SearchParamType::Token, "List.code"),
    row("date", SearchParamType::Date, "List.date"),
    row("identifier", SearchParamType::Token, "List.identifier"),
    row("patient", SearchParamType::Reference, "List.subject.where(resolve() is Patient)"),
    row("encounter", SearchParamType::Reference, "List.encounter"),
    row("empty-reason", SearchParamType::Token, "List.emptyReason"),
    row("item", SearchParamType::Reference, "List.entry.item"),
    row("notes", SearchParamType::String, "List.note.text"),
    row("source", SearchParamType::Reference, "List.source"),
    row("status", SearchParamType::Token, "List.status"),
    row("subject", SearchParamType::Reference, "List.subject"),
    row("title", SearchParamType::String, "List.title"),
];

const CONCEPT_MAP: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(ConceptMap.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(ConceptMap.useContext.value as Quantity) | (ConceptMap.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "ConceptMap.useContext.code"),
    row("date", SearchParamType::Date, "ConceptMap.date"),
    row("description", SearchParamType::String, "ConceptMap.description"),
    row("jurisdiction", SearchParamType::Token, "ConceptMap.jurisdiction"),
    row("name", SearchParamType::String, "ConceptMap.name"),
    row("publisher", SearchParamType::String, "ConceptMap.publisher"),
    row("status", SearchParamType::Token, "ConceptMap.status"),
    row("title", SearchParamType::String, "ConceptMap.title"),
    row("url", SearchParamType::Uri, "ConceptMap.url"),
    row("version", SearchParamType::Token, "ConceptMap.version"),
    row("context-type-quantity", SearchParamType::Composite, "ConceptMap.useContext"),
    row("context-type-value", SearchParamType::Composite, "ConceptMap.useContext"),
    row("identifier", SearchParamType::Token, "ConceptMap.identifier"),
    row("dependson", SearchParamType::Uri, "ConceptMap.group.element.target.dependsOn.property"),
    row("other", SearchParamType::Reference, "ConceptMap.group.unmapped.url"),
    row("product", SearchParamType::Uri, "ConceptMap.group.element.target.product.property"),
    row("source", SearchParamType::Reference, "(ConceptMap.source as canonical)"),
    row("source-code", SearchParamType::Token, "ConceptMap.group.element.code"),
    row("source-system", SearchParamType::Uri, "ConceptMap.group.source"),
    row("source-uri", SearchParamType::Reference, "(ConceptMap.source as uri)"),
    row("target", SearchParamType::Reference, "(ConceptMap.target as canonical)"),
    row("target-code", SearchParamType::Token, "ConceptMap.group.element.target.code"),
    row("target-system", SearchParamType::Uri, "ConceptMap.group.target"),
    row("target-uri", SearchParamType::Reference, "(ConceptMap.target as uri)"),
];

const OPERATION_DEFINITION: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(OperationDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(OperationDefinition.useContext.value as Quantity) | (OperationDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "OperationDefinition.useContext.code"),
    row("date", SearchParamType::Date, "OperationDefinition.date"),
    row("description", SearchParamType::String, "OperationDefinition.description"),
    row("jurisdiction", SearchParamType::Token, "OperationDefinition.jurisdiction"),
    row("name", SearchParamType::String, "OperationDefinition.name"),
    row("publisher", SearchParamType::String, "OperationDefinition.publisher"),
    row("status", SearchParamType::Token, "OperationDefinition.status"),
    row("title", SearchParamType::String, "OperationDefinition.title"),
    row("url", SearchParamType::Uri, "OperationDefinition.url"),
    row("version", SearchParamType::Token, "OperationDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "OperationDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "OperationDefinition.useContext"),
    row("base", SearchParamType::Reference, "OperationDefinition.base"),
    row("code", SearchParamType::Token, "OperationDefinition.code"),
    row("input-profile", SearchParamType::Reference, "OperationDefinition.inputProfile"),
    row("instance", SearchParamType::Token, "OperationDefinition.instance"),
    row("kind", SearchParamType::Token, "OperationDefinition.kind"),
    row("output-profile", SearchParamType::Reference, "OperationDefinition.outputProfile"),
    row("system", SearchParamType::Token, "OperationDefinition.system"),
    row("type", SearchParamType::Token, "OperationDefinition.type"),
];

const VALUE_SET: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(ValueSet.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(ValueSet.useContext.value as Quantity) | (ValueSet.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "ValueSet.useContext.code"),
    row("date", SearchParamType::Date, "ValueSet.date"),
    row("description", SearchParamType::String, "ValueSet.description"),
    row("jurisdiction", SearchParamType::Token, "ValueSet.jurisdiction"),
    row("name", SearchParamType::String, "ValueSet.name"),
    row("publisher", SearchParamType::String, "ValueSet.publisher"),
    row("status", SearchParamType::Token, "ValueSet.status"),
    row("title", SearchParamType::String, "ValueSet.title"),
    row("url", SearchParamType::Uri, "ValueSet.url"),
    row("version", SearchParamType::Token, "ValueSet.version"),
    row("context-type-quantity", SearchParamType::Composite, "ValueSet.useContext"),
    row("context-type-value", SearchParamType::Composite, "ValueSet.useContext"),
    row("identifier", SearchParamType::Token, "ValueSet.identifier"),
    row("code", SearchParamType::Token, "ValueSet.expansion.contains.code | ValueSet.compose.include.concept.code"),
    row("expansion", SearchParamType::Uri, "ValueSet.expansion.identifier"),
    row("reference", SearchParamType::Uri, "ValueSet.compose.include.system"),
];

const MEDICATION_REQUEST: &[ParamRow] = &[
    row("code", SearchParamType::Token, "(MedicationRequest.medication as CodeableConcept)"),
    row("identifier", SearchParamType::Token, "MedicationRequest.identifier"),
    row("patient", SearchParamType::Reference, "MedicationRequest.subject.where(resolve() is Patient)"),
    row("medication", SearchParamType::Reference, "(MedicationRequest.medication as Reference)"),
    row("status", SearchParamType::Token, "MedicationRequest.status"),
    row("authoredon", SearchParamType::Date, "MedicationRequest.authoredOn"),
    row("category", SearchParamType::Token, "MedicationRequest.category"),
    row("date", SearchParamType::Date, "MedicationRequest.dosageInstruction.timing.event"),
    row("encounter", SearchParamType::Reference, "MedicationRequest.encounter"),
    row("intended-dispenser", SearchParamType::Reference, "MedicationRequest.dispenseRequest.performer"),
    row("intended-performer", SearchParamType::Reference, "MedicationRequest.performer"),
    row("intended-performertype", SearchParamType::Token, "MedicationRequest.performerType"),
    row("intent", SearchParamType::Token, "MedicationRequest.intent"),
    row("priority", SearchParamType::Token, "MedicationRequest.priority"),
    row("requester", SearchParamType::Reference, "MedicationRequest.requester"),
    row("subject", SearchParamType::Reference, "MedicationRequest.subject"),
];

const IMMUNIZATION: &[ParamRow] = &[
    row("date", SearchParamType::Date, "Immunization.occurrence"),
    row("identifier", SearchParamType::Token, "Immunization.identifier"),
    row("patient", SearchParamType::Reference, "Immunization.patient"),
    row("location", SearchParamType::Reference, "Immunization.location"),
    row("lot-number", SearchParamType::String, "Immunization.lotNumber"),
    row("manufacturer", SearchParamType::Reference, "Immunization.manufacturer"),
    row("performer", SearchParamType::Reference, "Immunization.performer.actor"),
    row("reaction", SearchParamType::Reference, "Immunization.reaction.detail"),
    row("reaction-date", SearchParamType::Date, "Immunization.reaction.date"),
    row("reason-code", SearchParamType::Token, "Immunization.reasonCode"),
    row("reason-reference", SearchParamType::Reference, "Immunization.reasonReference"),
    row("series", SearchParamType::String, "Immunization.protocolApplied.series"),
    row("status", SearchParamType::Token, "Immunization.status"),
    row("status-reason", SearchParamType::Token, "Immunization.statusReason"),
    row("target-disease", SearchParamType::Token, "Immunization.protocolApplied.targetDisease"),
    row("vaccine-code", SearchParamType::Token, "Immunization.vaccineCode"),
];

const EFFECT_EVIDENCE_SYNTHESIS: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(EffectEvidenceSynthesis.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(EffectEvidenceSynthesis.useContext.value as Quantity) | (EffectEvidenceSynthesis.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "EffectEvidenceSynthesis.useContext.code"),
    row("date", SearchParamType::Date, "EffectEvidenceSynthesis.date"),
    row("description", SearchParamType::String, "EffectEvidenceSynthesis.description"),
    row("effective", SearchParamType::Date, "EffectEvidenceSynthesis.effectivePeriod"),
    row("identifier", SearchParamType::Token, "EffectEvidenceSynthesis.identifier"),
    row("jurisdiction", SearchParamType::Token, "EffectEvidenceSynthesis.jurisdiction"),
    row("name", SearchParamType::String, "EffectEvidenceSynthesis.name"),
    row("publisher", SearchParamType::String, "EffectEvidenceSynthesis.publisher"),
    row("status", SearchParamType::Token, "EffectEvidenceSynthesis.status"),
    row("title", SearchParamType::String, "EffectEvidenceSynthesis.title"),
    row("url", SearchParamType::Uri, "EffectEvidenceSynthesis.url"),
    row("version", SearchParamType::Token, "EffectEvidenceSynthesis.version"),
    row("context-type-quantity", SearchParamType::Composite, "EffectEvidenceSynthesis.useContext"),
    row("context-type-value", SearchParamType::Composite, "EffectEvidenceSynthesis.useContext"),
];

const DEVICE: &[ParamRow] = &[
    row("device-name", SearchParamType::String, "Device.deviceName.name | Device.type.coding.display | Device.type.text"),
    row("identifier", SearchParamType::Token, "Device.identifier"),
    row("location", SearchParamType::Reference, "Device.location"),
    row("manufacturer", SearchParamType::String, "Device.manufacturer"),
    row("model", SearchParamType::String, "Device.modelNumber"),
    row("organization", SearchParamType::Reference, "Device.owner"),
    row("patient", SearchParamType::Reference, "Device.patient"),
    row("status", SearchParamType::Token, "Device.status"),
    row("type", SearchParamType::Token, "Device.type"),
    row("udi-carrier", SearchParamType::String, "Device.udiCarrier.carrierHRF"),
    row("udi-di", SearchParamType::String, "Device.udiCarrier.deviceIdentifier"),
    row("url", SearchParamType::Uri, "Device.url"),
];

const VISION_PRESCRIPTION: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "VisionPrescription.identifier"),
    row("patient", SearchParamType::Reference, "VisionPrescription.patient"),
    row("encounter", SearchParamType::Reference, "VisionPrescription.encounter"),
    row("datewritten", SearchParamType::Date, "VisionPrescription.dateWritten"),
    row("prescriber", SearchParamType::Reference, "VisionPrescription.prescriber"),
    row("status", SearchParamType::Token, "VisionPrescription.status"),
];

const RESOURCE: &[ParamRow] = &[
    row("_id", SearchParamType::Token, "Resource.id"),
    row("_lastUpdated", SearchParamType::Date, "Resource.meta.lastUpdated"),
    row("_profile", SearchParamType::Uri, "Resource.meta.profile"),
    row("_security", SearchParamType::Token, "Resource.meta.security"),
    row("_source", SearchParamType::Uri, "Resource.meta.source"),
    row("_tag", SearchParamType::Token, "Resource.meta.tag"),
];

const MEDIA: &[ParamRow] = &[
    row("based-on", SearchParamType::Reference, "Media.basedOn"),
    row("created", SearchParamType::Date, "Media.created"),
    row("device", SearchParamType::Reference, "Media.device"),
    row("encounter", SearchParamType::Reference, "Media.encounter"),
    row("identifier", SearchParamType::Token, "Media.identifier"),
    row("modality", SearchParamType::Token, "Media.modality"),
    row("operator", SearchParamType::Reference, "Media.operator"),
    row("patient", SearchParamType::Reference, "Media.subject.where(resolve() is Patient)"),
    row("site", SearchParamType::Token, "Media.bodySite"),
    row("status", SearchParamType::Token, "Media.status"),
    row("subject", SearchParamType::Reference, "Media.subject"),
    row("type", SearchParamType::Token, "Media.type"),
    row("view", SearchParamType::Token, "Media.view"),
];

const MEDICINAL_PRODUCT_CONTRAINDICATION: &[ParamRow] = &[
    row("subject", SearchParamType::Reference, "MedicinalProductContraindication.subject"),
];

const EVIDENCE_VARIABLE: &[ParamRow] = &[
    row("composed-of", SearchParamType::Reference, "EvidenceVariable.relatedArtifact.where(type='composed-of').resource"),
    row("context", SearchParamType::Token, "(EvidenceVariable.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(EvidenceVariable.useContext.value as Quantity) | (EvidenceVariable.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "EvidenceVariable.useContext.code"),
    row("date", SearchParamType::Date, "EvidenceVariable.date"),
    row("depends-on", SearchParamType::Reference, "EvidenceVariable.relatedArtifact.where(type='depends-on').resource"),
    row("derived-from", SearchParamType::Reference, "EvidenceVariable.relatedArtifact.where(type='derived-from').resource"),
    row("description", SearchParamType::String, "EvidenceVariable.description"),
    row("effective", SearchParamType::Date, "EvidenceVariable.effectivePeriod"),
    row("identifier", SearchParamType::Token, "EvidenceVariable.identifier"),
    row("jurisdiction", SearchParamType::Token, "EvidenceVariable.jurisdiction"),
    row("name", SearchParamType::String, "EvidenceVariable.name"),
    row("predecessor", SearchParamType::Reference, "EvidenceVariable.relatedArtifact.where(type='predecessor').resource"),
    row("publisher", SearchParamType::String, "EvidenceVariable.publisher"),
    row("status", SearchParamType::Token, "EvidenceVariable.status"),
    row("successor", SearchParamType::Reference, "EvidenceVariable.relatedArtifact.where(type='successor').resource"),
    row("title", SearchParamType::String, "EvidenceVariable.title"),
    row("topic", SearchParamType::Token, "EvidenceVariable.topic"),
    row("url", SearchParamType::Uri, "EvidenceVariable.url"),
    row("version", SearchParamType::Token, "EvidenceVariable.version"),
    row("context-type-quantity", SearchParamType::Composite, "EvidenceVariable.useContext"),
    row("context-type-value", SearchParamType::Composite, "EvidenceVariable.useContext"),
];

const MOLECULAR_SEQUENCE: &[ParamRow] = &[
    row("chromosome", SearchParamType::Token, "MolecularSequence.referenceSeq.chromosome"),
    row("identifier", SearchParamType::Token, "MolecularSequence.identifier"),
    row("patient", SearchParamType::Reference, "MolecularSequence.patient"),
    row("referenceseqid", SearchParamType::Token, "MolecularSequence.referenceSeq.referenceSeqId"),
    row("type", SearchParamType::Token, "MolecularSequence.type"),
    row("variant-end", SearchParamType::Number, "MolecularSequence.variant.end"),
    row("variant-start", SearchParamType::Number, "MolecularSequence.variant.start"),
    row("window-end", SearchParamType::Number, "MolecularSequence.referenceSeq.windowEnd"),
    row("window-start", SearchParamType::Number, "MolecularSequence.referenceSeq.windowStart"),
    row("chromosome-variant-coordinate", SearchParamType::Composite, "MolecularSequence.variant"),
    row("chromosome-window-coordinate", SearchParamType::Composite, "MolecularSequence.referenceSeq"),
    row("referenceseqid-variant-coordinate", SearchParamType::Composite, "MolecularSequence.variant"),
    row("referenceseqid-window-coordinate", SearchParamType::Composite, "MolecularSequence.referenceSeq"),
];

const MEDICINAL_PRODUCT: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "MedicinalProduct.identifier"),
    row("name", SearchParamType::String, "MedicinalProduct.name.productName"),
    row("name-language", SearchParamType::Token, "MedicinalProduct.name.countryLanguage.language"),
];

const DEVICE_METRIC: &[ParamRow] = &[
    row("category", SearchParamType::Token, "DeviceMetric.category"),
    row("identifier", SearchParamType::Token, "DeviceMetric.identifier"),
    row("parent", SearchParamType::Reference, "DeviceMetric.parent"),
    row("source", SearchParamType::Reference, "DeviceMetric.source"),
    row("type", SearchParamType::Token, "DeviceMetric.type"),
];

const FLAG: &[ParamRow] = &[
    row("date", SearchParamType::Date, "Flag.period"),
    row("patient", SearchParamType::Reference, "Flag.subject.where(resolve() is Patient)"),
    row("encounter", SearchParamType::Reference, "Flag.encounter"),
    row("author", SearchParamType::Reference, "Flag.author"),
    row("identifier", SearchParamType::Token, "Flag.identifier"),
    row("subject", SearchParamType::Reference, "Flag.subject"),
];

const CODE_SYSTEM: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(CodeSystem.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(CodeSystem.useContext.value as Quantity) | (CodeSystem.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "CodeSystem.useContext.code"),
    row("date", SearchParamType::Date, "CodeSystem.date"),
    row("description", SearchParamType::String, "CodeSystem.description"),
    row("jurisdiction", SearchParamType::Token, "CodeSystem.jurisdiction"),
    row("name", SearchParamType::String, "CodeSystem.name"),
    row("publisher", SearchParamType::String, "CodeSystem.publisher"),
    row("status", SearchParamType::Token, "CodeSystem.status"),
    row("title", SearchParamType::String, "CodeSystem.title"),
    row("url", SearchParamType::Uri, "CodeSystem.url"),
    row("version", SearchParamType::Token, "CodeSystem.version"),
    row("context-type-quantity", SearchParamType::Composite, "CodeSystem.useContext"),
    row("context-type-value", SearchParamType::Composite, "CodeSystem.useContext"),
    row("code", SearchParamType::Token, "CodeSystem.concept.code"),
    row("content-mode", SearchParamType::Token, "CodeSystem.content"),
    row("identifier", SearchParamType::Token, "CodeSystem.identifier"),
    row("language", SearchParamType::Token, "CodeSystem.concept.designation.language"),
    row("supplements", SearchParamType::Reference, "CodeSystem.supplements"),
    row("system", SearchParamType::Uri, "CodeSystem.url"),
];

const RISK_EVIDENCE_SYNTHESIS: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(RiskEvidenceSynthesis.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(RiskEvidenceSynthesis.useContext.value as Quantity) | (RiskEvidenceSynthesis.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "RiskEvidenceSynthesis.useContext.code"),
    row("date", SearchParamType::Date, "RiskEvidenceSynthesis.date"),
    row("description", SearchParamType::String, "RiskEvidenceSynthesis.description"),
    row("effective", SearchParamType::Date, "RiskEvidenceSynthesis.effectivePeriod"),
    row("identifier", SearchParamType::Token, "RiskEvidenceSynthesis.identifier"),
    row("jurisdiction", SearchParamType::Token, "RiskEvidenceSynthesis.jurisdiction"),
    row("name", SearchParamType::String, "RiskEvidenceSynthesis.name"),
    row("publisher", SearchParamType::String, "RiskEvidenceSynthesis.publisher"),
    row("status", SearchParamType::Token, "RiskEvidenceSynthesis.status"),
    row("title", SearchParamType::String, "RiskEvidenceSynthesis.title"),
    row("url", SearchParamType::Uri, "RiskEvidenceSynthesis.url"),
    row("version", SearchParamType::Token, "RiskEvidenceSynthesis.version"),
    row("context-type-quantity", SearchParamType::Composite, "RiskEvidenceSynthesis.useContext"),
    row("context-type-value", SearchParamType::Composite, "RiskEvidenceSynthesis.useContext"),
];

const APPOINTMENT_RESPONSE: &[ParamRow] = &[
    row("actor", SearchParamType::Reference, "AppointmentResponse.actor"),
    row("appointment", SearchParamType::Reference, "AppointmentResponse.appointment"),
    row("identifier", SearchParamType::Token, "AppointmentResponse.identifier"),
    row("location", SearchParamType::Reference, "AppointmentResponse.actor.where(resolve() is Location)"),
    row("part-status", SearchParamType::Token, "AppointmentResponse.participantStatus"),
    row("patient", SearchParamType::Reference, "AppointmentResponse.actor.where(resolve() is Patient)"),
    row("practitioner", SearchParamType::Reference, "AppointmentResponse.actor.where(resolve() is Practitioner)"),
];

const STRUCTURE_MAP: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(StructureMap.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(StructureMap.useContext.value as Quantity) | (StructureMap.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "StructureMap.useContext.code"),
    row("date", SearchParamType::Date, "StructureMap.date"),
    row("description", SearchParamType::String, "StructureMap.description"),
    row("jurisdiction", SearchParamType::Token, "StructureMap.jurisdiction"),
    row("name", SearchParamType::String, "StructureMap.name"),
    row("publisher", SearchParamType::String, "StructureMap.publisher"),
    row("status", SearchParamType::Token, "StructureMap.status"),
    row("title", SearchParamType::String, "StructureMap.title"),
    row("url", SearchParamType::Uri, "StructureMap.url"),
    row("version", SearchParamType::Token, "StructureMap.version"),
    row("context-type-quantity", SearchParamType::Composite, "StructureMap.useContext"),
    row("context-type-value", SearchParamType::Composite, "StructureMap.useContext"),
    row("identifier", SearchParamType::Token, "StructureMap.identifier"),
];

const ADVERSE_EVENT: &[ParamRow] = &[
    row("actuality", SearchParamType::Token, "AdverseEvent.actuality"),
    row("category", SearchParamType::Token, "AdverseEvent.category"),
    row("date", SearchParamType::Date, "AdverseEvent.date"),
    row("event", SearchParamType::Token, "AdverseEvent.event"),
    row("location", SearchParamType::Reference, "AdverseEvent.location"),
    row("recorder", SearchParamType::Reference, "AdverseEvent.recorder"),
    row("resultingcondition", SearchParamType::Reference, "AdverseEvent.resultingCondition"),
    row("seriousness", SearchParamType::Token, "AdverseEvent.seriousness"),
    row("severity", SearchParamType::Token, "AdverseEvent.severity"),
    row("study", SearchParamType::Reference, "AdverseEvent.study"),
    row("subject", SearchParamType::Reference, "AdverseEvent.subject"),
    row("substance", SearchParamType::Reference, "AdverseEvent.suspectEntity.instance"),
];

const GUIDANCE_RESPONSE: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "GuidanceResponse.identifier"),
    row("patient", SearchParamType::Reference, "GuidanceResponse.subject.where(resolve() is Patient)"),
    row("request", SearchParamType::Token, "GuidanceResponse.requestIdentifier"),
    row("subject", SearchParamType::Reference, "GuidanceResponse.subject"),
];

const OBSERVATION: &[ParamRow] = &[
    row("code", SearchParamType::Token, "Observation.code"),
    row("date", SearchParamType::Date, "Observation.effective"),
    row("identifier", SearchParamType::Token, "Observation.identifier"),
    row("patient", SearchParamType::Reference, "Observation.subject.where(resolve() is Patient)"),
    row("encounter", SearchParamType::Reference, "Observation.encounter"),
    row("based-on", SearchParamType::Reference, "Observation.basedOn"),
    row("category", SearchParamType::Token, "Observation.category"),
    row("combo-code", SearchParamType::Token, "Observation.code | Observation.component.code"),
    row("combo-data-absent-reason", SearchParamType::Token, "Observation.dataAbsentReason | Observation.component.dataAbsentReason"),
    row("combo-value-concept", SearchParamType::Token, "(Observation.value as CodeableConcept) | (Observation.component.value as CodeableConcept)"),
    row("combo-value-quantity", SearchParamType::Quantity, "(Observation.value as Quantity) | (Observation.value as SampledData) | (Observation.component.value as Quantity) | (Observation.component.value as SampledData)"),
    row("component-code", SearchParamType::Token, "Observation.component.code"),
    row("component-data-absent-reason", SearchParamType::Token, "Observation.component.dataAbsentReason"),
    row("component-value-concept", SearchParamType::Token, "(Observation.component.value as CodeableConcept)"),
    row("component-value-quantity", SearchParamType::Quantity, "(Observation.component.value as Quantity) | (Observation.component.value as SampledData)"),
    row("data-absent-reason", SearchParamType::Token, "Observation.dataAbsentReason"),
    row("derived-from", SearchParamType::Reference, "Observation.derivedFrom"),
    row("device", SearchParamType::Reference, "Observation.device"),
    row("focus", SearchParamType::Reference, "Observation.focus"),
    row("has-member", SearchParamType::Reference, "Observation.hasMember"),
    row("method", SearchParamType::Token, "Observation.method"),
    row("part-of", SearchParamType::Reference, "Observation.partOf"),
    row("performer", SearchParamType::Reference, "Observation.performer"),
    row("specimen", SearchParamType::Reference, "Observation.specimen"),
    row("status", SearchParamType::Token, "Observation.status"),
    row("subject", SearchParamType::Reference, "Observation.subject"),
    row("value-concept", SearchParamType::Token, "(Observation.value as CodeableConcept)"),
    row("value-date", SearchParamType::Date, "(Observation.value as dateTime) | (Observation.value as Period)"),
    row("value-quantity", SearchParamType::Quantity, "(Observation.value as Quantity) | (Observation.value as SampledData)"),
    row("value-string", SearchParamType::String, "(Observation.value as string) | (Observation.value as CodeableConcept).text"),
    row("code-value-concept", SearchParamType::Composite, "Observation"),
    row("code-value-date", SearchParamType::Composite, "Observation"),
    row("code-value-quantity", SearchParamType::Composite, "Observation"),
    row("code-value-string", SearchParamType::Composite, "Observation"),
    row("combo-code-value-concept", SearchParamType::Composite, "Observation | Observation.component"),
    row("combo-code-value-quantity", SearchParamType::Composite, "Observation | Observation.component"),
    row("component-code-value-concept", SearchParamType::Composite, "Observation.component"),
    row("component-code-value-quantity", SearchParamType::Composite, "Observation.component"),
];

const MEDICATION_ADMINISTRATION: &[ParamRow] = &[
    row("code", SearchParamType::Token, "(MedicationAdministration.medication as CodeableConcept)"),
    row("identifier", SearchParamType::Token, "MedicationAdministration.identifier"),
    row("patient", SearchParamType::Reference, "MedicationAdministration.subject.where(resolve() is Patient)"),
    row("context", SearchParamType::Reference, "MedicationAdministration.context"),
    row("device", SearchParamType::Reference, "MedicationAdministration.device"),
    row("effective-time", SearchParamType::Date, "MedicationAdministration.effective"),
    row("medication", SearchParamType::Reference, "(MedicationAdministration.medication as Reference)"),
    row("performer", SearchParamType::Reference, "MedicationAdministration.performer.actor"),
    row("reason-given", SearchParamType::Token, "MedicationAdministration.reasonCode"),
    row("reason-not-given", SearchParamType::Token, "MedicationAdministration.statusReason"),
    row("request", SearchParamType::Reference, "MedicationAdministration.request"),
    row("status", SearchParamType::Token, "MedicationAdministration.status"),
    row("subject", SearchParamType::Reference, "MedicationAdministration.subject"),
];

const ENROLLMENT_RESPONSE: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "EnrollmentResponse.identifier"),
    row("request", SearchParamType::Reference, "EnrollmentResponse.request"),
    row("status", SearchParamType::Token, "EnrollmentResponse.status"),
];

const LIBRARY: &[ParamRow] = &[
    row("composed-of", SearchParamType::Reference, "Library.relatedArtifact.where(type='composed-of').resource"),
    row("content-type", SearchParamType::Token, "Library.content.contentType"),
    row("context", SearchParamType::Token, "(Library.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(Library.useContext.value as Quantity) | (Library.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "Library.useContext.code"),
    row("date", SearchParamType::Date, "Library.date"),
    row("depends-on", SearchParamType::Reference, "Library.relatedArtifact.where(type='depends-on').resource"),
    row("derived-from", SearchParamType::Reference, "Library.relatedArtifact.where(type='derived-from').resource"),
    row("description", SearchParamType::String, "Library.description"),
    row("effective", SearchParamType::Date, "Library.effectivePeriod"),
    row("identifier", SearchParamType::Token, "Library.identifier"),
    row("jurisdiction", SearchParamType::Token, "Library.jurisdiction"),
    row("name", SearchParamType::String, "Library.name"),
    row("predecessor", SearchParamType::Reference, "Library.relatedArtifact.where(type='predecessor').resource"),
    row("publisher", SearchParamType::String, "Library.publisher"),
    row("status", SearchParamType::Token, "Library.status"),
    row("successor", SearchParamType::Reference, "Library.relatedArtifact.where(type='successor').resource"),
    row("title", SearchParamType::String, "Library.title"),
    row("topic", SearchParamType::Token, "Library.topic"),
    row("type", SearchParamType::Token, "Library.type"),
    row("url", SearchParamType::Uri, "Library.url"),
    row("version", SearchParamType::Token, "Library.version"),
    row("context-type-quantity", SearchParamType::Composite, "Library.useContext"),
    row("context-type-value", SearchParamType::Composite, "Library.useContext"),
];

const MEDICINAL_PRODUCT_INTERACTION: &[ParamRow] = &[
    row("subject", SearchParamType::Reference, "MedicinalProductInteraction.subject"),
];

const MEDICATION_STATEMENT: &[ParamRow] = &[
    row("code", SearchParamType::Token, "(MedicationStatement.medication as CodeableConcept)"),
    row("identifier", SearchParamType::Token, "MedicationStatement.identifier"),
    row("patient", SearchParamType::Reference, "MedicationStatement.subject.where(resolve() is Patient)"),
    row("medication", SearchParamType::Reference, "(MedicationStatement.medication as Reference)"),
    row("status", SearchParamType::Token, "MedicationStatement.status"),
    row("category", SearchParamType::Token, "MedicationStatement.category"),
    row("context", SearchParamType::Reference, "MedicationStatement.context"),
    row("effective", SearchParamType::Date, "MedicationStatement.effective"),
    row("part-of", SearchParamType::Reference, "MedicationStatement.partOf"),
    row("source", SearchParamType::Reference, "MedicationStatement.informationSource"),
    row("subject", SearchParamType::Reference, "MedicationStatement.subject"),
];

const COMMUNICATION_REQUEST: &[ParamRow] = &[
    row("authored", SearchParamType::Date, "CommunicationRequest.authoredOn"),
    row("based-on", SearchParamType::Reference, "CommunicationRequest.basedOn"),
    row("category", SearchParamType::Token, "CommunicationRequest.category"),
    row("encounter", SearchParamType::Reference, "CommunicationRequest.encounter"),
    row("group-identifier", SearchParamType::Token, "CommunicationRequest.groupIdentifier"),
    row("identifier", SearchParamType::Token, "CommunicationRequest.identifier"),
    row("medium", SearchParamType::Token, "CommunicationRequest.medium"),
    row("occurrence", SearchParamType::Date, "(CommunicationRequest.occurrence as dateTime)"),
    row("patient", SearchParamType::Reference, "CommunicationRequest.subject.where(resolve() is Patient)"),
    row("priority", SearchParamType::Token, "CommunicationRequest.priority"),
    row("recipient", SearchParamType::Reference, "CommunicationRequest.recipient"),
    row("replaces", SearchParamType::Reference, "CommunicationRequest.replaces"),
    row("requester", SearchParamType::Reference, "CommunicationRequest.requester"),
    row("sender", SearchParamType::Reference, "CommunicationRequest.sender"),
    row("status", SearchParamType::Token, "CommunicationRequest.status"),
    row("subject", SearchParamType::Reference, "CommunicationRequest.subject"),
];

const TEST_SCRIPT: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(TestScript.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(TestScript.useContext.value as Quantity) | (TestScript.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "TestScript.useContext.code"),
    row("date", SearchParamType::Date, "TestScript.date"),
    row("description", SearchParamType::String, "TestScript.description"),
    row("identifier", SearchParamType::Token, "TestScript.identifier"),
    row("jurisdiction", SearchParamType::Token, "TestScript.jurisdiction"),
    row("name", SearchParamType::String, "TestScript.name"),
    row("publisher", SearchParamType::String, "TestScript.publisher"),
    row("status", SearchParamType::Token, "TestScript.status"),
    row("testscript-capability", SearchParamType::String, "TestScript.metadata.capability.description"),
    row("title", SearchParamType::String, "TestScript.title"),
    row("url", SearchParamType::Uri, "TestScript.url"),
    row("version", SearchParamType::Token, "TestScript.version"),
    row("context-type-quantity", SearchParamType::Composite, "TestScript.useContext"),
    row("context-type-value", SearchParamType::Composite, "TestScript.useContext"),
];

const BASIC: &[ParamRow] = &[
    row("author", SearchParamType::Reference, "Basic.author"),
    row("code", SearchParamType::Token, "Basic.code"),
    row("created", SearchParamType::Date, "Basic.created"),
    row("identifier", SearchParamType::Token, "Basic.identifier"),
    row("patient", SearchParamType::Reference, "Basic.subject.where(resolve() is Patient)"),
    row("subject", SearchParamType::Reference, "Basic.subject"),
];

const TEST_REPORT: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "TestReport.identifier"),
    row("issued", SearchParamType::Date, "TestReport.issued"),
    row("participant", SearchParamType::Uri, "TestReport.participant.uri"),
    row("result", SearchParamType::Token, "TestReport.result"),
    row("tester", SearchParamType::String, "TestReport.tester"),
    row("testscript", SearchParamType::Reference, "TestReport.testScript"),
];

const CLAIM_RESPONSE: &[ParamRow] = &[
    row("created", SearchParamType::Date, "ClaimResponse.created"),
    row("disposition", SearchParamType::String, "ClaimResponse.disposition"),
    row("identifier", SearchParamType::Token, "ClaimResponse.identifier"),
    row("insurer", SearchParamType::Reference, "ClaimResponse.insurer"),
    row("outcome", SearchParamType::Token, "ClaimResponse.outcome"),
    row("patient", SearchParamType::Reference, "ClaimResponse.patient"),
    row("payment-date", SearchParamType::Date, "ClaimResponse.payment.date"),
    row("request", SearchParamType::Reference, "ClaimResponse.request"),
    row("requestor", SearchParamType::Reference, "ClaimResponse.requestor"),
    row("status", SearchParamType::Token, "ClaimResponse.status"),
    row("use", SearchParamType::Token, "ClaimResponse.use"),
];

const MEDICATION_DISPENSE: &[ParamRow] = &[
    row("code", SearchParamType::Token, "(MedicationDispense.medication as CodeableConcept)"),
    row("identifier", SearchParamType::Token, "MedicationDispense.identifier"),
    row("patient", SearchParamType::Reference, "MedicationDispense.subject.where(resolve() is Patient)"),
    row("medication", SearchParamType::Reference, "(MedicationDispense.medication as Reference)"),
    row("status", SearchParamType::Token, "MedicationDispense.status"),
    row("context", SearchParamType::Reference, "MedicationDispense.context"),
    row("destination", SearchParamType::Reference, "MedicationDispense.destination"),
    row("performer", SearchParamType::Reference, "MedicationDispense.performer.actor"),
    row("prescription", SearchParamType::Reference, "MedicationDispense.authorizingPrescription"),
    row("receiver", SearchParamType::Reference, "MedicationDispense.receiver"),
    row("responsibleparty", SearchParamType::Reference, "MedicationDispense.substitution.responsibleParty"),
    row("subject", SearchParamType::Reference, "MedicationDispense.subject"),
    row("type", SearchParamType::Token, "MedicationDispense.type"),
    row("whenhandedover", SearchParamType::Date, "MedicationDispense.whenHandedOver"),
    row("whenprepared", SearchParamType::Date, "MedicationDispense.whenPrepared"),
];

const DIAGNOSTIC_REPORT: &[ParamRow] = &[
    row("code", SearchParamType::Token, "DiagnosticReport.code"),
    row("date", SearchParamType::Date, "DiagnosticReport.effective"),
    row("identifier", SearchParamType::Token, "DiagnosticReport.identifier"),
    row("patient", SearchParamType::Reference, "DiagnosticReport.subject.where(resolve() is Patient)"),
    row("encounter", SearchParamType::Reference, "DiagnosticReport.encounter"),
    row("based-on", SearchParamType::Reference, "DiagnosticReport.basedOn"),
    row("category", SearchParamType::Token, "DiagnosticReport.category"),
    row("conclusion", SearchParamType::Token, "DiagnosticReport.conclusionCode"),
    row("issued", SearchParamType::Date, "DiagnosticReport.issued"),
    row("media", SearchParamType::Reference, "DiagnosticReport.media.link"),
    row("performer", SearchParamType::Reference, "DiagnosticReport.performer"),
    row("result", SearchParamType::Reference, "DiagnosticReport.result"),
    row("results-interpreter", SearchParamType::Reference, "DiagnosticReport.resultsInterpreter"),
    row("specimen", SearchParamType::Reference, "DiagnosticReport.specimen"),
    row("status", SearchParamType::Token, "DiagnosticReport.status"),
    row("subject", SearchParamType::Reference, "DiagnosticReport.subject"),
];

const ORGANIZATION_AFFILIATION: &[ParamRow] = &[
    row("active", SearchParamType::Token, "OrganizationAffiliation.active"),
    row("date", SearchParamType::Date, "OrganizationAffiliation.period"),
    row("email", SearchParamType::Token, "OrganizationAffiliation.telecom.where(system='email')"),
    row("endpoint", SearchParamType::Reference, "OrganizationAffiliation.endpoint"),
    row("identifier", SearchParamType::Token, "OrganizationAffiliation.identifier"),
    row("location", SearchParamType::Reference, "OrganizationAffiliation.location"),
    row("network", SearchParamType::Reference, "OrganizationAffiliation.network"),
    row("participating-organization", SearchParamType::Reference, "OrganizationAffiliation.participatingOrganization"),
    row("phone", SearchParamType::Token, "OrganizationAffiliation.telecom.where(system='phone')"),
    row("primary-organization", SearchParamType::Reference, "OrganizationAffiliation.organization"),
    row("role", SearchParamType::Token, "OrganizationAffiliation.code"),
    row("service", SearchParamType::Reference, "OrganizationAffiliation.healthcareService"),
    row("specialty", SearchParamType::Token, "OrganizationAffiliation.specialty"),
    row("telecom", SearchParamType::Token, "OrganizationAffiliation.telecom"),
];

const HEALTHCARE_SERVICE: &[ParamRow] = &[
    row("active", SearchParamType::Token, "HealthcareService.active"),
    row("characteristic", SearchParamType::Token, "HealthcareService.characteristic"),
    row("coverage-area", SearchParamType::Reference, "HealthcareService.coverageArea"),
    row("endpoint", SearchParamType::Reference, "HealthcareService.endpoint"),
    row("identifier", SearchParamType::Token, "HealthcareService.identifier"),
    row("location", SearchParamType::Reference, "HealthcareService.location"),
    row("name", SearchParamType::String, "HealthcareService.name"),
    row("organization", SearchParamType::Reference, "HealthcareService.providedBy"),
    row("program", SearchParamType::Token, "HealthcareService.program"),
    row("service-category", SearchParamType::Token, "HealthcareService.category"),
    row("service-type", SearchParamType::Token, "HealthcareService.type"),
    row("specialty", SearchParamType::Token, "HealthcareService.specialty"),
];

const MEDICINAL_PRODUCT_INDICATION: &[ParamRow] = &[
    row("subject", SearchParamType::Reference, "MedicinalProductIndication.subject"),
];

const NUTRITION_ORDER: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "NutritionOrder.identifier"),
    row("patient", SearchParamType::Reference, "NutritionOrder.patient"),
    row("encounter", SearchParamType::Reference, "NutritionOrder.encounter"),
    row("additive", SearchParamType::Token, "NutritionOrder.enteralFormula.additiveType"),
    row("datetime", SearchParamType::Date, "NutritionOrder.dateTime"),
    row("formula", SearchParamType::Token, "NutritionOrder.enteralFormula.baseFormulaType"),
    row("instantiates-canonical", SearchParamType::Reference, "NutritionOrder.instantiatesCanonical"),
    row("instantiates-uri", SearchParamType::Uri, "NutritionOrder.instantiatesUri"),
    row("oraldiet", SearchParamType::Token, "NutritionOrder.oralDiet.type"),
    row("provider", SearchParamType::Reference, "NutritionOrder.orderer"),
    row("status", SearchParamType::Token, "NutritionOrder.status"),
    row("supplement", SearchParamType::Token, "NutritionOrder.supplement.type"),
];

const TERMINOLOGY_CAPABILITIES: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(TerminologyCapabilities.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(TerminologyCapabilities.useContext.value as Quantity) | (TerminologyCapabilities.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "TerminologyCapabilities.useContext.code"),
    row("date", SearchParamType::Date, "TerminologyCapabilities.date"),
    row("description", SearchParamType::String, "TerminologyCapabilities.description"),
    row("jurisdiction", SearchParamType::Token, "TerminologyCapabilities.jurisdiction"),
    row("name", SearchParamType::String, "TerminologyCapabilities.name"),
    row("publisher", SearchParamType::String, "TerminologyCapabilities.publisher"),
    row("status", SearchParamType::Token, "TerminologyCapabilities.status"),
    row("title", SearchParamType::String, "TerminologyCapabilities.title"),
    row("url", SearchParamType::Uri, "TerminologyCapabilities.url"),
    row("version", SearchParamType::Token, "TerminologyCapabilities.version"),
    row("context-type-quantity", SearchParamType::Composite, "TerminologyCapabilities.useContext"),
    row("context-type-value", SearchParamType::Composite, "TerminologyCapabilities.useContext"),
];

const EVIDENCE: &[ParamRow] = &[
    row("composed-of", SearchParamType::Reference, "Evidence.relatedArtifact.where(type='composed-of').resource"),
    row("context", SearchParamType::Token, "(Evidence.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(Evidence.useContext.value as Quantity) | (Evidence.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "Evidence.useContext.code"),
    row("date", SearchParamType::Date, "Evidence.date"),
    row("depends-on", SearchParamType::Reference, "Evidence.relatedArtifact.where(type='depends-on').resource"),
    row("derived-from", SearchParamType::Reference, "Evidence.relatedArtifact.where(type='derived-from').resource"),
    row("description", SearchParamType::String, "Evidence.description"),
    row("effective", SearchParamType::Date, "Evidence.effectivePeriod"),
    row("identifier", SearchParamType::Token, "Evidence.identifier"),
    row("jurisdiction", SearchParamType::Token, "Evidence.jurisdiction"),
    row("name", SearchParamType::String, "Evidence.name"),
    row("predecessor", SearchParamType::Reference, "Evidence.relatedArtifact.where(type='predecessor').resource"),
    row("publisher", SearchParamType::String, "Evidence.publisher"),
    row("status", SearchParamType::Token, "Evidence.status"),
    row("successor", SearchParamType::Reference, "Evidence.relatedArtifact.where(type='successor').resource"),
    row("title", SearchParamType::String, "Evidence.title"),
    row("topic", SearchParamType::Token, "Evidence.topic"),
    row("url", SearchParamType::Uri, "Evidence.url"),
    row("version", SearchParamType::Token, "Evidence.version"),
    row("context-type-quantity", SearchParamType::Composite, "Evidence.useContext"),
    row("context-type-value", SearchParamType::Composite, "Evidence.useContext"),
];

const AUDIT_EVENT: &[ParamRow] = &[
    row("action", SearchParamType::Token, "AuditEvent.action"),
    row("address", SearchParamType::String, "AuditEvent.agent.network.address"),
    row("agent", SearchParamType::Reference, "AuditEvent.agent.who"),
    row("agent-name", SearchParamType::String, "AuditEvent.agent.name"),
    row("agent-role", SearchParamType::Token, "AuditEvent.agent.role"),
    row("altid", SearchParamType::Token, "AuditEvent.agent.altId"),
    row("date", SearchParamType::Date, "AuditEvent.recorded"),
    row("entity", SearchParamType::Reference, "AuditEvent.entity.what"),
    row("entity-name", SearchParamType::String, "AuditEvent.entity.name"),
    row("entity-role", SearchParamType::Token, "AuditEvent.entity.role"),
    row("entity-type", SearchParamType::Token, "AuditEvent.entity.type"),
    row("outcome", SearchParamType::Token, "AuditEvent.outcome"),
    row("patient", SearchParamType::Reference, "AuditEvent.agent.who.where(resolve() is Patient) | AuditEvent.entity.what.where(resolve() is Patient)"),
    row("policy", SearchParamType::Uri, "AuditEvent.agent.policy"),
    row("site", SearchParamType::Token, "AuditEvent.source.site"),
    row("source", SearchParamType::Reference, "AuditEvent.source.observer"),
    row("subtype", SearchParamType::Token, "AuditEvent.subtype"),
    row("type", SearchParamType::Token, "AuditEvent.type"),
];

const PAYMENT_RECONCILIATION: &[ParamRow] = &[
    row("created", SearchParamType::Date, "PaymentReconciliation.created"),
    row("disposition", SearchParamType::String, "PaymentReconciliation.disposition"),
    row("identifier", SearchParamType::Token, "PaymentReconciliation.identifier"),
    row("outcome", SearchParamType::Token, "PaymentReconciliation.outcome"),
    row("payment-issuer", SearchParamType::Reference, "PaymentReconciliation.paymentIssuer"),
    row("request", SearchParamType::Reference, "PaymentReconciliation.request"),
    row("requestor", SearchParamType::Reference, "PaymentReconciliation.requestor"),
    row("status", SearchParamType::Token, "PaymentReconciliation.status"),
];

const CONDITION: &[ParamRow] = &[
    row("code", SearchParamType::Token, "Condition.code"),
    row("identifier", SearchParamType::Token, "Condition.identifier"),
    row("patient", SearchParamType::Reference, "Condition.subject.where(resolve() is Patient)"),
    row("abatement-age", SearchParamType::Quantity, "Condition.abatement.as(Age) | Condition.abatement.as(Range)"),
    row("abatement-date", SearchParamType::Date, "Condition.abatement.as(dateTime) | Condition.abatement.as(Period)"),
    row("abatement-string", SearchParamType::String, "Condition.abatement.as(string)"),
    row("asserter", SearchParamType::Reference, "Condition.asserter"),
    row("body-site", SearchParamType::Token, "Condition.bodySite"),
    row("category", SearchParamType::Token, "Condition.category"),
    row("clinical-status", SearchParamType::Token, "Condition.clinicalStatus"),
    row("encounter", SearchParamType::Reference, "Condition.encounter"),
    row("evidence", SearchParamType::Token, "Condition.evidence.code"),
    row("evidence-detail", SearchParamType::Reference, "Condition.evidence.detail"),
    row("onset-age", SearchParamType::Quantity, "Condition.onset.as(Age) | Condition.onset.as(Range)"),
    row("onset-date", SearchParamType::Date, "Condition.onset.as(dateTime) | Condition.onset.as(Period)"),
    row("onset-info", SearchParamType::String, "Condition.onset.as(string)"),
    row("recorded-date", SearchParamType::Date, "Condition.recordedDate"),
    row("severity", SearchParamType::Token, "Condition.severity"),
    row("stage", SearchParamType::Token, "Condition.stage.summary"),
    row("subject", SearchParamType::Reference, "Condition.subject"),
    row("verification-status", SearchParamType::Token, "Condition.verificationStatus"),
];

const SPECIMEN_DEFINITION: &[ParamRow] = &[
    row("container", SearchParamType::Token, "SpecimenDefinition.typeTested.container.type"),
    row("identifier", SearchParamType::Token, "SpecimenDefinition.identifier"),
    row("type", SearchParamType::Token, "SpecimenDefinition.typeCollected"),
];

const COMPOSITION: &[ParamRow] = &[
    row("date", SearchParamType::Date, "Composition.date"),
    row("identifier", SearchParamType::Token, "Composition.identifier"),
    row("patient", SearchParamType::Reference, "Composition.subject.where(resolve() is Patient)"),
    row("type", SearchParamType::Token, "Composition.type"),
    row("attester", SearchParamType::Reference, "Composition.attester.party"),
    row("author", SearchParamType::Reference, "Composition.author"),
    row("category", SearchParamType::Token, "Composition.category"),
    row("confidentiality", SearchParamType::Token, "Composition.confidentiality"),
    row("context", SearchParamType::Token, "Composition.event.code"),
    row("encounter", SearchParamType::Reference, "Composition.encounter"),
    row("entry", SearchParamType::Reference, "Composition.section.entry"),
    row("period", SearchParamType::Date, "Composition.event.period"),
    row("related-id", SearchParamType::Token, "(Composition.relatesTo.target as Identifier)"),
    row("related-ref", SearchParamType::Reference, "(Composition.relatesTo.target as Reference)"),
    row("section", SearchParamType::Token, "Composition.section.code"),
    row("status", SearchParamType::Token, "Composition.status"),
    row("subject", SearchParamType::Reference, "Composition.subject"),
    row("title", SearchParamType::String, "Composition.title"),
];

const DETECTED_ISSUE: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "DetectedIssue.identifier"),
    row("patient", SearchParamType::Reference, "DetectedIssue.patient"),
    row("author", SearchParamType::Reference, "DetectedIssue.author"),
    row("code", SearchParamType::Token, "DetectedIssue.code"),
    row("identified", SearchParamType::Date, "DetectedIssue.identified"),
    row("implicated", SearchParamType::Reference, "DetectedIssue.implicated"),
];

const BUNDLE: &[ParamRow] = &[
    row("composition", SearchParamType::Reference, "Bundle.entry[0].resource"),
    row("identifier", SearchParamType::Token, "Bundle.identifier"),
    row("message", SearchParamType::Reference, "Bundle.entry[0].resource"),
    row("timestamp", SearchParamType::Date, "Bundle.timestamp"),
    row("type", SearchParamType::Token, "Bundle.type"),
];

const COMPARTMENT_DEFINITION: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(CompartmentDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(CompartmentDefinition.useContext.value as Quantity) | (CompartmentDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "CompartmentDefinition.useContext.code"),
    row("date", SearchParamType::Date, "CompartmentDefinition.date"),
    row("description", SearchParamType::String, "CompartmentDefinition.description"),
    row("name", SearchParamType::String, "CompartmentDefinition.name"),
    row("publisher", SearchParamType::String, "CompartmentDefinition.publisher"),
    row("status", SearchParamType::Token, "CompartmentDefinition.status"),
    row("url", SearchParamType::Uri, "CompartmentDefinition.url"),
    row("version", SearchParamType::Token, "CompartmentDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "CompartmentDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "CompartmentDefinition.useContext"),
    row("code", SearchParamType::Token, "CompartmentDefinition.code"),
    row("resource", SearchParamType::Token, "CompartmentDefinition.resource.code"),
];

const MEDICATION_KNOWLEDGE: &[ParamRow] = &[
    row("classification", SearchParamType::Token, "MedicationKnowledge.medicineClassification.classification"),
    row("classification-type", SearchParamType::Token, "MedicationKnowledge.medicineClassification.type"),
    row("code", SearchParamType::Token, "MedicationKnowledge.code"),
    row("doseform", SearchParamType::Token, "MedicationKnowledge.doseForm"),
    row("ingredient", SearchParamType::Reference, "(MedicationKnowledge.ingredient.item as Reference)"),
    row("ingredient-code", SearchParamType::Token, "(MedicationKnowledge.ingredient.item as CodeableConcept)"),
    row("manufacturer", SearchParamType::Reference, "MedicationKnowledge.manufacturer"),
    row("monitoring-program-name", SearchParamType::Token, "MedicationKnowledge.monitoringProgram.name"),
    row("monitoring-program-type", SearchParamType::Token, "MedicationKnowledge.monitoringProgram.type"),
    row("monograph", SearchParamType::Reference, "MedicationKnowledge.monograph.source"),
    row("monograph-type", SearchParamType::Token, "MedicationKnowledge.monograph.type"),
    row("source-cost", SearchParamType::Token, "MedicationKnowledge.cost.source"),
    row("status", SearchParamType::Token, "MedicationKnowledge.status"),
];

const PATIENT: &[ParamRow] = &[
    row("active", SearchParamType::Token, "Patient.active"),
    row("address", SearchParamType::String, "Patient.address"),
    row("address-city", SearchParamType::String, "Patient.address.city"),
    row("address-country", SearchParamType::String, "Patient.address.country"),
    row("address-postalcode", SearchParamType::String, "Patient.address.postalCode"),
    row("address-state", SearchParamType::String, "Patient.address.state"),
    row("address-use", SearchParamType::Token, "Patient.address.use"),
    row("birthdate", SearchParamType::Date, "Patient.birthDate"),
    row("death-date", SearchParamType::Date, "(Patient.deceased as dateTime)"),
    row("deceased", SearchParamType::Token, "Patient.deceased.exists() and Patient.deceased != false"),
    row("email", SearchParamType::Token, "Patient.telecom.where(system='email')"),
    row("family", SearchParamType::String, "Patient.name.family"),
    row("gender", SearchParamType::Token, "Patient.gender"),
    row("general-practitioner", SearchParamType::Reference, "Patient.generalPractitioner"),
    row("given", SearchParamType::String, "Patient.name.given"),
    row("identifier", SearchParamType::Token, "Patient.identifier"),
    row("language", SearchParamType::Token, "Patient.communication.language"),
    row("link", SearchParamType::Reference, "Patient.link.other"),
    row("name", SearchParamType::String, "Patient.name"),
    row("organization", SearchParamType::Reference, "Patient.managingOrganization"),
    row("phone", SearchParamType::Token, "Patient.telecom.where(system='phone')"),
    row("phonetic", SearchParamType::String, "Patient.name"),
    row("telecom", SearchParamType::Token, "Patient.telecom"),
];

const COVERAGE: &[ParamRow] = &[
    row("beneficiary", SearchParamType::Reference, "Coverage.beneficiary"),
    row("class-type", SearchParamType::Token, "Coverage.class.type"),
    row("class-value", SearchParamType::String, "Coverage.class.value"),
    row("dependent", SearchParamType::String, "Coverage.dependent"),
    row("identifier", SearchParamType::Token, "Coverage.identifier"),
    row("patient", SearchParamType::Reference, "Coverage.beneficiary"),
    row("payor", SearchParamType::Reference, "Coverage.payor"),
    row("policy-holder", SearchParamType::Reference, "Coverage.policyHolder"),
    row("status", SearchParamType::Token, "Coverage.status"),
    row("subscriber", SearchParamType::Reference, "Coverage.subscriber"),
    row("type", SearchParamType::Token, "Coverage.type"),
];

const QUESTIONNAIRE_RESPONSE: &[ParamRow] = &[
    row("author", SearchParamType::Reference, "QuestionnaireResponse.author"),
    row("authored", SearchParamType::Date, "QuestionnaireResponse.authored"),
    row("based-on", SearchParamType::Reference, "QuestionnaireResponse.basedOn"),
    row("encounter", SearchParamType::Reference, "QuestionnaireResponse.encounter"),
    row("identifier", SearchParamType::Token, "QuestionnaireResponse.identifier"),
    row("part-of", SearchParamType::Reference, "QuestionnaireResponse.partOf"),
    row("patient", SearchParamType::Reference, "QuestionnaireResponse.subject.where(resolve() is Patient)"),
    row("questionnaire", SearchParamType::Reference, "QuestionnaireResponse.questionnaire"),
    row("source", SearchParamType::Reference, "QuestionnaireResponse.source"),
    row("status", SearchParamType::Token, "QuestionnaireResponse.status"),
    row("subject", SearchParamType::Reference, "QuestionnaireResponse.subject"),
];

const COVERAGE_ELIGIBILITY_REQUEST: &[ParamRow] = &[
    row("created", SearchParamType::Date, "CoverageEligibilityRequest.created"),
    row("enterer", SearchParamType::Reference, "CoverageEligibilityRequest.enterer"),
    row("facility", SearchParamType::Reference, "CoverageEligibilityRequest.facility"),
    row("identifier", SearchParamType::Token, "CoverageEligibilityRequest.identifier"),
    row("patient", SearchParamType::Reference, "CoverageEligibilityRequest.patient"),
    row("provider", SearchParamType::Reference, "CoverageEligibilityRequest.provider"),
    row("status", SearchParamType::Token, "CoverageEligibilityRequest.status"),
];

const NAMING_SYSTEM: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(NamingSystem.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(NamingSystem.useContext.value as Quantity) | (NamingSystem.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "NamingSystem.useContext.code"),
    row("date", SearchParamType::Date, "NamingSystem.date"),
    row("description", SearchParamType::String, "NamingSystem.description"),
    row("jurisdiction", SearchParamType::Token, "NamingSystem.jurisdiction"),
    row("name", SearchParamType::String, "NamingSystem.name"),
    row("publisher", SearchParamType::String, "NamingSystem.publisher"),
    row("status", SearchParamType::Token, "NamingSystem.status"),
    row("context-type-quantity", SearchParamType::Composite, "NamingSystem.useContext"),
    row("context-type-value", SearchParamType::Composite, "NamingSystem.useContext"),
    row("contact", SearchParamType::String, "NamingSystem.contact.name"),
    row("id-type", SearchParamType::Token, "NamingSystem.uniqueId.type"),
    row("kind", SearchParamType::Token, "NamingSystem.kind"),
    row("period", SearchParamType::Date, "NamingSystem.uniqueId.period"),
    row("responsible", SearchParamType::String, "NamingSystem.responsible"),
    row("telecom", SearchParamType::Token, "NamingSystem.contact.telecom"),
    row("type", SearchParamType::Token, "NamingSystem.type"),
    row("value", SearchParamType::String, "NamingSystem.uniqueId.value"),
];

const MEDICINAL_PRODUCT_UNDESIRABLE_EFFECT: &[ParamRow] = &[
    row("subject", SearchParamType::Reference, "MedicinalProductUndesirableEffect.subject"),
];

const EXAMPLE_SCENARIO: &[ParamRow] = &[
    row("context", SearchParamType::Token, "(ExampleScenario.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(ExampleScenario.useContext.value as Quantity) | (ExampleScenario.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "ExampleScenario.useContext.code"),
    row("date", SearchParamType::Date, "ExampleScenario.date"),
    row("identifier", SearchParamType::Token, "ExampleScenario.identifier"),
    row("jurisdiction", SearchParamType::Token, "ExampleScenario.jurisdiction"),
    row("name", SearchParamType::String, "ExampleScenario.name"),
    row("publisher", SearchParamType::String, "ExampleScenario.publisher"),
    row("status", SearchParamType::Token, "ExampleScenario.status"),
    row("url", SearchParamType::Uri, "ExampleScenario.url"),
    row("version", SearchParamType::Token, "ExampleScenario.version"),
    row("context-type-quantity", SearchParamType::Composite, "ExampleScenario.useContext"),
    row("context-type-value", SearchParamType::Composite, "ExampleScenario.useContext"),
];

const SUPPLY_DELIVERY: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "SupplyDelivery.identifier"),
    row("patient", SearchParamType::Reference, "SupplyDelivery.patient"),
    row("receiver", SearchParamType::Reference, "SupplyDelivery.receiver"),
    row("status", SearchParamType::Token, "SupplyDelivery.status"),
    row("supplier", SearchParamType::Reference, "SupplyDelivery.supplier"),
];

const SCHEDULE: &[ParamRow] = &[
    row("active", SearchParamType::Token, "Schedule.active"),
    row("actor", SearchParamType::Reference, "Schedule.actor"),
    row("date", SearchParamType::Date, "Schedule.planningHorizon"),
    row("identifier", SearchParamType::Token, "Schedule.identifier"),
    row("service-category", SearchParamType::Token, "Schedule.serviceCategory"),
    row("service-type", SearchParamType::Token, "Schedule.serviceType"),
    row("specialty", SearchParamType::Token, "Schedule.specialty"),
];

const CLINICAL_IMPRESSION: &[ParamRow] = &[
    row("date", SearchParamType::Date, "ClinicalImpression.date"),
    row("patient", SearchParamType::Reference, "ClinicalImpression.subject.where(resolve() is Patient)"),
    row("assessor", SearchParamType::Reference, "ClinicalImpression.assessor"),
    row("encounter", SearchParamType::Reference, "ClinicalImpression.encounter"),
    row("finding-code", SearchParamType::Token, "ClinicalImpression.finding.itemCodeableConcept"),
    row("finding-ref", SearchParamType::Reference, "ClinicalImpression.finding.itemReference"),
    row("identifier", SearchParamType::Token, "ClinicalImpression.identifier"),
    row("investigation", SearchParamType::Reference, "ClinicalImpression.investigation.item"),
    row("previous", SearchParamType::Reference, "ClinicalImpression.previous"),
    row("problem", SearchParamType::Reference, "ClinicalImpression.problem"),
    row("status", SearchParamType::Token, "ClinicalImpression.status"),
    row("subject", SearchParamType::Reference, "ClinicalImpression.subject"),
    row("supporting-info", SearchParamType::Reference, "ClinicalImpression.supportingInfo"),
];

const DEVICE_DEFINITION: &[ParamRow] = &[
    row("identifier", SearchParamType::Token, "DeviceDefinition.identifier"),
    row("parent", SearchParamType::Reference, "DeviceDefinition.parentDevice"),
    row("type", SearchParamType::Token, "DeviceDefinition.type"),
];

const PLAN_DEFINITION: &[ParamRow] = &[
    row("composed-of", SearchParamType::Reference, "PlanDefinition.relatedArtifact.where(type='composed-of').resource"),
    row("context", SearchParamType::Token, "(PlanDefinition.useContext.value as CodeableConcept)"),
    row("context-quantity", SearchParamType::Quantity, "(PlanDefinition.useContext.value as Quantity) | (PlanDefinition.useContext.value as Range)"),
    row("context-type", SearchParamType::Token, "PlanDefinition.useContext.code"),
    row("date", SearchParamType::Date, "PlanDefinition.date"),
    row("definition", SearchParamType::Reference, "PlanDefinition.action.definition"),
    row("depends-on", SearchParamType::Reference, "PlanDefinition.relatedArtifact.where(type='depends-on').resource | PlanDefinition.library"),
    row("derived-from", SearchParamType::Reference, "PlanDefinition.relatedArtifact.where(type='derived-from').resource"),
    row("description", SearchParamType::String, "PlanDefinition.description"),
    row("effective", SearchParamType::Date, "PlanDefinition.effectivePeriod"),
    row("identifier", SearchParamType::Token, "PlanDefinition.identifier"),
    row("jurisdiction", SearchParamType::Token, "PlanDefinition.jurisdiction"),
    row("name", SearchParamType::String, "PlanDefinition.name"),
    row("predecessor", SearchParamType::Reference, "PlanDefinition.relatedArtifact.where(type='predecessor').resource"),
    row("publisher", SearchParamType::String, "PlanDefinition.publisher"),
    row("status", SearchParamType::Token, "PlanDefinition.status"),
    row("successor", SearchParamType::Reference, "PlanDefinition.relatedArtifact.where(type='successor').resource"),
    row("title", SearchParamType::String, "PlanDefinition.title"),
    row("topic", SearchParamType::Token, "PlanDefinition.topic"),
    row("type", SearchParamType::Token, "PlanDefinition.type"),
    row("url", SearchParamType::Uri, "PlanDefinition.url"),
    row("version", SearchParamType::Token, "PlanDefinition.version"),
    row("context-type-quantity", SearchParamType::Composite, "PlanDefinition.useContext"),
    row("context-type-value", SearchParamType::Composite, "PlanDefinition.useContext"),
];

const MEDICINAL_PRODUCT_AUTHORIZATION: &[ParamRow] = &[
    row("country", SearchParamType::Token, "MedicinalProductAuthorization.country"),
    row("holder", SearchParamType::Reference, "MedicinalProductAuthorization.holder"),
    row("identifier", SearchParamType::Token, "MedicinalProductAuthorization.identifier"),
    row("status", SearchParamType::Token, "MedicinalProductAuthorization.status"),
    row("subject", SearchParamType::Reference, "MedicinalProductAuthorization.subject"),
];

const CLAIM: &[ParamRow] = &[
    row("care-team", SearchParamType::Reference, "Claim.careTeam.provider"),
    row("created", SearchParamType::Date, "Claim.created"),
    row("detail-udi", SearchParamType::Reference, "Claim.item.detail.udi"),
    row("encounter", SearchParamType::Reference, "Claim.item.encounter"),
    row("enterer", SearchParamType::Reference, "Claim.enterer"),
    row("facility", SearchParamType::Reference, "Claim.facility"),
    row("identifier", SearchParamType::Token, "Claim.identifier"),
    row("insurer", SearchParamType::Reference, "Claim.insurer"),
    row("item-udi", SearchParamType::Reference, "Claim.item.udi"),
    row("patient", SearchParamType::Reference, "Claim.patient"),
    row("payee", SearchParamType::Reference, "Claim.payee.party"),
    row("priority", SearchParamType::Token, "Claim.priority"),
    row("procedure-udi", SearchParamType::Reference, "Claim.procedure.udi"),
    row("provider", SearchParamType::Reference, "Claim.provider"),
    row("status", SearchParamType::Token, "Claim.status"),
    row("subdetail-udi", SearchParamType::Reference, "Claim.item.detail.subDetail.udi"),
    row("use", SearchParamType::Token, "Claim.use"),
];

const LOCATION: &[ParamRow] = &[
    row("address", SearchParamType::String, "Location.address"),
    row("address-city", SearchParamType::String, "Location.address.city"),
    row("address-country", SearchParamType::String, "Location.address.country"),
    row("address-postalcode", SearchParamType::String, "Location.address.postalCode"),
    row("address-state", SearchParamType::String, "Location.address.state"),
    row("address-use", SearchParamType::Token, "Location.address.use"),
    row("endpoint", SearchParamType::Reference, "Location.endpoint"),
    row("identifier", SearchParamType::Token, "Location.identifier"),
    row("name", SearchParamType::String, "Location.name | Location.alias"),
    row("near", SearchParamType::Special, "Location.position"),
    row("operational-status", SearchParamType::Token, "Location.operationalStatus"),
    row("organization", SearchParamType::Reference, "Location.managingOrganization"),
    row("partof", SearchParamType::Reference, "Location.partOf"),
    row("status", SearchParamType::Token, "Location.status"),
    row("type", SearchParamType::Token, "Location.type"),
];

pub(crate) static RESOURCE_PARAMS: phf::Map<&'static str, &'static [ParamRow]> = phf_map! {
    "Appointment" => APPOINTMENT,
    "Account" => ACCOUNT,
    "Invoice" => INVOICE,
    "EventDefinition" => EVENT_DEFINITION,
    "DocumentManifest" => DOCUMENT_MANIFEST,
    "MessageDefinition" => MESSAGE_DEFINITION,
    "Goal" => GOAL,
    "MedicinalProductPackaged" => MEDICINAL_PRODUCT_PACKAGED,
    "Endpoint" => ENDPOINT,
    "EnrollmentRequest" => ENROLLMENT_REQUEST,
    "Consent" => CONSENT,
    "Medication" => MEDICATION,
    "CapabilityStatement" => CAPABILITY_STATEMENT,
    "Measure" => MEASURE,
    "ResearchSubject" => RESEARCH_SUBJECT,
    "Subscription" => SUBSCRIPTION,
    "DocumentReference" => DOCUMENT_REFERENCE,
    "GraphDefinition" => GRAPH_DEFINITION,
    "CoverageEligibilityResponse" => COVERAGE_ELIGIBILITY_RESPONSE,
    "MeasureReport" => MEASURE_REPORT,
    "PractitionerRole" => PRACTITIONER_ROLE,
    "ServiceRequest" => SERVICE_REQUEST,
    "RelatedPerson" => RELATED_PERSON,
    "SupplyRequest" => SUPPLY_REQUEST,
    "Practitioner" => PRACTITIONER,
    "VerificationResult" => VERIFICATION_RESULT,
    "BodyStructure" => BODY_STRUCTURE,
    "Slot" => SLOT,
    "Contract" => CONTRACT,
    "Person" => PERSON,
    "RiskAssessment" => RISK_ASSESSMENT,
    "Group" => GROUP,
    "PaymentNotice" => PAYMENT_NOTICE,
    "ResearchDefinition" => RESEARCH_DEFINITION,
    "Organization" => ORGANIZATION,
    "CareTeam" => CARE_TEAM,
    "ImplementationGuide" => IMPLEMENTATION_GUIDE,
    "ImagingStudy" => IMAGING_STUDY,
    "FamilyMemberHistory" => FAMILY_MEMBER_HISTORY,
    "ChargeItem" => CHARGE_ITEM,
    "ResearchElementDefinition" => RESEARCH_ELEMENT_DEFINITION,
    "Encounter" => ENCOUNTER,
    "Substance" => SUBSTANCE,
    "SubstanceSpecification" => SUBSTANCE_SPECIFICATION,
    "SearchParameter" => SEARCH_PARAMETER,
    "ActivityDefinition" => ACTIVITY_DEFINITION,
    "Communication" => COMMUNICATION,
    "InsurancePlan" => INSURANCE_PLAN,
    "Linkage" => LINKAGE,
    "ImmunizationEvaluation" => IMMUNIZATION_EVALUATION,
    "DeviceUseStatement" => DEVICE_USE_STATEMENT,
    "RequestGroup" => REQUEST_GROUP,
    "DeviceRequest" => DEVICE_REQUEST,
    "MessageHeader" => MESSAGE_HEADER,
    "ImmunizationRecommendation" => IMMUNIZATION_RECOMMENDATION,
    "Provenance" => PROVENANCE,
    "Task" => TASK,
    "Questionnaire" => QUESTIONNAIRE,
    "ExplanationOfBenefit" => EXPLANATION_OF_BENEFIT,
    "MedicinalProductPharmaceutical" => MEDICINAL_PRODUCT_PHARMACEUTICAL,
    "ResearchStudy" => RESEARCH_STUDY,
    "Specimen" => SPECIMEN,
    "AllergyIntolerance" => ALLERGY_INTOLERANCE,
    "CarePlan" => CARE_PLAN,
    "StructureDefinition" => STRUCTURE_DEFINITION,
    "EpisodeOfCare" => EPISODE_OF_CARE,
    "ChargeItemDefinition" => CHARGE_ITEM_DEFINITION,
    "Procedure" => PROCEDURE,
    "List" => LIST,
    "ConceptMap" => CONCEPT_MAP,
    "OperationDefinition" => OPERATION_DEFINITION,
    "ValueSet" => VALUE_SET,
    "MedicationRequest" => MEDICATION_REQUEST,
    "Immunization" => IMMUNIZATION,
    "EffectEvidenceSynthesis" => EFFECT_EVIDENCE_SYNTHESIS,
    "Device" => DEVICE,
    "VisionPrescription" => VISION_PRESCRIPTION,
    "Resource" => RESOURCE,
    "Media" => MEDIA,
    "MedicinalProductContraindication" => MEDICINAL_PRODUCT_CONTRAINDICATION,
    "EvidenceVariable" => EVIDENCE_VARIABLE,
    "MolecularSequence" => MOLECULAR_SEQUENCE,
    "MedicinalProduct" => MEDICINAL_PRODUCT,
    "DeviceMetric" => DEVICE_METRIC,
    "Flag" => FLAG,
    "CodeSystem" => CODE_SYSTEM,
    "RiskEvidenceSynthesis" => RISK_EVIDENCE_SYNTHESIS,
    "AppointmentResponse" => APPOINTMENT_RESPONSE,
    "StructureMap" => STRUCTURE_MAP,
    "AdverseEvent" => ADVERSE_EVENT,
    "GuidanceResponse" => GUIDANCE_RESPONSE,
    "Observation" => OBSERVATION,
    "MedicationAdministration" => MEDICATION_ADMINISTRATION,
    "EnrollmentResponse" => ENROLLMENT_RESPONSE,
    "Library" => LIBRARY,
    "MedicinalProductInteraction" => MEDICINAL_PRODUCT_INTERACTION,
    "MedicationStatement" => MEDICATION_STATEMENT,
    "CommunicationRequest" => COMMUNICATION_REQUEST,
    "TestScript" => TEST_SCRIPT,
    "Basic" => BASIC,
    "TestReport" => TEST_REPORT,
    "ClaimResponse" => CLAIM_RESPONSE,
    "MedicationDispense" => MEDICATION_DISPENSE,
    "DiagnosticReport" => DIAGNOSTIC_REPORT,
    "OrganizationAffiliation" => ORGANIZATION_AFFILIATION,
    "HealthcareService" => HEALTHCARE_SERVICE,
    "MedicinalProductIndication" => MEDICINAL_PRODUCT_INDICATION,
    "NutritionOrder" => NUTRITION_ORDER,
    "TerminologyCapabilities" => TERMINOLOGY_CAPABILITIES,
    "Evidence" => EVIDENCE,
    "AuditEvent" => AUDIT_EVENT,
    "PaymentReconciliation" => PAYMENT_RECONCILIATION,
    "Condition" => CONDITION,
    "SpecimenDefinition" => SPECIMEN_DEFINITION,
    "Composition" => COMPOSITION,
    "DetectedIssue" => DETECTED_ISSUE,
    "Bundle" => BUNDLE,
    "CompartmentDefinition" => COMPARTMENT_DEFINITION,
    "MedicationKnowledge" => MEDICATION_KNOWLEDGE,
    "Patient" => PATIENT,
    "Coverage" => COVERAGE,
    "QuestionnaireResponse" => QUESTIONNAIRE_RESPONSE,
    "CoverageEligibilityRequest" => COVERAGE_ELIGIBILITY_REQUEST,
    "NamingSystem" => NAMING_SYSTEM,
    "MedicinalProductUndesirableEffect" => MEDICINAL_PRODUCT_UNDESIRABLE_EFFECT,
    "ExampleScenario" => EXAMPLE_SCENARIO,
    "SupplyDelivery" => SUPPLY_DELIVERY,
    "Schedule" => SCHEDULE,
    "ClinicalImpression" => CLINICAL_IMPRESSION,
    "DeviceDefinition" => DEVICE_DEFINITION,
    "PlanDefinition" => PLAN_DEFINITION,
    "MedicinalProductAuthorization" => MEDICINAL_PRODUCT_AUTHORIZATION,
    "Claim" => CLAIM,
    "Location" => LOCATION,
};
