//! Per-operation wrappers for the AWS Support API.
//!
//! Each wrapper takes its required arguments positionally plus an options
//! struct of optional arguments, merges the required ones into the bag under
//! fixed idiomatic keys, and hands the result to
//! [`support_core::build_request`]. Option fields left as `None` never reach
//! the wire. Argument values are passed through unvalidated.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Serialize, Serializer};
use support_core::{build_request, Operation, RequestDescriptor, Value};

use crate::error::ClientError;

/// Language used when a wrapper with a defaulted `language` gets none.
pub const DEFAULT_LANGUAGE: &str = "en";

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// A file attached to a case communication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Raw file content; base64-encoded on the wire.
    #[serde(serialize_with = "serialize_base64")]
    pub data: Vec<u8>,
}

impl Attachment {
    #[must_use]
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            data: data.into(),
        }
    }
}

fn serialize_base64<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(data))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddAttachmentsToSetOptions {
    /// Existing set to append to; a new set is created when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_set_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddCommunicationToCaseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_email_addresses: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateCaseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_email_addresses: Option<Vec<String>>,
    /// `customer-service` or `technical`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescribeCasesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_communications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_resolved_cases: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescribeCommunicationsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescribeServicesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescribeSeverityLevelsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescribeTrustedAdvisorCheckResultOptions {
    /// Defaults to [`DEFAULT_LANGUAGE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolveCaseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Normalizes `options`, merges `required` over it, and builds the request.
fn assemble<O, const N: usize>(
    operation: Operation,
    options: &O,
    required: [(&str, Value); N],
) -> Result<RequestDescriptor, ClientError>
where
    O: Serialize + ?Sized,
{
    let mut payload = Value::from_serialize(options)?;
    for (key, value) in required {
        payload.insert(key, value)?;
    }
    Ok(build_request(operation, payload)?)
}

/// Builds a request from an untyped bag of idiomatic arguments.
///
/// `params` may be a map, an ordered key/value list collected into a
/// [`Value`], or `Value::Null` for no arguments.
///
/// # Errors
///
/// Returns [`ClientError::Request`] if `params` is not a map or has keys
/// that collide once recased.
pub fn call(
    operation: Operation,
    params: impl Into<Value>,
) -> Result<RequestDescriptor, ClientError> {
    Ok(build_request(operation, params)?)
}

// ---------------------------------------------------------------------------
// Cases
// ---------------------------------------------------------------------------

/// Adds attachments to a new or existing attachment set.
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn add_attachments_to_set(
    attachments: &[Attachment],
    options: &AddAttachmentsToSetOptions,
) -> Result<RequestDescriptor, ClientError> {
    let attachments = Value::from_serialize(attachments)?;
    assemble(
        Operation::AddAttachmentsToSet,
        options,
        [("attachments", attachments)],
    )
}

/// Adds a correspondence to a case.
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn add_communication_to_case(
    communication_body: &str,
    options: &AddCommunicationToCaseOptions,
) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::AddCommunicationToCase,
        options,
        [("communication_body", Value::from(communication_body))],
    )
}

/// Opens a new support case.
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn create_case(
    subject: &str,
    communication_body: &str,
    options: &CreateCaseOptions,
) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::CreateCase,
        options,
        [
            ("subject", Value::from(subject)),
            ("communication_body", Value::from(communication_body)),
        ],
    )
}

/// Fetches an attachment by ID.
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_attachment(attachment_id: &str) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::DescribeAttachment,
        &(),
        [("attachment_id", Value::from(attachment_id))],
    )
}

/// Lists cases matching the given filters.
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_cases(options: &DescribeCasesOptions) -> Result<RequestDescriptor, ClientError> {
    assemble(Operation::DescribeCases, options, [])
}

/// Lists communications for a case.
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_communications(
    case_id: &str,
    options: &DescribeCommunicationsOptions,
) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::DescribeCommunications,
        options,
        [("case_id", Value::from(case_id))],
    )
}

/// Lists the severity levels and communication types available for a case.
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_create_case_options(
    issue_type: &str,
    service_code: &str,
    language: &str,
    category_code: &str,
) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::DescribeCreateCaseOptions,
        &(),
        [
            ("issue_type", Value::from(issue_type)),
            ("service_code", Value::from(service_code)),
            ("language", Value::from(language)),
            ("category_code", Value::from(category_code)),
        ],
    )
}

/// Lists AWS services and their categories.
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_services(
    options: &DescribeServicesOptions,
) -> Result<RequestDescriptor, ClientError> {
    assemble(Operation::DescribeServices, options, [])
}

/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_severity_levels(
    options: &DescribeSeverityLevelsOptions,
) -> Result<RequestDescriptor, ClientError> {
    assemble(Operation::DescribeSeverityLevels, options, [])
}

/// Lists the languages a case can be opened in.
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_supported_languages(
    issue_type: &str,
    service_code: &str,
    category_code: &str,
) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::DescribeSupportedLanguages,
        &(),
        [
            ("issue_type", Value::from(issue_type)),
            ("service_code", Value::from(service_code)),
            ("category_code", Value::from(category_code)),
        ],
    )
}

/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn resolve_case(options: &ResolveCaseOptions) -> Result<RequestDescriptor, ClientError> {
    assemble(Operation::ResolveCase, options, [])
}

// ---------------------------------------------------------------------------
// Trusted Advisor
// ---------------------------------------------------------------------------

/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_trusted_advisor_check_refresh_statuses(
    check_ids: &[String],
) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::DescribeTrustedAdvisorCheckRefreshStatuses,
        &(),
        [("check_ids", Value::from(check_ids.to_vec()))],
    )
}

/// Fetches the result of one check; `language` defaults to [`DEFAULT_LANGUAGE`].
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_trusted_advisor_check_result(
    check_id: &str,
    options: &DescribeTrustedAdvisorCheckResultOptions,
) -> Result<RequestDescriptor, ClientError> {
    let language = options.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    assemble(
        Operation::DescribeTrustedAdvisorCheckResult,
        options,
        [
            ("check_id", Value::from(check_id)),
            ("language", Value::from(language)),
        ],
    )
}

/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_trusted_advisor_check_summaries(
    check_ids: &[String],
) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::DescribeTrustedAdvisorCheckSummaries,
        &(),
        [("check_ids", Value::from(check_ids.to_vec()))],
    )
}

/// Lists all Trusted Advisor checks; `language` defaults to [`DEFAULT_LANGUAGE`].
///
/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn describe_trusted_advisor_checks(
    language: Option<&str>,
) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::DescribeTrustedAdvisorChecks,
        &(),
        [("language", Value::from(language.unwrap_or(DEFAULT_LANGUAGE)))],
    )
}

/// # Errors
///
/// Returns [`ClientError`] if the payload cannot be assembled.
pub fn refresh_trusted_advisor_check(check_id: &str) -> Result<RequestDescriptor, ClientError> {
    assemble(
        Operation::RefreshTrustedAdvisorCheck,
        &(),
        [("check_id", Value::from(check_id))],
    )
}
