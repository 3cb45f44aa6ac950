//! Closed catalog of AWS Support API operations.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownOperation;
use crate::recase::{recase_key, Case};

/// A remote operation the request builder can target.
///
/// Each variant's idiomatic name (`create_case`) maps 1:1 to a wire name
/// (`CreateCase`) by recasing the whole identifier with [`Case::Upper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    AddAttachmentsToSet,
    AddCommunicationToCase,
    CreateCase,
    DescribeAttachment,
    DescribeCases,
    DescribeCommunications,
    DescribeCreateCaseOptions,
    DescribeServices,
    DescribeSeverityLevels,
    DescribeSupportedLanguages,
    DescribeTrustedAdvisorCheckRefreshStatuses,
    DescribeTrustedAdvisorCheckResult,
    DescribeTrustedAdvisorCheckSummaries,
    DescribeTrustedAdvisorChecks,
    RefreshTrustedAdvisorCheck,
    ResolveCase,
}

impl Operation {
    /// Every operation in the catalog.
    pub const ALL: [Operation; 16] = [
        Self::AddAttachmentsToSet,
        Self::AddCommunicationToCase,
        Self::CreateCase,
        Self::DescribeAttachment,
        Self::DescribeCases,
        Self::DescribeCommunications,
        Self::DescribeCreateCaseOptions,
        Self::DescribeServices,
        Self::DescribeSeverityLevels,
        Self::DescribeSupportedLanguages,
        Self::DescribeTrustedAdvisorCheckRefreshStatuses,
        Self::DescribeTrustedAdvisorCheckResult,
        Self::DescribeTrustedAdvisorCheckSummaries,
        Self::DescribeTrustedAdvisorChecks,
        Self::RefreshTrustedAdvisorCheck,
        Self::ResolveCase,
    ];

    /// Idiomatic `snake_case` name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddAttachmentsToSet => "add_attachments_to_set",
            Self::AddCommunicationToCase => "add_communication_to_case",
            Self::CreateCase => "create_case",
            Self::DescribeAttachment => "describe_attachment",
            Self::DescribeCases => "describe_cases",
            Self::DescribeCommunications => "describe_communications",
            Self::DescribeCreateCaseOptions => "describe_create_case_options",
            Self::DescribeServices => "describe_services",
            Self::DescribeSeverityLevels => "describe_severity_levels",
            Self::DescribeSupportedLanguages => "describe_supported_languages",
            Self::DescribeTrustedAdvisorCheckRefreshStatuses => {
                "describe_trusted_advisor_check_refresh_statuses"
            }
            Self::DescribeTrustedAdvisorCheckResult => "describe_trusted_advisor_check_result",
            Self::DescribeTrustedAdvisorCheckSummaries => {
                "describe_trusted_advisor_check_summaries"
            }
            Self::DescribeTrustedAdvisorChecks => "describe_trusted_advisor_checks",
            Self::RefreshTrustedAdvisorCheck => "refresh_trusted_advisor_check",
            Self::ResolveCase => "resolve_case",
        }
    }

    /// Wire name used in the target header, e.g. `DescribeTrustedAdvisorCheckResult`.
    #[must_use]
    pub fn wire_name(self) -> String {
        recase_key(self.as_str(), Case::Upper)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation { name: s.to_owned() })
    }
}
