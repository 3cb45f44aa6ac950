//! Client facade: builds descriptors with [`crate::operations`] and forwards
//! them to a [`Transport`].

use support_core::{Operation, RequestDescriptor, Value};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::operations::{
    self, AddAttachmentsToSetOptions, AddCommunicationToCaseOptions, Attachment,
    CreateCaseOptions, DescribeCasesOptions, DescribeCommunicationsOptions,
    DescribeServicesOptions, DescribeSeverityLevelsOptions,
    DescribeTrustedAdvisorCheckResultOptions, ResolveCaseOptions,
};
use crate::transport::Transport;

/// AWS Support API client over a pluggable transport.
///
/// Each method sends exactly one request and returns the raw JSON response.
pub struct SupportClient<T> {
    config: ClientConfig,
    endpoint: String,
    transport: T,
}

impl<T: Transport> SupportClient<T> {
    #[must_use]
    pub fn new(config: ClientConfig, transport: T) -> Self {
        let endpoint = config.endpoint_url();
        Self {
            config,
            endpoint,
            transport,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: RequestDescriptor) -> Result<serde_json::Value, ClientError> {
        tracing::debug!(
            target_header = request.target().unwrap_or_default(),
            endpoint = %self.endpoint,
            "dispatching support request"
        );
        let response = self.transport.dispatch(&self.endpoint, request).await;
        if let Err(ref e) = response {
            tracing::warn!(error = %e, "support request failed");
        }
        Ok(response?)
    }

    /// Sends an untyped bag of idiomatic arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn call(
        &self,
        operation: Operation,
        params: impl Into<Value>,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::call(operation, params)?).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn add_attachments_to_set(
        &self,
        attachments: &[Attachment],
        options: &AddAttachmentsToSetOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::add_attachments_to_set(attachments, options)?).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn add_communication_to_case(
        &self,
        communication_body: &str,
        options: &AddCommunicationToCaseOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::add_communication_to_case(
            communication_body,
            options,
        )?)
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn create_case(
        &self,
        subject: &str,
        communication_body: &str,
        options: &CreateCaseOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::create_case(subject, communication_body, options)?).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_attachment(
        &self,
        attachment_id: &str,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::describe_attachment(attachment_id)?).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_cases(
        &self,
        options: &DescribeCasesOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::describe_cases(options)?).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_communications(
        &self,
        case_id: &str,
        options: &DescribeCommunicationsOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::describe_communications(case_id, options)?).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_create_case_options(
        &self,
        issue_type: &str,
        service_code: &str,
        language: &str,
        category_code: &str,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::describe_create_case_options(
            issue_type,
            service_code,
            language,
            category_code,
        )?)
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_services(
        &self,
        options: &DescribeServicesOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::describe_services(options)?).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_severity_levels(
        &self,
        options: &DescribeSeverityLevelsOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::describe_severity_levels(options)?).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_supported_languages(
        &self,
        issue_type: &str,
        service_code: &str,
        category_code: &str,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::describe_supported_languages(
            issue_type,
            service_code,
            category_code,
        )?)
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_trusted_advisor_check_refresh_statuses(
        &self,
        check_ids: &[String],
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::describe_trusted_advisor_check_refresh_statuses(
            check_ids,
        )?)
        .await
    }

    /// Uses the configured default language when `options.language` is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_trusted_advisor_check_result(
        &self,
        check_id: &str,
        options: &DescribeTrustedAdvisorCheckResultOptions,
    ) -> Result<serde_json::Value, ClientError> {
        let options = DescribeTrustedAdvisorCheckResultOptions {
            language: options
                .language
                .clone()
                .or_else(|| Some(self.config.default_language.clone())),
        };
        self.send(operations::describe_trusted_advisor_check_result(
            check_id, &options,
        )?)
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_trusted_advisor_check_summaries(
        &self,
        check_ids: &[String],
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::describe_trusted_advisor_check_summaries(
            check_ids,
        )?)
        .await
    }

    /// Uses the configured default language when `language` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn describe_trusted_advisor_checks(
        &self,
        language: Option<&str>,
    ) -> Result<serde_json::Value, ClientError> {
        let language = language.unwrap_or(self.config.default_language.as_str());
        self.send(operations::describe_trusted_advisor_checks(Some(
            language,
        ))?)
        .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn refresh_trusted_advisor_check(
        &self,
        check_id: &str,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::refresh_trusted_advisor_check(check_id)?).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request cannot be built or dispatched.
    pub async fn resolve_case(
        &self,
        options: &ResolveCaseOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.send(operations::resolve_case(options)?).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::error::TransportError;

    /// Records every dispatched request and answers with a canned body.
    struct RecordingTransport {
        sent: Mutex<Vec<(String, RequestDescriptor)>>,
        fail: bool,
    }

    impl RecordingTransport {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn sent(&self) -> Vec<(String, RequestDescriptor)> {
            self.sent.lock().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn dispatch(
            &self,
            endpoint: &str,
            request: RequestDescriptor,
        ) -> Result<serde_json::Value, TransportError> {
            self.sent.lock().push((endpoint.to_string(), request));
            if self.fail {
                return Err(TransportError::Status {
                    status: http::StatusCode::BAD_REQUEST,
                    body: "CaseIdNotFound".to_string(),
                });
            }
            Ok(json!({"ok": true}))
        }
    }

    /// Fails every dispatch before reaching the network.
    struct UnreachableTransport;

    #[async_trait]
    impl Transport for UnreachableTransport {
        async fn dispatch(
            &self,
            endpoint: &str,
            _request: RequestDescriptor,
        ) -> Result<serde_json::Value, TransportError> {
            Err(anyhow::anyhow!("connection refused: {endpoint}").into())
        }
    }

    fn client() -> SupportClient<RecordingTransport> {
        SupportClient::new(ClientConfig::default(), RecordingTransport::new())
    }

    fn body(request: &RequestDescriptor) -> serde_json::Value {
        serde_json::from_slice(&request.body_json().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn create_case_dispatches_one_request() {
        let client = client();
        let response = client
            .create_case("Subject", "Body", &CreateCaseOptions::default())
            .await
            .unwrap();
        assert_eq!(response, json!({"ok": true}));

        let sent = client.transport().sent();
        assert_eq!(sent.len(), 1);
        let (endpoint, request) = &sent[0];
        assert_eq!(endpoint, "https://support.us-east-1.amazonaws.com");
        assert_eq!(request.target(), Some("AWSSupport_20130415.CreateCase"));
        assert_eq!(
            body(request),
            json!({"subject": "Subject", "communicationBody": "Body"})
        );
    }

    #[tokio::test]
    async fn configured_language_is_default() {
        let config = ClientConfig::default().with_default_language("ko");
        let client = SupportClient::new(config, RecordingTransport::new());

        client.describe_trusted_advisor_checks(None).await.unwrap();
        client
            .describe_trusted_advisor_check_result(
                "check-1",
                &DescribeTrustedAdvisorCheckResultOptions::default(),
            )
            .await
            .unwrap();
        client
            .describe_trusted_advisor_checks(Some("en"))
            .await
            .unwrap();

        let sent = client.transport().sent();
        assert_eq!(body(&sent[0].1), json!({"language": "ko"}));
        assert_eq!(
            body(&sent[1].1),
            json!({"checkId": "check-1", "language": "ko"})
        );
        assert_eq!(body(&sent[2].1), json!({"language": "en"}));
    }

    #[tokio::test]
    async fn endpoint_override_is_used() {
        let config = ClientConfig::default().with_endpoint("http://localhost:4566");
        let client = SupportClient::new(config, RecordingTransport::new());
        client
            .resolve_case(&ResolveCaseOptions {
                case_id: Some("case-1".into()),
            })
            .await
            .unwrap();
        let sent = client.transport().sent();
        assert_eq!(sent[0].0, "http://localhost:4566");
        assert_eq!(body(&sent[0].1), json!({"caseId": "case-1"}));
    }

    #[tokio::test]
    async fn transport_errors_surface_unmodified() {
        let client = SupportClient::new(ClientConfig::default(), RecordingTransport::failing());
        let err = client.describe_attachment("att-1").await.unwrap_err();
        match err {
            ClientError::Transport(TransportError::Status { status, body }) => {
                assert_eq!(status, http::StatusCode::BAD_REQUEST);
                assert_eq!(body, "CaseIdNotFound");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn internal_transport_errors_keep_their_message() {
        let config = ClientConfig::default().with_endpoint("http://127.0.0.1:1");
        let client = SupportClient::new(config, UnreachableTransport);
        let err = client.describe_trusted_advisor_checks(None).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(TransportError::Internal(_))));
        assert_eq!(
            err.to_string(),
            "transport error: connection refused: http://127.0.0.1:1"
        );
    }

    #[tokio::test]
    async fn build_errors_skip_the_transport() {
        let client = client();
        let params: Value = vec![("case_id", Value::Null), ("caseId", Value::Null)]
            .into_iter()
            .collect();
        let err = client.call(Operation::ResolveCase, params).await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
        assert!(client.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn every_wrapper_targets_its_operation() {
        let client = client();
        let ids = vec!["c".to_string()];
        client
            .add_attachments_to_set(
                &[Attachment::new("a.txt", b"x".to_vec())],
                &AddAttachmentsToSetOptions::default(),
            )
            .await
            .unwrap();
        client
            .add_communication_to_case("b", &AddCommunicationToCaseOptions::default())
            .await
            .unwrap();
        client
            .create_case("s", "b", &CreateCaseOptions::default())
            .await
            .unwrap();
        client.describe_attachment("a").await.unwrap();
        client
            .describe_cases(&DescribeCasesOptions::default())
            .await
            .unwrap();
        client
            .describe_communications("c", &DescribeCommunicationsOptions::default())
            .await
            .unwrap();
        client
            .describe_create_case_options("technical", "s", "en", "c")
            .await
            .unwrap();
        client
            .describe_services(&DescribeServicesOptions::default())
            .await
            .unwrap();
        client
            .describe_severity_levels(&DescribeSeverityLevelsOptions::default())
            .await
            .unwrap();
        client
            .describe_supported_languages("technical", "s", "c")
            .await
            .unwrap();
        client
            .describe_trusted_advisor_check_refresh_statuses(&ids)
            .await
            .unwrap();
        client
            .describe_trusted_advisor_check_result(
                "c",
                &DescribeTrustedAdvisorCheckResultOptions::default(),
            )
            .await
            .unwrap();
        client
            .describe_trusted_advisor_check_summaries(&ids)
            .await
            .unwrap();
        client.describe_trusted_advisor_checks(None).await.unwrap();
        client.refresh_trusted_advisor_check("c").await.unwrap();
        client
            .resolve_case(&ResolveCaseOptions::default())
            .await
            .unwrap();

        let targets: Vec<String> = client
            .transport()
            .sent()
            .iter()
            .map(|(_, r)| r.target().unwrap_or_default().to_string())
            .collect();
        let expected: Vec<String> = Operation::ALL
            .iter()
            .map(|op| format!("AWSSupport_20130415.{}", op.wire_name()))
            .collect();
        assert_eq!(targets, expected);
    }
}
