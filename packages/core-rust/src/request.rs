//! Request builder for the JSON 1.1 protocol.
//!
//! Combines an [`Operation`] with a recased payload and the static transport
//! hints into a [`RequestDescriptor`]. Nothing here performs I/O; the
//! descriptor is handed to an external transport for signing and dispatch.

use http::Method;

use crate::error::RequestError;
use crate::operation::Operation;
use crate::recase::recase;
use crate::value::Value;

/// Namespace of the AWS Support API in the target header.
pub const NAMESPACE: &str = "AWSSupport";

/// API version of the AWS Support API in the target header.
pub const VERSION: &str = "20130415";

/// Header naming the remote operation.
pub const TARGET_HEADER: &str = "x-amz-target";

pub const CONTENT_TYPE_HEADER: &str = "content-type";

/// Content type of every JSON 1.1 request body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// A JSON 1.1 API family identified by namespace and version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonTarget {
    pub namespace: &'static str,
    pub version: &'static str,
}

/// The AWS Support API.
pub const AWS_SUPPORT: JsonTarget = JsonTarget {
    namespace: NAMESPACE,
    version: VERSION,
};

impl JsonTarget {
    /// Target header value, `"<Namespace>_<Version>.<WireOperationName>"`.
    #[must_use]
    pub fn header_value(&self, operation: Operation) -> String {
        format!(
            "{}_{}.{}",
            self.namespace,
            self.version,
            operation.wire_name()
        )
    }

    /// Builds a POST descriptor for `operation` with a recased `payload`.
    ///
    /// A `Null` payload produces an empty object body.
    ///
    /// # Errors
    ///
    /// - [`RequestError::PayloadNotObject`] if the payload is neither a map nor null
    /// - [`RequestError::Recase`] if two payload keys recase to the same wire key
    /// - [`RequestError::NonFiniteNumber`] if the payload holds a NaN or infinite float
    pub fn build_request(
        &self,
        operation: Operation,
        payload: impl Into<Value>,
    ) -> Result<RequestDescriptor, RequestError> {
        let body = match payload.into() {
            Value::Null => Value::map(),
            map @ Value::Map(_) => recase(map)?,
            other => return Err(RequestError::PayloadNotObject { kind: other.kind() }),
        };
        if let Some(path) = non_finite_path(&body, "") {
            return Err(RequestError::NonFiniteNumber { path });
        }
        let target = self.header_value(operation);
        tracing::trace!(%operation, header = %target, "built request descriptor");

        Ok(RequestDescriptor {
            method: Method::POST,
            headers: vec![
                (TARGET_HEADER.to_owned(), target),
                (CONTENT_TYPE_HEADER.to_owned(), CONTENT_TYPE.to_owned()),
            ],
            body,
        })
    }
}

/// Builds a descriptor for an AWS Support operation.
///
/// # Errors
///
/// See [`JsonTarget::build_request`].
pub fn build_request(
    operation: Operation,
    payload: impl Into<Value>,
) -> Result<RequestDescriptor, RequestError> {
    AWS_SUPPORT.build_request(operation, payload)
}

/// Wire-keyed path of the first NaN or infinite float, e.g. `items[1].ratioValue`.
///
/// JSON has no encoding for these, and `serde_json` would write `null`.
fn non_finite_path(value: &Value, path: &str) -> Option<String> {
    match value {
        Value::Float(f) if !f.is_finite() => Some(path.to_owned()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| non_finite_path(item, &format!("{path}[{i}]"))),
        Value::Map(map) => map.iter().find_map(|(key, nested)| {
            let nested_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            non_finite_path(nested, &nested_path)
        }),
        _ => None,
    }
}

/// Transport-agnostic description of one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Header pairs in emission order: target first, then content type.
    pub headers: Vec<(String, String)>,
    /// Recased payload; always a map.
    pub body: Value,
}

impl RequestDescriptor {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.header(TARGET_HEADER)
    }

    /// Serializes the body as compact JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn body_json(&self) -> Result<Vec<u8>, RequestError> {
        Ok(self.body.to_json_bytes()?)
    }

    /// Converts the descriptor into an [`http::Request`] addressed at `uri`.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Encode`] if the body cannot be serialized
    /// - [`RequestError::Http`] if `uri` or a header is invalid
    pub fn into_http_request(self, uri: &str) -> Result<http::Request<Vec<u8>>, RequestError> {
        let body = self.body_json()?;
        let mut builder = http::Request::builder().method(self.method).uri(uri);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        Ok(builder.body(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params<const N: usize>(pairs: [(&str, Value); N]) -> Value {
        pairs.into_iter().collect()
    }

    #[test]
    fn create_case_scenario() {
        let payload = params([
            ("subject", Value::from("Subject")),
            (
                "communication_body",
                Value::from("Communication Body - Details Here"),
            ),
        ]);
        let request = build_request(Operation::CreateCase, payload).unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.target(), Some("AWSSupport_20130415.CreateCase"));
        assert_eq!(request.header("Content-Type"), Some(CONTENT_TYPE));
        let body: serde_json::Value =
            serde_json::from_slice(&request.body_json().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "subject": "Subject",
                "communicationBody": "Communication Body - Details Here"
            })
        );
    }

    #[test]
    fn describe_cases_scenario() {
        let payload = params([
            ("after_time", Value::from("2018-12-01T01:00")),
            ("include_resolved_cases", Value::Bool(true)),
        ]);
        let request = build_request(Operation::DescribeCases, payload).unwrap();
        let body: serde_json::Value =
            serde_json::from_slice(&request.body_json().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"afterTime": "2018-12-01T01:00", "includeResolvedCases": true})
        );
    }

    #[test]
    fn headers_are_target_then_content_type() {
        let request = build_request(Operation::ResolveCase, Value::Null).unwrap();
        assert_eq!(
            request.headers,
            vec![
                (
                    "x-amz-target".to_string(),
                    "AWSSupport_20130415.ResolveCase".to_string()
                ),
                (
                    "content-type".to_string(),
                    "application/x-amz-json-1.1".to_string()
                ),
            ]
        );
    }

    #[test]
    fn null_payload_is_empty_object() {
        let request = build_request(Operation::DescribeSeverityLevels, Value::Null).unwrap();
        assert_eq!(request.body_json().unwrap(), b"{}");
    }

    #[test]
    fn non_map_payload_is_rejected() {
        let err = build_request(Operation::CreateCase, Value::from(vec!["a"])).unwrap_err();
        assert!(matches!(err, RequestError::PayloadNotObject { kind: "array" }));
    }

    #[test]
    fn collision_surfaces_as_request_error() {
        let payload = params([("case_id", Value::Null), ("caseId", Value::Null)]);
        let err = build_request(Operation::ResolveCase, payload).unwrap_err();
        assert!(matches!(err, RequestError::Recase(_)));
    }

    #[test]
    fn nan_is_rejected_with_wire_key() {
        let payload = params([("ratio_value", Value::Float(f64::NAN))]);
        let err = build_request(Operation::DescribeCases, payload).unwrap_err();
        assert!(matches!(
            err,
            RequestError::NonFiniteNumber { ref path } if path == "ratioValue"
        ));
    }

    #[test]
    fn nested_infinity_reports_its_path() {
        let payload = params([(
            "check_items",
            Value::Array(vec![
                params([("ratio_value", Value::Float(1.5))]),
                params([("ratio_value", Value::Float(f64::NEG_INFINITY))]),
            ]),
        )]);
        let err = build_request(Operation::DescribeCases, payload).unwrap_err();
        assert!(matches!(
            err,
            RequestError::NonFiniteNumber { ref path } if path == "checkItems[1].ratioValue"
        ));
    }

    #[test]
    fn finite_floats_pass_through() {
        let payload = params([("ratio_value", Value::Float(0.25))]);
        let request = build_request(Operation::DescribeCases, payload).unwrap();
        assert_eq!(request.body_json().unwrap(), br#"{"ratioValue":0.25}"#);
    }

    #[test]
    fn u64_above_i64_reaches_wire_exactly() {
        let payload = Value::from(serde_json::json!({"max_results": u64::MAX}));
        let request = build_request(Operation::DescribeCases, payload).unwrap();
        assert_eq!(
            request.body_json().unwrap(),
            br#"{"maxResults":18446744073709551615}"#
        );
    }

    #[test]
    fn custom_target_header() {
        let target = JsonTarget {
            namespace: "Example",
            version: "20200101",
        };
        assert_eq!(
            target.header_value(Operation::DescribeTrustedAdvisorCheckResult),
            "Example_20200101.DescribeTrustedAdvisorCheckResult"
        );
    }

    #[test]
    fn converts_into_http_request() {
        let payload = params([("case_id", Value::from("case-1"))]);
        let request = build_request(Operation::ResolveCase, payload)
            .unwrap()
            .into_http_request("https://support.us-east-1.amazonaws.com/")
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.headers()["x-amz-target"],
            "AWSSupport_20130415.ResolveCase"
        );
        assert_eq!(request.headers()["content-type"], CONTENT_TYPE);
        assert_eq!(request.body().as_slice(), br#"{"caseId":"case-1"}"#);
    }

    #[test]
    fn invalid_uri_is_reported() {
        let err = build_request(Operation::ResolveCase, Value::Null)
            .unwrap()
            .into_http_request("not a uri")
            .unwrap_err();
        assert!(matches!(err, RequestError::Http(_)));
    }
}
