use serde::Serialize;
use serde_json::Value;

use crate::error::HandlerError;

/// Content type tag attached to every successful response.
pub const BASE64_CONTENT_TYPE: &str = "application/base64";

/// Invocation request naming the object to download and encode.
#[derive(Debug, PartialEq, Eq)]
pub struct EncodeRequest {
    /// Bucket holding the object
    pub s3_bucket: String,
    /// Key of the object within the bucket
    pub s3_key: String,
}

impl EncodeRequest {
    /// Parses and validates the raw invocation payload.
    ///
    /// Both fields must be present and hold strings before any I/O
    /// happens; anything else is rejected with a message naming the
    /// offending field.
    pub fn from_payload(payload: &str) -> Result<Self, HandlerError> {
        let value: Value = serde_json::from_str(payload).map_err(|err| {
            HandlerError::InvalidJson(format!("failed to parse input JSON: {err}"))
        })?;

        Ok(EncodeRequest {
            s3_bucket: require_string_field(&value, "s3bucket")?,
            s3_key: require_string_field(&value, "s3key")?,
        })
    }
}

fn require_string_field(value: &Value, field: &str) -> Result<String, HandlerError> {
    match value.get(field) {
        Some(Value::String(field_value)) => Ok(field_value.clone()),
        Some(_) => Err(HandlerError::InvalidJson(format!(
            "input value {field} must be a string"
        ))),
        None => Err(HandlerError::InvalidJson(format!(
            "missing input value {field}"
        ))),
    }
}

/// Successful invocation response carrying the encoded object.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EncodeResponse {
    /// Base64 encoding of the full object body
    pub payload: String,
    /// Declared encoding of the payload
    pub content_type: &'static str,
}

impl EncodeResponse {
    /// Wraps an encoded payload in the response contract.
    pub fn new(payload: String) -> Self {
        EncodeResponse {
            payload,
            content_type: BASE64_CONTENT_TYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parses_complete_request() {
        let request =
            EncodeRequest::from_payload(r#"{"s3bucket": "b1", "s3key": "k1"}"#).unwrap();

        assert_eq!(
            request,
            EncodeRequest {
                s3_bucket: "b1".to_string(),
                s3_key: "k1".to_string(),
            }
        );
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let request = EncodeRequest::from_payload(
            r#"{"s3bucket": "b1", "s3key": "k1", "trace": true}"#,
        )
        .unwrap();

        assert_eq!(request.s3_key, "k1");
    }

    #[test]
    fn test_rejects_unparseable_payload() {
        let err = EncodeRequest::from_payload("not-json").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert!(err.to_string().starts_with("failed to parse input JSON"));
    }

    #[test]
    fn test_rejects_missing_bucket() {
        let err = EncodeRequest::from_payload(r#"{"s3key": "k1"}"#).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert_eq!(err.to_string(), "missing input value s3bucket");
    }

    #[test]
    fn test_rejects_missing_key() {
        let err = EncodeRequest::from_payload(r#"{"s3bucket": "b1"}"#).unwrap_err();

        assert_eq!(err.to_string(), "missing input value s3key");
    }

    #[test]
    fn test_rejects_non_string_bucket() {
        let err = EncodeRequest::from_payload(r#"{"s3bucket": 7, "s3key": "k1"}"#).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert_eq!(err.to_string(), "input value s3bucket must be a string");
    }

    #[test]
    fn test_rejects_non_string_key() {
        let err = EncodeRequest::from_payload(r#"{"s3bucket": "b1", "s3key": 7}"#).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert_eq!(err.to_string(), "input value s3key must be a string");
    }

    #[test]
    fn test_response_tags_base64_content() {
        let response = EncodeResponse::new("aGk=".to_string());

        assert_eq!(response.payload, "aGk=");
        assert_eq!(response.content_type, "application/base64");
    }
}
