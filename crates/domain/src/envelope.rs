//! The `{code, data, message}` response envelope and its validator.
//!
//! Every menu payload, whether produced in-process or fetched from an
//! upstream, travels in this wrapper. `code == 200` is the only success
//! value; anything else is an application-level failure even when the
//! transport succeeded.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const SUCCESS_CODE: i64 = 200;

/// Message used when a failure envelope carries no (or an empty) message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub code: i64,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: SUCCESS_CODE,
            data: Some(data),
            message: message.into(),
        }
    }

    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl<T: Serialize> ResponseEnvelope<T> {
    /// Encode into the raw body shape a fetcher hands to [`validate`].
    pub fn to_body(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Malformed response envelope: {0}")]
    Malformed(String),

    #[error("Application error {code}: {message}")]
    ApplicationError { code: i64, message: String },
}

/// Validate a decoded response body and extract its payload.
///
/// A `null` payload on a successful envelope is valid and yields
/// `T::default()`.
pub fn validate<T>(body: &Value) -> Result<T, EnvelopeError>
where
    T: DeserializeOwned + Default,
{
    let record = body
        .as_object()
        .ok_or_else(|| EnvelopeError::Malformed("body is not a record".to_string()))?;

    let code = match record.get("code") {
        None => return Err(EnvelopeError::Malformed("missing `code` field".to_string())),
        Some(raw) => raw.as_i64().ok_or_else(|| {
            EnvelopeError::Malformed(format!("`code` is not an integer: {raw}"))
        })?,
    };

    if code != SUCCESS_CODE {
        let message = record
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
            .to_string();
        return Err(EnvelopeError::ApplicationError { code, message });
    }

    match record.get("data") {
        None => Err(EnvelopeError::Malformed("missing `data` field".to_string())),
        Some(Value::Null) => Ok(T::default()),
        Some(data) => T::deserialize(data)
            .map_err(|e| EnvelopeError::Malformed(format!("`data` has unexpected shape: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_with_sequence() {
        let body = json!({"code": 200, "data": [1, 2, 3], "message": "ok"});
        let data: Vec<u32> = validate(&body).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_null_data_is_valid() {
        let body = json!({"code": 200, "data": null, "message": "ok"});
        let data: Vec<u32> = validate(&body).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        let body = json!({"code": 200, "data": []});
        let data: Vec<String> = validate(&body).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_missing_code_is_malformed() {
        let body = json!({"data": [], "message": "ok"});
        let err = validate::<Vec<u32>>(&body).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }

    #[test]
    fn test_non_integer_code_is_malformed() {
        for code in [json!("200"), json!(200.5), json!(null), json!(true)] {
            let body = json!({"code": code, "data": []});
            let err = validate::<Vec<u32>>(&body).unwrap_err();
            assert!(matches!(err, EnvelopeError::Malformed(_)), "code {code}");
        }
    }

    #[test]
    fn test_non_record_body_is_malformed() {
        let err = validate::<Vec<u32>>(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }

    #[test]
    fn test_missing_data_on_success_is_malformed() {
        let body = json!({"code": 200, "message": "ok"});
        let err = validate::<Vec<u32>>(&body).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }

    #[test]
    fn test_wrong_data_shape_is_malformed() {
        let body = json!({"code": 200, "data": {"not": "a list"}});
        let err = validate::<Vec<u32>>(&body).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }

    #[test]
    fn test_non_200_is_application_error() {
        let body = json!({"code": 500, "data": null, "message": "x"});
        let err = validate::<Vec<u32>>(&body).unwrap_err();
        assert_eq!(
            err,
            EnvelopeError::ApplicationError {
                code: 500,
                message: "x".to_string()
            }
        );
    }

    #[test]
    fn test_application_error_message_falls_back() {
        for body in [
            json!({"code": 404, "data": null}),
            json!({"code": 404, "data": null, "message": ""}),
            json!({"code": 404, "data": null, "message": "   "}),
        ] {
            let err = validate::<Vec<u32>>(&body).unwrap_err();
            assert_eq!(
                err,
                EnvelopeError::ApplicationError {
                    code: 404,
                    message: DEFAULT_FAILURE_MESSAGE.to_string()
                }
            );
        }
    }

    #[test]
    fn test_failure_envelope_serialises_null_data() {
        let body = ResponseEnvelope::<Vec<u32>>::failure(500, "boom")
            .to_body()
            .unwrap();
        assert_eq!(body, json!({"code": 500, "data": null, "message": "boom"}));
    }
}
