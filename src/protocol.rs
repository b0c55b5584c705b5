//! Wire types for the stdin/stdout prediction protocol. The consumer scans
//! stdout line by line for the marker pair and parses the single JSON line
//! between them, so stdout must carry nothing else.

use crate::error::{PredictError, Result};
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::io::Write;

/// Literal line emitted before the result JSON
pub const RESULT_START: &str = "RESULT_JSON_START";

/// Literal line emitted after the result JSON
pub const RESULT_END: &str = "RESULT_JSON_END";

/// A prediction request: one base64 (or data-URL) encoded mammogram
#[derive(Deserialize)]
pub struct PredictRequest {
    pub image: String,
}

impl Debug for PredictRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PredictRequest {{ image: <{} chars> }}", self.image.len())
    }
}

impl PredictRequest {
    /// Parse the raw stdin payload
    pub fn parse(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// The verdict payload written between the markers
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: String,
    pub confidence: String,
}

impl From<&Verdict> for PredictResponse {
    fn from(verdict: &Verdict) -> Self {
        PredictResponse {
            prediction: verdict.prediction(),
            confidence: verdict.confidence(),
        }
    }
}

/// The error payload written between the markers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&PredictError> for ErrorResponse {
    fn from(err: &PredictError) -> Self {
        ErrorResponse {
            error: err.to_string(),
        }
    }
}

/// Write `payload` as a single JSON line framed by the marker lines
pub fn emit<W: Write, T: Serialize>(out: &mut W, payload: &T) -> std::io::Result<()> {
    writeln!(out, "{RESULT_START}")?;
    writeln!(out, "{}", serde_json::to_string(payload)?)?;
    writeln!(out, "{RESULT_END}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn parse_valid_request() {
        let req = PredictRequest::parse(r#"{"image": "aGVsbG8="}"#).unwrap();
        assert_eq!(req.image, "aGVsbG8=");
    }

    #[test]
    fn parse_ignores_extra_fields() {
        let req = PredictRequest::parse(r#"{"image": "abcd", "patientId": "p-17"}"#).unwrap();
        assert_eq!(req.image, "abcd");
    }

    #[test]
    fn parse_rejects_non_json() {
        let err = PredictRequest::parse("not json at all").unwrap_err();
        assert!(err.to_string().starts_with("Input processing error: "));
    }

    #[test]
    fn parse_rejects_missing_image_field() {
        let err = PredictRequest::parse(r#"{"patientId": "p-17"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Input processing error: "));
        assert!(msg.contains("image"));
    }

    #[test]
    fn debug_elides_the_payload() {
        let req = PredictRequest {
            image: "x".repeat(4096),
        };
        assert_eq!(format!("{req:?}"), "PredictRequest { image: <4096 chars> }");
    }

    #[test]
    fn emit_frames_the_payload_with_markers() {
        let verdict = Verdict::from_score(0.9);
        let mut out = Vec::new();
        emit(&mut out, &PredictResponse::from(&verdict)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "RESULT_JSON_START\n\
             {\"prediction\":\"Malignant (90.00% confidence)\",\"confidence\":\"90.00\"}\n\
             RESULT_JSON_END\n"
        );
    }

    #[test]
    fn success_payload_has_exactly_two_keys() {
        let verdict = Verdict::from_score(0.2);
        let json = serde_json::to_value(PredictResponse::from(&verdict)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["prediction"], Value::from("Benign (80.00% confidence)"));
        assert_eq!(obj["confidence"], Value::from("80.00"));
    }

    #[test]
    fn error_payload_has_exactly_one_key() {
        let err = PredictError::EmptyImage;
        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["error"], Value::from("Image is empty after decoding"));
    }
}
