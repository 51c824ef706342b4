// SPDX-License-Identifier: MPL-2.0
//! Value types describing where a prediction session stands.

use super::progress::Progress;
use crate::error::{ErrorKind, PredictionError};
use serde::Deserialize;

/// Successful answer of the prediction endpoint.
///
/// Values are kept as received: a digit outside `0..=9` or a confidence
/// outside `[0, 1]` is displayed as is.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub digit: i64,
    pub confidence: f64,
}

/// User-facing description of a failed attempt.
///
/// `key` and `args` select the localized message; `text` is the English
/// rendering used when no translation is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub kind: ErrorKind,
    pub key: &'static str,
    pub args: Vec<(&'static str, String)>,
    pub text: String,
}

impl From<&PredictionError> for ErrorMessage {
    fn from(err: &PredictionError) -> Self {
        Self {
            kind: err.kind(),
            key: err.i18n_key(),
            args: err.i18n_args(),
            text: err.to_string(),
        }
    }
}

/// Progress of the single workflow of a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    FileSelected,
    Submitting {
        progress: Progress,
    },
    Succeeded(PredictionResult),
    Failed(ErrorMessage),
}

impl SubmissionState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting { .. })
    }

    /// Short label used in log lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::FileSelected => "file-selected",
            SubmissionState::Submitting { .. } => "submitting",
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn failed_state_keeps_localization_data() {
        let message = ErrorMessage::from(&PredictionError::ServerError { status: 500 });
        assert_eq!(message.kind, ErrorKind::ServerError);
        assert_eq!(message.key, "error-server");
        assert_eq!(message.args, vec![("status", "500".to_string())]);
        assert_eq!(message.text, "Server error occurred (HTTP 500)");
        assert!(SubmissionState::Submitting {
            progress: Progress::START
        }
        .is_submitting());
    }

    #[test]
    fn result_deserializes_from_wire_shape() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"digit": 7, "confidence": 0.93}"#).expect("valid body");
        assert_eq!(result.digit, 7);
        assert!((result.confidence - 0.93).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"digit": 12, "confidence": 1.7}"#).expect("valid body");
        assert_eq!(result.digit, 12);
        assert!((result.confidence - 1.7).abs() < f64::EPSILON);
    }
}
