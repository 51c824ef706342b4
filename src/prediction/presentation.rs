// SPDX-License-Identifier: MPL-2.0
//! Maps the workflow state to what the result panel shows.

use super::state::SubmissionState;
use crate::error::ErrorKind;

/// Lower bound (exclusive) of the "high" confidence band.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Lower bound (exclusive) of the "moderate" confidence band.
pub const MODERATE_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Qualitative reading of a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Moderate,
    Low,
}

impl ConfidenceBand {
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceBand::High
        } else if confidence > MODERATE_CONFIDENCE_THRESHOLD {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Moderate => "moderate",
            ConfidenceBand::Low => "low",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ConfidenceBand::High => "result-band-high",
            ConfidenceBand::Moderate => "result-band-moderate",
            ConfidenceBand::Low => "result-band-low",
        }
    }
}

/// Content of the result block.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    Prediction {
        digit: i64,
        confidence_percent: String,
        band: ConfidenceBand,
    },
    Error {
        kind: ErrorKind,
        /// English fallback text.
        message: String,
        i18n_key: &'static str,
        i18n_args: Vec<(&'static str, String)>,
    },
}

/// Returns the result block for a state, or `None` when nothing is shown.
#[must_use]
pub fn present(state: &SubmissionState) -> Option<Presentation> {
    match state {
        SubmissionState::Succeeded(result) => Some(Presentation::Prediction {
            digit: result.digit,
            confidence_percent: format_confidence(result.confidence),
            band: ConfidenceBand::from_confidence(result.confidence),
        }),
        SubmissionState::Failed(error) => Some(Presentation::Error {
            kind: error.kind,
            message: error.text.clone(),
            i18n_key: error.key,
            i18n_args: error.args.clone(),
        }),
        SubmissionState::Idle
        | SubmissionState::FileSelected
        | SubmissionState::Submitting { .. } => None,
    }
}

/// Formats a confidence in `[0, 1]` as a percentage with two decimals.
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// Formats a byte count the way the upload card shows it (`"12 KB"`).
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)] // display only
    let kib = (bytes as f64 / 1024.0).round();
    format!("{kib} KB")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictionError;
    use crate::prediction::progress::Progress;
    use crate::prediction::state::{ErrorMessage, PredictionResult};

    fn succeeded(digit: i64, confidence: f64) -> SubmissionState {
        SubmissionState::Succeeded(PredictionResult { digit, confidence })
    }

    #[test]
    fn seven_with_high_confidence() {
        let presentation = present(&succeeded(7, 0.93)).expect("result block");
        assert_eq!(
            presentation,
            Presentation::Prediction {
                digit: 7,
                confidence_percent: "93.00%".to_string(),
                band: ConfidenceBand::High,
            }
        );
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(ConfidenceBand::from_confidence(0.81), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(0.8), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(0.61), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(0.6), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(0.0), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::High.as_str(), "high");
        assert_eq!(ConfidenceBand::Moderate.as_str(), "moderate");
        assert_eq!(ConfidenceBand::Low.as_str(), "low");
    }

    #[test]
    fn confidence_rounds_to_two_decimals() {
        assert_eq!(format_confidence(0.123_456), "12.35%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
    }

    #[test]
    fn out_of_range_confidence_is_not_clamped() {
        let presentation = present(&succeeded(11, 1.5)).unwrap();
        match presentation {
            Presentation::Prediction {
                digit,
                confidence_percent,
                band,
            } => {
                assert_eq!(digit, 11);
                assert_eq!(confidence_percent, "150.00%");
                assert_eq!(band, ConfidenceBand::High);
            }
            Presentation::Error { .. } => panic!("expected prediction"),
        }
    }

    #[test]
    fn failure_exposes_message_verbatim() {
        let err = PredictionError::ServerError { status: 500 };
        let state = SubmissionState::Failed(ErrorMessage::from(&err));
        assert_eq!(
            present(&state),
            Some(Presentation::Error {
                kind: ErrorKind::ServerError,
                message: err.to_string(),
                i18n_key: "error-server",
                i18n_args: vec![("status", "500".to_string())],
            })
        );
    }

    #[test]
    fn non_terminal_states_render_nothing() {
        assert_eq!(present(&SubmissionState::Idle), None);
        assert_eq!(present(&SubmissionState::FileSelected), None);
        assert_eq!(
            present(&SubmissionState::Submitting {
                progress: Progress::START
            }),
            None
        );
    }

    #[test]
    fn file_size_in_kilobytes() {
        assert_eq!(format_file_size(0), "0 KB");
        assert_eq!(format_file_size(1536), "2 KB");
        assert_eq!(format_file_size(10 * 1024), "10 KB");
    }
}
