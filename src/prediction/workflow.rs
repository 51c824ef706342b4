// SPDX-License-Identifier: MPL-2.0
//! Single-owner state machine for one upload/prediction session.
//!
//! All transitions go through [`Workflow`] methods. Asynchronous work
//! (reading a candidate, rendering a preview, sending the request) is not
//! performed here: the workflow hands out requests tagged with a [`Ticket`]
//! and accepts their completions only while the ticket is still current.
//!
//! ```text
//! Idle ──accept──▶ FileSelected ──submit──▶ Submitting ──complete──▶ Succeeded
//!   ▲                   ▲  ▲                                    └──▶ Failed
//!   └──── clear ────────┘  └──────────── accept / submit ◀──────────────┘
//! ```

use super::file::{self, CandidateFile, SelectedFile};
use super::preview::Preview;
use super::progress::Progress;
use super::sequence::{Sequence, Ticket};
use super::state::{ErrorMessage, PredictionResult, SubmissionState};
use crate::error::PredictionError;
use std::sync::Arc;

/// Outcome of offering candidates to the workflow.
#[derive(Debug)]
pub enum Acceptance {
    /// Nothing changed: no candidate, or the selection was superseded.
    Ignored,
    /// The first candidate became the selection; its preview must be rendered.
    Accepted(PreviewRequest),
}

/// Work order for rendering the preview of the current selection.
#[derive(Debug, Clone)]
pub struct PreviewRequest {
    pub ticket: Ticket,
    pub bytes: Arc<[u8]>,
    pub media_type: String,
}

/// Payload of one outbound prediction request.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Work order for one submission.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub ticket: Ticket,
    pub upload: Upload,
}

/// The session's upload/prediction state machine.
#[derive(Debug, Default)]
pub struct Workflow {
    state: SubmissionState,
    selected: Option<SelectedFile>,
    /// Reads of dropped or picked files.
    selection: Sequence,
    /// Preview renders; only moves when a candidate is accepted.
    preview: Sequence,
    submission: Sequence,
}

impl Workflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Current progress: the timer value while submitting, 100 once a
    /// submission settled, `None` otherwise.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        match &self.state {
            SubmissionState::Submitting { progress } => Some(*progress),
            SubmissionState::Succeeded(_) | SubmissionState::Failed(_) => {
                Some(Progress::COMPLETE)
            }
            SubmissionState::Idle | SubmissionState::FileSelected => None,
        }
    }

    /// Reserves a ticket for a drop or pick that is about to be read.
    ///
    /// Returns `None` while a submission is in flight: the file cannot change
    /// mid-submission. Any earlier pending selection is superseded.
    pub fn begin_selection(&mut self) -> Option<Ticket> {
        if self.is_submitting() {
            return None;
        }
        Some(self.selection.advance())
    }

    /// Whether `ticket` still identifies the latest selection attempt.
    #[must_use]
    pub fn is_current_selection(&self, ticket: Ticket) -> bool {
        self.selection.is_current(ticket)
    }

    /// Offers the candidates of a drop or picker event.
    ///
    /// Only the first candidate is considered. A rejected candidate leaves the
    /// current selection, state, and result untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::InvalidFileType`] when the first candidate is
    /// not an image.
    pub fn accept(
        &mut self,
        ticket: Ticket,
        candidates: Vec<CandidateFile>,
    ) -> Result<Acceptance, PredictionError> {
        if !self.selection.is_current(ticket) || self.is_submitting() {
            tracing::debug!(ticket = ticket.value(), "discarding superseded selection");
            return Ok(Acceptance::Ignored);
        }
        let Some(candidate) = candidates.into_iter().next() else {
            return Ok(Acceptance::Ignored);
        };

        let selected = file::validate(candidate)?;
        let request = PreviewRequest {
            ticket: self.preview.advance(),
            bytes: Arc::clone(selected.bytes()),
            media_type: selected.media_type().to_string(),
        };

        tracing::info!(
            name = selected.name(),
            media_type = selected.media_type(),
            size = selected.size(),
            "file selected"
        );
        self.selected = Some(selected);
        self.state = SubmissionState::FileSelected;
        Ok(Acceptance::Accepted(request))
    }

    /// Applies a rendered preview if it belongs to the current selection.
    ///
    /// `ticket` is the one carried by the [`PreviewRequest`]. Reads that end
    /// in a rejection do not retire it. Returns `true` when the preview was
    /// stored.
    pub fn apply_preview(&mut self, ticket: Ticket, preview: Preview) -> bool {
        if !self.preview.is_current(ticket) {
            tracing::debug!(ticket = ticket.value(), "discarding stale preview");
            return false;
        }
        match self.selected.as_mut() {
            Some(selected) => selected.set_preview(preview),
            None => false,
        }
    }

    /// Drops the selection, preview, and any result; back to `Idle`.
    ///
    /// Pending reads, previews, and requests are invalidated.
    pub fn clear(&mut self) {
        self.selection.invalidate();
        self.preview.invalidate();
        self.submission.invalidate();
        self.selected = None;
        self.state = SubmissionState::Idle;
    }

    /// Starts a submission of the held selection.
    ///
    /// Allowed from `FileSelected`, `Succeeded`, and `Failed`; returns `None`
    /// while a request is already in flight or when nothing is selected.
    pub fn submit(&mut self) -> Option<SubmissionRequest> {
        if self.is_submitting() {
            tracing::debug!("submit ignored: request already in flight");
            return None;
        }
        let selected = self.selected.as_ref()?;

        let upload = Upload {
            file_name: selected.name().to_string(),
            media_type: selected.media_type().to_string(),
            bytes: selected.bytes().to_vec(),
        };
        let ticket = self.submission.advance();
        self.state = SubmissionState::Submitting {
            progress: Progress::START,
        };

        tracing::info!(
            ticket = ticket.value(),
            name = upload.file_name.as_str(),
            "submission started"
        );
        Some(SubmissionRequest { ticket, upload })
    }

    /// Advances the cosmetic progress by one timer step.
    pub fn tick_progress(&mut self) -> Option<Progress> {
        match &mut self.state {
            SubmissionState::Submitting { progress } => {
                *progress = progress.advanced();
                Some(*progress)
            }
            _ => None,
        }
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Exactly one terminal transition happens per submission; late or
    /// duplicate completions return `false` and change nothing.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<PredictionResult, PredictionError>,
    ) -> bool {
        if !self.submission.is_current(ticket) || !self.is_submitting() {
            tracing::debug!(ticket = ticket.value(), "discarding stale prediction response");
            return false;
        }

        self.state = match outcome {
            Ok(result) => {
                tracing::info!(
                    digit = result.digit,
                    confidence = result.confidence,
                    "prediction succeeded"
                );
                SubmissionState::Succeeded(result)
            }
            Err(err) => {
                tracing::warn!(kind = ?err.kind(), "prediction failed: {err}");
                SubmissionState::Failed(ErrorMessage::from(&err))
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::prediction::preview;

    fn png(name: &str) -> CandidateFile {
        CandidateFile::new(name, "image/png", name.as_bytes().to_vec())
    }

    fn text_file() -> CandidateFile {
        CandidateFile::new("notes.txt", "text/plain", b"not an image".to_vec())
    }

    fn select(workflow: &mut Workflow, candidate: CandidateFile) -> PreviewRequest {
        let ticket = workflow.begin_selection().expect("selection allowed");
        match workflow.accept(ticket, vec![candidate]) {
            Ok(Acceptance::Accepted(request)) => request,
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    fn success(digit: i64, confidence: f64) -> Result<PredictionResult, PredictionError> {
        Ok(PredictionResult { digit, confidence })
    }

    #[test]
    fn new_workflow_is_idle() {
        let workflow = Workflow::new();
        assert_eq!(workflow.state(), &SubmissionState::Idle);
        assert!(workflow.selected().is_none());
        assert!(workflow.progress().is_none());
    }

    #[test]
    fn invalid_type_from_idle_stays_idle() {
        let mut workflow = Workflow::new();
        let ticket = workflow.begin_selection().unwrap();
        let result = workflow.accept(ticket, vec![text_file()]);
        assert!(matches!(
            result,
            Err(PredictionError::InvalidFileType { .. })
        ));
        assert_eq!(workflow.state(), &SubmissionState::Idle);
        assert!(workflow.selected().is_none());
    }

    #[test]
    fn invalid_type_keeps_previous_selection_and_result() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("seven.png"));
        let request = workflow.submit().unwrap();
        workflow.complete(request.ticket, success(7, 0.93));

        let ticket = workflow.begin_selection().unwrap();
        assert!(workflow.accept(ticket, vec![text_file()]).is_err());

        assert_eq!(workflow.selected().unwrap().name(), "seven.png");
        assert!(matches!(workflow.state(), SubmissionState::Succeeded(_)));
    }

    #[test]
    fn empty_candidate_list_changes_nothing() {
        let mut workflow = Workflow::new();
        let ticket = workflow.begin_selection().unwrap();
        let result = workflow.accept(ticket, Vec::new()).unwrap();
        assert!(matches!(result, Acceptance::Ignored));
        assert_eq!(workflow.state(), &SubmissionState::Idle);
    }

    #[test]
    fn only_first_candidate_is_honored() {
        let mut workflow = Workflow::new();
        let ticket = workflow.begin_selection().unwrap();
        workflow
            .accept(ticket, vec![png("first.png"), png("second.png")])
            .unwrap();
        assert_eq!(workflow.selected().unwrap().name(), "first.png");
        assert_eq!(workflow.state(), &SubmissionState::FileSelected);
    }

    #[test]
    fn preview_is_applied_once() {
        let mut workflow = Workflow::new();
        let request = select(&mut workflow, png("a.png"));
        let rendered = preview::render(&request.bytes, &request.media_type);

        assert!(workflow.apply_preview(request.ticket, rendered.clone()));
        assert!(!workflow.apply_preview(request.ticket, rendered));
        assert!(!workflow
            .selected()
            .unwrap()
            .preview()
            .unwrap()
            .data_uri()
            .is_empty());
    }

    #[test]
    fn late_preview_of_previous_selection_is_discarded() {
        let mut workflow = Workflow::new();
        let first = select(&mut workflow, png("first.png"));
        let second = select(&mut workflow, png("second.png"));

        let second_preview = preview::render(&second.bytes, &second.media_type);
        let first_preview = preview::render(&first.bytes, &first.media_type);

        // Newer preview completes first, older one arrives afterwards.
        assert!(workflow.apply_preview(second.ticket, second_preview.clone()));
        assert!(!workflow.apply_preview(first.ticket, first_preview));

        let selected = workflow.selected().unwrap();
        assert_eq!(selected.name(), "second.png");
        assert_eq!(selected.preview(), Some(&second_preview));
    }

    #[test]
    fn rejected_file_keeps_pending_preview_of_selection() {
        let mut workflow = Workflow::new();
        let request = select(&mut workflow, png("a.png"));

        let ticket = workflow.begin_selection().unwrap();
        assert!(workflow.accept(ticket, vec![text_file()]).is_err());

        let rendered = preview::render(&request.bytes, &request.media_type);
        assert!(workflow.apply_preview(request.ticket, rendered.clone()));
        let selected = workflow.selected().unwrap();
        assert_eq!(selected.name(), "a.png");
        assert_eq!(selected.preview(), Some(&rendered));
    }

    #[test]
    fn unread_or_empty_selection_keeps_pending_preview() {
        let mut workflow = Workflow::new();
        let request = select(&mut workflow, png("a.png"));

        // A read that fails never reaches `accept`.
        let _failed_read = workflow.begin_selection().unwrap();
        let empty = workflow.begin_selection().unwrap();
        assert!(matches!(
            workflow.accept(empty, Vec::new()),
            Ok(Acceptance::Ignored)
        ));

        let rendered = preview::render(&request.bytes, &request.media_type);
        assert!(workflow.apply_preview(request.ticket, rendered));
    }

    #[test]
    fn superseded_read_is_ignored() {
        let mut workflow = Workflow::new();
        let slow = workflow.begin_selection().unwrap();
        let fast = workflow.begin_selection().unwrap();

        workflow.accept(fast, vec![png("fast.png")]).unwrap();
        let late = workflow.accept(slow, vec![png("slow.png")]).unwrap();

        assert!(matches!(late, Acceptance::Ignored));
        assert_eq!(workflow.selected().unwrap().name(), "fast.png");
        assert!(!workflow.is_current_selection(slow));
        assert!(workflow.is_current_selection(fast));
    }

    #[test]
    fn submit_requires_selection() {
        let mut workflow = Workflow::new();
        assert!(workflow.submit().is_none());
        assert_eq!(workflow.state(), &SubmissionState::Idle);
    }

    #[test]
    fn submit_carries_selected_payload() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("seven.png"));
        let request = workflow.submit().unwrap();
        assert_eq!(request.upload.file_name, "seven.png");
        assert_eq!(request.upload.media_type, "image/png");
        assert_eq!(request.upload.bytes, b"seven.png".to_vec());
        assert_eq!(workflow.progress(), Some(Progress::START));
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        let first = workflow.submit().unwrap();
        assert!(workflow.submit().is_none());
        assert!(workflow.is_submitting());

        // The original request still completes normally.
        assert!(workflow.complete(first.ticket, success(3, 0.7)));
    }

    #[test]
    fn selection_is_refused_while_submitting() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        workflow.submit().unwrap();
        assert!(workflow.begin_selection().is_none());
    }

    #[test]
    fn pending_read_started_before_submit_is_ignored() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        let pending = workflow.begin_selection().unwrap();
        workflow.submit().unwrap();

        let outcome = workflow.accept(pending, vec![png("b.png")]).unwrap();
        assert!(matches!(outcome, Acceptance::Ignored));
        assert_eq!(workflow.selected().unwrap().name(), "a.png");
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_100() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        let request = workflow.submit().unwrap();

        let mut observed = vec![workflow.progress().unwrap()];
        for _ in 0..20 {
            observed.push(workflow.tick_progress().unwrap());
        }
        assert!(observed.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(observed.iter().all(|p| p.percent() <= 90));

        workflow.complete(request.ticket, success(1, 0.99));
        assert_eq!(workflow.progress(), Some(Progress::COMPLETE));
        assert!(!workflow.is_submitting());
        // Timer ticks after settling have no effect.
        assert!(workflow.tick_progress().is_none());
    }

    #[test]
    fn progress_ends_at_100_on_failure() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        let request = workflow.submit().unwrap();
        workflow.tick_progress();
        workflow.complete(
            request.ticket,
            Err(PredictionError::NetworkFailure("refused".into())),
        );
        assert_eq!(workflow.progress(), Some(Progress::COMPLETE));
    }

    #[test]
    fn server_error_fails_without_result() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        let request = workflow.submit().unwrap();
        workflow.complete(request.ticket, Err(PredictionError::ServerError { status: 500 }));

        match workflow.state() {
            SubmissionState::Failed(message) => {
                assert_eq!(message.kind, ErrorKind::ServerError);
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn exactly_one_terminal_transition_per_submission() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        let request = workflow.submit().unwrap();

        assert!(workflow.complete(request.ticket, success(4, 0.9)));
        assert!(!workflow.complete(
            request.ticket,
            Err(PredictionError::ServerError { status: 500 })
        ));
        assert!(matches!(workflow.state(), SubmissionState::Succeeded(_)));
    }

    #[test]
    fn retry_after_failure_can_succeed() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));

        let first = workflow.submit().unwrap();
        workflow.tick_progress();
        workflow.complete(first.ticket, Err(PredictionError::ServerError { status: 503 }));
        assert!(matches!(workflow.state(), SubmissionState::Failed(_)));

        let second = workflow.submit().expect("resubmission allowed after failure");
        assert_ne!(first.ticket, second.ticket);
        assert_eq!(workflow.progress(), Some(Progress::START));
        assert_eq!(second.upload.file_name, "a.png");

        assert!(workflow.complete(second.ticket, success(8, 0.88)));
        assert!(matches!(
            workflow.state(),
            SubmissionState::Succeeded(PredictionResult { digit: 8, .. })
        ));
    }

    #[test]
    fn resubmit_after_success_starts_new_cycle() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        let first = workflow.submit().unwrap();
        workflow.complete(first.ticket, success(2, 0.5));

        let second = workflow.submit().unwrap();
        assert!(workflow.is_submitting());
        assert!(!workflow.complete(first.ticket, success(9, 0.9)));
        assert!(workflow.complete(second.ticket, success(2, 0.6)));
    }

    #[test]
    fn new_selection_after_result_resets_to_file_selected() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        let request = workflow.submit().unwrap();
        workflow.complete(request.ticket, success(5, 0.95));

        select(&mut workflow, png("b.png"));
        assert_eq!(workflow.state(), &SubmissionState::FileSelected);
        assert!(workflow.progress().is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut workflow = Workflow::new();
        let request = select(&mut workflow, png("a.png"));
        let submission = workflow.submit().unwrap();
        workflow.complete(submission.ticket, success(5, 0.95));

        workflow.clear();
        assert_eq!(workflow.state(), &SubmissionState::Idle);
        assert!(workflow.selected().is_none());
        let rendered = preview::render(&request.bytes, &request.media_type);
        assert!(!workflow.apply_preview(request.ticket, rendered));
    }

    #[test]
    fn response_after_clear_is_discarded() {
        let mut workflow = Workflow::new();
        select(&mut workflow, png("a.png"));
        let request = workflow.submit().unwrap();

        workflow.clear();
        assert!(!workflow.complete(request.ticket, success(7, 0.93)));
        assert_eq!(workflow.state(), &SubmissionState::Idle);
    }
}
