// SPDX-License-Identifier: MPL-2.0
//! Upload and prediction core.
//!
//! Everything here is independent of the GUI toolkit: the [`Workflow`] state
//! machine, file validation, preview rendering, the HTTP client, and the
//! mapping from state to displayed result. The `app` module drives these
//! from iced messages.

pub mod client;
pub mod file;
pub mod presentation;
pub mod preview;
pub mod progress;
pub mod sequence;
pub mod state;
pub mod workflow;

pub use client::PredictionClient;
pub use file::{CandidateFile, SelectedFile};
pub use presentation::{present, ConfidenceBand, Presentation};
pub use preview::Preview;
pub use progress::Progress;
pub use sequence::Ticket;
pub use state::{ErrorMessage, PredictionResult, SubmissionState};
pub use workflow::{Acceptance, PreviewRequest, SubmissionRequest, Upload, Workflow};
