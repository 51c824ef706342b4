// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{Error, PredictionError};
use crate::prediction::{CandidateFile, PredictionResult, Preview, Ticket};
use crate::ui::notifications;
use crate::ui::upload_zone;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    UploadZone(upload_zone::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A dropped or picked file was read from disk.
    CandidateLoaded {
        ticket: Ticket,
        path: PathBuf,
        result: Result<CandidateFile, Error>,
    },
    PreviewRendered {
        ticket: Ticket,
        preview: Preview,
    },
    PredictionCompleted {
        ticket: Ticket,
        result: Result<PredictionResult, PredictionError>,
    },
    /// Cosmetic progress step while a request is in flight.
    ProgressTick(Instant),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional prediction service base URL, overriding `settings.toml`.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DIGIT_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional image path selected on startup, as if it had been dropped.
    pub file_path: Option<String>,
}
