// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers apply workflow transitions synchronously and return the
//! asynchronous follow-up work as iced tasks. Every task carries the ticket
//! the workflow issued, so late completions are filtered by the workflow.

use super::Message;
use crate::config::DROP_BURST_WINDOW_MS;
use crate::error::{Error, PredictionError};
use crate::i18n::fluent::I18n;
use crate::prediction::file::{self, CandidateFile, IMAGE_EXTENSIONS};
use crate::prediction::{
    preview, Acceptance, PredictionClient, PredictionResult, Preview, Ticket, Workflow,
};
use crate::ui::notifications::{self, Notification};
use crate::ui::upload_zone;
use iced::widget::image::Handle;
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Key prefix shared by selection and submission error toasts.
const ERROR_NOTIFICATION_PREFIX: &str = "error-";

/// Mutable view of the `App` fields the handlers work on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub workflow: &'a mut Workflow,
    pub client: Option<&'a PredictionClient>,
    pub notifications: &'a mut notifications::Manager,
    pub preview_handle: &'a mut Option<Handle>,
    pub last_drop_at: &'a mut Option<Instant>,
}

pub fn handle_upload_zone_message(
    ctx: &mut UpdateContext<'_>,
    message: upload_zone::Message,
) -> Task<Message> {
    match message {
        upload_zone::Message::BrowseRequested => open_file_dialog(ctx),
        upload_zone::Message::RemoveRequested => {
            ctx.workflow.clear();
            *ctx.preview_handle = None;
            tracing::debug!("selection cleared");
            Task::none()
        }
        upload_zone::Message::SubmitRequested => start_submission(ctx),
    }
}

fn open_file_dialog(ctx: &UpdateContext<'_>) -> Task<Message> {
    if ctx.workflow.is_submitting() {
        return Task::none();
    }
    let title = ctx.i18n.tr("upload-dialog-title");
    let filter_name = ctx.i18n.tr("upload-dialog-filter");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles one `FileDropped` event. The windowing layer reports a
/// multi-file drop as a burst of events; only the first one is taken.
pub fn handle_file_dropped(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    now: Instant,
) -> Task<Message> {
    let window = Duration::from_millis(DROP_BURST_WINDOW_MS);
    if let Some(previous) = *ctx.last_drop_at {
        if now.saturating_duration_since(previous) < window {
            tracing::debug!(path = %path.display(), "ignoring extra file of a multi-file drop");
            return Task::none();
        }
    }
    *ctx.last_drop_at = Some(now);
    begin_load(ctx, path)
}

/// Reserves a selection ticket and reads `path` off the update loop.
pub fn begin_load(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    let Some(ticket) = ctx.workflow.begin_selection() else {
        tracing::debug!(path = %path.display(), "selection refused while submitting");
        return Task::none();
    };

    Task::perform(
        async move {
            let result = file::load_candidate(&path).await;
            (path, result)
        },
        move |(path, result)| Message::CandidateLoaded {
            ticket,
            path,
            result,
        },
    )
}

pub fn handle_candidate_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    path: &Path,
    result: Result<CandidateFile, Error>,
) -> Task<Message> {
    let candidate = match result {
        Ok(candidate) => candidate,
        Err(err) => {
            if ctx.workflow.is_current_selection(ticket) {
                tracing::warn!(path = %path.display(), "failed to read file: {err}");
                let name = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
                ctx.notifications
                    .push(Notification::error("notification-file-read-error").with_arg("name", name));
            }
            return Task::none();
        }
    };

    match ctx.workflow.accept(ticket, vec![candidate]) {
        Ok(Acceptance::Accepted(request)) => {
            ctx.notifications.clear_with_prefix(ERROR_NOTIFICATION_PREFIX);
            *ctx.preview_handle = None;
            let ticket = request.ticket;
            Task::perform(
                async move { preview::render(&request.bytes, &request.media_type) },
                move |preview| Message::PreviewRendered { ticket, preview },
            )
        }
        Ok(Acceptance::Ignored) => Task::none(),
        Err(err) => {
            tracing::info!(path = %path.display(), "rejected selection: {err}");
            ctx.notifications
                .push(Notification::from_prediction_error(&err));
            Task::none()
        }
    }
}

pub fn handle_preview_rendered(ctx: &mut UpdateContext<'_>, ticket: Ticket, preview: Preview) {
    if !ctx.workflow.apply_preview(ticket, preview) {
        return;
    }
    *ctx.preview_handle = ctx
        .workflow
        .selected()
        .and_then(|selected| selected.preview())
        .and_then(Preview::payload)
        .map(Handle::from_bytes);
}

fn start_submission(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(request) = ctx.workflow.submit() else {
        return Task::none();
    };
    let ticket = request.ticket;

    match ctx.client.cloned() {
        Some(client) => Task::perform(
            async move { client.predict(request.upload).await },
            move |result| Message::PredictionCompleted { ticket, result },
        ),
        None => Task::done(Message::PredictionCompleted {
            ticket,
            result: Err(PredictionError::NetworkFailure(
                "no HTTP client available".to_string(),
            )),
        }),
    }
}

pub fn handle_prediction_completed(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    result: Result<PredictionResult, PredictionError>,
) {
    if !ctx.workflow.complete(ticket, result) {
        tracing::debug!(ticket = ticket.value(), "prediction response ignored");
    }
}
