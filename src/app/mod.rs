// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the single prediction [`Workflow`] of the session and
//! translates iced messages into workflow transitions and asynchronous tasks
//! (reading files, rendering previews, calling the prediction service).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::prediction::{PredictionClient, Workflow};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    workflow: Workflow,
    /// `None` only when no HTTP client could be built at all.
    client: Option<PredictionClient>,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    /// Decoded image of the current selection, set once its preview is rendered.
    preview_handle: Option<Handle>,
    last_drop_at: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.workflow.state().label())
            .field(
                "endpoint",
                &self.client.as_ref().map(PredictionClient::predict_url),
            )
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 640.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 520.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the prediction client, falling back to the default endpoint when
/// `url` is unusable. The returned notification explains the fallback.
fn build_client(
    url: &str,
    timeout: std::time::Duration,
) -> (Option<PredictionClient>, Option<Notification>) {
    match PredictionClient::new(url, timeout) {
        Ok(client) => (Some(client), None),
        Err(err) => {
            tracing::warn!(url, "unusable endpoint: {err}");
            let warning = Notification::warning("notification-endpoint-invalid").with_arg("url", url);
            match PredictionClient::new(config::DEFAULT_ENDPOINT_URL, timeout) {
                Ok(client) => (Some(client), Some(warning)),
                Err(err) => {
                    tracing::error!("cannot build prediction client: {err}");
                    (None, Some(warning))
                }
            }
        }
    }
}

impl App {
    /// Initializes application state and, when a path was given on the
    /// command line, starts selecting it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let endpoint_url = flags.endpoint.unwrap_or_else(|| config.endpoint.url.clone());
        let (client, endpoint_warning) = build_client(&endpoint_url, config.endpoint.timeout());

        let mut app = App {
            i18n,
            workflow: Workflow::new(),
            client,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(),
            preview_handle: None,
            last_drop_at: None,
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(warning) = endpoint_warning {
            app.notifications.push(warning);
        }
        if let Some(client) = &app.client {
            tracing::info!(endpoint = client.predict_url(), "prediction client ready");
        }

        let task = match flags.file_path {
            Some(path) => update::begin_load(&mut app.update_context(), PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.workflow.selected() {
            Some(selected) => format!("{} - {app_name}", selected.name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_progress_subscription(self.workflow.is_submitting()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            workflow: &mut self.workflow,
            client: self.client.as_ref(),
            notifications: &mut self.notifications,
            preview_handle: &mut self.preview_handle,
            last_drop_at: &mut self.last_drop_at,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::UploadZone(upload_message) => {
                update::handle_upload_zone_message(&mut ctx, upload_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenFileDialogResult(path) => match path {
                Some(path) => update::begin_load(&mut ctx, path),
                None => Task::none(),
            },
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path, Instant::now()),
            Message::CandidateLoaded {
                ticket,
                path,
                result,
            } => update::handle_candidate_loaded(&mut ctx, ticket, &path, result),
            Message::PreviewRendered { ticket, preview } => {
                update::handle_preview_rendered(&mut ctx, ticket, preview);
                Task::none()
            }
            Message::PredictionCompleted { ticket, result } => {
                update::handle_prediction_completed(&mut ctx, ticket, result);
                Task::none()
            }
            Message::ProgressTick(_instant) => {
                ctx.workflow.tick_progress();
                Task::none()
            }
            Message::Tick(_instant) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            workflow: &self.workflow,
            endpoint: self.client.as_ref().map(PredictionClient::predict_url),
            preview_handle: self.preview_handle.as_ref(),
            notifications: &self.notifications,
        })
    }
}
