// SPDX-License-Identifier: MPL-2.0
//! Root view composition: header, upload area, result panel, and the toast
//! overlay.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::prediction::{present, Progress, Workflow};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::theming::ColorScheme;
use crate::ui::{result_panel, upload_zone};
use iced::widget::image::Handle;
use iced::widget::{scrollable, text, Column, Container, Stack};
use iced::{alignment, Element, Length, Theme};

/// Everything the root view borrows from `App`.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub workflow: &'a Workflow,
    /// Full predict URL, shown under the title.
    pub endpoint: Option<&'a str>,
    pub preview_handle: Option<&'a Handle>,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_WIDTH)
        .push(header(i18n, ctx.endpoint));

    let upload = upload_zone::view(upload_zone::ViewContext {
        i18n,
        selected: ctx.workflow.selected(),
        preview_handle: ctx.preview_handle,
        progress: displayed_progress(ctx.workflow),
        is_submitting: ctx.workflow.is_submitting(),
    })
    .map(Message::UploadZone);
    content = content.push(upload);

    if let Some(presentation) = present(ctx.workflow.state()) {
        content = content.push(result_panel::view(&presentation, i18n));
    }

    let body = Container::new(scrollable(
        Container::new(content).center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    Stack::new()
        .push(body)
        .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The progress bar is shown only while a request is in flight.
fn displayed_progress(workflow: &Workflow) -> Option<Progress> {
    workflow.progress().filter(|_| workflow.is_submitting())
}

fn header<'a>(i18n: &I18n, endpoint: Option<&str>) -> Column<'a, Message> {
    let mut header = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("app-title")).size(typography::TITLE_LG))
        .push(
            text(i18n.tr("header-subtitle"))
                .size(typography::BODY)
                .style(secondary_text),
        );

    if let Some(url) = endpoint {
        header = header.push(
            text(i18n.tr_with_args("endpoint-label", &[("url", url)]))
                .size(typography::CAPTION)
                .style(secondary_text),
        );
    }
    header.width(Length::Fill)
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}
