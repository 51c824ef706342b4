// SPDX-License-Identifier: MPL-2.0
//! Upload area: a drop target with a browse button when nothing is selected,
//! a file card with preview, progress, and the submit button otherwise.

use crate::i18n::fluent::I18n;
use crate::prediction::presentation::format_file_size;
use crate::prediction::{Progress, SelectedFile};
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Space};
use iced::{alignment, ContentFit, Element, Length, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    BrowseRequested,
    RemoveRequested,
    SubmitRequested,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected: Option<&'a SelectedFile>,
    /// Decoded preview, present once the preview of `selected` is rendered.
    pub preview_handle: Option<&'a Handle>,
    pub progress: Option<Progress>,
    pub is_submitting: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.selected {
        None => drop_zone(ctx.i18n, ctx.is_submitting),
        Some(selected) => file_card(&ctx, selected),
    }
}

fn drop_zone(i18n: &I18n, is_submitting: bool) -> Element<'_, Message> {
    let browse = button(text(i18n.tr("upload-browse-button")).size(typography::BODY_LG))
        .padding(spacing::SM)
        .on_press_maybe((!is_submitting).then_some(Message::BrowseRequested));

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("upload-drop-hint")).size(typography::BODY_LG))
        .push(browse)
        .push(
            text(i18n.tr("upload-accepted-formats"))
                .size(typography::CAPTION)
                .style(secondary_text),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .style(drop_zone_style)
        .into()
}

fn file_card<'a>(ctx: &ViewContext<'a>, selected: &'a SelectedFile) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center);

    if let Some(handle) = ctx.preview_handle {
        content = content.push(
            Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(sizing::PREVIEW_MAX))
                .height(Length::Fixed(sizing::PREVIEW_MAX)),
        );
    }

    let size = format_file_size(selected.size());
    let mut details = i18n.tr_with_args("upload-file-size", &[("size", &size)]);
    if let Some((width, height)) = selected.preview().and_then(|p| p.dimensions()) {
        let dimensions = i18n.tr_with_args(
            "upload-preview-dimensions",
            &[("width", &width.to_string()), ("height", &height.to_string())],
        );
        details = format!("{details} · {dimensions}");
    }

    let info = Column::new()
        .spacing(spacing::XXS)
        .push(text(selected.name()).size(typography::BODY_LG))
        .push(text(details).size(typography::CAPTION).style(secondary_text));

    let remove = button(text(i18n.tr("upload-remove-button")).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(button::secondary)
        .on_press(Message::RemoveRequested);

    content = content.push(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(info)
            .push(Space::new().width(Length::Fill))
            .push(remove),
    );

    if let Some(progress) = ctx.progress {
        let bar = progress_bar(0.0..=100.0, f32::from(progress.percent()))
            .girth(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT));
        let label = i18n.tr_with_args(
            "upload-progress",
            &[("percent", &progress.percent().to_string())],
        );
        content = content.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(bar)
                .push(text(label).size(typography::CAPTION)),
        );
    }

    let submit_label = if ctx.is_submitting {
        i18n.tr("upload-submitting")
    } else {
        i18n.tr("upload-submit-button")
    };
    let submit = button(
        text(submit_label)
            .size(typography::BODY_LG)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press_maybe((!ctx.is_submitting).then_some(Message::SubmitRequested));
    content = content.push(submit);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(card_style)
        .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

fn drop_zone_style(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(scheme.surface_secondary.into()),
        border: iced::Border {
            color: scheme.brand_primary,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(scheme.surface_secondary.into()),
        border: iced::Border {
            color: scheme.text_secondary,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
