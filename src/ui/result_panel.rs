// SPDX-License-Identifier: MPL-2.0
//! Result block shown under the upload area once a submission settled.

use crate::i18n::fluent::I18n;
use crate::prediction::{ConfidenceBand, Presentation};
use crate::ui::design_tokens::{border, radius, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length, Theme};

/// Renders a presentation. The panel has no interactions, so it fits any
/// message type.
pub fn view<'a, M: 'a>(presentation: &Presentation, i18n: &I18n) -> Element<'a, M> {
    let content = match presentation {
        Presentation::Prediction {
            digit,
            confidence_percent,
            band,
        } => prediction(*digit, confidence_percent, *band, i18n),
        Presentation::Error {
            message,
            i18n_key,
            i18n_args,
            ..
        } => failure(&failure_text(message, i18n_key, i18n_args, i18n), i18n),
    };

    let is_error = matches!(presentation, Presentation::Error { .. });
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(move |theme: &Theme| panel_style(theme, is_error))
        .into()
}

fn prediction<'a, M: 'a>(
    digit: i64,
    confidence_percent: &str,
    band: ConfidenceBand,
    i18n: &I18n,
) -> Column<'a, M> {
    let digit_text = digit.to_string();

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("result-title")).size(typography::TITLE_SM))
        .push(text(digit_text.clone()).size(typography::DISPLAY))
        .push(
            text(i18n.tr_with_args("result-digit", &[("digit", &digit_text)]))
                .size(typography::BODY),
        )
        .push(
            text(i18n.tr_with_args(
                "result-confidence",
                &[("percent", confidence_percent)],
            ))
            .size(typography::BODY_LG),
        )
        .push(
            text(i18n.tr(band.i18n_key()))
                .size(typography::BODY_SM)
                .style(move |theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).band_color(band)),
                }),
        )
}

/// Localized failure message, or the English `fallback` when the current
/// locale lacks the key.
fn failure_text(
    fallback: &str,
    key: &str,
    args: &[(&'static str, String)],
    i18n: &I18n,
) -> String {
    let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
    i18n.try_tr_with_args(key, &args)
        .unwrap_or_else(|| fallback.to_string())
}

fn failure<'a, M: 'a>(message: &str, i18n: &I18n) -> Column<'a, M> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            text(i18n.tr("result-error-title"))
                .size(typography::TITLE_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).error),
                }),
        )
        .push(text(message.to_string()).size(typography::BODY))
}

fn panel_style(theme: &Theme, is_error: bool) -> iced::widget::container::Style {
    let scheme = ColorScheme::for_theme(theme);
    let accent = if is_error {
        scheme.error
    } else {
        scheme.brand_primary
    };
    iced::widget::container::Style {
        background: Some(scheme.surface_secondary.into()),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
