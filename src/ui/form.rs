// SPDX-License-Identifier: MPL-2.0
//! Analysis form: job posting URL, CV picker, and the submit button.
//!
//! Validation happens in the update loop; this module only renders the
//! current field values and the inline error from the last rejected
//! submission.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::AnimatedSpinner;
use crate::validation::{CvSelection, FormIssue};
use iced::{
    alignment::Vertical,
    widget::{button, container, text, text_input, Column, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the analysis form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub job_url: &'a str,
    pub cv_file: Option<&'a CvSelection>,
    /// Inline error from the last rejected submission, if any.
    pub form_error: Option<FormIssue>,
    pub is_submitting: bool,
    pub spinner_rotation: f32,
}

/// Render the analysis form panel.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(build_url_field(&ctx))
        .push(build_cv_field(&ctx));

    if let Some(issue) = ctx.form_error {
        let error_text = text(ctx.i18n.tr(issue.i18n_key()))
            .size(typography::BODY_SM)
            .color(palette::ERROR_500);
        content = content.push(error_text);
    }

    content = content.push(build_submit_button(&ctx));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(container_styles::panel)
        .into()
}

fn build_url_field<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("job-url-label")).size(typography::BODY);

    let input = text_input(&ctx.i18n.tr("job-url-placeholder"), ctx.job_url)
        .on_input(Message::JobUrlChanged)
        .on_submit(Message::SubmitAnalysis)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let hint = text(ctx.i18n.tr("job-url-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(input)
        .push(hint)
        .into()
}

fn build_cv_field<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("cv-file-label")).size(typography::BODY);

    let mut pick_button = button(text(ctx.i18n.tr("cv-file-button")).size(typography::BODY))
        .padding(spacing::XS)
        .style(button_styles::secondary);
    if !ctx.is_submitting {
        pick_button = pick_button.on_press(Message::PickCvFile);
    }

    let file_name = match ctx.cv_file {
        Some(selection) => text(selection.file_name()).size(typography::BODY),
        None => text(ctx.i18n.tr("cv-file-none"))
            .size(typography::BODY)
            .color(palette::GRAY_400),
    };

    let picker_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(pick_button)
        .push(file_name);

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(picker_row)
        .into()
}

fn build_submit_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let submit_button = if ctx.is_submitting {
        let spinner = AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element();
        let busy_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(spinner)
            .push(text(ctx.i18n.tr("analyze-button-busy")).size(typography::BODY_LG));

        // No on_press while a request is in flight.
        button(busy_row)
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(button_styles::primary)
    } else {
        button(text(ctx.i18n.tr("analyze-button")).size(typography::BODY_LG))
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(button_styles::primary)
            .on_press(Message::SubmitAnalysis)
    };

    submit_button.into()
}
