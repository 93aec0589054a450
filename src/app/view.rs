// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The whole application is a single scrollable page: header, submission
//! form, analysis results (once available) and the career coach. Toast
//! notifications are stacked on top of the page.

use super::Message;
use crate::api::types::AnalysisOutcome;
use crate::chat::ChatSession;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{coach, form, header, results};
use crate::validation::{CvSelection, FormIssue};
use iced::widget::{container, scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub job_url_input: &'a str,
    pub cv_file: Option<&'a CvSelection>,
    pub form_error: Option<FormIssue>,
    pub is_submitting: bool,
    pub spinner_rotation: f32,
    pub analysis: Option<&'a AnalysisOutcome>,
    pub question_input: &'a str,
    pub coach_error_key: Option<&'static str>,
    pub chat: &'a ChatSession,
    pub notifications: &'a notifications::Manager,
}

/// Renders the application page with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut sections = Column::new()
        .push(header::view(header::ViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        }))
        .push(form::view(form::ViewContext {
            i18n: ctx.i18n,
            job_url: ctx.job_url_input,
            cv_file: ctx.cv_file,
            form_error: ctx.form_error,
            is_submitting: ctx.is_submitting,
            spinner_rotation: ctx.spinner_rotation,
        }))
        .spacing(spacing::LG);

    // The results section only exists once an analysis has succeeded.
    if let Some(outcome) = ctx.analysis {
        sections = sections.push(results::view(results::ViewContext {
            i18n: ctx.i18n,
            outcome,
        }));
    }

    sections = sections.push(coach::view(coach::ViewContext {
        i18n: ctx.i18n,
        chat: ctx.chat,
        question: ctx.question_input,
        profession: ctx.analysis.map(|outcome| &outcome.profession),
        error_key: ctx.coach_error_key,
    }));

    let page = scrollable(
        container(
            Container::new(sections)
                .width(Length::Fill)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let toast_overlay =
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(page).push(toast_overlay).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Profession;

    fn base_ctx<'a>(
        i18n: &'a I18n,
        chat: &'a ChatSession,
        notifications: &'a notifications::Manager,
    ) -> ViewContext<'a> {
        ViewContext {
            i18n,
            theme_mode: ThemeMode::System,
            job_url_input: "",
            cv_file: None,
            form_error: None,
            is_submitting: false,
            spinner_rotation: 0.0,
            analysis: None,
            question_input: "",
            coach_error_key: None,
            chat,
            notifications,
        }
    }

    #[test]
    fn renders_page_without_analysis() {
        let i18n = I18n::default();
        let chat = ChatSession::default();
        let manager = notifications::Manager::new();

        let _element = view(base_ctx(&i18n, &chat, &manager));
    }

    #[test]
    fn renders_page_with_analysis_and_toast() {
        let i18n = I18n::default();
        let chat = ChatSession::default();
        let mut manager = notifications::Manager::new();
        manager.push(notifications::Notification::success("analysis-success"));

        let outcome = AnalysisOutcome {
            profession: Profession {
                name: "devops_engineer".to_owned(),
                display_name: "DevOps Engineer".to_owned(),
                description: "Keeps deployments boring".to_owned(),
            },
            ..AnalysisOutcome::default()
        };

        let mut ctx = base_ctx(&i18n, &chat, &manager);
        ctx.analysis = Some(&outcome);
        let _element = view(ctx);
    }
}
