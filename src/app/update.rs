// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the `UpdateContext` borrowed view over the app
//! state and all specialized message handlers for form input, analysis
//! requests, coach chat and preference changes.

use super::{config, notifications, Message};
use crate::api::types::{AnalysisOutcome, StatusResponse};
use crate::api::ApiClient;
use crate::chat::{ChatSession, StreamEvent};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::coach;
use crate::ui::theming::ThemeMode;
use crate::validation::{self, CvSelection, FormIssue};
use iced::Task;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub client: &'a ApiClient,
    pub job_url_input: &'a mut String,
    pub cv_file: &'a mut Option<CvSelection>,
    pub form_error: &'a mut Option<FormIssue>,
    pub is_submitting: &'a mut bool,
    pub spinner_rotation: &'a mut f32,
    pub analysis: &'a mut Option<AnalysisOutcome>,
    pub question_input: &'a mut String,
    pub coach_error_key: &'a mut Option<&'static str>,
    pub chat: &'a mut ChatSession,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles edits to the job posting URL field.
pub fn handle_job_url_changed(ctx: &mut UpdateContext<'_>, value: String) -> Task<Message> {
    *ctx.job_url_input = value;
    Task::none()
}

/// Opens the native file dialog for picking a CV.
pub fn handle_pick_cv_file(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.is_submitting {
        return Task::none();
    }

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("PDF", &["pdf"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::CvFileSelected,
    )
}

/// Handles the result of the CV file dialog.
pub fn handle_cv_file_selected(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // Dialog cancelled; the previous selection stays.
        return Task::none();
    };

    match std::fs::metadata(&path) {
        Ok(metadata) => {
            *ctx.cv_file = Some(CvSelection {
                path,
                size: metadata.len(),
            });
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to stat selected CV file");
            ctx.notifications.push(
                notifications::Notification::error("error-io")
                    .with_arg("message", error.to_string()),
            );
        }
    }
    Task::none()
}

/// Validates the form and, if it passes, starts the analysis request.
pub fn handle_submit_analysis(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.is_submitting {
        return Task::none();
    }

    *ctx.form_error = None;
    if let Err(issue) = validation::validate_submission(ctx.job_url_input, ctx.cv_file.as_ref()) {
        *ctx.form_error = Some(issue);
        return Task::none();
    }
    let Some(selection) = ctx.cv_file.as_ref() else {
        // validate_submission has already rejected a missing selection.
        return Task::none();
    };

    *ctx.is_submitting = true;
    *ctx.spinner_rotation = 0.0;
    ctx.notifications.clear_analysis_banners();

    let client = ctx.client.clone();
    let job_url = ctx.job_url_input.trim().to_owned();
    let path = selection.path.clone();
    let file_name = selection.file_name();

    Task::perform(
        async move {
            let bytes = tokio::fs::read(&path).await.map_err(Error::from)?;
            client.analyze(job_url, file_name, bytes).await
        },
        Message::AnalysisCompleted,
    )
}

/// Handles the outcome of an analysis request.
pub fn handle_analysis_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<AnalysisOutcome>,
) -> Task<Message> {
    *ctx.is_submitting = false;

    match result {
        Ok(outcome) => {
            ctx.notifications.clear_analysis_banners();
            ctx.notifications.push(
                notifications::Notification::success("analysis-success")
                    .with_arg("profession", outcome.profession.display_name.clone()),
            );
            *ctx.analysis = Some(outcome);
        }
        Err(error) => {
            tracing::warn!(%error, "analysis request failed");
            ctx.notifications.clear_analysis_banners();
            ctx.notifications.push(analysis_error_notification(&error));
        }
    }
    Task::none()
}

/// Maps an analysis failure to the toast shown for it.
///
/// Backend rejections carry a message written by the server and are
/// surfaced verbatim; transport and decode failures use their generic
/// localized templates.
fn analysis_error_notification(error: &Error) -> notifications::Notification {
    match error {
        Error::Backend(message) if !message.is_empty() => {
            notifications::Notification::error("server-message")
                .with_arg("message", message.clone())
        }
        Error::Backend(_) => notifications::Notification::error("error-analysis-failed"),
        other => notifications::Notification::error(other.i18n_key())
            .with_arg("message", other.message()),
    }
}

/// Handles the startup reachability probe result. Log-only.
pub fn handle_status_checked(result: Result<StatusResponse>) -> Task<Message> {
    match result {
        Ok(status) => {
            tracing::info!(status = %status.status, version = %status.version, "backend reachable");
        }
        Err(error) => tracing::warn!(%error, "backend status check failed"),
    }
    Task::none()
}

/// Handles edits to the coach question field.
pub fn handle_question_changed(ctx: &mut UpdateContext<'_>, value: String) -> Task<Message> {
    *ctx.question_input = value;
    *ctx.coach_error_key = None;
    Task::none()
}

/// Starts a coach exchange for the current question.
///
/// The handler only flips the session into its active phase; the stream
/// subscription observes that phase and opens the connection.
pub fn handle_ask_question(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.chat.is_active() {
        return Task::none();
    }

    let question = ctx.question_input.trim().to_owned();
    if question.is_empty() {
        *ctx.coach_error_key = Some("chat-enter-question");
        return Task::none();
    }
    if ctx.analysis.is_none() {
        *ctx.coach_error_key = Some("chat-need-analysis");
        return Task::none();
    }

    *ctx.coach_error_key = None;
    ctx.chat.begin(question);
    Task::none()
}

/// Prefills the question input with a quick question chip's text.
pub fn handle_quick_question(ctx: &mut UpdateContext<'_>, question: String) -> Task<Message> {
    *ctx.question_input = question;
    *ctx.coach_error_key = None;
    Task::none()
}

/// Clears the coach exchange and question input.
///
/// Resetting bumps the session id, which drops the stream subscription
/// and closes any connection still open.
pub fn handle_clear_chat(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.chat.reset();
    ctx.question_input.clear();
    *ctx.coach_error_key = None;
    Task::none()
}

/// Handles one event from the chat stream subscription.
pub fn handle_chat_stream(
    ctx: &mut UpdateContext<'_>,
    session_id: u64,
    event: StreamEvent,
) -> Task<Message> {
    if session_id != ctx.chat.session_id() {
        // Straggler from a cleared or restarted exchange.
        return Task::none();
    }

    match event {
        StreamEvent::Fragment(content) => {
            ctx.chat.append_fragment(&content);
            scroll_transcript_to_bottom()
        }
        StreamEvent::Completed => {
            ctx.chat.complete();
            scroll_transcript_to_bottom()
        }
        StreamEvent::Failed(message) => {
            ctx.chat.fail(message);
            Task::none()
        }
        StreamEvent::ConnectionLost(detail) => {
            tracing::warn!(%detail, "chat stream connection lost");
            ctx.chat.fail(ctx.i18n.tr("chat-connection-lost"));
            Task::none()
        }
    }
}

/// Keeps the newest transcript line visible while the answer grows.
fn scroll_transcript_to_bottom() -> Task<Message> {
    use iced::widget::scrollable::RelativeOffset;
    use iced::widget::{operation, Id};
    operation::snap_to(
        Id::new(coach::TRANSCRIPT_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: 1.0 },
    )
}

/// Switches the UI language and persists the choice.
pub fn handle_language_selected(
    ctx: &mut UpdateContext<'_>,
    locale: LanguageIdentifier,
) -> Task<Message> {
    let tag = locale.to_string();
    ctx.i18n.set_locale(locale);
    persist_config_update(ctx.notifications, |config| {
        config.general.language = Some(tag);
    });
    Task::none()
}

/// Switches the theme mode and persists the choice.
pub fn handle_theme_mode_selected(ctx: &mut UpdateContext<'_>, mode: ThemeMode) -> Task<Message> {
    *ctx.theme_mode = mode;
    persist_config_update(ctx.notifications, |config| {
        config.general.theme_mode = mode;
    });
    Task::none()
}

/// Applies a change to the persisted configuration and saves it.
///
/// A failed save is reported as a warning toast; the in-memory change
/// stays applied either way.
fn persist_config_update(
    notifications: &mut notifications::Manager,
    apply: impl FnOnce(&mut config::Config),
) {
    let (mut current, _) = config::load();
    apply(&mut current);
    if let Err(error) = config::save(&current) {
        tracing::warn!(%error, "failed to persist configuration");
        notifications.push(notifications::Notification::warning(
            "notification-config-save-error",
        ));
    }
}
