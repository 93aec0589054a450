// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the form, the analysis client, the
//! coach chat and localization, and translates messages into side
//! effects like config persistence or HTTP requests. This file keeps
//! policy decisions (window sizing, backend resolution, theme mapping)
//! close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::types::AnalysisOutcome;
use crate::api::{self, ApiClient};
use crate::chat::ChatSession;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::validation::{CvSelection, FormIssue};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the submission form, the
/// analysis backend, the coach chat, localization and preferences.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// HTTP client bound to the resolved backend base URL.
    client: ApiClient,
    job_url_input: String,
    /// Selected CV file, kept until replaced by another pick.
    cv_file: Option<CvSelection>,
    /// First validation failure of the latest submit attempt.
    form_error: Option<FormIssue>,
    is_submitting: bool,
    /// Rotation of the submit button spinner, advanced on ticks.
    spinner_rotation: f32,
    /// Latest successful analysis; the results section renders from it.
    analysis: Option<AnalysisOutcome>,
    question_input: String,
    /// Inline hint under the coach input (empty question, no analysis).
    coach_error_key: Option<&'static str>,
    chat: ChatSession,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_submitting", &self.is_submitting)
            .field("has_analysis", &self.analysis.is_some())
            .field("chat_phase", &self.chat.phase)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Spinner advance per tick. Ticks arrive every 100ms, so a full turn
/// takes two seconds.
const SPINNER_STEP: f32 = std::f32::consts::PI / 10.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            client: ApiClient::default(),
            job_url_input: String::new(),
            cv_file: None,
            form_error: None,
            is_submitting: false,
            spinner_rotation: 0.0,
            analysis: None,
            question_input: String::new(),
            coach_error_key: None,
            chat: ChatSession::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the config file and flags and
    /// kicks off a single backend reachability probe.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.general.theme_mode;

        // Backend resolution order: --server flag, config file, default.
        let base_url = flags
            .server
            .clone()
            .or_else(|| config.server.base_url.clone())
            .unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string());
        app.client = ApiClient::new(&base_url).unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to build the HTTP client");
            ApiClient::default()
        });

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        // Probe the backend once at startup; the result is only logged.
        let client = app.client.clone();
        let task = Task::perform(async move { client.status().await }, Message::StatusChecked);

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let chat_sub = subscription::create_chat_subscription(&self.client, &self.chat);
        let tick_sub = subscription::create_tick_subscription(
            self.is_submitting,
            self.notifications.has_notifications(),
        );
        let keyboard_sub = subscription::create_keyboard_subscription();

        Subscription::batch([chat_sub, tick_sub, keyboard_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            theme_mode: &mut self.theme_mode,
            client: &self.client,
            job_url_input: &mut self.job_url_input,
            cv_file: &mut self.cv_file,
            form_error: &mut self.form_error,
            is_submitting: &mut self.is_submitting,
            spinner_rotation: &mut self.spinner_rotation,
            analysis: &mut self.analysis,
            question_input: &mut self.question_input,
            coach_error_key: &mut self.coach_error_key,
            chat: &mut self.chat,
            notifications: &mut self.notifications,
        };

        match message {
            Message::JobUrlChanged(value) => update::handle_job_url_changed(&mut ctx, value),
            Message::PickCvFile => update::handle_pick_cv_file(&mut ctx),
            Message::CvFileSelected(path) => update::handle_cv_file_selected(&mut ctx, path),
            Message::SubmitAnalysis => update::handle_submit_analysis(&mut ctx),
            Message::AnalysisCompleted(result) => {
                update::handle_analysis_completed(&mut ctx, result)
            }
            Message::StatusChecked(result) => update::handle_status_checked(result),
            Message::QuestionChanged(value) => update::handle_question_changed(&mut ctx, value),
            Message::AskQuestion => update::handle_ask_question(&mut ctx),
            Message::QuickQuestionPicked(question) => {
                update::handle_quick_question(&mut ctx, question)
            }
            Message::ClearChat => update::handle_clear_chat(&mut ctx),
            Message::ChatStream((session_id, event)) => {
                update::handle_chat_stream(&mut ctx, session_id, event)
            }
            Message::LanguageSelected(locale) => update::handle_language_selected(&mut ctx, locale),
            Message::ThemeModeSelected(mode) => update::handle_theme_mode_selected(&mut ctx, mode),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                if self.is_submitting {
                    self.spinner_rotation =
                        (self.spinner_rotation + SPINNER_STEP) % (2.0 * std::f32::consts::PI);
                }

                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();

                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            job_url_input: &self.job_url_input,
            cv_file: self.cv_file.as_ref(),
            form_error: self.form_error,
            is_submitting: self.is_submitting,
            spinner_rotation: self.spinner_rotation,
            analysis: self.analysis.as_ref(),
            question_input: &self.question_input,
            coach_error_key: self.coach_error_key,
            chat: &self.chat,
            notifications: &self.notifications,
        })
    }
}
