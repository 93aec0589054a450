// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{AnalysisOutcome, StatusResponse};
use crate::chat::StreamEvent;
use crate::error::Error;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The job posting URL field changed.
    JobUrlChanged(String),
    /// Open the native file dialog to choose a CV.
    PickCvFile,
    /// Result from the CV file dialog (`None` when cancelled).
    CvFileSelected(Option<PathBuf>),
    /// Submit the current form for analysis.
    SubmitAnalysis,
    /// Result from the analysis upload.
    AnalysisCompleted(Result<AnalysisOutcome, Error>),
    /// Result from the startup health probe.
    StatusChecked(Result<StatusResponse, Error>),
    /// The coach question field changed.
    QuestionChanged(String),
    /// Ask the coach the typed question.
    AskQuestion,
    /// A quick-question chip was clicked; prefills the question input.
    QuickQuestionPicked(String),
    /// Discard the current coach exchange.
    ClearChat,
    /// An event from the streaming chat subscription, tagged with the
    /// session id it belongs to.
    ChatStream((u64, StreamEvent)),
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast expiry and the busy spinner
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `tr`, `en-US`).
    pub lang: Option<String>,
    /// Optional analysis server base URL override.
    pub server: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CAREER_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
