// SPDX-License-Identifier: MPL-2.0
//! Serde types matching the backend's JSON payloads.
//!
//! Deserialization is deliberately lenient: every field defaults when
//! absent and unknown fields are ignored, so the client keeps working
//! against servers that add or drop optional fields.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Envelope of a `POST /api/analyze` response. Error replies carry
/// `success: false` (or omit it) together with an `error` message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub analysis: AnalysisResult,
    #[serde(default)]
    pub profession: Profession,
    #[serde(default)]
    pub skills: SkillSets,
    #[serde(default)]
    pub cv_preview: String,
}

/// Scoring portion of an analysis reply.
///
/// `similarity` and `coverage` are ratios in `0.0..=1.0`; `score` is a
/// percentage the server has already clamped to `0..=100`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub similarity: f32,
    #[serde(default)]
    pub coverage: f32,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Resume section name to "present" flag. A `BTreeMap` keeps the
    /// rendered chip order stable across runs.
    #[serde(default)]
    pub sections: BTreeMap<String, bool>,
}

impl AnalysisResult {
    /// Counts of completed sections and total sections, rendered as
    /// the "<done>/<total>" structural summary.
    pub fn sections_summary(&self) -> (usize, usize) {
        let done = self.sections.values().filter(|present| **present).count();
        (done, self.sections.len())
    }
}

/// Profession the server inferred from the resume text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Profession {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

/// The three skill lists an analysis produces.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillSets {
    #[serde(default)]
    pub job_skills: Vec<String>,
    #[serde(default)]
    pub cv_skills: Vec<String>,
    #[serde(default)]
    pub matched_skills: Vec<String>,
}

/// A successful analysis with the envelope stripped off. This is what
/// the app stores and renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOutcome {
    pub analysis: AnalysisResult,
    pub profession: Profession,
    pub skills: SkillSets,
    pub cv_preview: String,
}

/// Reply of the `GET /api/status` health probe.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub has_session: bool,
    #[serde(default)]
    pub profession: String,
}

/// One decoded chat stream event. Exactly one of the three readings
/// applies, checked in order: `error`, then `done`, then a content
/// fragment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatPayload {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default)]
    pub message: Option<ChatChunk>,
}

/// Content carrier inside a chat stream event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatChunk {
    #[serde(default)]
    pub content: String,
}

/// Qualitative band for an overall score, controlling the color the
/// score is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    /// Bands a 0..=100 score: 80 and above is strong, 60 and above is
    /// moderate, anything below is weak.
    pub fn from_score(score: f32) -> Self {
        if score >= 80.0 {
            ScoreBand::Strong
        } else if score >= 60.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}
