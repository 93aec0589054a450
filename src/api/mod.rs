// SPDX-License-Identifier: MPL-2.0
//! HTTP client and wire types for the analysis backend.
//!
//! The backend exposes three endpoints: a multipart analysis upload,
//! a Server-Sent Events chat stream, and a health probe. This module
//! owns the request plumbing and the lenient deserialization of their
//! JSON payloads; interpretation of the results belongs to the app
//! layer.

pub mod client;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use types::{
    AnalysisOutcome, AnalysisResult, AnalyzeResponse, ChatChunk, ChatPayload, Profession,
    ScoreBand, SkillSets, StatusResponse,
};
