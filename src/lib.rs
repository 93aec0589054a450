// SPDX-License-Identifier: MPL-2.0
//! `career_lens` is a desktop client for an ATS resume check and AI
//! career coaching backend, built with the Iced GUI framework.
//!
//! It uploads a CV against a job posting URL, renders the match
//! analysis, and streams coaching answers over Server-Sent Events. The
//! crate demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/career_lens/0.1.0")]

pub mod api;
pub mod app;
pub mod chat;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod validation;
