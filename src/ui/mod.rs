// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page sections
//!
//! - [`header`] - Title row with the language and theme selectors
//! - [`form`] - Job URL and CV inputs feeding the analysis upload
//! - [`results`] - Score, skills gap, report, and resume preview cards
//! - [`coach`] - Streaming career coach transcript and question input
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod coach;
pub mod design_tokens;
pub mod form;
pub mod header;
pub mod notifications;
pub mod results;
pub mod styles;
pub mod theming;
pub mod widgets;
