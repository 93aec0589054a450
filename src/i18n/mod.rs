// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files, overridable from a directory
//! - Runtime language switching
//! - Fallback to the default locale, then to the raw key, when a
//!   translation is missing

pub mod fluent;

pub use fluent::I18n;
