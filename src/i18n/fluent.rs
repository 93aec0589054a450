// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else resolves.
pub const DEFAULT_LOCALE: &str = "en";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads translation bundles and resolves the starting locale.
    ///
    /// When `i18n_dir` points at a directory containing `.ftl` files,
    /// those replace the embedded translations entirely; this is the
    /// hook translators use to test drafts without rebuilding.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        if let Some(dir) = i18n_dir.as_deref() {
            load_directory_bundles(Path::new(dir), &mut bundles, &mut available_locales);
        }
        if bundles.is_empty() {
            load_embedded_bundles(&mut bundles, &mut available_locales);
        }
        available_locales.sort_by_key(|locale| locale.to_string());

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the active locale. Unknown locales are ignored so the
    /// app never ends up formatting against a missing bundle.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Resolves `key` in the active locale. Falls back to the default
    /// locale, then to the raw key, so callers always get displayable
    /// text back.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Like [`tr`](Self::tr), interpolating named arguments into the
    /// message pattern.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    /// Display name of a locale, taken from its `language-name-*` key
    /// with the raw tag as fallback.
    pub fn language_label(&self, locale: &LanguageIdentifier) -> String {
        let key = format!("language-name-{}", locale);
        let label = self.tr(&key);
        if label == key {
            locale.to_string()
        } else {
            label
        }
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        for locale in [&self.current_locale, &self.default_locale] {
            if let Some(bundle) = self.bundles.get(locale) {
                if let Some(message) = bundle.get_message(key) {
                    if let Some(pattern) = message.value() {
                        let mut errors = vec![];
                        let value = bundle.format_pattern(pattern, args, &mut errors);
                        if errors.is_empty() {
                            return value.to_string();
                        }
                    }
                }
            }
        }
        key.to_string()
    }
}

fn load_embedded_bundles(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    for file in Asset::iter() {
        let filename = file.as_ref();
        if let Some(locale_str) = filename.strip_suffix(".ftl") {
            if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                if let Some(content) = Asset::get(filename) {
                    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                    add_bundle(locale, source, bundles, available_locales);
                }
            }
        }
    }
}

fn load_directory_bundles(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        tracing::warn!(directory = %dir.display(), "i18n override directory is not readable");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if path.extension().map(|ext| ext == "ftl") != Some(true) {
            continue;
        }
        let Ok(locale) = stem.parse::<LanguageIdentifier>() else {
            continue;
        };
        match std::fs::read_to_string(&path) {
            Ok(source) => add_bundle(locale, source, bundles, available_locales),
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "skipping unreadable translation file");
            }
        }
    }
}

fn add_bundle(
    locale: LanguageIdentifier,
    source: String,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(%locale, ?errors, "translation file parsed with errors");
            resource
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Keep formatted output free of Unicode isolation marks.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "translation file contains duplicate messages");
    }
    bundles.insert(locale.clone(), bundle);
    available_locales.push(locale);
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Some(lang) = match_available(&lang_str, available) {
            return Some(lang);
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Some(lang) = match_available(lang_str, available) {
            return Some(lang);
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Some(lang) = match_available(&os_locale_str, available) {
            return Some(lang);
        }
    }

    None
}

/// Matches a requested tag against the loaded locales: exact match
/// first, then by primary language subtag so `tr-TR` finds `tr`.
fn match_available(
    requested: &str,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let requested: LanguageIdentifier = requested.parse().ok()?;
    if available.contains(&requested) {
        return Some(requested);
    }
    available
        .iter()
        .find(|candidate| candidate.language == requested.language)
        .cloned()
}
