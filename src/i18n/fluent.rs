// SPDX-License-Identifier: MPL-2.0
//! Fluent-based translation loading and lookup.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when neither CLI, config, nor the OS yields a match.
///
/// The catalog ships Spanish-first; every bundled `.ftl` file must keep
/// `es` complete.
const DEFAULT_LOCALE: &str = "es";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the translation table and resolves the session locale.
    ///
    /// Bundled translations are always loaded; `i18n_dir` may point at a
    /// directory of `.ftl` files that override them, so translations can be
    /// checked without rebuilding. Locale resolution order is CLI argument,
    /// config file, OS locale, then [`DEFAULT_LOCALE`].
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let source =
                            String::from_utf8_lossy(content.data.as_ref()).to_string();
                        let res = FluentResource::try_new(source)
                            .expect("Failed to parse bundled FTL file.");
                        let mut bundle = new_bundle(locale.clone());
                        bundle
                            .add_resource(res)
                            .expect("Failed to add bundled resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        if let Some(dir) = &i18n_dir {
            load_override_directory(Path::new(dir), &mut bundles, &mut available_locales);
        }

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .expect("default locale identifier is valid");
        let current_locale = resolve_locale(cli_lang, config.general.language.clone(), &available_locales)
            .unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the session locale; unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Looks up a message with no arguments.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {key}")
    }

    /// Looks up a message and fills its placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut fluent_args = FluentArgs::new();
                    for (name, value) in args {
                        fluent_args.set(*name, *value);
                    }
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, Some(&fluent_args), &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {key}")
    }
}

fn new_bundle(locale: LanguageIdentifier) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![locale]);
    // Formatted values end up in wa.me URLs and the clipboard, where Unicode
    // isolation marks would corrupt the payload.
    bundle.set_use_isolating(false);
    bundle
}

/// Loads `.ftl` files from `dir`, replacing bundled locales of the same name.
///
/// Unreadable or unparseable files are skipped; a partially parseable file is
/// used for whatever messages it does define.
fn load_override_directory(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("ftl") {
            continue;
        }
        let Some(locale_str) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            continue;
        };
        let Ok(source) = std::fs::read_to_string(&path) else {
            continue;
        };

        let res = match FluentResource::try_new(source) {
            Ok(res) => res,
            Err((partial, _errors)) => partial,
        };
        let mut bundle = new_bundle(locale.clone());
        let _ = bundle.add_resource(res);

        if !available_locales.contains(&locale) {
            available_locales.push(locale.clone());
        }
        bundles.insert(locale, bundle);
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if let Some(matched) = match_available(&lang, available) {
                return Some(matched);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = config_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if let Some(matched) = match_available(&lang, available) {
                return Some(matched);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if let Some(matched) = match_available(&os_lang, available) {
                return Some(matched);
            }
        }
    }

    None
}

/// Matches a candidate against the available locales, falling back from an
/// exact match to a shared language subtag (`es-CO` matches `es`).
fn match_available(
    candidate: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(candidate) {
        return Some(candidate.clone());
    }
    available
        .iter()
        .find(|locale| locale.language == candidate.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_language(language: Option<&str>) -> Config {
        let mut config = Config::default();
        config.general.language = language.map(str::to_string);
        config
    }

    fn locales(ids: &[&str]) -> Vec<LanguageIdentifier> {
        ids.iter().map(|id| id.parse().unwrap()).collect()
    }

    #[test]
    fn cli_language_wins_over_config() {
        let available = locales(&["es", "en"]);
        let lang = resolve_locale(Some("en".to_string()), Some("es".to_string()), &available);
        assert_eq!(lang, Some("en".parse().unwrap()));
    }

    #[test]
    fn regional_variant_falls_back_to_language_subtag() {
        let available = locales(&["es", "en"]);
        let lang = resolve_locale(Some("en-GB".to_string()), None, &available);
        assert_eq!(lang, Some("en".parse().unwrap()));
    }

    #[test]
    fn unavailable_cli_language_falls_through_to_config() {
        let available = locales(&["es", "en"]);
        let lang = resolve_locale(Some("zz".to_string()), Some("en".to_string()), &available);
        assert_eq!(lang, Some("en".parse().unwrap()));
    }

    #[test]
    fn spanish_is_the_default_locale() {
        let i18n = I18n::new(Some("es".to_string()), None, &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "es");
        assert_eq!(i18n.tr("notification-code-copied"), "¡Código copiado!");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::new(Some("es".to_string()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_interpolate_without_isolation_marks() {
        let i18n = I18n::new(Some("es".to_string()), None, &Config::default());

        let price = i18n.tr_with_args("price-single", &[("price", "$12.000")]);

        assert_eq!(price, "1 unidad: $12.000");
        assert!(!price.contains('\u{2068}'));
        assert!(!price.contains('\u{2069}'));
    }

    #[test]
    fn order_message_matches_storefront_wording() {
        let i18n = I18n::new(Some("es".to_string()), None, &Config::default());

        let message = i18n.tr_with_args(
            "whatsapp-message",
            &[("name", "Calavera"), ("code", "M01")],
        );

        assert_eq!(
            message,
            "¡Hola! Me interesa la máscara Calavera (Código: M01). ¿Está disponible?"
        );
    }

    #[test]
    fn set_locale_switches_translations() {
        let mut i18n = I18n::new(Some("es".to_string()), None, &Config::default());

        i18n.set_locale("en".parse().unwrap());
        assert_eq!(i18n.tr("notification-code-copied"), "Code copied!");

        // Unknown locales are ignored.
        i18n.set_locale("zz".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn config_language_applies_when_no_cli_flag() {
        let config = config_with_language(Some("en"));
        let i18n = I18n::new(None, None, &config);
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn override_directory_replaces_bundled_messages() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("es.ftl"),
            "window-title = Catálogo de prueba\n",
        )
        .expect("write override");

        let i18n = I18n::new(
            Some("es".to_string()),
            Some(dir.path().to_string_lossy().to_string()),
            &Config::default(),
        );

        assert_eq!(i18n.tr("window-title"), "Catálogo de prueba");
        // Messages absent from the override file are gone, not inherited.
        assert_eq!(i18n.tr("copy-code"), "MISSING: copy-code");
    }
}
