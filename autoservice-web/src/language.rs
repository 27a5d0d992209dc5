use std::collections::HashMap;

pub const LANGUAGE_KEY: &str = "autoservice.language";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "es",
            LanguageInfo {
                code: "es",
                flag: "🇪🇸",
                translation: include_str!("../translations/es.json"),
                native_name: "Español",
            },
        ),
    ])
}

/// Supported languages ordered by native name, for the selector.
pub fn sorted_languages() -> Vec<LanguageInfo> {
    let mut languages: Vec<_> = supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));
    languages
}

/// Pick the startup language: a saved supported choice, else English.
pub fn initial_language(saved: Option<&str>) -> &'static str {
    saved
        .and_then(get_language_info)
        .map_or(DEFAULT_LANGUAGE, |info| info.code)
}
