use std::collections::HashMap;

/// Language selected before the user picks one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().remove(code)
}

/// The fallback language.
pub fn default_language() -> LanguageInfo {
    LanguageInfo {
        code: DEFAULT_LANGUAGE,
        flag: "🇺🇸",
        translation: include_str!("../translations/en.json"),
        native_name: "English",
    }
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (DEFAULT_LANGUAGE, default_language()),
        (
            "zh-CN",
            LanguageInfo {
                code: "zh-CN",
                flag: "🇨🇳",
                translation: include_str!("../translations/zh-CN.json"),
                native_name: "中文",
            },
        ),
    ])
}

/// Translation documents keyed by language code, as the i18n provider wants them.
pub fn translations() -> HashMap<&'static str, &'static str> {
    supported_languages()
        .into_iter()
        .map(|(code, info)| (code, info.translation))
        .collect()
}
