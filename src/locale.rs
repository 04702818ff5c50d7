use regex::Regex;
use std::sync::LazyLock;

/// Locale file name pattern: `en-US.json`, `pt-BR.json`
static LOCALE_FILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2}-[A-Z]{2}\.json$").expect("locale file regex should compile")
});

/// Locale identifier pattern: `en-US`, `pt-BR`
static LOCALE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2}-[A-Z]{2}$").expect("locale id regex should compile")
});

/// Length of a locale identifier such as `en-US`
pub const LOCALE_ID_LEN: usize = 5;

/// Check whether a file name is a loadable translation table
pub fn is_locale_file(file_name: &str) -> bool {
    LOCALE_FILE_PATTERN.is_match(file_name)
}

/// Check whether a string is a well-formed locale identifier
///
/// The translator looks up whatever a resolver returns. Hosts can use this to
/// validate resolver output, such as a locale stored in user settings.
pub fn is_locale_id(locale: &str) -> bool {
    LOCALE_ID_PATTERN.is_match(locale)
}

/// Extract the locale identifier from a translation table file name
///
/// Returns `None` when the name does not match the `xx-XX.json` pattern.
/// For example: `en-US.json` -> `"en-US"`
pub fn locale_from_file_name(file_name: &str) -> Option<&str> {
    if is_locale_file(file_name) {
        Some(&file_name[..LOCALE_ID_LEN])
    } else {
        None
    }
}
