use serde::Deserialize;
use std::path::PathBuf;

/// Verbosity level for warnings emitted during lookup and reload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbosityLevel {
    /// No warnings; `Translation::fell_back` and `ReloadOutcome` still report
    /// fallbacks and rollbacks
    Silent = 0,
    /// Warn on default-message fallback and reload rollback (default)
    #[default]
    Normal = 1,
    /// Also log details about the table used for the fallback
    Verbose = 2,
}

/// Translator settings that can be embedded in a host's JSON config
///
/// ```json
/// {
///     "locale_dir": "./locales",
///     "verbosity": "silent"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslatorConfig {
    pub locale_dir: PathBuf,
    #[serde(default)]
    pub verbosity: VerbosityLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_json() {
        let config: TranslatorConfig =
            serde_json::from_str(r#"{"locale_dir": "locales", "verbosity": "verbose"}"#).unwrap();
        assert_eq!(config.locale_dir, PathBuf::from("locales"));
        assert_eq!(config.verbosity, VerbosityLevel::Verbose);
    }

    #[test]
    fn test_config_default_verbosity() {
        let config: TranslatorConfig =
            serde_json::from_str(r#"{"locale_dir": "/srv/bot/locales"}"#).unwrap();
        assert_eq!(config.verbosity, VerbosityLevel::Normal);
    }

    #[test]
    fn test_config_rejects_unknown_verbosity() {
        let result: Result<TranslatorConfig, _> =
            serde_json::from_str(r#"{"locale_dir": "locales", "verbosity": "loud"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(VerbosityLevel::Verbose > VerbosityLevel::Normal);
        assert!(VerbosityLevel::Normal > VerbosityLevel::Silent);
    }
}
