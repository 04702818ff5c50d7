use std::path::PathBuf;
use thiserror::Error;

/// Error types for translation loading and lookup
#[derive(Debug, Error)]
pub enum I18nError {
    /// `load_translations` was called before a locale directory was set
    #[error("locale directory must be set before loading translations")]
    MissingLocaleDir,

    /// `translate` was called before a locale resolver was set
    #[error("locale resolver must be set before translate() call")]
    MissingResolver,

    /// A query was made before a successful load
    #[error("translations must be loaded before translate() call")]
    NotLoaded,

    /// The resolved locale has no (non-empty) translation table
    #[error("translation table for locale {0:?} is not set")]
    LocaleNotFound(String),

    /// Neither the message nor the default message exist in the table
    #[error("localisation message {0:?} was not found and @__default__@ message was not set")]
    MessageNotFound(String),

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON from '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON in '{}': root must be an object", .path.display())]
    InvalidTable { path: PathBuf },
}

impl I18nError {
    /// Short, stable name of the error variant
    pub fn kind(&self) -> &'static str {
        match self {
            I18nError::MissingLocaleDir => "MissingLocaleDir",
            I18nError::MissingResolver => "MissingResolver",
            I18nError::NotLoaded => "NotLoaded",
            I18nError::LocaleNotFound(_) => "LocaleNotFound",
            I18nError::MessageNotFound(_) => "MessageNotFound",
            I18nError::Io { .. } => "Io",
            I18nError::Parse { .. } => "Parse",
            I18nError::InvalidTable { .. } => "InvalidTable",
        }
    }

    /// Whether the error comes from an incomplete translator setup
    pub fn is_configuration(&self) -> bool {
        matches!(self, I18nError::MissingLocaleDir | I18nError::MissingResolver)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        I18nError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, I18nError>;
