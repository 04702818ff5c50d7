use std::collections::HashMap;

pub mod config;
pub mod error;
pub mod loader;
pub mod locale;
pub mod resolver;
pub mod translator;


pub use config::{TranslatorConfig, VerbosityLevel};
pub use error::{I18nError, Result};
pub use loader::{load_table_from_file, load_tables_from_dir, load_tables_into};
pub use locale::{is_locale_file, is_locale_id};
pub use resolver::{AsyncLocaleResolver, LocaleResolver};
pub use translator::{ReloadOutcome, Translation, Translator};

/// Reserved message key holding the fallback text of a table
pub const DEFAULT_KEY: &str = "@__default__@";

/// Messages of a single locale, keyed by message key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable(pub HashMap<String, String>);

impl TranslationTable {
    pub fn new() -> Self {
        TranslationTable(HashMap::new())
    }
    pub fn with_message(&mut self, key: &str, message: &str) -> &mut Self {
        self.0.insert(key.to_owned(), message.to_owned());
        self
    }
    pub fn get_message(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
    /// The `@__default__@` message, if the table has one
    pub fn default_message(&self) -> Option<&str> {
        self.0.get(DEFAULT_KEY).map(String::as_str)
    }
    pub fn get_messages(&self) -> &HashMap<String, String> {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Translation tables keyed by locale identifier (`en-US`)
pub type TranslationStore = HashMap<String, TranslationTable>;

/// Create an empty translator
pub fn make_translator<C: ?Sized>() -> Translator<C> {
    Translator::new()
}
