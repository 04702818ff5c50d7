use crate::config::{TranslatorConfig, VerbosityLevel};
use crate::error::{I18nError, Result};
use crate::loader::load_tables_into;
use crate::resolver::LocaleResolver;
use crate::{TranslationStore, TranslationTable};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// A resolved message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Locale whose table provided the text
    pub locale: String,
    /// True when the text came from the `@__default__@` entry
    pub fell_back: bool,
}

impl Translation {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of [`Translator::reload_translations`]
#[derive(Debug)]
pub enum ReloadOutcome {
    /// The fresh tables replaced the previous ones
    Reloaded { locales: usize },
    /// Loading failed and the previous tables were restored
    RolledBack { error: I18nError },
}

impl ReloadOutcome {
    pub fn is_rolled_back(&self) -> bool {
        matches!(self, ReloadOutcome::RolledBack { .. })
    }
}

/// The message translator
///
/// `C` is the caller's context type, handed to the locale resolver on every
/// [`translate`](Translator::translate) call.
pub struct Translator<C: ?Sized> {
    locale_dir: Option<PathBuf>,
    resolver: Option<LocaleResolver<C>>,
    loaded: bool,
    // Keyed by locale and then by message key
    // e.g. store["en-US"]["greeting"] = "Hello"
    //      store["ru-RU"]["greeting"] = "Привет"
    store: TranslationStore,
    verbosity: VerbosityLevel,
}

impl<C: ?Sized> Default for Translator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Translator<C> {
    pub fn new() -> Self {
        Translator {
            locale_dir: None,
            resolver: None,
            loaded: false,
            store: TranslationStore::new(),
            verbosity: VerbosityLevel::Normal,
        }
    }

    /// Create a translator with the directory and verbosity from `config`
    pub fn from_config(config: &TranslatorConfig) -> Result<Self> {
        let mut translator = Self::new();
        translator
            .set_locale_dir(&config.locale_dir)?
            .with_verbosity(config.verbosity);
        Ok(translator)
    }

    /// Set the locale directory to the absolute, normalized form of `path`
    ///
    /// The directory is not checked. A new directory only takes effect on the
    /// next load.
    pub fn set_locale_dir(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        self.locale_dir = Some(absolute_path(path.as_ref())?);
        Ok(self)
    }

    pub fn locale_dir(&self) -> Option<&Path> {
        self.locale_dir.as_deref()
    }

    pub fn set_locale_resolver(&mut self, resolver: LocaleResolver<C>) -> &mut Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn clear_locale_resolver(&mut self) -> &mut Self {
        self.resolver = None;
        self
    }

    pub fn locale_resolver(&self) -> Option<&LocaleResolver<C>> {
        self.resolver.as_ref()
    }

    /// Set how much is logged on default fallback and reload rollback
    ///
    /// Logging is optional. `Translation::fell_back` and the returned
    /// [`ReloadOutcome`] report these events at every verbosity level.
    pub fn with_verbosity(&mut self, verbosity: VerbosityLevel) -> &mut Self {
        self.verbosity = verbosity;
        self
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Locales currently in the store, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.store.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    pub fn table(&self, locale: &str) -> Option<&TranslationTable> {
        self.store.get(locale)
    }

    /// Load every `xx-XX.json` table from the locale directory
    ///
    /// Tables for locales that are no longer in the directory are kept. If a
    /// file fails to load, the tables read before it stay in the store but the
    /// translator is not marked as loaded.
    ///
    /// # Returns
    /// The number of tables read from the directory
    pub fn load_translations(&mut self) -> Result<usize> {
        let dir = self.locale_dir.as_ref().ok_or(I18nError::MissingLocaleDir)?;

        let count = load_tables_into(dir, &mut self.store)?;
        debug!("loaded {} locale tables from {}", count, dir.display());

        self.loaded = true;
        Ok(count)
    }

    /// Replace the store with a fresh load, keeping the previous tables on failure
    ///
    /// A failed reload never returns an error: the previous tables are restored,
    /// the translator is marked as loaded and a warning is logged.
    pub fn reload_translations(&mut self) -> ReloadOutcome {
        let previous = self.store.clone();
        self.store.clear();
        self.loaded = false;

        match self.load_translations() {
            Ok(locales) => ReloadOutcome::Reloaded { locales },
            Err(error) => {
                self.store = previous;
                self.loaded = true;
                if self.verbosity >= VerbosityLevel::Normal {
                    warn!(
                        "failed to reload translations, falling back to the previous ones; caused by {}: {}",
                        error.kind(),
                        error
                    );
                }
                ReloadOutcome::RolledBack { error }
            }
        }
    }

    /// Translate `message` into the locale resolved for `context`
    ///
    /// Asynchronous resolvers are awaited with no timeout. Falls back to the
    /// `@__default__@` message of the resolved table when `message` is missing.
    ///
    /// # Errors
    /// - No locale resolver set
    /// - Translations not loaded
    /// - No table for the resolved locale
    /// - Neither `message` nor the default message in the table
    pub async fn translate(&self, context: &C, message: &str) -> Result<Translation> {
        let resolver = self.resolver.as_ref().ok_or(I18nError::MissingResolver)?;
        if !self.loaded {
            return Err(I18nError::NotLoaded);
        }

        let locale = resolver.resolve(context).await;
        self.lookup(&locale, message)
    }

    /// Translate `message` into an already known `locale`
    pub fn lookup(&self, locale: &str, message: &str) -> Result<Translation> {
        if !self.loaded {
            return Err(I18nError::NotLoaded);
        }

        let table = self
            .store
            .get(locale)
            .filter(|table| !table.is_empty())
            .ok_or_else(|| I18nError::LocaleNotFound(locale.to_string()))?;

        if let Some(text) = table.get_message(message).filter(|text| !text.is_empty()) {
            return Ok(Translation {
                text: text.clone(),
                locale: locale.to_string(),
                fell_back: false,
            });
        }

        if self.verbosity >= VerbosityLevel::Normal {
            warn!(
                "localisation message was not found for message {:?} in {}, falling back to default",
                message, locale
            );
        }
        if self.verbosity >= VerbosityLevel::Verbose {
            warn!("table {} has {} messages", locale, table.len());
        }

        let text = table
            .default_message()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| I18nError::MessageNotFound(message.to_string()))?;

        Ok(Translation {
            text: text.to_string(),
            locale: locale.to_string(),
            fell_back: true,
        })
    }
}

/// Make `path` absolute and resolve `.` and `..` without touching the filesystem
fn absolute_path(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| I18nError::io(path, e))?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
