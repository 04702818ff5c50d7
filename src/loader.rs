use crate::error::{I18nError, Result};
use crate::locale::locale_from_file_name;
use crate::{TranslationStore, TranslationTable};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Load a translation table from a single JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "greeting": "Hello!",
///     "farewell": "Goodbye!",
///     "@__default__@": "Sorry, this message is not translated yet"
/// }
/// ```
///
/// Non-string values are skipped with a warning.
///
/// # Errors
/// - File read errors
/// - Invalid JSON
/// - JSON root is not an object
pub fn load_table_from_file(path: &Path) -> Result<TranslationTable> {
    let content = fs::read(path).map_err(|e| I18nError::io(path, e))?;

    let json: Value = serde_json::from_slice(&content).map_err(|source| I18nError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(obj) = json else {
        return Err(I18nError::InvalidTable {
            path: path.to_path_buf(),
        });
    };

    let mut table = TranslationTable::new();
    for (key, value) in obj {
        match value {
            Value::String(message) => {
                table.with_message(&key, &message);
            }
            _ => warn!(
                "message '{}' in '{}' is not a string, skipping",
                key,
                path.display()
            ),
        }
    }

    Ok(table)
}

/// Load translation tables from a directory into `store`
///
/// Scans the top level of `dir` for files named like `en-US.json`.
/// The first five characters of the file name are used as the locale.
/// Other entries are skipped.
///
/// Tables already in `store` for locales missing from `dir` are kept.
/// If a file fails to load, the tables loaded before it stay in `store`.
///
/// # Returns
/// The number of tables loaded from `dir`
///
/// # Errors
/// - Directory cannot be read
/// - File read/parse errors
pub fn load_tables_into(dir: &Path, store: &mut TranslationStore) -> Result<usize> {
    let entries = fs::read_dir(dir).map_err(|e| I18nError::io(dir, e))?;

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| I18nError::io(dir, e))?;
        let file_name = entry.file_name();

        let Some(locale) = file_name.to_str().and_then(locale_from_file_name) else {
            trace!("skipping {:?}: not a locale file", file_name);
            continue;
        };

        let table = load_table_from_file(&entry.path())?;
        debug!("loaded {} messages for locale {}", table.len(), locale);
        store.insert(locale.to_string(), table);
        count += 1;
    }

    if count == 0 {
        warn!("no locale files found in directory {}", dir.display());
    }

    Ok(count)
}

/// Load all translation tables from a directory into a fresh store
pub fn load_tables_from_dir(dir: &Path) -> Result<TranslationStore> {
    let mut store = TranslationStore::new();
    load_tables_into(dir, &mut store)?;
    Ok(store)
}
