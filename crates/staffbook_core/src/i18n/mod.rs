//! Bilingual label catalog.
//!
//! # Responsibility
//! - Resolve label keys to localized strings with key fallback.
//! - Load per-language tables from disk, caching the parsed table in the
//!   blob store under a versioned entry so repeat loads skip the file read.
//! - Notify subscribed components after a language switch.
//!
//! # Invariants
//! - `t()` never fails: unresolved keys echo back verbatim.
//! - A failed table load degrades to the empty table and is logged.

use crate::db::{read_blob, write_blob};
use log::warn;
use rusqlite::Connection;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Bumped whenever the shipped locale files change shape or content, so
/// cache entries written by older builds are ignored rather than served.
const CATALOG_VERSION: u32 = 1;

/// Handle returned by [`Translator::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub type I18nResult<T> = Result<T, I18nError>;

#[derive(Debug)]
pub enum I18nError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for I18nError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "locale file read failed: {err}"),
            Self::Parse(err) => write!(f, "locale table parse failed: {err}"),
        }
    }
}

impl Error for I18nError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for I18nError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for I18nError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Key-to-string lookup for the active language.
///
/// Listeners replace the original's DOM-wide `language-changed` broadcast
/// with an explicit subscription interface: any component that re-renders on
/// a switch registers a callback and keeps the returned id to unsubscribe.
pub struct Translator {
    locale_dir: PathBuf,
    language: String,
    table: HashMap<String, String>,
    listeners: BTreeMap<ListenerId, Box<dyn Fn(&str)>>,
    next_listener: u64,
}

impl Translator {
    /// Creates a translator with no table loaded; every key echoes back
    /// until [`Translator::switch_language`] runs.
    pub fn new(locale_dir: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            locale_dir: locale_dir.into(),
            language: language.into(),
            table: HashMap::new(),
            listeners: BTreeMap::new(),
            next_listener: 0,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Resolves one label key, returning the key itself when unresolved.
    pub fn t(&self, key: &str) -> String {
        self.table
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Resolves a key and substitutes `{placeholder}` markers.
    ///
    /// Used by confirmation descriptions such as `editConfirmDesc`.
    pub fn format(&self, key: &str, substitutions: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (placeholder, value) in substitutions {
            text = text.replace(&format!("{{{placeholder}}}"), value);
        }
        text
    }

    /// Switches the active language and notifies subscribers.
    ///
    /// The parsed table is cached in the blob store under a per-language
    /// versioned entry; a cache hit skips the locale file read entirely.
    /// Any load failure degrades to the empty table so the UI keeps working
    /// with raw keys.
    pub fn switch_language(&mut self, conn: &Connection, language: impl Into<String>) {
        let language = language.into();
        self.table = match self.load_table(conn, &language) {
            Ok(table) => table,
            Err(err) => {
                warn!(
                    "event=i18n_load module=i18n status=degraded lang={language} error={err}"
                );
                HashMap::new()
            }
        };
        self.language = language;

        for listener in self.listeners.values() {
            listener(&self.language);
        }
    }

    /// Registers a language-switch listener; returns its handle.
    pub fn subscribe(&mut self, listener: impl Fn(&str) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Removes one listener; unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn load_table(
        &self,
        conn: &Connection,
        language: &str,
    ) -> I18nResult<HashMap<String, String>> {
        let cache_key = cache_entry_name(language);
        if let Ok(Some(cached)) = read_blob(conn, &cache_key) {
            if let Ok(table) = serde_json::from_str::<HashMap<String, String>>(&cached) {
                return Ok(table);
            }
            // Unreadable cache entries fall through to a fresh file load.
        }

        let raw = std::fs::read_to_string(locale_file(&self.locale_dir, language))?;
        let table = serde_json::from_str::<HashMap<String, String>>(&raw)?;

        if let Err(err) = write_blob(conn, &cache_key, &raw) {
            warn!("event=i18n_cache module=i18n status=skipped lang={language} error={err}");
        }

        Ok(table)
    }
}

fn cache_entry_name(language: &str) -> String {
    format!("i18n.{language}.v{CATALOG_VERSION}")
}

fn locale_file(locale_dir: &Path, language: &str) -> PathBuf {
    locale_dir.join(format!("{language}.json"))
}
