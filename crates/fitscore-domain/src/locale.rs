//! Locale Preference
//!
//! The two supported locales and the one preference the app persists.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Storage key holding the locale tag
pub const LOCALE_STORAGE_KEY: &str = "language";

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::PtBr, Locale::EnUs];

    /// Locale used when nothing is stored
    pub const DEFAULT: Locale = Locale::PtBr;

    /// Locale consulted when the active one lacks a key
    pub const FALLBACK: Locale = Locale::EnUs;

    /// BCP 47 tag, also the persisted value
    pub fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    pub fn parse(tag: &str) -> DomainResult<Locale> {
        match tag {
            "pt-BR" => Ok(Locale::PtBr),
            "en-US" => Ok(Locale::EnUs),
            other => Err(DomainError::UnsupportedLocale(other.to_string())),
        }
    }

    /// The other locale
    pub fn toggle(self) -> Locale {
        match self {
            Locale::PtBr => Locale::EnUs,
            Locale::EnUs => Locale::PtBr,
        }
    }

    /// Two-letter label shown on the switcher
    pub fn short_label(self) -> &'static str {
        match self {
            Locale::PtBr => "PT",
            Locale::EnUs => "EN",
        }
    }

    /// Language name in its own language
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::PtBr => "Português",
            Locale::EnUs => "English",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Key-value device storage for user preferences
///
/// Implemented over `localStorage` in the browser and by `MemoryStore` in tests.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// In-memory preference store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the stored locale, falling back to `default` on a miss,
/// an unknown tag or a storage failure
pub fn load_locale(store: &dyn PreferenceStore, key: &str, default: Locale) -> Locale {
    match store.get(key) {
        Ok(Some(tag)) => Locale::parse(&tag).unwrap_or_else(|e| {
            log::warn!("Ignoring stored locale: {}", e);
            default
        }),
        Ok(None) => default,
        Err(e) => {
            log::warn!("Could not read locale preference: {}", e);
            default
        }
    }
}

/// Persist the locale tag
pub fn save_locale(store: &dyn PreferenceStore, key: &str, locale: Locale) -> DomainResult<()> {
    store.set(key, locale.tag())?;
    log::info!("Locale preference set to {}", locale);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> DomainResult<Option<String>> {
            Err(DomainError::Storage("denied".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Storage("denied".to_string()))
        }
    }

    #[test]
    fn test_parse_and_tag() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.tag()), Ok(locale));
        }
        assert!(matches!(Locale::parse("fr-FR"), Err(DomainError::UnsupportedLocale(_))));
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Locale::PtBr.toggle(), Locale::EnUs);
        assert_eq!(Locale::EnUs.toggle().toggle(), Locale::EnUs);
    }

    #[test]
    fn test_load_defaults_when_empty() {
        let store = MemoryStore::new();
        assert_eq!(load_locale(&store, LOCALE_STORAGE_KEY, Locale::DEFAULT), Locale::PtBr);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save_locale(&store, LOCALE_STORAGE_KEY, Locale::EnUs).unwrap();
        assert_eq!(store.get(LOCALE_STORAGE_KEY).unwrap().as_deref(), Some("en-US"));
        assert_eq!(load_locale(&store, LOCALE_STORAGE_KEY, Locale::DEFAULT), Locale::EnUs);
    }

    #[test]
    fn test_load_ignores_garbage_and_failures() {
        let store = MemoryStore::new();
        store.set(LOCALE_STORAGE_KEY, "klingon").unwrap();
        assert_eq!(load_locale(&store, LOCALE_STORAGE_KEY, Locale::DEFAULT), Locale::PtBr);
        assert_eq!(load_locale(&BrokenStore, LOCALE_STORAGE_KEY, Locale::EnUs), Locale::EnUs);
        assert!(save_locale(&BrokenStore, LOCALE_STORAGE_KEY, Locale::EnUs).is_err());
    }

    #[test]
    fn test_serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Locale::EnUs).unwrap(), "\"en-US\"");
        let parsed: Locale = serde_json::from_str("\"pt-BR\"").unwrap();
        assert_eq!(parsed, Locale::PtBr);
    }
}
