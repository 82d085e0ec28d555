//! Text Lookup
//!
//! Immutable key -> string tables for both locales. A lookup tries the
//! active locale, then the fallback locale, then returns the key itself,
//! so it never fails.

use std::collections::HashMap;

use crate::error::{DomainError, DomainResult};
use crate::locale::Locale;

const PT_BR_TABLE: &str = include_str!("../locales/pt-BR.json");
const EN_US_TABLE: &str = include_str!("../locales/en-US.json");

/// Translation tables for every supported locale
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    tables: HashMap<Locale, HashMap<String, String>>,
    fallback: Locale,
}

impl Catalog {
    pub fn from_tables(tables: HashMap<Locale, HashMap<String, String>>, fallback: Locale) -> Self {
        Self { tables, fallback }
    }

    /// Build from one flat JSON object per locale
    pub fn from_json(sources: &[(Locale, &str)], fallback: Locale) -> DomainResult<Self> {
        let mut tables = HashMap::new();
        for (locale, source) in sources {
            let table: HashMap<String, String> = serde_json::from_str(source)
                .map_err(|e| DomainError::Catalog(format!("{}: {}", locale, e)))?;
            log::debug!("Loaded {} strings for {}", table.len(), locale);
            tables.insert(*locale, table);
        }
        Ok(Self::from_tables(tables, fallback))
    }

    /// The tables shipped with the app
    pub fn builtin() -> DomainResult<Self> {
        Self::from_json(
            &[(Locale::PtBr, PT_BR_TABLE), (Locale::EnUs, EN_US_TABLE)],
            Locale::FALLBACK,
        )
    }

    pub fn fallback(&self) -> Locale {
        self.fallback
    }

    pub fn lookup<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.entry(locale, key)
            .or_else(|| self.entry(self.fallback, key))
            .unwrap_or(key)
    }

    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator { catalog: self, locale }
    }

    /// Keys defined for `locale`, sorted
    pub fn keys(&self, locale: Locale) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&locale)
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    fn entry(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables.get(&locale)?.get(key).map(String::as_str)
    }
}

/// Catalog bound to one locale
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    locale: Locale,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &'a str) -> &'a str {
        self.catalog.lookup(self.locale, key)
    }

    /// Look up `key` and fill its `{name}` placeholders
    pub fn t_with(&self, key: &'a str, args: &[(&str, &str)]) -> String {
        interpolate(self.t(key), args)
    }
}

/// Replace each `{name}` in `template` with its value; unknown
/// placeholders are left as they are
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}
